/// Canonical zip codes are exactly 5 characters: left-padded with zeros when
/// shorter, last 5 characters kept when longer. Never rejects.
pub fn normalize_zip(token: &str) -> String {
    let len = token.chars().count();
    if len < 5 {
        let mut zip = "0".repeat(5 - len);
        zip.push_str(token);
        zip
    } else if len > 5 {
        token.chars().skip(len - 5).collect()
    } else {
        token.to_string()
    }
}
