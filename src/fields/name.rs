/// Upper-case the name. Idempotent, never rejects.
pub fn normalize_name(token: &str) -> String {
    token.to_uppercase()
}
