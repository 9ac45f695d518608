use crate::record::DropReason;

/// Convert a `HH:MM:SS.mmm` token to floating-point seconds.
///
/// A replacement character in the token drops the record; a token that does
/// not match the shape is a malformed-field condition resolved by the parse
/// policy. `field` names the column for diagnostics.
pub fn normalize_duration(field: &'static str, token: &str) -> Result<f64, DropReason> {
    if super::has_replacement_char(token) {
        return Err(DropReason::CorruptField(field));
    }
    parse_seconds(token).ok_or_else(|| DropReason::Malformed {
        field,
        token: token.to_string(),
    })
}

// millis are a count of thousandths whatever their digit width, so "5" is
// 0.005 seconds, not 0.5
fn parse_seconds(token: &str) -> Option<f64> {
    let mut parts = token.split(':');
    let hours: i64 = parts.next()?.parse().ok()?;
    let minutes: i64 = parts.next()?.parse().ok()?;
    let seconds = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    let (whole, millis) = seconds.split_once('.')?;
    let whole: i64 = whole.parse().ok()?;
    let millis: f64 = millis.parse().ok()?;
    Some((hours * 3600 + minutes * 60 + whole) as f64 + millis / 1000.0)
}

/// Render seconds the way the output schema expects: shortest round-trip
/// form, with a trailing `.0` kept on integral values.
pub fn format_seconds(secs: f64) -> String {
    if secs.fract() == 0.0 {
        format!("{secs:.1}")
    } else {
        secs.to_string()
    }
}
