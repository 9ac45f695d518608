use chrono::{Duration, NaiveDateTime};

use crate::record::DropReason;

const SOURCE_FORMAT: &str = "%m/%d/%y %I:%M:%S %p";
const TARGET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// source data is three hours behind the target zone
const OFFSET_HOURS: i64 = 3;

/// Convert a `M/D/YY H:MM:SS AM|PM` token (components possibly unpadded) to
/// ISO-8601 with the fixed offset applied.
///
/// A replacement character in the token drops the record; a token that does
/// not match the pattern after padding is a malformed-field condition
/// resolved by the parse policy.
pub fn normalize_timestamp(token: &str) -> Result<String, DropReason> {
    if super::has_replacement_char(token) {
        return Err(DropReason::CorruptField("timestamp"));
    }
    let padded = pad_components(token).ok_or_else(|| malformed(token))?;
    let parsed =
        NaiveDateTime::parse_from_str(&padded, SOURCE_FORMAT).map_err(|_| malformed(token))?;
    let shifted = parsed + Duration::hours(OFFSET_HOURS);
    Ok(shifted.format(TARGET_FORMAT).to_string())
}

fn malformed(token: &str) -> DropReason {
    DropReason::Malformed {
        field: "timestamp",
        token: token.to_string(),
    }
}

// rebuild the token with every 1-digit component zero-padded to 2
fn pad_components(token: &str) -> Option<String> {
    let mut parts = token.split(' ');
    let date = parts.next()?;
    let time = parts.next()?;
    let meridiem = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let date: Vec<&str> = date.split('/').collect();
    let time: Vec<&str> = time.split(':').collect();
    if date.len() != 3 || time.len() != 3 {
        return None;
    }

    let pad = |s: &str| {
        if s.len() == 1 {
            format!("0{s}")
        } else {
            s.to_string()
        }
    };
    Some(format!(
        "{}/{}/{} {}:{}:{} {}",
        pad(date[0]),
        pad(date[1]),
        pad(date[2]),
        pad(time[0]),
        pad(time[1]),
        pad(time[2]),
        meridiem
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_and_shifts() {
        assert_eq!(
            normalize_timestamp("3/4/21 2:05:09 PM").as_deref(),
            Ok("2021-03-04T17:05:09")
        );
    }

    #[test]
    fn already_padded_input() {
        assert_eq!(
            normalize_timestamp("11/21/85 12:00:01 AM").as_deref(),
            Ok("1985-11-21T03:00:01")
        );
    }

    #[test]
    fn offset_rolls_over_midnight() {
        assert_eq!(
            normalize_timestamp("12/31/16 11:59:59 PM").as_deref(),
            Ok("2017-01-01T02:59:59")
        );
    }

    #[test]
    fn replacement_char_is_corrupt() {
        assert_eq!(
            normalize_timestamp("3/4/2\u{FFFD} 2:05:09 PM"),
            Err(DropReason::CorruptField("timestamp"))
        );
    }

    #[test]
    fn bad_shape_is_malformed() {
        assert!(matches!(
            normalize_timestamp("2021-03-04T17:05:09"),
            Err(DropReason::Malformed { field: "timestamp", .. })
        ));
        assert!(matches!(
            normalize_timestamp("13/45/21 2:05:09 PM"),
            Err(DropReason::Malformed { .. })
        ));
    }
}
