use thiserror::Error;

use crate::fields::duration::format_seconds;

/// One fully normalized row. The input's TotalDuration column is consumed
/// during parsing and never stored; the output value is always recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub timestamp: String,
    pub address: String,
    pub zipcode: String,
    pub name: String,
    pub foo_duration: f64,
    pub bar_duration: f64,
    /// Unparsed remainder of the line, line terminator included.
    pub notes: String,
}

impl Record {
    pub fn total_duration(&self) -> f64 {
        self.foo_duration + self.bar_duration
    }

    /// Comma-join the normalized fields, followed by the verbatim notes
    /// remainder.
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{}",
            self.timestamp,
            self.address,
            self.zipcode,
            self.name,
            format_seconds(self.foo_duration),
            format_seconds(self.bar_duration),
            format_seconds(self.total_duration()),
            self.notes
        )
    }
}

/// Why a row was excluded from the output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropReason {
    #[error("replacement character in {0}")]
    CorruptField(&'static str),

    #[error("row ends before the {0} field")]
    ShortRow(&'static str),

    #[error("unterminated {0} quote in address")]
    UnterminatedQuote(char),

    #[error("malformed {field}: {token:?}")]
    Malformed {
        field: &'static str,
        token: String,
    },
}

impl DropReason {
    /// Shape errors are the class the original tool aborted on; strict mode
    /// restores that behavior.
    pub fn is_shape_error(&self) -> bool {
        matches!(self, DropReason::Malformed { .. })
    }
}

/// What to do with a row that failed to normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Drop the row with a warning and keep going.
    Drop,
    /// Abort the run on malformed timestamp/duration shapes. Corrupt-field
    /// and structural drops still only drop the row.
    Strict,
}

impl ParsePolicy {
    pub fn drops(self, reason: &DropReason) -> bool {
        match self {
            ParsePolicy::Drop => true,
            ParsePolicy::Strict => !reason.is_shape_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record {
            timestamp: "2021-01-02T17:05:09".to_string(),
            address: "123 Main St".to_string(),
            zipcode: "00042".to_string(),
            name: "JANE DOE".to_string(),
            foo_duration: 10.0,
            bar_duration: 5.0,
            notes: "note text\n".to_string(),
        }
    }

    #[test]
    fn total_is_recomputed_from_parts() {
        assert_eq!(sample().total_duration(), 15.0);
    }

    #[test]
    fn line_layout() {
        assert_eq!(
            sample().to_line(),
            "2021-01-02T17:05:09,123 Main St,00042,JANE DOE,10.0,5.0,15.0,note text\n"
        );
    }

    #[test]
    fn strict_policy_escalates_only_shape_errors() {
        let shape = DropReason::Malformed {
            field: "timestamp",
            token: "bogus".to_string(),
        };
        let corrupt = DropReason::CorruptField("timestamp");

        assert!(!ParsePolicy::Strict.drops(&shape));
        assert!(ParsePolicy::Strict.drops(&corrupt));
        assert!(ParsePolicy::Drop.drops(&shape));
        assert!(ParsePolicy::Drop.drops(&corrupt));
    }
}
