use anyhow::anyhow;
use memchr::memchr_iter;
use tracing::{debug, info, warn};
use unicode_normalization::UnicodeNormalization;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::fields::{duration, name, timestamp, zipcode};
use crate::record::{DropReason, ParsePolicy, Record};
use crate::tokenizer::Tokenizer;

/// Lossy-decode one raw line and canonicalize it with NFKC.
fn decode_line(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).nfkc().collect()
}

/// Normalize one decoded, non-header line into a [`Record`].
pub fn normalize_line(line: &str) -> Result<Record, DropReason> {
    let mut fields = Tokenizer::new(line);

    let timestamp = timestamp::normalize_timestamp(fields.field("timestamp")?)?;
    debug!(%timestamp, "timestamp converted");

    let address = fields.address()?;
    debug!(%address, "address acquired");

    let zipcode = zipcode::normalize_zip(fields.field("zipcode")?);
    debug!(%zipcode, "zipcode normalized");

    let name = name::normalize_name(fields.field("name")?);
    debug!(%name, "name normalized");

    let foo_duration = duration::normalize_duration("fooDuration", fields.field("fooDuration")?)?;
    let bar_duration = duration::normalize_duration("barDuration", fields.field("barDuration")?)?;
    debug!(foo_duration, bar_duration, "durations converted");

    // the input's totalDuration is consumed and discarded; the output value
    // is always recomputed from the two parts
    fields.field("totalDuration")?;

    Ok(Record {
        timestamp,
        address,
        zipcode,
        name,
        foo_duration,
        bar_duration,
        notes: fields.remainder().to_string(),
    })
}

/// Normalize a whole input buffer: the header line is passed through
/// verbatim, every other line is either normalized or dropped per `policy`.
pub fn normalize(input: &[u8], policy: ParsePolicy) -> anyhow::Result<String> {
    let lines = split_lines(input);
    let Some((header, rows)) = lines.split_first() else {
        return Ok(String::new());
    };

    let mut output = String::with_capacity(input.len());
    output.push_str(&String::from_utf8_lossy(header));

    info!(rows = rows.len(), "reading input from stdin");
    let outcomes = normalize_rows(rows);

    for (i, outcome) in outcomes.into_iter().enumerate() {
        // 1-based, counting the header
        let line_no = i + 2;
        match outcome {
            Ok(record) => {
                info!(line = line_no, "processed line");
                output.push_str(&record.to_line());
            }
            Err(reason) if policy.drops(&reason) => {
                warn!(line = line_no, %reason, "dropping line from output");
            }
            Err(reason) => {
                return Err(anyhow!("line {line_no}: {reason}"));
            }
        }
    }

    info!("writing output to stdout");
    Ok(output)
}

#[cfg(not(feature = "parallel"))]
fn normalize_rows(rows: &[&[u8]]) -> Vec<Result<Record, DropReason>> {
    rows.iter()
        .map(|raw| normalize_line(&decode_line(raw)))
        .collect()
}

#[cfg(feature = "parallel")]
fn normalize_rows(rows: &[&[u8]]) -> Vec<Result<Record, DropReason>> {
    rows.par_iter()
        .map(|raw| normalize_line(&decode_line(raw)))
        .collect()
}

// line slices keep their terminators so notes stay byte-for-byte intact
fn split_lines(input: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    for nl in memchr_iter(b'\n', input) {
        lines.push(&input[start..=nl]);
        start = nl + 1;
    }
    if start < input.len() {
        lines.push(&input[start..]);
    }
    lines
}
