//! Capture timestamp normalisation.
//!
//! The mat software writes `datetime.now().astimezone().isoformat()`, e.g.
//! `2023-03-04T10:15:02.25+05:30`. The offset is discarded and the
//! fractional field forced to six digits before parsing as naive local time.

use chrono::NaiveDateTime;

use crate::error::{AnalysisError, Result};

const OFFSET_LEN: usize = 6;
const NORMALISED_LEN: usize = 26;
const PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const LABEL_FORMAT: &str = "%d %b %Y %H:%M:%S%.6f";

fn invalid(value: &str, reason: impl Into<String>) -> AnalysisError {
    AnalysisError::InvalidTimestamp {
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Strip the `±HH:MM` offset and pad or truncate to `YYYY-MM-DDTHH:MM:SS.ffffff`.
pub fn normalise(raw: &str) -> Result<String> {
    if !raw.is_ascii() {
        return Err(invalid(raw, "non-ASCII characters"));
    }
    if raw.len() <= OFFSET_LEN {
        return Err(invalid(raw, "too short to carry a timezone offset"));
    }

    let (body, offset) = raw.split_at(raw.len() - OFFSET_LEN);
    let offset = offset.as_bytes();
    let well_formed = matches!(offset[0], b'+' | b'-')
        && offset[1].is_ascii_digit()
        && offset[2].is_ascii_digit()
        && offset[3] == b':'
        && offset[4].is_ascii_digit()
        && offset[5].is_ascii_digit();
    if !well_formed {
        return Err(invalid(raw, "expected a trailing ±HH:MM offset"));
    }

    let mut normalised: String = body.chars().take(NORMALISED_LEN).collect();
    while normalised.len() < NORMALISED_LEN {
        normalised.push('0');
    }
    Ok(normalised)
}

/// Parse a raw capture timestamp into naive local time.
pub fn parse(raw: &str) -> Result<NaiveDateTime> {
    let normalised = normalise(raw)?;
    NaiveDateTime::parse_from_str(&normalised, PARSE_FORMAT)
        .map_err(|err| invalid(raw, err.to_string()))
}

/// Display form used in tables and reports.
pub fn label(at: &NaiveDateTime) -> String {
    at.format(LABEL_FORMAT).to_string()
}

/// Seconds elapsed from `origin` to `at`.
pub fn seconds_since(origin: &NaiveDateTime, at: &NaiveDateTime) -> f64 {
    let delta = at.signed_duration_since(*origin);
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0,
        None => delta.num_milliseconds() as f64 / 1_000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn pads_short_fraction() {
        let n = normalise("2023-03-04T10:15:02.25+05:30").unwrap();
        assert_eq!(n, "2023-03-04T10:15:02.250000");
    }

    #[test]
    fn truncates_long_fraction() {
        let n = normalise("2023-03-04T10:15:02.123456789-04:00").unwrap();
        assert_eq!(n, "2023-03-04T10:15:02.123456");
    }

    #[test]
    fn parse_ignores_offset() {
        let a = parse("2023-03-04T10:15:02.500000+00:00").unwrap();
        let b = parse("2023-03-04T10:15:02.500000+09:00").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.nanosecond(), 500_000_000);
    }

    #[test]
    fn rejects_missing_fraction() {
        assert!(parse("2023-03-04T10:15:02+00:00").is_err());
    }

    #[test]
    fn rejects_utc_suffix() {
        assert!(parse("2023-03-04T10:15:02.500000Z").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("yesterday").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn label_uses_month_name() {
        let at = parse("2023-03-04T10:15:02.25+05:30").unwrap();
        assert_eq!(label(&at), "04 Mar 2023 10:15:02.250000");
    }

    #[test]
    fn seconds_since_is_fractional() {
        let a = parse("2023-03-04T10:15:02.000000+00:00").unwrap();
        let b = parse("2023-03-04T10:15:03.250000+00:00").unwrap();
        assert_eq!(seconds_since(&a, &b), 1.25);
    }
}
