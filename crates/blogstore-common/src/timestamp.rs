//! Offset-aware timestamp helpers.
//!
//! Publication dates keep the offset they were written with. Storage holds
//! the absolute instant in microseconds since the Unix epoch (used for
//! comparisons) and the offset in seconds; together they rebuild the exact
//! value. An RFC 3339 text copy is kept for display.

use chrono::{DateTime, FixedOffset, SecondsFormat, SubsecRound};

use crate::error::{Error, Result};

/// Timestamp with an explicit UTC offset.
pub type Timestamp = DateTime<FixedOffset>;

/// Parse an RFC 3339 timestamp. A missing offset is rejected.
pub fn parse_timestamp(input: &str) -> Result<Timestamp> {
    DateTime::parse_from_rfc3339(input.trim())
        .map_err(|e| Error::validation(format!("invalid timestamp '{input}': {e}")))
}

/// Drop precision below one microsecond.
pub fn truncate_to_micros(ts: Timestamp) -> Timestamp {
    ts.trunc_subsecs(6)
}

/// Human-readable text form kept alongside the stored instant.
///
/// Display only: offsets are written to the minute and years outside
/// 0..=9999 are not RFC 3339, so values are never parsed back from it.
pub fn to_storage_string(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

/// Absolute instant in microseconds, rounded toward the past.
pub fn micros_floor(ts: &Timestamp) -> i64 {
    ts.timestamp_micros()
}

/// Absolute instant in microseconds, rounded toward the future.
pub fn micros_ceil(ts: &Timestamp) -> i64 {
    let floor = ts.timestamp_micros();
    if ts.timestamp_subsec_nanos() % 1_000 == 0 {
        floor
    } else {
        floor + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_offset() {
        let ts = parse_timestamp("2024-03-01T10:00:00+03:00").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), 3 * 3600);

        let utc = parse_timestamp("2024-03-01T07:00:00+00:00").unwrap();
        assert_eq!(ts, utc);
    }

    #[test]
    fn test_parse_rejects_naive() {
        assert!(parse_timestamp("2024-03-01T10:00:00").is_err());
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_storage_string_roundtrip() {
        let ts = parse_timestamp("2024-03-01T10:00:00.123456-05:30").unwrap();
        let text = to_storage_string(&ts);
        assert_eq!(text, "2024-03-01T10:00:00.123456-05:30");

        let back = parse_timestamp(&text).unwrap();
        assert_eq!(back, ts);
        assert_eq!(back.offset(), ts.offset());
    }

    #[test]
    fn test_truncate_to_micros() {
        let ts = parse_timestamp("2024-03-01T10:00:00.123456789+00:00").unwrap();
        let truncated = truncate_to_micros(ts);
        assert_eq!(truncated.timestamp_subsec_nanos(), 123_456_000);
    }

    #[test]
    fn test_micros_rounding() {
        let exact = parse_timestamp("1970-01-01T00:00:01+00:00").unwrap();
        assert_eq!(micros_floor(&exact), 1_000_000);
        assert_eq!(micros_ceil(&exact), 1_000_000);

        let between = parse_timestamp("1970-01-01T00:00:01.0000005+00:00").unwrap();
        assert_eq!(micros_floor(&between), 1_000_000);
        assert_eq!(micros_ceil(&between), 1_000_001);
    }

    #[test]
    fn test_micros_is_offset_independent() {
        let a = parse_timestamp("2024-03-01T10:00:00+03:00").unwrap();
        let b = parse_timestamp("2024-03-01T07:00:00Z").unwrap();
        assert_eq!(micros_floor(&a), micros_floor(&b));
    }
}
