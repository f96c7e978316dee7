//! Time related utils.

use crate::{Error, Result};
use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Seconds since the unix epoch of the given time.
pub fn unix_timestamp(t: DateTime) -> i64 {
    t.timestamp()
}

/// Build a datetime from seconds since the unix epoch.
pub fn from_unix_timestamp(secs: i64) -> Result<DateTime> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| Error::unexpected(format!("timestamp {secs} is out of range")))
}

/// Parse a string carrying its own UTC offset with the given `strftime` format.
///
/// ```
/// use chirpsign_core::time::parse_with_offset;
///
/// let t = parse_with_offset("Fri Jan 01 00:00:00 +0000 2021", "%a %b %d %H:%M:%S %z %Y").unwrap();
/// assert_eq!(t.timestamp(), 1609459200);
/// ```
pub fn parse_with_offset(s: &str, format: &str) -> Result<DateTime> {
    chrono::DateTime::parse_from_str(s, format)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| {
            Error::unexpected(format!("failed to parse time {s:?}")).with_source(anyhow::Error::new(e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unix_timestamp_roundtrip() {
        let t = from_unix_timestamp(1609459200).unwrap();
        assert_eq!(unix_timestamp(t), 1609459200);
        assert_eq!(t.to_rfc3339(), "2021-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_with_offset_normalizes_to_utc() {
        let t = parse_with_offset("Fri Jan 01 02:00:00 +0200 2021", "%a %b %d %H:%M:%S %z %Y")
            .unwrap();
        assert_eq!(t.timestamp(), 1609459200);
    }

    #[test]
    fn test_parse_with_offset_invalid() {
        assert!(parse_with_offset("yesterday", "%a %b %d %H:%M:%S %z %Y").is_err());
    }
}
