//! Instant parsing for `at=` style query parameters.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Parse an instant from an ISO 8601 string.
///
/// Accepts RFC 3339 (`2024-01-15T12:00:00Z`, `2024-01-15T12:00:00+05:30`),
/// a naive datetime (assumed UTC), a bare date (midnight UTC), or the
/// keyword `now`.
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>, InstantParseError> {
    let s = s.trim();

    if s.eq_ignore_ascii_case("now") {
        return Ok(Utc::now());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&ndt));
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(ndt) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&ndt));
        }
    }

    Err(InstantParseError::InvalidFormat(s.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum InstantParseError {
    #[error("Invalid instant format: {0}")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let dt = parse_instant("2024-01-15T12:00:00+05:30").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 6, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_and_date() {
        let dt = parse_instant("2024-07-01T08:15:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 7, 1, 8, 15, 0).unwrap());

        let dt = parse_instant("2024-07-01").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            parse_instant("yesterday"),
            Err(InstantParseError::InvalidFormat(_))
        ));
    }
}
