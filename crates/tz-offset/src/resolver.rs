//! Offset lookup against the IANA timezone database.

use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::debug;

use tz_common::{HourBucket, TzMapError, TzMapResult};

use crate::label::{format_offset_label, parse_offset_label};

fn lookup(tzid: &str) -> TzMapResult<Tz> {
    tzid.parse::<Tz>()
        .map_err(|_| TzMapError::UnknownTimezone(tzid.to_string()))
}

/// Short offset label in effect for `tzid` at `at`, e.g. `GMT+5:30`.
pub fn offset_label(tzid: &str, at: DateTime<Utc>) -> TzMapResult<String> {
    let tz = lookup(tzid)?;
    let offset = tz.offset_from_utc_datetime(&at.naive_utc()).fix();
    Ok(format_offset_label(offset.local_minus_utc()))
}

/// Resolve the UTC offset in hours, reporting unknown zones as errors.
pub fn try_resolve(tzid: &str, at: DateTime<Utc>) -> TzMapResult<f64> {
    offset_label(tzid, at).map(|label| parse_offset_label(&label))
}

/// Resolve the UTC offset in hours of `tzid` at `at`.
///
/// Unknown identifiers resolve to `0.0`.
pub fn resolve(tzid: &str, at: DateTime<Utc>) -> f64 {
    match try_resolve(tzid, at) {
        Ok(hours) => hours,
        Err(e) => {
            debug!(tzid = %tzid, error = %e, "Falling back to UTC offset");
            metrics::counter!("tzmap_offset_fallbacks_total").increment(1);
            0.0
        }
    }
}

/// Resolve the UTC offset in hours of `tzid` right now.
pub fn resolve_now(tzid: &str) -> f64 {
    resolve(tzid, Utc::now())
}

/// Summary of a zone's offset at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimezoneOffset {
    pub tzid: String,
    /// `GMT`-style label; `GMT` for unknown zones.
    pub label: String,
    pub utc_offset: f64,
    pub utc_hour: HourBucket,
    /// False when the identifier is not in the timezone database.
    pub known: bool,
}

/// Describe `tzid` at `at`, applying the same fallback as [`resolve`].
pub fn describe(tzid: &str, at: DateTime<Utc>) -> TimezoneOffset {
    let (label, known) = match offset_label(tzid, at) {
        Ok(label) => (label, true),
        Err(_) => (format_offset_label(0), false),
    };
    let utc_offset = parse_offset_label(&label);

    TimezoneOffset {
        tzid: tzid.to_string(),
        label,
        utc_offset,
        utc_hour: HourBucket::from_offset(utc_offset),
        known,
    }
}
