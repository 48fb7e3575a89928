//! UTC offset resolution for IANA timezone identifiers.
//!
//! The resolver works in two steps, mirroring how a browser exposes the
//! value through `Intl.DateTimeFormat`'s `shortOffset` name:
//!
//! 1. [`offset_label`] looks the zone up in the IANA database and formats the
//!    offset in effect at the given instant (`GMT`, `GMT+5:30`, `GMT-8`).
//! 2. [`parse_offset_label`] extracts sign, hours and optional minutes from
//!    such a label and returns signed fractional hours.
//!
//! [`resolve`] composes both and never fails: unknown zones and labels
//! without an offset token resolve to `0.0` (UTC).
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//!
//! let at = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
//! assert_eq!(tz_offset::resolve("Asia/Kolkata", at), 5.5);
//! assert_eq!(tz_offset::resolve("Not/AZone", at), 0.0);
//! ```

mod label;
mod resolver;

pub use label::{format_offset_label, parse_offset_label};
pub use resolver::{
    describe, offset_label, resolve, resolve_now, try_resolve, TimezoneOffset,
};
