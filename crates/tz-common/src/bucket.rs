//! Whole-hour UTC offset buckets used for grouping and coloring.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Westernmost UTC offset (hours) covered by the bands and palettes.
pub const MIN_OFFSET: i32 = -12;

/// Easternmost UTC offset (hours) covered by the bands and palettes.
pub const MAX_OFFSET: i32 = 14;

/// A UTC offset rounded to the nearest whole hour, always within
/// `MIN_OFFSET..=MAX_OFFSET`.
///
/// Fractional zones collapse into their nearest band: 5.5 becomes 6, 5.75
/// becomes 6, -3.5 becomes -3 (halves round toward positive infinity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HourBucket(i32);

impl HourBucket {
    pub const UTC: HourBucket = HourBucket(0);

    /// Bucket a (possibly fractional) offset in hours. NaN maps to UTC.
    pub fn from_offset(hours: f64) -> Self {
        if hours.is_nan() {
            return Self::UTC;
        }
        let rounded = (hours + 0.5).floor();
        let clamped = rounded.clamp(MIN_OFFSET as f64, MAX_OFFSET as f64);
        HourBucket(clamped as i32)
    }

    /// Bucket a whole-hour offset, clamping into range.
    pub fn from_hour(hour: i32) -> Self {
        HourBucket(hour.clamp(MIN_OFFSET, MAX_OFFSET))
    }

    pub fn hour(self) -> i32 {
        self.0
    }

    /// Position within `MIN_OFFSET..=MAX_OFFSET`, starting at zero.
    pub fn index(self) -> usize {
        (self.0 - MIN_OFFSET) as usize
    }

    /// All buckets from west to east.
    pub fn all() -> impl Iterator<Item = HourBucket> {
        (MIN_OFFSET..=MAX_OFFSET).map(HourBucket)
    }

    /// Human-readable label, e.g. `UTC±0`, `UTC+9`, `UTC-5`.
    pub fn label(self) -> String {
        band_label(self.0)
    }
}

impl From<HourBucket> for i32 {
    fn from(b: HourBucket) -> Self {
        b.0
    }
}

impl fmt::Display for HourBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Label for a whole-hour offset band.
pub fn band_label(offset: i32) -> String {
    match offset {
        0 => "UTC±0".to_string(),
        o if o > 0 => format!("UTC+{}", o),
        o => format!("UTC{}", o),
    }
}
