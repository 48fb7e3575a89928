//! Hover focus: which UTC hour is highlighted, and the filters that show it.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::trace;
use tz_common::HourBucket;

/// Filter value that matches no feature. Offsets never leave -12..=14.
pub const NO_FOCUS: i32 = 9999;

/// `["==", ["get", prop], offset]`, or the no-match sentinel when unfocused.
pub fn highlight_filter(prop: &str, offset: Option<i32>) -> Value {
    json!(["==", ["get", prop], offset.unwrap_or(NO_FOCUS)])
}

/// Replacement filters for the three highlight layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FocusFilters {
    #[serde(rename = "tz-fill-highlight")]
    pub tz_fill_highlight: Value,
    #[serde(rename = "tz-line-highlight")]
    pub tz_line_highlight: Value,
    #[serde(rename = "utc-bands-highlight")]
    pub utc_bands_highlight: Value,
}

impl FocusFilters {
    pub fn for_offset(offset: Option<i32>) -> Self {
        Self {
            tz_fill_highlight: highlight_filter("utcHour", offset),
            tz_line_highlight: highlight_filter("utcHour", offset),
            utc_bands_highlight: highlight_filter("offset", offset),
        }
    }

    /// (layer id, filter) pairs in installation order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        [
            (crate::ids::BANDS_HIGHLIGHT, &self.utc_bands_highlight),
            (crate::ids::TZ_FILL_HIGHLIGHT, &self.tz_fill_highlight),
            (crate::ids::TZ_LINE_HIGHLIGHT, &self.tz_line_highlight),
        ]
        .into_iter()
    }
}

/// Tracks the focused band across pointer events so filters are only
/// rebuilt when the focus actually changes.
#[derive(Debug, Default, Clone)]
pub struct FocusTracker {
    current: Option<i32>,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<i32> {
        self.current
    }

    /// Pointer moved over a band whose `offset` property is `value`.
    ///
    /// Returns new filters when the focus changed. Non-finite values are
    /// ignored and leave the focus as it was.
    pub fn on_move(&mut self, value: f64) -> Option<FocusFilters> {
        if !value.is_finite() {
            return None;
        }
        let offset = HourBucket::from_offset(value).hour();
        if self.current == Some(offset) {
            return None;
        }
        trace!(offset, "band focus changed");
        self.current = Some(offset);
        Some(FocusFilters::for_offset(self.current))
    }

    /// Pointer left the band layer. Always returns cleared filters.
    pub fn on_leave(&mut self) -> FocusFilters {
        self.current = None;
        FocusFilters::for_offset(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_filter() {
        assert_eq!(
            highlight_filter("utcHour", Some(-5)),
            json!(["==", ["get", "utcHour"], -5])
        );
        assert_eq!(
            highlight_filter("offset", None),
            json!(["==", ["get", "offset"], 9999])
        );
    }

    #[test]
    fn test_filters_for_offset() {
        let f = FocusFilters::for_offset(Some(3));
        assert_eq!(f.tz_fill_highlight, json!(["==", ["get", "utcHour"], 3]));
        assert_eq!(f.tz_line_highlight, json!(["==", ["get", "utcHour"], 3]));
        assert_eq!(f.utc_bands_highlight, json!(["==", ["get", "offset"], 3]));

        let json = serde_json::to_value(&f).unwrap();
        assert!(json.get("utc-bands-highlight").is_some());
        assert_eq!(f.iter().count(), 3);
    }

    #[test]
    fn test_tracker_only_reports_changes() {
        let mut t = FocusTracker::new();
        assert!(t.on_move(2.0).is_some());
        assert!(t.on_move(2.0).is_none());
        assert_eq!(t.current(), Some(2));

        let f = t.on_move(-7.0).unwrap();
        assert_eq!(f.utc_bands_highlight, json!(["==", ["get", "offset"], -7]));
    }

    #[test]
    fn test_tracker_ignores_non_finite() {
        let mut t = FocusTracker::new();
        t.on_move(4.0);
        assert!(t.on_move(f64::NAN).is_none());
        assert!(t.on_move(f64::INFINITY).is_none());
        assert_eq!(t.current(), Some(4));
    }

    #[test]
    fn test_tracker_leave_clears() {
        let mut t = FocusTracker::new();
        t.on_move(1.0);
        let f = t.on_leave();
        assert_eq!(t.current(), None);
        assert_eq!(f, FocusFilters::for_offset(None));
        // Re-entering the same band refocuses it.
        assert!(t.on_move(1.0).is_some());
    }
}
