//! Layer definitions and highlight filters for the map client.
//!
//! The client installs the layers from [`layer_definitions`] once, then on
//! every pointer move over the band layer asks a [`FocusTracker`] whether
//! the highlight filters need replacing.

pub mod focus;
pub mod style;

pub use focus::{highlight_filter, FocusFilters, FocusTracker, NO_FOCUS};
pub use style::{layer_definitions, LayerDefinition, LayerStyle, LayerType};

/// Source id of the band polygons.
pub const BANDS_SOURCE: &str = "utc-bands";

/// Source id of the band label points.
pub const BAND_LABELS_SOURCE: &str = "utc-bands-labels";

/// Source id of the augmented timezone polygons.
pub const TIMEZONES_SOURCE: &str = "timezones";

/// Layer ids, in the order they are installed.
pub mod ids {
    pub const BANDS_FILL: &str = "utc-bands-fill";
    pub const BANDS_HIGHLIGHT: &str = "utc-bands-highlight";
    pub const BANDS_LABEL: &str = "utc-bands-label";
    pub const TZ_FILL: &str = "tz-fill";
    pub const TZ_LINE: &str = "tz-line";
    pub const TZ_FILL_HIGHLIGHT: &str = "tz-fill-highlight";
    pub const TZ_LINE_HIGHLIGHT: &str = "tz-line-highlight";
}
