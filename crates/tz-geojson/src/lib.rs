//! GeoJSON documents consumed by the map client.
//!
//! - [`bands`] builds the synthetic 15° UTC-offset bands and their label
//!   anchor points.
//! - [`dataset`] loads a timezone polygon dataset and augments every feature
//!   with its current offset, hour bucket, ocean flag and color.
//!
//! # Example
//!
//! ```rust
//! use tz_geojson::bands::build_bands;
//! use tz_common::MapBounds;
//!
//! let bands = build_bands(&MapBounds::WORLD);
//! assert_eq!(bands.features.len(), 27);
//! assert_eq!(bands.features[12].properties.label, "UTC±0");
//! ```

pub mod bands;
pub mod dataset;
pub mod types;

pub use bands::{
    build_band_labels, build_bands, BandLabelProperties, BandProperties, LabelAnchor,
    LabelMargins,
};
pub use dataset::{
    augment, dataset_from_json, feature_tzid, filter_by_hour, is_ocean, load_dataset,
    TimezoneAttributes, TimezoneDataset,
};
pub use types::{Feature, FeatureCollection, Geometry, Position};

/// Media type for GeoJSON responses.
pub const GEO_JSON: &str = "application/geo+json";
