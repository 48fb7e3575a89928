//! Fixed-width UTC offset bands.
//!
//! Each whole-hour offset `off` in -12..=14 owns the longitude slice
//! `[off * 15, (off + 1) * 15]`. Slices are clamped into the requested
//! bounds, so a band that falls (partly) outside them is truncated down to
//! zero width at the boundary but is never dropped: clients can rely on one
//! band and two label points per offset.

use serde::{Deserialize, Serialize};

use palette::{color_for_bucket, Color};
use tz_common::{HourBucket, MapBounds};

use crate::types::{Feature, FeatureCollection, Geometry};

/// Longitude width of one band in degrees.
pub const BAND_WIDTH_DEG: f64 = 15.0;

/// Properties of a band polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandProperties {
    pub offset: i32,
    pub label: String,
    pub color: Color,
}

/// Which edge of the map a label point sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelAnchor {
    Top,
    Bottom,
}

/// Properties of a band label point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandLabelProperties {
    pub label: String,
    pub offset: i32,
    pub anchor: LabelAnchor,
    pub color: Color,
}

/// Distance in degrees of latitude between the map edge and a label point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelMargins {
    #[serde(default = "default_top_margin")]
    pub top: f64,
    #[serde(default = "default_bottom_margin")]
    pub bottom: f64,
}

fn default_top_margin() -> f64 {
    0.4
}

fn default_bottom_margin() -> f64 {
    2.0
}

impl Default for LabelMargins {
    fn default() -> Self {
        Self {
            top: default_top_margin(),
            bottom: default_bottom_margin(),
        }
    }
}

/// West and east edges of the band for `bucket`, clamped into `bounds`.
pub fn band_edges(bounds: &MapBounds, bucket: HourBucket) -> (f64, f64) {
    let off = bucket.hour() as f64;
    let west = bounds.clamp_lon(off * BAND_WIDTH_DEG);
    let east = bounds.clamp_lon((off + 1.0) * BAND_WIDTH_DEG);
    (west, east)
}

/// One rectangular band per whole-hour offset, west to east.
pub fn build_bands(bounds: &MapBounds) -> FeatureCollection<BandProperties> {
    HourBucket::all()
        .map(|bucket| {
            let (west, east) = band_edges(bounds, bucket);
            Feature::new(
                Geometry::rectangle(west, bounds.min_lat, east, bounds.max_lat),
                BandProperties {
                    offset: bucket.hour(),
                    label: bucket.label(),
                    color: color_for_bucket(bucket),
                },
            )
        })
        .collect()
}

/// Two label points per band at its mid longitude: one just below the top
/// edge, one just above the bottom edge.
pub fn build_band_labels(
    bounds: &MapBounds,
    margins: LabelMargins,
) -> FeatureCollection<BandLabelProperties> {
    HourBucket::all()
        .flat_map(|bucket| {
            let (west, east) = band_edges(bounds, bucket);
            let mid_lon = (west + east) / 2.0;
            let color = color_for_bucket(bucket);

            [
                (LabelAnchor::Top, bounds.max_lat - margins.top),
                (LabelAnchor::Bottom, bounds.min_lat + margins.bottom),
            ]
            .into_iter()
            .map(move |(anchor, lat)| {
                Feature::new(
                    Geometry::point(mid_lon, lat),
                    BandLabelProperties {
                        label: bucket.label(),
                        offset: bucket.hour(),
                        anchor,
                        color,
                    },
                )
            })
        })
        .collect()
}
