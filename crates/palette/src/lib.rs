//! Color assignment for map features.
//!
//! Two fixed palettes are provided:
//!
//! - [`zone`]: an 8-entry qualitative palette selected by a djb2 hash of a
//!   string key, typically a timezone identifier.
//! - [`offset`]: a 27-entry positional palette with one color per whole-hour
//!   UTC offset from -12 to +14.
//!
//! Both lookups are total: every input maps to a palette entry.

pub mod color;
pub mod hash;
pub mod offset;
pub mod zone;

pub use color::Color;
pub use hash::djb2;
pub use offset::{color_for_bucket, color_for_offset, OFFSET_COLORS};
pub use zone::{color_for, ZONE_PALETTE};

use serde::{Deserialize, Serialize};

/// Which palette to use when coloring a timezone feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color by the feature's whole-hour UTC offset.
    #[default]
    Offset,
    /// Color by a hash of the feature's timezone identifier.
    Zone,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "offset" => Ok(ColorMode::Offset),
            "zone" => Ok(ColorMode::Zone),
            other => Err(format!("unknown color mode '{}' (expected offset or zone)", other)),
        }
    }
}
