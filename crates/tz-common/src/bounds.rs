//! Geographic map bounds.

use serde::{Deserialize, Serialize};

/// A lon/lat extent in degrees.
///
/// Serializes as `[[min_lon, min_lat], [max_lon, max_lat]]`, the same shape a
/// map client passes to `setMaxBounds`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[[f64; 2]; 2]", into = "[[f64; 2]; 2]")]
pub struct MapBounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl MapBounds {
    /// Default world extent: full longitude range, latitudes trimmed to the
    /// inhabited part of the Web Mercator view.
    pub const WORLD: MapBounds = MapBounds {
        min_lon: -180.0,
        min_lat: -60.0,
        max_lon: 180.0,
        max_lat: 85.0,
    };

    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Parse a `"min_lon,min_lat,max_lon,max_lat"` query string.
    pub fn from_query_string(s: &str) -> Result<Self, BoundsParseError> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(BoundsParseError::InvalidFormat(s.to_string()));
        }

        let mut values = [0.0f64; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            let value: f64 = part
                .parse()
                .map_err(|_| BoundsParseError::InvalidNumber(part.to_string()))?;
            if !value.is_finite() {
                return Err(BoundsParseError::InvalidNumber(part.to_string()));
            }
            *slot = value;
        }

        let bounds = Self::new(values[0], values[1], values[2], values[3]);
        bounds.validate()?;
        Ok(bounds)
    }

    /// Reject non-finite, out-of-range and inverted extents.
    pub fn validate(&self) -> Result<(), BoundsParseError> {
        let lon_ok = |v: f64| v.is_finite() && (-180.0..=180.0).contains(&v);
        let lat_ok = |v: f64| v.is_finite() && (-90.0..=90.0).contains(&v);
        if !(lon_ok(self.min_lon) && lon_ok(self.max_lon))
            || !(lat_ok(self.min_lat) && lat_ok(self.max_lat))
        {
            return Err(BoundsParseError::OutOfRange(*self));
        }
        if self.min_lon > self.max_lon || self.min_lat > self.max_lat {
            return Err(BoundsParseError::Inverted(*self));
        }
        Ok(())
    }

    /// Width in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Height in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Clamp a longitude into `[min_lon, max_lon]`.
    pub fn clamp_lon(&self, lon: f64) -> f64 {
        lon.max(self.min_lon).min(self.max_lon)
    }

    /// Check if a point is contained within these bounds.
    pub fn contains_point(&self, lon: f64, lat: f64) -> bool {
        lon >= self.min_lon && lon <= self.max_lon && lat >= self.min_lat && lat <= self.max_lat
    }
}

impl Default for MapBounds {
    fn default() -> Self {
        Self::WORLD
    }
}

impl From<[[f64; 2]; 2]> for MapBounds {
    fn from([[min_lon, min_lat], [max_lon, max_lat]]: [[f64; 2]; 2]) -> Self {
        Self::new(min_lon, min_lat, max_lon, max_lat)
    }
}

impl From<MapBounds> for [[f64; 2]; 2] {
    fn from(b: MapBounds) -> Self {
        [[b.min_lon, b.min_lat], [b.max_lon, b.max_lat]]
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BoundsParseError {
    #[error("Invalid bbox format: {0}. Expected 'min_lon,min_lat,max_lon,max_lat'")]
    InvalidFormat(String),

    #[error("Invalid number in bbox: {0}")]
    InvalidNumber(String),

    #[error("Inverted bbox: min must not exceed max ({0:?})")]
    Inverted(MapBounds),

    #[error("Bbox outside [-180, 180] x [-90, 90] or not finite ({0:?})")]
    OutOfRange(MapBounds),
}
