//! Common types and utilities shared across the tzmap crates and services.

pub mod bounds;
pub mod bucket;
pub mod error;
pub mod time;

pub use bounds::{BoundsParseError, MapBounds};
pub use bucket::{band_label, HourBucket, MAX_OFFSET, MIN_OFFSET};
pub use error::{TzMapError, TzMapResult};
pub use time::{parse_instant, InstantParseError};
