//! Timezone polygon datasets and per-feature augmentation.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use palette::{color_for, color_for_bucket, Color, ColorMode};
use tz_common::{HourBucket, TzMapError, TzMapResult};

use crate::types::FeatureCollection;

/// A polygon dataset with arbitrary JSON properties per feature.
pub type TimezoneDataset = FeatureCollection<Map<String, Value>>;

/// Load a dataset from a GeoJSON file.
pub fn load_dataset(path: impl AsRef<Path>) -> TzMapResult<TimezoneDataset> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        TzMapError::InvalidDataset(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let dataset = dataset_from_json(&content)?;
    info!(
        path = %path.display(),
        features = dataset.features.len(),
        "Loaded timezone dataset"
    );
    Ok(dataset)
}

/// Parse a dataset from a GeoJSON string.
pub fn dataset_from_json(json: &str) -> TzMapResult<TimezoneDataset> {
    let dataset: TimezoneDataset = serde_json::from_str(json)?;
    if dataset.type_ != "FeatureCollection" {
        return Err(TzMapError::InvalidDataset(format!(
            "Expected a FeatureCollection, found '{}'",
            dataset.type_
        )));
    }
    Ok(dataset)
}

/// Reserved identifier prefix for nautical zones.
const OCEAN_PREFIX: &str = "Etc/";

/// Substring marking ocean-named zones.
const OCEAN_MARKER: &str = "Ocean";

/// Heuristic ocean flag: nautical `Etc/` zones and anything named "Ocean".
pub fn is_ocean(tzid: &str) -> bool {
    tzid.starts_with(OCEAN_PREFIX) || tzid.contains(OCEAN_MARKER)
}

/// Attributes attached to each timezone feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimezoneAttributes {
    pub utc_offset: f64,
    pub utc_hour: HourBucket,
    pub is_ocean: bool,
    pub color: Color,
}

impl TimezoneAttributes {
    /// Compute the attributes for `tzid` at `at`.
    pub fn compute(tzid: &str, at: DateTime<Utc>, mode: ColorMode) -> Self {
        let utc_offset = tz_offset::resolve(tzid, at);
        let utc_hour = HourBucket::from_offset(utc_offset);
        let color = match mode {
            ColorMode::Offset => color_for_bucket(utc_hour),
            ColorMode::Zone => color_for(tzid),
        };

        Self {
            utc_offset,
            utc_hour,
            is_ocean: is_ocean(tzid),
            color,
        }
    }

    fn merge_into(self, properties: &mut Map<String, Value>) {
        properties.insert("utcOffset".to_string(), Value::from(self.utc_offset));
        properties.insert("utcHour".to_string(), Value::from(self.utc_hour.hour()));
        properties.insert("isOcean".to_string(), Value::Bool(self.is_ocean));
        properties.insert("color".to_string(), Value::from(self.color.as_str()));
    }
}

/// Identifier of a feature; missing or non-string `tzid` reads as `""`, as
/// does any `tzid` of a feature whose properties were null.
pub fn feature_tzid(properties: &Map<String, Value>) -> &str {
    properties.get("tzid").and_then(Value::as_str).unwrap_or("")
}

/// Copy of `dataset` with every feature's properties extended by
/// `utcOffset`, `utcHour`, `isOcean` and `color`, evaluated at `at`.
///
/// Existing properties are kept; the four computed ones overwrite any
/// same-named input property. Features read with null properties get a
/// fresh map holding just the four. Collection members other than
/// `features` are carried over.
pub fn augment(dataset: &TimezoneDataset, at: DateTime<Utc>, mode: ColorMode) -> TimezoneDataset {
    let features = dataset
        .features
        .iter()
        .cloned()
        .map(|feature| {
            feature.map_properties(|mut properties| {
                let attrs = TimezoneAttributes::compute(feature_tzid(&properties), at, mode);
                attrs.merge_into(&mut properties);
                properties
            })
        })
        .collect::<Vec<_>>();

    debug!(features = features.len(), at = %at, ?mode, "Augmented timezone dataset");
    dataset.with_members_of(features)
}

/// Features of an augmented dataset whose `utcHour` equals `hour`.
pub fn filter_by_hour(dataset: &TimezoneDataset, hour: i32) -> TimezoneDataset {
    let features = dataset
        .features
        .iter()
        .filter(|f| f.properties.get("utcHour").and_then(Value::as_i64) == Some(hour as i64))
        .cloned()
        .collect();
    dataset.with_members_of(features)
}
