//! Dataset loading and augmentation.

use chrono::{DateTime, TimeZone, Utc};
use palette::ColorMode;
use serde_json::{Map, Value};
use test_utils::{
    create_dataset, require_test_file, temp_test_dir, write_test_file, SAMPLE_DATASET_JSON,
    SAMPLE_DATASET_LEN,
};
use tz_geojson::{
    augment, dataset_from_json, feature_tzid, filter_by_hour, load_dataset, Geometry,
    TimezoneDataset,
};

fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

fn props_of<'a>(ds: &'a TimezoneDataset, tzid: &str) -> &'a Map<String, Value> {
    &ds.features
        .iter()
        .find(|f| f.properties.get("tzid").and_then(Value::as_str) == Some(tzid))
        .unwrap_or_else(|| panic!("no feature for {tzid}"))
        .properties
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_load_sample_from_file() {
    let dir = temp_test_dir();
    let path = write_test_file(&dir, "timezones.geojson", SAMPLE_DATASET_JSON);
    let ds = load_dataset(&path).unwrap();
    assert_eq!(ds.features.len(), SAMPLE_DATASET_LEN);
}

#[test]
fn test_load_missing_file_is_error() {
    let dir = temp_test_dir();
    let result = load_dataset(dir.path().join("nope.geojson"));
    assert!(result.is_err());
}

#[test]
fn test_malformed_json_is_error() {
    assert!(dataset_from_json("{ not json").is_err());
}

// ============================================================================
// Augmentation
// ============================================================================

#[test]
fn test_augment_adds_attributes() {
    let ds = dataset_from_json(SAMPLE_DATASET_JSON).unwrap();
    let out = augment(&ds, at(), ColorMode::Offset);
    assert_eq!(out.features.len(), ds.features.len());

    let india = props_of(&out, "Asia/Kolkata");
    assert_eq!(india["utcOffset"], 5.5);
    assert_eq!(india["utcHour"], 6);
    assert_eq!(india["isOcean"], false);
    assert_eq!(india["color"], "#f59e0b");
    // Existing properties survive.
    assert_eq!(india["name"], "India");

    let nepal = props_of(&out, "Asia/Kathmandu");
    assert_eq!(nepal["utcOffset"], 5.75);
    assert_eq!(nepal["utcHour"], 6);

    let etc = props_of(&out, "Etc/GMT+12");
    assert_eq!(etc["utcOffset"], -12.0);
    assert_eq!(etc["utcHour"], -12);
    assert_eq!(etc["isOcean"], true);
    assert_eq!(etc["color"], "#7e6b8a");
}

#[test]
fn test_missing_tzid_is_utc() {
    let ds = dataset_from_json(SAMPLE_DATASET_JSON).unwrap();
    let out = augment(&ds, at(), ColorMode::Offset);
    let orphan = out
        .features
        .iter()
        .find(|f| f.properties.get("tzid").is_none())
        .unwrap();
    assert_eq!(orphan.properties["utcOffset"], 0.0);
    assert_eq!(orphan.properties["utcHour"], 0);
    assert_eq!(orphan.properties["isOcean"], false);
    assert_eq!(orphan.properties["color"], "#8ab4f8");
}

#[test]
fn test_augment_preserves_geometry_and_ids() {
    let ds = dataset_from_json(SAMPLE_DATASET_JSON).unwrap();
    let out = augment(&ds, at(), ColorMode::Offset);
    for (before, after) in ds.features.iter().zip(&out.features) {
        assert_eq!(before.id, after.id);
        assert_eq!(before.geometry, after.geometry);
    }
    assert!(matches!(
        out.features[1].geometry,
        Some(Geometry::MultiPolygon { .. })
    ));
    assert_eq!(out.features[2].id, Some(Value::from("etc-12")));
}

#[test]
fn test_zone_mode_uses_string_palette() {
    let ds = dataset_from_json(SAMPLE_DATASET_JSON).unwrap();
    let out = augment(&ds, at(), ColorMode::Zone);
    let india = props_of(&out, "Asia/Kolkata");
    assert_eq!(india["color"], "#22D3EE");
    assert_eq!(india["utcHour"], 6);
}

#[test]
fn test_augment_leaves_input_untouched() {
    let ds = dataset_from_json(SAMPLE_DATASET_JSON).unwrap();
    let before = ds.clone();
    let _ = augment(&ds, at(), ColorMode::Offset);
    assert_eq!(ds, before);
}

#[test]
fn test_augment_is_deterministic() {
    let ds: TimezoneDataset = serde_json::from_value(create_dataset(500)).unwrap();
    let a = serde_json::to_string(&augment(&ds, at(), ColorMode::Offset)).unwrap();
    let b = serde_json::to_string(&augment(&ds, at(), ColorMode::Offset)).unwrap();
    assert_eq!(a, b);
}

const NULL_MEMBERS_JSON: &str = r#"{
  "type": "FeatureCollection",
  "name": "combined-with-oceans",
  "bbox": [-180, -90, 180, 90],
  "features": [
    {
      "type": "Feature",
      "geometry": null,
      "properties": { "tzid": "Asia/Tokyo" }
    },
    {
      "type": "Feature",
      "geometry": { "type": "Point", "coordinates": [0, 0] },
      "properties": null
    },
    {
      "type": "Feature",
      "geometry": { "type": "Point", "coordinates": [80, 20] },
      "properties": { "tzid": "Asia/Kolkata" }
    }
  ]
}"#;

#[test]
fn test_null_geometry_and_properties_load() {
    let ds = dataset_from_json(NULL_MEMBERS_JSON).unwrap();
    assert_eq!(ds.features.len(), 3);
    assert_eq!(ds.features[0].geometry, None);
    assert!(ds.features[1].properties.is_empty());
    assert_eq!(feature_tzid(&ds.features[1].properties), "");
}

#[test]
fn test_null_properties_get_fresh_attributes() {
    let ds = dataset_from_json(NULL_MEMBERS_JSON).unwrap();
    let out = augment(&ds, at(), ColorMode::Offset);

    let tokyo = &out.features[0];
    assert_eq!(tokyo.geometry, None);
    assert_eq!(tokyo.properties["utcOffset"], 9.0);

    let bare = &out.features[1].properties;
    assert_eq!(bare.len(), 4);
    assert_eq!(bare["utcOffset"], 0.0);
    assert_eq!(bare["utcHour"], 0);
    assert_eq!(bare["isOcean"], false);
    assert_eq!(bare["color"], "#8ab4f8");

    assert_eq!(out.features[2].properties["utcHour"], 6);
}

#[test]
fn test_augment_keeps_collection_members() {
    let ds = dataset_from_json(NULL_MEMBERS_JSON).unwrap();
    let out = augment(&ds, at(), ColorMode::Offset);
    assert_eq!(out.foreign_members, ds.foreign_members);

    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["type"], "FeatureCollection");
    assert_eq!(json["name"], "combined-with-oceans");
    assert_eq!(json["bbox"][3], 90);

    let filtered = serde_json::to_value(filter_by_hour(&out, 9)).unwrap();
    assert_eq!(filtered["name"], "combined-with-oceans");
    assert_eq!(filtered["features"].as_array().unwrap().len(), 1);
}

// ============================================================================
// Hour filter
// ============================================================================

#[test]
fn test_filter_by_hour() {
    let ds = dataset_from_json(SAMPLE_DATASET_JSON).unwrap();
    let out = augment(&ds, at(), ColorMode::Offset);

    let six = filter_by_hour(&out, 6);
    assert_eq!(six.features.len(), 2);

    let none = filter_by_hour(&out, 3);
    assert!(none.is_empty());

    // Un-augmented features have no utcHour and never match.
    assert!(filter_by_hour(&ds, 6).is_empty());
}

// ============================================================================
// Full dataset (optional)
// ============================================================================

#[test]
fn test_full_dataset_every_feature_in_range() {
    let path = require_test_file!("timezones.geojson");
    let ds = load_dataset(path).unwrap();
    let out = augment(&ds, at(), ColorMode::Offset);
    for f in &out.features {
        let hour = f.properties["utcHour"].as_i64().unwrap();
        assert!((-12..=14).contains(&hour));
    }
}
