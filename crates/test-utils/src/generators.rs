//! Synthetic timezone datasets for tests and benchmarks.

use std::io::Write;
use std::path::PathBuf;

use serde_json::{json, Value};

/// Zones cycled through by [`create_dataset`].
pub const GENERATOR_ZONES: &[&str] = &[
    "America/Los_Angeles",
    "America/New_York",
    "America/St_Johns",
    "Europe/London",
    "Europe/Berlin",
    "Asia/Kolkata",
    "Asia/Kathmandu",
    "Asia/Tokyo",
    "Australia/Adelaide",
    "Pacific/Chatham",
    "Etc/GMT+5",
    "Invalid/Zone",
];

/// A FeatureCollection of `count` one-degree squares laid out in rows,
/// cycling through [`GENERATOR_ZONES`].
pub fn create_dataset(count: usize) -> Value {
    let features: Vec<Value> = (0..count)
        .map(|i| {
            let lon = -180.0 + (i % 360) as f64;
            let lat = -60.0 + ((i / 360) % 145) as f64;
            json!({
                "type": "Feature",
                "id": i,
                "properties": {
                    "tzid": GENERATOR_ZONES[i % GENERATOR_ZONES.len()],
                    "index": i,
                },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[
                        [lon, lat],
                        [lon + 1.0, lat],
                        [lon + 1.0, lat + 1.0],
                        [lon, lat + 1.0],
                        [lon, lat],
                    ]],
                },
            })
        })
        .collect();

    json!({ "type": "FeatureCollection", "features": features })
}

/// Write `contents` to `name` inside `dir`, returning the full path.
pub fn write_test_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create test file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write test file");
    path
}
