//! Common test fixtures for tzmap tests.

/// Common bounding boxes as `(min_lon, min_lat, max_lon, max_lat)`.
pub mod bbox {
    /// Default map extent.
    pub const WORLD: (f64, f64, f64, f64) = (-180.0, -60.0, 180.0, 85.0);

    /// Full globe.
    pub const GLOBAL: (f64, f64, f64, f64) = (-180.0, -90.0, 180.0, 90.0);

    /// Europe, cutting through the UTC-1 and UTC+3 bands.
    pub const EUROPE: (f64, f64, f64, f64) = (-10.0, 35.0, 50.0, 72.0);

    /// Continental United States.
    pub const CONUS: (f64, f64, f64, f64) = (-130.0, 20.0, -60.0, 55.0);

    /// Single point (degenerate bbox).
    pub const POINT: (f64, f64, f64, f64) = (0.0, 0.0, 0.0, 0.0);
}

/// Zones with fixed offsets (no daylight saving), as `(tzid, hours)`.
pub const FIXED_OFFSET_ZONES: &[(&str, f64)] = &[
    ("UTC", 0.0),
    ("Asia/Kolkata", 5.5),
    ("Asia/Kathmandu", 5.75),
    ("Asia/Tokyo", 9.0),
    ("Asia/Shanghai", 8.0),
    ("Pacific/Marquesas", -9.5),
    ("Pacific/Kiritimati", 14.0),
    ("Pacific/Honolulu", -10.0),
    ("America/Sao_Paulo", -3.0),
    ("Etc/GMT+12", -12.0),
];

/// A small dataset in the shape of timezone-boundary-builder output.
pub const SAMPLE_DATASET_JSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "tzid": "Asia/Kolkata", "name": "India" },
      "geometry": { "type": "Polygon", "coordinates": [[[68.0, 8.0], [97.0, 8.0], [97.0, 35.0], [68.0, 35.0], [68.0, 8.0]]] }
    },
    {
      "type": "Feature",
      "properties": { "tzid": "Asia/Tokyo" },
      "geometry": { "type": "MultiPolygon", "coordinates": [[[[129.0, 31.0], [146.0, 31.0], [146.0, 45.0], [129.0, 45.0], [129.0, 31.0]]]] }
    },
    {
      "type": "Feature",
      "id": "etc-12",
      "properties": { "tzid": "Etc/GMT+12" },
      "geometry": { "type": "Polygon", "coordinates": [[[-180.0, -60.0], [-172.5, -60.0], [-172.5, 85.0], [-180.0, 85.0], [-180.0, -60.0]]] }
    },
    {
      "type": "Feature",
      "properties": { "tzid": "Asia/Kathmandu" },
      "geometry": { "type": "Polygon", "coordinates": [[[80.0, 26.0], [88.0, 26.0], [88.0, 30.5], [80.0, 30.5], [80.0, 26.0]]] }
    },
    {
      "type": "Feature",
      "properties": { "name": "no tzid here" },
      "geometry": { "type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]] }
    }
  ]
}"#;

/// Number of features in [`SAMPLE_DATASET_JSON`].
pub const SAMPLE_DATASET_LEN: usize = 5;
