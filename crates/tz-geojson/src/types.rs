//! Minimal GeoJSON object model.
//!
//! Only the geometry types that appear in timezone boundary datasets and in
//! the generated overlays are modeled. Properties are generic so generated
//! documents can carry typed properties while input datasets keep their
//! arbitrary JSON properties.
//!
//! Input features may carry `"geometry": null` or `"properties": null`, both
//! valid GeoJSON. Null properties read as `P::default()`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A `[longitude, latitude]` pair.
pub type Position = [f64; 2];

/// A GeoJSON FeatureCollection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "P: Deserialize<'de> + Default"))]
pub struct FeatureCollection<P> {
    /// Type identifier (always "FeatureCollection").
    #[serde(rename = "type")]
    pub type_: String,

    /// Array of features.
    pub features: Vec<Feature<P>>,

    /// Other top-level members (`name`, `bbox`, `crs`, ...), kept as-is.
    #[serde(flatten)]
    pub foreign_members: Map<String, Value>,
}

impl<P> FeatureCollection<P> {
    /// Create a new empty FeatureCollection.
    pub fn new() -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            features: Vec::new(),
            foreign_members: Map::new(),
        }
    }

    /// A collection with this one's type and foreign members holding
    /// `features` instead.
    pub fn with_members_of<Q>(&self, features: Vec<Feature<Q>>) -> FeatureCollection<Q> {
        FeatureCollection {
            type_: self.type_.clone(),
            features,
            foreign_members: self.foreign_members.clone(),
        }
    }

    /// Add a feature to the collection.
    pub fn with_feature(mut self, feature: Feature<P>) -> Self {
        self.features.push(feature);
        self
    }

    /// Add multiple features to the collection.
    pub fn with_features(mut self, features: Vec<Feature<P>>) -> Self {
        self.features.extend(features);
        self
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl<P> Default for FeatureCollection<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> FromIterator<Feature<P>> for FeatureCollection<P> {
    fn from_iter<I: IntoIterator<Item = Feature<P>>>(iter: I) -> Self {
        Self::new().with_features(iter.into_iter().collect())
    }
}

/// A GeoJSON Feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "P: Deserialize<'de> + Default"))]
pub struct Feature<P> {
    /// Type identifier (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    /// Optional feature identifier (string or number).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,

    /// `None` for unlocated features.
    pub geometry: Option<Geometry>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: P,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl<P> Feature<P> {
    pub fn new(geometry: Geometry, properties: P) -> Self {
        Self {
            type_: "Feature".to_string(),
            id: None,
            geometry: Some(geometry),
            properties,
        }
    }

    /// Replace the properties, keeping id and geometry.
    pub fn map_properties<Q>(self, f: impl FnOnce(P) -> Q) -> Feature<Q> {
        Feature {
            type_: self.type_,
            id: self.id,
            geometry: self.geometry,
            properties: f(self.properties),
        }
    }
}

/// GeoJSON geometry types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: Position,
    },

    LineString {
        coordinates: Vec<Position>,
    },

    /// First ring is the exterior, the rest are holes.
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },

    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
}

impl Geometry {
    /// Create a point geometry.
    pub fn point(lon: f64, lat: f64) -> Self {
        Geometry::Point {
            coordinates: [lon, lat],
        }
    }

    /// Closed rectangular polygon, counter-clockwise from the south-west
    /// corner.
    pub fn rectangle(west: f64, south: f64, east: f64, north: f64) -> Self {
        Geometry::Polygon {
            coordinates: vec![vec![
                [west, south],
                [east, south],
                [east, north],
                [west, north],
                [west, south],
            ]],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_serialization() {
        let f = Feature::new(Geometry::point(10.0, 20.0), serde_json::json!({"a": 1}));
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json["type"], "Feature");
        assert_eq!(json["geometry"]["type"], "Point");
        assert_eq!(json["geometry"]["coordinates"][0], 10.0);
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_rectangle_is_closed() {
        let Geometry::Polygon { coordinates } = Geometry::rectangle(0.0, -1.0, 15.0, 1.0) else {
            panic!("expected polygon");
        };
        let ring = &coordinates[0];
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn test_multipolygon_round_trip() {
        let json = r#"{
            "type": "Feature",
            "id": 7,
            "geometry": {"type": "MultiPolygon", "coordinates": [[[[0,0],[1,0],[1,1],[0,0]]]]},
            "properties": {"tzid": "Europe/Paris"}
        }"#;
        let f: Feature<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(f.id, Some(serde_json::json!(7)));
        assert!(matches!(f.geometry, Some(Geometry::MultiPolygon { .. })));
        assert_eq!(f.properties["tzid"], "Europe/Paris");
    }

    #[test]
    fn test_null_geometry_and_properties() {
        let json = r#"{"type": "Feature", "geometry": null, "properties": null}"#;
        let f: Feature<Map<String, Value>> = serde_json::from_str(json).unwrap();
        assert_eq!(f.geometry, None);
        assert!(f.properties.is_empty());

        // Null geometry is written back as null, not dropped.
        let back = serde_json::to_value(&f).unwrap();
        assert!(back["geometry"].is_null());
    }

    #[test]
    fn test_missing_properties_member() {
        let json = r#"{
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [1, 2]}
        }"#;
        let f: Feature<Map<String, Value>> = serde_json::from_str(json).unwrap();
        assert!(f.properties.is_empty());
    }

    #[test]
    fn test_foreign_members_survive() {
        let json = r#"{
            "type": "FeatureCollection",
            "name": "tz",
            "bbox": [0, 0, 1, 1],
            "features": []
        }"#;
        let fc: FeatureCollection<Map<String, Value>> = serde_json::from_str(json).unwrap();
        assert_eq!(fc.foreign_members["name"], "tz");

        let out = serde_json::to_value(fc.with_members_of::<Value>(Vec::new())).unwrap();
        assert_eq!(out["name"], "tz");
        assert_eq!(out["bbox"][2], 1);
        assert_eq!(out["type"], "FeatureCollection");
    }
}
