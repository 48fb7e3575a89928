//! Layer definitions in the Mapbox GL style format.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::focus::highlight_filter;
use crate::ids;
use crate::{BANDS_SOURCE, BAND_LABELS_SOURCE, TIMEZONES_SOURCE};

/// Fallback outline color for features without a `color` property.
pub const DEFAULT_LINE_COLOR: &str = "#9ca3af";

/// Tunable paint values. Defaults match the production map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerStyle {
    pub band_fill_opacity: f64,
    pub band_highlight_opacity: f64,
    pub zone_fill_opacity: f64,
    /// Fill opacity for `isOcean` features.
    pub ocean_fill_opacity: f64,
    pub zone_highlight_opacity: f64,
    /// Zoom level above which the band overlay is hidden.
    pub band_max_zoom: f64,
    pub label_min_zoom: f64,
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self {
            band_fill_opacity: 0.03,
            band_highlight_opacity: 0.06,
            zone_fill_opacity: 0.12,
            ocean_fill_opacity: 0.05,
            zone_highlight_opacity: 0.75,
            band_max_zoom: 6.0,
            label_min_zoom: 1.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    Fill,
    Line,
    Symbol,
}

/// One layer, plus the id of the basemap layer it is inserted beneath.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerDefinition {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub layer_type: LayerType,
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Value>,
    pub paint: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minzoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxzoom: Option<f64>,
    #[serde(rename = "beforeId")]
    pub before_id: &'static str,
}

fn transition(ms: u32) -> Value {
    json!({ "duration": ms })
}

/// All overlay layers in installation order.
pub fn layer_definitions(style: &LayerStyle) -> Vec<LayerDefinition> {
    vec![
        LayerDefinition {
            id: ids::BANDS_FILL,
            layer_type: LayerType::Fill,
            source: BANDS_SOURCE,
            filter: None,
            layout: None,
            paint: json!({
                "fill-color": ["get", "color"],
                "fill-opacity": style.band_fill_opacity,
                "fill-opacity-transition": transition(200),
            }),
            minzoom: None,
            maxzoom: Some(style.band_max_zoom),
            before_id: "land-structure-line",
        },
        LayerDefinition {
            id: ids::BANDS_HIGHLIGHT,
            layer_type: LayerType::Fill,
            source: BANDS_SOURCE,
            filter: Some(highlight_filter("offset", None)),
            layout: None,
            paint: json!({
                "fill-color": ["get", "color"],
                "fill-opacity": style.band_highlight_opacity,
                "fill-opacity-transition": transition(200),
            }),
            minzoom: None,
            maxzoom: None,
            before_id: "land-structure-line",
        },
        LayerDefinition {
            id: ids::BANDS_LABEL,
            layer_type: LayerType::Symbol,
            source: BAND_LABELS_SOURCE,
            filter: None,
            layout: Some(json!({
                "symbol-placement": "point",
                "text-field": ["get", "label"],
                "text-font": ["DIN Pro Medium", "Arial Unicode MS Regular"],
                "text-size": ["interpolate", ["linear"], ["zoom"], 1.5, 10, 4, 12, 6, 14],
                "text-allow-overlap": false,
                "text-anchor": ["match", ["get", "anchor"], "top", "top", "bottom"],
                "text-offset": [
                    "match", ["get", "anchor"],
                    "top", ["literal", [0, -0.6]],
                    ["literal", [0, 0.5]]
                ],
            })),
            paint: json!({
                "text-color": "#111",
                "text-halo-color": "#ffffff",
                "text-halo-width": 1.25,
                "text-opacity": 0.9,
            }),
            minzoom: Some(style.label_min_zoom),
            maxzoom: Some(style.band_max_zoom),
            before_id: "airport-label",
        },
        LayerDefinition {
            id: ids::TZ_FILL,
            layer_type: LayerType::Fill,
            source: TIMEZONES_SOURCE,
            filter: None,
            layout: None,
            paint: json!({
                "fill-color": ["get", "color"],
                "fill-opacity": [
                    "case", ["boolean", ["get", "isOcean"], false],
                    style.ocean_fill_opacity,
                    style.zone_fill_opacity
                ],
                "fill-antialias": true,
                "fill-opacity-transition": transition(300),
            }),
            minzoom: None,
            maxzoom: None,
            before_id: "waterway-label",
        },
        LayerDefinition {
            id: ids::TZ_LINE,
            layer_type: LayerType::Line,
            source: TIMEZONES_SOURCE,
            filter: None,
            layout: None,
            paint: json!({
                "line-color": ["coalesce", ["get", "color"], DEFAULT_LINE_COLOR],
                "line-opacity": 0.85,
                "line-width": 0.8,
                "line-blur": 0.2,
            }),
            minzoom: None,
            maxzoom: None,
            before_id: "waterway-label",
        },
        LayerDefinition {
            id: ids::TZ_FILL_HIGHLIGHT,
            layer_type: LayerType::Fill,
            source: TIMEZONES_SOURCE,
            filter: Some(highlight_filter("utcHour", None)),
            layout: None,
            paint: json!({
                "fill-color": ["get", "color"],
                "fill-opacity": style.zone_highlight_opacity,
                "fill-opacity-transition": transition(200),
            }),
            minzoom: None,
            maxzoom: None,
            before_id: ids::TZ_FILL,
        },
        LayerDefinition {
            id: ids::TZ_LINE_HIGHLIGHT,
            layer_type: LayerType::Line,
            source: TIMEZONES_SOURCE,
            filter: Some(highlight_filter("utcHour", None)),
            layout: None,
            paint: json!({
                "line-color": ["get", "color"],
                "line-opacity": 1,
                "line-width": 1.6,
            }),
            minzoom: None,
            maxzoom: None,
            before_id: ids::TZ_FILL_HIGHLIGHT,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_ids_are_unique_and_ordered() {
        let layers = layer_definitions(&LayerStyle::default());
        let ids: Vec<&str> = layers.iter().map(|l| l.id).collect();
        assert_eq!(
            ids,
            vec![
                "utc-bands-fill",
                "utc-bands-highlight",
                "utc-bands-label",
                "tz-fill",
                "tz-line",
                "tz-fill-highlight",
                "tz-line-highlight",
            ]
        );
    }

    #[test]
    fn test_before_ids_reference_installed_layers_or_basemap() {
        let layers = layer_definitions(&LayerStyle::default());
        let basemap = ["land-structure-line", "airport-label", "waterway-label"];
        for (i, layer) in layers.iter().enumerate() {
            let earlier = layers[..i].iter().any(|l| l.id == layer.before_id);
            assert!(earlier || basemap.contains(&layer.before_id), "{}", layer.id);
        }
    }

    #[test]
    fn test_ocean_aware_opacity() {
        let style = LayerStyle::default();
        let layers = layer_definitions(&style);
        let fill = layers.iter().find(|l| l.id == ids::TZ_FILL).unwrap();
        let opacity = &fill.paint["fill-opacity"];
        assert_eq!(opacity[0], "case");
        assert_eq!(opacity[2], 0.05);
        assert_eq!(opacity[3], 0.12);
    }

    #[test]
    fn test_serialized_shape() {
        let layers = layer_definitions(&LayerStyle::default());
        let json = serde_json::to_value(&layers[0]).unwrap();
        assert_eq!(json["type"], "fill");
        assert_eq!(json["source"], "utc-bands");
        assert_eq!(json["maxzoom"], 6.0);
        assert_eq!(json["beforeId"], "land-structure-line");
        assert!(json.get("filter").is_none());
    }

    #[test]
    fn test_style_overrides_from_yaml() {
        let style: LayerStyle = serde_yaml::from_str("zone_fill_opacity: 0.2\n").unwrap();
        assert_eq!(style.zone_fill_opacity, 0.2);
        assert_eq!(style.band_fill_opacity, 0.03);
    }
}
