//! UTC band polygons and their label points.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::Response,
};
use serde::Deserialize;
use tz_common::{MapBounds, TzMapResult};
use tz_geojson::{build_band_labels, build_bands, LabelMargins, GEO_JSON};

use super::common::{into_response, json_response, parse_finite, record_request};
use crate::state::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct BandsParams {
    /// `min_lon,min_lat,max_lon,max_lat`; the configured bounds when absent.
    pub bbox: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct LabelParams {
    pub bbox: Option<String>,
    pub top_margin: Option<String>,
    pub bottom_margin: Option<String>,
}

fn request_bounds(state: &AppState, bbox: Option<&str>) -> TzMapResult<MapBounds> {
    match bbox {
        Some(s) if !s.trim().is_empty() => Ok(MapBounds::from_query_string(s)?),
        _ => Ok(state.config.bounds),
    }
}

/// GET /api/bands
pub async fn bands_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<BandsParams>,
) -> Response {
    record_request("bands");
    into_response(bands(&state, &params))
}

fn bands(state: &AppState, params: &BandsParams) -> TzMapResult<Response> {
    let bounds = request_bounds(state, params.bbox.as_deref())?;
    Ok(json_response(GEO_JSON, &build_bands(&bounds)))
}

/// GET /api/bands/labels
pub async fn band_labels_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<LabelParams>,
) -> Response {
    record_request("band_labels");
    into_response(band_labels(&state, &params))
}

fn band_labels(state: &AppState, params: &LabelParams) -> TzMapResult<Response> {
    let bounds = request_bounds(state, params.bbox.as_deref())?;
    let defaults = state.config.label_margins;
    let margins = LabelMargins {
        top: parse_finite("top_margin", params.top_margin.as_deref())?.unwrap_or(defaults.top),
        bottom: parse_finite("bottom_margin", params.bottom_margin.as_deref())?
            .unwrap_or(defaults.bottom),
    };
    Ok(json_response(GEO_JSON, &build_band_labels(&bounds, margins)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;
    use axum::http::StatusCode;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn state() -> Arc<AppState> {
        Arc::new(AppState::new(MapConfig::default()))
    }

    #[tokio::test]
    async fn test_bands_default_bounds() {
        let response = bands_handler(Extension(state()), Query(BandsParams::default())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], GEO_JSON);

        let json = body_json(response).await;
        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"].as_array().unwrap().len(), 27);
        assert_eq!(json["features"][12]["properties"]["label"], "UTC±0");
    }

    #[tokio::test]
    async fn test_bands_with_bbox() {
        let params = BandsParams {
            bbox: Some("-10,35,50,72".to_string()),
        };
        let json = body_json(bands_handler(Extension(state()), Query(params)).await).await;
        // UTC-12 is clamped to a sliver at the western edge.
        let ring = &json["features"][0]["geometry"]["coordinates"][0];
        assert_eq!(ring[0][0], -10.0);
        assert_eq!(ring[1][0], -10.0);
    }

    #[tokio::test]
    async fn test_bands_invalid_bbox() {
        let params = BandsParams {
            bbox: Some("1,2,3".to_string()),
        };
        let response = bands_handler(Extension(state()), Query(params)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "InvalidBBox");
    }

    #[tokio::test]
    async fn test_labels_custom_margins() {
        let params = LabelParams {
            top_margin: Some("1".to_string()),
            ..LabelParams::default()
        };
        let response = band_labels_handler(Extension(state()), Query(params)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let features = json["features"].as_array().unwrap();
        assert_eq!(features.len(), 54);
        assert_eq!(features[0]["geometry"]["coordinates"][1], 84.0);
        assert_eq!(features[1]["geometry"]["coordinates"][1], -58.0);
    }

    #[tokio::test]
    async fn test_labels_reject_non_finite_margin() {
        let params = LabelParams {
            bottom_margin: Some("NaN".to_string()),
            ..LabelParams::default()
        };
        let response = band_labels_handler(Extension(state()), Query(params)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
