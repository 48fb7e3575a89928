//! Layer definitions and hover focus filters.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::Response,
};
use layers::{layer_definitions, FocusFilters};
use serde::Deserialize;
use tz_common::{HourBucket, TzMapResult};

use super::common::{into_response, json_response, parse_finite, record_request, JSON};
use crate::state::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct FocusParams {
    /// Offset of the hovered band; no focus when absent.
    pub offset: Option<String>,
}

/// GET /api/style/layers
pub async fn layers_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    record_request("layers");
    json_response(JSON, &layer_definitions(&state.config.style))
}

/// GET /api/focus
pub async fn focus_handler(Query(params): Query<FocusParams>) -> Response {
    record_request("focus");
    into_response(focus(&params))
}

fn focus(params: &FocusParams) -> TzMapResult<Response> {
    let offset = parse_finite("offset", params.offset.as_deref())?
        .map(|v| HourBucket::from_offset(v).hour());
    Ok(json_response(JSON, &FocusFilters::for_offset(offset)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_layers_use_configured_style() {
        let mut config = MapConfig::default();
        config.style.zone_highlight_opacity = 0.5;
        let state = Arc::new(AppState::new(config));

        let json = body_json(layers_handler(Extension(state)).await).await;
        let layers = json.as_array().unwrap();
        assert_eq!(layers.len(), 7);
        let highlight = layers.iter().find(|l| l["id"] == "tz-fill-highlight").unwrap();
        assert_eq!(highlight["paint"]["fill-opacity"], 0.5);
    }

    #[tokio::test]
    async fn test_focus_filters() {
        let params = FocusParams {
            offset: Some("-5".to_string()),
        };
        let json = body_json(focus_handler(Query(params)).await).await;
        assert_eq!(json["tz-fill-highlight"], json!(["==", ["get", "utcHour"], -5]));
        assert_eq!(json["utc-bands-highlight"], json!(["==", ["get", "offset"], -5]));
    }

    #[tokio::test]
    async fn test_focus_cleared() {
        let json = body_json(focus_handler(Query(FocusParams::default())).await).await;
        assert_eq!(json["tz-line-highlight"], json!(["==", ["get", "utcHour"], 9999]));
    }

    #[tokio::test]
    async fn test_focus_rejects_garbage() {
        let params = FocusParams {
            offset: Some("east".to_string()),
        };
        let response = focus_handler(Query(params)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
