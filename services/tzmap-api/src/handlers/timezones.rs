//! Augmented timezone polygons and single-zone offset lookups.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    response::Response,
};
use chrono::{DateTime, Utc};
use palette::{color_for, color_for_bucket, ColorMode};
use serde::{Deserialize, Serialize};
use tz_common::{parse_instant, TzMapError, TzMapResult, MAX_OFFSET, MIN_OFFSET};
use tz_geojson::{augment, filter_by_hour, is_ocean, GEO_JSON};
use tz_offset::{describe, TimezoneOffset};

use super::common::{into_response, json_response, parse_param, record_request, JSON};
use crate::state::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct TimezonesParams {
    /// Instant to evaluate offsets at; now when absent.
    pub at: Option<String>,
    /// Keep only features in this UTC hour band.
    pub hour: Option<String>,
    /// `offset` or `zone`; the configured mode when absent.
    pub mode: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct OffsetParams {
    pub at: Option<String>,
}

/// `/api/offset` body: the resolver's summary plus map attributes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OffsetResponse {
    #[serde(flatten)]
    pub offset: TimezoneOffset,
    pub is_ocean: bool,
    /// Offset-table color for the zone's hour band.
    pub color: String,
    /// String-palette color for the identifier.
    pub zone_color: String,
    pub at: DateTime<Utc>,
}

fn request_instant(at: Option<&str>) -> TzMapResult<DateTime<Utc>> {
    match at {
        Some(s) if !s.trim().is_empty() => Ok(parse_instant(s)?),
        _ => Ok(Utc::now()),
    }
}

/// GET /api/timezones
pub async fn timezones_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<TimezonesParams>,
) -> Response {
    record_request("timezones");
    into_response(timezones(&state, &params))
}

fn timezones(state: &AppState, params: &TimezonesParams) -> TzMapResult<Response> {
    let dataset = state.dataset()?;
    let at = request_instant(params.at.as_deref())?;
    let mode = parse_param::<ColorMode>("mode", params.mode.as_deref())?
        .unwrap_or(state.config.color_mode);
    let hour = parse_param::<i32>("hour", params.hour.as_deref())?;

    if let Some(h) = hour {
        if !(MIN_OFFSET..=MAX_OFFSET).contains(&h) {
            return Err(TzMapError::InvalidParameter {
                param: "hour".to_string(),
                message: format!("{} is outside {}..={}", h, MIN_OFFSET, MAX_OFFSET),
            });
        }
    }

    let augmented = augment(dataset, at, mode);
    let body = match hour {
        Some(h) => filter_by_hour(&augmented, h),
        None => augmented,
    };
    Ok(json_response(GEO_JSON, &body))
}

/// GET /api/offset/*tzid
pub async fn offset_handler(
    Path(tzid): Path<String>,
    Query(params): Query<OffsetParams>,
) -> Response {
    record_request("offset");
    into_response(offset(&tzid, &params))
}

fn offset(tzid: &str, params: &OffsetParams) -> TzMapResult<Response> {
    let tzid = tzid.trim_start_matches('/');
    let at = request_instant(params.at.as_deref())?;

    let offset = describe(tzid, at);
    if !offset.known {
        return Err(TzMapError::UnknownTimezone(tzid.to_string()));
    }

    let response = OffsetResponse {
        is_ocean: is_ocean(tzid),
        color: color_for_bucket(offset.utc_hour).to_string(),
        zone_color: color_for(tzid).to_string(),
        offset,
        at,
    };
    Ok(json_response(JSON, &response))
}
