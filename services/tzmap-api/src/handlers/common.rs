//! Response builders and query parsing shared by the handlers.

use std::str::FromStr;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tz_common::TzMapError;

pub const JSON: &str = "application/json";

/// Error body: `{"code": "...", "description": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub description: String,
}

impl From<&TzMapError> for ErrorBody {
    fn from(err: &TzMapError) -> Self {
        Self {
            code: err.error_code(),
            description: err.to_string(),
        }
    }
}

pub fn error_response(err: &TzMapError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_server_error() {
        tracing::error!(code = err.error_code(), "{}", err);
    } else {
        tracing::debug!(code = err.error_code(), "{}", err);
    }

    let json = serde_json::to_vec(&ErrorBody::from(err)).unwrap_or_default();
    (status, [(header::CONTENT_TYPE, JSON)], json).into_response()
}

/// Serialize `body` as a 200 response with the given content type.
pub fn json_response<T: Serialize>(content_type: &'static str, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(json) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, content_type),
                (header::CACHE_CONTROL, "max-age=60"),
            ],
            json,
        )
            .into_response(),
        Err(e) => error_response(&TzMapError::InternalError(format!(
            "Failed to serialize response: {}",
            e
        ))),
    }
}

pub fn into_response(result: Result<Response, TzMapError>) -> Response {
    result.unwrap_or_else(|e| error_response(&e))
}

/// Parse an optional query value, naming the parameter in the error.
pub fn parse_param<T>(name: &str, value: Option<&str>) -> Result<Option<T>, TzMapError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e: T::Err| TzMapError::InvalidParameter {
                param: name.to_string(),
                message: format!("'{}': {}", raw, e),
            }),
    }
}

/// [`parse_param`] for numbers that must be finite.
pub fn parse_finite(name: &str, value: Option<&str>) -> Result<Option<f64>, TzMapError> {
    match parse_param::<f64>(name, value)? {
        Some(v) if !v.is_finite() => Err(TzMapError::InvalidParameter {
            param: name.to_string(),
            message: "must be a finite number".to_string(),
        }),
        other => Ok(other),
    }
}

pub fn record_request(endpoint: &'static str) {
    metrics::counter!("tzmap_requests_total", "endpoint" => endpoint).increment(1);
}
