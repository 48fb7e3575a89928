//! Palette and color lookups.

use axum::{extract::Path, response::Response};
use palette::{color_for, OFFSET_COLORS, ZONE_PALETTE};
use serde::Serialize;
use tz_common::band_label;

use super::common::{json_response, record_request, JSON};

#[derive(Debug, Serialize)]
pub struct KeyColor {
    pub key: String,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct OffsetColor {
    pub offset: i32,
    pub label: String,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct PaletteResponse {
    /// String-keyed palette, indexed by `djb2(key) % 8`.
    pub zone: Vec<String>,
    /// Offset table from -12 to +14.
    pub offset: Vec<OffsetColor>,
}

/// GET /api/colors/:key
pub async fn color_handler(Path(key): Path<String>) -> Response {
    record_request("colors");
    let color = color_for(&key).to_string();
    json_response(JSON, &KeyColor { key, color })
}

/// GET /api/palette
pub async fn palette_handler() -> Response {
    record_request("palette");
    let response = PaletteResponse {
        zone: ZONE_PALETTE.iter().map(|c| c.to_string()).collect(),
        offset: OFFSET_COLORS
            .iter()
            .map(|(offset, color)| OffsetColor {
                offset: *offset,
                label: band_label(*offset),
                color: color.to_string(),
            })
            .collect(),
    };
    json_response(JSON, &response)
}
