//! Router construction.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Bands
        .route("/api/bands", get(handlers::bands::bands_handler))
        .route(
            "/api/bands/labels",
            get(handlers::bands::band_labels_handler),
        )
        // Timezones
        .route(
            "/api/timezones",
            get(handlers::timezones::timezones_handler),
        )
        .route(
            "/api/offset/*tzid",
            get(handlers::timezones::offset_handler),
        )
        // Palettes
        .route("/api/colors/:key", get(handlers::colors::color_handler))
        .route("/api/palette", get(handlers::colors::palette_handler))
        // Styling
        .route("/api/style/layers", get(handlers::style::layers_handler))
        .route("/api/focus", get(handlers::style::focus_handler))
        // Health and metrics
        .route("/health", get(handlers::health::health_handler))
        .route("/ready", get(handlers::health::ready_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
