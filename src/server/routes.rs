//! Router configuration for the agenda server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // The agenda page
        .route("/", get(handlers::index))
        // Downloadable assets (spreadsheet, PDF)
        .route("/files/*path", get(handlers::serve_asset))
        // Stylesheet
        .route("/static/style.css", get(handlers::serve_css))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
