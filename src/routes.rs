//! Top-level router configuration combining public and API routes.
//!
//! # Route Structure
//!
//! - `GET  /r/{slug}`      - Redirect to the target URL (public)
//! - `GET  /p/{slug}`      - Preview metadata for an interstitial (public)
//! - `GET  /sitemap.json`  - Sitemap feed (public)
//! - `GET  /health`        - Health check: DB, click queue (public)
//! - `/api/*`              - Redirect management (Bearer token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer token on `/api`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, preview_handler, resolve_handler, sitemap_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let router = Router::new()
        .route("/r/{slug}", get(resolve_handler))
        .route("/p/{slug}", get(preview_handler))
        .route("/sitemap.json", get(sitemap_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
