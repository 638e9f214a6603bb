//! Handler for the sitemap feed.

use axum::{Json, extract::State};

use crate::api::dto::preview::SitemapEntry;
use crate::state::AppState;

/// Lists every public redirect URL with its last modification time.
///
/// # Endpoint
///
/// `GET /sitemap.json`
///
/// # Response
///
/// ```json
/// [
///   { "loc": "https://seo.example.com/r/best-seo-tips", "lastmod": "2025-01-01T12:00:00Z" }
/// ]
/// ```
///
/// Store failures yield an empty list.
pub async fn sitemap_handler(State(state): State<AppState>) -> Json<Vec<SitemapEntry>> {
    let entries: Vec<SitemapEntry> = state
        .redirect_service
        .sitemap_entries()
        .await
        .iter()
        .map(|r| SitemapEntry::new(r, &state.base_url))
        .collect();

    Json(entries)
}
