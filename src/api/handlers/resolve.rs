//! Handlers for public slug resolution.

use axum::{
    Json,
    extract::{Path, State},
    response::Redirect,
};

use crate::api::dto::preview::PreviewResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its target URL.
///
/// # Endpoint
///
/// `GET /r/{slug}`
///
/// # Request Flow
///
/// 1. Look up the redirect by slug
/// 2. Queue a click increment (never awaited)
/// 3. Normalize the stored target (`example.com` → `https://example.com/`)
/// 4. Return 307 Temporary Redirect
///
/// # Errors
///
/// Returns 404 Not Found if the slug is unknown or malformed.
/// Returns 400 Bad Request if the stored target is not an HTTP(S) URL.
pub async fn resolve_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let redirect = state.redirect_service.resolve_slug(&slug).await?;
    let target = redirect.normalized_target()?;

    tracing::debug!(slug = %slug, target = %target, "Resolved slug");

    Ok(Redirect::temporary(&target))
}

/// Returns the preview metadata for a slug.
///
/// # Endpoint
///
/// `GET /p/{slug}`
///
/// Intended for an interstitial page that renders Open Graph tags before
/// forwarding the visitor. Counts as a click, like [`resolve_handler`].
///
/// # Response
///
/// ```json
/// {
///   "slug": "best-seo-tips",
///   "title": "Best SEO Tips",
///   "description": "Ten tips for better rankings",
///   "image": null,
///   "keywords": ["seo", "marketing"],
///   "site_name": "Example",
///   "type": "article",
///   "target_url": "https://example.com/blog/seo-tips",
///   "public_url": "https://seo.example.com/r/best-seo-tips"
/// }
/// ```
///
/// # Errors
///
/// Same as [`resolve_handler`].
pub async fn preview_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<PreviewResponse>, AppError> {
    let redirect = state.redirect_service.resolve_slug(&slug).await?;
    let target = redirect.normalized_target()?;

    Ok(Json(PreviewResponse::new(redirect, target, &state.base_url)))
}
