//! Handlers for owner-facing redirect management.
//!
//! Every route here sits behind [`crate::api::middleware::auth::layer`], which
//! supplies the [`Owner`] extension.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::redirect::{
    CreateRedirectRequest, RedirectListResponse, RedirectResponse, UpdateRedirectRequest,
};
use crate::api::middleware::auth::Owner;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a redirect owned by the caller.
///
/// # Endpoint
///
/// `POST /api/redirects`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Best SEO Tips",
///   "description": "Ten tips for better rankings",
///   "target_url": "example.com/blog/seo-tips",
///   "image": "https://example.com/cover.png",
///   "keywords": "seo, marketing",
///   "site_name": "Example",
///   "type": "article"
/// }
/// ```
///
/// The slug is derived from the title (`best-seo-tips`, then
/// `best-seo-tips-1`, ...).
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if the slug could not be allocated.
pub async fn create_redirect_handler(
    State(state): State<AppState>,
    Extension(Owner(owner_id)): Extension<Owner>,
    Json(payload): Json<CreateRedirectRequest>,
) -> Result<(StatusCode, Json<RedirectResponse>), AppError> {
    payload.validate()?;

    let redirect = state
        .redirect_service
        .create_redirect(payload.into(), &owner_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RedirectResponse::new(redirect, &state.base_url)),
    ))
}

/// Lists the caller's redirects, newest first.
///
/// # Endpoint
///
/// `GET /api/redirects`
///
/// Store failures yield an empty list rather than an error.
pub async fn list_redirects_handler(
    State(state): State<AppState>,
    Extension(Owner(owner_id)): Extension<Owner>,
) -> Json<RedirectListResponse> {
    let items: Vec<RedirectResponse> = state
        .redirect_service
        .list_redirects(&owner_id)
        .await
        .into_iter()
        .map(|r| RedirectResponse::new(r, &state.base_url))
        .collect();

    Json(RedirectListResponse {
        total: items.len(),
        items,
    })
}

/// Returns one of the caller's redirects.
///
/// # Endpoint
///
/// `GET /api/redirects/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the redirect does not exist or belongs to
/// someone else.
pub async fn get_redirect_handler(
    State(state): State<AppState>,
    Extension(Owner(owner_id)): Extension<Owner>,
    Path(id): Path<i64>,
) -> Result<Json<RedirectResponse>, AppError> {
    let redirect = state.redirect_service.get_redirect(id, &owner_id).await?;
    Ok(Json(RedirectResponse::new(redirect, &state.base_url)))
}

/// Partially updates a redirect.
///
/// # Endpoint
///
/// `PATCH /api/redirects/{id}`
///
/// # Request Body
///
/// All fields are optional. `null` clears `image`, `keywords`, `site_name`
/// and `type`.
///
/// ```json
/// { "title": "Rust Guide", "image": null }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 403 Forbidden if the caller does not own the redirect.
/// Returns 404 Not Found if the redirect does not exist.
pub async fn update_redirect_handler(
    State(state): State<AppState>,
    Extension(Owner(owner_id)): Extension<Owner>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRedirectRequest>,
) -> Result<Json<RedirectResponse>, AppError> {
    payload.validate()?;

    let redirect = state
        .redirect_service
        .update_redirect(id, payload.into(), &owner_id)
        .await?;

    Ok(Json(RedirectResponse::new(redirect, &state.base_url)))
}

/// Deletes a redirect.
///
/// # Endpoint
///
/// `DELETE /api/redirects/{id}`
///
/// # Response Codes
///
/// - **204 No Content**: Deleted
/// - **403 Forbidden**: Owned by someone else
/// - **404 Not Found**: No such redirect
pub async fn delete_redirect_handler(
    State(state): State<AppState>,
    Extension(Owner(owner_id)): Extension<Owner>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if state
        .redirect_service
        .delete_redirect(id, &owner_id)
        .await?
    {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(
            "Redirect not found",
            json!({ "id": id }),
        ))
    }
}
