//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_redirect_handler, delete_redirect_handler, get_redirect_handler,
    list_redirects_handler, update_redirect_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /redirects`       - List the caller's redirects
/// - `POST   /redirects`       - Create a redirect
/// - `GET    /redirects/{id}`  - Fetch one of the caller's redirects
/// - `PATCH  /redirects/{id}`  - Partially update a redirect
/// - `DELETE /redirects/{id}`  - Delete a redirect
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/redirects",
            get(list_redirects_handler).post(create_redirect_handler),
        )
        .route(
            "/redirects/{id}",
            get(get_redirect_handler)
                .patch(update_redirect_handler)
                .delete(delete_redirect_handler),
        )
}
