#![allow(dead_code)]

use axum::{Router, middleware, routing::get};
use seo_redirect::api;
use seo_redirect::api::handlers::{
    health_handler, preview_handler, resolve_handler, sitemap_handler,
};
use seo_redirect::api::middleware::auth;
use seo_redirect::application::services::hash_token;
use seo_redirect::domain::click_event::ClickEvent;
use seo_redirect::infrastructure::persistence::{PgRedirectRepository, PgTokenRepository};
use seo_redirect::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";
pub const TEST_BASE_URL: &str = "https://seo.test";

/// Inserts an API token for `owner_id` and returns the raw bearer value.
pub async fn create_test_token(pool: &PgPool, owner_id: &str) -> String {
    let raw = format!("token-for-{owner_id}");
    sqlx::query("INSERT INTO api_tokens (name, owner_id, token_hash) VALUES ($1, $2, $3)")
        .bind(format!("{owner_id} token"))
        .bind(owner_id)
        .bind(hash_token(TEST_SIGNING_SECRET, &raw))
        .execute(pool)
        .await
        .unwrap();
    raw
}

/// Inserts a redirect row directly and returns its id.
pub async fn create_test_redirect(
    pool: &PgPool,
    slug: &str,
    target_url: &str,
    owner_id: &str,
) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO redirects (title, description, target_url, keywords, slug, owner_id)
        VALUES ($1, 'A description', $2, 'seo, tips', $3, $4)
        RETURNING id
        "#,
    )
    .bind(slug.replace('-', " "))
    .bind(target_url)
    .bind(slug)
    .bind(owner_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn click_count(pool: &PgPool, slug: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM redirects WHERE slug = $1")
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> (AppState, mpsc::Receiver<ClickEvent>) {
    let pool = Arc::new(pool);
    let (tx, rx) = mpsc::channel(100);

    let state = AppState::new(
        Arc::new(PgRedirectRepository::new(pool.clone())),
        Arc::new(PgTokenRepository::new(pool)),
        tx,
        TEST_BASE_URL,
        TEST_SIGNING_SECRET,
    );

    (state, rx)
}

/// Public and authenticated routes wired the way the server wires them.
pub fn create_test_app(state: AppState) -> Router {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/r/{slug}", get(resolve_handler))
        .route("/p/{slug}", get(preview_handler))
        .route("/sitemap.json", get(sitemap_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
}
