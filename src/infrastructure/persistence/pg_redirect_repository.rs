//! PostgreSQL implementation of redirect repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewRedirect, Redirect, RedirectPatch};
use crate::domain::repositories::RedirectRepository;
use crate::error::AppError;

/// PostgreSQL repository for redirect records.
///
/// Slug uniqueness is enforced by the `redirects_slug_key` constraint; a
/// violation surfaces as [`AppError::Conflict`] through the `sqlx::Error`
/// conversion.
pub struct PgRedirectRepository {
    pool: Arc<PgPool>,
}

impl PgRedirectRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RedirectRepository for PgRedirectRepository {
    async fn create(&self, new_redirect: NewRedirect) -> Result<Redirect, AppError> {
        let redirect = sqlx::query_as!(
            Redirect,
            r#"
            INSERT INTO redirects
                (title, description, target_url, image, keywords, site_name, og_type, slug, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, title, description, target_url, image, keywords, site_name,
                      og_type, slug, owner_id, click_count, created_at, updated_at
            "#,
            new_redirect.title,
            new_redirect.description,
            new_redirect.target_url,
            new_redirect.image,
            new_redirect.keywords,
            new_redirect.site_name,
            new_redirect.og_type,
            new_redirect.slug,
            new_redirect.owner_id
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(redirect)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Redirect>, AppError> {
        let redirect = sqlx::query_as!(
            Redirect,
            r#"
            SELECT id, title, description, target_url, image, keywords, site_name,
                   og_type, slug, owner_id, click_count, created_at, updated_at
            FROM redirects
            WHERE id = $1
            "#,
            id
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(redirect)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Redirect>, AppError> {
        let redirect = sqlx::query_as!(
            Redirect,
            r#"
            SELECT id, title, description, target_url, image, keywords, site_name,
                   og_type, slug, owner_id, click_count, created_at, updated_at
            FROM redirects
            WHERE slug = $1
            "#,
            slug
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(redirect)
    }

    async fn slug_exists(&self, slug: &str, exclude_id: Option<i64>) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar!(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM redirects
                WHERE slug = $1
                  AND ($2::bigint IS NULL OR id <> $2)
            ) as "exists!"
            "#,
            slug,
            exclude_id
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Redirect>, AppError> {
        let redirects = sqlx::query_as!(
            Redirect,
            r#"
            SELECT id, title, description, target_url, image, keywords, site_name,
                   og_type, slug, owner_id, click_count, created_at, updated_at
            FROM redirects
            WHERE owner_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
            owner_id
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(redirects)
    }

    async fn list_by_owner_unsorted(&self, owner_id: &str) -> Result<Vec<Redirect>, AppError> {
        let redirects = sqlx::query_as!(
            Redirect,
            r#"
            SELECT id, title, description, target_url, image, keywords, site_name,
                   og_type, slug, owner_id, click_count, created_at, updated_at
            FROM redirects
            WHERE owner_id = $1
            "#,
            owner_id
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(redirects)
    }

    async fn list_all(&self) -> Result<Vec<Redirect>, AppError> {
        let redirects = sqlx::query_as!(
            Redirect,
            r#"
            SELECT id, title, description, target_url, image, keywords, site_name,
                   og_type, slug, owner_id, click_count, created_at, updated_at
            FROM redirects
            ORDER BY created_at DESC, id DESC
            "#
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(redirects)
    }

    async fn update(
        &self,
        id: i64,
        patch: RedirectPatch,
        new_slug: Option<String>,
    ) -> Result<Redirect, AppError> {
        // Clearable columns take a "touch" flag plus the new value so that
        // `Some(None)` can write NULL.
        let redirect = sqlx::query_as!(
            Redirect,
            r#"
            UPDATE redirects
            SET title       = COALESCE($2::text, title),
                description = COALESCE($3::text, description),
                target_url  = COALESCE($4::text, target_url),
                image       = CASE WHEN $5::boolean THEN $6::text ELSE image END,
                keywords    = CASE WHEN $7::boolean THEN $8::text ELSE keywords END,
                site_name   = CASE WHEN $9::boolean THEN $10::text ELSE site_name END,
                og_type     = CASE WHEN $11::boolean THEN $12::text ELSE og_type END,
                slug        = COALESCE($13::varchar, slug),
                updated_at  = GREATEST(clock_timestamp(), updated_at + INTERVAL '1 microsecond')
            WHERE id = $1
            RETURNING id, title, description, target_url, image, keywords, site_name,
                      og_type, slug, owner_id, click_count, created_at, updated_at
            "#,
            id,
            patch.title,
            patch.description,
            patch.target_url,
            patch.image.is_some(),
            patch.image.flatten(),
            patch.keywords.is_some(),
            patch.keywords.flatten(),
            patch.site_name.is_some(),
            patch.site_name.flatten(),
            patch.og_type.is_some(),
            patch.og_type.flatten(),
            new_slug
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        redirect.ok_or_else(|| AppError::not_found("Redirect not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query!("DELETE FROM redirects WHERE id = $1", id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_clicks(&self, slug: &str) -> Result<bool, AppError> {
        let result = sqlx::query!(
            r#"
            UPDATE redirects
            SET click_count = click_count + 1,
                updated_at  = GREATEST(clock_timestamp(), updated_at + INTERVAL '1 microsecond')
            WHERE slug = $1
            "#,
            slug
        )
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar!("SELECT COUNT(*) FROM redirects")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count.unwrap_or(0))
    }
}
