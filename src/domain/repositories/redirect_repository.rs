//! Repository trait for redirect data access.

use crate::domain::entities::{NewRedirect, Redirect, RedirectPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for redirect records.
///
/// Implementations own all storage mechanics; ownership checks, slug
/// allocation and error degradation policy live in
/// [`crate::application::services::RedirectService`].
///
/// Implementations must enforce slug uniqueness and report a duplicate as
/// [`AppError::Conflict`] on
/// [`SLUG_UNIQUE_CONSTRAINT`](crate::utils::db_error::SLUG_UNIQUE_CONSTRAINT).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRedirectRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryRedirectRepository`] - process-local
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectRepository: Send + Sync {
    /// Persists a new redirect with `click_count = 0` and
    /// `created_at = updated_at = now`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already taken.
    async fn create(&self, new_redirect: NewRedirect) -> Result<Redirect, AppError>;

    /// Finds a redirect by its store-assigned id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Redirect>, AppError>;

    /// Finds a redirect by its public slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Redirect>, AppError>;

    /// Returns true if any record other than `exclude_id` uses `slug`.
    async fn slug_exists(&self, slug: &str, exclude_id: Option<i64>) -> Result<bool, AppError>;

    /// Lists an owner's redirects, newest first, sorted by the store.
    ///
    /// May fail where the store cannot serve a filtered and sorted query;
    /// callers fall back to [`Self::list_by_owner_unsorted`].
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Redirect>, AppError>;

    /// Lists an owner's redirects in no particular order.
    async fn list_by_owner_unsorted(&self, owner_id: &str) -> Result<Vec<Redirect>, AppError>;

    /// Lists every redirect, newest first.
    async fn list_all(&self) -> Result<Vec<Redirect>, AppError>;

    /// Applies a partial update and bumps `updated_at`.
    ///
    /// `new_slug` replaces the slug when present.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Conflict`] if `new_slug` is already taken.
    async fn update(
        &self,
        id: i64,
        patch: RedirectPatch,
        new_slug: Option<String>,
    ) -> Result<Redirect, AppError>;

    /// Removes a redirect. Returns `Ok(false)` if it did not exist.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Atomically adds one to `click_count` and bumps `updated_at`.
    ///
    /// Must not be implemented as read-modify-write. Returns `Ok(false)` if no
    /// record has this slug.
    async fn increment_clicks(&self, slug: &str) -> Result<bool, AppError>;

    /// Counts all redirects. The health check uses it to test connectivity.
    async fn count(&self) -> Result<i64, AppError>;
}
