//! Unique slug allocation.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::repositories::RedirectRepository;
use crate::error::AppError;
use crate::utils::slug::with_suffix;

/// Numbered suffixes tried before falling back to a timestamp.
pub const MAX_NUMBERED_ATTEMPTS: u32 = 100;

/// Turns a candidate slug into one no other record uses.
///
/// The check is advisory: two concurrent allocations can return the same
/// slug. The store's unique constraint decides the winner and
/// [`crate::application::services::RedirectService`] re-allocates for the
/// loser.
pub struct SlugAllocator<R: RedirectRepository> {
    repository: Arc<R>,
}

impl<R: RedirectRepository> SlugAllocator<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns `candidate` if it is free, otherwise the first free
    /// `candidate-N` for N in `1..=100`.
    ///
    /// When every numbered slug is taken, returns `candidate-{timestamp}`
    /// without checking it. `exclude_id` lets a record keep its own slug
    /// while being re-titled.
    ///
    /// # Errors
    ///
    /// Store errors are propagated unchanged.
    pub async fn allocate(
        &self,
        candidate: &str,
        exclude_id: Option<i64>,
    ) -> Result<String, AppError> {
        if !self.repository.slug_exists(candidate, exclude_id).await? {
            return Ok(candidate.to_string());
        }

        for n in 1..=MAX_NUMBERED_ATTEMPTS {
            let slug = with_suffix(candidate, n);
            if !self.repository.slug_exists(&slug, exclude_id).await? {
                return Ok(slug);
            }
        }

        tracing::warn!(
            candidate,
            attempts = MAX_NUMBERED_ATTEMPTS,
            "Numbered slugs exhausted, using timestamp suffix"
        );

        let now = Utc::now();
        let stamp = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros());

        Ok(with_suffix(candidate, stamp))
    }
}
