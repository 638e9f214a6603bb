//! Redirect management and resolution service.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use crate::application::services::SlugAllocator;
use crate::domain::click_event::ClickEvent;
use crate::domain::click_worker::record_click;
use crate::domain::entities::{
    NewRedirect, Redirect, RedirectFields, RedirectPatch, sort_newest_first,
};
use crate::domain::repositories::RedirectRepository;
use crate::error::AppError;
use crate::utils::db_error::SLUG_UNIQUE_CONSTRAINT;
use crate::utils::slug::{is_valid_slug, normalize};

/// Persist attempts when a concurrent writer takes the allocated slug first.
const MAX_SLUG_CONFLICT_RETRIES: usize = 5;

/// Owner-facing CRUD and public slug resolution.
///
/// # Error policy
///
/// - Writes propagate store errors to the caller
/// - Reads by id or slug degrade to [`AppError::NotFound`]
/// - Listings degrade to an empty list
/// - Click increments never surface errors
///
/// Every degraded failure is logged.
pub struct RedirectService<R: RedirectRepository> {
    repository: Arc<R>,
    allocator: SlugAllocator<R>,
    click_sender: mpsc::Sender<ClickEvent>,
}

impl<R: RedirectRepository> RedirectService<R> {
    pub fn new(repository: Arc<R>, click_sender: mpsc::Sender<ClickEvent>) -> Self {
        Self {
            allocator: SlugAllocator::new(repository.clone()),
            repository,
            click_sender,
        }
    }

    /// Creates a redirect owned by `owner_id` with a slug derived from its
    /// title.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the title or target URL is blank.
    /// Returns [`AppError::Conflict`] if the slug kept colliding with
    /// concurrent writers.
    pub async fn create_redirect(
        &self,
        fields: RedirectFields,
        owner_id: &str,
    ) -> Result<Redirect, AppError> {
        require_non_blank("title", &fields.title)?;
        require_non_blank("target_url", &fields.target_url)?;

        let candidate = normalize(&fields.title);
        let mut attempt = 1;

        loop {
            let slug = self.allocator.allocate(&candidate, None).await?;
            let new_redirect =
                NewRedirect::from_fields(fields.clone(), slug.clone(), owner_id.to_string());

            match self.repository.create(new_redirect).await {
                Ok(redirect) => {
                    tracing::info!(id = redirect.id, slug = %redirect.slug, owner_id, "Redirect created");
                    return Ok(redirect);
                }
                Err(e)
                    if e.is_conflict_on(SLUG_UNIQUE_CONSTRAINT)
                        && attempt < MAX_SLUG_CONFLICT_RETRIES =>
                {
                    tracing::warn!(slug = %slug, attempt, "Slug taken concurrently, reallocating");
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Returns the redirect `id` if `owner_id` owns it.
    ///
    /// A record owned by someone else is reported as missing.
    pub async fn get_redirect(&self, id: i64, owner_id: &str) -> Result<Redirect, AppError> {
        let found = match self.repository.find_by_id(id).await {
            Ok(found) => found,
            Err(e) => {
                tracing::error!(id, error = %e, "Lookup by id failed");
                None
            }
        };

        found
            .filter(|r| r.owner_id == owner_id)
            .ok_or_else(|| AppError::not_found("Redirect not found", json!({ "id": id })))
    }

    /// Public lookup by slug. No ownership check.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Redirect, AppError> {
        let found = match self.repository.find_by_slug(slug).await {
            Ok(found) => found,
            Err(e) => {
                tracing::error!(slug, error = %e, "Lookup by slug failed");
                None
            }
        };

        found.ok_or_else(|| AppError::not_found("Redirect not found", json!({ "slug": slug })))
    }

    /// Lists an owner's redirects, newest first (ties broken by id, highest
    /// first).
    ///
    /// Uses the store's sorted query and falls back to an unsorted query
    /// sorted in memory. Returns an empty list if both fail.
    pub async fn list_redirects(&self, owner_id: &str) -> Vec<Redirect> {
        match self.repository.list_by_owner(owner_id).await {
            Ok(redirects) => return redirects,
            Err(e) => {
                tracing::warn!(owner_id, error = %e, "Sorted listing failed, sorting in memory");
            }
        }

        match self.repository.list_by_owner_unsorted(owner_id).await {
            Ok(mut redirects) => {
                sort_newest_first(&mut redirects);
                redirects
            }
            Err(e) => {
                tracing::error!(owner_id, error = %e, "Listing failed");
                Vec::new()
            }
        }
    }

    /// Applies a partial update.
    ///
    /// A changed title re-derives the slug, skipping the record's own slug
    /// when checking for collisions. `updated_at` is bumped on every call.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::Unauthorized`] if `owner_id` does not own it.
    /// Returns [`AppError::Validation`] if the patch blanks the title or
    /// target URL.
    pub async fn update_redirect(
        &self,
        id: i64,
        patch: RedirectPatch,
        owner_id: &str,
    ) -> Result<Redirect, AppError> {
        if let Some(title) = &patch.title {
            require_non_blank("title", title)?;
        }
        if let Some(target_url) = &patch.target_url {
            require_non_blank("target_url", target_url)?;
        }

        let existing = self.owned_for_write(id, owner_id).await?;

        let Some(title) = patch.changed_title(&existing.title) else {
            return self.repository.update(id, patch, None).await;
        };

        let candidate = normalize(title);
        let mut attempt = 1;

        loop {
            let slug = self.allocator.allocate(&candidate, Some(id)).await?;
            let new_slug = (slug != existing.slug).then_some(slug);

            match self.repository.update(id, patch.clone(), new_slug).await {
                Ok(redirect) => {
                    tracing::info!(id, slug = %redirect.slug, "Redirect re-titled");
                    return Ok(redirect);
                }
                Err(e)
                    if e.is_conflict_on(SLUG_UNIQUE_CONSTRAINT)
                        && attempt < MAX_SLUG_CONFLICT_RETRIES =>
                {
                    tracing::warn!(id, attempt, "Slug taken concurrently, reallocating");
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Deletes a redirect.
    ///
    /// Returns `Ok(false)` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if `owner_id` does not own it.
    pub async fn delete_redirect(&self, id: i64, owner_id: &str) -> Result<bool, AppError> {
        let Some(existing) = self.repository.find_by_id(id).await? else {
            return Ok(false);
        };
        ensure_owner(&existing, owner_id)?;

        let deleted = self.repository.delete(id).await?;
        if deleted {
            tracing::info!(id, slug = %existing.slug, "Redirect deleted");
        }
        Ok(deleted)
    }

    /// Resolves a public slug and queues a click for it.
    ///
    /// The click is counted asynchronously; resolution never waits on it.
    pub async fn resolve_slug(&self, slug: &str) -> Result<Redirect, AppError> {
        if !is_valid_slug(slug) {
            return Err(AppError::not_found(
                "Redirect not found",
                json!({ "slug": slug }),
            ));
        }

        let redirect = self.get_by_slug(slug).await?;

        match self.click_sender.try_send(ClickEvent::new(slug)) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::warn!(slug, "Click queue full, click dropped");
            }
            Err(TrySendError::Closed(_)) => {
                tracing::warn!(slug, "Click queue closed, click dropped");
            }
        }

        Ok(redirect)
    }

    /// Increments the click counter for `slug` in place.
    ///
    /// Errors are logged, never returned.
    pub async fn increment_clicks(&self, slug: &str) {
        record_click(self.repository.as_ref(), slug).await;
    }

    /// Every redirect, newest first, for the sitemap. Empty on failure.
    pub async fn sitemap_entries(&self) -> Vec<Redirect> {
        self.repository.list_all().await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Sitemap listing failed");
            Vec::new()
        })
    }

    /// Returns the number of stored redirects, probing the store.
    pub async fn health_check(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    async fn owned_for_write(&self, id: i64, owner_id: &str) -> Result<Redirect, AppError> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Redirect not found", json!({ "id": id })))?;

        ensure_owner(&existing, owner_id)?;
        Ok(existing)
    }
}

/// Builds the public URL visitors use: `{base_url}/r/{slug}`.
pub fn build_public_url(base_url: &str, redirect: &Redirect) -> String {
    format!("{}/r/{}", base_url.trim_end_matches('/'), redirect.slug)
}

fn ensure_owner(redirect: &Redirect, owner_id: &str) -> Result<(), AppError> {
    if redirect.owner_id == owner_id {
        Ok(())
    } else {
        Err(AppError::unauthorized(
            "You may only modify your own redirects",
            json!({ "id": redirect.id }),
        ))
    }
}

fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(
            format!("{field} must not be empty"),
            json!({ "field": field }),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockRedirectRepository;
    use chrono::{Duration, Utc};
    use mockall::predicate::eq;

    fn create_test_redirect(id: i64, slug: &str, owner_id: &str) -> Redirect {
        let now = Utc::now();
        Redirect {
            id,
            title: "Best SEO Tips".to_string(),
            description: "Ten tips".to_string(),
            target_url: "https://example.com/tips".to_string(),
            image: None,
            keywords: None,
            site_name: None,
            og_type: None,
            slug: slug.to_string(),
            owner_id: owner_id.to_string(),
            click_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    fn fields(title: &str) -> RedirectFields {
        RedirectFields {
            title: title.to_string(),
            target_url: "https://example.com/tips".to_string(),
            ..Default::default()
        }
    }

    fn service(mock_repo: MockRedirectRepository) -> RedirectService<MockRedirectRepository> {
        let (tx, _rx) = mpsc::channel(10);
        RedirectService::new(Arc::new(mock_repo), tx)
    }

    #[tokio::test]
    async fn test_create_redirect_success() {
        let mut mock_repo = MockRedirectRepository::new();

        mock_repo
            .expect_slug_exists()
            .withf(|slug, _| slug == "best-seo-tips")
            .times(1)
            .returning(|_, _| Ok(false));

        let created = create_test_redirect(1, "best-seo-tips", "user-1");
        mock_repo
            .expect_create()
            .withf(|new| new.slug == "best-seo-tips" && new.owner_id == "user-1")
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let result = service(mock_repo)
            .create_redirect(fields("Best SEO Tips!!"), "user-1")
            .await;

        assert_eq!(result.unwrap().slug, "best-seo-tips");
    }

    #[tokio::test]
    async fn test_create_redirect_blank_title() {
        let mock_repo = MockRedirectRepository::new();

        let result = service(mock_repo)
            .create_redirect(fields("   "), "user-1")
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_redirect_blank_target() {
        let mock_repo = MockRedirectRepository::new();
        let mut input = fields("Title");
        input.target_url = String::new();

        let result = service(mock_repo).create_redirect(input, "user-1").await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_redirect_retries_on_slug_conflict() {
        let mut mock_repo = MockRedirectRepository::new();

        // First allocation sees "x" free, loses the race, second sees it taken.
        let mut checks = 0;
        mock_repo
            .expect_slug_exists()
            .times(3)
            .returning(move |slug, _| {
                checks += 1;
                Ok(checks > 1 && slug == "x")
            });

        let mut creates = 0;
        mock_repo.expect_create().times(2).returning(move |new| {
            creates += 1;
            if creates == 1 {
                Err(AppError::slug_taken())
            } else {
                Ok(create_test_redirect(2, &new.slug, &new.owner_id))
            }
        });

        let result = service(mock_repo).create_redirect(fields("X"), "user-1").await;

        assert_eq!(result.unwrap().slug, "x-1");
    }

    #[tokio::test]
    async fn test_create_redirect_gives_up_after_conflicts() {
        let mut mock_repo = MockRedirectRepository::new();
        mock_repo
            .expect_slug_exists()
            .times(MAX_SLUG_CONFLICT_RETRIES)
            .returning(|_, _| Ok(false));
        mock_repo
            .expect_create()
            .times(MAX_SLUG_CONFLICT_RETRIES)
            .returning(|_| Err(AppError::slug_taken()));

        let result = service(mock_repo).create_redirect(fields("X"), "user-1").await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_create_redirect_propagates_store_errors() {
        let mut mock_repo = MockRedirectRepository::new();
        mock_repo
            .expect_slug_exists()
            .times(1)
            .returning(|_, _| Err(AppError::store_unavailable("down", json!({}))));
        mock_repo.expect_create().times(0);

        let result = service(mock_repo).create_redirect(fields("X"), "user-1").await;

        assert!(matches!(result, Err(AppError::StoreUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_get_redirect_other_owner_is_not_found() {
        let mut mock_repo = MockRedirectRepository::new();
        let existing = create_test_redirect(1, "x", "user-1");
        mock_repo
            .expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        let result = service(mock_repo).get_redirect(1, "user-2").await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_get_redirect_store_error_degrades_to_not_found() {
        let mut mock_repo = MockRedirectRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Err(AppError::store_unavailable("down", json!({}))));

        let result = service(mock_repo).get_redirect(1, "user-1").await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_get_by_slug_store_error_degrades_to_not_found() {
        let mut mock_repo = MockRedirectRepository::new();
        mock_repo
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Err(AppError::internal("boom", json!({}))));

        let result = service(mock_repo).get_by_slug("x").await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_redirects_uses_sorted_query() {
        let mut mock_repo = MockRedirectRepository::new();
        let records = vec![
            create_test_redirect(2, "b", "user-1"),
            create_test_redirect(1, "a", "user-1"),
        ];
        mock_repo
            .expect_list_by_owner()
            .times(1)
            .returning(move |_| Ok(records.clone()));
        mock_repo.expect_list_by_owner_unsorted().times(0);

        let result = service(mock_repo).list_redirects("user-1").await;

        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_list_redirects_falls_back_to_in_memory_sort() {
        let mut mock_repo = MockRedirectRepository::new();
        let base = Utc::now();

        let mut oldest = create_test_redirect(1, "a", "user-1");
        oldest.created_at = base - Duration::seconds(10);
        let mut tie_low = create_test_redirect(2, "b", "user-1");
        tie_low.created_at = base;
        let mut tie_high = create_test_redirect(3, "c", "user-1");
        tie_high.created_at = base;

        let unsorted = vec![tie_low, oldest, tie_high];

        mock_repo
            .expect_list_by_owner()
            .times(1)
            .returning(|_| Err(AppError::internal("no index", json!({}))));
        mock_repo
            .expect_list_by_owner_unsorted()
            .times(1)
            .returning(move |_| Ok(unsorted.clone()));

        let result = service(mock_repo).list_redirects("user-1").await;

        let ids: Vec<i64> = result.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_list_redirects_degrades_to_empty() {
        let mut mock_repo = MockRedirectRepository::new();
        mock_repo
            .expect_list_by_owner()
            .returning(|_| Err(AppError::store_unavailable("down", json!({}))));
        mock_repo
            .expect_list_by_owner_unsorted()
            .returning(|_| Err(AppError::store_unavailable("down", json!({}))));

        let result = service(mock_repo).list_redirects("user-1").await;

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_update_redirect_description_only_keeps_slug() {
        let mut mock_repo = MockRedirectRepository::new();
        let existing = create_test_redirect(1, "best-seo-tips", "user-1");
        let returned = existing.clone();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_slug_exists().times(0);
        mock_repo
            .expect_update()
            .withf(|id, patch, new_slug| {
                *id == 1 && patch.description.as_deref() == Some("New") && new_slug.is_none()
            })
            .times(1)
            .returning(move |_, _, _| Ok(returned.clone()));

        let patch = RedirectPatch {
            description: Some("New".to_string()),
            ..Default::default()
        };

        let result = service(mock_repo).update_redirect(1, patch, "user-1").await;

        assert_eq!(result.unwrap().slug, "best-seo-tips");
    }

    #[tokio::test]
    async fn test_update_redirect_new_title_reslugs() {
        let mut mock_repo = MockRedirectRepository::new();
        let existing = create_test_redirect(1, "best-seo-tips", "user-1");

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo
            .expect_slug_exists()
            .withf(|slug, exclude| slug == "rust-guide" && *exclude == Some(1))
            .times(1)
            .returning(|_, _| Ok(false));
        mock_repo
            .expect_update()
            .withf(|_, _, new_slug| new_slug.as_deref() == Some("rust-guide"))
            .times(1)
            .returning(|_, _, _| Ok(create_test_redirect(1, "rust-guide", "user-1")));

        let patch = RedirectPatch {
            title: Some("Rust Guide".to_string()),
            ..Default::default()
        };

        let result = service(mock_repo).update_redirect(1, patch, "user-1").await;

        assert_eq!(result.unwrap().slug, "rust-guide");
    }

    #[tokio::test]
    async fn test_update_redirect_same_slug_not_rewritten() {
        let mut mock_repo = MockRedirectRepository::new();
        let existing = create_test_redirect(1, "best-seo-tips", "user-1");
        let returned = existing.clone();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo
            .expect_slug_exists()
            .times(1)
            .returning(|_, _| Ok(false));
        mock_repo
            .expect_update()
            .withf(|_, _, new_slug| new_slug.is_none())
            .times(1)
            .returning(move |_, _, _| Ok(returned.clone()));

        // Different title text, same normalized slug.
        let patch = RedirectPatch {
            title: Some("Best SEO tips!".to_string()),
            ..Default::default()
        };

        let result = service(mock_repo).update_redirect(1, patch, "user-1").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_redirect_not_owner() {
        let mut mock_repo = MockRedirectRepository::new();
        let existing = create_test_redirect(1, "x", "user-1");
        mock_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_update().times(0);

        let result = service(mock_repo)
            .update_redirect(1, RedirectPatch::default(), "user-2")
            .await;

        match result {
            Err(AppError::Unauthorized { message, .. }) => {
                assert_eq!(message, "You may only modify your own redirects");
            }
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_redirect_missing() {
        let mut mock_repo = MockRedirectRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(mock_repo)
            .update_redirect(9, RedirectPatch::default(), "user-1")
            .await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_redirect_rejects_blank_title() {
        let mock_repo = MockRedirectRepository::new();
        let patch = RedirectPatch {
            title: Some(" ".to_string()),
            ..Default::default()
        };

        let result = service(mock_repo).update_redirect(1, patch, "user-1").await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_delete_redirect_missing_returns_false() {
        let mut mock_repo = MockRedirectRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));
        mock_repo.expect_delete().times(0);

        let result = service(mock_repo).delete_redirect(1, "user-1").await;

        assert!(!result.unwrap());
    }

    #[tokio::test]
    async fn test_delete_redirect_not_owner() {
        let mut mock_repo = MockRedirectRepository::new();
        let existing = create_test_redirect(1, "x", "user-1");
        mock_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_delete().times(0);

        let result = service(mock_repo).delete_redirect(1, "user-2").await;

        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn test_delete_redirect_success() {
        let mut mock_repo = MockRedirectRepository::new();
        let existing = create_test_redirect(1, "x", "user-1");
        mock_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo
            .expect_delete()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(true));

        let result = service(mock_repo).delete_redirect(1, "user-1").await;

        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn test_resolve_slug_enqueues_click() {
        let mut mock_repo = MockRedirectRepository::new();
        let existing = create_test_redirect(1, "best-seo-tips", "user-1");
        mock_repo
            .expect_find_by_slug()
            .returning(move |_| Ok(Some(existing.clone())));

        let (tx, mut rx) = mpsc::channel(10);
        let service = RedirectService::new(Arc::new(mock_repo), tx);

        let redirect = service.resolve_slug("best-seo-tips").await.unwrap();

        assert_eq!(redirect.id, 1);
        assert_eq!(rx.try_recv().unwrap(), ClickEvent::new("best-seo-tips"));
    }

    #[tokio::test]
    async fn test_resolve_slug_full_queue_still_resolves() {
        let mut mock_repo = MockRedirectRepository::new();
        let existing = create_test_redirect(1, "x", "user-1");
        mock_repo
            .expect_find_by_slug()
            .returning(move |_| Ok(Some(existing.clone())));

        let (tx, _rx) = mpsc::channel(1);
        tx.try_send(ClickEvent::new("filler")).unwrap();
        let service = RedirectService::new(Arc::new(mock_repo), tx);

        assert!(service.resolve_slug("x").await.is_ok());
    }

    #[tokio::test]
    async fn test_resolve_slug_invalid_shape_skips_store() {
        let mut mock_repo = MockRedirectRepository::new();
        mock_repo.expect_find_by_slug().times(0);

        let result = service(mock_repo).resolve_slug("Not A Slug").await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_sitemap_entries_degrade_to_empty() {
        let mut mock_repo = MockRedirectRepository::new();
        mock_repo
            .expect_list_all()
            .returning(|| Err(AppError::store_unavailable("down", json!({}))));

        assert!(service(mock_repo).sitemap_entries().await.is_empty());
    }

    #[test]
    fn test_build_public_url() {
        let redirect = create_test_redirect(1, "best-seo-tips", "user-1");

        assert_eq!(
            build_public_url("https://seo.example.com/", &redirect),
            "https://seo.example.com/r/best-seo-tips"
        );
        assert_eq!(
            build_public_url("http://localhost:3000", &redirect),
            "http://localhost:3000/r/best-seo-tips"
        );
    }
}
