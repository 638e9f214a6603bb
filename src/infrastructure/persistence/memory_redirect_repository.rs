//! Process-local implementation of redirect repository.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use tokio::sync::Mutex;

use crate::domain::entities::{NewRedirect, Redirect, RedirectPatch, sort_newest_first};
use crate::domain::repositories::RedirectRepository;
use crate::error::AppError;

/// Redirect store backed by a map behind a single lock.
///
/// Enforces the same slug uniqueness as the PostgreSQL schema. Two switches
/// simulate store trouble:
///
/// - [`Self::set_available`] makes every call fail with
///   [`AppError::StoreUnavailable`]
/// - [`Self::set_sorted_queries`] makes the sorted owner listing fail, as a
///   store without a matching index would
///
/// Exists to exercise the service against a store whose failures can be
/// switched on and off; the server always runs on PostgreSQL.
pub struct InMemoryRedirectRepository {
    records: Mutex<BTreeMap<i64, Redirect>>,
    next_id: AtomicI64,
    available: AtomicBool,
    sorted_queries: AtomicBool,
}

impl Default for InMemoryRedirectRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRedirectRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            available: AtomicBool::new(true),
            sorted_queries: AtomicBool::new(true),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn set_sorted_queries(&self, supported: bool) {
        self.sorted_queries.store(supported, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AppError::store_unavailable(
                "Storage is unavailable",
                json!({}),
            ))
        }
    }
}

/// Moves `updated_at` forward, strictly past its previous value.
fn touch(redirect: &mut Redirect) {
    let floor = redirect.updated_at + Duration::microseconds(1);
    redirect.updated_at = Utc::now().max(floor);
}

fn slug_taken_by_other(
    records: &BTreeMap<i64, Redirect>,
    slug: &str,
    exclude_id: Option<i64>,
) -> bool {
    records
        .values()
        .any(|r| r.slug == slug && Some(r.id) != exclude_id)
}

#[async_trait]
impl RedirectRepository for InMemoryRedirectRepository {
    async fn create(&self, new_redirect: NewRedirect) -> Result<Redirect, AppError> {
        self.check_available()?;
        let mut records = self.records.lock().await;

        if slug_taken_by_other(&records, &new_redirect.slug, None) {
            return Err(AppError::slug_taken());
        }

        let now = Utc::now();
        let redirect = Redirect {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: new_redirect.title,
            description: new_redirect.description,
            target_url: new_redirect.target_url,
            image: new_redirect.image,
            keywords: new_redirect.keywords,
            site_name: new_redirect.site_name,
            og_type: new_redirect.og_type,
            slug: new_redirect.slug,
            owner_id: new_redirect.owner_id,
            click_count: 0,
            created_at: now,
            updated_at: now,
        };

        records.insert(redirect.id, redirect.clone());
        Ok(redirect)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Redirect>, AppError> {
        self.check_available()?;
        Ok(self.records.lock().await.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Redirect>, AppError> {
        self.check_available()?;
        Ok(self
            .records
            .lock()
            .await
            .values()
            .find(|r| r.slug == slug)
            .cloned())
    }

    async fn slug_exists(&self, slug: &str, exclude_id: Option<i64>) -> Result<bool, AppError> {
        self.check_available()?;
        let records = self.records.lock().await;
        Ok(slug_taken_by_other(&records, slug, exclude_id))
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Redirect>, AppError> {
        self.check_available()?;
        if !self.sorted_queries.load(Ordering::SeqCst) {
            return Err(AppError::internal(
                "Sorted query not supported",
                json!({ "owner_id": owner_id }),
            ));
        }

        let mut redirects = self.list_by_owner_unsorted(owner_id).await?;
        sort_newest_first(&mut redirects);
        Ok(redirects)
    }

    async fn list_by_owner_unsorted(&self, owner_id: &str) -> Result<Vec<Redirect>, AppError> {
        self.check_available()?;
        Ok(self
            .records
            .lock()
            .await
            .values()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Redirect>, AppError> {
        self.check_available()?;
        let mut redirects: Vec<Redirect> = self.records.lock().await.values().cloned().collect();
        sort_newest_first(&mut redirects);
        Ok(redirects)
    }

    async fn update(
        &self,
        id: i64,
        patch: RedirectPatch,
        new_slug: Option<String>,
    ) -> Result<Redirect, AppError> {
        self.check_available()?;
        let mut records = self.records.lock().await;

        if let Some(slug) = &new_slug
            && slug_taken_by_other(&records, slug, Some(id))
        {
            return Err(AppError::slug_taken());
        }

        let redirect = records
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Redirect not found", json!({ "id": id })))?;

        patch.apply_to(redirect);
        if let Some(slug) = new_slug {
            redirect.slug = slug;
        }
        touch(redirect);

        Ok(redirect.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.check_available()?;
        Ok(self.records.lock().await.remove(&id).is_some())
    }

    async fn increment_clicks(&self, slug: &str) -> Result<bool, AppError> {
        self.check_available()?;
        let mut records = self.records.lock().await;

        match records.values_mut().find(|r| r.slug == slug) {
            Some(redirect) => {
                redirect.click_count += 1;
                touch(redirect);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.check_available()?;
        Ok(self.records.lock().await.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_redirect(slug: &str, owner_id: &str) -> NewRedirect {
        NewRedirect {
            title: "Title".to_string(),
            description: String::new(),
            target_url: "https://example.com".to_string(),
            image: None,
            keywords: None,
            site_name: None,
            og_type: None,
            slug: slug.to_string(),
            owner_id: owner_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_ids_and_defaults() {
        let repo = InMemoryRedirectRepository::new();

        let first = repo.create(new_redirect("a", "u")).await.unwrap();
        let second = repo.create(new_redirect("b", "u")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.click_count, 0);
        assert_eq!(first.created_at, first.updated_at);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_slug() {
        let repo = InMemoryRedirectRepository::new();
        repo.create(new_redirect("a", "u1")).await.unwrap();

        let err = repo.create(new_redirect("a", "u2")).await.unwrap_err();

        assert!(err.is_conflict_on(crate::utils::db_error::SLUG_UNIQUE_CONSTRAINT));
    }

    #[tokio::test]
    async fn test_slug_exists_with_exclusion() {
        let repo = InMemoryRedirectRepository::new();
        let created = repo.create(new_redirect("a", "u")).await.unwrap();

        assert!(repo.slug_exists("a", None).await.unwrap());
        assert!(!repo.slug_exists("a", Some(created.id)).await.unwrap());
        assert!(!repo.slug_exists("b", None).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_to_taken_slug_conflicts() {
        let repo = InMemoryRedirectRepository::new();
        repo.create(new_redirect("a", "u")).await.unwrap();
        let b = repo.create(new_redirect("b", "u")).await.unwrap();

        let err = repo
            .update(b.id, RedirectPatch::default(), Some("a".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryRedirectRepository::new();

        let err = repo
            .update(42, RedirectPatch::default(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_increment_unknown_slug() {
        let repo = InMemoryRedirectRepository::new();
        assert!(!repo.increment_clicks("nope").await.unwrap());
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_every_call() {
        let repo = InMemoryRedirectRepository::new();
        repo.set_available(false);

        assert!(matches!(
            repo.count().await,
            Err(AppError::StoreUnavailable { .. })
        ));
        assert!(matches!(
            repo.create(new_redirect("a", "u")).await,
            Err(AppError::StoreUnavailable { .. })
        ));

        repo.set_available(true);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_sorted_queries_switch() {
        let repo = InMemoryRedirectRepository::new();
        repo.create(new_redirect("a", "u")).await.unwrap();
        repo.set_sorted_queries(false);

        assert!(repo.list_by_owner("u").await.is_err());
        assert_eq!(repo.list_by_owner_unsorted("u").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_every_write_bumps_updated_at() {
        let repo = InMemoryRedirectRepository::new();
        let created = repo.create(new_redirect("a", "u")).await.unwrap();

        let patch = RedirectPatch {
            description: Some("Changed".to_string()),
            ..Default::default()
        };
        let updated = repo.update(created.id, patch, None).await.unwrap();
        assert!(updated.updated_at > created.updated_at);

        assert!(repo.increment_clicks("a").await.unwrap());
        let clicked = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert!(clicked.updated_at > updated.updated_at);
        assert_eq!(clicked.click_count, 1);
    }
}
