//! Redirect entity: a public slug mapped to a target URL plus preview metadata.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::error::AppError;
use crate::utils::url_normalizer::normalize_target_url;

/// A stored redirect.
///
/// `slug` is unique across all owners. `target_url` is kept as the owner typed
/// it; use [`Redirect::normalized_target`] before redirecting to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Redirect {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub target_url: String,
    pub image: Option<String>,
    pub keywords: Option<String>,
    pub site_name: Option<String>,
    /// Open Graph type (`website`, `article`, `product`, ...).
    pub og_type: Option<String>,
    pub slug: String,
    pub owner_id: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Redirect {
    /// Returns the target URL in the form a redirect can be issued to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the stored target is empty or not an
    /// HTTP(S) URL.
    pub fn normalized_target(&self) -> Result<String, AppError> {
        normalize_target_url(&self.target_url).map_err(|e| {
            AppError::bad_request(
                "Redirect target is not a usable URL",
                json!({ "slug": self.slug, "reason": e.to_string() }),
            )
        })
    }

    /// Splits the comma-delimited keywords, dropping blanks.
    pub fn keyword_list(&self) -> Vec<String> {
        self.keywords
            .as_deref()
            .map(|k| {
                k.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Sorts newest first: `created_at` descending, ties by `id` descending.
pub fn sort_newest_first(redirects: &mut [Redirect]) {
    redirects.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

/// Owner-supplied fields for a new redirect.
///
/// The slug, owner and timestamps are filled in by the service.
#[derive(Debug, Clone, Default)]
pub struct RedirectFields {
    pub title: String,
    pub description: String,
    pub target_url: String,
    pub image: Option<String>,
    pub keywords: Option<String>,
    pub site_name: Option<String>,
    pub og_type: Option<String>,
}

/// Input data for persisting a new redirect.
#[derive(Debug, Clone)]
pub struct NewRedirect {
    pub title: String,
    pub description: String,
    pub target_url: String,
    pub image: Option<String>,
    pub keywords: Option<String>,
    pub site_name: Option<String>,
    pub og_type: Option<String>,
    pub slug: String,
    pub owner_id: String,
}

impl NewRedirect {
    pub fn from_fields(fields: RedirectFields, slug: String, owner_id: String) -> Self {
        Self {
            title: fields.title,
            description: fields.description,
            target_url: fields.target_url,
            image: fields.image,
            keywords: fields.keywords,
            site_name: fields.site_name,
            og_type: fields.og_type,
            slug,
            owner_id,
        }
    }
}

/// Partial update for an existing redirect.
///
/// `None` fields are left unchanged. For the optional metadata fields,
/// `Some(None)` clears the value and `Some(Some(v))` sets it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RedirectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_url: Option<String>,
    pub image: Option<Option<String>>,
    pub keywords: Option<Option<String>>,
    pub site_name: Option<Option<String>>,
    pub og_type: Option<Option<String>>,
}

impl RedirectPatch {
    /// Returns the new title if it differs from `current`.
    pub fn changed_title(&self, current: &str) -> Option<&str> {
        self.title.as_deref().filter(|t| *t != current)
    }

    /// Applies the patch to a record in place.
    ///
    /// Used by stores that hold records in memory; SQL stores express the same
    /// rules in their `UPDATE` statement.
    pub fn apply_to(&self, redirect: &mut Redirect) {
        if let Some(title) = &self.title {
            redirect.title = title.clone();
        }
        if let Some(description) = &self.description {
            redirect.description = description.clone();
        }
        if let Some(target_url) = &self.target_url {
            redirect.target_url = target_url.clone();
        }
        if let Some(image) = &self.image {
            redirect.image = image.clone();
        }
        if let Some(keywords) = &self.keywords {
            redirect.keywords = keywords.clone();
        }
        if let Some(site_name) = &self.site_name {
            redirect.site_name = site_name.clone();
        }
        if let Some(og_type) = &self.og_type {
            redirect.og_type = og_type.clone();
        }
    }
}
