//! DTOs for public slug resolution and the sitemap.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::build_public_url;
use crate::domain::entities::Redirect;

/// Open Graph type used when the owner did not set one.
pub const DEFAULT_OG_TYPE: &str = "website";

/// Metadata an interstitial page needs to render social and search previews.
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub keywords: Vec<String>,
    pub site_name: Option<String>,
    /// Falls back to [`DEFAULT_OG_TYPE`].
    #[serde(rename = "type")]
    pub og_type: String,
    /// Normalized target the interstitial should forward to.
    pub target_url: String,
    pub public_url: String,
}

impl PreviewResponse {
    pub fn new(redirect: Redirect, target_url: String, base_url: &str) -> Self {
        let public_url = build_public_url(base_url, &redirect);
        let keywords = redirect.keyword_list();
        Self {
            slug: redirect.slug,
            title: redirect.title,
            description: redirect.description,
            image: redirect.image,
            keywords,
            site_name: redirect.site_name,
            og_type: redirect
                .og_type
                .unwrap_or_else(|| DEFAULT_OG_TYPE.to_string()),
            target_url,
            public_url,
        }
    }
}

/// One sitemap location.
#[derive(Debug, Serialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: DateTime<Utc>,
}

impl SitemapEntry {
    pub fn new(redirect: &Redirect, base_url: &str) -> Self {
        Self {
            loc: build_public_url(base_url, redirect),
            lastmod: redirect.updated_at,
        }
    }
}
