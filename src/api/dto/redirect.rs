//! DTOs for redirect management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use validator::Validate;

use crate::application::services::build_public_url;
use crate::domain::entities::{Redirect, RedirectFields, RedirectPatch};

/// Request body for `POST /api/redirects`.
///
/// `target_url` is stored as given; a missing scheme is filled in when the
/// redirect is resolved, so `example.com/page` is accepted.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRedirectRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 1000))]
    pub description: String,

    #[validate(length(min = 1, max = 2048, message = "Target URL is required"))]
    pub target_url: String,

    /// Preview image shown by social networks.
    #[validate(url(message = "Invalid image URL"))]
    pub image: Option<String>,

    /// Comma-delimited keywords.
    #[validate(length(max = 500))]
    pub keywords: Option<String>,

    #[validate(length(max = 200))]
    pub site_name: Option<String>,

    /// Open Graph type (`website`, `article`, `product`, `service`, ...).
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50))]
    pub og_type: Option<String>,
}

impl From<CreateRedirectRequest> for RedirectFields {
    fn from(req: CreateRedirectRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            target_url: req.target_url,
            image: req.image,
            keywords: req.keywords,
            site_name: req.site_name,
            og_type: req.og_type,
        }
    }
}

/// Request body for `PATCH /api/redirects/{id}`.
///
/// All fields are optional; only provided fields are changed. Changing the
/// title re-derives the slug.
///
/// # Clearable fields
///
/// For `image`, `keywords`, `site_name` and `type`:
///
/// - **Absent** → leave existing value unchanged
/// - **`null`** → clear the value
/// - **String** → set new value
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateRedirectRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 2048, message = "Target URL must not be empty"))]
    pub target_url: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(url(message = "Invalid image URL"))]
    pub image: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 500))]
    pub keywords: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 200))]
    pub site_name: Option<Option<String>>,

    #[serde(
        default,
        rename = "type",
        with = "::serde_with::rust::double_option"
    )]
    #[validate(length(min = 1, max = 50))]
    pub og_type: Option<Option<String>>,
}

impl From<UpdateRedirectRequest> for RedirectPatch {
    fn from(req: UpdateRedirectRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            target_url: req.target_url,
            image: req.image,
            keywords: req.keywords,
            site_name: req.site_name,
            og_type: req.og_type,
        }
    }
}

/// JSON representation of a redirect for its owner.
#[derive(Debug, Serialize)]
pub struct RedirectResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub target_url: String,
    pub image: Option<String>,
    pub keywords: Option<String>,
    pub site_name: Option<String>,
    #[serde(rename = "type")]
    pub og_type: Option<String>,
    pub slug: String,
    pub public_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RedirectResponse {
    pub fn new(redirect: Redirect, base_url: &str) -> Self {
        let public_url = build_public_url(base_url, &redirect);
        Self {
            id: redirect.id,
            title: redirect.title,
            description: redirect.description,
            target_url: redirect.target_url,
            image: redirect.image,
            keywords: redirect.keywords,
            site_name: redirect.site_name,
            og_type: redirect.og_type,
            slug: redirect.slug,
            public_url,
            click_count: redirect.click_count,
            created_at: redirect.created_at,
            updated_at: redirect.updated_at,
        }
    }
}

/// Response for `GET /api/redirects`.
#[derive(Debug, Serialize)]
pub struct RedirectListResponse {
    pub items: Vec<RedirectResponse>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_reads_type_field() {
        let req: CreateRedirectRequest = serde_json::from_value(json!({
            "title": "Best SEO Tips",
            "target_url": "example.com/tips",
            "type": "article"
        }))
        .unwrap();

        assert_eq!(req.og_type.as_deref(), Some("article"));
        assert_eq!(req.description, "");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_empty_title() {
        let req: CreateRedirectRequest = serde_json::from_value(json!({
            "title": "",
            "target_url": "https://example.com"
        }))
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_bad_image() {
        let req: CreateRedirectRequest = serde_json::from_value(json!({
            "title": "t",
            "target_url": "https://example.com",
            "image": "not a url"
        }))
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_distinguishes_absent_and_null() {
        let req: UpdateRedirectRequest = serde_json::from_value(json!({
            "image": null,
            "site_name": "Acme"
        }))
        .unwrap();

        let patch = RedirectPatch::from(req);

        assert_eq!(patch.image, Some(None));
        assert_eq!(patch.site_name, Some(Some("Acme".to_string())));
        assert_eq!(patch.keywords, None);
        assert_eq!(patch.og_type, None);
        assert_eq!(patch.title, None);
    }

    #[test]
    fn test_update_request_validates_image_like_create() {
        let bad: UpdateRedirectRequest =
            serde_json::from_value(json!({ "image": "not a url" })).unwrap();
        let good: UpdateRedirectRequest =
            serde_json::from_value(json!({ "image": "https://cdn.example.com/a.png" })).unwrap();
        let cleared: UpdateRedirectRequest =
            serde_json::from_value(json!({ "image": null })).unwrap();

        assert!(bad.validate().is_err());
        assert!(good.validate().is_ok());
        assert!(cleared.validate().is_ok());
    }

    #[test]
    fn test_update_request_type_field() {
        let req: UpdateRedirectRequest =
            serde_json::from_value(json!({ "type": "product" })).unwrap();

        assert_eq!(req.og_type, Some(Some("product".to_string())));
    }

    #[test]
    fn test_response_serializes_type_and_public_url() {
        let now = Utc::now();
        let redirect = Redirect {
            id: 3,
            title: "Best SEO Tips".to_string(),
            description: String::new(),
            target_url: "example.com".to_string(),
            image: None,
            keywords: None,
            site_name: None,
            og_type: Some("website".to_string()),
            slug: "best-seo-tips".to_string(),
            owner_id: "user-1".to_string(),
            click_count: 5,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(RedirectResponse::new(redirect, "https://seo.test/")).unwrap();

        assert_eq!(value["type"], "website");
        assert_eq!(value["public_url"], "https://seo.test/r/best-seo-tips");
        assert!(value.get("og_type").is_none());
        assert!(value.get("owner_id").is_none());
    }
}
