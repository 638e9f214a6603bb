//! Slug normalization and validation.
//!
//! Slugs are the public half of a redirect URL (`/r/{slug}`). They are derived
//! from a human title and always match `^[a-z0-9]+(-[a-z0-9]+)*$`.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum slug length, suffixes included.
pub const MAX_SLUG_LEN: usize = 50;

/// Slug used when a title has no usable characters.
pub const PLACEHOLDER_SLUG: &str = "redirect";

static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

/// Turns a free-text title into a candidate slug.
///
/// # Rules
///
/// 1. Lowercase the input
/// 2. Drop every character outside `[a-z0-9]`, whitespace and `-`
/// 3. Collapse whitespace and hyphen runs into a single hyphen
/// 4. Trim leading and trailing hyphens
/// 5. Truncate to [`MAX_SLUG_LEN`]
///
/// Never fails: a title without any latin alphanumerics (emoji, punctuation,
/// empty string) yields [`PLACEHOLDER_SLUG`].
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize("Best SEO Tips!!"), "best-seo-tips");
/// assert_eq!(normalize("  --Rust -- 2024--  "), "rust-2024");
/// assert_eq!(normalize("😀😀😀"), "redirect");
/// ```
pub fn normalize(title: &str) -> String {
    let mut slug = String::with_capacity(title.len().min(MAX_SLUG_LEN));
    let mut pending_hyphen = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        }
    }

    let slug = truncate(&slug, MAX_SLUG_LEN);

    if slug.is_empty() {
        PLACEHOLDER_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Appends `-{suffix}` to a base slug, shortening the base so the result
/// stays within [`MAX_SLUG_LEN`].
pub fn with_suffix(base: &str, suffix: impl std::fmt::Display) -> String {
    let suffix = suffix.to_string();
    let room = MAX_SLUG_LEN.saturating_sub(suffix.len() + 1);
    let base = truncate(base, room);

    if base.is_empty() {
        format!("{PLACEHOLDER_SLUG}-{suffix}")
    } else {
        format!("{base}-{suffix}")
    }
}

/// Returns true if `slug` has the shape of a slug this service could issue.
///
/// Used to reject resolution requests before they reach the store.
pub fn is_valid_slug(slug: &str) -> bool {
    slug.len() <= MAX_SLUG_LEN && SLUG_REGEX.is_match(slug)
}

/// Cuts an ASCII slug to `max` bytes without leaving a trailing hyphen.
fn truncate(slug: &str, max: usize) -> &str {
    let end = slug.len().min(max);
    slug[..end].trim_end_matches('-')
}
