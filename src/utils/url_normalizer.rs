//! Target URL normalization.
//!
//! Redirect targets are stored exactly as the owner typed them. They are only
//! normalized when a visitor resolves a slug, right before the redirect is
//! issued.

use url::Url;

/// Errors that can occur during target URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Target URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Scheme assumed when the stored target has none.
const DEFAULT_SCHEME: &str = "https://";

/// Normalizes a stored target URL into something safe to redirect to.
///
/// # Normalization Rules
///
/// 1. **Whitespace**: Leading and trailing whitespace is trimmed
/// 2. **Scheme**: A missing scheme defaults to `https://`
/// 3. **Protocol**: Only HTTP and HTTPS are allowed
/// 4. **Hostname**: Lowercased by the parser
/// 5. **Path, query, fragment**: Preserved
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] for blank input.
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes
/// such as `javascript:` or `data:`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_target_url("example.com/landing").unwrap(),
///     "https://example.com/landing"
/// );
/// ```
pub fn normalize_target_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let candidate = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{}", trimmed.trim_start_matches('/'))
    };

    let url =
        Url::parse(&candidate).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::InvalidFormat(
            "missing host".to_string(),
        ));
    }

    Ok(url.to_string())
}

/// Detects an explicit scheme such as `https:` or `javascript:`.
///
/// `example.com:8080/path` is a host with a port, not a scheme, so a scheme
/// must be followed by `//` unless it is one of the opaque schemes that are
/// rejected later anyway.
fn has_scheme(input: &str) -> bool {
    let Some((scheme, rest)) = input.split_once(':') else {
        return false;
    };

    let well_formed = scheme
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    if !well_formed {
        return false;
    }

    rest.starts_with("//")
        || matches!(
            scheme.to_ascii_lowercase().as_str(),
            "javascript" | "data" | "mailto" | "file" | "vbscript" | "tel"
        )
}
