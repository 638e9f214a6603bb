//! Authentication service for API token validation.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::repositories::TokenRepository;
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Hashes a raw token with HMAC-SHA256 keyed by `signing_secret`.
///
/// Returns a 64-character lowercase hex-encoded MAC. Shared by the server and
/// the admin CLI so both produce the same stored value.
pub fn hash_token(signing_secret: &str, token: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(signing_secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(token.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Service for authenticating API requests via Bearer tokens.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before storage
/// and comparison. An attacker with read-only access to the database cannot verify
/// or forge tokens without the server-side secret.
pub struct AuthService<R: TokenRepository> {
    repository: Arc<R>,
    signing_secret: String,
}

impl<R: TokenRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - token repository for DB operations
    /// - `signing_secret` - HMAC key; must match the value used when tokens were created
    pub fn new(repository: Arc<R>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Authenticates a raw token and returns the owner it acts for.
    ///
    /// On success the token's `last_used_at` is refreshed; a failure to do so
    /// is logged and does not reject the request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthenticated`] if the token is unknown or revoked.
    ///
    /// Returns [`AppError::Internal`] or [`AppError::StoreUnavailable`] on
    /// database errors.
    pub async fn authenticate(&self, token: &str) -> Result<String, AppError> {
        let token_hash = hash_token(&self.signing_secret, token);

        let Some(owner_id) = self.repository.find_owner(&token_hash).await? else {
            return Err(AppError::unauthenticated(
                "Unauthorized",
                json!({"reason": "Invalid or revoked token"}),
            ));
        };

        if let Err(e) = self.repository.update_last_used(&token_hash).await {
            tracing::warn!(error = %e, "Failed to update token last_used_at");
        }

        Ok(owner_id)
    }
}
