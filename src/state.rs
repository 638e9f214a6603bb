//! Shared application state injected into every handler.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::{AuthService, RedirectService};
use crate::domain::click_event::ClickEvent;
use crate::infrastructure::persistence::{PgRedirectRepository, PgTokenRepository};

/// Services and handles shared across requests.
///
/// Cheap to clone: every field is an `Arc` or a channel sender.
#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService<PgRedirectRepository>>,
    pub auth_service: Arc<AuthService<PgTokenRepository>>,
    /// Producer side of the click queue, also held by `redirect_service`.
    pub click_sender: mpsc::Sender<ClickEvent>,
    /// Public URL prefix, without a trailing slash.
    pub base_url: String,
}

impl AppState {
    pub fn new(
        redirect_repository: Arc<PgRedirectRepository>,
        token_repository: Arc<PgTokenRepository>,
        click_sender: mpsc::Sender<ClickEvent>,
        base_url: impl Into<String>,
        token_signing_secret: impl Into<String>,
    ) -> Self {
        Self {
            redirect_service: Arc::new(RedirectService::new(
                redirect_repository,
                click_sender.clone(),
            )),
            auth_service: Arc::new(AuthService::new(
                token_repository,
                token_signing_secret.into(),
            )),
            click_sender,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}
