//! Click event model for asynchronous click counting.

/// A resolved slug waiting to have its click counter incremented.
///
/// Passed from the resolution path to the background worker through a
/// bounded channel, so a redirect never waits on the counter write.
///
/// # Usage Flow
///
/// 1. Created by [`crate::application::services::RedirectService::resolve_slug`]
/// 2. Sent to the channel with `try_send` (dropped if the queue is full)
/// 3. Processed by [`crate::domain::click_worker::run_click_worker`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub slug: String,
}

impl ClickEvent {
    /// Creates a new click event for `slug`.
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }
}
