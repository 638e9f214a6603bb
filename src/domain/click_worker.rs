//! Background worker applying click increments.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::RedirectRepository;
use crate::error::AppError;

/// Retries after the first failed increment.
const MAX_RETRIES: usize = 3;

/// Drains the click channel until every sender has been dropped.
///
/// At most `concurrency` increments run at once. When the channel closes the
/// worker waits for in-flight increments before returning, so a graceful
/// shutdown does not lose clicks that were already dequeued.
pub async fn run_click_worker<R>(
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<R>,
    concurrency: usize,
) where
    R: RedirectRepository + 'static,
{
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut in_flight = JoinSet::new();

    tracing::info!(concurrency, "Click worker started");

    while let Some(event) = rx.recv().await {
        let Ok(permit) = semaphore.clone().acquire_owned().await else {
            break;
        };

        let repository = repository.clone();
        in_flight.spawn(async move {
            let _permit = permit;
            record_click(repository.as_ref(), &event.slug).await;
        });

        while let Some(joined) = in_flight.try_join_next() {
            if let Err(e) = joined {
                tracing::error!(error = %e, "Click task panicked");
            }
        }
    }

    while let Some(joined) = in_flight.join_next().await {
        if let Err(e) = joined {
            tracing::error!(error = %e, "Click task panicked");
        }
    }

    tracing::info!("Click worker stopped");
}

/// Atomically increments the click counter for `slug`.
///
/// Transient store failures are retried with exponential backoff. Nothing is
/// returned: an unknown slug is ignored and a final failure is only logged.
pub async fn record_click<R>(repository: &R, slug: &str)
where
    R: RedirectRepository + ?Sized,
{
    let strategy = ExponentialBackoff::from_millis(10)
        .max_delay(Duration::from_millis(500))
        .map(jitter)
        .take(MAX_RETRIES);

    let result = RetryIf::spawn(
        strategy,
        || repository.increment_clicks(slug),
        |e: &AppError| is_transient(e),
    )
    .await;

    match result {
        Ok(true) => tracing::debug!(slug, "Click recorded"),
        Ok(false) => tracing::debug!(slug, "Click for unknown slug ignored"),
        Err(e) => tracing::error!(slug, error = %e, "Failed to record click"),
    }
}

fn is_transient(error: &AppError) -> bool {
    matches!(
        error,
        AppError::StoreUnavailable { .. } | AppError::Internal { .. }
    )
}
