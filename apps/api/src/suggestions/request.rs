use std::time::Duration;

use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::suggestions::service::{SuggestionError, SuggestionService};
use crate::wizard::profile::Profile;

/// Held by the wizard while a request is in flight. `cancel` abandons it.
#[derive(Debug)]
pub struct CancelHandle(oneshot::Sender<()>);

/// Resolves when the matching `CancelHandle` fires or is dropped.
#[derive(Debug)]
pub struct CancelSignal(oneshot::Receiver<()>);

pub fn cancel_pair() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = oneshot::channel();
    (CancelHandle(tx), CancelSignal(rx))
}

impl CancelHandle {
    pub fn cancel(self) {
        // The receiver is gone once the request has finished; nothing to cancel then.
        let _ = self.0.send(());
    }
}

impl CancelSignal {
    #[cfg(test)]
    pub fn fired(&mut self) -> bool {
        self.0.try_recv().is_ok()
    }
}

/// Runs the single suggestion request under a deadline, abandoning it early on cancellation.
pub async fn run_request(
    service: &dyn SuggestionService,
    profile: &Profile,
    timeout: Duration,
    cancel: CancelSignal,
) -> Result<String, SuggestionError> {
    let start = std::time::Instant::now();

    let result = tokio::select! {
        biased;
        _ = cancel.0 => Err(SuggestionError::Cancelled),
        outcome = tokio::time::timeout(timeout, service.request_suggestions(profile)) => {
            outcome.unwrap_or(Err(SuggestionError::Timeout(timeout)))
        }
    };

    match &result {
        Ok(text) => debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            bytes = text.len(),
            "Suggestion request finished"
        ),
        Err(e) => warn!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            error = %e,
            "Suggestion request failed"
        ),
    }

    result
}
