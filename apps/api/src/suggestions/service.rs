//! Suggestion Service: the seam between the wizard and the external AI.
//!
//! Default: `LlmSuggestionService` (chat completion through `LlmClient`).
//! Tests swap in scripted implementations. The wizard session holds an
//! `Arc<dyn SuggestionService>`.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::llm_client::{LlmClient, LlmError};
use crate::suggestions::prompts::{build_suggestion_prompt, SUGGESTION_SYSTEM};
use crate::wizard::profile::Profile;

/// Failure of the suggestion request itself. Payload problems are not errors;
/// see `ParseOutcome`.
#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("Suggestion service failed: {0}")]
    Llm(#[from] LlmError),

    #[error("Suggestion service did not answer within {0:?}")]
    Timeout(Duration),

    #[error("Suggestion request was cancelled")]
    Cancelled,
}

/// Returns the raw text payload for a complete profile.
#[async_trait]
pub trait SuggestionService: Send + Sync {
    async fn request_suggestions(&self, profile: &Profile) -> Result<String, SuggestionError>;
}

pub struct LlmSuggestionService(pub LlmClient);

#[async_trait]
impl SuggestionService for LlmSuggestionService {
    async fn request_suggestions(&self, profile: &Profile) -> Result<String, SuggestionError> {
        let prompt = build_suggestion_prompt(profile);
        info!(
            "Requesting career suggestions (model: {}, current career: '{}')",
            self.0.model(),
            profile.current_career
        );
        let text = self.0.call_text(&prompt, SUGGESTION_SYSTEM).await?;
        Ok(text)
    }
}
