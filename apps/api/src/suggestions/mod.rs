// Career suggestions: the external service seam, its prompt, the tagged payload
// parser, and the deadline/cancellation wrapper around the single request.
// All LLM calls go through llm_client. Nothing here calls the API directly.

pub mod parse;
pub mod prompts;
pub mod request;
pub mod service;

use serde::{Deserialize, Serialize};

pub use parse::{parse_suggestions, ParseOutcome};
pub use request::run_request;
pub use service::{LlmSuggestionService, SuggestionError, SuggestionService};

/// The service is asked for exactly this many careers; extra entries are dropped.
pub const MAX_SUGGESTIONS: usize = 3;

/// One scored career recommendation. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub title: String,
    /// 0 to 100
    pub match_score: u8,
    pub description: String,
    /// Hex color encoding the score tier.
    pub color: String,
}

const HIGH_MATCH_COLOR: &str = "#22C55E";
const MEDIUM_MATCH_COLOR: &str = "#EAB308";
const LOW_MATCH_COLOR: &str = "#EF4444";

/// Green for high, yellow for medium, red for low matches.
pub fn color_for_score(score: u8) -> &'static str {
    match score {
        90..=u8::MAX => HIGH_MATCH_COLOR,
        80..=89 => MEDIUM_MATCH_COLOR,
        _ => LOW_MATCH_COLOR,
    }
}
