// Career wizard: profile collection across five gated steps, the suggestion
// request at the step 4 → 5 boundary, and render-ready step snapshots.
// The suggestion call goes through suggestions::SuggestionService only.

pub mod catalog;
pub mod gate;
pub mod handlers;
pub mod machine;
pub mod profile;
pub mod session;
pub mod state;
pub mod view;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::wizard::gate::Requirement;
use crate::wizard::profile::ArrayField;

pub use catalog::WizardCatalog;
pub use machine::{Advance, Wizard, WizardSettings};
pub use session::WizardSession;

pub const TOTAL_STEPS: u8 = 5;

/// Step that issues the suggestion request when the user advances past it.
pub const REQUEST_STEP: u8 = TOTAL_STEPS - 1;

/// What happens when the suggestion request itself fails (transport, API
/// status, timeout). Payload problems always advance to the results step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Remain on the request step with the error recorded; advancing again retries.
    #[default]
    Stay,
    /// Move on to the results step with no suggestions.
    Advance,
}

impl std::str::FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stay" => Ok(FailurePolicy::Stay),
            "advance" => Ok(FailurePolicy::Advance),
            other => Err(format!("unknown failure policy '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Step {step} is incomplete: {}", join_requirements(.unmet))]
    Blocked { step: u8, unmet: Vec<Requirement> },

    #[error("Career suggestions are still being requested")]
    RequestPending,

    #[error("The profile can no longer be edited; restart to begin again")]
    ProfileLocked,

    #[error("The results step is final; restart to begin again")]
    AtTerminalStep,

    #[error("'{value}' is not a selectable {field} option")]
    UnknownOption { field: ArrayField, value: String },
}

fn join_requirements(unmet: &[Requirement]) -> String {
    unmet
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
