use serde::Serialize;

use crate::suggestions::Suggestion;
use crate::wizard::profile::Profile;

/// Everything the wizard knows about the current session. `restart` replaces
/// it with `WizardState::initial()` in one assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    /// 1-based, always within `1..=TOTAL_STEPS`.
    pub current_step: u8,
    pub profile: Profile,
    pub pending_request: bool,
    /// Raw payload of the last answered request, kept for diagnostics.
    pub suggestion_text: Option<String>,
    /// Non-empty only on the results step after a successful parse.
    pub suggestions: Vec<Suggestion>,
    pub last_error: Option<String>,
    /// Input buffer for a free-text motivation not yet added.
    pub custom_motivation: String,
}

impl WizardState {
    pub fn initial() -> Self {
        Self {
            current_step: 1,
            profile: Profile::default(),
            pending_request: false,
            suggestion_text: None,
            suggestions: Vec::new(),
            last_error: None,
            custom_motivation: String::new(),
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::initial()
    }
}
