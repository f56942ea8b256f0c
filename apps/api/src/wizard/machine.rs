//! Wizard state machine: step progression, profile edits, the per-step gate
//! and the suggestion request at the step 4 → 5 boundary.
//!
//! The request is an explicit two-phase transition so the owner can release
//! its lock while the external call runs:
//!
//! 1. `begin_advance` gates the step, marks the request pending and hands back
//!    a `PendingRequest` (profile snapshot + ticket + cancel signal).
//! 2. `complete_request` applies the result, but only if the ticket is still
//!    current. A `restart` in between cancels the call and voids the ticket.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::suggestions::request::{cancel_pair, CancelHandle, CancelSignal};
use crate::suggestions::{parse_suggestions, ParseOutcome, SuggestionError};
use crate::wizard::catalog::WizardCatalog;
use crate::wizard::gate::{can_advance, unmet_requirements, Requirement};
use crate::wizard::profile::{ArrayField, Profile, ProfileField};
use crate::wizard::state::WizardState;
use crate::wizard::{FailurePolicy, WizardError, REQUEST_STEP, TOTAL_STEPS};

#[derive(Debug, Clone, Copy)]
pub struct WizardSettings {
    pub failure_policy: FailurePolicy,
    pub request_timeout: Duration,
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::default(),
            request_timeout: Duration::from_secs(60),
        }
    }
}

/// Everything needed to run the suggestion request outside the wizard.
#[derive(Debug)]
pub struct PendingRequest {
    pub ticket: u64,
    pub profile: Profile,
    pub cancel: CancelSignal,
}

#[derive(Debug)]
pub enum Advance {
    /// Moved to the given step with no external call.
    Moved(u8),
    /// The request step passed its gate; run the request and report back.
    RequestNeeded(PendingRequest),
}

#[derive(Debug)]
struct InFlight {
    ticket: u64,
    cancel: CancelHandle,
}

pub struct Wizard {
    catalog: Arc<WizardCatalog>,
    settings: WizardSettings,
    state: WizardState,
    next_ticket: u64,
    in_flight: Option<InFlight>,
}

impl Wizard {
    pub fn new(catalog: Arc<WizardCatalog>, settings: WizardSettings) -> Self {
        Self {
            catalog,
            settings,
            state: WizardState::initial(),
            next_ticket: 0,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn catalog(&self) -> &WizardCatalog {
        &self.catalog
    }

    pub fn request_timeout(&self) -> Duration {
        self.settings.request_timeout
    }

    pub fn is_terminal(&self) -> bool {
        self.state.current_step == TOTAL_STEPS
    }

    pub fn unmet_requirements(&self) -> Vec<Requirement> {
        unmet_requirements(
            self.state.current_step,
            &self.state.profile,
            self.state.pending_request,
        )
    }

    pub fn can_advance(&self) -> bool {
        can_advance(
            self.state.current_step,
            &self.state.profile,
            self.state.pending_request,
        )
    }

    /// Whether the forward control should be disabled right now. A pending
    /// request disables it even though the request step's own gate is met.
    pub fn next_disabled(&self) -> bool {
        self.state.pending_request || !self.can_advance()
    }

    // ────────────────────────────────────────────────────────────────────────
    // Profile edits
    // ────────────────────────────────────────────────────────────────────────

    /// Plain assignment. The gate, not the setter, decides whether a value is enough.
    pub fn set_field(&mut self, field: ProfileField, value: String) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.state.profile.set(field, value);
        debug!(?field, value = self.state.profile.get(field), "Set profile field");
        Ok(())
    }

    /// Adds `value` if absent, removes it if present. Returns `true` when added.
    /// Only catalog values can be added; anything already selected can be removed.
    /// Free-text motivations come in through `add_custom_motivation`.
    pub fn toggle_array_field(
        &mut self,
        field: ArrayField,
        value: &str,
    ) -> Result<bool, WizardError> {
        self.ensure_editable()?;

        let catalog_values = match field {
            ArrayField::Skills => &self.catalog.skills,
            ArrayField::Interests => &self.catalog.interests,
            ArrayField::Motivations => &self.catalog.motivations,
        };
        if !self.state.profile.contains(field, value) && !catalog_values.iter().any(|v| v == value)
        {
            return Err(WizardError::UnknownOption {
                field,
                value: value.to_string(),
            });
        }

        let added = self.state.profile.toggle(field, value);
        debug!(%field, value, added, "Toggled profile value");
        Ok(added)
    }

    pub fn set_custom_motivation(&mut self, text: String) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.state.custom_motivation = text;
        Ok(())
    }

    /// Adds the buffered free-text motivation and clears the buffer on success.
    /// Blank or already-selected text is ignored and left in the buffer.
    pub fn add_custom_motivation(&mut self) -> Result<bool, WizardError> {
        self.ensure_editable()?;
        let added = self
            .state
            .profile
            .add_motivation(&self.state.custom_motivation);
        if added {
            self.state.custom_motivation.clear();
        }
        Ok(added)
    }

    fn ensure_editable(&self) -> Result<(), WizardError> {
        if self.state.pending_request || self.is_terminal() {
            return Err(WizardError::ProfileLocked);
        }
        Ok(())
    }

    // ────────────────────────────────────────────────────────────────────────
    // Navigation
    // ────────────────────────────────────────────────────────────────────────

    pub fn begin_advance(&mut self) -> Result<Advance, WizardError> {
        if self.state.pending_request {
            return Err(WizardError::RequestPending);
        }
        if self.is_terminal() {
            return Err(WizardError::AtTerminalStep);
        }

        let step = self.state.current_step;
        let unmet = self.unmet_requirements();
        if !unmet.is_empty() {
            return Err(WizardError::Blocked { step, unmet });
        }

        if step != REQUEST_STEP {
            self.state.current_step = step + 1;
            info!("Wizard advanced to step {}", self.state.current_step);
            return Ok(Advance::Moved(self.state.current_step));
        }

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        let (cancel_handle, cancel_signal) = cancel_pair();

        self.state.pending_request = true;
        self.state.last_error = None;
        self.in_flight = Some(InFlight {
            ticket,
            cancel: cancel_handle,
        });

        info!(ticket, "Requesting career suggestions");
        Ok(Advance::RequestNeeded(PendingRequest {
            ticket,
            profile: self.state.profile.clone(),
            cancel: cancel_signal,
        }))
    }

    /// Applies the request result. Returns the step afterwards, or `None` when
    /// the ticket is stale (the wizard was restarted meanwhile) and nothing changed.
    pub fn complete_request(
        &mut self,
        ticket: u64,
        result: Result<String, SuggestionError>,
    ) -> Option<u8> {
        if !self.in_flight.as_ref().is_some_and(|f| f.ticket == ticket) {
            debug!(ticket, "Discarding result of an abandoned suggestion request");
            return None;
        }
        self.in_flight = None;

        self.state.pending_request = false;
        self.state.suggestions.clear();

        match result {
            Ok(text) => {
                match parse_suggestions(&text) {
                    ParseOutcome::Suggestions(suggestions) => {
                        info!(count = suggestions.len(), "Received career suggestions");
                        self.state.suggestions = suggestions;
                        self.state.last_error = None;
                    }
                    ParseOutcome::ServiceError(message) => {
                        warn!("Suggestion service declined: {message}");
                        self.state.last_error = Some(message);
                    }
                    ParseOutcome::Empty(reason) => {
                        warn!("Suggestion payload yielded nothing: {reason}");
                        self.state.last_error = Some(reason.to_string());
                    }
                }
                self.state.suggestion_text = Some(text);
                self.state.current_step = TOTAL_STEPS;
            }
            Err(e) => {
                self.state.last_error = Some(e.to_string());
                match self.settings.failure_policy {
                    FailurePolicy::Stay => {
                        warn!("Suggestion request failed, staying on step {REQUEST_STEP}: {e}");
                    }
                    FailurePolicy::Advance => {
                        warn!("Suggestion request failed, showing empty results: {e}");
                        self.state.current_step = TOTAL_STEPS;
                    }
                }
            }
        }

        Some(self.state.current_step)
    }

    /// Steps back one step; a no-op on step 1. Not available on the results step.
    pub fn retreat(&mut self) -> Result<u8, WizardError> {
        if self.state.pending_request {
            return Err(WizardError::RequestPending);
        }
        if self.is_terminal() {
            return Err(WizardError::AtTerminalStep);
        }
        self.state.current_step = self.state.current_step.saturating_sub(1).max(1);
        // A failed request belongs to the attempt being left behind.
        self.state.last_error = None;
        Ok(self.state.current_step)
    }

    /// Back to an empty step 1, abandoning any request in flight.
    pub fn restart(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            info!(ticket = in_flight.ticket, "Cancelling suggestion request on restart");
            in_flight.cancel.cancel();
        }
        self.state = WizardState::initial();
        info!("Wizard restarted");
    }
}
