use std::sync::Arc;

use anyhow::anyhow;
use tokio::sync::Mutex;

use crate::errors::AppError;
use crate::suggestions::{run_request, SuggestionService};
use crate::wizard::machine::{Advance, Wizard};
use crate::wizard::view::StepView;
use crate::wizard::WizardError;

/// The one wizard hosted by this process, shared by all route handlers.
///
/// Actions run one at a time under the lock. The suggestion request runs on
/// its own task with the lock released, so a dropped HTTP connection cannot
/// strand the wizard in the pending state.
#[derive(Clone)]
pub struct WizardSession {
    wizard: Arc<Mutex<Wizard>>,
    service: Arc<dyn SuggestionService>,
}

impl WizardSession {
    pub fn new(wizard: Wizard, service: Arc<dyn SuggestionService>) -> Self {
        Self {
            wizard: Arc::new(Mutex::new(wizard)),
            service,
        }
    }

    pub async fn view(&self) -> StepView {
        StepView::from_wizard(&*self.wizard.lock().await)
    }

    /// Applies a synchronous action and returns the resulting snapshot.
    pub async fn apply<T>(
        &self,
        action: impl FnOnce(&mut Wizard) -> Result<T, WizardError>,
    ) -> Result<StepView, WizardError> {
        let mut wizard = self.wizard.lock().await;
        action(&mut wizard)?;
        Ok(StepView::from_wizard(&wizard))
    }

    pub async fn advance(&self) -> Result<StepView, AppError> {
        let (pending, timeout) = {
            let mut wizard = self.wizard.lock().await;
            match wizard.begin_advance()? {
                Advance::Moved(_) => return Ok(StepView::from_wizard(&wizard)),
                Advance::RequestNeeded(pending) => (pending, wizard.request_timeout()),
            }
        };

        let wizard = Arc::clone(&self.wizard);
        let service = Arc::clone(&self.service);
        let task = tokio::spawn(async move {
            let result =
                run_request(service.as_ref(), &pending.profile, timeout, pending.cancel).await;
            let mut wizard = wizard.lock().await;
            wizard.complete_request(pending.ticket, result);
            StepView::from_wizard(&wizard)
        });

        task.await
            .map_err(|e| AppError::Internal(anyhow!("Suggestion task failed: {e}")))
    }

    pub async fn restart(&self) -> StepView {
        let mut wizard = self.wizard.lock().await;
        wizard.restart();
        StepView::from_wizard(&wizard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use crate::suggestions::SuggestionError;
    use crate::wizard::profile::{ArrayField, Profile, ProfileField};
    use crate::wizard::view::StepContent;
    use crate::wizard::{WizardCatalog, WizardSettings, REQUEST_STEP, TOTAL_STEPS};

    /// Blocks until released, then answers with one suggestion.
    struct Gated {
        started: Notify,
        release: Notify,
    }

    #[async_trait]
    impl SuggestionService for Gated {
        async fn request_suggestions(&self, _profile: &Profile) -> Result<String, SuggestionError> {
            self.started.notify_one();
            self.release.notified().await;
            Ok(r##"{"resultInformations":[{"title":"Librarian","match":85,"description":"d","color":"#FFFF00"}]}"##.to_string())
        }
    }

    fn gated() -> Arc<Gated> {
        Arc::new(Gated {
            started: Notify::new(),
            release: Notify::new(),
        })
    }

    async fn session_at_request_step(service: Arc<Gated>) -> WizardSession {
        let wizard = Wizard::new(
            Arc::new(WizardCatalog::default()),
            WizardSettings {
                request_timeout: Duration::from_secs(30),
                ..WizardSettings::default()
            },
        );
        let session = WizardSession::new(wizard, service);
        session
            .apply(|w| {
                w.set_field(ProfileField::Name, "Alex".into())?;
                w.set_field(ProfileField::Age, "30".into())?;
                w.begin_advance()?;
                w.set_field(ProfileField::CurrentCareer, "Teacher".into())?;
                w.set_field(ProfileField::YearsOfExperience, "5".into())?;
                w.set_field(ProfileField::Education, "degree".into())?;
                w.begin_advance()?;
                for v in ["Teamwork", "Leadership", "Creativity"] {
                    w.toggle_array_field(ArrayField::Skills, v)?;
                }
                for v in ["Art", "Music", "Food"] {
                    w.toggle_array_field(ArrayField::Interests, v)?;
                }
                w.begin_advance()?;
                w.toggle_array_field(ArrayField::Motivations, "Security")?;
                w.set_field(ProfileField::WorkStyle, "field".into())?;
                w.set_field(ProfileField::Salary, "20000-30000".into())
            })
            .await
            .unwrap();
        session
    }

    #[tokio::test]
    async fn test_second_advance_rejected_while_pending() {
        let service = gated();
        let session = session_at_request_step(service.clone()).await;

        let first = {
            let session = session.clone();
            tokio::spawn(async move { session.advance().await })
        };
        service.started.notified().await;

        let view = session.view().await;
        assert!(view.pending_request);
        assert!(view.next_disabled);
        assert_eq!(view.step, REQUEST_STEP);

        let err = session.advance().await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Wizard(WizardError::RequestPending)
        ));

        service.release.notify_one();
        let view = first.await.unwrap().unwrap();
        assert_eq!(view.step, TOTAL_STEPS);
        let StepContent::Results(layout) = view.content else {
            panic!("expected results");
        };
        assert_eq!(layout.bubbles[0].dx, 110);
    }

    #[tokio::test]
    async fn test_restart_during_request_discards_late_answer() {
        let service = gated();
        let session = session_at_request_step(service.clone()).await;

        let first = {
            let session = session.clone();
            tokio::spawn(async move { session.advance().await })
        };
        service.started.notified().await;

        let view = session.restart().await;
        assert_eq!(view.step, 1);
        assert!(!view.pending_request);

        // The cancelled request finishes without touching the fresh wizard.
        let after = first.await.unwrap().unwrap();
        assert_eq!(after.step, 1);
        assert!(!after.pending_request);
        assert_eq!(session.view().await.step, 1);
    }

    #[tokio::test]
    async fn test_apply_returns_updated_view() {
        let session = session_at_request_step(gated()).await;
        let view = session
            .apply(|w| w.set_custom_motivation("Calm".into()))
            .await
            .unwrap();
        let StepContent::Motivation {
            custom_motivation, ..
        } = view.content
        else {
            panic!("expected motivation content");
        };
        assert_eq!(custom_motivation, "Calm");
    }
}
