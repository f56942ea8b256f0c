use std::sync::Arc;

use crate::config::Config;
use crate::wizard::{WizardCatalog, WizardSession};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Option lists offered by the wizard. Loaded once at startup.
    pub catalog: Arc<WizardCatalog>,
    pub session: WizardSession,
}
