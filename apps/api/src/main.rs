mod config;
mod errors;
mod layout;
mod llm_client;
mod routes;
mod state;
mod suggestions;
mod wizard;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::suggestions::LlmSuggestionService;
use crate::wizard::{Wizard, WizardCatalog, WizardSession, WizardSettings};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Guide API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = Arc::new(match &config.catalog_path {
        Some(path) => {
            info!("Loading wizard catalog from {}", path.display());
            WizardCatalog::from_json_file(path)?
        }
        None => WizardCatalog::default(),
    });

    // Initialize LLM client
    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        config.openai_model.clone(),
        &config.openai_base_url,
    );
    info!("LLM client initialized (model: {})", llm.model());

    let settings = WizardSettings {
        failure_policy: config.failure_policy,
        request_timeout: config.request_timeout,
    };
    info!(
        "Wizard settings: failure policy {:?}, request timeout {}s",
        settings.failure_policy,
        settings.request_timeout.as_secs()
    );

    let wizard = Wizard::new(Arc::clone(&catalog), settings);
    let session = WizardSession::new(wizard, Arc::new(LlmSuggestionService(llm)));

    // Build app state
    let state = AppState {
        config: config.clone(),
        catalog,
        session,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
