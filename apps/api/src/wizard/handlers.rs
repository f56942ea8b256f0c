use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::state::AppState;
use crate::wizard::profile::{ArrayField, ProfileField};
use crate::wizard::view::StepView;
use crate::wizard::WizardCatalog;

#[derive(Deserialize)]
pub struct SetFieldRequest {
    pub field: ProfileField,
    pub value: String,
}

#[derive(Deserialize)]
pub struct ToggleRequest {
    pub field: ArrayField,
    pub value: String,
}

#[derive(Deserialize)]
pub struct CustomMotivationRequest {
    pub text: String,
}

#[derive(Deserialize, Default)]
pub struct AddCustomMotivationRequest {
    /// Replaces the input buffer before adding, when present.
    pub text: Option<String>,
}

/// GET /api/v1/catalog
pub async fn handle_get_catalog(State(state): State<AppState>) -> Json<WizardCatalog> {
    Json(state.catalog.as_ref().clone())
}

/// GET /api/v1/wizard
pub async fn handle_get_wizard(State(state): State<AppState>) -> Json<StepView> {
    Json(state.session.view().await)
}

/// PUT /api/v1/wizard/fields
pub async fn handle_set_field(
    State(state): State<AppState>,
    Json(req): Json<SetFieldRequest>,
) -> Result<Json<StepView>, AppError> {
    let view = state
        .session
        .apply(|w| w.set_field(req.field, req.value))
        .await?;
    Ok(Json(view))
}

/// POST /api/v1/wizard/toggle
pub async fn handle_toggle(
    State(state): State<AppState>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<StepView>, AppError> {
    let view = state
        .session
        .apply(|w| w.toggle_array_field(req.field, &req.value))
        .await?;
    Ok(Json(view))
}

/// PUT /api/v1/wizard/custom-motivation
pub async fn handle_set_custom_motivation(
    State(state): State<AppState>,
    Json(req): Json<CustomMotivationRequest>,
) -> Result<Json<StepView>, AppError> {
    let view = state
        .session
        .apply(|w| w.set_custom_motivation(req.text))
        .await?;
    Ok(Json(view))
}

/// POST /api/v1/wizard/custom-motivation
pub async fn handle_add_custom_motivation(
    State(state): State<AppState>,
    body: Option<Json<AddCustomMotivationRequest>>,
) -> Result<Json<StepView>, AppError> {
    let text = body.and_then(|Json(req)| req.text);
    let view = state
        .session
        .apply(|w| {
            if let Some(text) = text {
                w.set_custom_motivation(text)?;
            }
            w.add_custom_motivation()
        })
        .await?;
    Ok(Json(view))
}

/// POST /api/v1/wizard/next
pub async fn handle_next(State(state): State<AppState>) -> Result<Json<StepView>, AppError> {
    Ok(Json(state.session.advance().await?))
}

/// POST /api/v1/wizard/back
pub async fn handle_back(State(state): State<AppState>) -> Result<Json<StepView>, AppError> {
    let view = state.session.apply(|w| w.retreat()).await?;
    Ok(Json(view))
}

/// POST /api/v1/wizard/restart
pub async fn handle_restart(State(state): State<AppState>) -> Json<StepView> {
    Json(state.session.restart().await)
}
