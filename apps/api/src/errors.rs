use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::wizard::WizardError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::Wizard(e) => {
                let (status, code) = match e {
                    WizardError::Blocked { .. } => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "STEP_INCOMPLETE")
                    }
                    WizardError::RequestPending => (StatusCode::CONFLICT, "REQUEST_PENDING"),
                    WizardError::ProfileLocked => (StatusCode::CONFLICT, "PROFILE_LOCKED"),
                    WizardError::AtTerminalStep => (StatusCode::CONFLICT, "AT_TERMINAL_STEP"),
                    WizardError::UnknownOption { .. } => {
                        (StatusCode::BAD_REQUEST, "UNKNOWN_OPTION")
                    }
                };
                let details = match e {
                    WizardError::Blocked { unmet, .. } => json!({ "unmet": unmet }),
                    _ => Value::Null,
                };
                (status, code, e.to_string(), details)
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    Value::Null,
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if !details.is_null() {
            error["details"] = details;
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::gate::Requirement;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_blocked_maps_to_422_with_unmet_details() {
        let response = AppError::from(WizardError::Blocked {
            step: 3,
            unmet: vec![Requirement::Skills],
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "STEP_INCOMPLETE");
        assert_eq!(body["error"]["details"]["unmet"][0], "skills");
    }

    #[tokio::test]
    async fn test_pending_maps_to_409() {
        let response = AppError::from(WizardError::RequestPending).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "REQUEST_PENDING");
        assert!(body["error"].get("details").is_none());
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response = AppError::from(anyhow::anyhow!("secret detail")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "An internal server error occurred");
    }
}
