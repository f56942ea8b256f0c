pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;
use crate::wizard::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/catalog", get(handlers::handle_get_catalog))
        // Wizard API
        .route("/api/v1/wizard", get(handlers::handle_get_wizard))
        .route("/api/v1/wizard/fields", put(handlers::handle_set_field))
        .route("/api/v1/wizard/toggle", post(handlers::handle_toggle))
        .route(
            "/api/v1/wizard/custom-motivation",
            put(handlers::handle_set_custom_motivation)
                .post(handlers::handle_add_custom_motivation),
        )
        .route("/api/v1/wizard/next", post(handlers::handle_next))
        .route("/api/v1/wizard/back", post(handlers::handle_back))
        .route("/api/v1/wizard/restart", post(handlers::handle_restart))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::suggestions::{SuggestionError, SuggestionService};
    use crate::wizard::profile::Profile;
    use crate::wizard::{FailurePolicy, Wizard, WizardCatalog, WizardSession, WizardSettings};

    struct Canned(&'static str);

    #[async_trait]
    impl SuggestionService for Canned {
        async fn request_suggestions(&self, _profile: &Profile) -> Result<String, SuggestionError> {
            Ok(self.0.to_string())
        }
    }

    fn test_router(reply: &'static str) -> Router {
        let catalog = Arc::new(WizardCatalog::default());
        let settings = WizardSettings {
            failure_policy: FailurePolicy::Stay,
            request_timeout: Duration::from_secs(5),
        };
        let wizard = Wizard::new(Arc::clone(&catalog), settings);
        let state = AppState {
            config: Config {
                openai_api_key: "test-key".into(),
                openai_model: "gpt-4".into(),
                openai_base_url: "http://localhost".into(),
                port: 0,
                rust_log: "info".into(),
                request_timeout: settings.request_timeout,
                failure_policy: settings.failure_policy,
                catalog_path: None,
            },
            catalog,
            session: WizardSession::new(wizard, Arc::new(Canned(reply))),
        };
        build_router(state)
    }

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header("content-type", "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let response = router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn set_field(router: &Router, field: &str, value: &str) {
        let (status, _) = send(
            router,
            Method::PUT,
            "/api/v1/wizard/fields",
            Some(json!({ "field": field, "value": value })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "setting {field}");
    }

    async fn toggle(router: &Router, field: &str, value: &str) {
        let (status, _) = send(
            router,
            Method::POST,
            "/api/v1/wizard/toggle",
            Some(json!({ "field": field, "value": value })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "toggling {value}");
    }

    async fn next(router: &Router) -> (StatusCode, Value) {
        send(router, Method::POST, "/api/v1/wizard/next", None).await
    }

    #[tokio::test]
    async fn test_health() {
        let router = test_router("{}");
        let (status, body) = send(&router, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "career-guide-api");
        assert_eq!(body["model"], "gpt-4");
    }

    #[tokio::test]
    async fn test_catalog_lists_options() {
        let router = test_router("{}");
        let (status, body) = send(&router, Method::GET, "/api/v1/catalog", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["educationLevels"].as_array().unwrap().len(), 5);
        assert!(!body["skills"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blocked_next_returns_422_with_unmet() {
        let router = test_router("{}");
        set_field(&router, "name", "Alex").await;

        let (status, body) = next(&router).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "STEP_INCOMPLETE");
        assert_eq!(body["error"]["details"]["unmet"], json!(["age"]));

        let (_, view) = send(&router, Method::GET, "/api/v1/wizard", None).await;
        assert_eq!(view["step"], 1);
    }

    #[tokio::test]
    async fn test_unknown_skill_is_bad_request() {
        let router = test_router("{}");
        let (status, body) = send(
            &router,
            Method::POST,
            "/api/v1/wizard/toggle",
            Some(json!({ "field": "skills", "value": "Juggling" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "UNKNOWN_OPTION");

        let (status, _) = send(
            &router,
            Method::POST,
            "/api/v1/wizard/toggle",
            Some(json!({ "field": "motivations", "value": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_full_walkthrough_to_results_and_restart() {
        let router = test_router(
            r##"{"resultInformations":[
                {"title":"Graphic Designer","match":92,"description":"Visual work","color":"#22C55E"},
                {"title":"Music Teacher","match":88,"description":"Teaching music","color":"#EAB308"}
            ]}"##,
        );

        set_field(&router, "name", "Alex").await;
        set_field(&router, "age", "30").await;
        assert_eq!(next(&router).await.1["step"], 2);

        set_field(&router, "currentCareer", "Teacher").await;
        set_field(&router, "yearsOfExperience", "5").await;
        set_field(&router, "education", "degree").await;
        assert_eq!(next(&router).await.1["step"], 3);

        for skill in ["Teamwork", "Leadership", "Creativity"] {
            toggle(&router, "skills", skill).await;
        }
        for interest in ["Art", "Music", "Food"] {
            toggle(&router, "interests", interest).await;
        }
        assert_eq!(next(&router).await.1["step"], 4);

        let (status, view) = send(
            &router,
            Method::POST,
            "/api/v1/wizard/custom-motivation",
            Some(json!({ "text": "  Mentoring  " })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["content"]["selectedMotivations"], json!(["Mentoring"]));
        assert_eq!(view["content"]["customMotivation"], "");
        set_field(&router, "workStyle", "hybrid").await;
        set_field(&router, "salary", "20000-30000").await;

        let (status, view) = next(&router).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["step"], 5);
        assert_eq!(view["content"]["kind"], "results");
        assert_eq!(view["content"]["centerLabel"], "Alex");
        assert_eq!(view["content"]["bubbles"][0]["dx"], 110);
        assert_eq!(view["content"]["bubbles"][1]["dx"], 110);

        let (status, body) = send(&router, Method::POST, "/api/v1/wizard/back", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "AT_TERMINAL_STEP");

        let (status, view) = send(&router, Method::POST, "/api/v1/wizard/restart", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["step"], 1);
        assert_eq!(view["content"]["name"], "");
    }
}
