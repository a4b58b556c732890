pub mod analyze;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::headlines::handlers::handle_headlines;
use crate::history::handlers::{handle_get_analysis, handle_list_analyses, handle_save_analysis};
use crate::roadmap::handlers::handle_roadmap;
use crate::skills::handlers::handle_skill_gap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/skill-gap", post(handle_skill_gap))
        .route("/api/roadmap", post(handle_roadmap))
        .route("/api/analyze", post(analyze::handle_analyze))
        .route(
            "/api/save-analysis",
            post(handle_save_analysis).get(handle_list_analyses),
        )
        .route("/api/analyses/:id", get(handle_get_analysis))
        .route("/api/hackernews", get(handle_headlines))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::headlines::HeadlineClient;
    use crate::history::log::AppendOutcome;
    use crate::history::memory::MemoryStore;
    use crate::history::{AnalysisStore, StoreError};
    use crate::models::analysis::{AnalysisRecord, NewAnalysis};
    use crate::roadmap::RoadmapProvider;
    use crate::skills::catalog::RoleCatalog;
    use crate::skills::matcher::SkillMatcher;

    /// Store whose backing medium is always unavailable.
    struct FailingStore;

    fn unavailable() -> StoreError {
        StoreError::Io {
            path: "unavailable.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        }
    }

    #[async_trait]
    impl AnalysisStore for FailingStore {
        async fn append(&self, _analysis: NewAnalysis) -> Result<AppendOutcome, StoreError> {
            Err(unavailable())
        }
        async fn list(&self) -> Result<Vec<AnalysisRecord>, StoreError> {
            Err(unavailable())
        }
        async fn get(&self, _id: &str) -> Result<Option<AnalysisRecord>, StoreError> {
            Err(unavailable())
        }
    }

    fn app_with_store(store: Arc<dyn AnalysisStore>) -> Router {
        build_router(AppState {
            matcher: SkillMatcher::new(Arc::new(RoleCatalog::default())),
            roadmaps: Arc::new(RoadmapProvider::default()),
            store,
            headlines: HeadlineClient::new("http://127.0.0.1:9/v0").unwrap(),
        })
    }

    fn app() -> Router {
        app_with_store(Arc::new(MemoryStore::new()))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        read_json(app.clone().oneshot(request).await.unwrap()).await
    }

    /// Posts `body` verbatim, labelled as JSON whether or not it is.
    async fn post_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        read_json(app.clone().oneshot(request).await.unwrap()).await
    }

    async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_skill_gap_frontend_example() {
        let (status, body) = send(
            &app(),
            "POST",
            "/api/skill-gap",
            Some(json!({ "role": "Frontend Developer", "currentSkills": "HTML, CSS" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["targetRole"], "Frontend Developer");
        assert_eq!(body["matchedSkills"], json!(["HTML", "CSS"]));
        assert_eq!(body["missingSkills"], json!(["JavaScript", "React", "Git"]));
        assert_eq!(body["matchPercentage"], 40);
        assert_eq!(body["suggestedLearningOrder"], json!(["JavaScript", "Git", "React"]));
    }

    #[tokio::test]
    async fn test_skill_gap_accepts_target_role_and_skill_list() {
        let (status, body) = send(
            &app(),
            "POST",
            "/api/skill-gap",
            Some(json!({ "targetRole": "Backend Developer", "currentSkills": ["java", " Git "] })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchedSkills"], json!(["Java", "Git"]));
        assert_eq!(body["matchPercentage"], 40);
    }

    #[tokio::test]
    async fn test_skill_gap_unknown_role_is_not_an_error() {
        let (status, body) = send(
            &app(),
            "POST",
            "/api/skill-gap",
            Some(json!({ "role": "Astronaut", "currentSkills": "Physics" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchPercentage"], 0);
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_skill_gap_missing_fields_is_bad_request() {
        let (status, body) = send(
            &app(),
            "POST",
            "/api/skill-gap",
            Some(json!({ "role": "Frontend Developer" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, _) = send(
            &app(),
            "POST",
            "/api/skill-gap",
            Some(json!({ "currentSkills": "HTML" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_roadmap_known_and_generic() {
        let (status, body) = send(
            &app(),
            "POST",
            "/api/roadmap",
            Some(json!({ "targetRole": "Backend Developer" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["phases"][0]["title"], "Java & Programming Fundamentals");

        let (_, body) = send(&app(), "POST", "/api/roadmap", Some(json!({ "role": "Chef" }))).await;
        assert_eq!(body["totalDuration"], "6-8 months");
        assert!(body["note"].is_string());
    }

    #[tokio::test]
    async fn test_save_then_list_and_get() {
        let app = app();
        let payload = json!({
            "targetRole": "Frontend Developer",
            "currentSkills": "HTML, CSS",
            "skillGapResult": { "matchPercentage": 40 }
        });

        let (status, first) = send(&app, "POST", "/api/save-analysis", Some(payload.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["success"], true);
        assert_eq!(first["isDuplicate"], false);
        assert_eq!(first["totalAnalyses"], 1);

        let (_, second) = send(&app, "POST", "/api/save-analysis", Some(payload)).await;
        assert_eq!(second["isDuplicate"], true);
        assert_eq!(second["id"], first["id"]);

        let (status, list) = send(&app, "GET", "/api/save-analysis", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list["count"], 1);
        assert_eq!(list["analyses"][0]["skillGapResult"]["matchPercentage"], 40);
        assert_eq!(list["analyses"][0]["roadmapResult"], Value::Null);

        let id = first["id"].as_str().unwrap();
        let (status, record) = send(&app, "GET", &format!("/api/save-analysis?id={id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(record["id"], id);

        let (status, record) = send(&app, "GET", &format!("/api/analyses/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(record["targetRole"], "Frontend Developer");
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let app = app();
        for skills in ["HTML", "CSS", "Git"] {
            send(
                &app,
                "POST",
                "/api/save-analysis",
                Some(json!({ "targetRole": "Frontend Developer", "currentSkills": skills })),
            )
            .await;
        }

        let (_, list) = send(&app, "GET", "/api/save-analysis", None).await;
        let skills: Vec<&str> = list["analyses"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["currentSkills"].as_str().unwrap())
            .collect();
        assert_eq!(skills, ["Git", "CSS", "HTML"]);
    }

    #[tokio::test]
    async fn test_get_unknown_analysis_is_404() {
        let (status, body) = send(&app(), "GET", "/api/save-analysis?id=analysis_0_nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, _) = send(&app(), "GET", "/api/analyses/analysis_0_nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_save_requires_role_and_skills() {
        let (status, _) = send(
            &app(),
            "POST",
            "/api/save-analysis",
            Some(json!({ "targetRole": "Frontend Developer", "currentSkills": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_save_storage_failure_is_server_error() {
        let app = app_with_store(Arc::new(FailingStore));
        let (status, body) = send(
            &app,
            "POST",
            "/api/save-analysis",
            Some(json!({ "targetRole": "Frontend Developer", "currentSkills": "HTML" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "STORAGE_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_persists_and_returns_results() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/analyze",
            Some(json!({ "role": "Frontend Developer", "currentSkills": ["HTML", "CSS"] })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["persisted"], true);
        assert_eq!(body["skillGap"]["matchPercentage"], 40);
        assert_eq!(body["roadmap"]["targetRole"], "Frontend Developer");

        let id = body["saved"]["id"].as_str().unwrap();
        let (_, record) = send(&app, "GET", &format!("/api/analyses/{id}"), None).await;
        assert_eq!(record["currentSkills"], "HTML, CSS");
        assert_eq!(record["skillGapResult"]["missingSkills"], json!(["JavaScript", "React", "Git"]));
        assert_eq!(record["roadmapResult"]["phases"][0]["title"], "Foundations");
    }

    #[tokio::test]
    async fn test_analyze_survives_storage_failure() {
        let app = app_with_store(Arc::new(FailingStore));
        let (status, body) = send(
            &app,
            "POST",
            "/api/analyze",
            Some(json!({ "role": "Frontend Developer", "currentSkills": "HTML, CSS" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["persisted"], false);
        assert!(body.get("saved").is_none());
        assert_eq!(body["skillGap"]["matchPercentage"], 40);
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_validation_error() {
        let app = app();
        for uri in ["/api/skill-gap", "/api/analyze", "/api/roadmap", "/api/save-analysis"] {
            let (status, body) = post_raw(&app, uri, "not json").await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR", "{uri}");
        }
    }

    #[tokio::test]
    async fn test_wrong_field_types_are_validation_errors() {
        let app = app();
        for payload in [
            json!({ "role": 5, "currentSkills": "HTML" }),
            json!({ "role": "Frontend Developer", "currentSkills": 7 }),
        ] {
            let (status, body) = send(&app, "POST", "/api/skill-gap", Some(payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
            assert!(body["error"]["message"].as_str().is_some());
        }
    }

    #[tokio::test]
    async fn test_whitespace_role_uses_target_role() {
        let (status, body) = send(
            &app(),
            "POST",
            "/api/skill-gap",
            Some(json!({ "role": "   ", "targetRole": "Backend Developer", "currentSkills": "Java" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["targetRole"], "Backend Developer");
    }
}
