use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as JsonValue};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

use talentscout_backend::services::ai_service::AIService;
use talentscout_backend::{routes, AppState};

async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");
    pool
}

fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(2))
        .build()
        .expect("client")
}

/// App whose generation backend is unreachable: every intake falls back to
/// the fixed question bank.
async fn spawn_app_with_fallback() -> (Router, SqlitePool) {
    let pool = setup_pool().await;
    let ai_service = AIService::new(
        Some("http://127.0.0.1:9".to_string()),
        "llama3".to_string(),
        test_client(),
    );
    let app = routes::api_router(AppState::new(pool.clone(), ai_service));
    (app, pool)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };
    let resp = app.clone().oneshot(req).await.expect("response");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.expect("body");
    // Extractor rejections come back as plain text, not JSON.
    let json = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, json)
}

fn intake_payload() -> JsonValue {
    json!({
        "full_name": "Alice Example",
        "email": "alice@example.com",
        "phone": "+44 20 7946 0000",
        "experience": 4,
        "position": "Full Stack Developer",
        "location": "Manchester",
        "tech_stack": "Python, Django"
    })
}

#[tokio::test]
async fn full_assessment_flow_over_the_fallback_bank() {
    let (app, _pool) = spawn_app_with_fallback().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    // Create a session.
    let (status, body) = send(&app, "POST", "/api/sessions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "awaiting_intake");
    let session_id = body["session_id"].as_str().expect("session id").to_string();

    let (status, body) = send(&app, "GET", &format!("/api/sessions/{}", session_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "awaiting_intake");
    assert!(body["candidate_id"].is_null());

    // Intake: the dead generation backend forces the fallback bank.
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/sessions/{}/intake", session_id),
        Some(intake_payload()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let candidate_id = body["candidate_id"].as_i64().expect("candidate id");
    assert_eq!(body["total_questions"], 5);
    assert_eq!(body["question"]["number"], 1);
    assert_eq!(
        body["question"]["question"],
        "What is the primary purpose of version control systems like Git?"
    );
    assert_eq!(body["question"]["options"].as_object().unwrap().len(), 4);
    // The correct letter must never reach the applicant.
    assert!(body["question"].get("correct").is_none());
    assert!(body["question"].get("correct_answer").is_none());

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/sessions/{}/question", session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number"], 1);

    // Fallback bank correct letters, in order: B, C, A, C, C.
    // Answer three correctly and two wrongly.
    let submissions = [("B", true), ("A", false), ("A", true), ("C", true), ("D", false)];
    for (i, (letter, expect_correct)) in submissions.iter().enumerate() {
        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/sessions/{}/answer", session_id),
            Some(json!({ "answer": letter })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_correct"], *expect_correct, "question {}", i + 1);
        let is_last = i + 1 == submissions.len();
        assert_eq!(body["completed"], is_last);
        if is_last {
            assert!(body["question"].is_null());
        } else {
            assert_eq!(body["question"]["number"], i + 2);
        }
    }

    // Completed: no further questions, no further answers.
    let (status, _) = send(
        &app,
        "GET",
        &format!("/api/sessions/{}/question", session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/sessions/{}/answer", session_id),
        Some(json!({ "answer": "A" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Score: 3 of 5.
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/sessions/{}/score", session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 5);
    assert_eq!(body["correct_answers"], 3);
    assert_eq!(body["score_percentage"], 60.0);
    assert_eq!(body["remark"], "Good job! Consider reviewing some concepts.");

    // The candidate-scoped read surface agrees.
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/candidates/{}/answers", candidate_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("answer rows");
    assert_eq!(rows.len(), 5);
    for row in rows {
        assert_eq!(
            row["is_correct"].as_bool().unwrap(),
            row["user_answer"] == row["correct_answer"]
        );
    }

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/candidates/{}/score", candidate_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["correct_answers"], 3);

    // Reset keeps the persisted rows but clears the run.
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/sessions/{}/reset", session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "awaiting_intake");
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/candidates/{}", candidate_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["full_name"], "Alice Example");
}

#[tokio::test]
async fn incomplete_intake_is_rejected() {
    let (app, pool) = spawn_app_with_fallback().await;
    let (_, body) = send(&app, "POST", "/api/sessions", None).await;
    let session_id = body["session_id"].as_str().unwrap().to_string();

    let mut payload = intake_payload();
    payload["full_name"] = json!("");
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/sessions/{}/intake", session_id),
        Some(payload),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // An unknown position never deserializes.
    let mut payload = intake_payload();
    payload["position"] = json!("Astronaut");
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/sessions/{}/intake", session_id),
        Some(payload),
    )
    .await;
    assert_ne!(status, StatusCode::OK);

    // Nothing was persisted and the session still accepts intake.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM candidates")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
    let (_, body) = send(&app, "GET", &format!("/api/sessions/{}", session_id), None).await;
    assert_eq!(body["state"], "awaiting_intake");
}

#[tokio::test]
async fn missing_generation_backend_blocks_intake() {
    let pool = setup_pool().await;
    let ai_service = AIService::new(None, "llama3".to_string(), test_client());
    let app = routes::api_router(AppState::new(pool.clone(), ai_service));

    let (_, body) = send(&app, "POST", "/api/sessions", None).await;
    let session_id = body["session_id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/sessions/{}/intake", session_id),
        Some(intake_payload()),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    // No candidate row is written when the run cannot start.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM candidates")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
    let (_, body) = send(&app, "GET", &format!("/api/sessions/{}", session_id), None).await;
    assert_eq!(body["state"], "awaiting_intake");
}

#[tokio::test]
async fn unknown_sessions_and_candidates_return_404() {
    let (app, _pool) = spawn_app_with_fallback().await;

    let id = uuid::Uuid::new_v4();
    let (status, _) = send(&app, "GET", &format!("/api/sessions/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/api/candidates/4242", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "GET", "/api/candidates/4242/score", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
