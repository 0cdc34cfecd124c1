pub mod assessment;
pub mod candidate_routes;
pub mod health;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/sessions", post(assessment::create_session))
        .route("/api/sessions/:id", get(assessment::get_session))
        .route("/api/sessions/:id/intake", post(assessment::submit_intake))
        .route(
            "/api/sessions/:id/question",
            get(assessment::current_question),
        )
        .route("/api/sessions/:id/answer", post(assessment::submit_answer))
        .route("/api/sessions/:id/score", get(assessment::session_score))
        .route("/api/sessions/:id/reset", post(assessment::reset_session))
        .route("/api/candidates/:id", get(candidate_routes::get_candidate))
        .route(
            "/api/candidates/:id/answers",
            get(candidate_routes::list_candidate_answers),
        )
        .route(
            "/api/candidates/:id/score",
            get(candidate_routes::candidate_score),
        )
        .with_state(state)
}
