use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};

use crate::dto::assessment_dto::ScoreResponse;
use crate::error::{Error, Result};
use crate::services::scoring_service;
use crate::AppState;

#[axum::debug_handler]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response> {
    let candidate = state
        .assessment_service
        .get_candidate(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Unknown candidate: {}", id)))?;
    Ok(Json(candidate).into_response())
}

#[axum::debug_handler]
pub async fn list_candidate_answers(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response> {
    if state.assessment_service.get_candidate(id).await?.is_none() {
        return Err(Error::NotFound(format!("Unknown candidate: {}", id)));
    }
    let answers = state.assessment_service.list_answers(id).await?;
    Ok(Json(answers).into_response())
}

#[axum::debug_handler]
pub async fn candidate_score(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response> {
    if state.assessment_service.get_candidate(id).await?.is_none() {
        return Err(Error::NotFound(format!("Unknown candidate: {}", id)));
    }
    let summary = state.scoring_service.score_for_candidate(id).await?;
    Ok(Json(ScoreResponse {
        candidate_id: id,
        total_questions: summary.total_answered,
        correct_answers: summary.correct_count,
        score_percentage: summary.percentage,
        remark: scoring_service::remark(summary.percentage).to_string(),
    })
    .into_response())
}
