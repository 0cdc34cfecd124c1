use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};
use uuid::Uuid;
use validator::Validate;

use crate::dto::assessment_dto::{
    IntakeRequest, IntakeResponse, QuestionView, ScoreResponse, SessionCreatedResponse,
    SessionStatusResponse, SubmitAnswerRequest, SubmitAnswerResponse,
};
use crate::error::{Error, Result};
use crate::models::session::AssessmentState;
use crate::services::scoring_service;
use crate::AppState;

async fn lookup_session(
    state: &AppState,
    id: Uuid,
) -> Result<std::sync::Arc<tokio::sync::Mutex<crate::models::session::AssessmentSession>>> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| Error::NotFound(format!("Unknown session: {}", id)))
}

#[axum::debug_handler]
pub async fn create_session(State(state): State<AppState>) -> Result<Response> {
    let session_id = state.sessions.create().await;
    tracing::info!(%session_id, "assessment session created");
    Ok(Json(SessionCreatedResponse {
        session_id,
        state: "awaiting_intake".to_string(),
    })
    .into_response())
}

#[axum::debug_handler]
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response> {
    let session = lookup_session(&state, id).await?;
    let session = session.lock().await;

    let (answered, total) = match &session.state {
        AssessmentState::AwaitingIntake => (None, None),
        AssessmentState::InProgress {
            questions, index, ..
        } => (Some(*index), Some(questions.len())),
        AssessmentState::Completed {
            total_questions, ..
        } => (Some(*total_questions), Some(*total_questions)),
    };

    Ok(Json(SessionStatusResponse {
        session_id: session.id,
        state: session.state.name().to_string(),
        candidate_id: session.candidate_id(),
        answered,
        total_questions: total,
    })
    .into_response())
}

/// Intake submission: validates the form payload, generates the question
/// set for the declared stack and fires the first state transition.
#[axum::debug_handler]
pub async fn submit_intake(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<IntakeRequest>,
) -> Result<Response> {
    req.validate()?;
    let session = lookup_session(&state, id).await?;
    let mut session = session.lock().await;

    if !matches!(session.state, AssessmentState::AwaitingIntake) {
        return Err(Error::BadRequest(
            "An assessment is already in progress for this session".to_string(),
        ));
    }

    let questions = state.ai_service.generate_mcqs(&req.tech_stack).await;
    let candidate_id = state
        .assessment_service
        .start_run(&mut session, &req, questions)
        .await?;

    let (first, total) = match &session.state {
        AssessmentState::InProgress { questions, .. } => match questions.first() {
            Some(first) => (first, questions.len()),
            None => return Err(Error::Internal("Assessment did not start".to_string())),
        },
        _ => return Err(Error::Internal("Assessment did not start".to_string())),
    };

    Ok(Json(IntakeResponse {
        candidate_id,
        total_questions: total,
        question: QuestionView::from_mcq(first, 0, total),
    })
    .into_response())
}

#[axum::debug_handler]
pub async fn current_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response> {
    let session = lookup_session(&state, id).await?;
    let session = session.lock().await;

    match &session.state {
        AssessmentState::InProgress {
            questions, index, ..
        } => {
            let question = questions
                .get(*index)
                .ok_or_else(|| Error::Internal("Question index out of range".to_string()))?;
            Ok(Json(QuestionView::from_mcq(question, *index, questions.len())).into_response())
        }
        AssessmentState::AwaitingIntake => Err(Error::BadRequest(
            "Intake has not been submitted yet".to_string(),
        )),
        AssessmentState::Completed { .. } => Err(Error::BadRequest(
            "The assessment is already completed".to_string(),
        )),
    }
}

#[axum::debug_handler]
pub async fn submit_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Result<Response> {
    let session = lookup_session(&state, id).await?;
    let mut session = session.lock().await;

    let outcome = state
        .assessment_service
        .submit_answer(&mut session, req.answer)
        .await?;

    let next_question = match &session.state {
        AssessmentState::InProgress {
            questions, index, ..
        } => questions
            .get(*index)
            .map(|q| QuestionView::from_mcq(q, *index, questions.len())),
        _ => None,
    };

    Ok(Json(SubmitAnswerResponse {
        is_correct: outcome.is_correct,
        correct_answer: outcome.correct,
        correct_option: outcome.correct_text,
        completed: outcome.completed,
        question: next_question,
    })
    .into_response())
}

#[axum::debug_handler]
pub async fn session_score(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response> {
    let session = lookup_session(&state, id).await?;
    let session = session.lock().await;

    let candidate_id = match session.state {
        AssessmentState::Completed { candidate_id, .. } => candidate_id,
        _ => {
            return Err(Error::BadRequest(
                "The assessment is not completed yet".to_string(),
            ))
        }
    };

    let summary = state
        .scoring_service
        .score_for_candidate(candidate_id)
        .await?;
    Ok(Json(ScoreResponse {
        candidate_id,
        total_questions: summary.total_answered,
        correct_answers: summary.correct_count,
        score_percentage: summary.percentage,
        remark: scoring_service::remark(summary.percentage).to_string(),
    })
    .into_response())
}

#[axum::debug_handler]
pub async fn reset_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response> {
    let session = lookup_session(&state, id).await?;
    let mut session = session.lock().await;

    state.assessment_service.reset(&mut session)?;
    tracing::info!(session_id = %id, "assessment session reset");
    Ok(Json(SessionCreatedResponse {
        session_id: session.id,
        state: session.state.name().to_string(),
    })
    .into_response())
}
