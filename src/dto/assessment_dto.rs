use crate::models::candidate::Position;
use crate::models::question::{Mcq, OptionKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// The intake form payload. Deserialization already restricts `position` to
/// the closed enumeration; everything else must be non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IntakeRequest {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
    #[validate(range(max = 50, message = "Years of experience must be at most 50"))]
    pub experience: u32,
    pub position: Position,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[validate(length(min = 1, message = "Tech stack is required"))]
    pub tech_stack: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitAnswerRequest {
    pub answer: OptionKey,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCreatedResponse {
    pub session_id: uuid::Uuid,
    pub state: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatusResponse {
    pub session_id: uuid::Uuid,
    pub state: String,
    pub candidate_id: Option<i64>,
    pub answered: Option<usize>,
    pub total_questions: Option<usize>,
}

/// One question as shown to the applicant. The correct letter stays server
/// side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionView {
    pub number: usize,
    pub total_questions: usize,
    pub question: String,
    pub options: BTreeMap<OptionKey, String>,
}

impl QuestionView {
    pub fn from_mcq(mcq: &Mcq, index: usize, total: usize) -> Self {
        Self {
            number: index + 1,
            total_questions: total,
            question: mcq.question.clone(),
            options: mcq.options.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeResponse {
    pub candidate_id: i64,
    pub total_questions: usize,
    pub question: QuestionView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswerResponse {
    pub is_correct: bool,
    pub correct_answer: OptionKey,
    pub correct_option: String,
    pub completed: bool,
    pub question: Option<QuestionView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub candidate_id: i64,
    pub total_questions: i64,
    pub correct_answers: i64,
    pub score_percentage: f64,
    pub remark: String,
}
