use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One persisted response. Rows are append-only; `is_correct` is computed
/// when the answer is submitted and never recomputed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnswerRecord {
    pub id: i64,
    pub candidate_id: i64,
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub created_at: DateTime<Utc>,
}
