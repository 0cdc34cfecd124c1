use crate::dto::assessment_dto::IntakeRequest;
use crate::error::{Error, Result};
use crate::models::answer::AnswerRecord;
use crate::models::candidate::Candidate;
use crate::models::question::{Mcq, OptionKey};
use crate::models::session::{AssessmentSession, AssessmentState};
use chrono::Utc;
use sqlx::SqlitePool;

/// What came back from answering one question.
#[derive(Debug, Clone)]
pub struct AnswerOutcome {
    pub answered_index: usize,
    pub is_correct: bool,
    pub correct: OptionKey,
    pub correct_text: String,
    pub completed: bool,
}

/// Drives a session through intake, the per-question answer loop and reset,
/// persisting candidate and answer rows as the transitions fire.
#[derive(Clone)]
pub struct AssessmentService {
    pool: SqlitePool,
}

impl AssessmentService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// `AwaitingIntake -> InProgress(0)`. The candidate row is written as
    /// part of this transition; with an empty question set nothing is
    /// persisted and the state does not move.
    pub async fn start_run(
        &self,
        session: &mut AssessmentSession,
        intake: &IntakeRequest,
        questions: Vec<Mcq>,
    ) -> Result<i64> {
        if !matches!(session.state, AssessmentState::AwaitingIntake) {
            return Err(Error::BadRequest(
                "An assessment is already in progress for this session".to_string(),
            ));
        }
        if questions.is_empty() {
            return Err(Error::Unavailable(
                "Question generation is not available. Cannot start the assessment.".to_string(),
            ));
        }

        let candidate_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO candidates (full_name, email, phone, experience, position, location, tech_stack, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&intake.full_name)
        .bind(&intake.email)
        .bind(&intake.phone)
        .bind(intake.experience as i64)
        .bind(intake.position.as_str())
        .bind(&intake.location)
        .bind(&intake.tech_stack)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(candidate_id, questions = questions.len(), "assessment run started");
        session.state = AssessmentState::InProgress {
            candidate_id,
            questions,
            index: 0,
        };
        Ok(candidate_id)
    }

    /// `InProgress(i) -> InProgress(i+1)` or `-> Completed` on the last
    /// question. The answer row insert and the index advance are one step:
    /// if the insert fails the index stays put and the question can be
    /// retried.
    pub async fn submit_answer(
        &self,
        session: &mut AssessmentSession,
        selected: OptionKey,
    ) -> Result<AnswerOutcome> {
        let (candidate_id, question, index, total) = match &session.state {
            AssessmentState::InProgress {
                candidate_id,
                questions,
                index,
            } => {
                let question = questions
                    .get(*index)
                    .ok_or_else(|| Error::Internal("Question index out of range".to_string()))?;
                (*candidate_id, question.clone(), *index, questions.len())
            }
            _ => {
                return Err(Error::BadRequest(
                    "No question is awaiting an answer".to_string(),
                ))
            }
        };

        let Some(correct_text) = question.options.get(&question.correct) else {
            // Integrity anomaly: the designated answer is not an option.
            // Reject the record instead of persisting it.
            return Err(Error::Internal(
                "Question failed its integrity check".to_string(),
            ));
        };

        let is_correct = selected == question.correct;
        sqlx::query(
            r#"
            INSERT INTO answers (candidate_id, question, user_answer, correct_answer, is_correct, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(candidate_id)
        .bind(&question.question)
        .bind(selected.as_str())
        .bind(question.correct.as_str())
        .bind(is_correct)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        let outcome = AnswerOutcome {
            answered_index: index,
            is_correct,
            correct: question.correct,
            correct_text: correct_text.clone(),
            completed: index + 1 == total,
        };

        if outcome.completed {
            tracing::info!(candidate_id, total, "assessment run completed");
            session.state = AssessmentState::Completed {
                candidate_id,
                total_questions: total,
            };
        } else if let AssessmentState::InProgress { index, .. } = &mut session.state {
            *index += 1;
        }

        Ok(outcome)
    }

    /// `Completed -> AwaitingIntake`. Per-run state is discarded; persisted
    /// candidate and answer rows are kept.
    pub fn reset(&self, session: &mut AssessmentSession) -> Result<()> {
        match session.state {
            AssessmentState::Completed { .. } => {
                session.state = AssessmentState::AwaitingIntake;
                Ok(())
            }
            _ => Err(Error::BadRequest(
                "Only a completed assessment can be reset".to_string(),
            )),
        }
    }

    pub async fn get_candidate(&self, id: i64) -> Result<Option<Candidate>> {
        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            SELECT id, full_name, email, phone, experience, position, location, tech_stack, created_at
            FROM candidates
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(candidate)
    }

    pub async fn list_answers(&self, candidate_id: i64) -> Result<Vec<AnswerRecord>> {
        let answers = sqlx::query_as::<_, AnswerRecord>(
            r#"
            SELECT id, candidate_id, question, user_answer, correct_answer, is_correct, created_at
            FROM answers
            WHERE candidate_id = ?
            ORDER BY id
            "#,
        )
        .bind(candidate_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(answers)
    }
}
