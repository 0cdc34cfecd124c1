use crate::models::question::Mcq;
use uuid::Uuid;

/// Where one applicant is in their assessment run. The whole per-run
/// context (question set, cursor, candidate id) lives inside the state so
/// that a reset discards it in one assignment.
#[derive(Debug, Clone)]
pub enum AssessmentState {
    AwaitingIntake,
    InProgress {
        candidate_id: i64,
        questions: Vec<Mcq>,
        index: usize,
    },
    Completed {
        candidate_id: i64,
        total_questions: usize,
    },
}

impl AssessmentState {
    pub fn name(&self) -> &'static str {
        match self {
            AssessmentState::AwaitingIntake => "awaiting_intake",
            AssessmentState::InProgress { .. } => "in_progress",
            AssessmentState::Completed { .. } => "completed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssessmentSession {
    pub id: Uuid,
    pub state: AssessmentState,
}

impl AssessmentSession {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            state: AssessmentState::AwaitingIntake,
        }
    }

    pub fn candidate_id(&self) -> Option<i64> {
        match self.state {
            AssessmentState::AwaitingIntake => None,
            AssessmentState::InProgress { candidate_id, .. }
            | AssessmentState::Completed { candidate_id, .. } => Some(candidate_id),
        }
    }
}
