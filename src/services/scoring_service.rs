use crate::error::Result;
use serde::Serialize;
use sqlx::SqlitePool;

#[derive(Debug, Clone, Serialize)]
pub struct ScoreSummary {
    pub total_answered: i64,
    pub correct_count: i64,
    pub percentage: f64,
}

/// Read-only aggregation over the persisted answer rows of one candidate.
#[derive(Clone)]
pub struct ScoringService {
    pool: SqlitePool,
}

impl ScoringService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn score_for_candidate(&self, candidate_id: i64) -> Result<ScoreSummary> {
        let (total_answered, correct_count): (i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*),
                   COALESCE(SUM(CASE WHEN is_correct THEN 1 ELSE 0 END), 0)
            FROM answers
            WHERE candidate_id = ?
            "#,
        )
        .bind(candidate_id)
        .fetch_one(&self.pool)
        .await?;

        let percentage = if total_answered > 0 {
            correct_count as f64 / total_answered as f64 * 100.0
        } else {
            0.0
        };

        Ok(ScoreSummary {
            total_answered,
            correct_count,
            percentage,
        })
    }
}

/// Closing remark shown with the final score.
pub fn remark(percentage: f64) -> &'static str {
    if percentage >= 80.0 {
        "Excellent performance! You're ready for the next round."
    } else if percentage >= 60.0 {
        "Good job! Consider reviewing some concepts."
    } else {
        "Keep learning! Review the fundamentals."
    }
}
