pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use crate::services::{
    ai_service::AIService, assessment_service::AssessmentService,
    scoring_service::ScoringService, session_service::SessionStore,
};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub ai_service: AIService,
    pub assessment_service: AssessmentService,
    pub scoring_service: ScoringService,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(pool: SqlitePool, ai_service: AIService) -> Self {
        let assessment_service = AssessmentService::new(pool.clone());
        let scoring_service = ScoringService::new(pool.clone());

        Self {
            pool,
            ai_service,
            assessment_service,
            scoring_service,
            sessions: SessionStore::new(),
        }
    }
}
