pub mod ai_service;
pub mod assessment_service;
pub mod mcq_parser;
pub mod question_bank;
pub mod scoring_service;
pub mod session_service;
