use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Candidate {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub experience: i64,
    pub position: String,
    pub location: String,
    pub tech_stack: String,
    pub created_at: DateTime<Utc>,
}

/// The closed set of positions a candidate can apply for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "Frontend Developer")]
    FrontendDeveloper,
    #[serde(rename = "Backend Developer")]
    BackendDeveloper,
    #[serde(rename = "Full Stack Developer")]
    FullStackDeveloper,
    #[serde(rename = "Data Scientist")]
    DataScientist,
    #[serde(rename = "DevOps Engineer")]
    DevOpsEngineer,
    #[serde(rename = "Mobile App Developer")]
    MobileAppDeveloper,
    #[serde(rename = "QA Engineer")]
    QaEngineer,
    #[serde(rename = "UI/UX Designer")]
    UiUxDesigner,
    #[serde(rename = "Product Manager")]
    ProductManager,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::FrontendDeveloper => "Frontend Developer",
            Position::BackendDeveloper => "Backend Developer",
            Position::FullStackDeveloper => "Full Stack Developer",
            Position::DataScientist => "Data Scientist",
            Position::DevOpsEngineer => "DevOps Engineer",
            Position::MobileAppDeveloper => "Mobile App Developer",
            Position::QaEngineer => "QA Engineer",
            Position::UiUxDesigner => "UI/UX Designer",
            Position::ProductManager => "Product Manager",
        }
    }
}
