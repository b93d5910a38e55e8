use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::audit_log::AuditEvent;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub job_id: Uuid,
    pub stage: Stage,
    #[serde(default)]
    pub is_shortlisted: bool,
    pub score: i32,
    pub ai_evaluation: Option<AiEvaluation>,
    pub video_screening: Option<VideoScreening>,
    pub audit_log: Vec<AuditEvent>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    New,
    Applied,
    Screening,
    Shortlisted,
    Interview,
    Offer,
    Hired,
    Rejected,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::New => "New",
            Stage::Applied => "Applied",
            Stage::Screening => "Screening",
            Stage::Shortlisted => "Shortlisted",
            Stage::Interview => "Interview",
            Stage::Offer => "Offer",
            Stage::Hired => "Hired",
            Stage::Rejected => "Rejected",
        }
    }

    pub const ALL: [Stage; 8] = [
        Stage::New,
        Stage::Applied,
        Stage::Screening,
        Stage::Shortlisted,
        Stage::Interview,
        Stage::Offer,
        Stage::Hired,
        Stage::Rejected,
    ];
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiEvaluation {
    pub rating: i32,
    pub summary: String,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoScreening {
    pub video_url: String,
    pub duration_seconds: Option<u32>,
    pub transcript: Option<String>,
    pub submitted_at: DateTime<Utc>,
}
