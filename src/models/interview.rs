use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledInterview {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: u32,
    #[serde(rename = "type")]
    pub interview_type: InterviewType,
    pub interviewers: Vec<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewType {
    Phone,
    Video,
    Onsite,
    Technical,
}

impl InterviewType {
    pub fn label(&self) -> &'static str {
        match self {
            InterviewType::Phone => "Phone",
            InterviewType::Video => "Video",
            InterviewType::Onsite => "Onsite",
            InterviewType::Technical => "Technical",
        }
    }
}
