use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::interview::InterviewType;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScheduleInterviewPayload {
    pub candidate_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    #[validate(range(min = 1))]
    pub duration_minutes: u32,
    pub interview_type: InterviewType,
    #[validate(length(min = 1))]
    pub interviewers: Vec<String>,
    pub notes: Option<String>,
}
