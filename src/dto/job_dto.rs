use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::job::{Job, JobStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub department: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub salary_from: Option<Decimal>,
    pub salary_to: Option<Decimal>,
    pub currency: Option<String>,
    pub status: Option<JobStatus>,
}

/// Job row as the dashboard lists it, with the derived candidate count
/// and the advisory rubric weight total alongside the stored fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: Uuid,
    pub title: String,
    pub department: String,
    pub location: String,
    pub status: JobStatus,
    pub candidate_count: usize,
    pub rubric_weight_total: u32,
}

impl JobSummary {
    pub fn from_job(job: &Job, candidate_count: usize) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            department: job.department.clone(),
            location: job.location.clone(),
            status: job.status,
            candidate_count,
            rubric_weight_total: job.rubric_weight_total(),
        }
    }
}
