use std::sync::Arc;

use uuid::Uuid;

use crate::dto::job_dto::{CreateJobPayload, JobSummary};
use crate::error::{Error, Result};
use crate::models::job::{Job, JobStatus};
use crate::store::{Store, StoreEvent};
use crate::utils::time;
use crate::utils::validation::validate;

#[derive(Clone)]
pub struct JobService {
    store: Arc<Store>,
}

impl JobService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub async fn create(&self, payload: CreateJobPayload) -> Result<Job> {
        validate(&payload)?;

        let now = time::now();
        let job = Job {
            id: Uuid::new_v4(),
            title: payload.title,
            department: payload.department,
            location: payload.location,
            status: payload.status.unwrap_or(JobStatus::Draft),
            salary_from: payload.salary_from,
            salary_to: payload.salary_to,
            currency: payload.currency,
            rubric: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        let created = self
            .store
            .mutate(StoreEvent::JobChanged(job.id), |state| {
                state.jobs.push(job.clone());
                Ok(job.clone())
            })?;
        tracing::info!(job_id = %created.id, title = %created.title, "job created");
        Ok(created)
    }

    pub async fn update_status(&self, id: Uuid, status: JobStatus) -> Result<Job> {
        let job = self.store.mutate(StoreEvent::JobChanged(id), |state| {
            let job = state
                .job_mut(id)
                .ok_or_else(|| Error::NotFound(format!("Job {} not found", id)))?;
            job.status = status;
            job.updated_at = time::now();
            Ok(job.clone())
        })?;
        tracing::info!(job_id = %id, status = status.label(), "job status updated");
        Ok(job)
    }

    pub async fn get(&self, id: Uuid) -> Result<Job> {
        self.store.read(|state| state.job(id).cloned())?
            .ok_or_else(|| Error::NotFound(format!("Job {} not found", id)))
    }

    pub async fn list(&self) -> Result<Vec<JobSummary>> {
        self.store.read(|state| {
            state
                .jobs
                .iter()
                .map(|job| JobSummary::from_job(job, state.candidate_count(job.id)))
                .collect()
        })
    }

    pub async fn candidate_count(&self, id: Uuid) -> Result<usize> {
        self.store.read(|state| state.candidate_count(id))
    }
}
