use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::dto::candidate_dto::SubmitScreeningPayload;
use crate::error::{Error, Result};
use crate::models::audit_log::{AuditEvent, AuditEventType};
use crate::models::candidate::{Candidate, Stage, VideoScreening};
use crate::store::{Store, StoreEvent};
use crate::utils::time;
use crate::utils::validation::validate;

#[derive(Clone)]
pub struct CandidateService {
    store: Arc<Store>,
    upload_delay: Duration,
}

impl CandidateService {
    pub fn new(store: Arc<Store>, upload_delay: Duration) -> Self {
        Self {
            store,
            upload_delay,
        }
    }

    /// Moves a candidate to `stage` and records exactly one audit event.
    /// Any stage may follow any other; there are no legality rules.
    pub async fn update_stage(&self, id: Uuid, stage: Stage, actor: &str) -> Result<Candidate> {
        let candidate = self.apply_stage(
            id,
            stage,
            format!("Stage changed to {}", stage.label()),
            actor,
            false,
        )?;
        tracing::info!(candidate_id = %id, stage = stage.label(), actor, "stage updated");
        Ok(candidate)
    }

    pub async fn shortlist(&self, id: Uuid, actor: &str) -> Result<Candidate> {
        self.apply_stage(
            id,
            Stage::Shortlisted,
            "Shortlisted by recruiter".to_string(),
            actor,
            true,
        )
    }

    pub async fn reject(&self, id: Uuid, actor: &str) -> Result<Candidate> {
        self.apply_stage(
            id,
            Stage::Rejected,
            "Rejected by recruiter".to_string(),
            actor,
            false,
        )
    }

    pub async fn get(&self, id: Uuid) -> Result<Candidate> {
        self.store.read(|state| state.candidate(id).cloned())?
            .ok_or_else(|| Error::NotFound(format!("Candidate {} not found", id)))
    }

    pub async fn list(&self) -> Result<Vec<Candidate>> {
        self.store.read(|state| state.candidates.clone())
    }

    pub async fn for_job(&self, job_id: Uuid) -> Result<Vec<Candidate>> {
        self.store
            .read(|state| state.candidates_for_job(job_id).cloned().collect())
    }

    pub async fn stage_counts(&self, job_id: Option<Uuid>) -> Result<HashMap<Stage, usize>> {
        self.store.read(|state| state.stage_counts(job_id))
    }

    /// Attaches a video screening and records one `screening_submitted`
    /// audit event. The delay stands in for the upload.
    pub async fn submit_screening(
        &self,
        id: Uuid,
        payload: SubmitScreeningPayload,
        actor: &str,
    ) -> Result<Candidate> {
        validate(&payload)?;
        tokio::time::sleep(self.upload_delay).await;

        self.store.mutate(StoreEvent::CandidateChanged(id), |state| {
            let candidate = state
                .candidate_mut(id)
                .ok_or_else(|| Error::NotFound(format!("Candidate {} not found", id)))?;
            candidate.video_screening = Some(VideoScreening {
                video_url: payload.video_url,
                duration_seconds: payload.duration_seconds,
                transcript: payload.transcript,
                submitted_at: time::now(),
            });
            candidate.audit_log.push(AuditEvent::new(
                AuditEventType::ScreeningSubmitted,
                "Video screening submitted",
                actor,
            ));
            candidate.updated_at = time::now();
            Ok(candidate.clone())
        })
    }

    pub async fn add_note(&self, id: Uuid, note: &str, actor: &str) -> Result<Candidate> {
        if note.trim().is_empty() {
            return Err(Error::BadRequest("Note cannot be empty".to_string()));
        }
        self.store.mutate(StoreEvent::CandidateChanged(id), |state| {
            let candidate = state
                .candidate_mut(id)
                .ok_or_else(|| Error::NotFound(format!("Candidate {} not found", id)))?;
            candidate.audit_log.push(AuditEvent::new(
                AuditEventType::NoteAdded,
                note.trim(),
                actor,
            ));
            candidate.updated_at = time::now();
            Ok(candidate.clone())
        })
    }

    fn apply_stage(
        &self,
        id: Uuid,
        stage: Stage,
        description: String,
        actor: &str,
        mark_shortlisted: bool,
    ) -> Result<Candidate> {
        self.store.mutate(StoreEvent::CandidateChanged(id), |state| {
            let candidate = state
                .candidate_mut(id)
                .ok_or_else(|| Error::NotFound(format!("Candidate {} not found", id)))?;
            candidate.stage = stage;
            if mark_shortlisted {
                candidate.is_shortlisted = true;
            }
            candidate.audit_log.push(AuditEvent::new(
                AuditEventType::StageChange,
                description,
                actor,
            ));
            candidate.updated_at = time::now();
            Ok(candidate.clone())
        })
    }
}
