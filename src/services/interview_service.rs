use std::sync::Arc;

use uuid::Uuid;

use crate::dto::interview_dto::ScheduleInterviewPayload;
use crate::error::{Error, Result};
use crate::models::audit_log::{AuditEvent, AuditEventType};
use crate::models::interview::ScheduledInterview;
use crate::store::{Store, StoreEvent};
use crate::utils::time;
use crate::utils::validation::validate;

#[derive(Clone)]
pub struct InterviewService {
    store: Arc<Store>,
}

impl InterviewService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Appends the interview and one matching audit event on the
    /// candidate. Double-booking is not checked.
    pub async fn schedule(
        &self,
        payload: ScheduleInterviewPayload,
        actor: &str,
    ) -> Result<ScheduledInterview> {
        validate(&payload)?;

        let id = Uuid::new_v4();
        let interview = self
            .store
            .mutate(StoreEvent::InterviewScheduled(id), |state| {
                let candidate = state
                    .candidate_mut(payload.candidate_id)
                    .ok_or_else(|| {
                        Error::NotFound(format!("Candidate {} not found", payload.candidate_id))
                    })?;
                candidate.audit_log.push(AuditEvent::new(
                    AuditEventType::InterviewScheduled,
                    format!(
                        "{} interview scheduled for {}",
                        payload.interview_type.label(),
                        time::to_rfc3339(payload.scheduled_at)
                    ),
                    actor,
                ));
                candidate.updated_at = time::now();

                let interview = ScheduledInterview {
                    id,
                    candidate_id: payload.candidate_id,
                    job_id: candidate.job_id,
                    scheduled_at: payload.scheduled_at,
                    duration_minutes: payload.duration_minutes,
                    interview_type: payload.interview_type,
                    interviewers: payload.interviewers,
                    notes: payload.notes,
                };
                state.scheduled_interviews.push(interview.clone());
                Ok(interview)
            })?;

        tracing::info!(
            interview_id = %interview.id,
            candidate_id = %interview.candidate_id,
            "interview scheduled"
        );
        Ok(interview)
    }

    /// Removes the interview wholesale and appends one cancellation audit
    /// event on the candidate. There is no soft-cancel state.
    pub async fn cancel(&self, id: Uuid, actor: &str) -> Result<()> {
        self.store.mutate(StoreEvent::InterviewCancelled(id), |state| {
            let position = state
                .scheduled_interviews
                .iter()
                .position(|i| i.id == id)
                .ok_or_else(|| Error::NotFound(format!("Interview {} not found", id)))?;
            let interview = state.scheduled_interviews.remove(position);

            if let Some(candidate) = state.candidate_mut(interview.candidate_id) {
                candidate.audit_log.push(AuditEvent::new(
                    AuditEventType::InterviewCancelled,
                    format!("{} interview cancelled", interview.interview_type.label()),
                    actor,
                ));
                candidate.updated_at = time::now();
            }
            Ok(())
        })?;
        tracing::info!(interview_id = %id, actor, "interview cancelled");
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<ScheduledInterview>> {
        self.store.read(|state| {
            let mut interviews = state.scheduled_interviews.clone();
            interviews.sort_by_key(|i| i.scheduled_at);
            interviews
        })
    }

    pub async fn for_candidate(&self, candidate_id: Uuid) -> Result<Vec<ScheduledInterview>> {
        self.store.read(|state| {
            let mut interviews: Vec<_> = state
                .scheduled_interviews
                .iter()
                .filter(|i| i.candidate_id == candidate_id)
                .cloned()
                .collect();
            interviews.sort_by_key(|i| i.scheduled_at);
            interviews
        })
    }
}
