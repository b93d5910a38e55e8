use std::sync::Arc;

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::audit_log::{AuditEvent, AuditEventType};
use crate::models::candidate::{Candidate, Stage};
use crate::models::job::{Job, RubricCriterion};
use crate::store::{Store, StoreEvent};
use crate::utils::time;

/// Actor label recorded on audit events produced by automated actions.
pub const AI_ACTOR: &str = "TalentSage AI";

#[derive(Clone)]
pub struct AiService {
    store: Arc<Store>,
    shortlist_size: usize,
}

impl AiService {
    pub fn new(store: Arc<Store>, shortlist_size: usize) -> Self {
        Self {
            store,
            shortlist_size,
        }
    }

    /// Fixed top-k selection: takes the job's `applied` candidates in
    /// descending score order, at most `shortlist_size` of them, and moves
    /// each to `shortlisted`. Candidates of other jobs and other stages
    /// are never touched.
    pub async fn shortlist_top(&self, job_id: Uuid) -> Result<Vec<Candidate>> {
        let shortlisted = self
            .store
            .mutate(StoreEvent::JobChanged(job_id), |state| {
                if state.job(job_id).is_none() {
                    return Err(Error::NotFound(format!("Job {} not found", job_id)));
                }

                let mut applied: Vec<(Uuid, i32)> = state
                    .candidates_for_job(job_id)
                    .filter(|c| c.stage == Stage::Applied)
                    .map(|c| (c.id, c.score))
                    .collect();
                applied.sort_by(|a, b| b.1.cmp(&a.1));
                applied.truncate(self.shortlist_size);

                let mut shortlisted = Vec::with_capacity(applied.len());
                for (id, score) in applied {
                    // ids were just read from the table, the lookup cannot miss
                    if let Some(candidate) = state.candidate_mut(id) {
                        candidate.stage = Stage::Shortlisted;
                        candidate.is_shortlisted = true;
                        candidate.audit_log.push(AuditEvent::new(
                            AuditEventType::StageChange,
                            format!("Shortlisted by TalentSage AI (score {})", score),
                            AI_ACTOR,
                        ));
                        candidate.updated_at = time::now();
                        shortlisted.push(candidate.clone());
                    }
                }
                Ok(shortlisted)
            })?;

        tracing::info!(
            job_id = %job_id,
            count = shortlisted.len(),
            "AI shortlisting applied"
        );
        Ok(shortlisted)
    }

    /// Replaces the job's rubric wholesale with the template matching its
    /// title. The previous rubric is not kept anywhere.
    pub async fn generate_rubric(&self, job_id: Uuid) -> Result<Job> {
        let job = self.store.mutate(StoreEvent::JobChanged(job_id), |state| {
            let job = state
                .job_mut(job_id)
                .ok_or_else(|| Error::NotFound(format!("Job {} not found", job_id)))?;
            job.rubric = rubric_template_for(&job.title);
            job.updated_at = time::now();
            Ok(job.clone())
        })?;
        tracing::info!(
            job_id = %job_id,
            criteria = job.rubric.len(),
            weight_total = job.rubric_weight_total(),
            "rubric regenerated"
        );
        Ok(job)
    }
}

/// Template selection is a substring match on the lowercased title:
/// engineering roles, design roles, else the generic set.
fn rubric_template_for(title: &str) -> Vec<RubricCriterion> {
    let title = title.to_lowercase();
    if title.contains("engineer") || title.contains("developer") {
        engineering_template()
    } else if title.contains("designer") {
        design_template()
    } else {
        generic_template()
    }
}

fn engineering_template() -> Vec<RubricCriterion> {
    vec![
        RubricCriterion::new(
            "Technical depth",
            "Demonstrates mastery of the core technologies the role relies on",
            30,
            10,
        ),
        RubricCriterion::new(
            "System design",
            "Breaks down ambiguous problems into sound, scalable designs",
            25,
            10,
        ),
        RubricCriterion::new(
            "Code quality",
            "Writes correct, readable, well-tested code",
            25,
            10,
        ),
        RubricCriterion::new(
            "Collaboration",
            "Communicates trade-offs and works well across teams",
            20,
            10,
        ),
    ]
}

fn design_template() -> Vec<RubricCriterion> {
    vec![
        RubricCriterion::new(
            "Portfolio quality",
            "Shipped work shows strong craft and product thinking",
            35,
            10,
        ),
        RubricCriterion::new(
            "User research",
            "Grounds decisions in evidence about real users",
            25,
            10,
        ),
        RubricCriterion::new(
            "Visual & interaction design",
            "Produces polished, coherent interfaces",
            25,
            10,
        ),
        RubricCriterion::new(
            "Collaboration",
            "Partners effectively with engineering and product",
            15,
            10,
        ),
    ]
}

fn generic_template() -> Vec<RubricCriterion> {
    vec![
        RubricCriterion::new(
            "Role expertise",
            "Brings the skills and experience the role calls for",
            40,
            10,
        ),
        RubricCriterion::new(
            "Problem solving",
            "Approaches unfamiliar problems in a structured way",
            30,
            10,
        ),
        RubricCriterion::new(
            "Culture add",
            "Raises the bar for how the team works",
            30,
            10,
        ),
    ]
}
