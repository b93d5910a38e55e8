use std::collections::HashMap;
use uuid::Uuid;

use crate::models::candidate::{Candidate, Stage};
use crate::models::chat::ChatMessage;
use crate::models::interview::ScheduledInterview;
use crate::models::job::Job;
use crate::models::settings::Settings;

/// The flat entity tables. One instance of this is owned by the [`Store`]
/// and every command mutates it in place under the store's write lock.
///
/// [`Store`]: crate::store::Store
#[derive(Debug, Clone)]
pub struct StoreState {
    pub jobs: Vec<Job>,
    pub candidates: Vec<Candidate>,
    pub scheduled_interviews: Vec<ScheduledInterview>,
    pub chat_messages: Vec<ChatMessage>,
    pub settings: Settings,
}

impl StoreState {
    pub fn empty() -> Self {
        Self {
            jobs: Vec::new(),
            candidates: Vec::new(),
            scheduled_interviews: Vec::new(),
            chat_messages: Vec::new(),
            settings: Settings::default(),
        }
    }

    pub fn job(&self, id: Uuid) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn job_mut(&mut self, id: Uuid) -> Option<&mut Job> {
        self.jobs.iter_mut().find(|j| j.id == id)
    }

    pub fn candidate(&self, id: Uuid) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn candidate_mut(&mut self, id: Uuid) -> Option<&mut Candidate> {
        self.candidates.iter_mut().find(|c| c.id == id)
    }

    pub fn candidates_for_job(&self, job_id: Uuid) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter().filter(move |c| c.job_id == job_id)
    }

    pub fn candidate_count(&self, job_id: Uuid) -> usize {
        self.candidates_for_job(job_id).count()
    }

    pub fn interview(&self, id: Uuid) -> Option<&ScheduledInterview> {
        self.scheduled_interviews.iter().find(|i| i.id == id)
    }

    /// Per-stage candidate counts, over one job or the whole pipeline.
    pub fn stage_counts(&self, job_id: Option<Uuid>) -> HashMap<Stage, usize> {
        let mut counts = HashMap::new();
        for candidate in &self.candidates {
            if job_id.is_some_and(|id| candidate.job_id != id) {
                continue;
            }
            *counts.entry(candidate.stage).or_insert(0) += 1;
        }
        counts
    }
}
