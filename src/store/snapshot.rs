use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::candidate::Candidate;
use crate::models::chat::ChatMessage;
use crate::models::interview::ScheduledInterview;
use crate::models::job::Job;
use crate::models::settings::Settings;
use crate::store::state::StoreState;

/// On-disk layout: one JSON document holding the persisted tables.
/// There is no version field; a shape change is not migrated, the loader
/// simply falls back to the seeded fixtures.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub jobs: Option<Vec<Job>>,
    pub candidates: Option<Vec<Candidate>>,
    pub scheduled_interviews: Option<Vec<ScheduledInterview>>,
    pub chat_messages: Option<Vec<ChatMessage>>,
    pub settings: Option<Settings>,
}

impl Snapshot {
    /// Overlays the persisted tables onto `state`, leaving any table that
    /// is absent from the snapshot at its seeded value.
    pub fn apply(self, state: &mut StoreState) {
        if let Some(jobs) = self.jobs {
            state.jobs = jobs;
        }
        if let Some(candidates) = self.candidates {
            state.candidates = candidates;
        }
        if let Some(interviews) = self.scheduled_interviews {
            state.scheduled_interviews = interviews;
        }
        if let Some(messages) = self.chat_messages {
            state.chat_messages = messages;
        }
        if let Some(settings) = self.settings {
            state.settings = settings;
        }
    }
}

impl From<&StoreState> for Snapshot {
    fn from(state: &StoreState) -> Self {
        Self {
            jobs: Some(state.jobs.clone()),
            candidates: Some(state.candidates.clone()),
            scheduled_interviews: Some(state.scheduled_interviews.clone()),
            chat_messages: Some(state.chat_messages.clone()),
            settings: Some(state.settings.clone()),
        }
    }
}

pub fn load(path: &Path) -> Result<Option<Snapshot>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)?;
    let snapshot = serde_json::from_str(&raw)?;
    Ok(Some(snapshot))
}

pub fn save(path: &Path, state: &StoreState) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let snapshot = Snapshot::from(state);
    fs::write(path, serde_json::to_string_pretty(&snapshot)?)?;
    Ok(())
}
