use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::time;

/// Append-only; entries are never edited or removed once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub event_type: AuditEventType,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub actor: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventType {
    Created,
    StageChange,
    InterviewScheduled,
    InterviewCancelled,
    ScreeningSubmitted,
    NoteAdded,
}

impl AuditEvent {
    pub fn new(event_type: AuditEventType, description: impl Into<String>, actor: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type,
            description: description.into(),
            timestamp: time::now(),
            actor: actor.to_string(),
        }
    }
}
