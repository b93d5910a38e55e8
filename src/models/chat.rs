use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::time;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<ChatAction>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

/// What the assistant actually did while answering, so the UI can link to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ChatAction {
    ShortlistedCandidates {
        job_id: Uuid,
        candidate_ids: Vec<Uuid>,
    },
    RubricRegenerated {
        job_id: Uuid,
    },
    Navigate {
        route: String,
    },
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::build(ChatRole::User, content, None)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::build(ChatRole::Assistant, content, None)
    }

    pub fn assistant_with_actions(content: impl Into<String>, actions: Vec<ChatAction>) -> Self {
        Self::build(ChatRole::Assistant, content, Some(actions))
    }

    fn build(role: ChatRole, content: impl Into<String>, actions: Option<Vec<ChatAction>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: time::now(),
            actions,
        }
    }
}
