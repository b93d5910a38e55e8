use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub notifications_enabled: bool,
    pub voice_replies: bool,
    pub auto_shortlist: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            voice_replies: false,
            auto_shortlist: false,
        }
    }
}
