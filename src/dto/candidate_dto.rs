use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitScreeningPayload {
    #[validate(url)]
    pub video_url: String,
    pub duration_seconds: Option<u32>,
    pub transcript: Option<String>,
}
