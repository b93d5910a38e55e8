pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod speech;
pub mod store;
pub mod utils;

use std::sync::Arc;
use std::time::Duration;

use crate::services::{
    ai_service::AiService, assistant_service::AssistantService,
    candidate_service::CandidateService, interview_service::InterviewService,
    job_service::JobService,
};
use crate::speech::{NoopSpeech, SpeechCapability};
use crate::store::Store;

/// Installs the global tracing subscriber. Embedding applications call
/// this once at startup; repeated calls are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub job_service: JobService,
    pub candidate_service: CandidateService,
    pub interview_service: InterviewService,
    pub ai_service: AiService,
    pub assistant_service: AssistantService,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_speech(Arc::new(NoopSpeech))
    }

    pub fn with_speech(speech: Arc<dyn SpeechCapability>) -> Self {
        let config = crate::config::get_config();
        let store = Arc::new(Store::new(config.snapshot_path.clone()));

        let job_service = JobService::new(store.clone());
        let candidate_service = CandidateService::new(
            store.clone(),
            Duration::from_millis(config.screening_upload_delay_ms),
        );
        let interview_service = InterviewService::new(store.clone());
        let ai_service = AiService::new(store.clone(), config.shortlist_size);
        let assistant_service = AssistantService::new(
            store.clone(),
            ai_service.clone(),
            speech,
            Duration::from_millis(config.assistant_delay_ms),
        );

        Self {
            store,
            job_service,
            candidate_service,
            interview_service,
            ai_service,
            assistant_service,
        }
    }
}
