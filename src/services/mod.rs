pub mod ai_service;
pub mod assistant_service;
pub mod candidate_service;
pub mod interview_service;
pub mod job_service;
