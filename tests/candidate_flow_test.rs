use std::sync::Arc;
use std::time::Duration;

use talentsage::dto::candidate_dto::SubmitScreeningPayload;
use talentsage::error::Error;
use talentsage::models::audit_log::AuditEventType;
use talentsage::models::candidate::{Candidate, Stage};
use talentsage::services::candidate_service::CandidateService;
use talentsage::store::Store;
use uuid::Uuid;

fn service() -> (Arc<Store>, CandidateService) {
    let store = Arc::new(Store::in_memory());
    let service = CandidateService::new(store.clone(), Duration::ZERO);
    (store, service)
}

fn applied_candidate(store: &Store) -> Candidate {
    store
        .read(|s| {
            s.candidates
                .iter()
                .find(|c| c.stage == Stage::Applied)
                .cloned()
        })
        .expect("read state")
        .expect("seed data contains an applied candidate")
}

#[tokio::test]
async fn stage_change_appends_exactly_one_audit_event() {
    let (store, service) = service();
    let before = applied_candidate(&store);
    let n = before.audit_log.len();

    let updated = service
        .update_stage(before.id, Stage::Shortlisted, "Test User")
        .await
        .expect("update stage");

    assert_eq!(updated.stage, Stage::Shortlisted);
    assert_eq!(updated.audit_log.len(), n + 1);
    let last = updated.audit_log.last().expect("audit entry");
    assert_eq!(last.event_type, AuditEventType::StageChange);
    assert!(last.description.contains("Shortlisted"));
    assert_eq!(last.actor, "Test User");
}

#[tokio::test]
async fn any_stage_may_follow_any_other() {
    let (store, service) = service();
    let candidate = applied_candidate(&store);

    // hired straight from applied, then back again: no legality rules
    let hired = service
        .update_stage(candidate.id, Stage::Hired, "Recruiter")
        .await
        .expect("move to hired");
    assert_eq!(hired.stage, Stage::Hired);

    let reopened = service
        .update_stage(candidate.id, Stage::Applied, "Recruiter")
        .await
        .expect("move back to applied");
    assert_eq!(reopened.stage, Stage::Applied);
    assert_eq!(reopened.audit_log.len(), candidate.audit_log.len() + 2);
}

#[tokio::test]
async fn shortlist_helper_sets_flag_and_fixed_description() {
    let (store, service) = service();
    let candidate = applied_candidate(&store);

    let updated = service
        .shortlist(candidate.id, "Recruiter")
        .await
        .expect("shortlist");

    assert_eq!(updated.stage, Stage::Shortlisted);
    assert!(updated.is_shortlisted);
    let last = updated.audit_log.last().expect("audit entry");
    assert_eq!(last.description, "Shortlisted by recruiter");
}

#[tokio::test]
async fn reject_helper_does_not_touch_shortlist_flag() {
    let (store, service) = service();
    let candidate = applied_candidate(&store);

    let updated = service
        .reject(candidate.id, "Recruiter")
        .await
        .expect("reject");

    assert_eq!(updated.stage, Stage::Rejected);
    assert!(!updated.is_shortlisted);
    let last = updated.audit_log.last().expect("audit entry");
    assert_eq!(last.description, "Rejected by recruiter");
}

#[tokio::test]
async fn missing_candidate_is_not_found() {
    let (_store, service) = service();
    let err = service
        .update_stage(Uuid::new_v4(), Stage::Hired, "Recruiter")
        .await
        .expect_err("unknown id must fail");
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn screening_submission_appends_one_audit_event() {
    let (store, service) = service();
    let candidate = applied_candidate(&store);
    let n = candidate.audit_log.len();

    let updated = service
        .submit_screening(
            candidate.id,
            SubmitScreeningPayload {
                video_url: "https://cdn.example.com/screening.mp4".to_string(),
                duration_seconds: Some(120),
                transcript: None,
            },
            "Test User",
        )
        .await
        .expect("submit screening");

    assert!(updated.video_screening.is_some());
    assert_eq!(updated.audit_log.len(), n + 1);
    let last = updated.audit_log.last().expect("audit entry");
    assert_eq!(last.event_type, AuditEventType::ScreeningSubmitted);
}

#[tokio::test]
async fn screening_rejects_invalid_url() {
    let (store, service) = service();
    let candidate = applied_candidate(&store);

    let err = service
        .submit_screening(
            candidate.id,
            SubmitScreeningPayload {
                video_url: "not a url".to_string(),
                duration_seconds: None,
                transcript: None,
            },
            "Test User",
        )
        .await
        .expect_err("invalid url must fail");
    assert!(matches!(err, Error::Validation(_)));

    let unchanged = service.get(candidate.id).await.expect("candidate");
    assert!(unchanged.video_screening.is_none());
    assert_eq!(unchanged.audit_log.len(), candidate.audit_log.len());
}

#[tokio::test]
async fn note_is_recorded_in_audit_log() {
    let (store, service) = service();
    let candidate = applied_candidate(&store);

    let updated = service
        .add_note(candidate.id, "Asked for a later start date", "Recruiter")
        .await
        .expect("add note");

    let last = updated.audit_log.last().expect("audit entry");
    assert_eq!(last.event_type, AuditEventType::NoteAdded);
    assert_eq!(last.description, "Asked for a later start date");

    let err = service
        .add_note(candidate.id, "   ", "Recruiter")
        .await
        .expect_err("blank note must fail");
    assert!(matches!(err, Error::BadRequest(_)));
}
