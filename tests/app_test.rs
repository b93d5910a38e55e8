use std::env;
use std::fs;

use talentsage::AppState;
use uuid::Uuid;

#[tokio::test]
async fn app_state_wires_services_from_config() {
    let snapshot = env::temp_dir().join(format!("talentsage-app-{}.json", Uuid::new_v4()));
    env::set_var("TALENTSAGE_SNAPSHOT_PATH", &snapshot);
    env::set_var("TALENTSAGE_SHORTLIST_SIZE", "3");
    env::set_var("TALENTSAGE_ASSISTANT_DELAY_MS", "0");
    env::set_var("TALENTSAGE_UPLOAD_DELAY_MS", "0");

    talentsage::init_tracing();
    talentsage::config::init_config().expect("init config");
    let app = AppState::new();

    let jobs = app.job_service.list().await.expect("jobs");
    assert!(!jobs.is_empty());
    assert!(jobs.iter().any(|j| j.candidate_count > 0));

    let reply = app.assistant_service.send("help").await.expect("send");
    assert!(reply.content.contains("shortlist"));
    assert!(snapshot.exists(), "chat turn must be persisted");

    let _ = fs::remove_file(snapshot);
}
