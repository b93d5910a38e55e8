use std::sync::Arc;
use std::time::Duration;

use mockall::mock;
use talentsage::error::{Error, Result};
use talentsage::models::candidate::Stage;
use talentsage::models::chat::{ChatAction, ChatRole};
use talentsage::services::ai_service::AiService;
use talentsage::services::assistant_service::AssistantService;
use talentsage::speech::{NoopSpeech, SpeechCapability};
use talentsage::store::Store;

mock! {
    pub Speech {}

    impl SpeechCapability for Speech {
        fn speak(&self, text: &str) -> Result<()>;
        fn transcribe(&self) -> Result<String>;
    }
}

fn assistant_with(speech: Arc<dyn SpeechCapability>) -> (Arc<Store>, AssistantService) {
    let store = Arc::new(Store::in_memory());
    let ai = AiService::new(store.clone(), 3);
    let assistant = AssistantService::new(store.clone(), ai, speech, Duration::ZERO);
    (store, assistant)
}

fn assistant() -> (Arc<Store>, AssistantService) {
    assistant_with(Arc::new(NoopSpeech))
}

#[tokio::test]
async fn each_turn_appends_user_and_assistant_messages_in_order() {
    let (_store, assistant) = assistant();
    let before = assistant.transcript().await.expect("transcript").len();

    assistant.send("help").await.expect("send");

    let transcript = assistant.transcript().await.expect("transcript");
    assert_eq!(transcript.len(), before + 2);
    assert_eq!(transcript[before].role, ChatRole::User);
    assert_eq!(transcript[before].content, "help");
    assert_eq!(transcript[before + 1].role, ChatRole::Assistant);
    assert!(transcript[before + 1].content.contains("shortlist"));
}

#[tokio::test]
async fn unmatched_input_gets_the_fallback_reply() {
    let (_store, assistant) = assistant();
    let reply = assistant
        .send("what's the weather like")
        .await
        .expect("send");
    assert!(reply.content.contains("help"));
    assert!(reply.actions.is_none());
}

#[tokio::test]
async fn empty_message_is_rejected() {
    let (_store, assistant) = assistant();
    let err = assistant.send("   ").await.expect_err("blank must fail");
    assert!(matches!(err, Error::BadRequest(_)));
}

#[tokio::test]
async fn shortlist_command_moves_top_candidates() {
    let (store, assistant) = assistant();

    let reply = assistant
        .send("shortlist the top candidates for Senior Backend Engineer")
        .await
        .expect("send");

    assert!(reply.content.contains("Amira Haddad"));
    let actions = reply.actions.expect("actions recorded");
    match &actions[0] {
        ChatAction::ShortlistedCandidates { candidate_ids, .. } => {
            assert_eq!(candidate_ids.len(), 3)
        }
        other => panic!("unexpected action: {other:?}"),
    }

    let amira = store
        .read(|s| {
            s.candidates
                .iter()
                .find(|c| c.name == "Amira Haddad")
                .cloned()
        })
        .expect("read state")
        .expect("candidate");
    assert_eq!(amira.stage, Stage::Shortlisted);
}

#[tokio::test]
async fn shortlist_without_job_name_targets_busiest_job() {
    let (_store, assistant) = assistant();
    // backend has five applied candidates, designer has two
    let reply = assistant
        .send("shortlist the top candidates")
        .await
        .expect("send");
    assert!(reply.content.contains("Senior Backend Engineer"));
}

#[tokio::test]
async fn rubric_command_rebuilds_named_job() {
    let (store, assistant) = assistant();

    let reply = assistant
        .send("generate a rubric for Product Designer")
        .await
        .expect("send");

    assert!(reply.content.contains("Product Designer"));
    assert!(matches!(
        reply.actions.expect("actions recorded")[0],
        ChatAction::RubricRegenerated { .. }
    ));

    let designer = store
        .read(|s| s.jobs.iter().find(|j| j.title == "Product Designer").cloned())
        .expect("read state")
        .expect("job");
    assert!(!designer.rubric.is_empty());
    assert!(designer.rubric.iter().all(|c| c.weight > 0 && c.max_score > 0));
}

#[tokio::test]
async fn pipeline_summary_reports_stage_counts() {
    let (_store, assistant) = assistant();
    let reply = assistant
        .send("how many candidates do we have")
        .await
        .expect("send");
    assert!(reply.content.contains("Applied"));
    assert!(reply.content.contains("candidates"));
}

#[tokio::test]
async fn voice_reply_goes_through_speech_when_enabled() {
    let mut speech = MockSpeech::new();
    speech.expect_speak().times(1).returning(|_| Ok(()));

    let (store, assistant) = assistant_with(Arc::new(speech));
    store
        .update_settings(|s| s.voice_replies = true)
        .expect("settings");

    assistant.send("hello").await.expect("send");
}

#[tokio::test]
async fn failed_speech_output_still_produces_a_reply() {
    let mut speech = MockSpeech::new();
    speech
        .expect_speak()
        .returning(|_| Err(Error::Speech("synthesis unavailable".to_string())));

    let (store, assistant) = assistant_with(Arc::new(speech));
    store
        .update_settings(|s| s.voice_replies = true)
        .expect("settings");

    let reply = assistant.send("hello").await.expect("send");
    assert_eq!(reply.role, ChatRole::Assistant);
}

#[tokio::test]
async fn voice_input_degrades_to_a_plain_error_message() {
    let (_store, assistant) = assistant();

    let reply = assistant.send_voice().await.expect("send_voice");
    assert_eq!(reply.role, ChatRole::Assistant);
    assert!(reply.content.contains("Voice input is not available"));
}

#[tokio::test]
async fn transcribed_voice_input_is_dispatched_like_text() {
    let mut speech = MockSpeech::new();
    speech
        .expect_transcribe()
        .returning(|| Ok("help".to_string()));

    let (_store, assistant) = assistant_with(Arc::new(speech));
    let reply = assistant.send_voice().await.expect("send_voice");
    assert!(reply.content.contains("shortlist"));
}
