use std::sync::Arc;
use std::time::Duration;

use rand::seq::SliceRandom;

use crate::error::{Error, Result};
use crate::models::candidate::Stage;
use crate::models::chat::{ChatAction, ChatMessage};
use crate::models::job::Job;
use crate::services::ai_service::AiService;
use crate::speech::SpeechCapability;
use crate::store::{Store, StoreEvent};

/// What the user asked for. Matching is an ordered rule table over the
/// lowercased input, not language understanding; there is no context
/// carry-over between turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    ShortlistTop,
    GenerateRubric,
    ListInterviews,
    PipelineSummary,
    Help,
    Greeting,
}

struct Rule {
    intent: Intent,
    all_of: &'static [&'static str],
    any_of: &'static [&'static str],
}

// First matching rule wins; the greeting rule goes last because its
// keywords are short enough to appear inside ordinary words.
const RULES: &[Rule] = &[
    Rule {
        intent: Intent::ShortlistTop,
        all_of: &["shortlist"],
        any_of: &["candidate", "top"],
    },
    Rule {
        intent: Intent::GenerateRubric,
        all_of: &[],
        any_of: &["rubric", "criteria"],
    },
    Rule {
        intent: Intent::ListInterviews,
        all_of: &[],
        any_of: &["interview"],
    },
    Rule {
        intent: Intent::PipelineSummary,
        all_of: &[],
        any_of: &["pipeline", "summary", "how many", "overview"],
    },
    Rule {
        intent: Intent::Help,
        all_of: &[],
        any_of: &["help", "what can you do"],
    },
    Rule {
        intent: Intent::Greeting,
        all_of: &[],
        any_of: &["hello", "hi", "hey", "good morning"],
    },
];

pub fn match_intent(input: &str) -> Option<Intent> {
    let input = input.to_lowercase();
    RULES
        .iter()
        .find(|rule| {
            rule.all_of.iter().all(|kw| input.contains(kw))
                && (rule.any_of.is_empty() || rule.any_of.iter().any(|kw| input.contains(kw)))
        })
        .map(|rule| rule.intent)
}

const GREETINGS: &[&str] = &[
    "Hello! Ask me to shortlist candidates, regenerate a rubric, or summarize your pipeline.",
    "Hi there! I can shortlist top candidates, rebuild a job's rubric, or give you a pipeline summary.",
    "Hey! Try \"shortlist the top candidates\" or \"show me the pipeline\".",
];

const HELP: &str = "I can do a few things for you:\n\
    - \"shortlist the top candidates for <job>\" moves the highest-scoring applied candidates forward\n\
    - \"generate a rubric for <job>\" rebuilds that job's evaluation criteria\n\
    - \"show the pipeline\" summarizes candidates per stage\n\
    - \"list interviews\" shows what's on the calendar";

const FALLBACK: &str = "I didn't catch that. Say \"help\" to see what I can do.";

#[derive(Clone)]
pub struct AssistantService {
    store: Arc<Store>,
    ai: AiService,
    speech: Arc<dyn SpeechCapability>,
    thinking_delay: Duration,
}

impl AssistantService {
    pub fn new(
        store: Arc<Store>,
        ai: AiService,
        speech: Arc<dyn SpeechCapability>,
        thinking_delay: Duration,
    ) -> Self {
        Self {
            store,
            ai,
            speech,
            thinking_delay,
        }
    }

    pub async fn transcript(&self) -> Result<Vec<ChatMessage>> {
        self.store.read(|state| state.chat_messages.clone())
    }

    /// Appends the user turn, dispatches the matched intent, and appends
    /// exactly one assistant turn. The delay stands in for "thinking".
    pub async fn send(&self, text: &str) -> Result<ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::BadRequest("Message cannot be empty".to_string()));
        }

        self.append(ChatMessage::user(text))?;
        tokio::time::sleep(self.thinking_delay).await;

        let (content, actions) = match match_intent(text) {
            Some(Intent::ShortlistTop) => self.shortlist_top(text).await?,
            Some(Intent::GenerateRubric) => self.generate_rubric(text).await?,
            Some(Intent::ListInterviews) => (self.list_interviews()?, None),
            Some(Intent::PipelineSummary) => (self.pipeline_summary()?, None),
            Some(Intent::Help) => (HELP.to_string(), None),
            Some(Intent::Greeting) => (pick(GREETINGS), None),
            None => (FALLBACK.to_string(), None),
        };

        if self.store.settings()?.voice_replies {
            if let Err(e) = self.speech.speak(&content) {
                tracing::warn!(error = %e, "voice reply skipped");
            }
        }

        let reply = match actions {
            Some(actions) => ChatMessage::assistant_with_actions(content, actions),
            None => ChatMessage::assistant(content),
        };
        self.append(reply.clone())?;
        Ok(reply)
    }

    /// Voice entry point. A missing speech capability is reported as a
    /// plain assistant message, never as a hard failure of the transcript.
    pub async fn send_voice(&self) -> Result<ChatMessage> {
        match self.speech.transcribe() {
            Ok(text) => self.send(&text).await,
            Err(e) => {
                let reply =
                    ChatMessage::assistant(format!("Voice input is not available ({}).", e));
                self.append(reply.clone())?;
                Ok(reply)
            }
        }
    }

    fn append(&self, message: ChatMessage) -> Result<()> {
        self.store
            .mutate(StoreEvent::ChatAppended(message.id), |state| {
                state.chat_messages.push(message);
                Ok(())
            })
    }

    async fn shortlist_top(&self, text: &str) -> Result<(String, Option<Vec<ChatAction>>)> {
        let job = match self.resolve_job(text, true)? {
            Some(job) => job,
            None => {
                return Ok((
                    "There are no applied candidates to shortlist right now.".to_string(),
                    None,
                ))
            }
        };

        let shortlisted = self.ai.shortlist_top(job.id).await?;
        if shortlisted.is_empty() {
            return Ok((
                format!("No candidates are in the applied stage for {}.", job.title),
                None,
            ));
        }

        let names: Vec<String> = shortlisted
            .iter()
            .map(|c| format!("{} (score {})", c.name, c.score))
            .collect();
        let content = format!(
            "Shortlisted the top {} for {}: {}.",
            shortlisted.len(),
            job.title,
            names.join(", ")
        );
        let action = ChatAction::ShortlistedCandidates {
            job_id: job.id,
            candidate_ids: shortlisted.iter().map(|c| c.id).collect(),
        };
        Ok((content, Some(vec![action])))
    }

    async fn generate_rubric(&self, text: &str) -> Result<(String, Option<Vec<ChatAction>>)> {
        let job = match self.resolve_job(text, false)? {
            Some(job) => job,
            None => {
                return Ok((
                    "Tell me which job to build a rubric for, e.g. \
                     \"generate a rubric for Product Designer\"."
                        .to_string(),
                    None,
                ))
            }
        };

        let job = self.ai.generate_rubric(job.id).await?;
        let content = format!(
            "Rebuilt the rubric for {}: {} criteria, weights totaling {}.",
            job.title,
            job.rubric.len(),
            job.rubric_weight_total()
        );
        Ok((
            content,
            Some(vec![ChatAction::RubricRegenerated { job_id: job.id }]),
        ))
    }

    fn list_interviews(&self) -> Result<String> {
        self.store.read(|state| {
            let mut interviews = state.scheduled_interviews.clone();
            interviews.sort_by_key(|i| i.scheduled_at);
            if interviews.is_empty() {
                return "Nothing is on the interview calendar.".to_string();
            }
            let lines: Vec<String> = interviews
                .iter()
                .map(|i| {
                    let who = state
                        .candidate(i.candidate_id)
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| "Unknown candidate".to_string());
                    format!(
                        "- {} with {} on {} ({} min)",
                        i.interview_type.label(),
                        who,
                        i.scheduled_at.format("%Y-%m-%d %H:%M UTC"),
                        i.duration_minutes
                    )
                })
                .collect();
            format!("Upcoming interviews:\n{}", lines.join("\n"))
        })
    }

    fn pipeline_summary(&self) -> Result<String> {
        self.store.read(|state| {
            let counts = state.stage_counts(None);
            let lines: Vec<String> = Stage::ALL
                .iter()
                .filter_map(|stage| {
                    counts
                        .get(stage)
                        .filter(|&&n| n > 0)
                        .map(|n| format!("- {}: {}", stage.label(), n))
                })
                .collect();
            if lines.is_empty() {
                "The pipeline is empty.".to_string()
            } else {
                format!(
                    "Across {} jobs you have {} candidates:\n{}",
                    state.jobs.len(),
                    state.candidates.len(),
                    lines.join("\n")
                )
            }
        })
    }

    /// Picks the job a request refers to: a job whose title appears in the
    /// input wins, otherwise (when asked to) the job with the most applied
    /// candidates.
    fn resolve_job(&self, text: &str, fall_back_to_busiest: bool) -> Result<Option<Job>> {
        let text = text.to_lowercase();
        self.store.read(|state| {
            if let Some(job) = state
                .jobs
                .iter()
                .find(|j| text.contains(&j.title.to_lowercase()))
            {
                return Some(job.clone());
            }
            if !fall_back_to_busiest {
                return None;
            }
            state
                .jobs
                .iter()
                .map(|job| {
                    let applied = state
                        .candidates_for_job(job.id)
                        .filter(|c| c.stage == Stage::Applied)
                        .count();
                    (job, applied)
                })
                .filter(|(_, applied)| *applied > 0)
                .max_by_key(|(_, applied)| *applied)
                .map(|(job, _)| job.clone())
        })
    }
}

fn pick(options: &[&str]) -> String {
    options
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(FALLBACK)
        .to_string()
}
