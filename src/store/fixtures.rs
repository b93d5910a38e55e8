use chrono::Duration;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::audit_log::{AuditEvent, AuditEventType};
use crate::models::candidate::{AiEvaluation, Candidate, Stage, VideoScreening};
use crate::models::chat::ChatMessage;
use crate::models::interview::{InterviewType, ScheduledInterview};
use crate::models::job::{Job, JobStatus, RubricCriterion};
use crate::models::settings::Settings;
use crate::store::state::StoreState;
use crate::utils::time;

/// Builds the mock dataset every fresh store starts from. A snapshot, when
/// present, is overlaid on top of this.
pub fn seed() -> StoreState {
    let backend = job(
        "Senior Backend Engineer",
        "Engineering",
        "Berlin (hybrid)",
        JobStatus::Open,
        Some((75_000, 95_000, "EUR")),
        vec![
            RubricCriterion::new(
                "System design",
                "Designs services that hold up under growth and failure",
                30,
                10,
            ),
            RubricCriterion::new(
                "Code quality",
                "Writes maintainable, well-tested code",
                40,
                10,
            ),
            RubricCriterion::new(
                "Communication",
                "Explains trade-offs clearly to peers and stakeholders",
                30,
                10,
            ),
        ],
    );
    let designer = job(
        "Product Designer",
        "Design",
        "Remote (EU)",
        JobStatus::Open,
        Some((58_000, 72_000, "EUR")),
        vec![],
    );
    let manager = job(
        "Engineering Manager",
        "Engineering",
        "Berlin",
        JobStatus::Draft,
        None,
        vec![],
    );

    let mut candidates = vec![
        candidate(backend.id, "Amira Haddad", "amira.haddad@example.com", Stage::Applied, 92),
        candidate(backend.id, "Jonas Weber", "jonas.weber@example.com", Stage::Applied, 88),
        candidate(backend.id, "Priya Nair", "priya.nair@example.com", Stage::Applied, 85),
        candidate(backend.id, "Tomas Silva", "tomas.silva@example.com", Stage::Applied, 78),
        candidate(backend.id, "Lena Fischer", "lena.fischer@example.com", Stage::Applied, 71),
        candidate(backend.id, "Marcus Chen", "marcus.chen@example.com", Stage::Interview, 81),
        candidate(backend.id, "Sofia Rossi", "sofia.rossi@example.com", Stage::Screening, 74),
        candidate(backend.id, "David Okafor", "david.okafor@example.com", Stage::New, 64),
        candidate(designer.id, "Emma Laurent", "emma.laurent@example.com", Stage::Applied, 89),
        candidate(designer.id, "Yuki Tanaka", "yuki.tanaka@example.com", Stage::Applied, 83),
        candidate(designer.id, "Olivia Brown", "olivia.brown@example.com", Stage::Shortlisted, 91),
    ];

    candidates[0].ai_evaluation = Some(AiEvaluation {
        rating: 9,
        summary: "Strong distributed-systems background with production Rust and Go.".to_string(),
        strengths: vec![
            "8 years building payment infrastructure".to_string(),
            "Led a migration off a monolith with zero downtime".to_string(),
        ],
        concerns: vec!["No prior experience with our compliance domain".to_string()],
    });
    candidates[2].ai_evaluation = Some(AiEvaluation {
        rating: 8,
        summary: "Solid API design experience, strong testing culture.".to_string(),
        strengths: vec!["Maintains a widely used open-source HTTP client".to_string()],
        concerns: vec!["Notice period of three months".to_string()],
    });
    candidates[6].video_screening = Some(VideoScreening {
        video_url: "https://cdn.talentsage.example/screenings/sofia-rossi.mp4".to_string(),
        duration_seconds: Some(184),
        transcript: Some(
            "I spent the last four years on a small platform team owning the deploy pipeline..."
                .to_string(),
        ),
        submitted_at: time::now() - Duration::days(2),
    });
    candidates[10].is_shortlisted = true;

    let interview = ScheduledInterview {
        id: Uuid::new_v4(),
        candidate_id: candidates[5].id,
        job_id: backend.id,
        scheduled_at: time::now() + Duration::days(3),
        duration_minutes: 60,
        interview_type: InterviewType::Video,
        interviewers: vec!["Sarah Mitchell".to_string(), "Deepak Rao".to_string()],
        notes: Some("Focus on the take-home discussion".to_string()),
    };

    let welcome = ChatMessage::assistant(
        "Hi! I'm the TalentSage assistant. Ask me to shortlist candidates, \
         regenerate a rubric, or summarize your pipeline.",
    );

    StoreState {
        jobs: vec![backend, designer, manager],
        candidates,
        scheduled_interviews: vec![interview],
        chat_messages: vec![welcome],
        settings: Settings::default(),
    }
}

fn job(
    title: &str,
    department: &str,
    location: &str,
    status: JobStatus,
    salary: Option<(i64, i64, &str)>,
    rubric: Vec<RubricCriterion>,
) -> Job {
    let now = time::now();
    Job {
        id: Uuid::new_v4(),
        title: title.to_string(),
        department: department.to_string(),
        location: location.to_string(),
        status,
        salary_from: salary.map(|(from, _, _)| Decimal::from(from)),
        salary_to: salary.map(|(_, to, _)| Decimal::from(to)),
        currency: salary.map(|(_, _, cur)| cur.to_string()),
        rubric,
        created_at: now,
        updated_at: now,
    }
}

fn candidate(job_id: Uuid, name: &str, email: &str, stage: Stage, score: i32) -> Candidate {
    let now = time::now();
    Candidate {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
        job_id,
        stage,
        is_shortlisted: false,
        score,
        ai_evaluation: None,
        video_screening: None,
        audit_log: vec![AuditEvent::new(
            AuditEventType::Created,
            "Application received",
            "system",
        )],
        created_at: now,
        updated_at: now,
    }
}
