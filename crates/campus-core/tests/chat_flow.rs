use campus_core::chat::{Author, ReplyOutcome};
use campus_core::portal::{AllowAll, DemoAuthGate, Role, mount_student_view};
use campus_core::{CampusError, ChatSession, IntentResolver, KnowledgeBase, SessionOptions, Topic};
use std::sync::Arc;
use std::time::Duration;

const LATENCY: Duration = Duration::from_millis(1000);
const GREETING: &str = "Hello! How can I help you today?";

fn mount() -> (ChatSession, Arc<KnowledgeBase>) {
    let knowledge = Arc::new(KnowledgeBase::builtin());
    let session = mount_student_view(
        &AllowAll,
        Arc::clone(&knowledge),
        Arc::new(IntentResolver::default()),
        SessionOptions {
            greeting: GREETING.to_string(),
            reply_latency: LATENCY,
        },
    )
    .expect("student view should mount");
    (session, knowledge)
}

#[tokio::test(start_paused = true)]
async fn test_two_exchanges_are_strictly_ordered() {
    let (session, knowledge) = mount();

    session.submit("a").unwrap().finished().await;
    session.submit("b").unwrap().finished().await;

    let log: Vec<(Author, String)> = session
        .snapshot()
        .messages
        .into_iter()
        .map(|m| (m.origin, m.text))
        .collect();
    let default_reply = knowledge.lookup(Topic::Default).body.clone();

    assert_eq!(
        log,
        vec![
            (Author::Assistant, GREETING.to_string()),
            (Author::User, "a".to_string()),
            (Author::Assistant, default_reply.clone()),
            (Author::User, "b".to_string()),
            (Author::Assistant, default_reply),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_attendance_scenario() {
    let (session, knowledge) = mount();
    let input = "What's my current attendance?";

    assert_eq!(IntentResolver::default().classify(input), Topic::Attendance);

    let outcome = session.submit(input).unwrap().finished().await;
    assert_eq!(outcome, ReplyOutcome::Delivered);

    let snapshot = session.snapshot();
    let reply = snapshot.last().unwrap();
    assert_eq!(reply.origin, Author::Assistant);
    assert_eq!(reply.text, knowledge.lookup(Topic::Attendance).body);
    assert!(reply.text.contains("Overall Attendance"));
}

#[tokio::test(start_paused = true)]
async fn test_rapid_fire_submits_are_serialized() {
    let (session, _) = mount();

    let first = session.submit("x").unwrap();
    for text in ["y", "z", "x"] {
        let err = session.submit(text).unwrap_err();
        assert!(err.is_rejected_submit());
    }
    assert!(session.snapshot().is_awaiting_reply);
    assert_eq!(session.snapshot().len(), 2);

    first.finished().await;

    let snapshot = session.snapshot();
    assert!(!snapshot.is_awaiting_reply);
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot.messages[1].text, "x");
}

#[tokio::test(start_paused = true)]
async fn test_teardown_while_awaiting_reply() {
    let (session, _) = mount();
    let handle = session.submit("exam today").unwrap();
    let before = session.snapshot().len();

    session.dispose();
    tokio::time::sleep(LATENCY * 2).await;

    assert_eq!(session.snapshot().len(), before);
    assert_eq!(handle.finished().await, ReplyOutcome::Cancelled);
}

#[tokio::test(start_paused = true)]
async fn test_student_view_requires_sign_in() {
    let gate = DemoAuthGate::new();
    let mount = || {
        mount_student_view(
            &gate,
            Arc::new(KnowledgeBase::builtin()),
            Arc::new(IntentResolver::default()),
            SessionOptions::default(),
        )
    };

    assert_eq!(
        mount().unwrap_err(),
        CampusError::Unauthorized {
            role: Role::Student
        }
    );

    gate.sign_in(Role::Student, "john@college.edu", "password").unwrap();
    let session = mount().unwrap();
    assert_eq!(session.snapshot().len(), 1);
}
