use super::message::{Author, Message};
use super::status::{SessionSnapshot, SessionStatus};
use crate::config::AssistantConfig;
use crate::error::{CampusError, Result};
use crate::intent::IntentResolver;
use crate::knowledge::KnowledgeBase;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Per-session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Text of the synthetic first message.
    pub greeting: String,
    /// Simulated typing delay before a reply is appended.
    pub reply_latency: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::from(&AssistantConfig::default())
    }
}

impl From<&AssistantConfig> for SessionOptions {
    fn from(config: &AssistantConfig) -> Self {
        Self {
            greeting: config.greeting.clone(),
            reply_latency: config.reply_latency(),
        }
    }
}

/// How a scheduled reply ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// The assistant message was appended.
    Delivered,
    /// The session was disposed first; nothing was appended.
    Cancelled,
}

/// Handle to the reply scheduled by [`ChatSession::submit`].
///
/// Dropping the handle detaches from the reply; it does not cancel it.
#[derive(Debug)]
pub struct ReplyHandle {
    user_message_id: u64,
    task: JoinHandle<ReplyOutcome>,
}

impl ReplyHandle {
    /// Id of the user message this reply answers.
    pub fn user_message_id(&self) -> u64 {
        self.user_message_id
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits until the reply has been appended or cancelled.
    pub async fn finished(self) -> ReplyOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("[Chat] Reply task did not complete: {}", e);
                ReplyOutcome::Cancelled
            }
        }
    }
}

struct SessionState {
    log: Vec<Message>,
    status: SessionStatus,
    next_id: u64,
    pending: Option<CancellationToken>,
    disposed: bool,
}

impl SessionState {
    fn append(&mut self, origin: Author, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.log.push(Message::new(id, origin, text));
        id
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            messages: self.log.clone(),
            is_awaiting_reply: self.status == SessionStatus::AwaitingReply,
        }
    }
}

/// State shared between the session and its scheduled reply.
struct Shared {
    state: Mutex<SessionState>,
    updates: watch::Sender<SessionSnapshot>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, SessionState> {
        // Every critical section leaves the state consistent, so a poisoned
        // lock still holds a usable log.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // Called with the lock held so observers see updates in mutation order.
    fn publish(&self, state: &SessionState) {
        self.updates.send_replace(state.snapshot());
    }
}

/// One conversation with the campus assistant.
///
/// The session owns the message log and the `Idle` / `AwaitingReply` state
/// machine. `submit` is accepted only while idle, appends the user message
/// and schedules exactly one delayed reply; the next `submit` is accepted
/// only after that reply has been appended. This serialises every exchange
/// without the caller having to coordinate.
///
/// Replies are scheduled on the ambient Tokio runtime; outside one `submit`
/// is rejected with `NoRuntime`. Dropping the session disposes it.
pub struct ChatSession {
    id: String,
    shared: Arc<Shared>,
    knowledge: Arc<KnowledgeBase>,
    resolver: Arc<IntentResolver>,
    reply_latency: Duration,
}

impl ChatSession {
    /// Creates a session seeded with the greeting.
    pub fn new(
        knowledge: Arc<KnowledgeBase>,
        resolver: Arc<IntentResolver>,
        options: SessionOptions,
    ) -> Self {
        let mut state = SessionState {
            log: Vec::new(),
            status: SessionStatus::Idle,
            next_id: 1,
            pending: None,
            disposed: false,
        };
        state.append(Author::Assistant, options.greeting);

        let (updates, _) = watch::channel(state.snapshot());
        let id = Uuid::new_v4().to_string();
        tracing::info!("[Chat] Session {} started", id);

        Self {
            id,
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                updates,
            }),
            knowledge,
            resolver,
            reply_latency: options.reply_latency,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn status(&self) -> SessionStatus {
        self.shared.lock().status
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.lock().disposed
    }

    /// Current log and busy flag.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.shared.lock().snapshot()
    }

    /// Receives a fresh snapshot after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.shared.updates.subscribe()
    }

    /// Sends `text` and schedules the assistant's reply.
    ///
    /// The trimmed text is what gets logged.
    ///
    /// # Errors
    ///
    /// Rejections leave the session untouched:
    /// - `EmptyInput` if `text` is blank
    /// - `InvalidState` if a reply is still pending
    /// - `Disposed` after [`dispose`](Self::dispose)
    /// - `NoRuntime` when called outside a Tokio runtime
    pub fn submit(&self, text: &str) -> Result<ReplyHandle> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("[Chat] Session {}: ignoring empty input", self.id);
            return Err(CampusError::EmptyInput);
        }
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("[Chat] Session {}: no runtime to schedule a reply", self.id);
            return Err(CampusError::NoRuntime);
        };

        let (user_message_id, token) = {
            let mut state = self.shared.lock();
            if state.disposed {
                return Err(CampusError::Disposed);
            }
            if state.status != SessionStatus::Idle {
                tracing::debug!(
                    "[Chat] Session {}: submit rejected while {}",
                    self.id,
                    state.status
                );
                return Err(CampusError::InvalidState {
                    status: state.status,
                });
            }

            let user_message_id = state.append(Author::User, text);
            let token = CancellationToken::new();
            state.status = SessionStatus::AwaitingReply;
            state.pending = Some(token.clone());
            self.shared.publish(&state);
            (user_message_id, token)
        };

        let task = runtime.spawn(deliver_reply(
            self.id.clone(),
            Arc::clone(&self.shared),
            Arc::clone(&self.knowledge),
            Arc::clone(&self.resolver),
            text.to_string(),
            self.reply_latency,
            token,
        ));

        Ok(ReplyHandle {
            user_message_id,
            task,
        })
    }

    /// Tears the session down, cancelling any pending reply.
    ///
    /// Idempotent. No message is appended after this returns.
    pub fn dispose(&self) {
        let mut state = self.shared.lock();
        if state.disposed {
            return;
        }
        state.disposed = true;
        if let Some(token) = state.pending.take() {
            token.cancel();
            tracing::warn!("[Chat] Session {}: pending reply cancelled", self.id);
        }
        state.status = SessionStatus::Idle;
        self.shared.publish(&state);
        tracing::info!("[Chat] Session {} disposed", self.id);
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("id", &self.id)
            .field("status", &self.status())
            .field("reply_latency", &self.reply_latency)
            .finish_non_exhaustive()
    }
}

async fn deliver_reply(
    session_id: String,
    shared: Arc<Shared>,
    knowledge: Arc<KnowledgeBase>,
    resolver: Arc<IntentResolver>,
    text: String,
    latency: Duration,
    token: CancellationToken,
) -> ReplyOutcome {
    tokio::select! {
        _ = token.cancelled() => return ReplyOutcome::Cancelled,
        _ = tokio::time::sleep(latency) => {}
    }

    let classification = resolver.explain(&text);
    tracing::debug!(
        "[Chat] Session {}: classified as {} (trigger: {:?})",
        session_id,
        classification.topic,
        classification.trigger
    );
    let body = knowledge.lookup(classification.topic).body.clone();

    let mut state = shared.lock();
    // dispose() cancels under this lock, so checking here closes the race
    // between the timer firing and teardown.
    if token.is_cancelled() {
        return ReplyOutcome::Cancelled;
    }
    state.append(Author::Assistant, body);
    state.status = SessionStatus::Idle;
    state.pending = None;
    shared.publish(&state);
    ReplyOutcome::Delivered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::Topic;

    const LATENCY: Duration = Duration::from_millis(1000);

    fn session() -> ChatSession {
        ChatSession::new(
            Arc::new(KnowledgeBase::builtin()),
            Arc::new(IntentResolver::default()),
            SessionOptions {
                greeting: "Hi there".to_string(),
                reply_latency: LATENCY,
            },
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_session_has_greeting() {
        let session = session();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.messages[0].id, 1);
        assert_eq!(snapshot.messages[0].text, "Hi there");
        assert!(snapshot.messages[0].is_from_assistant());
        assert!(!snapshot.is_awaiting_reply);
        assert_eq!(session.status(), SessionStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_appends_then_replies() {
        let session = session();
        let handle = session.submit("  exam dates?  ").unwrap();
        assert_eq!(handle.user_message_id(), 2);

        let pending = session.snapshot();
        assert!(pending.is_awaiting_reply);
        assert_eq!(pending.last().unwrap().text, "exam dates?");
        assert_eq!(pending.last().unwrap().origin, Author::User);

        assert_eq!(handle.finished().await, ReplyOutcome::Delivered);

        let done = session.snapshot();
        assert!(!done.is_awaiting_reply);
        assert_eq!(done.len(), 3);
        assert_eq!(
            done.last().unwrap().text,
            KnowledgeBase::builtin().lookup(Topic::Exam).body
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_waits_for_latency() {
        let session = session();
        let handle = session.submit("hello").unwrap();

        tokio::time::advance(LATENCY - Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert!(session.snapshot().is_awaiting_reply);
        assert!(!handle.is_finished());

        assert_eq!(handle.finished().await, ReplyOutcome::Delivered);
        assert_eq!(session.snapshot().len(), 3);
    }

    #[test]
    fn test_submit_without_runtime_leaves_session_idle() {
        let session = session();
        assert_eq!(session.submit("exam").unwrap_err(), CampusError::NoRuntime);
        assert_eq!(session.status(), SessionStatus::Idle);
        assert_eq!(session.snapshot().len(), 1);
        assert!(!session.snapshot().is_awaiting_reply);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_input_rejected() {
        let session = session();
        assert_eq!(session.submit("   ").unwrap_err(), CampusError::EmptyInput);
        assert_eq!(session.submit("").unwrap_err(), CampusError::EmptyInput);
        assert_eq!(session.snapshot().len(), 1);
        assert_eq!(session.status(), SessionStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_busy_rejection() {
        let session = session();
        let handle = session.submit("x").unwrap();

        let err = session.submit("y").unwrap_err();
        assert_eq!(
            err,
            CampusError::InvalidState {
                status: SessionStatus::AwaitingReply
            }
        );

        let snapshot = session.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.is_awaiting_reply);
        assert_eq!(
            snapshot
                .messages
                .iter()
                .filter(|m| m.origin == Author::User)
                .count(),
            1
        );

        handle.finished().await;
        assert!(!session.snapshot().is_awaiting_reply);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispose_cancels_pending_reply() {
        let session = session();
        let handle = session.submit("attendance").unwrap();
        session.dispose();

        tokio::time::sleep(LATENCY * 3).await;

        assert_eq!(handle.finished().await, ReplyOutcome::Cancelled);
        assert_eq!(session.snapshot().len(), 2);
        assert!(session.is_disposed());
        assert_eq!(session.submit("again").unwrap_err(), CampusError::Disposed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_reply() {
        let session = session();
        let mut updates = session.subscribe();
        let handle = session.submit("placement").unwrap();
        drop(session);

        assert_eq!(handle.finished().await, ReplyOutcome::Cancelled);
        let last = updates.borrow_and_update().clone();
        assert_eq!(last.len(), 2);
        assert!(!last.is_awaiting_reply);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispose_is_idempotent() {
        let session = session();
        session.dispose();
        session.dispose();
        assert!(session.is_disposed());
        assert_eq!(session.snapshot().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_each_transition() {
        let session = session();
        let mut updates = session.subscribe();

        let handle = session.submit("schedule").unwrap();
        updates.changed().await.unwrap();
        assert!(updates.borrow_and_update().is_awaiting_reply);

        handle.finished().await;
        updates.changed().await.unwrap();
        let snapshot = updates.borrow_and_update().clone();
        assert!(!snapshot.is_awaiting_reply);
        assert_eq!(snapshot.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ids_are_monotonic() {
        let session = session();
        for text in ["a", "b", "c"] {
            session.submit(text).unwrap().finished().await;
        }
        let ids: Vec<u64> = session.snapshot().messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }
}
