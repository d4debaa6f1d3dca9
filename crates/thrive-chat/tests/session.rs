use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use thrive_api::ApiError;
use thrive_chat::{ChatBackend, ChatError, ChatPhase, ChatSession, RealtimeEvent};
use thrive_core::models::chat::{ChatMessage, Conversation, Sender};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

fn message(id: i64, text: &str, sender: Sender) -> ChatMessage {
    ChatMessage {
        id,
        chat_id: 9,
        sender_id: if sender == Sender::Patient { 7 } else { 3 },
        message: text.to_string(),
        sender,
        created_at: jiff::Timestamp::UNIX_EPOCH,
    }
}

/// Scripted backend: a fixed conversation and history, send assigns ids
/// from a counter and can be told to fail.
struct FakeChatBackend {
    history: Vec<ChatMessage>,
    next_id: AtomicI64,
    fail_history: bool,
    fail_send: AtomicBool,
}

impl FakeChatBackend {
    fn new(history: Vec<ChatMessage>) -> Self {
        Self {
            history,
            next_id: AtomicI64::new(42),
            fail_history: false,
            fail_send: AtomicBool::new(false),
        }
    }
}

impl ChatBackend for FakeChatBackend {
    fn get_or_create(&self, therapist_id: i64) -> BoxFuture<'_, Result<Conversation, ApiError>> {
        Box::pin(async move {
            Ok(Conversation {
                id: 9,
                patient_id: 7,
                therapist_id,
                created_at: jiff::Timestamp::UNIX_EPOCH,
            })
        })
    }

    fn history(&self, _chat_id: i64) -> BoxFuture<'_, Result<Vec<ChatMessage>, ApiError>> {
        Box::pin(async move {
            if self.fail_history {
                Err(ApiError::Status { status: 500, message: "down".into() })
            } else {
                Ok(self.history.clone())
            }
        })
    }

    fn send<'a>(
        &'a self,
        _chat_id: i64,
        text: &'a str,
    ) -> BoxFuture<'a, Result<ChatMessage, ApiError>> {
        Box::pin(async move {
            if self.fail_send.load(Ordering::SeqCst) {
                return Err(ApiError::Status { status: 500, message: "down".into() });
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            Ok(message(id, text, Sender::Patient))
        })
    }
}

#[tokio::test]
async fn initialize_loads_history_once() {
    let backend = FakeChatBackend::new(vec![
        message(1, "Hi", Sender::Therapist),
        message(2, "Hello", Sender::Patient),
    ]);

    let mut session = ChatSession::new();
    let chat_id = session.initialize(&backend, 3).await.unwrap();

    assert_eq!(chat_id, 9);
    assert_eq!(session.phase(), ChatPhase::Ready { chat_id: 9 });
    assert_eq!(session.messages().len(), 2);

    // Re-firing the trigger does not re-run setup.
    let err = session.initialize(&backend, 3).await.unwrap_err();
    assert!(matches!(err, ChatError::AlreadyInitialized));
    assert_eq!(session.messages().len(), 2);
}

#[tokio::test]
async fn history_failure_is_a_blocking_state() {
    let mut backend = FakeChatBackend::new(Vec::new());
    backend.fail_history = true;

    let mut session = ChatSession::new();
    assert!(session.initialize(&backend, 3).await.is_err());
    assert_eq!(session.phase(), ChatPhase::Failed);
}

#[tokio::test]
async fn echo_after_send_response_is_dropped() {
    let backend = FakeChatBackend::new(Vec::new());
    let mut session = ChatSession::new();
    session.initialize(&backend, 3).await.unwrap();

    session.set_draft("Hello");
    session.send(&backend).await.unwrap();
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].id, 42);

    // The broadcast echo for the same message arrives later.
    session.apply_event(RealtimeEvent::MessageSent(message(42, "Hello", Sender::Patient)));

    let with_id: Vec<_> = session.messages().iter().filter(|m| m.id == 42).collect();
    assert_eq!(with_id.len(), 1);
}

#[tokio::test]
async fn echo_before_send_response_is_also_deduped() {
    let backend = FakeChatBackend::new(Vec::new());
    let mut session = ChatSession::new();
    session.initialize(&backend, 3).await.unwrap();

    // Broadcast wins the race; the send response lands second.
    session.apply_event(RealtimeEvent::MessageSent(message(42, "Hello", Sender::Patient)));
    session.set_draft("Hello");
    session.send(&backend).await.unwrap();

    assert_eq!(session.messages().len(), 1);
}

#[tokio::test]
async fn failed_send_restores_the_draft_exactly() {
    let backend = FakeChatBackend::new(Vec::new());
    let mut session = ChatSession::new();
    session.initialize(&backend, 3).await.unwrap();

    backend.fail_send.store(true, Ordering::SeqCst);
    session.set_draft("  important message ");
    let err = session.send(&backend).await.unwrap_err();

    assert!(matches!(err, ChatError::Api(_)));
    assert_eq!(session.draft(), "  important message ");
    assert!(session.messages().is_empty());
    assert!(!session.is_sending());

    // Retry after the outage succeeds without retyping.
    backend.fail_send.store(false, Ordering::SeqCst);
    session.send(&backend).await.unwrap();
    assert_eq!(session.draft(), "");
    assert_eq!(session.messages().len(), 1);
}

#[tokio::test]
async fn blank_drafts_are_rejected() {
    let backend = FakeChatBackend::new(Vec::new());
    let mut session = ChatSession::new();
    session.initialize(&backend, 3).await.unwrap();

    session.set_draft("   \n\t ");
    let err = session.send(&backend).await.unwrap_err();
    assert!(matches!(err, ChatError::BlankMessage));
    assert!(session.messages().is_empty());
}

#[tokio::test]
async fn send_before_initialize_is_rejected() {
    let backend = FakeChatBackend::new(Vec::new());
    let mut session = ChatSession::new();
    session.set_draft("Hello");
    let err = session.send(&backend).await.unwrap_err();
    assert!(matches!(err, ChatError::NotReady));
}

#[tokio::test]
async fn display_order_is_arrival_order() {
    let backend = FakeChatBackend::new(Vec::new());
    let mut session = ChatSession::new();
    session.initialize(&backend, 3).await.unwrap();

    // Events arrive with ids (and timestamps) out of order; the list is
    // never resorted.
    session.apply_event(RealtimeEvent::MessageSent(message(5, "later", Sender::Therapist)));
    session.apply_event(RealtimeEvent::MessageSent(message(3, "earlier", Sender::Therapist)));

    let ids: Vec<i64> = session.messages().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![5, 3]);
}
