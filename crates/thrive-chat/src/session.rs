use std::future::Future;
use std::pin::Pin;

use thrive_api::{ApiClient, ApiError};
use thrive_core::models::chat::{ChatMessage, Conversation};
use tracing::{debug, info};

use crate::error::ChatError;
use crate::realtime::RealtimeEvent;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The slice of the platform API a chat session needs. Tests substitute an
/// in-memory implementation.
pub trait ChatBackend: Send + Sync {
    /// Open or resume the conversation for `(current user, therapist)`.
    fn get_or_create(&self, therapist_id: i64) -> BoxFuture<'_, Result<Conversation, ApiError>>;

    fn history(&self, chat_id: i64) -> BoxFuture<'_, Result<Vec<ChatMessage>, ApiError>>;

    fn send<'a>(
        &'a self,
        chat_id: i64,
        text: &'a str,
    ) -> BoxFuture<'a, Result<ChatMessage, ApiError>>;
}

impl ChatBackend for ApiClient {
    fn get_or_create(&self, therapist_id: i64) -> BoxFuture<'_, Result<Conversation, ApiError>> {
        Box::pin(async move { self.get_or_create_chat(therapist_id).await })
    }

    fn history(&self, chat_id: i64) -> BoxFuture<'_, Result<Vec<ChatMessage>, ApiError>> {
        Box::pin(async move { self.chat_history(chat_id).await })
    }

    fn send<'a>(
        &'a self,
        chat_id: i64,
        text: &'a str,
    ) -> BoxFuture<'a, Result<ChatMessage, ApiError>> {
        Box::pin(async move { self.send_message(chat_id, text).await })
    }
}

/// Lifecycle of a chat session. Initialization is legal only from
/// `Uninitialized`, which is what makes it exactly-once per mount — the
/// guard is the transition rule, not a side-channel flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPhase {
    Uninitialized,
    Ready { chat_id: i64 },
    /// History or conversation setup failed; the page shows a blocking
    /// error with a way back to the dashboard.
    Failed,
}

/// One conversation view: the append-only display list, the draft input,
/// and the send state.
#[derive(Debug)]
pub struct ChatSession {
    phase: ChatPhase,
    messages: Vec<ChatMessage>,
    draft: String,
    sending: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            phase: ChatPhase::Uninitialized,
            messages: Vec::new(),
            draft: String::new(),
            sending: false,
        }
    }

    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    pub fn chat_id(&self) -> Option<i64> {
        match self.phase {
            ChatPhase::Ready { chat_id } => Some(chat_id),
            _ => None,
        }
    }

    /// The display list, in arrival order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Open or resume the conversation and load its history. Legal only
    /// from `Uninitialized`; a second call is rejected, not repeated.
    pub async fn initialize<B: ChatBackend + ?Sized>(
        &mut self,
        backend: &B,
        therapist_id: i64,
    ) -> Result<i64, ChatError> {
        if self.phase != ChatPhase::Uninitialized {
            return Err(ChatError::AlreadyInitialized);
        }

        let chat = match backend.get_or_create(therapist_id).await {
            Ok(chat) => chat,
            Err(e) => {
                self.phase = ChatPhase::Failed;
                return Err(e.into());
            }
        };

        let history = match backend.history(chat.id).await {
            Ok(history) => history,
            Err(e) => {
                self.phase = ChatPhase::Failed;
                return Err(e.into());
            }
        };

        for message in history {
            self.reconcile_inbound(message);
        }
        self.phase = ChatPhase::Ready { chat_id: chat.id };
        info!(chat_id = chat.id, messages = self.messages.len(), "chat session ready");
        Ok(chat.id)
    }

    /// Append a message unless one with the same server id is already
    /// displayed. This is the dedup invariant: the same record arrives both
    /// as the send response and as a broadcast echo, in either order.
    /// Returns whether the message was appended.
    pub fn reconcile_inbound(&mut self, message: ChatMessage) -> bool {
        if self.messages.iter().any(|m| m.id == message.id) {
            debug!(id = message.id, "duplicate message dropped");
            return false;
        }
        self.messages.push(message);
        true
    }

    /// Fold a realtime event into the display list.
    pub fn apply_event(&mut self, event: RealtimeEvent) {
        match event {
            RealtimeEvent::MessageSent(message) => {
                self.reconcile_inbound(message);
            }
        }
    }

    /// Send the current draft. Blank drafts and overlapping sends are
    /// rejected. The input clears optimistically; on failure the original
    /// text is restored exactly so nothing the user typed is lost.
    pub async fn send<B: ChatBackend + ?Sized>(&mut self, backend: &B) -> Result<(), ChatError> {
        let ChatPhase::Ready { chat_id } = self.phase else {
            return Err(ChatError::NotReady);
        };
        if self.sending {
            return Err(ChatError::SendInFlight);
        }
        if self.draft.trim().is_empty() {
            return Err(ChatError::BlankMessage);
        }

        let original = std::mem::take(&mut self.draft);
        self.sending = true;
        let result = backend.send(chat_id, original.trim()).await;
        self.sending = false;

        match result {
            Ok(message) => {
                self.reconcile_inbound(message);
                Ok(())
            }
            Err(e) => {
                self.draft = original;
                Err(e.into())
            }
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
