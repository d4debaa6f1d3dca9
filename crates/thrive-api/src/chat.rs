//! Chat endpoints: get-or-create conversation, history, send, and the
//! broadcasting-auth handshake for joining the private realtime channel.

use serde::{Deserialize, Serialize};
use thrive_core::models::chat::{ChatMessage, Conversation};
use tracing::info;

use crate::error::ApiError;
use crate::{ApiClient, Data};

#[derive(Serialize)]
struct GetOrCreateBody {
    therapist_id: i64,
}

#[derive(Serialize)]
struct SendBody<'a> {
    message: &'a str,
}

#[derive(Serialize)]
struct BroadcastAuthBody<'a> {
    channel_name: &'a str,
    socket_id: &'a str,
}

/// Signature authorizing this connection to join a private channel.
#[derive(Debug, Clone, Deserialize)]
pub struct BroadcastAuth {
    pub auth: String,
}

impl ApiClient {
    /// Open or resume the conversation for `(current user, therapist)`.
    pub async fn get_or_create_chat(&self, therapist_id: i64) -> Result<Conversation, ApiError> {
        let chat: Conversation = self
            .post_json("/api/chats", &GetOrCreateBody { therapist_id })
            .await?;
        info!(chat_id = chat.id, therapist_id, "conversation ready");
        Ok(chat)
    }

    /// Fetch the message history for a conversation (single page, server
    /// chronological order).
    pub async fn chat_history(&self, chat_id: i64) -> Result<Vec<ChatMessage>, ApiError> {
        let body: Data<Vec<ChatMessage>> = self
            .get_json(&format!("/api/chats/{chat_id}/messages"))
            .await?;
        Ok(body.data)
    }

    /// Send a message. The response carries the server-assigned id; the same
    /// record will arrive again as a broadcast echo.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<ChatMessage, ApiError> {
        self.post_json(
            &format!("/api/chats/{chat_id}/messages"),
            &SendBody { message: text },
        )
        .await
    }

    /// Authenticate against the broadcasting endpoint for a private channel.
    /// Uses the same bearer token as every other call.
    pub async fn broadcast_auth(
        &self,
        channel_name: &str,
        socket_id: &str,
    ) -> Result<BroadcastAuth, ApiError> {
        let path = self.config().broadcast_auth_path.clone();
        self.post_json(
            &path,
            &BroadcastAuthBody {
                channel_name,
                socket_id,
            },
        )
        .await
    }
}
