use thrive_api::ApiError;
use thrive_chat::{channel_name, ChatBackend, ChatError, ChatSession, RealtimeTransport, Subscription};
use thrive_session::SessionSnapshot;
use tracing::warn;

use crate::pages::gate::{therapist_gate, TherapistGate};

/// What opening the chat page produced.
pub enum ChatPageState {
    /// Terminal: no counselor to talk to. Nothing was fetched.
    NoCoach,
    Open(ChatPage),
}

/// Controller for the chat page: owns the session and, when the channel
/// attached, the realtime subscription. Dropping the page (navigation away)
/// releases the subscription.
pub struct ChatPage {
    session: ChatSession,
    subscription: Option<Subscription>,
}

impl ChatPage {
    /// Open the page: gate on the therapist assignment, then run the
    /// exactly-once session setup and attach the realtime channel.
    ///
    /// A subscription failure is logged and swallowed — the page works over
    /// REST without it. A history failure is returned; the page renders a
    /// blocking error with a route back to the dashboard.
    pub async fn open<B, T>(
        backend: &B,
        transport: &T,
        snapshot: &SessionSnapshot,
    ) -> Result<ChatPageState, ChatError>
    where
        B: ChatBackend + ?Sized,
        T: RealtimeTransport + ?Sized,
    {
        let therapist = match therapist_gate(snapshot) {
            TherapistGate::Assigned(t) => t,
            TherapistGate::NoCoach => return Ok(ChatPageState::NoCoach),
        };
        let Some(token) = snapshot.token.as_deref() else {
            return Err(ChatError::Api(ApiError::Unauthorized));
        };

        let mut session = ChatSession::new();
        let chat_id = session.initialize(backend, therapist.id).await?;

        let subscription = match transport.subscribe(&channel_name(chat_id), token).await {
            Ok(sub) => Some(sub),
            Err(e) => {
                warn!(chat_id, error = %e, "realtime channel failed to attach; REST only");
                None
            }
        };

        Ok(ChatPageState::Open(ChatPage {
            session,
            subscription,
        }))
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut ChatSession {
        &mut self.session
    }

    pub fn has_realtime(&self) -> bool {
        self.subscription.is_some()
    }

    /// Drain any pending realtime events into the display list. Called on
    /// every UI tick.
    pub fn pump(&mut self) {
        let Some(subscription) = self.subscription.as_mut() else {
            return;
        };
        while let Some(event) = subscription.try_recv() {
            self.session.apply_event(event);
        }
    }

    /// Send the current draft through the session's guard rules.
    pub async fn send<B: ChatBackend + ?Sized>(&mut self, backend: &B) -> Result<(), ChatError> {
        self.session.send(backend).await
    }

    /// Explicit teardown: releases the realtime subscription.
    pub fn close(self) {
        drop(self.subscription);
    }
}
