//! Realtime channel plumbing.
//!
//! The wire protocol belongs to the external broadcasting service and is a
//! black box here; what this module fixes is the contract around it: one
//! private channel per conversation (`chat.<id>`), authenticated with the
//! session bearer token via the broadcasting-auth endpoint, delivering
//! "message sent" events, and released on teardown so no channel leaks
//! across chat sessions. Concrete socket transports implement
//! [`RealtimeTransport`]; [`InMemoryTransport`] backs tests and demos.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use thrive_core::models::chat::ChatMessage;
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::ChatError;

/// Channel naming convention shared with the backend.
pub fn channel_name(chat_id: i64) -> String {
    format!("chat.{chat_id}")
}

/// Events observed on a conversation channel. One type today; the enum
/// leaves room for typing indicators and read receipts.
#[derive(Debug, Clone)]
pub enum RealtimeEvent {
    MessageSent(ChatMessage),
}

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A source of realtime events. Methods return boxed futures for dyn
/// compatibility.
pub trait RealtimeTransport: Send + Sync {
    /// Open exactly one subscription to `channel`, authorized by `token`.
    /// Failure is non-fatal to the caller: chat falls back to REST.
    fn subscribe<'a>(
        &'a self,
        channel: &'a str,
        token: &'a str,
    ) -> BoxFuture<'a, Result<Subscription, ChatError>>;
}

/// A live channel subscription. Dropping it releases the channel — the
/// transport stops delivering and forgets this subscriber.
pub struct Subscription {
    channel: String,
    rx: mpsc::UnboundedReceiver<RealtimeEvent>,
    on_release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(channel: impl Into<String>, rx: mpsc::UnboundedReceiver<RealtimeEvent>) -> Self {
        Self {
            channel: channel.into(),
            rx,
            on_release: None,
        }
    }

    /// Attach a release hook run exactly once when the subscription drops.
    pub fn with_release(mut self, release: impl FnOnce() + Send + 'static) -> Self {
        self.on_release = Some(Box::new(release));
        self
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Drain one pending event without waiting. Used by UI ticks.
    pub fn try_recv(&mut self) -> Option<RealtimeEvent> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next event. `None` means the transport closed the
    /// channel.
    pub async fn recv(&mut self) -> Option<RealtimeEvent> {
        self.rx.recv().await
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.on_release.take() {
            release();
        }
        debug!(channel = %self.channel, "subscription released");
    }
}

type SubscriberMap = HashMap<String, HashMap<u64, mpsc::UnboundedSender<RealtimeEvent>>>;

/// An in-process transport: events emitted on a channel fan out to every
/// live subscriber. Used by tests and the smoke example to stand in for the
/// broadcasting service.
#[derive(Clone, Default)]
pub struct InMemoryTransport {
    inner: Arc<Mutex<InMemoryInner>>,
}

#[derive(Default)]
struct InMemoryInner {
    next_id: u64,
    channels: SubscriberMap,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an event to every subscriber of `channel`.
    pub fn emit(&self, channel: &str, event: RealtimeEvent) {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(subscribers) = inner.channels.get(channel) {
            for tx in subscribers.values() {
                // A closed receiver just means the subscriber is mid-teardown.
                let _ = tx.send(event.clone());
            }
        }
    }

    /// How many live subscriptions `channel` has. Tests assert this goes
    /// back to zero on teardown.
    pub fn active_subscribers(&self, channel: &str) -> usize {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.channels.get(channel).map_or(0, HashMap::len)
    }
}

impl RealtimeTransport for InMemoryTransport {
    fn subscribe<'a>(
        &'a self,
        channel: &'a str,
        _token: &'a str,
    ) -> BoxFuture<'a, Result<Subscription, ChatError>> {
        Box::pin(async move {
            let (tx, rx) = mpsc::unbounded_channel();
            let id;
            {
                let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
                id = inner.next_id;
                inner.next_id += 1;
                inner
                    .channels
                    .entry(channel.to_string())
                    .or_default()
                    .insert(id, tx);
            }

            let registry = Arc::clone(&self.inner);
            let name = channel.to_string();
            Ok(Subscription::new(channel, rx).with_release(move || {
                let mut inner = registry.lock().unwrap_or_else(|e| e.into_inner());
                if let Some(subscribers) = inner.channels.get_mut(&name) {
                    subscribers.remove(&id);
                    if subscribers.is_empty() {
                        inner.channels.remove(&name);
                    }
                }
            }))
        })
    }
}
