//! thrive-chat
//!
//! A single live conversation between the authenticated user and their
//! assigned counselor. The interesting part is reconciliation: a message
//! this client sends arrives twice — once synchronously as the send
//! response, once asynchronously as a broadcast echo — and the display list
//! must hold it exactly once. Delivery is at-least-once and ordering is
//! "whichever resolves first, deduplicated"; the list is append-only in
//! arrival order with no resorting.

pub mod error;
pub mod realtime;
pub mod session;

pub use error::ChatError;
pub use realtime::{channel_name, InMemoryTransport, RealtimeEvent, RealtimeTransport, Subscription};
pub use session::{ChatBackend, ChatPhase, ChatSession};
