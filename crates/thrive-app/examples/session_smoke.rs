//! Smoke test for the session store and page gating.
//!
//! Runs entirely offline: opens a session store in a temp directory, walks
//! through login → gate → assignment → gate, then drives a chat session
//! against an in-process backend and broadcast transport to show the
//! echo dedup in action.
//!
//! Usage:
//!   cargo run -p thrive-app --example session_smoke

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicI64, Ordering};

use thrive_api::{ApiClient, ApiError, ClientConfig};
use thrive_app::flows;
use thrive_app::pages::chat::{ChatPage, ChatPageState};
use thrive_app::{therapist_gate, TherapistGate, NO_COACH_MESSAGE};
use thrive_chat::{ChatBackend, InMemoryTransport, RealtimeEvent};
use thrive_core::models::chat::{ChatMessage, Conversation, Sender};
use thrive_core::models::therapist::TherapistRef;
use thrive_core::models::user::User;
use thrive_session::SessionStore;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// In-process stand-in for the platform API: every send is answered with a
/// server-assigned id and re-broadcast on the conversation channel, the way
/// the real backend echoes messages.
struct EchoBackend {
    transport: InMemoryTransport,
    next_id: AtomicI64,
}

impl ChatBackend for EchoBackend {
    fn get_or_create(&self, therapist_id: i64) -> BoxFuture<'_, Result<Conversation, ApiError>> {
        Box::pin(async move {
            Ok(Conversation {
                id: 1,
                patient_id: 7,
                therapist_id,
                created_at: jiff::Timestamp::UNIX_EPOCH,
            })
        })
    }

    fn history(&self, _chat_id: i64) -> BoxFuture<'_, Result<Vec<ChatMessage>, ApiError>> {
        Box::pin(async move { Ok(Vec::new()) })
    }

    fn send<'a>(
        &'a self,
        chat_id: i64,
        text: &'a str,
    ) -> BoxFuture<'a, Result<ChatMessage, ApiError>> {
        Box::pin(async move {
            let message = ChatMessage {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                chat_id,
                sender_id: 7,
                message: text.to_string(),
                sender: Sender::Patient,
                created_at: jiff::Timestamp::UNIX_EPOCH,
            };
            // Broadcast echo: the same record goes out on the channel too.
            self.transport.emit(
                &thrive_chat::channel_name(chat_id),
                RealtimeEvent::MessageSent(message.clone()),
            );
            Ok(message)
        })
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let dir = tempfile::tempdir()?;
    let mut store = SessionStore::open(dir.path().join("session.json"))?;
    let mut api = ApiClient::new(
        ClientConfig::from_env().unwrap_or_else(|_| ClientConfig::new("http://localhost:8000")),
    );

    println!("╔══════════════════════════════════════════════════╗");
    println!("║      Right2Thrive Client — Session Smoke         ║");
    println!("╚══════════════════════════════════════════════════╝");
    println!();

    // Step 1: sign in with no therapist yet.
    store.login(
        "smoke-token".to_string(),
        User {
            id: 7,
            email: "amina@example.org".to_string(),
            first_name: "Amina".to_string(),
            last_name: "Okoye".to_string(),
            is_email_verified: true,
        },
        None,
    )?;
    flows::restore(&mut api, &store);
    println!("Signed in as {}", store.current_user().unwrap().full_name());

    match therapist_gate(&store.snapshot()) {
        TherapistGate::NoCoach => println!("Gate before assignment: {NO_COACH_MESSAGE}"),
        TherapistGate::Assigned(_) => unreachable!("no therapist assigned yet"),
    }
    println!();

    // Step 2: assign a therapist and watch the gate open.
    store.assign_therapist(TherapistRef {
        id: 3,
        first_name: "Grace".to_string(),
        last_name: "Mensah".to_string(),
        title: "Counsellor".to_string(),
        avatar_url: None,
    })?;

    match therapist_gate(&store.snapshot()) {
        TherapistGate::Assigned(t) => println!("Gate after assignment: {}", t.display_name()),
        TherapistGate::NoCoach => unreachable!("assignment just committed"),
    }
    println!();

    // Step 3: open the chat page and send a message. The backend answers
    // the send AND echoes it on the broadcast channel; the display list
    // must still hold it once.
    let transport = InMemoryTransport::new();
    let backend = EchoBackend {
        transport: transport.clone(),
        next_id: AtomicI64::new(42),
    };

    let state = ChatPage::open(&backend, &transport, &store.snapshot()).await?;
    let ChatPageState::Open(mut page) = state else {
        unreachable!("gate is open");
    };
    println!("Chat ready (realtime attached: {})", page.has_realtime());

    page.session_mut().set_draft("Hello Grace");
    page.send(&backend).await?;
    page.pump();

    println!("Messages displayed: {}", page.session().messages().len());
    for m in page.session().messages() {
        println!("  [{}] {}", m.id, m.message);
    }
    println!();
    println!("✅ One send + one broadcast echo → one displayed message.");

    page.close();
    flows::logout(&mut api, &mut store)?;
    Ok(())
}
