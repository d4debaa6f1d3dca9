use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thrive_core::models::therapist::TherapistRef;
use thrive_core::models::user::User;
use tokio::sync::watch;

use crate::error::SessionError;

/// Current session-file version. Bump this when adding fields or changing
/// shape. Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// A read-only copy of the session facts. Cheap to clone; handed to every
/// reader and carried on the change-notification channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Schema version. Missing or 0 = pre-versioned session file.
    #[serde(default)]
    pub session_version: u32,
    pub token: Option<String>,
    pub user: Option<User>,
    pub therapist: Option<TherapistRef>,
    /// Email awaiting OTP verification, carried between the signup and
    /// verification pages. Transient: cleared once verification succeeds.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pending_verification_email: Option<String>,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

/// The single source of truth, within one app session, for identity and
/// "which counselor is this user working with". Reads come from the
/// in-memory snapshot and never touch the network; writes persist to disk
/// atomically and then notify subscribers.
pub struct SessionStore {
    path: PathBuf,
    state: SessionSnapshot,
    tx: watch::Sender<SessionSnapshot>,
}

impl SessionStore {
    /// Open the store at the platform-default location.
    pub fn open_default() -> Result<Self, SessionError> {
        let base = dirs::config_dir().ok_or(SessionError::NoConfigDir)?;
        Self::open(base.join("uk.right2thrive.client").join("session.json"))
    }

    /// Open the store backed by `path`, loading and migrating any existing
    /// session file. A missing file yields an empty (logged-out) session.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        let state = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                // Parse as raw JSON so migrations run before deserializing.
                let json: serde_json::Value = serde_json::from_str(&contents)?;
                let on_disk_version = json
                    .get("session_version")
                    .and_then(|v| v.as_u64())
                    .unwrap_or(0) as u32;
                let migrated = migrate(json, on_disk_version)?;
                serde_json::from_value(migrated)?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => SessionSnapshot::default(),
            Err(e) => return Err(e.into()),
        };

        let (tx, _) = watch::channel(state.clone());
        Ok(Self { path, state, tx })
    }

    // ── Readers ──────────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.clone()
    }

    pub fn token(&self) -> Option<&str> {
        self.state.token.as_deref()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    /// The cached therapist assignment. `None` is a fact, not an error:
    /// feature pages translate it into their terminal no-coach state.
    pub fn assigned_therapist(&self) -> Option<&TherapistRef> {
        self.state.therapist.as_ref()
    }

    pub fn pending_verification_email(&self) -> Option<&str> {
        self.state.pending_verification_email.as_deref()
    }

    /// Subscribe to change notifications. The receiver observes a fresh
    /// snapshot after every committed write, so already-rendered components
    /// (a navbar, an open page) can react without a full reload.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.tx.subscribe()
    }

    // ── Writers ──────────────────────────────────────────────────────────────
    //
    // This is the full set. No other component writes to the session.

    pub fn login(
        &mut self,
        token: String,
        user: User,
        therapist: Option<TherapistRef>,
    ) -> Result<(), SessionError> {
        self.state.token = Some(token);
        self.state.user = Some(user);
        self.state.therapist = therapist;
        self.state.pending_verification_email = None;
        self.commit()?;
        tracing::info!("session: logged in");
        Ok(())
    }

    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.state = SessionSnapshot::default();
        self.commit()?;
        tracing::info!("session: logged out");
        Ok(())
    }

    pub fn assign_therapist(&mut self, therapist: TherapistRef) -> Result<(), SessionError> {
        let therapist_id = therapist.id;
        self.state.therapist = Some(therapist);
        self.commit()?;
        tracing::info!(therapist_id, "session: therapist assigned");
        Ok(())
    }

    pub fn update_user(&mut self, user: User) -> Result<(), SessionError> {
        self.state.user = Some(user);
        self.commit()
    }

    pub fn set_pending_verification(&mut self, email: String) -> Result<(), SessionError> {
        self.state.pending_verification_email = Some(email);
        self.commit()
    }

    pub fn clear_pending_verification(&mut self) -> Result<(), SessionError> {
        self.state.pending_verification_email = None;
        self.commit()
    }

    // ── Persistence ──────────────────────────────────────────────────────────

    /// Persist the current state, then notify subscribers. The notification
    /// only fires once the write has landed on disk.
    fn commit(&mut self) -> Result<(), SessionError> {
        self.persist()?;
        self.tx.send_replace(self.state.clone());
        Ok(())
    }

    fn persist(&mut self) -> Result<(), SessionError> {
        let dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .ok_or(SessionError::NoConfigDir)?;
        std::fs::create_dir_all(&dir)?;

        // Always write the current version, regardless of what was loaded.
        self.state.session_version = CURRENT_VERSION;
        let json = serde_json::to_string_pretty(&self.state)?;

        // Write to a temp file then rename for atomicity
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json.as_bytes())?;

        // Set restrictive permissions on Unix before renaming
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
        }

        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, SessionError> {
    if from_version > CURRENT_VERSION {
        return Err(SessionError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: pre-versioned files stored the therapist under "coach".
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(SessionError::Malformed)?;
        if let Some(coach) = obj.remove("coach") {
            obj.entry("therapist").or_insert(coach);
        }
        obj.insert(
            "session_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated session v0 → v1 (renamed coach to therapist)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}
