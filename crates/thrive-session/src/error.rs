use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no config directory found")]
    NoConfigDir,

    #[error("session file is not a JSON object")]
    Malformed,

    #[error(
        "session_version {found} is newer than this build supports ({supported}). \
         Please update the app."
    )]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
