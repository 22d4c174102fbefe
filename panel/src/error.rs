//! Error types for the panel client.
//!
//! ERROR HANDLING
//! ==============
//! Three failure classes reach the user: validation errors raised before any
//! request is sent, transport failures, and `{error}` bodies reported by the
//! backend. None of them is fatal to the panel; every gesture returns its own
//! `Result` and leaves the mirrored state untouched on failure.

/// Client-side validation failure. No request has been sent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a URL")]
    MissingUrl,
    #[error("Please select a directory")]
    MissingDirectory,
    #[error("Queue is empty! Add downloads first to save as template.")]
    EmptyQueue,
    #[error("Name is required")]
    MissingName,
    #[error("No item selected")]
    NoSelection,
    #[error("No entry named `{0}` in this folder")]
    UnknownEntry(String),
    #[error("`{0}` is not a folder")]
    NotADirectory(String),
    #[error("Clipboard is empty")]
    ClipboardEmpty,
    #[error("Terminal is not initialized")]
    TerminalNotInitialized,
    #[error("{0} is disabled for this panel")]
    FeatureDisabled(&'static str),
}

/// Transport or backend failure.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// The backend answered with an `{error}` body.
    #[error("{0}")]
    Rejected(String),
    #[error("invalid JSON payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("websocket failed: {0}")]
    WebSocket(Box<tokio_tungstenite::tungstenite::Error>),
    #[error("websocket closed")]
    WsClosed,
}

impl From<tokio_tungstenite::tungstenite::Error> for ApiError {
    fn from(error: tokio_tungstenite::tungstenite::Error) -> Self {
        Self::WebSocket(Box::new(error))
    }
}

/// Failure of a user gesture.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Invalid panel configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown feature `{0}` (expected logs, terminal, files, provider, all, or none)")]
    UnknownFeature(String),
    #[error("invalid value for {var}: {value}")]
    InvalidNumber { var: &'static str, value: String },
}
