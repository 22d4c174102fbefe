//! Shared wire model for the downloader HTTP + push-event contract.
//!
//! This crate owns the JSON representation of every payload exchanged with the
//! `/downloader/*` backend: request bodies, response bodies, and the events the
//! host pushes over its websocket. It has no transport of its own.
//!
//! Push events arrive as text messages shaped `{ "type": ..., "data": ... }`.
//! The host multiplexes its own events over the same socket, so unknown event
//! types decode to [`PushEvent::Other`] instead of failing.

pub mod endpoints;
pub mod files;
pub mod library;
pub mod queue;
pub mod terminal;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use files::{DirectoryListing, FileEntry, ListRequest, PathRequest, RenameRequest, TransferRequest};
pub use library::{DirectoryMap, SaveTemplateRequest, TemplateBody, TemplateDownload, TemplateList, TemplateSummary};
pub use queue::{
    AddRequest, ItemId, ItemStatus, LegacyStartRequest, LegacyState, LegacyStatus, LogEntry, LogLevel, Platform, Provider, QueueItem,
    QueueSnapshot, RemoveRequest,
};
pub use terminal::{ExecuteRequest, ResizeRequest, TerminalOutput};

/// Event carrying a full [`QueueSnapshot`].
pub const QUEUE_EVENT: &str = "downloader.queue";
/// Event carrying a single [`LogEntry`].
pub const LOG_EVENT: &str = "downloader.log";
/// Event carrying a [`LegacyStatus`] from single-download backends.
pub const STATUS_EVENT: &str = "downloader.status";
/// Event carrying raw terminal output.
pub const TERMINAL_OUTPUT_EVENT: &str = "downloader.terminal.output";

/// Error returned by [`decode_event`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The message was not a JSON `{type, data}` envelope.
    #[error("failed to decode event envelope: {0}")]
    Json(#[from] serde_json::Error),
    /// The envelope named a known event but its payload did not match.
    #[error("invalid payload for {kind}: {source}")]
    Payload {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A decoded server push.
#[derive(Clone, Debug, PartialEq)]
pub enum PushEvent {
    /// Full replacement of the queue mirror.
    Queue(QueueSnapshot),
    /// One appended log line.
    Log(LogEntry),
    /// Legacy single-download status object.
    Status(LegacyStatus),
    /// Raw terminal bytes.
    TerminalOutput(TerminalOutput),
    /// Any host event this contract does not consume.
    Other { kind: String },
}

impl PushEvent {
    /// Event type string as it appears on the wire.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Queue(_) => QUEUE_EVENT,
            Self::Log(_) => LOG_EVENT,
            Self::Status(_) => STATUS_EVENT,
            Self::TerminalOutput(_) => TERMINAL_OUTPUT_EVENT,
            Self::Other { kind } => kind,
        }
    }
}

#[derive(Deserialize, Serialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Value,
}

/// Decode one websocket text message into a [`PushEvent`].
///
/// # Errors
///
/// Returns [`CodecError::Json`] when the message is not an envelope and
/// [`CodecError::Payload`] when a known event carries a malformed payload.
pub fn decode_event(text: &str) -> Result<PushEvent, CodecError> {
    let envelope: Envelope = serde_json::from_str(text)?;
    match envelope.kind.as_str() {
        QUEUE_EVENT => payload(QUEUE_EVENT, envelope.data).map(PushEvent::Queue),
        LOG_EVENT => payload(LOG_EVENT, envelope.data).map(PushEvent::Log),
        STATUS_EVENT => payload(STATUS_EVENT, envelope.data).map(PushEvent::Status),
        TERMINAL_OUTPUT_EVENT => payload(TERMINAL_OUTPUT_EVENT, envelope.data).map(PushEvent::TerminalOutput),
        _ => Ok(PushEvent::Other { kind: envelope.kind }),
    }
}

/// Encode a [`PushEvent`] as a websocket text message.
#[must_use]
pub fn encode_event(event: &PushEvent) -> String {
    let data = match event {
        PushEvent::Queue(snapshot) => serde_json::to_value(snapshot),
        PushEvent::Log(entry) => serde_json::to_value(entry),
        PushEvent::Status(status) => serde_json::to_value(status),
        PushEvent::TerminalOutput(output) => serde_json::to_value(output),
        PushEvent::Other { .. } => Ok(Value::Object(Map::new())),
    }
    // Plain structs with string keys always serialize.
    .unwrap_or(Value::Null);

    let envelope = Envelope { kind: event.kind().to_owned(), data };
    serde_json::to_string(&envelope).unwrap_or_default()
}

fn payload<T: DeserializeOwned>(kind: &'static str, data: Value) -> Result<T, CodecError> {
    serde_json::from_value(data).map_err(|source| CodecError::Payload { kind, source })
}

/// Server-reported logical error body: `{ "error": "..." }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Extract the message from an `{error}` body, if the value is one.
#[must_use]
pub fn rejection(value: &Value) -> Option<&str> {
    value.get("error").and_then(Value::as_str)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
