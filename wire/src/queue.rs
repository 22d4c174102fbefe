//! Queue, log, and add-request payloads.

#[cfg(test)]
#[path = "queue_test.rs"]
mod queue_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Coarse classification of a download source URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Huggingface,
    Civitai,
    #[default]
    #[serde(other)]
    Other,
}

impl Platform {
    /// Wire tag for this platform.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Huggingface => "huggingface",
            Self::Civitai => "civitai",
            Self::Other => "other",
        }
    }
}

/// Lifecycle position of one queued download.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Queued,
    Downloading,
    Completed,
    Error,
    Cancelled,
    /// Any status this client does not know; rendered but never acted on.
    #[serde(other)]
    Unknown,
}

impl ItemStatus {
    /// Wire tag for this status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Downloading => "downloading",
            Self::Completed => "completed",
            Self::Error => "error",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the item no longer participates in processing.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Completed | Self::Error | Self::Cancelled)
    }
}

/// Opaque queue item identifier.
///
/// Backends emit either numbers (integer or float) or strings; the original
/// form is preserved so a remove request echoes exactly what the snapshot
/// carried.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

/// Typed input becomes a number only when it reads back identically, so
/// `007` or `1e3` stay text.
impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        match serde_json::from_str::<serde_json::Number>(value) {
            Ok(number) if number.to_string() == value => Self::Number(number),
            _ => Self::Text(value.to_owned()),
        }
    }
}

/// One entry of the server-side download queue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueueItem {
    pub id: ItemId,
    pub url: String,
    #[serde(default)]
    pub directory: String,
    /// User-supplied filename override.
    #[serde(default)]
    pub filename: Option<String>,
    /// Filename the server derived from the source.
    #[serde(default)]
    pub detected_filename: Option<String>,
    #[serde(default)]
    pub platform: Platform,
    pub status: ItemStatus,
    /// Percent complete. Only meaningful while `status` is `downloading`.
    #[serde(default, deserialize_with = "deserialize_progress")]
    pub progress: Option<u8>,
    #[serde(default)]
    pub speed: Option<String>,
    #[serde(default)]
    pub eta: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl QueueItem {
    /// Filename for template packaging: user override, then detected, else none.
    #[must_use]
    pub fn preferred_filename(&self) -> Option<&str> {
        non_empty(self.filename.as_deref()).or_else(|| non_empty(self.detected_filename.as_deref()))
    }

    /// Filename for display: detected first, then the user override.
    #[must_use]
    pub fn display_filename(&self) -> Option<&str> {
        non_empty(self.detected_filename.as_deref()).or_else(|| non_empty(self.filename.as_deref()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Authoritative queue state, pushed on `downloader.queue` and returned by
/// `GET /downloader/state`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueSnapshot {
    #[serde(default)]
    pub queue: Vec<QueueItem>,
    #[serde(default)]
    pub is_processing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs: Option<Vec<LogEntry>>,
}

/// Severity of a log line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warning,
    Success,
    #[default]
    #[serde(other)]
    Info,
}

impl LogLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Info => "info",
        }
    }
}

/// A single backend log line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub level: LogLevel,
    pub message: String,
}

/// State of a single-download backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegacyState {
    #[default]
    Idle,
    Downloading,
    Completed,
    Error,
    Cancelled,
}

/// Payload of `downloader.status` and `GET /downloader/status`, emitted by
/// backends that run one download at a time instead of a queue.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyStatus {
    #[serde(default)]
    pub status: LegacyState,
    #[serde(default, deserialize_with = "deserialize_progress")]
    pub progress: Option<u8>,
    #[serde(default)]
    pub speed: String,
    #[serde(default)]
    pub eta: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub platform: String,
}

/// Transfer backend chosen for a download.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    #[default]
    HfHub,
    Aria2,
}

impl Provider {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HfHub => "hf_hub",
            Self::Aria2 => "aria2",
        }
    }
}

/// Body of `POST /downloader/add`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddRequest {
    pub url: String,
    pub directory: String,
    /// Serialized as `null` when absent; the server detects a name itself.
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
}

/// Body of `POST /downloader/start` on a single-download backend, which
/// starts the download immediately instead of queueing it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyStartRequest {
    pub url: String,
    pub directory: String,
    /// Empty when the backend should detect the name.
    #[serde(default)]
    pub filename: String,
}

impl From<AddRequest> for LegacyStartRequest {
    fn from(request: AddRequest) -> Self {
        Self { url: request.url, directory: request.directory, filename: request.filename.unwrap_or_default() }
    }
}

/// Body of `POST /downloader/remove`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveRequest {
    pub id: ItemId,
}

fn deserialize_progress<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(Some(clamp_percent(int)));
            }
            #[allow(clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
            {
                return Ok(Some(clamp_percent(float.round() as i64)));
            }
            Err(D::Error::custom(format!("invalid progress value {number}")))
        }
        other => Err(D::Error::custom(format!("expected number for progress, got {other}"))),
    }
}

fn clamp_percent(value: i64) -> u8 {
    u8::try_from(value.clamp(0, 100)).unwrap_or(100)
}
