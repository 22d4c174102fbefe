//! Remote terminal payloads.

use serde::{Deserialize, Serialize};

/// Body of `POST /downloader/terminal/execute`. An empty command starts the
/// session without writing input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteRequest {
    pub command: String,
}

/// Body of `POST /downloader/terminal/resize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeRequest {
    pub cols: u16,
    pub rows: u16,
}

/// Payload of `downloader.terminal.output`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalOutput {
    #[serde(default)]
    pub text: String,
}
