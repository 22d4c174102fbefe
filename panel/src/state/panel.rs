//! Per-instance panel context and its reducer.
//!
//! DESIGN
//! ======
//! `PanelState` is created on mount and dropped on unmount; nothing lives in
//! globals, so two panels never share state. Every change goes through
//! [`PanelState::apply`], which makes state transitions testable without a
//! renderer or a socket.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use wire::{
    DirectoryListing, DirectoryMap, LegacyStatus, LogEntry, PushEvent, QueueSnapshot, TemplateSummary, TerminalOutput,
};

use super::files::FileManagerState;
use super::form::AddForm;
use super::logs::LogBuffer;
use super::queue::QueueState;
use super::terminal::TerminalState;
use crate::config::{Features, PanelConfig};

/// Input to [`PanelState::apply`]: pushed events plus fetched responses.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelEvent {
    Snapshot(QueueSnapshot),
    Log(LogEntry),
    LegacyStatus(LegacyStatus),
    TerminalOutput(TerminalOutput),
    LogsCleared,
    Directories(DirectoryMap),
    Listing(DirectoryListing),
    Templates(Vec<TemplateSummary>),
}

impl PanelEvent {
    /// Map a push event to a reducer input. Foreign host events yield `None`.
    #[must_use]
    pub fn from_push(event: PushEvent) -> Option<Self> {
        match event {
            PushEvent::Queue(snapshot) => Some(Self::Snapshot(snapshot)),
            PushEvent::Log(entry) => Some(Self::Log(entry)),
            PushEvent::Status(status) => Some(Self::LegacyStatus(status)),
            PushEvent::TerminalOutput(output) => Some(Self::TerminalOutput(output)),
            PushEvent::Other { .. } => None,
        }
    }
}

/// Everything one mounted panel displays.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelState {
    /// Optional sections enabled for this panel; events for the rest are dropped.
    pub features: Features,
    /// Mirror of the server queue, replaced on every snapshot.
    pub queue: QueueState,
    /// Recent backend log lines.
    pub logs: LogBuffer,
    /// Add-download form.
    pub form: AddForm,
    /// File manager navigation, selection, and clipboard.
    pub files: FileManagerState,
    /// Remote terminal session and scrollback.
    pub terminal: TerminalState,
    /// Saved templates from the last listing.
    pub templates: Vec<TemplateSummary>,
    /// Last status from a single-download backend.
    pub legacy: Option<LegacyStatus>,
    /// Backend installation root from the directory map.
    pub base_dir: Option<String>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new(&PanelConfig::default())
    }
}

impl PanelState {
    #[must_use]
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            features: config.features,
            queue: QueueState::default(),
            logs: LogBuffer::with_cap(config.log_cap),
            form: AddForm::new(config.generic_url_min_len, config.features.provider_select),
            files: FileManagerState::default(),
            terminal: TerminalState::with_scrollback(config.terminal_scrollback),
            templates: Vec::new(),
            legacy: None,
            base_dir: None,
        }
    }

    /// Reduce one event into the state. Returns `false` when the event was
    /// dropped because its section is disabled.
    pub fn apply(&mut self, event: PanelEvent) -> bool {
        match event {
            PanelEvent::Snapshot(snapshot) => {
                if let Some(logs) = self.queue.apply_snapshot(snapshot)
                    && self.features.logs
                {
                    self.logs.replace(logs);
                }
            }
            PanelEvent::Log(entry) => {
                if !self.features.logs {
                    return false;
                }
                self.logs.push(entry);
            }
            PanelEvent::LegacyStatus(status) => self.legacy = Some(status),
            PanelEvent::TerminalOutput(output) => {
                if !self.features.terminal {
                    return false;
                }
                self.terminal.output(&output.text);
            }
            PanelEvent::LogsCleared => self.logs.clear(),
            PanelEvent::Directories(map) => {
                self.form.load_directories(&map);
                self.base_dir = map.base;
            }
            PanelEvent::Listing(listing) => {
                if !self.features.file_manager {
                    return false;
                }
                self.files.apply_listing(listing);
            }
            PanelEvent::Templates(templates) => self.templates = templates,
        }
        true
    }
}
