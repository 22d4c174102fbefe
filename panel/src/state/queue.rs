//! Mirror of the server-side download queue.
//!
//! DESIGN
//! ======
//! A snapshot always replaces the mirror; there is no merge path. When two
//! snapshots race, whichever is applied last is displayed.

#[cfg(test)]
#[path = "queue_test.rs"]
mod queue_test;

use wire::{ItemId, ItemStatus, LogEntry, Platform, QueueItem, QueueSnapshot};

use crate::util::url::short_url;

/// Label shown while the server has not resolved a filename yet.
pub const PENDING_FILENAME: &str = "Detecting...";

/// Gesture bound to the start/stop control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueControl {
    /// Queue is idle; the control starts processing.
    Start,
    /// Queue is processing; the control cancels it.
    Stop,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueueState {
    /// Items in server order.
    pub items: Vec<QueueItem>,
    /// Whether the server is working through the queue.
    pub is_processing: bool,
}

/// Progress details, present only for downloading rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressLine {
    pub percent: u8,
    /// Transfer rate as reported, e.g. `4.2 MB/s`.
    pub speed: String,
    pub eta: String,
}

/// Display model for one queue row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueRow {
    pub id: ItemId,
    /// Resolved filename, or [`PENDING_FILENAME`] until the server knows it.
    pub title: String,
    /// Source URL clipped for display.
    pub short_url: String,
    pub platform: Platform,
    pub status: ItemStatus,
    pub progress: Option<ProgressLine>,
    /// Server note, such as an error reason. Empty when there is none.
    pub message: String,
}

impl QueueState {
    /// Replace the mirror with `snapshot`, handing back any logs it carried.
    pub fn apply_snapshot(&mut self, snapshot: QueueSnapshot) -> Option<Vec<LogEntry>> {
        self.items = snapshot.queue;
        self.is_processing = snapshot.is_processing;
        snapshot.logs
    }

    #[must_use]
    pub fn control(&self) -> QueueControl {
        if self.is_processing { QueueControl::Stop } else { QueueControl::Start }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn find(&self, id: &ItemId) -> Option<&QueueItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    #[must_use]
    pub fn rows(&self) -> Vec<QueueRow> {
        self.items.iter().map(queue_row).collect()
    }
}

fn queue_row(item: &QueueItem) -> QueueRow {
    let progress = (item.status == ItemStatus::Downloading).then(|| ProgressLine {
        percent: item.progress.unwrap_or(0),
        speed: item.speed.clone().unwrap_or_default(),
        eta: item.eta.clone().unwrap_or_default(),
    });
    QueueRow {
        id: item.id.clone(),
        title: item.display_filename().unwrap_or(PENDING_FILENAME).to_owned(),
        short_url: short_url(&item.url),
        platform: item.platform,
        status: item.status,
        progress,
        message: item.message.clone().unwrap_or_default(),
    }
}
