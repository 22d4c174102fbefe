//! Bounded client-side log buffer.

#[cfg(test)]
#[path = "logs_test.rs"]
mod logs_test;

use std::collections::VecDeque;

use wire::LogEntry;

use crate::config::DEFAULT_LOG_CAP;

/// Log lines ordered by arrival, bounded by `cap`; the oldest line is evicted
/// first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    cap: usize,
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::with_cap(DEFAULT_LOG_CAP)
    }
}

impl LogBuffer {
    #[must_use]
    pub fn with_cap(cap: usize) -> Self {
        Self { entries: VecDeque::with_capacity(cap.min(DEFAULT_LOG_CAP)), cap }
    }

    pub fn push(&mut self, entry: LogEntry) {
        if self.cap == 0 {
            return;
        }
        while self.entries.len() >= self.cap {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Replace the buffer with server-persisted logs, keeping the newest.
    pub fn replace(&mut self, entries: Vec<LogEntry>) {
        let skip = entries.len().saturating_sub(self.cap);
        self.entries = entries.into_iter().skip(skip).collect();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }
}
