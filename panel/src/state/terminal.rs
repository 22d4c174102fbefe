//! Remote terminal bridge state.
//!
//! DESIGN
//! ======
//! The terminal is initialized once per panel lifetime. Later attaches move
//! the existing session to a new container instead of starting another one,
//! so scrollback survives tab switches. Input and resize only produce request
//! bodies; the caller sends them.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use wire::{ExecuteRequest, ResizeRequest};

use crate::config::DEFAULT_TERMINAL_SCROLLBACK;
use crate::error::ValidationError;

/// Result of [`TerminalState::attach`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttachOutcome {
    /// First attach. `start` opens the remote session.
    Initialized { start: ExecuteRequest },
    /// The existing session moved to a new container.
    Reattached,
}

/// Remote shell session as seen by one panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerminalState {
    initialized: bool,
    container: Option<u64>,
    size: Option<ResizeRequest>,
    scrollback: String,
    scrollback_cap: usize,
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::with_scrollback(DEFAULT_TERMINAL_SCROLLBACK)
    }
}

impl TerminalState {
    #[must_use]
    pub fn with_scrollback(cap: usize) -> Self {
        Self { initialized: false, container: None, size: None, scrollback: String::new(), scrollback_cap: cap }
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Container the terminal is currently attached to.
    #[must_use]
    pub fn container(&self) -> Option<u64> {
        self.container
    }

    #[must_use]
    pub fn size(&self) -> Option<ResizeRequest> {
        self.size
    }

    #[must_use]
    pub fn scrollback(&self) -> &str {
        &self.scrollback
    }

    /// Attach to `container`, initializing the session on first use.
    pub fn attach(&mut self, container: u64) -> AttachOutcome {
        self.container = Some(container);
        if self.initialized {
            return AttachOutcome::Reattached;
        }
        self.initialized = true;
        AttachOutcome::Initialized { start: ExecuteRequest { command: String::new() } }
    }

    /// Leave the container. The session and scrollback are kept.
    pub fn detach(&mut self) {
        self.container = None;
    }

    /// Undo a first attach whose start request failed, so the next attach
    /// initializes again.
    pub fn abandon(&mut self) {
        self.initialized = false;
        self.container = None;
        self.size = None;
    }

    /// Forget the last reported size so the next resize is sent again.
    pub fn invalidate_size(&mut self) {
        self.size = None;
    }

    /// Forward keystrokes to the remote session.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TerminalNotInitialized`] before the first attach.
    pub fn input(&self, data: &str) -> Result<ExecuteRequest, ValidationError> {
        if !self.initialized {
            return Err(ValidationError::TerminalNotInitialized);
        }
        Ok(ExecuteRequest { command: data.to_owned() })
    }

    /// Record a new viewport size. Yields a request only when the size changed.
    pub fn resize(&mut self, cols: u16, rows: u16) -> Option<ResizeRequest> {
        if !self.initialized || cols == 0 || rows == 0 {
            return None;
        }
        let next = ResizeRequest { cols, rows };
        if self.size == Some(next) {
            return None;
        }
        self.size = Some(next);
        Some(next)
    }

    /// Append pushed output, dropping the oldest text past the scrollback cap.
    pub fn output(&mut self, text: &str) {
        self.scrollback.push_str(text);
        if self.scrollback.len() <= self.scrollback_cap {
            return;
        }
        let mut cut = self.scrollback.len() - self.scrollback_cap;
        while !self.scrollback.is_char_boundary(cut) {
            cut += 1;
        }
        self.scrollback.drain(..cut);
    }
}
