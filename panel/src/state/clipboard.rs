//! Single-slot file clipboard.
//!
//! DESIGN
//! ======
//! `empty -> set(copy|cut) -> paste`. A successful paste clears a cut entry
//! and keeps a copy entry for repeated pastes. Setting a new entry discards
//! the previous one; there is no stack.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipboardMode {
    Copy,
    Cut,
}

/// A copied or cut item waiting for paste.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClipboardEntry {
    /// Source path, relative to the models root.
    pub path: String,
    pub mode: ClipboardMode,
}

/// Single-slot clipboard; a new copy or cut replaces the previous entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clipboard {
    slot: Option<ClipboardEntry>,
}

impl Clipboard {
    pub fn set(&mut self, path: impl Into<String>, mode: ClipboardMode) {
        self.slot = Some(ClipboardEntry { path: path.into(), mode });
    }

    #[must_use]
    pub fn entry(&self) -> Option<&ClipboardEntry> {
        self.slot.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Record a completed paste.
    pub fn pasted(&mut self) {
        if self.slot.as_ref().is_some_and(|entry| entry.mode == ClipboardMode::Cut) {
            self.slot = None;
        }
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}
