//! File-manager navigation, selection, and clipboard state.
//!
//! DESIGN
//! ======
//! Every gesture here only builds the request for the backend. The listing
//! changes when the backend answers (`apply_listing`), and every successful
//! mutation is followed by a reload of the current folder instead of a local
//! patch. Selection is single-item.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use wire::{DirectoryListing, FileEntry, ListRequest, PathRequest, RenameRequest, TransferRequest};

use super::clipboard::{Clipboard, ClipboardMode};
use crate::error::ValidationError;

/// Breadcrumb label of the navigable root.
pub const ROOT_LABEL: &str = "Root";

/// One breadcrumb segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// Folder this segment navigates to.
    pub path: String,
}

/// Transfer produced by a paste.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileRequest {
    Copy(TransferRequest),
    Move(TransferRequest),
}

/// Entries of the context menu for the selected item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextAction {
    Open,
    Copy,
    Cut,
    Paste,
    Rename,
    Delete,
}

/// File manager view: current folder, its entries, and a single selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileManagerState {
    path: String,
    items: Vec<FileEntry>,
    selected: Option<String>,
    clipboard: Clipboard,
    loaded: bool,
}

impl FileManagerState {
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn items(&self) -> &[FileEntry] {
        &self.items
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    /// Whether a listing has been received yet.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&FileEntry> {
        self.items.iter().find(|entry| entry.name == name)
    }

    /// Replace the listing with the backend's answer.
    pub fn apply_listing(&mut self, listing: DirectoryListing) {
        let path = normalize_path(&listing.path);
        if path != self.path {
            self.selected = None;
        }
        self.path = path;
        self.items = listing.items;
        self.loaded = true;
        if self.selected.as_deref().is_some_and(|name| self.entry(name).is_none()) {
            self.selected = None;
        }
    }

    #[must_use]
    pub fn navigate_request(&self, path: &str) -> ListRequest {
        ListRequest { path: normalize_path(path) }
    }

    #[must_use]
    pub fn reload_request(&self) -> ListRequest {
        ListRequest { path: self.path.clone() }
    }

    /// Request for the parent folder; `None` at the root.
    #[must_use]
    pub fn parent_request(&self) -> Option<ListRequest> {
        if self.path.is_empty() {
            return None;
        }
        let parent = self.path.rsplit_once('/').map_or("", |(parent, _)| parent);
        Some(ListRequest { path: parent.to_owned() })
    }

    /// Request to enter the child folder `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownEntry`] or
    /// [`ValidationError::NotADirectory`].
    pub fn open_request(&self, name: &str) -> Result<ListRequest, ValidationError> {
        let entry = self.entry(name).ok_or_else(|| ValidationError::UnknownEntry(name.to_owned()))?;
        if !entry.is_dir {
            return Err(ValidationError::NotADirectory(name.to_owned()));
        }
        Ok(ListRequest { path: join_path(&self.path, name) })
    }

    /// Breadcrumb derived from the current path.
    #[must_use]
    pub fn breadcrumb(&self) -> Vec<Crumb> {
        let mut crumbs = vec![Crumb { label: ROOT_LABEL.to_owned(), path: String::new() }];
        let mut acc = String::new();
        for segment in self.path.split('/').filter(|s| !s.is_empty()) {
            acc = join_path(&acc, segment);
            crumbs.push(Crumb { label: segment.to_owned(), path: acc.clone() });
        }
        crumbs
    }

    /// Select a single entry, replacing any prior selection.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownEntry`] when `name` is not listed.
    pub fn select(&mut self, name: &str) -> Result<(), ValidationError> {
        if self.entry(name).is_none() {
            return Err(ValidationError::UnknownEntry(name.to_owned()));
        }
        self.selected = Some(name.to_owned());
        Ok(())
    }

    /// Right-click: select the entry under the cursor, then offer actions.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownEntry`] when `name` is not listed.
    pub fn context_select(&mut self, name: &str) -> Result<Vec<ContextAction>, ValidationError> {
        self.select(name)?;
        Ok(self.context_actions())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn context_actions(&self) -> Vec<ContextAction> {
        let Some(entry) = self.selected.as_deref().and_then(|name| self.entry(name)) else {
            return Vec::new();
        };
        let mut actions = Vec::with_capacity(6);
        if entry.is_dir {
            actions.push(ContextAction::Open);
        }
        actions.extend([ContextAction::Copy, ContextAction::Cut]);
        if !self.clipboard.is_empty() {
            actions.push(ContextAction::Paste);
        }
        actions.extend([ContextAction::Rename, ContextAction::Delete]);
        actions
    }

    #[must_use]
    pub fn selected_path(&self) -> Option<String> {
        self.selected.as_deref().map(|name| join_path(&self.path, name))
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::NoSelection`].
    pub fn copy_selected(&mut self) -> Result<(), ValidationError> {
        self.set_clipboard(ClipboardMode::Copy)
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::NoSelection`].
    pub fn cut_selected(&mut self) -> Result<(), ValidationError> {
        self.set_clipboard(ClipboardMode::Cut)
    }

    fn set_clipboard(&mut self, mode: ClipboardMode) -> Result<(), ValidationError> {
        let path = self.selected_path().ok_or(ValidationError::NoSelection)?;
        self.clipboard.set(path, mode);
        Ok(())
    }

    /// Transfer of the clipboard entry into the current folder.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ClipboardEmpty`].
    pub fn paste_request(&self) -> Result<FileRequest, ValidationError> {
        let entry = self.clipboard.entry().ok_or(ValidationError::ClipboardEmpty)?;
        let transfer = TransferRequest {
            source: entry.path.clone(),
            destination: join_path(&self.path, basename(&entry.path)),
        };
        Ok(match entry.mode {
            ClipboardMode::Copy => FileRequest::Copy(transfer),
            ClipboardMode::Cut => FileRequest::Move(transfer),
        })
    }

    /// Record that the backend accepted the paste.
    pub fn paste_succeeded(&mut self) {
        self.clipboard.pasted();
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::NoSelection`] or [`ValidationError::MissingName`].
    pub fn rename_request(&self, new_name: &str) -> Result<RenameRequest, ValidationError> {
        let path = self.selected_path().ok_or(ValidationError::NoSelection)?;
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        Ok(RenameRequest { path, new_name: new_name.to_owned() })
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::NoSelection`].
    pub fn delete_request(&self) -> Result<PathRequest, ValidationError> {
        let path = self.selected_path().ok_or(ValidationError::NoSelection)?;
        Ok(PathRequest { path })
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::MissingName`].
    pub fn mkdir_request(&self, name: &str) -> Result<PathRequest, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        Ok(PathRequest { path: join_path(&self.path, name) })
    }
}

/// Collapse repeated and surrounding slashes: `/a//b/` becomes `a/b`.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    path.split('/').filter(|segment| !segment.is_empty()).collect::<Vec<_>>().join("/")
}

#[must_use]
pub fn join_path(base: &str, name: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() { name.to_owned() } else { format!("{base}/{name}") }
}

#[must_use]
pub fn basename(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or(path)
}

/// Split `a/b/c` into (`a/b`, `c`).
#[must_use]
pub fn split_parent(path: &str) -> (String, String) {
    let normalized = normalize_path(path);
    match normalized.rsplit_once('/') {
        Some((parent, name)) => (parent.to_owned(), name.to_owned()),
        None => (String::new(), normalized),
    }
}
