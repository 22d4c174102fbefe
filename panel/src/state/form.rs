//! Add-download form state and validation.
//!
//! DESIGN
//! ======
//! The form only checks presence: a non-empty URL and a resolved directory.
//! Platform detection is a badge for the user; the backend classifies the URL
//! again on its own.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use wire::{AddRequest, DirectoryMap, Platform, Provider};

use crate::error::ValidationError;
use crate::util::format::directory_label;
use crate::util::url::{detect_platform, extract_filename};

/// Label of the escape hatch that reveals a free-text directory field.
pub const CUSTOM_DIRECTORY_LABEL: &str = "Custom Path...";

/// A preset target directory offered by the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryOption {
    /// Backend key, e.g. `loras`.
    pub key: String,
    /// Display label, e.g. `Loras`.
    pub label: String,
    pub path: String,
}

/// Current directory selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DirectoryChoice {
    #[default]
    Unselected,
    Preset(String),
    Custom,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddForm {
    /// Source URL as typed.
    pub url: String,
    /// Filename override; empty lets the server detect one.
    pub filename: String,
    pub directory: DirectoryChoice,
    /// Free-text target, used when `directory` is [`DirectoryChoice::Custom`].
    pub custom_directory: String,
    /// Transfer backend, sent only when provider choice is enabled.
    pub provider: Provider,
    /// Badge for the current URL; `None` hides it.
    pub platform: Option<Platform>,
    /// Directory presets from the backend.
    pub options: Vec<DirectoryOption>,
    /// Whether the form section is folded away.
    pub collapsed: bool,
    generic_url_min_len: usize,
    provider_select: bool,
}

impl AddForm {
    #[must_use]
    pub fn new(generic_url_min_len: usize, provider_select: bool) -> Self {
        Self {
            url: String::new(),
            filename: String::new(),
            directory: DirectoryChoice::Unselected,
            custom_directory: String::new(),
            provider: Provider::default(),
            platform: None,
            options: Vec::new(),
            collapsed: false,
            generic_url_min_len,
            provider_select,
        }
    }

    /// Replace directory presets. A preset selection that no longer exists
    /// falls back to unselected.
    pub fn load_directories(&mut self, map: &DirectoryMap) {
        self.options = map
            .directories
            .iter()
            .map(|(key, path)| DirectoryOption { key: key.clone(), label: directory_label(key), path: path.clone() })
            .collect();
        if let DirectoryChoice::Preset(path) = &self.directory {
            if !self.options.iter().any(|option| &option.path == path) {
                self.directory = DirectoryChoice::Unselected;
            }
        }
    }

    /// Update the URL, refresh the platform badge, and autofill the filename
    /// for HuggingFace links when the user has not typed one.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
        self.platform = detect_platform(&self.url, self.generic_url_min_len);
        if self.platform == Some(Platform::Huggingface) && self.filename.is_empty() {
            if let Some(name) = extract_filename(&self.url) {
                self.filename = name;
            }
        }
    }

    pub fn set_filename(&mut self, filename: impl Into<String>) {
        self.filename = filename.into();
    }

    pub fn set_provider(&mut self, provider: Provider) {
        self.provider = provider;
    }

    pub fn select_directory(&mut self, choice: DirectoryChoice) {
        self.directory = choice;
    }

    pub fn set_custom_directory(&mut self, path: impl Into<String>) {
        self.custom_directory = path.into();
    }

    /// Select a preset by key, label, or path; anything else becomes a custom
    /// path.
    pub fn choose_directory(&mut self, input: &str) {
        let input = input.trim();
        let preset = self.options.iter().find(|option| {
            option.key == input || option.path == input || option.label.eq_ignore_ascii_case(input)
        });
        match preset {
            Some(option) => self.directory = DirectoryChoice::Preset(option.path.clone()),
            None if input.is_empty() => self.directory = DirectoryChoice::Unselected,
            None => {
                self.directory = DirectoryChoice::Custom;
                self.custom_directory = input.to_owned();
            }
        }
    }

    /// Whether the free-text directory field is shown.
    #[must_use]
    pub fn custom_directory_visible(&self) -> bool {
        self.directory == DirectoryChoice::Custom
    }

    /// Target directory after resolving the custom escape hatch.
    #[must_use]
    pub fn resolved_directory(&self) -> Option<&str> {
        let dir = match &self.directory {
            DirectoryChoice::Unselected => return None,
            DirectoryChoice::Preset(path) => path.as_str(),
            DirectoryChoice::Custom => self.custom_directory.trim(),
        };
        (!dir.is_empty()).then_some(dir)
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Validate the form and build the add request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingUrl`] or
    /// [`ValidationError::MissingDirectory`]; nothing may be sent in that case.
    pub fn submission(&self) -> Result<AddRequest, ValidationError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ValidationError::MissingUrl);
        }
        let directory = self.resolved_directory().ok_or(ValidationError::MissingDirectory)?;
        let filename = self.filename.trim();
        Ok(AddRequest {
            url: url.to_owned(),
            directory: directory.to_owned(),
            filename: (!filename.is_empty()).then(|| filename.to_owned()),
            provider: self.provider_select.then_some(self.provider),
        })
    }

    /// Clear the per-download fields after a successful submission. The
    /// directory and provider stay selected for the next download.
    pub fn reset_after_submit(&mut self) {
        self.url.clear();
        self.filename.clear();
        self.platform = None;
    }
}
