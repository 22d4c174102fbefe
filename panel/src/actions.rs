//! Gesture dispatcher: one panel instance bound to one backend.
//!
//! DESIGN
//! ======
//! Each gesture validates against local state first, sends at most the
//! requests it needs, and folds any response back through the reducer.
//! Validation failures never reach the network. Queue gestures do not insert
//! anything locally; the next pushed or fetched snapshot carries the result.
//! File-manager mutations reload the current folder on success.
//!
//! ERROR HANDLING
//! ==============
//! Every gesture returns its own `Result`. A failed request leaves the state
//! as it was before the gesture, except where the backend already accepted
//! part of the work (template loads report those per item).

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use tracing::{info, warn};
use wire::{ItemId, LegacyStartRequest, ListRequest, PushEvent, ResizeRequest};

use crate::config::PanelConfig;
use crate::error::{ActionError, ApiError, ValidationError};
use crate::net::api::ApiClient;
use crate::state::files::FileRequest;
use crate::state::panel::{PanelEvent, PanelState};
use crate::state::queue::QueueControl;
use crate::state::templates::{expand_template, save_request};
use crate::state::terminal::AttachOutcome;

/// One template entry the backend refused.
#[derive(Debug)]
pub struct TemplateFailure {
    pub url: String,
    pub error: ApiError,
}

/// Outcome of [`Panel::load_template`].
#[derive(Debug)]
pub struct TemplateLoadReport {
    pub name: String,
    pub added: usize,
    pub failures: Vec<TemplateFailure>,
}

impl TemplateLoadReport {
    #[must_use]
    pub fn total(&self) -> usize {
        self.added + self.failures.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct Panel {
    state: PanelState,
    api: ApiClient,
}

impl Panel {
    /// Mount a panel against `api`.
    #[must_use]
    pub fn new(api: ApiClient, config: &PanelConfig) -> Self {
        Self { state: PanelState::new(config), api }
    }

    #[must_use]
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Local edits that send nothing: form fields, selection, clipboard.
    pub fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Unmount, handing back the final state.
    #[must_use]
    pub fn dispose(self) -> PanelState {
        self.state
    }

    /// Feed a pushed event through the reducer. Returns whether it changed
    /// anything the panel shows.
    pub fn handle_event(&mut self, event: PushEvent) -> bool {
        match PanelEvent::from_push(event) {
            Some(event) => self.state.apply(event),
            None => false,
        }
    }

    // =========================================================================
    // QUEUE
    // =========================================================================

    /// Fetch directory presets only. Single-download backends have no queue
    /// to mirror.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Api`] when the request fails.
    pub async fn load_directories(&mut self) -> Result<(), ActionError> {
        let directories = self.api.directories().await?;
        self.state.apply(PanelEvent::Directories(directories));
        Ok(())
    }

    /// Fetch directory presets and the current queue snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Api`] when either request fails.
    pub async fn refresh(&mut self) -> Result<(), ActionError> {
        self.load_directories().await?;
        let snapshot = self.api.state().await?;
        self.state.apply(PanelEvent::Snapshot(snapshot));
        Ok(())
    }

    /// Fetch the status object of a single-download backend.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Api`] when the request fails.
    pub async fn refresh_legacy(&mut self) -> Result<(), ActionError> {
        let status = self.api.legacy_status().await?;
        self.state.apply(PanelEvent::LegacyStatus(status));
        Ok(())
    }

    /// Submit the add form, optionally starting the queue afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Validation`] without sending anything when the
    /// form is incomplete, or [`ActionError::Api`] when a request fails.
    pub async fn submit_add(&mut self, auto_start: bool) -> Result<(), ActionError> {
        let request = self.state.form.submission()?;
        self.api.add(&request).await?;
        info!(url = %request.url, directory = %request.directory, "download queued");
        self.state.form.reset_after_submit();
        if auto_start {
            self.api.start().await?;
        }
        Ok(())
    }

    /// Start the form's download directly on a single-download backend,
    /// then mirror its status.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Validation`] before any request when the URL or
    /// directory is missing, or [`ActionError::Api`] when the backend refuses.
    pub async fn submit_legacy(&mut self) -> Result<(), ActionError> {
        let request = LegacyStartRequest::from(self.state.form.submission()?);
        self.api.legacy_start(&request).await?;
        info!(url = %request.url, directory = %request.directory, "download started");
        self.state.form.reset_after_submit();
        self.refresh_legacy().await
    }

    /// Start when idle, cancel when processing. Returns the control that was
    /// triggered.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Api`] when the request fails.
    pub async fn toggle_processing(&mut self) -> Result<QueueControl, ActionError> {
        let control = self.state.queue.control();
        match control {
            QueueControl::Start => self.api.start().await?,
            QueueControl::Stop => self.api.cancel().await?,
        }
        Ok(control)
    }

    /// # Errors
    ///
    /// Returns [`ActionError::Api`] when the request fails.
    pub async fn remove(&mut self, id: &ItemId) -> Result<(), ActionError> {
        self.api.remove(id).await?;
        Ok(())
    }

    /// Drop completed, failed, and cancelled items.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Api`] when the request fails.
    pub async fn clear_finished(&mut self) -> Result<(), ActionError> {
        self.api.clear().await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::FeatureDisabled`] without the logs section,
    /// or [`ActionError::Api`] when the request fails.
    pub async fn clear_logs(&mut self) -> Result<(), ActionError> {
        require(self.state.features.logs, "logs")?;
        self.api.clear_logs().await?;
        self.state.apply(PanelEvent::LogsCleared);
        Ok(())
    }

    // =========================================================================
    // TEMPLATES
    // =========================================================================

    /// # Errors
    ///
    /// Returns [`ActionError::Api`] when the request fails.
    pub async fn list_templates(&mut self) -> Result<(), ActionError> {
        let templates = self.api.templates().await?;
        self.state.apply(PanelEvent::Templates(templates));
        Ok(())
    }

    /// Queue every download of a template, one request at a time.
    ///
    /// A refused entry does not stop the rest; it is recorded in the report.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Api`] only when the template itself cannot be
    /// fetched.
    pub async fn load_template(&mut self, filename: &str) -> Result<TemplateLoadReport, ActionError> {
        let body = self.api.template(filename).await?;
        let mut report = TemplateLoadReport { name: body.name.clone(), added: 0, failures: Vec::new() };

        for request in expand_template(&body) {
            match self.api.add(&request).await {
                Ok(()) => report.added += 1,
                Err(error) => {
                    warn!(template = %filename, url = %request.url, %error, "template entry rejected");
                    report.failures.push(TemplateFailure { url: request.url, error });
                }
            }
        }

        info!(template = %filename, added = report.added, failed = report.failures.len(), "template loaded");
        Ok(report)
    }

    /// Save the current queue as a template, then refresh the template list.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyQueue`] or
    /// [`ValidationError::MissingName`] before sending, or
    /// [`ActionError::Api`] when a request fails.
    pub async fn save_template(&mut self, name: &str, description: &str) -> Result<(), ActionError> {
        let request = save_request(&self.state.queue.items, name, description)?;
        self.api.save_template(&request).await?;
        info!(name = %request.name, downloads = request.downloads.len(), "template saved");
        self.list_templates().await
    }

    // =========================================================================
    // FILES
    // =========================================================================

    /// Navigate to `path` (relative to the browsable root).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::FeatureDisabled`] without the file manager,
    /// or [`ActionError::Api`] when the listing fails.
    pub async fn list_dir(&mut self, path: &str) -> Result<(), ActionError> {
        require(self.state.features.file_manager, "file manager")?;
        let request = self.state.files.navigate_request(path);
        self.fetch_listing(&request).await
    }

    /// Enter the child folder `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Validation`] when `name` is not a listed folder,
    /// or [`ActionError::Api`] when the listing fails.
    pub async fn open_dir(&mut self, name: &str) -> Result<(), ActionError> {
        require(self.state.features.file_manager, "file manager")?;
        let request = self.state.files.open_request(name)?;
        self.fetch_listing(&request).await
    }

    /// Go up one level. A no-op at the root.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Api`] when the listing fails.
    pub async fn parent_dir(&mut self) -> Result<(), ActionError> {
        require(self.state.features.file_manager, "file manager")?;
        match self.state.files.parent_request() {
            Some(request) => self.fetch_listing(&request).await,
            None => Ok(()),
        }
    }

    /// # Errors
    ///
    /// Returns [`ActionError::Api`] when the listing fails.
    pub async fn reload_dir(&mut self) -> Result<(), ActionError> {
        require(self.state.features.file_manager, "file manager")?;
        let request = self.state.files.reload_request();
        self.fetch_listing(&request).await
    }

    /// Paste the clipboard entry into the current folder.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ClipboardEmpty`] before sending, or
    /// [`ActionError::Api`] when the transfer or reload fails.
    pub async fn paste(&mut self) -> Result<(), ActionError> {
        require(self.state.features.file_manager, "file manager")?;
        match self.state.files.paste_request()? {
            FileRequest::Copy(transfer) => self.api.copy_file(&transfer).await?,
            FileRequest::Move(transfer) => self.api.move_file(&transfer).await?,
        }
        self.state.files.paste_succeeded();
        self.reload_dir().await
    }

    /// Rename the selected entry.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Validation`] without a selection or name, or
    /// [`ActionError::Api`] when a request fails.
    pub async fn rename(&mut self, new_name: &str) -> Result<(), ActionError> {
        require(self.state.features.file_manager, "file manager")?;
        let request = self.state.files.rename_request(new_name)?;
        self.api.rename_file(&request).await?;
        self.reload_dir().await
    }

    /// Delete the selected entry.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoSelection`] before sending, or
    /// [`ActionError::Api`] when a request fails.
    pub async fn delete(&mut self) -> Result<(), ActionError> {
        require(self.state.features.file_manager, "file manager")?;
        let request = self.state.files.delete_request()?;
        self.api.delete_file(&request).await?;
        self.state.files.clear_selection();
        self.reload_dir().await
    }

    /// Create folder `name` inside the current folder.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingName`] before sending, or
    /// [`ActionError::Api`] when a request fails.
    pub async fn mkdir(&mut self, name: &str) -> Result<(), ActionError> {
        require(self.state.features.file_manager, "file manager")?;
        let request = self.state.files.mkdir_request(name)?;
        self.api.make_dir(&request).await?;
        self.reload_dir().await
    }

    async fn fetch_listing(&mut self, request: &ListRequest) -> Result<(), ActionError> {
        let listing = self.api.list_files(request).await?;
        self.state.apply(PanelEvent::Listing(listing));
        Ok(())
    }

    // =========================================================================
    // TERMINAL
    // =========================================================================

    /// Attach the terminal to `container`, starting the remote session the
    /// first time.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Api`] when the session cannot be started; the
    /// next attach tries again.
    pub async fn terminal_attach(&mut self, container: u64) -> Result<AttachOutcome, ActionError> {
        require(self.state.features.terminal, "terminal")?;
        let outcome = self.state.terminal.attach(container);
        if let AttachOutcome::Initialized { start } = &outcome {
            if let Err(error) = self.api.terminal_execute(start).await {
                self.state.terminal.abandon();
                return Err(error.into());
            }
            info!(container, "terminal session started");
        }
        Ok(outcome)
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::TerminalNotInitialized`] before the first
    /// attach, or [`ActionError::Api`] when the request fails.
    pub async fn terminal_input(&mut self, data: &str) -> Result<(), ActionError> {
        require(self.state.features.terminal, "terminal")?;
        let request = self.state.terminal.input(data)?;
        self.api.terminal_execute(&request).await?;
        Ok(())
    }

    /// Report a viewport change. Returns the size sent, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Api`] when the request fails.
    pub async fn terminal_resize(&mut self, cols: u16, rows: u16) -> Result<Option<ResizeRequest>, ActionError> {
        require(self.state.features.terminal, "terminal")?;
        let Some(request) = self.state.terminal.resize(cols, rows) else {
            return Ok(None);
        };
        if let Err(error) = self.api.terminal_resize(request).await {
            self.state.terminal.invalidate_size();
            return Err(error.into());
        }
        Ok(Some(request))
    }
}

fn require(enabled: bool, feature: &'static str) -> Result<(), ValidationError> {
    if enabled { Ok(()) } else { Err(ValidationError::FeatureDisabled(feature)) }
}
