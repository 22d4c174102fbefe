//! Typed HTTP client for the `/downloader/*` endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Every response body is read as JSON. A body of the form `{ "error": ... }`
//! is a logical rejection and becomes [`ApiError::Rejected`] whatever the HTTP
//! status; any other non-2xx answer becomes [`ApiError::Status`]. Empty
//! bodies are acks.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use wire::endpoints;
use wire::{
    AddRequest, DirectoryListing, DirectoryMap, ExecuteRequest, ItemId, LegacyStartRequest, LegacyStatus, ListRequest, PathRequest,
    QueueSnapshot, RemoveRequest, RenameRequest, ResizeRequest, SaveTemplateRequest, TemplateBody, TemplateList,
    TemplateSummary, TransferRequest,
};

use crate::error::ApiError;

/// Default backend address of a local host UI.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8188";
/// Default mount point of the downloader routes.
pub const DEFAULT_API_PREFIX: &str = "/api";

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_prefix: String,
}

impl ApiClient {
    /// Build a client for `base_url` with routes mounted under `api_prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] unless `base_url` is `http(s)://`.
    pub fn new(base_url: &str, api_prefix: &str) -> Result<Self, ApiError> {
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::InvalidBaseUrl(base_url.to_owned()));
        }
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned(), api_prefix: normalize_prefix(api_prefix) })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of `path` under the configured prefix.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.api_prefix, path)
    }

    // =========================================================================
    // QUEUE
    // =========================================================================

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejection.
    pub async fn directories(&self) -> Result<DirectoryMap, ApiError> {
        decode(self.send(Method::GET, endpoints::DIRECTORIES, None::<&()>).await?)
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejection.
    pub async fn state(&self) -> Result<QueueSnapshot, ApiError> {
        decode(self.send(Method::GET, endpoints::STATE, None::<&()>).await?)
    }

    /// Status of a single-download backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejection.
    pub async fn legacy_status(&self) -> Result<LegacyStatus, ApiError> {
        decode(self.send(Method::GET, endpoints::STATUS, None::<&()>).await?)
    }

    /// Start one download immediately on a single-download backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejection.
    pub async fn legacy_start(&self, request: &LegacyStartRequest) -> Result<(), ApiError> {
        self.post_ack(endpoints::START, Some(request)).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejection.
    pub async fn add(&self, request: &AddRequest) -> Result<(), ApiError> {
        self.post_ack(endpoints::ADD, Some(request)).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejection.
    pub async fn start(&self) -> Result<(), ApiError> {
        self.post_ack(endpoints::START, None::<&()>).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejection.
    pub async fn cancel(&self) -> Result<(), ApiError> {
        self.post_ack(endpoints::CANCEL, None::<&()>).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejection.
    pub async fn remove(&self, id: &ItemId) -> Result<(), ApiError> {
        self.post_ack(endpoints::REMOVE, Some(&RemoveRequest { id: id.clone() })).await
    }

    /// Drop finished items from the queue.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejection.
    pub async fn clear(&self) -> Result<(), ApiError> {
        self.post_ack(endpoints::CLEAR, None::<&()>).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejection.
    pub async fn clear_logs(&self) -> Result<(), ApiError> {
        self.post_ack(endpoints::CLEAR_LOGS, None::<&()>).await
    }

    // =========================================================================
    // TEMPLATES
    // =========================================================================

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejection.
    pub async fn templates(&self) -> Result<Vec<TemplateSummary>, ApiError> {
        let list: TemplateList = decode(self.send(Method::GET, endpoints::TEMPLATES, None::<&()>).await?)?;
        Ok(list.templates)
    }

    /// Fetch one template body by its storage filename.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejection.
    pub async fn template(&self, filename: &str) -> Result<TemplateBody, ApiError> {
        let path = format!("{}{}", endpoints::TEMPLATE_PREFIX, urlencoding::encode(filename));
        decode(self.send(Method::GET, &path, None::<&()>).await?)
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejection.
    pub async fn save_template(&self, request: &SaveTemplateRequest) -> Result<(), ApiError> {
        self.post_ack(endpoints::SAVE_TEMPLATE, Some(request)).await
    }

    // =========================================================================
    // FILES
    // =========================================================================

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejection.
    pub async fn list_files(&self, request: &ListRequest) -> Result<DirectoryListing, ApiError> {
        decode(self.send(Method::POST, endpoints::FILES_LIST, Some(request)).await?)
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejection.
    pub async fn move_file(&self, request: &TransferRequest) -> Result<(), ApiError> {
        self.post_ack(endpoints::FILES_MOVE, Some(request)).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejection.
    pub async fn copy_file(&self, request: &TransferRequest) -> Result<(), ApiError> {
        self.post_ack(endpoints::FILES_COPY, Some(request)).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejection.
    pub async fn rename_file(&self, request: &RenameRequest) -> Result<(), ApiError> {
        self.post_ack(endpoints::FILES_RENAME, Some(request)).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejection.
    pub async fn delete_file(&self, request: &PathRequest) -> Result<(), ApiError> {
        self.post_ack(endpoints::FILES_DELETE, Some(request)).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejection.
    pub async fn make_dir(&self, request: &PathRequest) -> Result<(), ApiError> {
        self.post_ack(endpoints::FILES_MKDIR, Some(request)).await
    }

    // =========================================================================
    // TERMINAL
    // =========================================================================

    /// Send input to the remote session. An empty command starts it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejection.
    pub async fn terminal_execute(&self, request: &ExecuteRequest) -> Result<(), ApiError> {
        self.post_ack(endpoints::TERMINAL_EXECUTE, Some(request)).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejection.
    pub async fn terminal_resize(&self, request: ResizeRequest) -> Result<(), ApiError> {
        self.post_ack(endpoints::TERMINAL_RESIZE, Some(&request)).await
    }

    // =========================================================================
    // TRANSPORT
    // =========================================================================

    async fn post_ack<B: Serialize + ?Sized>(&self, path: &str, body: Option<&B>) -> Result<(), ApiError> {
        self.send(Method::POST, path, body).await?;
        Ok(())
    }

    async fn send<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Value, ApiError> {
        let url = self.endpoint(path);
        debug!(%method, %url, "downloader request");

        let request = self.http.request(method, &url);
        let request = if let Some(json) = body { request.json(json) } else { request };

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        interpret(status.as_u16(), status.is_success(), &text)
    }
}

/// Classify a response body. Split out so the rules are testable offline.
fn interpret(status: u16, success: bool, text: &str) -> Result<Value, ApiError> {
    let value = if text.trim().is_empty() {
        Value::Null
    } else {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => value,
            Err(_) if !success => return Err(ApiError::Status { status, body: text.to_owned() }),
            Err(error) => return Err(ApiError::Decode(error)),
        }
    };

    if let Some(message) = wire::rejection(&value) {
        debug!(status, %message, "downloader rejected request");
        return Err(ApiError::Rejected(message.to_owned()));
    }
    if !success {
        return Err(ApiError::Status { status, body: value.to_string() });
    }
    Ok(value)
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    Ok(serde_json::from_value(value)?)
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() { String::new() } else { format!("/{trimmed}") }
}
