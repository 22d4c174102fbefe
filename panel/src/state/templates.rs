//! Template packaging and expansion.

#[cfg(test)]
#[path = "templates_test.rs"]
mod templates_test;

use wire::{AddRequest, QueueItem, SaveTemplateRequest, TemplateBody, TemplateDownload};

use crate::error::ValidationError;
use crate::util::url::extract_filename;

/// Package the current queue as a named template.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyQueue`] or [`ValidationError::MissingName`].
pub fn save_request(queue: &[QueueItem], name: &str, description: &str) -> Result<SaveTemplateRequest, ValidationError> {
    if queue.is_empty() {
        return Err(ValidationError::EmptyQueue);
    }
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    let downloads = queue
        .iter()
        .map(|item| TemplateDownload {
            url: item.url.clone(),
            directory: item.directory.clone(),
            filename: item.preferred_filename().map(str::to_owned),
        })
        .collect();
    Ok(SaveTemplateRequest { name: name.to_owned(), description: description.trim().to_owned(), downloads })
}

/// Add requests for every template entry, in template order.
///
/// Entries without a filename get one from the URL path when its last segment
/// looks like a filename; otherwise the backend detects it.
#[must_use]
pub fn expand_template(body: &TemplateBody) -> Vec<AddRequest> {
    body.downloads
        .iter()
        .map(|download| AddRequest {
            url: download.url.clone(),
            directory: download.directory.clone(),
            filename: download
                .filename
                .clone()
                .filter(|name| !name.is_empty())
                .or_else(|| extract_filename(&download.url)),
            provider: None,
        })
        .collect()
}
