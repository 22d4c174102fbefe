//! Directory presets and download templates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Response of `GET /downloader/directories`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryMap {
    /// Preset label (e.g. `"diffusion_models"`) to absolute path.
    #[serde(default)]
    pub directories: BTreeMap<String, String>,
    /// Backend installation root, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

/// Listing entry of `GET /downloader/templates`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSummary {
    /// Storage key used to fetch the body.
    pub filename: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Number of downloads in the template.
    #[serde(default)]
    pub count: usize,
}

/// Response of `GET /downloader/templates`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateList {
    #[serde(default)]
    pub templates: Vec<TemplateSummary>,
}

/// One download descriptor inside a template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDownload {
    pub url: String,
    pub directory: String,
    #[serde(default)]
    pub filename: Option<String>,
}

/// Response of `GET /downloader/template/{filename}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub downloads: Vec<TemplateDownload>,
}

/// Body of `POST /downloader/save-template`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveTemplateRequest {
    pub name: String,
    pub description: String,
    pub downloads: Vec<TemplateDownload>,
}
