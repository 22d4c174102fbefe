//! File-manager payloads. Paths are `/`-joined and relative to the backend's
//! navigable root.

use serde::{Deserialize, Serialize};

/// One entry of a directory listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    #[serde(default)]
    pub is_dir: bool,
    /// Size in bytes; zero for directories.
    #[serde(default)]
    pub size: u64,
}

/// Response of `POST /downloader/files/list`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryListing {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub items: Vec<FileEntry>,
}

/// Body of `POST /downloader/files/list`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRequest {
    pub path: String,
}

/// Body of `POST /downloader/files/move` and `POST /downloader/files/copy`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub source: String,
    pub destination: String,
}

/// Body of `POST /downloader/files/rename`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRequest {
    pub path: String,
    pub new_name: String,
}

/// Body of `POST /downloader/files/delete` and `POST /downloader/files/mkdir`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRequest {
    pub path: String,
}
