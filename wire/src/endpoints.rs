//! Endpoint paths, relative to the backend mount point.

pub const DIRECTORIES: &str = "/downloader/directories";
pub const STATE: &str = "/downloader/state";
pub const STATUS: &str = "/downloader/status";
pub const ADD: &str = "/downloader/add";
pub const START: &str = "/downloader/start";
pub const CANCEL: &str = "/downloader/cancel";
pub const REMOVE: &str = "/downloader/remove";
pub const CLEAR: &str = "/downloader/clear";
pub const CLEAR_LOGS: &str = "/downloader/clear-logs";
pub const TEMPLATES: &str = "/downloader/templates";
/// Followed by the template's storage filename.
pub const TEMPLATE_PREFIX: &str = "/downloader/template/";
pub const SAVE_TEMPLATE: &str = "/downloader/save-template";
pub const FILES_LIST: &str = "/downloader/files/list";
pub const FILES_MOVE: &str = "/downloader/files/move";
pub const FILES_COPY: &str = "/downloader/files/copy";
pub const FILES_RENAME: &str = "/downloader/files/rename";
pub const FILES_DELETE: &str = "/downloader/files/delete";
pub const FILES_MKDIR: &str = "/downloader/files/mkdir";
pub const TERMINAL_EXECUTE: &str = "/downloader/terminal/execute";
pub const TERMINAL_RESIZE: &str = "/downloader/terminal/resize";
