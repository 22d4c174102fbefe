//! Panel configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Optional sections (logs, terminal, file manager, provider choice) are a
//! capability set on one panel implementation instead of separate copies of
//! the widget.

use crate::error::ConfigError;
use crate::util::url::DEFAULT_GENERIC_URL_MIN_LEN;

pub const DEFAULT_LOG_CAP: usize = 100;
pub const DEFAULT_TERMINAL_SCROLLBACK: usize = 64 * 1024;

/// Optional panel sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Features {
    pub logs: bool,
    pub terminal: bool,
    pub file_manager: bool,
    pub provider_select: bool,
}

impl Features {
    /// Every optional section enabled.
    #[must_use]
    pub fn all() -> Self {
        Self { logs: true, terminal: true, file_manager: true, provider_select: true }
    }

    /// Queue and add form only.
    #[must_use]
    pub fn none() -> Self {
        Self { logs: false, terminal: false, file_manager: false, provider_select: false }
    }

    /// Parse a comma-separated feature list such as `logs,files`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownFeature`] for an unrecognized name.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let mut features = Self::none();
        for name in raw.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            match name.to_ascii_lowercase().as_str() {
                "all" => features = Self::all(),
                "none" => features = Self::none(),
                "logs" => features.logs = true,
                "terminal" => features.terminal = true,
                "files" | "file_manager" => features.file_manager = true,
                "provider" | "provider_select" => features.provider_select = true,
                _ => return Err(ConfigError::UnknownFeature(name.to_owned())),
            }
        }
        Ok(features)
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelConfig {
    pub features: Features,
    /// Unrecognized URLs longer than this many characters get the `other` badge.
    pub generic_url_min_len: usize,
    pub log_cap: usize,
    /// Terminal scrollback retained, in bytes.
    pub terminal_scrollback: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            features: Features::all(),
            generic_url_min_len: DEFAULT_GENERIC_URL_MIN_LEN,
            log_cap: DEFAULT_LOG_CAP,
            terminal_scrollback: DEFAULT_TERMINAL_SCROLLBACK,
        }
    }
}

impl PanelConfig {
    /// Build panel config from environment variables.
    ///
    /// Optional:
    /// - `DOWNLOADER_FEATURES`: comma list of `logs,terminal,files,provider`,
    ///   or `all` (default) / `none`
    /// - `DOWNLOADER_GENERIC_URL_MIN_LEN`: default 10
    /// - `DOWNLOADER_LOG_CAP`: default 100
    /// - `DOWNLOADER_TERMINAL_SCROLLBACK`: default 65536
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for unknown features or non-numeric limits.
    pub fn from_env() -> Result<Self, ConfigError> {
        let features = match std::env::var("DOWNLOADER_FEATURES") {
            Ok(raw) => Features::parse(&raw)?,
            Err(_) => Features::all(),
        };
        Ok(Self {
            features,
            generic_url_min_len: env_parse_usize("DOWNLOADER_GENERIC_URL_MIN_LEN", DEFAULT_GENERIC_URL_MIN_LEN)?,
            log_cap: env_parse_usize("DOWNLOADER_LOG_CAP", DEFAULT_LOG_CAP)?,
            terminal_scrollback: env_parse_usize("DOWNLOADER_TERMINAL_SCROLLBACK", DEFAULT_TERMINAL_SCROLLBACK)?,
        })
    }
}

fn env_parse_usize(var: &'static str, default: usize) -> Result<usize, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
