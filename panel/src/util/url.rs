//! URL classification and filename extraction.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

use wire::Platform;

/// Default minimum length above which an unrecognized URL is badged `other`.
pub const DEFAULT_GENERIC_URL_MIN_LEN: usize = 10;

/// Maximum URL length shown in a queue row before truncation.
pub const SHORT_URL_MAX_CHARS: usize = 45;

/// Classify a URL by substring match on its lowercased form.
///
/// Returns `None` for short unrecognized input so partially typed text shows
/// no badge.
#[must_use]
pub fn detect_platform(url: &str, generic_min_len: usize) -> Option<Platform> {
    let lower = url.to_lowercase();
    if lower.contains("huggingface.co") || lower.contains("hf.co") {
        Some(Platform::Huggingface)
    } else if lower.contains("civitai.com") {
        Some(Platform::Civitai)
    } else if lower.chars().count() > generic_min_len {
        Some(Platform::Other)
    } else {
        None
    }
}

/// Last `/`-separated segment of the URL with any query string removed.
#[must_use]
pub fn last_path_segment(url: &str) -> &str {
    let without_query = url.split('?').next().unwrap_or(url);
    without_query.rsplit('/').next().unwrap_or(without_query)
}

/// Filename implied by the URL path, if its last segment looks like one.
#[must_use]
pub fn extract_filename(url: &str) -> Option<String> {
    let segment = last_path_segment(url);
    if segment.contains('.') {
        Some(segment.to_owned())
    } else {
        None
    }
}

/// Truncate a URL for single-line display.
#[must_use]
pub fn short_url(url: &str) -> String {
    if url.chars().count() > SHORT_URL_MAX_CHARS {
        let head: String = url.chars().take(SHORT_URL_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        url.to_owned()
    }
}
