//! Display formatting for sizes and directory labels.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Human-readable byte count with two decimals, base 1024.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let mut size = bytes as f64;
    for unit in BYTE_UNITS {
        if size < 1024.0 {
            return format!("{size:.2} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.2} PB")
}

/// Turn a preset key such as `clip_vision` into `Clip Vision`.
#[must_use]
pub fn directory_label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for ch in spaced.chars() {
        let is_word = ch.is_alphanumeric();
        if is_word && at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = !is_word;
    }
    out
}
