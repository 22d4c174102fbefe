use super::*;

// =============================================================
// detect_platform
// =============================================================

#[test]
fn detect_platform_recognizes_huggingface_hosts() {
    assert_eq!(
        detect_platform("https://huggingface.co/x/y", DEFAULT_GENERIC_URL_MIN_LEN),
        Some(Platform::Huggingface)
    );
    assert_eq!(
        detect_platform("https://HF.CO/u/r/resolve/main/m.ckpt", DEFAULT_GENERIC_URL_MIN_LEN),
        Some(Platform::Huggingface)
    );
}

#[test]
fn detect_platform_recognizes_civitai() {
    assert_eq!(
        detect_platform("https://civitai.com/models/1", DEFAULT_GENERIC_URL_MIN_LEN),
        Some(Platform::Civitai)
    );
}

#[test]
fn detect_platform_generic_url_above_threshold_is_other() {
    assert_eq!(
        detect_platform("https://example.com/file.zip", DEFAULT_GENERIC_URL_MIN_LEN),
        Some(Platform::Other)
    );
}

#[test]
fn detect_platform_short_input_has_no_badge() {
    assert_eq!(detect_platform("http://a", DEFAULT_GENERIC_URL_MIN_LEN), None);
    assert_eq!(detect_platform("", DEFAULT_GENERIC_URL_MIN_LEN), None);
}

#[test]
fn detect_platform_threshold_is_exclusive_and_configurable() {
    let url = "abcdefghijk"; // 11 chars
    assert_eq!(detect_platform(url, 10), Some(Platform::Other));
    assert_eq!(detect_platform(url, 11), None);
    assert_eq!(detect_platform(url, 15), None);
}

#[test]
fn detect_platform_huggingface_wins_over_civitai() {
    assert_eq!(
        detect_platform("https://huggingface.co/civitai.com/mirror", DEFAULT_GENERIC_URL_MIN_LEN),
        Some(Platform::Huggingface)
    );
}

// =============================================================
// filename extraction
// =============================================================

#[test]
fn extract_filename_strips_query_string() {
    assert_eq!(
        extract_filename("https://hf.co/u/r/resolve/main/model.safetensors?download=true").as_deref(),
        Some("model.safetensors")
    );
}

#[test]
fn extract_filename_handles_nested_paths_and_multiple_params() {
    assert_eq!(
        extract_filename("https://huggingface.co/user/repo/blob/main/folder/file.pt?download=true&other=param")
            .as_deref(),
        Some("file.pt")
    );
}

#[test]
fn extract_filename_ignores_segments_without_extension() {
    assert_eq!(last_path_segment("https://civitai.com/models/12345?modelVersionId=67890"), "12345");
    assert_eq!(extract_filename("https://civitai.com/models/12345?modelVersionId=67890"), None);
}

#[test]
fn extract_filename_trailing_slash_yields_none() {
    assert_eq!(last_path_segment("https://example.com/dir/"), "");
    assert_eq!(extract_filename("https://example.com/dir/"), None);
}

// =============================================================
// short_url
// =============================================================

#[test]
fn short_url_keeps_short_urls() {
    assert_eq!(short_url("https://a.b/c"), "https://a.b/c");
}

#[test]
fn short_url_truncates_long_urls() {
    let url = format!("https://example.com/{}", "x".repeat(60));
    let short = short_url(&url);
    assert!(short.ends_with("..."));
    assert_eq!(short.chars().count(), SHORT_URL_MAX_CHARS + 3);
}
