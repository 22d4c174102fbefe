use super::*;
use crate::util::url::DEFAULT_GENERIC_URL_MIN_LEN;

fn form() -> AddForm {
    let mut form = AddForm::new(DEFAULT_GENERIC_URL_MIN_LEN, true);
    let mut map = DirectoryMap::default();
    map.directories.insert("loras".to_owned(), "/models/loras".to_owned());
    map.directories.insert("diffusion_models".to_owned(), "/models/diffusion_models".to_owned());
    form.load_directories(&map);
    form
}

// =============================================================
// directories
// =============================================================

#[test]
fn load_directories_builds_labelled_options() {
    let form = form();
    let labels: Vec<_> = form.options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["Diffusion Models", "Loras"]);
}

#[test]
fn choose_directory_matches_key_label_or_path() {
    let mut form = form();
    form.choose_directory("loras");
    assert_eq!(form.directory, DirectoryChoice::Preset("/models/loras".to_owned()));
    form.choose_directory("diffusion models");
    assert_eq!(form.directory, DirectoryChoice::Preset("/models/diffusion_models".to_owned()));
    form.choose_directory("/models/loras");
    assert_eq!(form.directory, DirectoryChoice::Preset("/models/loras".to_owned()));
}

#[test]
fn choose_directory_unknown_value_becomes_custom() {
    let mut form = form();
    form.choose_directory("/data/extra");
    assert!(form.custom_directory_visible());
    assert_eq!(form.resolved_directory(), Some("/data/extra"));
}

#[test]
fn reload_drops_vanished_preset_selection() {
    let mut form = form();
    form.choose_directory("loras");
    form.load_directories(&DirectoryMap::default());
    assert_eq!(form.directory, DirectoryChoice::Unselected);
}

#[test]
fn custom_directory_blank_is_unresolved() {
    let mut form = form();
    form.select_directory(DirectoryChoice::Custom);
    form.set_custom_directory("   ");
    assert_eq!(form.resolved_directory(), None);
}

// =============================================================
// url input
// =============================================================

#[test]
fn set_url_autofills_huggingface_filename() {
    let mut form = form();
    form.set_url("https://huggingface.co/u/r/resolve/main/model.safetensors?download=true");
    assert_eq!(form.platform, Some(Platform::Huggingface));
    assert_eq!(form.filename, "model.safetensors");
}

#[test]
fn set_url_never_overwrites_user_filename() {
    let mut form = form();
    form.set_filename("custom.safetensors");
    form.set_url("https://huggingface.co/u/r/resolve/main/model.safetensors");
    assert_eq!(form.filename, "custom.safetensors");
}

#[test]
fn set_url_does_not_autofill_for_civitai_or_generic() {
    let mut form = form();
    form.set_url("https://civitai.com/api/download/models/1.zip");
    assert_eq!(form.platform, Some(Platform::Civitai));
    assert!(form.filename.is_empty());
    form.set_url("https://example.com/file.zip");
    assert_eq!(form.platform, Some(Platform::Other));
    assert!(form.filename.is_empty());
}

#[test]
fn set_url_skips_extensionless_huggingface_segment() {
    let mut form = form();
    form.set_url("https://huggingface.co/org/repo");
    assert_eq!(form.platform, Some(Platform::Huggingface));
    assert!(form.filename.is_empty());
}

// =============================================================
// submission
// =============================================================

#[test]
fn submission_requires_url() {
    let mut form = form();
    form.choose_directory("loras");
    form.set_url("   ");
    assert_eq!(form.submission(), Err(ValidationError::MissingUrl));
}

#[test]
fn submission_requires_directory() {
    let mut form = form();
    form.set_url("https://example.com/file.zip");
    assert_eq!(form.submission(), Err(ValidationError::MissingDirectory));
}

#[test]
fn submission_builds_trimmed_request() {
    let mut form = form();
    form.set_url("  https://example.com/file.zip ");
    form.choose_directory("loras");
    form.set_provider(Provider::Aria2);
    let request = form.submission().unwrap();
    assert_eq!(request.url, "https://example.com/file.zip");
    assert_eq!(request.directory, "/models/loras");
    assert_eq!(request.filename, None);
    assert_eq!(request.provider, Some(Provider::Aria2));
}

#[test]
fn submission_omits_provider_when_not_selectable() {
    let mut form = AddForm::new(DEFAULT_GENERIC_URL_MIN_LEN, false);
    form.set_url("https://example.com/file.zip");
    form.choose_directory("/data");
    form.set_filename(" out.zip ");
    let request = form.submission().unwrap();
    assert_eq!(request.provider, None);
    assert_eq!(request.filename.as_deref(), Some("out.zip"));
}

#[test]
fn reset_after_submit_keeps_directory() {
    let mut form = form();
    form.set_url("https://huggingface.co/u/r/resolve/main/model.safetensors");
    form.choose_directory("loras");
    form.reset_after_submit();
    assert!(form.url.is_empty());
    assert!(form.filename.is_empty());
    assert_eq!(form.platform, None);
    assert_eq!(form.resolved_directory(), Some("/models/loras"));
}

#[test]
fn toggle_collapsed_flips() {
    let mut form = form();
    assert!(!form.collapsed);
    form.toggle_collapsed();
    assert!(form.collapsed);
}
