use super::*;

use crate::config::Features;
use crate::state::form::DirectoryChoice;

// Nothing listens on the discard port, so any request that escapes
// validation fails with a transport error.
const UNREACHABLE: &str = "http://127.0.0.1:9";

fn panel(features: Features) -> Panel {
    let api = ApiClient::new(UNREACHABLE, "/api").unwrap();
    Panel::new(api, &PanelConfig { features, ..PanelConfig::default() })
}

fn validation(err: ActionError) -> ValidationError {
    match err {
        ActionError::Validation(error) => error,
        ActionError::Api(error) => panic!("expected validation error, got {error}"),
    }
}

// =============================================================
// validation before network
// =============================================================

#[tokio::test]
async fn add_with_empty_url_is_rejected_locally() {
    let mut panel = panel(Features::all());
    panel.state_mut().form.select_directory(DirectoryChoice::Preset("/models/loras".to_owned()));
    let err = panel.submit_add(false).await.unwrap_err();
    assert_eq!(validation(err), ValidationError::MissingUrl);
}

#[tokio::test]
async fn add_without_directory_is_rejected_locally() {
    let mut panel = panel(Features::all());
    panel.state_mut().form.set_url("https://example.com/file.zip");
    let err = panel.submit_add(true).await.unwrap_err();
    assert_eq!(validation(err), ValidationError::MissingDirectory);
}

#[tokio::test]
async fn legacy_start_without_directory_is_rejected_locally() {
    let mut panel = panel(Features::none());
    panel.state_mut().form.set_url("https://civitai.com/models/1");
    let err = panel.submit_legacy().await.unwrap_err();
    assert_eq!(validation(err), ValidationError::MissingDirectory);
    assert_eq!(panel.state().form.url, "https://civitai.com/models/1");
}

#[tokio::test]
async fn save_template_with_empty_queue_is_rejected_locally() {
    let mut panel = panel(Features::all());
    let err = panel.save_template("set", "").await.unwrap_err();
    assert_eq!(validation(err), ValidationError::EmptyQueue);
}

#[tokio::test]
async fn paste_with_empty_clipboard_is_rejected_locally() {
    let mut panel = panel(Features::all());
    let err = panel.paste().await.unwrap_err();
    assert_eq!(validation(err), ValidationError::ClipboardEmpty);
}

#[tokio::test]
async fn terminal_input_before_attach_is_rejected_locally() {
    let mut panel = panel(Features::all());
    let err = panel.terminal_input("ls\r").await.unwrap_err();
    assert_eq!(validation(err), ValidationError::TerminalNotInitialized);
}

#[tokio::test]
async fn parent_at_root_sends_nothing() {
    let mut panel = panel(Features::all());
    assert!(panel.parent_dir().await.is_ok());
}

#[tokio::test]
async fn resize_before_attach_sends_nothing() {
    let mut panel = panel(Features::all());
    assert_eq!(panel.terminal_resize(80, 24).await.unwrap(), None);
}

// =============================================================
// feature flags
// =============================================================

#[tokio::test]
async fn disabled_sections_refuse_gestures() {
    let mut panel = panel(Features::none());
    assert_eq!(validation(panel.clear_logs().await.unwrap_err()), ValidationError::FeatureDisabled("logs"));
    assert_eq!(validation(panel.list_dir("").await.unwrap_err()), ValidationError::FeatureDisabled("file manager"));
    assert_eq!(validation(panel.terminal_attach(1).await.unwrap_err()), ValidationError::FeatureDisabled("terminal"));
    assert!(!panel.state().terminal.is_initialized());
}

// =============================================================
// transport failures leave state intact
// =============================================================

#[tokio::test]
async fn failed_add_keeps_form_fields() {
    let mut panel = panel(Features::all());
    panel.state_mut().form.set_url("https://example.com/file.zip");
    panel.state_mut().form.select_directory(DirectoryChoice::Preset("/models".to_owned()));

    let err = panel.submit_add(false).await.unwrap_err();
    assert!(matches!(err, ActionError::Api(_)));
    assert_eq!(panel.state().form.url, "https://example.com/file.zip");
}

#[tokio::test]
async fn failed_terminal_start_can_be_retried() {
    let mut panel = panel(Features::all());
    assert!(panel.terminal_attach(1).await.is_err());
    assert!(!panel.state().terminal.is_initialized());
}

// =============================================================
// push handling
// =============================================================

#[test]
fn handle_event_ignores_foreign_events() {
    let mut panel = panel(Features::all());
    assert!(!panel.handle_event(PushEvent::Other { kind: "status".to_owned() }));
}

#[test]
fn dispose_returns_final_state() {
    let mut panel = panel(Features::all());
    panel.handle_event(PushEvent::Queue(wire::QueueSnapshot { is_processing: true, ..Default::default() }));
    let state = panel.dispose();
    assert!(state.queue.is_processing);
}
