use super::*;

fn started() -> TerminalState {
    let mut term = TerminalState::default();
    term.attach(1);
    term
}

// =============================================================
// attach
// =============================================================

#[test]
fn first_attach_initializes_with_empty_command() {
    let mut term = TerminalState::default();
    assert!(!term.is_initialized());
    assert_eq!(
        term.attach(7),
        AttachOutcome::Initialized { start: ExecuteRequest { command: String::new() } }
    );
    assert!(term.is_initialized());
    assert_eq!(term.container(), Some(7));
}

#[test]
fn reattach_keeps_session_and_scrollback() {
    let mut term = started();
    term.output("hello\r\n");
    term.detach();
    assert_eq!(term.container(), None);

    assert_eq!(term.attach(2), AttachOutcome::Reattached);
    assert_eq!(term.container(), Some(2));
    assert_eq!(term.scrollback(), "hello\r\n");
}

#[test]
fn abandon_allows_fresh_initialization() {
    let mut term = started();
    term.abandon();
    assert!(!term.is_initialized());
    assert!(matches!(term.attach(3), AttachOutcome::Initialized { .. }));
}

// =============================================================
// input / resize
// =============================================================

#[test]
fn input_before_attach_is_rejected() {
    let term = TerminalState::default();
    assert_eq!(term.input("ls\r"), Err(ValidationError::TerminalNotInitialized));
}

#[test]
fn input_passes_raw_data() {
    let term = started();
    assert_eq!(term.input("ls -la\r").unwrap().command, "ls -la\r");
}

#[test]
fn resize_only_reports_changes() {
    let mut term = started();
    assert_eq!(term.resize(80, 24), Some(ResizeRequest { cols: 80, rows: 24 }));
    assert_eq!(term.resize(80, 24), None);
    assert_eq!(term.resize(120, 40), Some(ResizeRequest { cols: 120, rows: 40 }));
    assert_eq!(term.size(), Some(ResizeRequest { cols: 120, rows: 40 }));
}

#[test]
fn invalidated_size_is_resent() {
    let mut term = started();
    term.resize(80, 24);
    term.invalidate_size();
    assert_eq!(term.resize(80, 24), Some(ResizeRequest { cols: 80, rows: 24 }));
}

#[test]
fn resize_ignored_before_init_or_when_zero() {
    let mut term = TerminalState::default();
    assert_eq!(term.resize(80, 24), None);
    let mut term = started();
    assert_eq!(term.resize(0, 24), None);
    assert_eq!(term.size(), None);
}

// =============================================================
// scrollback
// =============================================================

#[test]
fn output_trims_oldest_text() {
    let mut term = TerminalState::with_scrollback(5);
    term.output("abc");
    term.output("defg");
    assert_eq!(term.scrollback(), "cdefg");
}

#[test]
fn output_trim_respects_char_boundaries() {
    let mut term = TerminalState::with_scrollback(4);
    term.output("aé€");
    // "é" is 2 bytes and "€" 3; cutting inside "é" advances to the next boundary.
    assert_eq!(term.scrollback(), "€");
}
