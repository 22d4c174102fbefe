use super::*;

use std::collections::BTreeMap;

use wire::{DirectoryListing, DirectoryMap, FileEntry, ItemId, LogLevel, QueueItem};

fn item(id: i64, status: ItemStatus) -> QueueItem {
    QueueItem {
        id: ItemId::from(id),
        url: "https://huggingface.co/org/repo/resolve/main/model.safetensors".to_owned(),
        directory: "/models".to_owned(),
        filename: None,
        detected_filename: None,
        platform: Platform::Huggingface,
        status,
        progress: Some(42),
        speed: Some("3.1 MB/s".to_owned()),
        eta: Some("00:12".to_owned()),
        message: Some("Connection reset".to_owned()),
    }
}

// =============================================================
// queue
// =============================================================

#[test]
fn empty_queue_shows_placeholder() {
    let text = render_queue(&QueueState::default());
    assert!(text.contains(EMPTY_QUEUE));
    assert!(text.contains("[Start]"));
}

#[test]
fn downloading_row_shows_progress_line() {
    let queue = QueueState { items: vec![item(1, ItemStatus::Downloading)], is_processing: true };
    let text = render_queue(&queue);
    assert!(text.contains("[Stop]"));
    assert!(text.contains("#1 [downloading] Detecting... (HuggingFace)"));
    assert!(text.contains("42% | 3.1 MB/s | ETA 00:12"));
    assert!(text.contains("https://huggingface.co/org/repo/resolve/main/..."));
}

#[test]
fn queued_row_hides_progress() {
    let queue = QueueState { items: vec![item(2, ItemStatus::Error)], is_processing: false };
    let text = render_queue(&queue);
    assert!(!text.contains("42%"));
    assert!(text.contains("Connection reset"));
}

#[test]
fn rendering_is_deterministic() {
    let queue = QueueState { items: vec![item(1, ItemStatus::Queued), item(2, ItemStatus::Completed)], is_processing: false };
    assert_eq!(render_queue(&queue), render_queue(&queue.clone()));
}

// =============================================================
// logs / templates / legacy
// =============================================================

#[test]
fn logs_render_level_and_message() {
    let entries = [
        LogEntry { timestamp: Some("12:00:01".to_owned()), level: LogLevel::Success, message: "done".to_owned() },
        LogEntry { timestamp: None, level: LogLevel::Error, message: "failed".to_owned() },
    ];
    let text = render_logs(&entries);
    assert_eq!(text, "[12:00:01] success done\nerror   failed");
}

#[test]
fn empty_logs_show_placeholder() {
    assert_eq!(render_logs(&[]), NO_LOGS);
}

#[test]
fn templates_render_placeholder_and_counts() {
    assert_eq!(render_templates(&[]), NO_TEMPLATES);
    let templates = vec![TemplateSummary {
        filename: "sdxl.json".to_owned(),
        name: "SDXL base".to_owned(),
        description: Some("base + refiner".to_owned()),
        count: 2,
    }];
    assert_eq!(render_templates(&templates), "SDXL base (2 downloads) [sdxl.json]\n    base + refiner");
}

#[test]
fn legacy_status_lines() {
    assert_eq!(render_legacy(&LegacyStatus::default()), "Idle");
    let status = LegacyStatus {
        status: LegacyState::Downloading,
        progress: Some(50),
        speed: "1 MB/s".to_owned(),
        filename: "a.ckpt".to_owned(),
        ..LegacyStatus::default()
    };
    assert_eq!(render_legacy(&status), "Downloading a.ckpt 50% | 1 MB/s");
}

// =============================================================
// files / directories
// =============================================================

#[test]
fn empty_folder_shows_placeholder() {
    let mut files = FileManagerState::default();
    files.apply_listing(DirectoryListing { path: "models".to_owned(), items: Vec::new() });
    assert_eq!(render_listing(&files), format!("Root / models\n  {EMPTY_FOLDER}"));
}

#[test]
fn listing_marks_selection_and_sizes() {
    let mut files = FileManagerState::default();
    files.apply_listing(DirectoryListing {
        path: String::new(),
        items: vec![
            FileEntry { name: "loras".to_owned(), is_dir: true, size: 0 },
            FileEntry { name: "a.bin".to_owned(), is_dir: false, size: 1536 },
        ],
    });
    files.select("a.bin").unwrap();
    let text = render_listing(&files);
    assert!(text.contains("  d loras/"));
    assert!(text.contains("> f a.bin"));
    assert!(text.contains("1.50 KB"));
}

#[test]
fn directories_end_with_custom_entry() {
    let mut directories = BTreeMap::new();
    directories.insert("clip_vision".to_owned(), "/m/clip_vision".to_owned());
    let mut form = AddForm::new(10, false);
    form.load_directories(&DirectoryMap { directories, base: None });

    let text = render_directories(&form, Some("/comfy"));
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "Base: /comfy");
    assert!(lines[1].contains("Clip Vision"));
    assert_eq!(lines.last().copied(), Some("  Custom Path..."));
}

#[test]
fn badges() {
    assert_eq!(platform_badge(Platform::Civitai), "CivitAI");
    assert_eq!(platform_badge(Platform::Other), "Direct URL");
}
