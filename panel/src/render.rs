//! Stateless text renderers.
//!
//! Each function maps a slice of panel state to display text and holds no
//! state of its own. Empty sections render a placeholder line rather than
//! nothing.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wire::{ItemStatus, LegacyState, LegacyStatus, LogEntry, Platform, TemplateSummary};

use crate::state::files::{Crumb, FileManagerState};
use crate::state::form::{AddForm, CUSTOM_DIRECTORY_LABEL};
use crate::state::queue::{QueueControl, QueueRow, QueueState};
use crate::util::format::format_bytes;

pub const EMPTY_QUEUE: &str = "Queue is empty";
pub const EMPTY_FOLDER: &str = "Folder is empty";
pub const NO_TEMPLATES: &str = "No templates found";
pub const NO_LOGS: &str = "No logs";

#[must_use]
pub fn platform_badge(platform: Platform) -> &'static str {
    match platform {
        Platform::Huggingface => "HuggingFace",
        Platform::Civitai => "CivitAI",
        Platform::Other => "Direct URL",
    }
}

#[must_use]
pub fn control_label(control: QueueControl) -> &'static str {
    match control {
        QueueControl::Start => "Start",
        QueueControl::Stop => "Stop",
    }
}

/// Queue header, start/stop control, and one block per item.
#[must_use]
pub fn render_queue(queue: &QueueState) -> String {
    let state = if queue.is_processing { "processing" } else { "idle" };
    let mut lines = vec![format!("Queue ({}) {state} [{}]", queue.len(), control_label(queue.control()))];
    if queue.is_empty() {
        lines.push(format!("  {EMPTY_QUEUE}"));
    } else {
        lines.extend(queue.rows().iter().flat_map(queue_row_lines));
    }
    lines.join("\n")
}

fn queue_row_lines(row: &QueueRow) -> Vec<String> {
    let mut lines = vec![
        format!("  #{} [{}] {} ({})", row.id, row.status.as_str(), row.title, platform_badge(row.platform)),
        format!("      {}", row.short_url),
    ];
    if let Some(progress) = &row.progress {
        let mut detail = format!("{}%", progress.percent);
        if !progress.speed.is_empty() {
            detail.push_str(&format!(" | {}", progress.speed));
        }
        if !progress.eta.is_empty() {
            detail.push_str(&format!(" | ETA {}", progress.eta));
        }
        lines.push(format!("      {detail}"));
    }
    if !row.message.is_empty() && row.status != ItemStatus::Downloading {
        lines.push(format!("      {}", row.message));
    }
    lines
}

#[must_use]
pub fn render_logs<'a>(entries: impl IntoIterator<Item = &'a LogEntry>) -> String {
    let lines: Vec<String> = entries
        .into_iter()
        .map(|entry| match &entry.timestamp {
            Some(ts) => format!("[{ts}] {:<7} {}", entry.level.as_str(), entry.message),
            None => format!("{:<7} {}", entry.level.as_str(), entry.message),
        })
        .collect();
    if lines.is_empty() { NO_LOGS.to_owned() } else { lines.join("\n") }
}

#[must_use]
pub fn render_breadcrumb(crumbs: &[Crumb]) -> String {
    crumbs.iter().map(|crumb| crumb.label.as_str()).collect::<Vec<_>>().join(" / ")
}

/// Breadcrumb followed by the folder listing. The selected entry is marked
/// with `>`.
#[must_use]
pub fn render_listing(files: &FileManagerState) -> String {
    let mut lines = vec![render_breadcrumb(&files.breadcrumb())];
    if files.items().is_empty() {
        lines.push(format!("  {EMPTY_FOLDER}"));
        return lines.join("\n");
    }
    for entry in files.items() {
        let marker = if files.selected() == Some(entry.name.as_str()) { '>' } else { ' ' };
        if entry.is_dir {
            lines.push(format!("{marker} d {}/", entry.name));
        } else {
            lines.push(format!("{marker} f {:<40} {:>12}", entry.name, format_bytes(entry.size)));
        }
    }
    lines.join("\n")
}

#[must_use]
pub fn render_templates(templates: &[TemplateSummary]) -> String {
    if templates.is_empty() {
        return NO_TEMPLATES.to_owned();
    }
    templates
        .iter()
        .map(|template| {
            let noun = if template.count == 1 { "download" } else { "downloads" };
            let mut line = format!("{} ({} {noun}) [{}]", template.name, template.count, template.filename);
            if let Some(description) = template.description.as_deref().filter(|d| !d.is_empty()) {
                line.push_str(&format!("\n    {description}"));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Directory choices as offered by the add form, ending with the custom
/// escape hatch.
#[must_use]
pub fn render_directories(form: &AddForm, base: Option<&str>) -> String {
    let mut lines = Vec::with_capacity(form.options.len() + 2);
    if let Some(base) = base {
        lines.push(format!("Base: {base}"));
    }
    for option in &form.options {
        lines.push(format!("  {:<24} {:<20} {}", option.label, option.key, option.path));
    }
    lines.push(format!("  {CUSTOM_DIRECTORY_LABEL}"));
    lines.join("\n")
}

/// Single-download status line.
#[must_use]
pub fn render_legacy(status: &LegacyStatus) -> String {
    let state = match status.status {
        LegacyState::Idle => return "Idle".to_owned(),
        LegacyState::Downloading => "Downloading",
        LegacyState::Completed => "Completed",
        LegacyState::Error => "Error",
        LegacyState::Cancelled => "Cancelled",
    };
    let mut line = state.to_owned();
    if !status.filename.is_empty() {
        line.push_str(&format!(" {}", status.filename));
    }
    if status.status == LegacyState::Downloading {
        line.push_str(&format!(" {}%", status.progress.unwrap_or(0)));
        if !status.speed.is_empty() {
            line.push_str(&format!(" | {}", status.speed));
        }
        if !status.eta.is_empty() {
            line.push_str(&format!(" | ETA {}", status.eta));
        }
    }
    if !status.message.is_empty() {
        line.push_str(&format!(": {}", status.message));
    }
    line
}
