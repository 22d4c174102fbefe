//! Interactive remote terminal.
//!
//! Stdin lines become terminal input, pushed output is copied to stdout, and
//! the local window size is polled so the remote PTY follows resizes.

use std::time::Duration;

use panel::{EventStream, Panel};
use panel::state::terminal::AttachOutcome;
use terminal_size::{Height, Width, terminal_size};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;
use wire::PushEvent;

use crate::CliError;

const RESIZE_POLL: Duration = Duration::from_millis(500);

pub(crate) async fn run(panel: &mut Panel, mut events: EventStream) -> Result<(), CliError> {
    let outcome = panel.terminal_attach(u64::from(std::process::id())).await?;
    debug!(?outcome, "terminal attached");
    if outcome == AttachOutcome::Reattached {
        print!("{}", panel.state().terminal.scrollback());
    }
    sync_size(panel).await?;

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut resize = tokio::time::interval(RESIZE_POLL);

    loop {
        tokio::select! {
            line = stdin.next_line() => {
                let Some(line) = line? else { break };
                panel.terminal_input(&input_line(&line)).await?;
            }
            event = events.next_event() => {
                let event = event?;
                if let PushEvent::TerminalOutput(output) = &event {
                    stdout.write_all(output.text.as_bytes()).await?;
                    stdout.flush().await?;
                }
                panel.handle_event(event);
            }
            _ = resize.tick() => sync_size(panel).await?,
        }
    }

    events.close().await?;
    Ok(())
}

/// A submitted line as keystrokes: the text followed by carriage return.
pub(crate) fn input_line(line: &str) -> String {
    format!("{line}\r")
}

async fn sync_size(panel: &mut Panel) -> Result<(), CliError> {
    let Some((Width(cols), Height(rows))) = terminal_size() else {
        return Ok(());
    };
    if let Some(size) = panel.terminal_resize(cols, rows).await? {
        debug!(cols = size.cols, rows = size.rows, "terminal resized");
    }
    Ok(())
}
