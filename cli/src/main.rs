//! `dlpanel`: command-line front end for the model downloader.
//!
//! Every subcommand mounts one [`Panel`], performs a single gesture through
//! it, and prints the rendered result. `watch` and `terminal` keep the panel
//! mounted and follow the host's push channel until interrupted.
//!
//! Rendered output goes to stdout; diagnostics go to stderr through
//! `tracing` (`RUST_LOG`, default `warn`).

mod terminal;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use clap::{Args, Parser, Subcommand, ValueEnum};
use panel::net::api::{DEFAULT_API_PREFIX, DEFAULT_BASE_URL};
use panel::net::events::new_client_id;
use panel::render::{
    platform_badge, render_directories, render_legacy, render_listing, render_logs, render_queue, render_templates,
};
use panel::state::files::split_parent;
use panel::state::queue::QueueControl;
use panel::{
    ActionError, ApiClient, ApiError, ConfigError, EventStream, Features, Panel, PanelConfig, PanelState,
    ValidationError,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wire::{ItemId, Provider};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("template `{name}` partially loaded: {failed} of {total} downloads failed")]
    TemplateIncomplete { name: String, failed: usize, total: usize },
}

#[derive(Parser, Debug)]
#[command(name = "dlpanel", about = "Model downloader panel for the host UI")]
struct Cli {
    #[arg(long, env = "DOWNLOADER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "DOWNLOADER_API_PREFIX", default_value = DEFAULT_API_PREFIX)]
    api_prefix: String,

    /// Push-channel client id; a random one is generated when absent.
    #[arg(long, env = "DOWNLOADER_CLIENT_ID")]
    client_id: Option<String>,

    /// Optional sections: `logs,terminal,files,provider`, `all`, or `none`.
    #[arg(long, env = "DOWNLOADER_FEATURES")]
    features: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List preset target directories.
    Dirs,
    /// Show the queue and recent logs.
    State {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show a single-download backend's status.
    Status,
    /// Queue a download.
    Add(AddArgs),
    /// Start one download directly on a single-download backend.
    Download(DownloadArgs),
    /// Start processing the queue.
    Start,
    /// Cancel processing.
    Stop,
    /// Remove one queue item.
    Remove { id: String },
    /// Drop finished items.
    Clear,
    /// Clear backend logs.
    ClearLogs,
    Templates(TemplatesCommand),
    Files(FilesCommand),
    /// Interactive remote terminal.
    Terminal,
    /// Follow pushed queue updates.
    Watch,
}

#[derive(Args, Debug)]
struct AddArgs {
    url: String,

    /// Preset key, label, or path; anything else is used as a custom path.
    #[arg(long = "dir")]
    directory: String,

    #[arg(long)]
    filename: Option<String>,

    #[arg(long, value_enum)]
    provider: Option<ProviderArg>,

    /// Start the queue after adding.
    #[arg(long, default_value_t = false)]
    start: bool,
}

#[derive(Args, Debug)]
struct DownloadArgs {
    url: String,

    /// Preset key, label, or path; anything else is used as a custom path.
    #[arg(long = "dir")]
    directory: String,

    #[arg(long)]
    filename: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ProviderArg {
    #[value(name = "hf_hub")]
    HfHub,
    Aria2,
}

impl From<ProviderArg> for Provider {
    fn from(value: ProviderArg) -> Self {
        match value {
            ProviderArg::HfHub => Self::HfHub,
            ProviderArg::Aria2 => Self::Aria2,
        }
    }
}

#[derive(Args, Debug)]
struct TemplatesCommand {
    #[command(subcommand)]
    command: TemplatesSubcommand,
}

#[derive(Subcommand, Debug)]
enum TemplatesSubcommand {
    List,
    /// Queue every download of a template.
    Load { filename: String },
    /// Save the current queue as a template.
    Save {
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
}

#[derive(Args, Debug)]
struct FilesCommand {
    #[command(subcommand)]
    command: FilesSubcommand,
}

#[derive(Subcommand, Debug)]
enum FilesSubcommand {
    Ls {
        #[arg(default_value = "")]
        path: String,
    },
    /// Copy `path` into the folder `dest`.
    Cp { path: String, dest: String },
    /// Move `path` into the folder `dest`.
    Mv { path: String, dest: String },
    Rename { path: String, new_name: String },
    Rm { path: String },
    Mkdir { path: String },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing();
    if let Err(error) = dotenv
        && !error.not_found()
    {
        warn!(%error, "failed to load .env");
    }

    let config = panel_config(cli.features.as_deref())?;
    let api = ApiClient::new(&cli.base_url, &cli.api_prefix)?;
    let mut panel = Panel::new(api, &config);
    let client_id = cli.client_id.unwrap_or_else(new_client_id);

    match cli.command {
        Command::Dirs => run_dirs(&mut panel).await,
        Command::State { json } => run_state(&mut panel, json).await,
        Command::Status => run_status(&mut panel).await,
        Command::Add(args) => run_add(&mut panel, args).await,
        Command::Download(args) => run_download(&mut panel, args).await,
        Command::Start => run_control(&mut panel, QueueControl::Start).await,
        Command::Stop => run_control(&mut panel, QueueControl::Stop).await,
        Command::Remove { id } => {
            panel.remove(&ItemId::from(id.as_str())).await?;
            println!("removed {id}");
            Ok(())
        }
        Command::Clear => {
            panel.clear_finished().await?;
            println!("cleared finished downloads");
            Ok(())
        }
        Command::ClearLogs => {
            panel.clear_logs().await?;
            println!("logs cleared");
            Ok(())
        }
        Command::Templates(templates) => run_templates(&mut panel, templates).await,
        Command::Files(files) => run_files(&mut panel, files).await,
        Command::Terminal => {
            let events = EventStream::connect(&cli.base_url, &client_id).await?;
            terminal::run(&mut panel, events).await
        }
        Command::Watch => run_watch(&mut panel, &cli.base_url, &client_id).await,
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn panel_config(features: Option<&str>) -> Result<PanelConfig, CliError> {
    let mut config = PanelConfig::from_env()?;
    if let Some(raw) = features {
        config.features = Features::parse(raw)?;
    }
    Ok(config)
}

// =============================================================================
// QUEUE
// =============================================================================

async fn run_dirs(panel: &mut Panel) -> Result<(), CliError> {
    panel.refresh().await?;
    let state = panel.state();
    println!("{}", render_directories(&state.form, state.base_dir.as_deref()));
    Ok(())
}

async fn run_state(panel: &mut Panel, json: bool) -> Result<(), CliError> {
    if json {
        let snapshot = panel.api().state().await?;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }
    panel.refresh().await?;
    print_dashboard(panel.state());
    Ok(())
}

async fn run_status(panel: &mut Panel) -> Result<(), CliError> {
    panel.refresh_legacy().await?;
    if let Some(status) = &panel.state().legacy {
        println!("{}", render_legacy(status));
    }
    Ok(())
}

async fn run_add(panel: &mut Panel, args: AddArgs) -> Result<(), CliError> {
    panel.refresh().await?;

    let form = &mut panel.state_mut().form;
    form.set_url(args.url.as_str());
    if let Some(filename) = args.filename {
        form.set_filename(filename);
    }
    form.choose_directory(&args.directory);
    if let Some(provider) = args.provider {
        form.set_provider(provider.into());
    }
    let badge = form.platform.map(platform_badge);

    panel.submit_add(args.start).await?;
    match badge {
        Some(badge) => println!("queued {} ({badge})", args.url),
        None => println!("queued {}", args.url),
    }
    if args.start {
        println!("queue started");
    }
    Ok(())
}

async fn run_download(panel: &mut Panel, args: DownloadArgs) -> Result<(), CliError> {
    panel.load_directories().await?;

    let form = &mut panel.state_mut().form;
    form.set_url(args.url.as_str());
    if let Some(filename) = args.filename {
        form.set_filename(filename);
    }
    form.choose_directory(&args.directory);

    panel.submit_legacy().await?;
    if let Some(status) = &panel.state().legacy {
        println!("{}", render_legacy(status));
    }
    Ok(())
}

/// Trigger `wanted` only when the mirrored queue is not already there.
async fn run_control(panel: &mut Panel, wanted: QueueControl) -> Result<(), CliError> {
    panel.refresh().await?;
    if panel.state().queue.control() != wanted {
        println!("queue is already {}", if panel.state().queue.is_processing { "processing" } else { "idle" });
        return Ok(());
    }
    let triggered = panel.toggle_processing().await?;
    info!(?triggered, "queue control sent");
    println!("{}", if triggered == QueueControl::Start { "queue started" } else { "queue cancelled" });
    Ok(())
}

async fn run_watch(panel: &mut Panel, base_url: &str, client_id: &str) -> Result<(), CliError> {
    let mut events = EventStream::connect(base_url, client_id).await?;
    panel.refresh().await?;
    print_dashboard(panel.state());

    loop {
        tokio::select! {
            event = events.next_event() => {
                if panel.handle_event(event?) {
                    print_dashboard(panel.state());
                }
            }
            signal = tokio::signal::ctrl_c() => {
                signal?;
                break;
            }
        }
    }

    events.close().await?;
    Ok(())
}

fn print_dashboard(state: &PanelState) {
    println!("{}", render_queue(&state.queue));
    if state.features.logs {
        println!("\n{}", render_logs(state.logs.iter()));
    }
    if let Some(status) = &state.legacy {
        println!("\n{}", render_legacy(status));
    }
}

// =============================================================================
// TEMPLATES
// =============================================================================

async fn run_templates(panel: &mut Panel, templates: TemplatesCommand) -> Result<(), CliError> {
    match templates.command {
        TemplatesSubcommand::List => {
            panel.list_templates().await?;
            println!("{}", render_templates(&panel.state().templates));
            Ok(())
        }
        TemplatesSubcommand::Load { filename } => {
            let report = panel.load_template(&filename).await?;
            println!("loaded {}/{} downloads from {}", report.added, report.total(), report.name);
            for failure in &report.failures {
                println!("  failed {}: {}", failure.url, failure.error);
            }
            if report.is_complete() {
                return Ok(());
            }
            Err(CliError::TemplateIncomplete { name: report.name.clone(), failed: report.failures.len(), total: report.total() })
        }
        TemplatesSubcommand::Save { name, description } => {
            panel.refresh().await?;
            panel.save_template(&name, &description).await?;
            println!("saved template {name} ({} downloads)", panel.state().queue.len());
            Ok(())
        }
    }
}

// =============================================================================
// FILES
// =============================================================================

async fn run_files(panel: &mut Panel, files: FilesCommand) -> Result<(), CliError> {
    match files.command {
        FilesSubcommand::Ls { path } => panel.list_dir(&path).await?,
        FilesSubcommand::Cp { path, dest } => {
            select_entry(panel, &path).await?;
            panel.state_mut().files.copy_selected()?;
            panel.list_dir(&dest).await?;
            panel.paste().await?;
        }
        FilesSubcommand::Mv { path, dest } => {
            select_entry(panel, &path).await?;
            panel.state_mut().files.cut_selected()?;
            panel.list_dir(&dest).await?;
            panel.paste().await?;
        }
        FilesSubcommand::Rename { path, new_name } => {
            select_entry(panel, &path).await?;
            panel.rename(&new_name).await?;
        }
        FilesSubcommand::Rm { path } => {
            select_entry(panel, &path).await?;
            panel.delete().await?;
        }
        FilesSubcommand::Mkdir { path } => {
            let (parent, name) = split_parent(&path);
            panel.list_dir(&parent).await?;
            panel.mkdir(&name).await?;
        }
    }
    println!("{}", render_listing(&panel.state().files));
    Ok(())
}

/// Navigate to the folder holding `path` and select its entry.
async fn select_entry(panel: &mut Panel, path: &str) -> Result<(), CliError> {
    let (parent, name) = split_parent(path);
    panel.list_dir(&parent).await?;
    panel.state_mut().files.select(&name)?;
    Ok(())
}
