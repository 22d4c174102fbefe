use super::*;

use clap::CommandFactory;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["dlpanel", "--base-url", "http://127.0.0.1:8188", "--api-prefix", "/api"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn add_parses_directory_provider_and_start() {
    let cli = parse(&[
        "add",
        "https://huggingface.co/org/repo/resolve/main/model.safetensors",
        "--dir",
        "loras",
        "--provider",
        "aria2",
        "--start",
    ]);
    let Command::Add(args) = cli.command else {
        panic!("expected add command");
    };
    assert_eq!(args.directory, "loras");
    assert_eq!(args.provider, Some(ProviderArg::Aria2));
    assert!(args.start);
    assert_eq!(args.filename, None);
}

#[test]
fn add_requires_directory() {
    assert!(Cli::try_parse_from(["dlpanel", "add", "https://example.com/a.zip"]).is_err());
}

#[test]
fn download_takes_url_directory_and_filename() {
    let cli = parse(&["download", "https://civitai.com/models/1", "--dir", "loras", "--filename", "x.safetensors"]);
    let Command::Download(args) = cli.command else {
        panic!("expected download command");
    };
    assert_eq!(args.url, "https://civitai.com/models/1");
    assert_eq!(args.directory, "loras");
    assert_eq!(args.filename.as_deref(), Some("x.safetensors"));
}

#[test]
fn remove_keeps_leading_zero_id_as_text() {
    let Command::Remove { id } = parse(&["remove", "007"]).command else {
        panic!("expected remove command");
    };
    assert_eq!(ItemId::from(id.as_str()), ItemId::Text("007".to_owned()));
}

#[test]
fn provider_names_match_wire_tags() {
    let cli = parse(&["add", "u", "--dir", "d", "--provider", "hf_hub"]);
    let Command::Add(args) = cli.command else {
        panic!("expected add command");
    };
    let provider: Provider = args.provider.unwrap().into();
    assert_eq!(provider.as_str(), "hf_hub");
}

#[test]
fn files_ls_defaults_to_root() {
    let cli = parse(&["files", "ls"]);
    let Command::Files(FilesCommand { command: FilesSubcommand::Ls { path } }) = cli.command else {
        panic!("expected files ls");
    };
    assert_eq!(path, "");
}

#[test]
fn templates_save_takes_optional_description() {
    let cli = parse(&["templates", "save", "SDXL", "--description", "base + refiner"]);
    let Command::Templates(TemplatesCommand { command: TemplatesSubcommand::Save { name, description } }) = cli.command
    else {
        panic!("expected templates save");
    };
    assert_eq!(name, "SDXL");
    assert_eq!(description, "base + refiner");
}

#[test]
fn clear_logs_is_kebab_case() {
    assert!(matches!(parse(&["clear-logs"]).command, Command::ClearLogs));
}

#[test]
fn features_flag_overrides_environment() {
    let config = panel_config(Some("logs")).unwrap();
    assert!(config.features.logs);
    assert!(!config.features.terminal);
    assert!(matches!(panel_config(Some("bogus")), Err(CliError::Config(_))));
}

#[test]
fn input_line_appends_carriage_return() {
    assert_eq!(terminal::input_line("ls"), "ls\r");
}
