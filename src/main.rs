//! Grundriss-Editor: Action-Replay auf der Kommandozeile.
//!
//! Liest eine Action pro Zeile (JSON), spielt sie gegen ein neues oder
//! geladenes Projekt ab und gibt die resultierende Szene als JSON aus.
//!
//! Aufruf: `floorplan-editor [--config <optionen.toml>] [--scene <szene.json>] <actions.jsonl>`

use anyhow::Context;
use floorplan_editor::{AppController, AppState, Catalog, EditorOptions, Scene};
use std::path::PathBuf;

/// Kommandozeilen-Argumente
#[derive(Debug, Default)]
struct CliOptions {
    config: Option<PathBuf>,
    scene: Option<PathBuf>,
    actions: Option<PathBuf>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Option<CliOptions> {
    let mut options = CliOptions::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => options.config = Some(PathBuf::from(args.next()?)),
            "--scene" => options.scene = Some(PathBuf::from(args.next()?)),
            flag if flag.starts_with("--") => return None,
            _ if options.actions.is_none() => options.actions = Some(PathBuf::from(&arg)),
            _ => return None,
        }
    }
    options.actions.is_some().then_some(options)
}

fn print_usage(program: &str) {
    eprintln!("Aufruf: {program} [--config <optionen.toml>] [--scene <szene.json>] <actions.jsonl>");
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "floorplan-editor".to_owned());
    let Some(cli) = parse_options(args) else {
        print_usage(&program);
        std::process::exit(2);
    };

    log::info!("Grundriss-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = cli.config.unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&config_path);

    let mut state = match &cli.scene {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Szene nicht lesbar: {}", path.display()))?;
            AppState::from_scene(Scene::from_json(&json)?, Catalog::new(), options)
        }
        None => AppState::with_options(options),
    };

    let actions_path = cli
        .actions
        .context("Keine Action-Datei angegeben")?;
    let actions = std::fs::read_to_string(&actions_path)
        .with_context(|| format!("Action-Datei nicht lesbar: {}", actions_path.display()))?;

    let mut controller = AppController::new();
    for (index, line) in actions.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        state = match controller.dispatch_json(&state, line) {
            Ok(next) => next,
            Err(err) => {
                log::error!(
                    "Replay bricht in Zeile {} ab, zuletzt verarbeitet: {}",
                    index + 1,
                    controller.command_log().describe_recent(5)
                );
                return Err(err).with_context(|| format!("Zeile {}", index + 1));
            }
        };
        log::info!(
            "Zeile {}: Modus {:?}, {} Snapshots, {} selektiert",
            index + 1,
            state.mode,
            state.history_len(),
            state.selected_count()
        );
    }

    let command_log = controller.command_log();
    log::info!(
        "{} Actions verarbeitet, {} davon mit History-Eintrag",
        command_log.total(),
        command_log.commits()
    );
    for (name, count) in command_log.tally() {
        log::debug!("  {name}: {count}x");
    }
    println!("{}", state.scene.to_json_pretty()?);
    Ok(())
}
