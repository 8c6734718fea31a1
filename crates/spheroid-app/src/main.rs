mod app;
mod cli;
mod controls;
mod headless;
mod terminal;

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use spheroid_common::{ConfigError, Result, SpheroidError};
use spheroid_config::{toml_loader, validation, SpheroidConfig};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::cli::Args;

/// Load the config named on the command line, or the platform default.
///
/// Failures fall back to defaults; the error is returned so it can be
/// logged once logging is up.
fn load_config(args: &Args) -> (SpheroidConfig, Option<ConfigError>) {
    let loaded = match &args.config {
        Some(path) => toml_loader::load_from_path(path)
            .and_then(|config| validation::validate(&config).map(|()| config)),
        None => spheroid_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (SpheroidConfig::default(), Some(e)),
    }
}

fn init_logging(args: &Args, config: &SpheroidConfig) {
    let directive = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.directive());
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
    };

    if let Some(path) = &config.logging.file {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter())
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .init();
                return;
            }
            Err(e) => eprintln!("cannot open log file {path}: {e}"),
        }
    }

    if args.interactive() {
        // The terminal UI owns the screen; without a log file, logs are dropped.
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::sink)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .init();
    }
}

fn write_default_config(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => toml_loader::default_config_path()?,
    };
    spheroid_config::save_config_to_path(&SpheroidConfig::default(), &path)?;
    println!("wrote {}", path.display());
    Ok(())
}

fn run(args: Args) -> Result<()> {
    if args.write_default_config {
        return write_default_config(args.config);
    }

    let (config, load_error) = load_config(&args);
    init_logging(&args, &config);
    tracing::info!("Spheroid v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    let mut app = App::new(config, args.preset.as_deref())?.with_config_path(args.config.clone());

    if args.print_modes {
        let json = serde_json::to_string_pretty(&app.deformer().mode_info())
            .map_err(|e| SpheroidError::Other(format!("failed to serialize modes: {e}")))?;
        println!("{json}");
        return Ok(());
    }
    if let Some(name) = &args.print_preset {
        let preset = app
            .presets()
            .get(name)
            .ok_or_else(|| SpheroidError::Other(format!("unknown preset {name:?}")))?;
        println!("{}", preset.to_json());
        return Ok(());
    }

    if args.headless {
        let summary = headless::run(&mut app, args.frames)?;
        println!(
            "{} frames, {} triangles drawn, {} culled, {:.2} ms/frame",
            summary.frames, summary.drawn, summary.culled, summary.avg_frame_ms
        );
        return Ok(());
    }

    terminal::run(&mut app)?;
    tracing::info!("Shutdown complete");
    Ok(())
}

fn main() {
    let args = cli::parse();
    if let Err(e) = run(args) {
        tracing::error!("{e}");
        eprintln!("spheroid: {e}");
        std::process::exit(1);
    }
}
