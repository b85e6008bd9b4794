use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use termfolio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "termfolio")]
#[command(author, version, about = "A scroll-animated single-page portfolio for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to use instead of ~/.config/termfolio/config.toml
    #[arg(long = "config")]
    config_path: Option<PathBuf>,

    /// Portfolio content file overriding the built-in page
    #[arg(short = 'c', long = "content")]
    content_path: Option<PathBuf>,

    /// Theme name override (see `termfolio themes`)
    #[arg(short = 't', long = "theme")]
    theme: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// List available themes
    Themes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init and themes are plain console commands; only `run` needs the
    // config stack and file logging. Init in particular must work when
    // no config file exists yet.
    match cli.command {
        Some(Commands::Init { force }) => {
            return commands::init::run(cli.config_path.as_deref(), force);
        }
        Some(Commands::Themes) => return commands::themes::run(),
        Some(Commands::Run) | None => {}
    }

    // Load configuration, then apply command-line overrides
    let mut config = match cli.config_path.as_deref() {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if let Some(path) = cli.content_path {
        config.general.content_path = Some(path);
    }
    if let Some(name) = cli.theme {
        config.ui.theme.name = name;
    }

    init_logging(&config)?;

    commands::run::run(&config)
}

/// Logging goes to a file under the data dir; the terminal itself is
/// owned by the TUI while `run` is active.
fn init_logging(config: &AppConfig) -> Result<()> {
    let dir = config.data_dir();
    std::fs::create_dir_all(&dir)?;
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("termfolio.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(file),
        )
        .init();

    Ok(())
}
