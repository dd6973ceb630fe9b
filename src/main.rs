use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use unibrowse::config::{Config, ConfigOverrides};
use unibrowse::logging::init_tracing;
use unibrowse::ui::runtime;

/// Browse a remote university directory in the terminal.
#[derive(Debug, Parser)]
#[command(name = "unibrowse", version, about)]
struct Cli {
    /// Config file (default: <config dir>/unibrowse/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the country to list
    #[arg(long)]
    country: Option<String>,

    /// Only list universities whose name contains this text
    #[arg(long)]
    name: Option<String>,

    /// Override the directory service base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Log filter when RUST_LOG is unset (e.g. "debug")
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let log_path = init_tracing(&config.logging)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = %log_path.display(),
        country = %config.source.country,
        "Starting unibrowse"
    );

    runtime::run(config)?;
    tracing::info!("Exited cleanly");
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_overrides(ConfigOverrides {
        base_url: cli.base_url.clone(),
        country: cli.country.clone(),
        name: cli.name.clone(),
        log_level: cli.log_level.clone(),
    });
    config.validate()?;
    Ok(config)
}
