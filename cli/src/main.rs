use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Harvest release notes from an HTML roadmap into the ChangeLog
#[derive(Parser, Debug)]
#[command(name = "reap", version, about)]
struct Cli {
    /// Path to the roadmap HTML document
    filename: PathBuf,

    /// Version to extract, matched against heading ids of the form Version_<version>
    #[arg(id = "target_version")]
    version: String,

    /// Verbosity level (-v = INFO, -vv = DEBUG, -vvv = TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .init();

    let written = reap_lib::run(&cli.filename, &cli.version, Path::new("ChangeLog"))?;
    info!(entries = written, "ChangeLog updated");

    Ok(())
}
