//! Shellfs binary: loads configuration, initializes logging, seeds the
//! sample namespace, and runs the interactive session over stdin/stdout.

use anyhow::Context;
use clap::Parser;
use shellfs::config::ShellConfig;
use shellfs::logging;
use shellfs::namespace::Namespace;
use shellfs::session::{seed_sample, Session};
use std::io;
use std::path::PathBuf;
use tracing::info;

/// Shellfs - In-memory hierarchical namespace simulator
#[derive(Parser)]
#[command(name = "shellfs")]
#[command(about = "In-memory hierarchical namespace simulator with a shell-style command loop")]
struct Cli {
    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start with an empty tree instead of the sample namespace
    #[arg(long)]
    no_seed: bool,

    /// State file used by save/load when no argument is given
    #[arg(long)]
    state_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ShellConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    if let Some(output) = cli.log_output {
        config.logging.output = output;
    }
    if let Some(file) = cli.log_file {
        config.logging.file = Some(file);
    }
    if cli.no_seed {
        config.session.seed_sample = false;
    }
    if let Some(state_file) = cli.state_file {
        config.session.state_file = Some(state_file);
    }

    logging::init_logging(Some(&config.logging)).context("initializing logging")?;

    let mut namespace = Namespace::new();
    if config.session.seed_sample {
        seed_sample(&mut namespace).context("seeding sample namespace")?;
    }
    info!(nodes = namespace.len(), "namespace ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::with_config(namespace, stdin.lock(), stdout.lock(), &config.session);
    session.run().context("running session")?;
    info!("session ended");
    Ok(())
}
