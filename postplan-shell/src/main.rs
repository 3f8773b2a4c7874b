//! postplan - compose, schedule and track social posts
//!
//! Line-oriented shell over the Postplan core. Reads one command per line
//! from stdin; everything lives in memory and is gone when the shell exits.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use libpostplan::logging::{LogFormat, LoggingConfig};
use libpostplan::{Config, PostplanError, SystemClock};
use postplan_shell::{AppState, OutputFormat, Session, ShellError};

#[derive(Parser, Debug)]
#[command(name = "postplan")]
#[command(version)]
#[command(about = "Compose, schedule and track social posts")]
#[command(long_about = "\
postplan - compose, schedule and track social posts

DESCRIPTION:
    postplan keeps a queue of posts, each tagged with one or more platforms
    and a target date and time. Nothing is sent anywhere: you mark a post as
    posted once you have published it yourself.

    Commands are read one per line from stdin. Type `help` for the list.

USAGE EXAMPLES:
    # Interactive session
    postplan

    # Scripted session with JSON output
    printf 'content Hello\\ntoggle twitter\\nsubmit\\nlist\\n' | postplan --format json

CONFIGURATION:
    Configuration file: ~/.config/postplan/config.toml

    Override with environment variables:
        POSTPLAN_CONFIG      - Path to config file
        POSTPLAN_LOG_FORMAT  - text, json or pretty
        POSTPLAN_LOG_LEVEL   - error, warn, info, debug, trace

EXIT CODES:
    0 - Success
    1 - Configuration or I/O error
    3 - Invalid input
")]
struct Cli {
    /// Path to config file (default: $POSTPLAN_CONFIG or ~/.config/postplan/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for content suggestions (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Output format for list, stats, draft and platforms
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log format: text, json or pretty (overrides config)
    #[arg(long, env = "POSTPLAN_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Enable verbose logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    let mut logging =
        LoggingConfig::from_section(&config.logging, cli.verbose).with_env_overrides();
    if let Some(format) = cli.log_format {
        logging.format = format;
    }
    logging.init();

    if let Some(seed) = cli.seed {
        config.suggestions.seed = Some(seed);
    }

    let state = AppState::from_config(&config, Arc::new(SystemClock))?;
    tracing::debug!(format = ?cli.format, "Starting session");

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let mut session = Session::new(std::io::stdout(), std::io::stderr(), cli.format);
    if interactive {
        session = session.with_prompt("postplan> ");
    }

    let state = session.run(stdin.lock(), state)?;
    tracing::debug!(posts = state.store.len(), "Session ended");
    Ok(())
}

fn exit_code(error: &anyhow::Error) -> i32 {
    if let Some(e) = error.downcast_ref::<ShellError>() {
        return e.exit_code();
    }
    if let Some(e) = error.downcast_ref::<PostplanError>() {
        return e.exit_code();
    }
    1
}
