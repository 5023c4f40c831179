use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub mod command;
pub mod config;
pub mod session;

pub use command::{Command, CommandError};
pub use config::{ConfigError, OutputFormat, SessionConfig};
pub use session::{run_session, Outcome, Session, SessionSummary};

const INTERACTIVE_PROMPT: &str = "> ";

#[derive(Debug, Parser)]
#[command(name = "printq")]
#[command(about = "Priority scheduler for named print jobs")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a command session over a script file or standard input.
    Run {
        /// Read commands from this file instead of standard input.
        #[arg(long, value_name = "FILE")]
        script: Option<PathBuf>,
        /// Output format (overrides PRINTQ_FORMAT).
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Exit with an error on the first rejected command.
        #[arg(long)]
        stop_on_error: bool,
        /// Prompt shown before each command.
        #[arg(long)]
        prompt: Option<String>,
    },
    /// Print the session command reference.
    #[command(name = "commands")]
    Reference,
    /// Print CLI version.
    Version,
}

pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    init_logging();

    match cli.command {
        Commands::Run { script, format, stop_on_error, prompt } => {
            let mut config =
                SessionConfig::from_env().context("invalid session configuration")?;
            if let Some(format) = format {
                config = config.with_format(format);
            }
            if stop_on_error {
                config = config.with_stop_on_error(true);
            }
            run_script(script.as_deref(), config, prompt)
        }
        Commands::Reference => {
            println!("{}", command::USAGE);
            Ok(())
        }
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn run_script(script: Option<&Path>, config: SessionConfig, prompt: Option<String>) -> Result<()> {
    let stdout = io::stdout().lock();

    match script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            let config = match prompt {
                Some(prompt) => config.with_prompt(prompt),
                None => config,
            };
            run_session(BufReader::new(file), stdout, &config)?;
        }
        None => {
            let stdin = io::stdin();
            let config = match prompt {
                Some(prompt) => config.with_prompt(prompt),
                None if stdin.is_terminal() => config.with_prompt(INTERACTIVE_PROMPT),
                None => config,
            };
            run_session(stdin.lock(), stdout, &config)?;
        }
    }

    Ok(())
}

/// Log to stderr so stdout carries only session output. Filter via `RUST_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
