//! Command session driving a single job queue.

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use printq_scheduler::{Job, JobHeap, Priority};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::command::{Command, CommandError, USAGE};
use crate::config::{OutputFormat, SessionConfig};

/// Result of one executed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Outcome {
    Inserted { name: String, next: Job },
    Next { job: Job },
    Processed { job: Job },
    Updated { name: String, old_priority: Priority, new_priority: Priority },
    Listing { jobs: Vec<Job> },
    /// Nothing to show or process.
    Empty { message: &'static str },
    Help { usage: &'static str },
    Quit,
    Rejected { error: String },
}

impl Outcome {
    fn rejected(error: impl fmt::Display) -> Self {
        Outcome::Rejected { error: error.to_string() }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Inserted { name, next } => {
                writeln!(f, "Job \"{name}\" added successfully.")?;
                write!(f, "Next job to process: {next}")
            }
            Outcome::Next { job } => write!(f, "Next job to process: {job}"),
            Outcome::Processed { job } => write!(f, "Processing job: {job}"),
            Outcome::Updated { name, new_priority, .. } => {
                write!(f, "Priority of job \"{name}\" updated to {new_priority}.")
            }
            Outcome::Listing { jobs } if jobs.is_empty() => write!(f, "There are no jobs."),
            Outcome::Listing { jobs } => {
                write!(f, "Current jobs:")?;
                for job in jobs {
                    write!(f, "\nJob name: {}, Job priority: {}", job.name, job.priority)?;
                }
                Ok(())
            }
            Outcome::Empty { message } => write!(f, "{message}"),
            Outcome::Help { usage } => write!(f, "{usage}"),
            Outcome::Quit => write!(f, "Exiting program."),
            Outcome::Rejected { error } => write!(f, "Error: {error}"),
        }
    }
}

/// Owns the job queue for the lifetime of a session.
#[derive(Debug, Default)]
pub struct Session {
    queue: JobHeap,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&self) -> &JobHeap {
        &self.queue
    }

    /// Apply one command to the queue.
    pub fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::Insert { name, priority } => self
                .queue
                .insert(name.clone(), priority)
                .and_then(|()| self.queue.peek_max().cloned())
                .map(|next| Outcome::Inserted { name, next })
                .unwrap_or_else(Outcome::rejected),
            Command::Peek => match self.queue.peek_max() {
                Ok(job) => Outcome::Next { job: job.clone() },
                Err(_) => Outcome::Empty { message: "No jobs in the queue." },
            },
            Command::Process => match self.queue.extract_max() {
                Ok(job) => Outcome::Processed { job },
                Err(_) => Outcome::Empty { message: "No jobs to process." },
            },
            Command::Update { name, priority } => match self.queue.update_priority(&name, priority) {
                Ok(old_priority) => {
                    Outcome::Updated { name, old_priority, new_priority: priority }
                }
                Err(err) => Outcome::rejected(err),
            },
            Command::List => Outcome::Listing { jobs: self.queue.ordered_listing() },
            Command::Dump => Outcome::Listing { jobs: self.queue.iter().cloned().collect() },
            Command::Help => Outcome::Help { usage: USAGE },
            Command::Quit => Outcome::Quit,
        }
    }
}

/// Counts reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Commands executed, including rejected ones
    pub commands: usize,
    /// Commands that failed to parse or were refused by the queue
    pub rejected: usize,
}

/// Read commands from `input` until end of input or `quit`, writing one
/// rendered outcome per command to `output`.
pub fn run_session<R, W>(mut input: R, mut output: W, config: &SessionConfig) -> Result<SessionSummary>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session::new();
    let mut summary = SessionSummary::default();
    let mut buf = Vec::new();

    info!(format = ?config.format, stop_on_error = config.stop_on_error, "session started");

    loop {
        if let Some(prompt) = &config.prompt {
            write!(output, "{prompt}")?;
            output.flush()?;
        }

        buf.clear();
        if input.read_until(b'\n', &mut buf).context("failed to read command")? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);

        // An undecodable line is rejected like any other bad command
        let parsed = match std::str::from_utf8(&buf) {
            Ok(text) => Command::parse(text),
            Err(_) => Err(CommandError::InvalidUtf8),
        };
        let outcome = match parsed {
            Ok(None) => continue,
            Ok(Some(command)) => {
                debug!(?command, "executing command");
                session.execute(command)
            }
            Err(err) => Outcome::rejected(err),
        };
        summary.commands += 1;

        write_outcome(&mut output, &outcome, config.format)?;

        match &outcome {
            Outcome::Rejected { error } => {
                summary.rejected += 1;
                warn!(line = line.trim(), %error, "command rejected");
                if config.stop_on_error {
                    output.flush()?;
                    bail!("stopped after rejected command: {error}");
                }
            }
            Outcome::Quit => break,
            _ => {}
        }
    }

    output.flush()?;
    info!(
        commands = summary.commands,
        rejected = summary.rejected,
        queued = session.queue().len(),
        "session finished"
    );

    Ok(summary)
}

fn write_outcome<W: Write>(output: &mut W, outcome: &Outcome, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(output, "{outcome}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *output, outcome).context("failed to encode outcome")?;
            writeln!(output)?;
        }
    }
    Ok(())
}
