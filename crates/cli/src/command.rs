//! Session command language.
//!
//! One command per line. For commands that take a job name and a priority,
//! the priority is the last token and everything between the keyword and the
//! priority is the name, so names may contain spaces.

use printq_scheduler::Priority;
use thiserror::Error;

pub const USAGE: &str = "\
Commands:
  insert <name> <priority>   Queue a new print job
  peek                       Show the next job to process
  process                    Process the next job
  update <name> <priority>   Change the priority of a queued job
  list                       Show all jobs, highest priority first
  dump                       Show all jobs in queue storage order
  help                       Show this help
  quit                       End the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert { name: String, priority: Priority },
    Peek,
    Process,
    Update { name: String, priority: Priority },
    List,
    Dump,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Invalid choice \"{0}\". Type \"help\" for a list of commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    MissingArguments(&'static str),

    #[error("Invalid priority \"{0}\". Priority must be a whole number.")]
    InvalidPriority(String),

    #[error("Input line is not valid UTF-8.")]
    InvalidUtf8,
}

impl Command {
    /// Parse one line of input.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "insert" | "add" => {
                let (name, priority) = name_and_priority(rest, "insert <name> <priority>")?;
                Command::Insert { name, priority }
            }
            "update" => {
                let (name, priority) = name_and_priority(rest, "update <name> <priority>")?;
                Command::Update { name, priority }
            }
            "peek" | "next" => Command::Peek,
            "process" | "pop" => Command::Process,
            "list" | "ls" => Command::List,
            "dump" => Command::Dump,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(keyword.to_string())),
        };

        Ok(Some(command))
    }
}

fn name_and_priority(
    args: &str,
    usage: &'static str,
) -> Result<(String, Priority), CommandError> {
    let (name, priority) = args
        .rsplit_once(char::is_whitespace)
        .ok_or(CommandError::MissingArguments(usage))?;

    // `args` is trimmed, so a split always leaves a non-empty name
    let name = name.trim_end();

    let priority = priority
        .parse::<Priority>()
        .map_err(|_| CommandError::InvalidPriority(priority.to_string()))?;

    Ok((name.to_string(), priority))
}
