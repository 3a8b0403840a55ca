use clap::Parser;
use jarvis_core::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "jarvis",
    author,
    version,
    about = "Command-line personal assistant for tasks and events",
    long_about = None
)]
pub struct Cli {
    /// Path to the JSON store (defaults to ~/.jarvis_cli_data.json)
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Command and its arguments; run `jarvis help` for the list
    ///
    /// Example: jarvis task add Buy milk
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// No arguments at all: header followed by help.
    Banner,
    Help,
    Task(TaskCommand),
    Event { title: String },
    Events,
    Search { query: String },
    Chat { message: String },
    Stats,
    /// A required argument was missing; carries the usage line to print.
    Usage(&'static str),
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCommand {
    Add { title: String },
    List,
    Done { id: i64 },
    Delete { id: i64 },
    Unknown(String),
}

impl Command {
    pub fn needs_store(&self) -> bool {
        matches!(
            self,
            Self::Task(_) | Self::Event { .. } | Self::Events | Self::Stats
        )
    }
}

/// Routes raw argv words (program name excluded) to a command.
///
/// Only a non-numeric id is an error; every other malformed input becomes a
/// `Usage` or `Unknown` command that is reported without failing.
pub fn parse_command(args: &[String]) -> Result<Command, AppError> {
    let Some((first, rest)) = args.split_first() else {
        return Ok(Command::Banner);
    };

    let command = match first.as_str() {
        "task" => parse_task_command(rest)?,
        "event" => match join_words(rest) {
            Some(title) => Command::Event { title },
            None => Command::Usage("Usage: event <title>"),
        },
        "events" => Command::Events,
        "search" => match join_words(rest) {
            Some(query) => Command::Search { query },
            None => Command::Usage("Usage: search <query>"),
        },
        "chat" => match join_words(rest) {
            Some(message) => Command::Chat { message },
            None => Command::Usage("Usage: chat <message>"),
        },
        "stats" => Command::Stats,
        "help" => Command::Help,
        other => Command::Unknown(other.to_string()),
    };

    Ok(command)
}

fn parse_task_command(args: &[String]) -> Result<Command, AppError> {
    let Some((subcommand, rest)) = args.split_first() else {
        return Ok(Command::Task(TaskCommand::List));
    };

    let task = match subcommand.as_str() {
        "add" => match join_words(rest) {
            Some(title) => TaskCommand::Add { title },
            None => return Ok(Command::Usage("Usage: task add <title>")),
        },
        "list" => TaskCommand::List,
        "done" => match rest.first() {
            Some(raw) => TaskCommand::Done { id: parse_id(raw)? },
            None => return Ok(Command::Usage("Usage: task done <id>")),
        },
        "delete" => match rest.first() {
            Some(raw) => TaskCommand::Delete { id: parse_id(raw)? },
            None => return Ok(Command::Usage("Usage: task delete <id>")),
        },
        other => TaskCommand::Unknown(other.to_string()),
    };

    Ok(Command::Task(task))
}

/// Any integer is accepted, negative ones included; they simply match no task.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::invalid_input(format!("invalid task id '{raw}'")))
}

fn join_words(words: &[String]) -> Option<String> {
    let joined = words.join(" ");
    if joined.trim().is_empty() {
        None
    } else {
        Some(joined)
    }
}
