use crate::cli::{Command, TaskCommand};
use jarvis_core::assistant;
use jarvis_core::error::AppError;
use jarvis_core::event_api;
use jarvis_core::model::{Document, Task};
use jarvis_core::stats;
use jarvis_core::task_api;
use rand::Rng;
use std::io::Write;

pub const HELP_TEXT: &str = "
🤖 Jarvis CLI Commands:

  task add <title>     Add a new task
  task list            List all tasks
  task done <id>       Mark task as complete
  task delete <id>     Delete a task

  event <title>        Quick event creation
  events               List all events

  search <query>       Search files
  chat <message>       Chat with Jarvis

  stats                Show statistics
  help                 Show this help
";

/// Runs one command against `document`, writing human-readable output to `out`.
///
/// Returns `true` when the document changed and has to be saved.
pub fn execute<W: Write, R: Rng>(
    command: &Command,
    document: &mut Document,
    rng: &mut R,
    out: &mut W,
) -> Result<bool, AppError> {
    match command {
        Command::Banner => {
            writeln!(out)?;
            writeln!(out, "🤖 Jarvis CLI - Your Personal Assistant")?;
            writeln!(out, "{}", "=".repeat(40))?;
            writeln!(out, "{HELP_TEXT}")?;
        }
        Command::Help => writeln!(out, "{HELP_TEXT}")?,
        Command::Task(task_command) => return execute_task(task_command, document, out),
        Command::Event { title } => {
            let event = event_api::add_event(document, title)?;
            writeln!(out, "📅 Event added: {}", event.title)?;
            return Ok(true);
        }
        Command::Events => {
            let events = event_api::list_events(document);
            if events.is_empty() {
                writeln!(out, "📅 No events found")?;
            } else {
                writeln!(out)?;
                writeln!(out, "📅 Events:")?;
                for event in events {
                    writeln!(out, "  [{}] {}", event.id, event.title)?;
                }
            }
        }
        Command::Search { query } => {
            writeln!(out)?;
            writeln!(out, "🔍 Searching for: {}", assistant::search_query(query))?;
            writeln!(out, "{}", assistant::SEARCH_NOTICE)?;
            writeln!(out, "{}", assistant::SEARCH_PLACEHOLDER)?;
        }
        Command::Chat { message } => {
            writeln!(out)?;
            writeln!(out, "👤 You: {message}")?;
            writeln!(out, "🤖 Jarvis: {}", assistant::chat_reply(message, rng))?;
        }
        Command::Stats => {
            let stats = stats::compute(document);
            writeln!(out)?;
            writeln!(out, "📊 Statistics:")?;
            writeln!(out, "  Total Tasks: {}", stats.total)?;
            writeln!(out, "  Completed: {}", stats.completed)?;
            writeln!(out, "  Pending: {}", stats.pending)?;
            writeln!(out, "  Events: {}", stats.events)?;
        }
        Command::Usage(usage) => writeln!(out, "{usage}")?,
        Command::Unknown(word) => {
            writeln!(out, "Unknown command: {word}")?;
            writeln!(out, "Type 'help' for available commands")?;
        }
    }

    Ok(false)
}

fn execute_task<W: Write>(
    command: &TaskCommand,
    document: &mut Document,
    out: &mut W,
) -> Result<bool, AppError> {
    match command {
        TaskCommand::Add { title } => {
            let task = task_api::add_task(document, title)?;
            writeln!(out, "✅ Task added: {}", task.title)?;
            Ok(true)
        }
        TaskCommand::List => {
            print_tasks(task_api::list_tasks(document), out)?;
            Ok(false)
        }
        TaskCommand::Done { id } => match task_api::complete_task(document, *id)? {
            Some(_) => {
                writeln!(out, "✅ Task {id} marked as done!")?;
                Ok(true)
            }
            None => {
                writeln!(out, "❌ Task {id} not found")?;
                Ok(false)
            }
        },
        TaskCommand::Delete { id } => {
            task_api::delete_tasks(document, *id);
            writeln!(out, "🗑️ Task {id} deleted")?;
            Ok(true)
        }
        TaskCommand::Unknown(word) => {
            writeln!(out, "Unknown task command: {word}")?;
            writeln!(out, "Usage: task <add|list|done|delete>")?;
            Ok(false)
        }
    }
}

fn print_tasks<W: Write>(tasks: &[Task], out: &mut W) -> Result<(), AppError> {
    if tasks.is_empty() {
        writeln!(out, "📋 No tasks found")?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "📋 Tasks:")?;
    for task in tasks {
        let status_icon = if task.is_completed() { "✅" } else { "⬜" };
        writeln!(out, "  {} [{}] {}", status_icon, task.id, task.title)?;
    }

    Ok(())
}
