use colored::Colorize;

use crate::command::Command;
use crate::core::CalendarDate;
use crate::error::DolahError;
use crate::features::nlp::{Task, TaskKind};

/// Format a command as a short human readable summary
pub fn format_command_pretty(command: &Command) -> String {
    let keyword = command.kind().to_string().green().bold();

    match command {
        Command::Add { task } => format!("{keyword} {}", format_task_pretty(task)),
        Command::Search { query } => format!("{keyword} \"{query}\""),
        Command::SetDone { task_id }
        | Command::SetUndone { task_id }
        | Command::Delete { task_id } => {
            format!("{keyword} {}", format_task_id(*task_id))
        },
        Command::Edit { task_id, task } => {
            format!("{keyword} {} -> {}", format_task_id(*task_id), format_task_pretty(task))
        },
        Command::Clear | Command::Undo => keyword.to_string(),
    }
}

/// Format a task with its dates
pub fn format_task_pretty(task: &Task) -> String {
    let mut line = task.description.bold().to_string();

    match task.kind {
        TaskKind::Floating => {},
        TaskKind::Deadline { due } => {
            line.push_str(&format!("  {} {}", "due".dimmed(), format_date_pretty(&due)));
        },
        TaskKind::Event { start, end: None } => {
            line.push_str(&format!("  {} {}", "on".dimmed(), format_date_pretty(&start)));
        },
        TaskKind::Event {
            start,
            end: Some(end),
        } => {
            line.push_str(&format!(
                "  {} {} {} {}",
                "from".dimmed(),
                format_date_pretty(&start),
                "to".dimmed(),
                format_date_pretty(&end)
            ));
        },
    }

    line
}

/// Format a date in ISO form
pub fn format_date_pretty(date: &CalendarDate) -> String {
    date.to_iso_date().yellow().to_string()
}

/// Format an interpretation error
pub fn format_error_pretty(error: &DolahError) -> String {
    format!("{}: {error}", "error".red().bold())
}

/// Task ids are shown one-based, the way the user typed them.
fn format_task_id(task_id: i64) -> String {
    format!("#{}", task_id.saturating_add(1)).cyan().to_string()
}
