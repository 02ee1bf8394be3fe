//! Command interpreter.
//!
//! Turns one line of user input into a [`Command`]:
//!
//! - `buy milk by friday` (no keyword, so `add`)
//! - `search milk`
//! - `done 3`, `undone 3`, `delete 3`, `del 3`
//! - `edit 3 buy oat milk on saturday`
//! - `clear`, `undo`

use std::collections::HashSet;

use tracing::debug;

use super::tokenizer::{CommandTokenizer, Tokenized};
use super::types::{Command, CommandKind, TaskId};
use crate::config::CommandsConfig;
use crate::core::{tokens, ReferenceMoment};
use crate::error::DolahError;
use crate::features::nlp::{MarkerTaskParser, TaskParser};

/// Interprets input lines as commands.
///
/// The parser holds no mutable state; the same line and reference moment
/// always produce the same result.
#[derive(Debug, Clone)]
pub struct CommandParser<P = MarkerTaskParser> {
    tokenizer: CommandTokenizer,
    task_parser: P,
    disabled: HashSet<CommandKind>,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser {
    /// Parser with the built-in keywords and the default task parser.
    #[must_use]
    pub fn new() -> Self {
        Self::with_task_parser(MarkerTaskParser)
    }

    /// Parser configured with user aliases and disabled commands.
    #[must_use]
    pub fn from_config(config: &CommandsConfig) -> Self {
        let mut parser = Self::new()
            .with_tokenizer(CommandTokenizer::new().with_aliases(&config.aliases));
        parser.disabled.extend(config.disabled.iter().copied());
        parser
    }
}

impl<P: TaskParser> CommandParser<P> {
    /// Parser that hands task descriptions to `task_parser`.
    pub fn with_task_parser(task_parser: P) -> Self {
        Self {
            tokenizer: CommandTokenizer::new(),
            task_parser,
            disabled: HashSet::new(),
        }
    }

    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: CommandTokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Refuse to dispatch `kind`; it then fails with `UnhandledCommand`.
    #[must_use]
    pub fn disable(mut self, kind: CommandKind) -> Self {
        self.disabled.insert(kind);
        self
    }

    /// Interpret one input line.
    ///
    /// # Errors
    ///
    /// Returns the most specific `DolahError` for the first problem found:
    /// unknown or disabled keyword, wrong number of arguments, bad task id or
    /// an error from the task parser.
    pub fn parse(&self, line: &str, now: &ReferenceMoment) -> Result<Command, DolahError> {
        let Tokenized { keyword, args } = self.tokenizer.tokenize(&tokens::split(line, " "));
        let keyword = keyword.unwrap_or_else(|| CommandKind::Add.keyword().to_string());

        let kind = CommandKind::from_keyword(&keyword)
            .ok_or_else(|| DolahError::UnrecognizedCommand(keyword.clone()))?;
        if self.disabled.contains(&kind) {
            return Err(DolahError::UnhandledCommand(keyword));
        }

        let command = match kind {
            CommandKind::Add => self.parse_add(&args, now)?,
            CommandKind::Search => parse_search(&args)?,
            CommandKind::Done => Command::SetDone {
                task_id: parse_marked_task_id(&args)?,
            },
            CommandKind::Undone => Command::SetUndone {
                task_id: parse_marked_task_id(&args)?,
            },
            CommandKind::Edit => self.parse_edit(&args, now)?,
            CommandKind::Delete => parse_delete(&args)?,
            CommandKind::Clear => {
                expect_no_arguments(&args)?;
                Command::Clear
            },
            CommandKind::Undo => {
                expect_no_arguments(&args)?;
                Command::Undo
            },
        };

        debug!(%line, ?command, "parsed command");
        Ok(command)
    }

    fn parse_add(&self, args: &[String], now: &ReferenceMoment) -> Result<Command, DolahError> {
        if args.is_empty() {
            return Err(DolahError::TooFewArguments);
        }
        let task = self.task_parser.parse_task(args, now)?;
        Ok(Command::Add { task })
    }

    fn parse_edit(&self, args: &[String], now: &ReferenceMoment) -> Result<Command, DolahError> {
        let [id, rest @ ..] = args else {
            return Err(DolahError::TooFewArguments);
        };
        if rest.is_empty() {
            return Err(DolahError::TooFewArguments);
        }

        let task_id = to_stored_id(id, parse_task_id(id)?)?;
        let task = self.task_parser.parse_task(rest, now)?;
        Ok(Command::Edit { task_id, task })
    }
}

fn parse_search(args: &[String]) -> Result<Command, DolahError> {
    if args.is_empty() {
        return Err(DolahError::TooFewArguments);
    }
    Ok(Command::Search {
        query: tokens::join(args, " "),
    })
}

fn parse_delete(args: &[String]) -> Result<Command, DolahError> {
    let id = expect_one_argument(args)?;
    let task_id = to_stored_id(id, parse_task_id(id)?)?;
    Ok(Command::Delete { task_id })
}

/// Task id for `done` and `undone`, which also reject ids below 1.
fn parse_marked_task_id(args: &[String]) -> Result<TaskId, DolahError> {
    let id = expect_one_argument(args)?;
    let user_id = parse_task_id(id)?;
    if user_id < 1 {
        return Err(DolahError::InvalidTaskId(id.clone()));
    }
    to_stored_id(id, user_id)
}

fn parse_task_id(token: &str) -> Result<TaskId, DolahError> {
    token
        .parse()
        .map_err(|_| DolahError::InvalidTaskId(token.to_string()))
}

fn to_stored_id(token: &str, user_id: TaskId) -> Result<TaskId, DolahError> {
    user_id
        .checked_sub(1)
        .ok_or_else(|| DolahError::InvalidTaskId(token.to_string()))
}

fn expect_one_argument(args: &[String]) -> Result<&String, DolahError> {
    match args {
        [] => Err(DolahError::TooFewArguments),
        [only] => Ok(only),
        _ => Err(DolahError::TooManyArguments),
    }
}

fn expect_no_arguments(args: &[String]) -> Result<(), DolahError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(DolahError::TooManyArguments)
    }
}
