//! Error types for dolah.

use thiserror::Error;

/// Errors produced while interpreting user input or running the CLI.
#[derive(Debug, Error)]
pub enum DolahError {
    /// The command needs more arguments than were given.
    #[error("Too little arguments")]
    TooFewArguments,

    /// The command accepts fewer arguments than were given.
    #[error("Too many arguments")]
    TooManyArguments,

    /// The keyword is not in any alias table.
    #[error("Command not recognized: {0}")]
    UnrecognizedCommand(String),

    /// The keyword is known but no handler is dispatched for it.
    #[error("Command not handled: {0}")]
    UnhandledCommand(String),

    /// The task id argument is not a usable integer.
    #[error("Invalid task ID given: {0}")]
    InvalidTaskId(String),

    /// Neither relative nor absolute interpretation produced a valid date.
    #[error("Invalid date expression: {0}")]
    InvalidDateExpression(String),

    /// Configuration could not be read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DolahError {
    /// Whether this error came from interpreting user input, as opposed to
    /// the surrounding application (config, IO, serialization).
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::TooFewArguments
                | Self::TooManyArguments
                | Self::UnrecognizedCommand(_)
                | Self::UnhandledCommand(_)
                | Self::InvalidTaskId(_)
                | Self::InvalidDateExpression(_)
        )
    }
}
