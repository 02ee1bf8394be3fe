//! Command interpretation.
//!
//! Splits the leading keyword off an input line and builds one of the eight
//! [`Command`] kinds from the remaining words.

mod parser;
mod tokenizer;
mod types;

pub use parser::CommandParser;
pub use tokenizer::{CommandTokenizer, Tokenized};
pub use types::{Command, CommandKind, TaskId};
