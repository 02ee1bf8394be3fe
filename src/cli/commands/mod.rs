//! Command implementations for dolah.
//!
//! This module contains the implementation of all CLI commands.

mod config;
mod parse;
mod repl;

pub use config::config;
pub use parse::{date, parse};
pub use repl::repl;
