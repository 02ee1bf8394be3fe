//! Command-line interface for dolah.

pub mod args;
pub mod commands;
