//! Output formatting for dolah.
//!
//! This module provides formatters for displaying interpreted commands and
//! dates in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::command::Command;
use crate::core::CalendarDate;
use crate::error::DolahError;

pub use json::*;
pub use pretty::*;

/// Format a command based on output format
///
/// # Errors
///
/// Returns `DolahError::Json` if JSON serialization fails.
pub fn format_command(command: &Command, format: OutputFormat) -> Result<String, DolahError> {
    match format {
        OutputFormat::Pretty => Ok(format_command_pretty(command)),
        OutputFormat::Json => format_command_json(command),
    }
}

/// Format a resolved date based on output format
///
/// # Errors
///
/// Returns `DolahError::Json` if JSON serialization fails.
pub fn format_date(date: &CalendarDate, format: OutputFormat) -> Result<String, DolahError> {
    match format {
        OutputFormat::Pretty => Ok(format_date_pretty(date)),
        OutputFormat::Json => format_date_json(date),
    }
}

/// Format an interpretation error based on output format
///
/// # Errors
///
/// Returns `DolahError::Json` if JSON serialization fails.
pub fn format_error(error: &DolahError, format: OutputFormat) -> Result<String, DolahError> {
    match format {
        OutputFormat::Pretty => Ok(format_error_pretty(error)),
        OutputFormat::Json => format_error_json(error),
    }
}
