//! JSON output formatting for dolah.

use serde::Serialize;
use serde_json::json;

use crate::command::Command;
use crate::core::CalendarDate;
use crate::error::DolahError;

/// Format a command as JSON
///
/// # Errors
///
/// Returns `DolahError::Json` if JSON serialization fails.
pub fn format_command_json(command: &Command) -> Result<String, DolahError> {
    to_json(command)
}

/// Format a resolved date as JSON
///
/// # Errors
///
/// Returns `DolahError::Json` if JSON serialization fails.
pub fn format_date_json(date: &CalendarDate) -> Result<String, DolahError> {
    let output = json!({
        "date": date.to_iso_date(),
        "year": date.year,
        "month": date.month,
        "day": date.day,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a failed interpretation as JSON
///
/// # Errors
///
/// Returns `DolahError::Json` if JSON serialization fails.
pub fn format_error_json(error: &DolahError) -> Result<String, DolahError> {
    let output = json!({ "error": error.to_string() });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `DolahError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, DolahError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::nlp::Task;

    #[test]
    fn test_format_command_json() {
        let command = Command::Add {
            task: Task::floating("buy milk"),
        };
        let value: serde_json::Value =
            serde_json::from_str(&format_command_json(&command).unwrap()).unwrap();
        assert_eq!(value["command"], "add");
        assert_eq!(value["task"]["description"], "buy milk");
        assert_eq!(value["task"]["type"], "floating");
    }

    #[test]
    fn test_format_date_json() {
        let value: serde_json::Value =
            serde_json::from_str(&format_date_json(&CalendarDate::new(2023, 11, 25)).unwrap())
                .unwrap();
        assert_eq!(value["date"], "2023-12-25");
        assert_eq!(value["month"], 11);
    }

    #[test]
    fn test_format_error_json() {
        let output = format_error_json(&DolahError::TooManyArguments).unwrap();
        assert!(output.contains("Too many arguments"));
    }
}
