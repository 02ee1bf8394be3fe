//! `dolah parse` and `dolah date` implementations.

use crate::cli::args::OutputFormat;
use crate::command::CommandParser;
use crate::core::{parse_date, ReferenceMoment};
use crate::error::DolahError;
use crate::output::{format_command, format_date};

/// Execute the parse command.
///
/// # Errors
///
/// Returns the interpretation error for the line, or an error if output
/// formatting fails.
pub fn parse(
    parser: &CommandParser,
    words: &[String],
    now: &ReferenceMoment,
    format: OutputFormat,
) -> Result<String, DolahError> {
    let command = parser.parse(&words.join(" "), now)?;
    format_command(&command, format)
}

/// Execute the date command.
///
/// # Errors
///
/// Returns `DolahError::InvalidDateExpression` if the words are not a date,
/// or an error if output formatting fails.
pub fn date(
    words: &[String],
    now: &ReferenceMoment,
    format: OutputFormat,
) -> Result<String, DolahError> {
    let date = parse_date(&words.join(" "), now)?;
    format_date(&date, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> ReferenceMoment {
        ReferenceMoment::from_naive(NaiveDate::from_ymd_opt(2023, 6, 14).unwrap())
    }

    fn words(input: &str) -> Vec<String> {
        input.split(' ').map(String::from).collect()
    }

    #[test]
    fn test_parse_json() {
        let output = parse(
            &CommandParser::new(),
            &words("done 3"),
            &now(),
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["command"], "set_done");
        assert_eq!(value["task_id"], 2);
    }

    #[test]
    fn test_parse_error() {
        let result = parse(
            &CommandParser::new(),
            &words("undo now"),
            &now(),
            OutputFormat::Pretty,
        );
        assert!(matches!(result, Err(DolahError::TooManyArguments)));
    }

    #[test]
    fn test_date_pretty() {
        let output = date(&words("next week"), &now(), OutputFormat::Pretty).unwrap();
        assert!(output.contains("2023-06-21"));
    }

    #[test]
    fn test_words_may_hold_spaces() {
        let quoted = vec!["25 dec".to_string()];
        let output = date(&quoted, &now(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["date"], "2023-12-25");

        let output = date(&words("in 3 weeks"), &now(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["date"], "2023-07-05");
    }

    #[test]
    fn test_date_error() {
        assert!(matches!(
            date(&words("31/02/2023"), &now(), OutputFormat::Json),
            Err(DolahError::InvalidDateExpression(_))
        ));
    }
}
