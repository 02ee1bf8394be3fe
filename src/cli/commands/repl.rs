//! `dolah repl` implementation.

use std::io::{BufRead, Write};

use crate::cli::args::OutputFormat;
use crate::command::CommandParser;
use crate::core::Clock;
use crate::error::DolahError;
use crate::output::{format_command, format_error};

const QUIT_WORDS: &[&str] = &["quit", "exit"];

/// Interpret lines from `input` until it ends or a quit word is read.
///
/// Each line gets a fresh reference moment from `clock`. Interpretation
/// errors are written to `output` and do not stop the loop.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn repl<R: BufRead, W: Write>(
    parser: &CommandParser,
    clock: &dyn Clock,
    input: R,
    output: &mut W,
    format: OutputFormat,
) -> Result<(), DolahError> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if QUIT_WORDS.contains(&line) {
            break;
        }

        let rendered = match parser.parse(line, &clock.now()) {
            Ok(command) => format_command(&command, format)?,
            Err(e) if e.is_parse_error() => format_error(&e, format)?,
            Err(e) => return Err(e),
        };
        writeln!(output, "{rendered}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::core::{FixedClock, ReferenceMoment};
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(ReferenceMoment::from_naive(
            NaiveDate::from_ymd_opt(2023, 6, 14).unwrap(),
        ))
    }

    fn run(input: &str) -> String {
        let mut output = Vec::new();
        repl(
            &CommandParser::new(),
            &clock(),
            Cursor::new(input),
            &mut output,
            OutputFormat::Json,
        )
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_one_result_per_line() {
        let output = run("done 1\n\nclear\n");
        assert!(output.contains("set_done"));
        assert!(output.contains("clear"));
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let output = run("undo x\nundo\n");
        assert!(output.contains("Too many arguments"));
        assert!(output.contains("\"undo\""));
    }

    #[test]
    fn test_quit_stops_reading() {
        let output = run("quit\ndone 1\n");
        assert!(output.is_empty());
    }
}
