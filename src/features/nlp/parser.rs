//! Task description parser.
//!
//! Turns the argument tokens of `add` and `edit` into a [`Task`]. Dates are
//! introduced by marker words:
//!
//! - `submit report by friday` - deadline
//! - `dinner on 25 dec` - event on one day
//! - `call mom in 3 weeks` - event after an offset
//! - `holiday from 24/12 to 2/1/24` - event spanning several days
//!
//! A marker whose trailing words do not form a date is ordinary text.

use serde::Serialize;
use tracing::{debug, trace};

use crate::core::{resolve_date, tokens, CalendarDate, ReferenceMoment};
use crate::error::DolahError;

const DEADLINE_MARKER: &str = "by";
const EVENT_MARKER: &str = "on";
const OFFSET_MARKER: &str = "in";
const SPAN_START_MARKER: &str = "from";
const SPAN_END_MARKER: &str = "to";

/// How a task is placed on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskKind {
    /// No date attached.
    Floating,
    /// Must be done by `due`.
    Deadline { due: CalendarDate },
    /// Happens on `start`, optionally lasting until `end`.
    Event {
        start: CalendarDate,
        end: Option<CalendarDate>,
    },
}

/// A task as described by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub description: String,
    #[serde(flatten)]
    pub kind: TaskKind,
}

impl Task {
    #[must_use]
    pub fn floating(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            kind: TaskKind::Floating,
        }
    }

    /// The first date attached to this task, if any.
    #[must_use]
    pub const fn date(&self) -> Option<CalendarDate> {
        match self.kind {
            TaskKind::Floating => None,
            TaskKind::Deadline { due } => Some(due),
            TaskKind::Event { start, .. } => Some(start),
        }
    }
}

/// Builds a [`Task`] from the argument tokens of a command.
#[cfg_attr(test, mockall::automock)]
pub trait TaskParser {
    /// Parse a task description.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokens do not describe a usable task.
    fn parse_task(&self, tokens: &[String], now: &ReferenceMoment) -> Result<Task, DolahError>;
}

/// Default [`TaskParser`] that understands `by`, `on`, `in` and `from .. to` markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerTaskParser;

impl TaskParser for MarkerTaskParser {
    fn parse_task(&self, tokens: &[String], now: &ReferenceMoment) -> Result<Task, DolahError> {
        let (split_at, kind) =
            find_dated_suffix(tokens, now)?.unwrap_or((tokens.len(), TaskKind::Floating));

        let description = tokens::join(&tokens[..split_at], " ");
        if description.is_empty() {
            return Err(DolahError::TooFewArguments);
        }

        debug!(%description, ?kind, "parsed task");
        Ok(Task { description, kind })
    }
}

/// Find the rightmost marker whose trailing words resolve to a date.
///
/// Returns the index where the description ends and the resulting kind.
fn find_dated_suffix(
    tokens: &[String],
    now: &ReferenceMoment,
) -> Result<Option<(usize, TaskKind)>, DolahError> {
    for (index, token) in tokens.iter().enumerate().rev() {
        let date_run = &tokens[index + 1..];

        if is_marker(token, DEADLINE_MARKER) {
            if let Ok(due) = resolve_date(date_run, now) {
                return Ok(Some((index, TaskKind::Deadline { due })));
            }
        } else if is_marker(token, EVENT_MARKER) {
            if let Ok(start) = resolve_date(date_run, now) {
                return Ok(Some((index, TaskKind::Event { start, end: None })));
            }
        } else if is_marker(token, OFFSET_MARKER) {
            // The date interpreter reads `in <quantity>` itself.
            if let Ok(start) = resolve_date(&tokens[index..], now) {
                return Ok(Some((index, TaskKind::Event { start, end: None })));
            }
        } else if is_marker(token, SPAN_END_MARKER) {
            if let Some(found) = find_span(tokens, index, now)? {
                return Ok(Some(found));
            }
        }
        trace!(token = %token, "no date after word");
    }

    Ok(None)
}

/// Match `from <start> to <end>` where `to_index` is the position of `to`.
fn find_span(
    tokens: &[String],
    to_index: usize,
    now: &ReferenceMoment,
) -> Result<Option<(usize, TaskKind)>, DolahError> {
    let Ok(end) = resolve_date(&tokens[to_index + 1..], now) else {
        return Ok(None);
    };

    for from_index in (0..to_index).rev() {
        if !is_marker(&tokens[from_index], SPAN_START_MARKER) {
            continue;
        }
        let Ok(start) = resolve_date(&tokens[from_index + 1..to_index], now) else {
            continue;
        };

        if end < start {
            return Err(DolahError::InvalidDateExpression(format!(
                "{} ends before it starts",
                tokens::join(&tokens[from_index + 1..], " ")
            )));
        }

        let kind = TaskKind::Event {
            start,
            end: Some(end),
        };
        return Ok(Some((from_index, kind)));
    }

    Ok(None)
}

fn is_marker(token: &str, marker: &str) -> bool {
    token.eq_ignore_ascii_case(marker)
}
