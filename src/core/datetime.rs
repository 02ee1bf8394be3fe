//! Natural language date interpretation.
//!
//! Resolves token runs such as `next monday`, `tomorrow`, `3 weeks`,
//! `25/12/23` or `25th of dec` into a [`CalendarDate`], relative to a
//! caller-supplied [`ReferenceMoment`].
//!
//! Interpretation is an ordered fallback chain:
//!
//! 1. normalize the tokens (drop decorators, strip punctuation, split compact
//!    forms such as `25/12/2023`);
//! 2. try a relative expression;
//! 3. try an absolute date in day-month-year order;
//! 4. try an absolute date in month-day-year order.
//!
//! Only when every step rejects the input is an error returned.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::patterns::{self, Unit};
use super::tokens;
use crate::error::DolahError;

/// A day on the calendar, without time of day.
///
/// `month` is zero-based (0 = January) and `day` is one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    #[must_use]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    #[must_use]
    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
            day: date.day(),
        }
    }

    /// Convert to a chrono date, or `None` if the fields do not name a real day.
    #[must_use]
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.checked_add(1)?, self.day)
    }

    /// Whether normalizing this date through the calendar leaves it unchanged.
    ///
    /// Rejects day 0, day 31 in 30-day months, February 29 outside leap
    /// years and months past December.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.to_naive().is_some()
    }

    /// Weekday index with 0 = Sunday.
    #[must_use]
    pub fn weekday(&self) -> Option<u32> {
        self.to_naive().map(|d| d.weekday().num_days_from_sunday())
    }

    /// Convert to ISO 8601 date string.
    #[must_use]
    pub fn to_iso_date(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year,
            self.month.saturating_add(1),
            self.day
        )
    }
}

/// The "now" that relative expressions are computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceMoment {
    today: NaiveDate,
}

impl ReferenceMoment {
    #[must_use]
    pub const fn from_naive(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Build a moment from a calendar date, or `None` if the date is invalid.
    #[must_use]
    pub fn new(today: CalendarDate) -> Option<Self> {
        today.to_naive().map(Self::from_naive)
    }

    /// Today's date.
    #[must_use]
    pub fn date(&self) -> CalendarDate {
        CalendarDate::from_naive(self.today)
    }

    /// Today's weekday index with 0 = Sunday.
    #[must_use]
    pub fn weekday(&self) -> u32 {
        self.today.weekday().num_days_from_sunday()
    }

    fn plus_days(&self, days: u64) -> Option<CalendarDate> {
        self.today
            .checked_add_days(Days::new(days))
            .map(CalendarDate::from_naive)
    }
}

/// Parse a space separated date expression.
///
/// # Errors
///
/// Returns `DolahError::InvalidDateExpression` if the text is neither a
/// relative expression nor a valid absolute date.
pub fn parse_date(input: &str, now: &ReferenceMoment) -> Result<CalendarDate, DolahError> {
    resolve_date(&tokens::split(input, " "), now)
}

/// Resolve a token run into a calendar date.
///
/// # Errors
///
/// Returns `DolahError::InvalidDateExpression` if the tokens are neither a
/// relative expression nor a valid absolute date.
pub fn resolve_date(tokens: &[String], now: &ReferenceMoment) -> Result<CalendarDate, DolahError> {
    let input = tokens::join(tokens, " ");
    let normalized = normalize(tokens);

    if let Some(date) = resolve_relative(&normalized, now) {
        debug!(%input, %date, "resolved relative date");
        return Ok(date);
    }
    trace!(%input, "not a relative date, trying absolute forms");

    if let Some(date) = resolve_absolute(&normalized, now) {
        debug!(%input, %date, "resolved absolute date");
        return Ok(date);
    }

    Err(DolahError::InvalidDateExpression(input))
}

/// Lowercase, drop decorators and punctuation, and split a lone compact token
/// on the first divider that actually divides it.
fn normalize(tokens: &[String]) -> Vec<String> {
    let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

    let mut clean: Vec<String> = tokens::remove_all(&lowered, patterns::DECORATORS)
        .into_iter()
        .map(|t| t.replace(patterns::PUNCTUATION, ""))
        .filter(|t| !t.is_empty())
        .collect();

    if clean.len() == 1 {
        let single = clean.remove(0);
        let pieces = patterns::DATE_DIVIDERS
            .iter()
            .map(|divider| tokens::split(&single, divider))
            .find(|pieces| pieces.len() > 1);
        clean = pieces.unwrap_or_else(|| vec![single]);
    }

    clean
}

/// Days until the given weekday (0 = Monday).
///
/// A weekday earlier in the week than today wraps into next week. With
/// `not_this_week` every result is pushed one further week out.
fn weekday_offset(weekday: u32, now: &ReferenceMoment, not_this_week: bool) -> u64 {
    let diff = i64::from(weekday) - i64::from(now.weekday()) + 1;
    let diff = if diff < 0 || not_this_week { diff + 7 } else { diff };
    diff.unsigned_abs()
}

fn unit_offset(magnitude: u64, unit: Unit) -> Option<u64> {
    // Months are a flat 30 days.
    let per_unit = match unit {
        Unit::Day => 1,
        Unit::Week => 7,
        Unit::Month => 30,
    };
    magnitude.checked_mul(per_unit)
}

fn resolve_relative(tokens: &[String], now: &ReferenceMoment) -> Option<CalendarDate> {
    let (first, rest) = tokens.split_first()?;
    let weekday = patterns::weekday_index(first);

    let days = match (weekday, rest.first()) {
        (_, None) if tokens::contains(patterns::TOMORROW, first) => 1,
        (Some(weekday), None) => weekday_offset(weekday, now, false),
        (None, None) => return None,
        (Some(weekday), Some(_)) => return reconcile_weekday(weekday, rest, now),
        (None, Some(second)) if tokens::contains(patterns::NEXT, first) => {
            match patterns::weekday_index(second) {
                Some(target) => weekday_offset(target, now, true),
                None => unit_offset(1, patterns::unit(second)?)?,
            }
        },
        (None, Some(_)) if tokens::contains(patterns::LEAD_INS, first) => quantity_offset(rest)?,
        (None, Some(_)) => quantity_offset(tokens)?,
    };

    now.plus_days(days)
}

/// Offset for `<magnitude> <unit>`, where the magnitude may be an article.
fn quantity_offset(tokens: &[String]) -> Option<u64> {
    let [first, second, ..] = tokens else {
        return None;
    };
    let magnitude = if tokens::contains(patterns::ARTICLES, first) {
        1
    } else if tokens::is_decimal(first) {
        first.parse().ok()?
    } else {
        return None;
    };
    unit_offset(magnitude, patterns::unit(second)?)
}

/// Handle `<weekday> <absolute date>` such as `friday 25 dec`.
///
/// When the next such weekday and the explicit date fall on different
/// weekdays, the explicit date wins.
fn reconcile_weekday(weekday: u32, rest: &[String], now: &ReferenceMoment) -> Option<CalendarDate> {
    let explicit = resolve_absolute(&normalize(rest), now)?;
    let inferred = now.plus_days(weekday_offset(weekday, now, false))?;

    if inferred.weekday() == explicit.weekday() {
        Some(inferred)
    } else {
        trace!(%inferred, %explicit, "weekday disagrees with explicit date");
        Some(explicit)
    }
}

fn resolve_absolute(tokens: &[String], now: &ReferenceMoment) -> Option<CalendarDate> {
    let date = day_month_year(tokens, now).or_else(|| {
        trace!("day-month-year rejected, trying month-day-year");
        month_day_year(tokens, now)
    })?;

    if date.is_valid() {
        Some(date)
    } else {
        trace!(?date, "extracted date is not on the calendar");
        None
    }
}

fn day_month_year(tokens: &[String], now: &ReferenceMoment) -> Option<CalendarDate> {
    let mut date = now.date();
    date.day = day_slot(tokens.first()?)?;

    if let Some(month) = tokens.get(1) {
        date.month = patterns::month_index(month)?;
    }
    if let Some(year) = tokens.get(2) {
        date.year = year_slot(year)?;
    }

    Some(date)
}

fn month_day_year(tokens: &[String], now: &ReferenceMoment) -> Option<CalendarDate> {
    let mut date = now.date();
    date.month = patterns::month_index(tokens.first()?)?;
    date.day = day_slot(tokens.get(1)?)?;

    if let Some(year) = tokens.get(2) {
        date.year = year_slot(year)?;
    }

    Some(date)
}

fn day_slot(token: &str) -> Option<u32> {
    let day = patterns::strip_ordinal(token);
    if day.len() > 2 || !tokens::is_decimal(&day) {
        return None;
    }
    day.parse().ok()
}

fn year_slot(token: &str) -> Option<i32> {
    if !matches!(token.len(), 2 | 4) || !tokens::is_decimal(token) {
        return None;
    }
    if token.len() == 2 {
        format!("{}{token}", patterns::CENTURY).parse().ok()
    } else {
        token.parse().ok()
    }
}
