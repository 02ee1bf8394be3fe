//! Word tables used by the date interpreter.
//!
//! All tables are built once on first use and never change afterwards.
//! Weekday indices start at Monday (0) and month indices at January (0).

use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix added to two-digit years.
pub const CENTURY: &str = "20";

/// Words that may appear inside a date without meaning anything ("25th of june").
pub const DECORATORS: &[&str] = &["of"];

/// Characters stripped from every date token.
pub const PUNCTUATION: &[char] = &[',', '.'];

/// Dividers tried, in order, on a single compact date token.
pub const DATE_DIVIDERS: &[&str] = &["/", "-", "."];

pub const TOMORROW: &[&str] = &["tomorrow"];
pub const NEXT: &[&str] = &["next", "coming"];
pub const ARTICLES: &[&str] = &["a", "an", "the"];

/// Words that may introduce an offset ("in 3 weeks").
pub const LEAD_INS: &[&str] = &["in"];

pub const DAY_UNITS: &[&str] = &["d", "day", "days"];
pub const WEEK_UNITS: &[&str] = &["w", "week", "weeks"];
pub const MONTH_UNITS: &[&str] = &["m", "month", "months"];

const WEEKDAY_FORMS: [&str; 7] = [
    "monday|mon|mond",
    "tuesday|tue|tues",
    "wednesday|wed|weds",
    "thursday|thu|thur",
    "friday|fri|frid",
    "saturday|sat|satu",
    "sunday|sun|sund",
];

const MONTH_FORMS: [&str; 12] = [
    "january|jan|01|1",
    "february|feb|02|2",
    "march|mar|03|3",
    "april|apr|04|4",
    "may|05|5",
    "june|jun|06|6",
    "july|jul|07|7",
    "august|aug|08|8",
    "september|sep|09|9",
    "october|oct|10",
    "november|nov|11",
    "december|dec|12",
];

fn whole_word_patterns(forms: &[&str]) -> Vec<Regex> {
    forms
        .iter()
        .map(|form| {
            Regex::new(&format!("(?i)^(?:{form})$"))
                .unwrap_or_else(|e| panic!("Invalid pattern {form}: {e}"))
        })
        .collect()
}

static WEEKDAY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| whole_word_patterns(&WEEKDAY_FORMS));

static MONTH_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| whole_word_patterns(&MONTH_FORMS));

static ORDINAL_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(st|nd|rd|th)$").unwrap_or_else(|e| panic!("Invalid ordinal regex: {e}"))
});

/// Unit of a relative offset ("3 weeks").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Day,
    Week,
    /// Always treated as 30 days.
    Month,
}

/// Weekday index (0 = Monday) for a weekday name or abbreviation.
#[must_use]
pub fn weekday_index(token: &str) -> Option<u32> {
    position(&WEEKDAY_PATTERNS, token)
}

/// Month index (0 = January) for a month name, abbreviation or 1-based numeral.
#[must_use]
pub fn month_index(token: &str) -> Option<u32> {
    position(&MONTH_PATTERNS, token)
}

/// Unit named by `token`, if any.
#[must_use]
pub fn unit(token: &str) -> Option<Unit> {
    if DAY_UNITS.contains(&token) {
        Some(Unit::Day)
    } else if WEEK_UNITS.contains(&token) {
        Some(Unit::Week)
    } else if MONTH_UNITS.contains(&token) {
        Some(Unit::Month)
    } else {
        None
    }
}

/// Remove a trailing ordinal suffix ("3rd" -> "3").
#[must_use]
pub fn strip_ordinal(token: &str) -> String {
    ORDINAL_SUFFIX.replace(token, "").into_owned()
}

fn position(patterns: &[Regex], token: &str) -> Option<u32> {
    patterns
        .iter()
        .position(|pattern| pattern.is_match(token))
        .and_then(|index| u32::try_from(index).ok())
}
