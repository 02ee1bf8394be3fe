//! Core abstractions for dolah.
//!
//! This module provides the date interpreter and the token and pattern
//! helpers it shares with the command interpreter.

mod datetime;
pub mod patterns;
pub mod tokens;
mod traits;

pub use datetime::{parse_date, resolve_date, CalendarDate, ReferenceMoment};
pub use traits::{Clock, FixedClock, SystemClock};
