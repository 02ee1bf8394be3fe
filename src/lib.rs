//! dolah - natural language command interpreter for a personal task manager
//!
//! This crate turns one line of user input such as `buy milk by friday` or
//! `done 3` into a structured [`Command`], resolving natural language dates
//! like `next monday` or `25/12/23` along the way.
//!
//! ```
//! use chrono::NaiveDate;
//! use dolah::{Command, CommandParser, ReferenceMoment};
//!
//! let now = ReferenceMoment::from_naive(NaiveDate::from_ymd_opt(2023, 6, 14).unwrap());
//! let command = CommandParser::new().parse("del 5", &now).unwrap();
//! assert_eq!(command, Command::Delete { task_id: 4 });
//!
//! let date = dolah::parse_date("next week", &now).unwrap();
//! assert_eq!(date.to_string(), "2023-06-21");
//! ```

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod command;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use command::{Command, CommandKind, CommandParser, TaskId};
pub use crate::core::{parse_date, resolve_date, CalendarDate, Clock, ReferenceMoment};
pub use error::DolahError;
pub use features::nlp::{Task, TaskKind, TaskParser};
