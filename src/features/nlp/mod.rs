//! Natural language parsing for task descriptions.
//!
//! This module provides parsing for task text like:
//! - "buy milk"
//! - "submit report by friday"
//! - "holiday from 24/12 to 2/1/24"

mod parser;

#[cfg(test)]
pub use parser::MockTaskParser;
pub use parser::{MarkerTaskParser, Task, TaskKind, TaskParser};
