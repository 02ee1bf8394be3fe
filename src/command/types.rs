//! Command values produced by the interpreter.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::features::nlp::Task;

/// Zero-based task index.
///
/// Users type one-based ids; the interpreter stores `id - 1`.
pub type TaskId = i64;

/// A fully validated user command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Add { task: Task },
    Search { query: String },
    SetDone { task_id: TaskId },
    SetUndone { task_id: TaskId },
    Edit { task_id: TaskId, task: Task },
    Delete { task_id: TaskId },
    Clear,
    Undo,
}

impl Command {
    /// The kind of command this value was built from.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::Add { .. } => CommandKind::Add,
            Self::Search { .. } => CommandKind::Search,
            Self::SetDone { .. } => CommandKind::Done,
            Self::SetUndone { .. } => CommandKind::Undone,
            Self::Edit { .. } => CommandKind::Edit,
            Self::Delete { .. } => CommandKind::Delete,
            Self::Clear => CommandKind::Clear,
            Self::Undo => CommandKind::Undo,
        }
    }
}

/// The eight command keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Add,
    Search,
    Done,
    Undone,
    Edit,
    Delete,
    Clear,
    Undo,
}

impl CommandKind {
    pub const ALL: [Self; 8] = [
        Self::Add,
        Self::Search,
        Self::Done,
        Self::Undone,
        Self::Edit,
        Self::Delete,
        Self::Clear,
        Self::Undo,
    ];

    /// Surface forms for this kind. The first one is canonical.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Add => &["add"],
            Self::Search => &["search"],
            Self::Done => &["done"],
            Self::Undone => &["undone"],
            Self::Edit => &["edit"],
            Self::Delete => &["delete", "del"],
            Self::Clear => &["clear"],
            Self::Undo => &["undo"],
        }
    }

    /// Canonical keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        self.aliases()[0]
    }

    /// Look up a keyword or alias. Matching is case-sensitive.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.aliases().contains(&keyword))
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_keyword() {
        assert_eq!(CommandKind::from_keyword("add"), Some(CommandKind::Add));
        assert_eq!(CommandKind::from_keyword("del"), Some(CommandKind::Delete));
        assert_eq!(CommandKind::from_keyword("delete"), Some(CommandKind::Delete));
        assert_eq!(CommandKind::from_keyword("Delete"), None);
        assert_eq!(CommandKind::from_keyword("remove"), None);
    }

    #[test]
    fn test_keyword_is_first_alias() {
        for kind in CommandKind::ALL {
            assert_eq!(CommandKind::from_keyword(kind.keyword()), Some(kind));
        }
        assert_eq!(CommandKind::Delete.to_string(), "delete");
    }

    #[test]
    fn test_command_kind() {
        assert_eq!(Command::Clear.kind(), CommandKind::Clear);
        assert_eq!(Command::SetDone { task_id: 0 }.kind(), CommandKind::Done);
    }

    #[test]
    fn test_command_serialization() {
        let json = serde_json::to_value(Command::Delete { task_id: 4 }).unwrap();
        assert_eq!(json["command"], "delete");
        assert_eq!(json["task_id"], 4);

        let json = serde_json::to_value(Command::Undo).unwrap();
        assert_eq!(json["command"], "undo");
    }

    #[test]
    fn test_command_kind_deserialization() {
        let kind: CommandKind = serde_json::from_str("\"clear\"").unwrap();
        assert_eq!(kind, CommandKind::Clear);
    }
}
