//! Player commands.
//!
//! The presentation layer drives the engine with four commands. Each can be
//! called as a method on `PuzzleEngine` or sent as a `Command` value through
//! `PuzzleEngine::apply`, which also records it in the history.

use serde::{Deserialize, Serialize};

/// A player command.
///
/// ```
/// use connections_engine::core::Command;
///
/// let select = Command::select("eye");
/// assert_eq!(select, Command::SelectWord("eye".to_string()));
/// assert_eq!(select.name(), "select");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Toggle selection of a remaining word.
    SelectWord(String),
    /// Randomly reorder the remaining tiles.
    Shuffle,
    /// Clear every selection.
    DeselectAll,
    /// Submit the current selection as a group.
    Submit,
}

impl Command {
    /// Shorthand for `Command::SelectWord`.
    pub fn select(word: impl Into<String>) -> Self {
        Command::SelectWord(word.into())
    }

    /// Short name, for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::SelectWord(_) => "select",
            Command::Shuffle => "shuffle",
            Command::DeselectAll => "deselect_all",
            Command::Submit => "submit",
        }
    }
}

/// A command as applied, kept in the engine's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Position in the session, starting at 0.
    pub sequence: usize,

    /// The command.
    pub command: Command,

    /// False if the engine ignored the command.
    pub changed_state: bool,
}

impl CommandRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(sequence: usize, command: Command, changed_state: bool) -> Self {
        Self {
            sequence,
            command,
            changed_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Command::select("x").name(), "select");
        assert_eq!(Command::Shuffle.name(), "shuffle");
        assert_eq!(Command::DeselectAll.name(), "deselect_all");
        assert_eq!(Command::Submit.name(), "submit");
    }

    #[test]
    fn test_record_serde() {
        let record = CommandRecord::new(3, Command::select("ewe"), true);
        let json = serde_json::to_string(&record).unwrap();
        let back: CommandRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
