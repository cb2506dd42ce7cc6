//! Command outcomes.
//!
//! Commands never fail. A command the engine cannot act on is a no-op and
//! reports why through `Ignored`.

use serde::{Deserialize, Serialize};

use crate::core::FoundGroup;

/// Result of a completed puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PuzzleResult {
    /// Every group was found.
    Won,
    /// The mistake budget ran out.
    Lost,
}

/// Why a command was a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ignored {
    /// The puzzle has ended.
    GameOver,
    /// No remaining tile has that word.
    UnknownWord,
    /// The selection is already at the cap and the tile is not selected.
    SelectionFull,
    /// Submission needs exactly `group_size` selected tiles.
    WrongSelectionSize { selected: usize },
}

/// Outcome of `select_word`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    Selected,
    Deselected,
    Ignored(Ignored),
}

/// Outcome of `submit`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// The selection was a group. `won` is set if it was the last one.
    Correct { group: FoundGroup, won: bool },
    /// The selection mixed groups. `lost` is set if the budget ran out.
    Incorrect { mistakes_remaining: u32, lost: bool },
    Ignored(Ignored),
}

impl SubmitOutcome {
    /// True for a correct submission.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, SubmitOutcome::Correct { .. })
    }

    /// The terminal result this submission caused, if any.
    #[must_use]
    pub fn result(&self) -> Option<PuzzleResult> {
        match self {
            SubmitOutcome::Correct { won: true, .. } => Some(PuzzleResult::Won),
            SubmitOutcome::Incorrect { lost: true, .. } => Some(PuzzleResult::Lost),
            _ => None,
        }
    }
}

/// Outcome of any command sent through `PuzzleEngine::apply`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    Select(SelectOutcome),
    Shuffled,
    DeselectedAll,
    Submit(SubmitOutcome),
    Ignored(Ignored),
}

impl CommandOutcome {
    /// False if the command was a no-op.
    #[must_use]
    pub fn changed_state(&self) -> bool {
        !matches!(
            self,
            CommandOutcome::Ignored(_)
                | CommandOutcome::Select(SelectOutcome::Ignored(_))
                | CommandOutcome::Submit(SubmitOutcome::Ignored(_))
        )
    }
}
