//! Puzzle state and the observable snapshot.
//!
//! ## PuzzleState
//!
//! The one aggregate the engine owns and mutates:
//! - Remaining tiles, in board order, with selection flags
//! - Found groups, append-only
//! - Mistakes remaining
//! - Status (`Playing`, `Won`, `Lost`)
//!
//! The selected count is never stored; it is recomputed from the tiles so it
//! cannot drift from the selection flags.
//!
//! ## Snapshot
//!
//! What the presentation layer reads after every command. Uses `im` vectors
//! so taking a snapshot is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::group::FoundGroup;
use super::tile::WordTile;

/// Lifecycle of a puzzle session.
///
/// `Won` and `Lost` are terminal and absorbing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PuzzleStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl PuzzleStatus {
    /// True once the puzzle is won or lost.
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, PuzzleStatus::Playing)
    }

    /// Headline shown above the board.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            PuzzleStatus::Playing => "Create four groups of four!",
            PuzzleStatus::Won => "Great!",
            PuzzleStatus::Lost => "Next time!",
        }
    }
}

/// Complete state of one puzzle session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleState {
    pub(crate) remaining_tiles: Vector<WordTile>,
    pub(crate) found_groups: Vector<FoundGroup>,
    pub(crate) mistakes_remaining: u32,
    pub(crate) status: PuzzleStatus,
}

impl PuzzleState {
    /// Create a fresh `Playing` state from tiles in input order.
    ///
    /// Selection flags are cleared regardless of their input value.
    #[must_use]
    pub fn new(tiles: impl IntoIterator<Item = WordTile>, max_mistakes: u32) -> Self {
        Self {
            remaining_tiles: tiles
                .into_iter()
                .map(|mut t| {
                    t.is_selected = false;
                    t
                })
                .collect(),
            found_groups: Vector::new(),
            mistakes_remaining: max_mistakes,
            status: PuzzleStatus::Playing,
        }
    }

    /// Tiles not yet grouped, in board order.
    #[must_use]
    pub fn remaining_tiles(&self) -> &Vector<WordTile> {
        &self.remaining_tiles
    }

    /// Groups found so far, in the order they were found (then revealed).
    #[must_use]
    pub fn found_groups(&self) -> &Vector<FoundGroup> {
        &self.found_groups
    }

    /// Mistakes the player may still make.
    #[must_use]
    pub fn mistakes_remaining(&self) -> u32 {
        self.mistakes_remaining
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> PuzzleStatus {
        self.status
    }

    /// True once the puzzle has ended.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.status.is_over()
    }

    /// True if the puzzle ended in a win.
    #[must_use]
    pub fn game_won(&self) -> bool {
        self.status == PuzzleStatus::Won
    }

    /// Number of selected tiles, derived from the selection flags.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.remaining_tiles.iter().filter(|t| t.is_selected).count()
    }

    /// Selected tiles in board order.
    pub fn selected_tiles(&self) -> impl Iterator<Item = &WordTile> {
        self.remaining_tiles.iter().filter(|t| t.is_selected)
    }

    /// Find a remaining tile by word.
    #[must_use]
    pub fn tile(&self, word: &str) -> Option<&WordTile> {
        self.remaining_tiles.iter().find(|t| t.word == word)
    }

    pub(crate) fn position_of(&self, word: &str) -> Option<usize> {
        self.remaining_tiles.iter().position(|t| t.word == word)
    }

    /// Total words accounted for: remaining plus grouped.
    #[must_use]
    pub fn word_total(&self) -> usize {
        self.remaining_tiles.len() + self.found_groups.iter().map(FoundGroup::len).sum::<usize>()
    }

    /// Check if a group with this name has been found or revealed.
    #[must_use]
    pub fn is_group_found(&self, group: &str) -> bool {
        self.found_groups.iter().any(|g| g.group_name == group)
    }

    /// Clear every selection flag. Returns true if any flag was set.
    pub(crate) fn clear_selection(&mut self) -> bool {
        let mut changed = false;
        for tile in self.remaining_tiles.iter_mut() {
            changed |= tile.is_selected;
            tile.is_selected = false;
        }
        changed
    }

    /// Take the observable snapshot.
    #[must_use]
    pub fn snapshot(&self, group_size: usize) -> Snapshot {
        Snapshot {
            remaining_tiles: self.remaining_tiles.clone(),
            found_groups: self.found_groups.clone(),
            mistakes_remaining: self.mistakes_remaining,
            selected_count: self.selected_count(),
            group_size,
            status: self.status,
        }
    }
}

/// Observable state, read by the presentation layer after every command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Remaining tiles in board order, with selection flags.
    pub remaining_tiles: Vector<WordTile>,
    /// Found (and, after a loss, revealed) groups.
    pub found_groups: Vector<FoundGroup>,
    /// Mistakes the player may still make.
    pub mistakes_remaining: u32,
    /// Number of selected tiles, in `0..=group_size`.
    pub selected_count: usize,
    /// Selection size a submission needs.
    pub group_size: usize,
    /// Session status.
    pub status: PuzzleStatus,
}

impl Snapshot {
    /// True once the puzzle has ended.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.status.is_over()
    }

    /// True if the puzzle ended in a win.
    #[must_use]
    pub fn game_won(&self) -> bool {
        self.status == PuzzleStatus::Won
    }

    /// Whether the Submit control is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.game_over() && self.selected_count == self.group_size
    }

    /// Whether the Deselect All control is enabled.
    #[must_use]
    pub fn can_deselect(&self) -> bool {
        !self.game_over() && self.selected_count > 0
    }

    /// Whether clicking `word` would do anything.
    ///
    /// Selected tiles can always be toggled off; unselected ones only while
    /// the selection is below the cap.
    #[must_use]
    pub fn can_select(&self, word: &str) -> bool {
        if self.game_over() {
            return false;
        }
        match self.remaining_tiles.iter().find(|t| t.word == word) {
            Some(tile) => tile.is_selected || self.selected_count < self.group_size,
            None => false,
        }
    }

    /// Headline for the current status.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.status.message()
    }
}
