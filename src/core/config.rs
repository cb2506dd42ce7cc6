//! Puzzle configuration.
//!
//! The defaults describe the standard puzzle: four groups of four words,
//! four mistakes allowed. Callers adjust them with the `with_*` builders.

use serde::{Deserialize, Serialize};

use crate::puzzles::RosterError;

/// Default number of words per group.
pub const GROUP_LENGTH: usize = 4;

/// Default number of groups to find.
pub const GROUPS_NEEDED: usize = 4;

/// Default mistake budget.
pub const MAX_MISTAKES: u32 = 4;

/// Configuration for one puzzle session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Words per group, and the exact selection size a submission needs.
    pub group_size: usize,

    /// Groups in the roster. Finding all of them wins.
    pub groups_needed: usize,

    /// Mistakes allowed before the puzzle is lost.
    pub max_mistakes: u32,

    /// Refuse new selections once `group_size` tiles are selected.
    ///
    /// Deselecting is always allowed. When false, the cap is left to the caller.
    pub enforce_selection_limit: bool,

    /// Shuffle seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            group_size: GROUP_LENGTH,
            groups_needed: GROUPS_NEEDED,
            max_mistakes: MAX_MISTAKES,
            enforce_selection_limit: true,
            seed: None,
        }
    }
}

impl PuzzleConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the group size.
    #[must_use]
    pub fn with_group_size(mut self, size: usize) -> Self {
        self.group_size = size;
        self
    }

    /// Set the number of groups.
    #[must_use]
    pub fn with_groups_needed(mut self, groups: usize) -> Self {
        self.groups_needed = groups;
        self
    }

    /// Set the mistake budget.
    #[must_use]
    pub fn with_max_mistakes(mut self, mistakes: u32) -> Self {
        self.max_mistakes = mistakes;
        self
    }

    /// Leave the selection cap to the caller.
    #[must_use]
    pub fn without_selection_limit(mut self) -> Self {
        self.enforce_selection_limit = false;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of words a roster must contain.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.group_size * self.groups_needed
    }

    /// Reject configurations no puzzle can satisfy.
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.group_size == 0 {
            return Err(RosterError::InvalidConfig("group size must be at least 1"));
        }
        if self.groups_needed == 0 {
            return Err(RosterError::InvalidConfig("at least one group is required"));
        }
        if self.max_mistakes == 0 {
            return Err(RosterError::InvalidConfig("mistake budget must be at least 1"));
        }
        Ok(())
    }
}
