//! # connections-engine
//!
//! A headless engine for word grouping puzzles: sixteen words, four hidden
//! groups of four, a fixed budget of mistakes.
//!
//! ## Design Principles
//!
//! 1. **One owned state**: all session state lives in a single `PuzzleState`
//!    mutated only by `PuzzleEngine` commands. Derived values such as the
//!    selected count are recomputed, never stored.
//!
//! 2. **Total commands**: every command either changes state or reports why
//!    it was ignored. Ill-formed puzzles are rejected when the `Roster` is
//!    built, so the engine never sees one.
//!
//! 3. **Reproducible**: shuffles draw from a seedable `GameRng`.
//!
//! ## Modules
//!
//! - `core`: tiles, groups, configuration, commands, RNG, state
//! - `puzzles`: roster validation and the reference puzzle
//! - `rules`: the puzzle engine and command outcomes
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use connections_engine::{reference_roster, PuzzleEngine, SubmitOutcome};
//!
//! let mut engine = PuzzleEngine::new(reference_roster().unwrap());
//! for word in ["eye", "ear", "yak", "hen"] {
//!     engine.select_word(word);
//! }
//! assert_eq!(
//!     engine.submit(),
//!     SubmitOutcome::Incorrect { mistakes_remaining: 3, lost: false }
//! );
//! ```

pub mod core;
pub mod puzzles;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Command, CommandRecord,
    Difficulty, WordTile, FoundGroup,
    GameRng, GameRngState,
    PuzzleConfig, GROUP_LENGTH, GROUPS_NEEDED, MAX_MISTAKES,
    PuzzleState, PuzzleStatus, Snapshot,
};

pub use crate::puzzles::{
    reference_roster, reference_roster_with, Roster, RosterBuilder, RosterError,
};

pub use crate::rules::{
    CommandOutcome, Ignored, PuzzleEngine, PuzzleResult, SelectOutcome, SubmitOutcome,
};
