//! Core puzzle types: tiles, groups, configuration, commands, RNG, state.
//!
//! These are plain values. All mutation goes through `rules::PuzzleEngine`.

pub mod tile;
pub mod group;
pub mod rng;
pub mod config;
pub mod command;
pub mod state;

pub use tile::{Difficulty, WordTile};
pub use group::FoundGroup;
pub use rng::{GameRng, GameRngState};
pub use config::{PuzzleConfig, GROUPS_NEEDED, GROUP_LENGTH, MAX_MISTAKES};
pub use command::{Command, CommandRecord};
pub use state::{PuzzleState, PuzzleStatus, Snapshot};
