//! The puzzle engine and its command outcomes.
//!
//! `PuzzleEngine` is the only code that mutates a `PuzzleState`. It exposes
//! the four player commands and reports each result as an outcome value:
//! - `SelectOutcome` for selection toggles
//! - `SubmitOutcome` for submissions, including win/loss transitions
//! - `Ignored` for commands that were no-ops

pub mod engine;
pub mod outcome;

pub use engine::PuzzleEngine;
pub use outcome::{CommandOutcome, Ignored, PuzzleResult, SelectOutcome, SubmitOutcome};
