//! Puzzle rosters.
//!
//! A roster is the fixed list of tiles a session is played over. It is
//! validated once at construction so the engine never sees an ill-formed
//! puzzle:
//! - `Roster` / `RosterBuilder`: validation and construction
//! - `reference_roster`: the built-in sixteen-word puzzle

mod reference;
mod roster;

pub use reference::{reference_roster, reference_roster_with, REFERENCE_TILES};
pub use roster::{Roster, RosterBuilder, RosterError};
