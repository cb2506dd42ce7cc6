//! The built-in reference puzzle.

use crate::core::{Difficulty, PuzzleConfig};

use super::roster::{Roster, RosterBuilder, RosterError};

/// Reference puzzle tiles as `(word, group, difficulty)`, in board order.
pub const REFERENCE_TILES: [(&str, &str, &str); 16] = [
    ("eye", "Palindromes", "blue"),
    ("ear", "Starts of Planet Names", "purple"),
    ("yak", "Chat, Informally", "yellow"),
    ("hen", "Female Animals", "green"),
    ("mar", "Starts of Planet Names", "purple"),
    ("gab", "Chat, Informally", "yellow"),
    ("pop", "Palindromes", "blue"),
    ("ewe", "Female Animals", "green"),
    ("sat", "Starts of Planet Names", "purple"),
    ("yap", "Chat, Informally", "yellow"),
    ("bib", "Palindromes", "blue"),
    ("mer", "Starts of Planet Names", "purple"),
    ("doe", "Female Animals", "green"),
    ("gag", "Palindromes", "blue"),
    ("jaw", "Chat, Informally", "yellow"),
    ("cow", "Female Animals", "green"),
];

/// Build the reference puzzle with the given configuration.
///
/// Fails only if `config` is not the standard four groups of four.
pub fn reference_roster_with(config: PuzzleConfig) -> Result<Roster, RosterError> {
    REFERENCE_TILES
        .iter()
        .fold(RosterBuilder::new(), |builder, &(word, group, difficulty)| {
            builder.tile(word, group, Difficulty::from(difficulty))
        })
        .build(config)
}

/// Build the reference puzzle with the standard configuration.
pub fn reference_roster() -> Result<Roster, RosterError> {
    reference_roster_with(PuzzleConfig::default())
}
