//! Word tiles and their difficulty tags.
//!
//! A `WordTile` is one entry of the puzzle roster: the word itself, the
//! category it belongs to, and the difficulty tag shared by every tile of
//! that category. Difficulty only drives display color; gameplay never
//! inspects it.

use serde::{Deserialize, Serialize};

/// Difficulty tag for a group.
///
/// The four standard tags map to the usual colors. Any other tag is kept in
/// `Other` so that an unfamiliar roster still loads. Tags are trimmed and
/// lowercased, so `"Teal"` and `"teal"` are the same difficulty.
///
/// ```
/// use connections_engine::core::Difficulty;
///
/// assert_eq!(Difficulty::from("blue"), Difficulty::Blue);
/// assert_eq!(Difficulty::from("Purple").color(), "#ba81c5");
/// assert_eq!(Difficulty::from("teal").color(), "gray");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Yellow,
    Green,
    Blue,
    Purple,
    /// Unrecognized tag, trimmed and lowercased.
    Other(String),
}

impl Difficulty {
    /// Fallback color for tags outside the standard four.
    pub const FALLBACK_COLOR: &'static str = "gray";

    /// Display color for this difficulty.
    ///
    /// Total: unknown tags get `FALLBACK_COLOR`.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Difficulty::Yellow => "#f9df6d",
            Difficulty::Green => "#a0c35a",
            Difficulty::Blue => "#b0c4ef",
            Difficulty::Purple => "#ba81c5",
            Difficulty::Other(_) => Self::FALLBACK_COLOR,
        }
    }

    /// The lowercase tag for this difficulty.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Difficulty::Yellow => "yellow",
            Difficulty::Green => "green",
            Difficulty::Blue => "blue",
            Difficulty::Purple => "purple",
            Difficulty::Other(tag) => tag,
        }
    }
}

impl From<&str> for Difficulty {
    fn from(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_lowercase();
        match tag.as_str() {
            "yellow" => Difficulty::Yellow,
            "green" => Difficulty::Green,
            "blue" => Difficulty::Blue,
            "purple" => Difficulty::Purple,
            _ => Difficulty::Other(tag),
        }
    }
}

impl From<String> for Difficulty {
    fn from(tag: String) -> Self {
        Difficulty::from(tag.as_str())
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.tag().to_string()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// One word of the puzzle.
///
/// `word`, `group` and `difficulty` never change after the roster is built.
/// `is_selected` is owned by the engine and toggled only through its
/// commands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTile {
    /// The word shown on the tile. Unique within a puzzle.
    pub word: String,

    /// Category name shared by the tiles of one group.
    pub group: String,

    /// Difficulty tag of the group.
    pub difficulty: Difficulty,

    /// Selection flag.
    #[serde(default)]
    pub is_selected: bool,
}

impl WordTile {
    /// Create an unselected tile.
    pub fn new(word: impl Into<String>, group: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            word: word.into(),
            group: group.into(),
            difficulty,
            is_selected: false,
        }
    }

    /// Check whether this tile belongs to the named group.
    #[must_use]
    pub fn in_group(&self, group: &str) -> bool {
        self.group == group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse_case_insensitive() {
        assert_eq!(Difficulty::from("YELLOW"), Difficulty::Yellow);
        assert_eq!(Difficulty::from(" green "), Difficulty::Green);
        assert_eq!(Difficulty::from("Blue"), Difficulty::Blue);
        assert_eq!(Difficulty::from("purple"), Difficulty::Purple);
    }

    #[test]
    fn test_unknown_difficulty_kept() {
        let d = Difficulty::from("rainbow");
        assert_eq!(d, Difficulty::Other("rainbow".to_string()));
        assert_eq!(d.tag(), "rainbow");
        assert_eq!(d.color(), Difficulty::FALLBACK_COLOR);
    }

    #[test]
    fn test_unknown_difficulty_normalized() {
        assert_eq!(Difficulty::from(" Teal "), Difficulty::from("teal"));
        assert_eq!(Difficulty::from("TEAL").tag(), "teal");
    }

    #[test]
    fn test_colors() {
        assert_eq!(Difficulty::Yellow.color(), "#f9df6d");
        assert_eq!(Difficulty::Green.color(), "#a0c35a");
        assert_eq!(Difficulty::Blue.color(), "#b0c4ef");
        assert_eq!(Difficulty::Purple.color(), "#ba81c5");
    }

    #[test]
    fn test_difficulty_serde_as_tag() {
        let json = serde_json::to_string(&Difficulty::Purple).unwrap();
        assert_eq!(json, "\"purple\"");

        let parsed: Difficulty = serde_json::from_str("\"mauve\"").unwrap();
        assert_eq!(parsed, Difficulty::Other("mauve".to_string()));
    }

    #[test]
    fn test_tile_deserialize_defaults_unselected() {
        let json = r#"{"word":"eye","group":"Palindromes","difficulty":"blue"}"#;
        let tile: WordTile = serde_json::from_str(json).unwrap();
        assert_eq!(tile, WordTile::new("eye", "Palindromes", Difficulty::Blue));
        assert!(!tile.is_selected);
        assert!(tile.in_group("Palindromes"));
    }
}
