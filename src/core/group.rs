//! Completed groups.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tile::{Difficulty, WordTile};

/// A group that has been solved, either by the player or by the reveal on loss.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundGroup {
    /// Category name.
    pub group_name: String,

    /// Difficulty copied from the member tiles.
    pub difficulty: Difficulty,

    /// Member words. Board order for solved groups, input order for revealed ones.
    /// SmallVec holds a standard group of four without heap allocation.
    pub member_words: SmallVec<[String; 4]>,

    /// True if this group was disclosed by the reveal rather than found.
    pub revealed: bool,
}

impl FoundGroup {
    /// Build a group from tiles the player submitted.
    ///
    /// Callers guarantee `tiles` is non-empty and single-group.
    pub(crate) fn solved<'a>(tiles: impl IntoIterator<Item = &'a WordTile>) -> Option<Self> {
        Self::from_tiles(tiles, false)
    }

    /// Build a group disclosed by the reveal.
    pub(crate) fn revealed<'a>(tiles: impl IntoIterator<Item = &'a WordTile>) -> Option<Self> {
        Self::from_tiles(tiles, true)
    }

    fn from_tiles<'a>(
        tiles: impl IntoIterator<Item = &'a WordTile>,
        revealed: bool,
    ) -> Option<Self> {
        let mut tiles = tiles.into_iter().peekable();
        let first = tiles.peek()?;
        let group_name = first.group.clone();
        let difficulty = first.difficulty.clone();

        Some(Self {
            group_name,
            difficulty,
            member_words: tiles.map(|t| t.word.clone()).collect(),
            revealed,
        })
    }

    /// Number of member words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.member_words.len()
    }

    /// Check if the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.member_words.is_empty()
    }

    /// Check whether a word belongs to this group.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.member_words.iter().any(|w| w == word)
    }

    /// Display color of the group.
    #[must_use]
    pub fn color(&self) -> &'static str {
        self.difficulty.color()
    }
}

impl std::fmt::Display for FoundGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.member_words.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles() -> Vec<WordTile> {
        ["eye", "pop", "bib", "gag"]
            .into_iter()
            .map(|w| WordTile::new(w, "Palindromes", Difficulty::Blue))
            .collect()
    }

    #[test]
    fn test_solved_group() {
        let tiles = tiles();
        let group = FoundGroup::solved(&tiles).unwrap();

        assert_eq!(group.group_name, "Palindromes");
        assert_eq!(group.difficulty, Difficulty::Blue);
        assert_eq!(group.len(), 4);
        assert!(group.contains("bib"));
        assert!(!group.contains("ewe"));
        assert!(!group.revealed);
        assert_eq!(group.color(), "#b0c4ef");
    }

    #[test]
    fn test_revealed_flag() {
        let tiles = tiles();
        assert!(FoundGroup::revealed(&tiles).unwrap().revealed);
    }

    #[test]
    fn test_empty_tiles_make_no_group() {
        assert!(FoundGroup::solved(&Vec::<WordTile>::new()).is_none());
    }

    #[test]
    fn test_display_joins_words() {
        let tiles = tiles();
        let group = FoundGroup::solved(&tiles).unwrap();
        assert_eq!(group.to_string(), "eye, pop, bib, gag");
    }
}
