//! Roster construction and validation.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Difficulty, PuzzleConfig, WordTile};

/// Why a roster was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("expected {expected} words, got {actual}")]
    WrongWordCount { expected: usize, actual: usize },

    #[error("empty word in group {group:?}")]
    EmptyWord { group: String },

    #[error("word {0:?} appears more than once")]
    DuplicateWord(String),

    #[error("expected {expected} groups, got {actual}")]
    WrongGroupCount { expected: usize, actual: usize },

    #[error("group {group:?} has {actual} words, expected {expected}")]
    WrongGroupSize {
        group: String,
        expected: usize,
        actual: usize,
    },

    #[error("group {group:?} mixes difficulties {first} and {second}")]
    MixedDifficulty {
        group: String,
        first: Difficulty,
        second: Difficulty,
    },
}

/// A validated puzzle roster.
///
/// Guarantees, checked once in `Roster::new`:
/// - exactly `group_size * groups_needed` tiles
/// - unique, non-empty words
/// - exactly `groups_needed` groups of exactly `group_size` tiles
/// - one difficulty per group (difficulties may repeat across groups)
///
/// Tiles keep their input order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Roster {
    config: PuzzleConfig,
    tiles: Vec<WordTile>,
}

impl Roster {
    /// Validate `tiles` against `config`.
    pub fn new(config: PuzzleConfig, tiles: Vec<WordTile>) -> Result<Self, RosterError> {
        config.validate()?;

        let expected = config.word_count();
        if tiles.len() != expected {
            return Err(RosterError::WrongWordCount {
                expected,
                actual: tiles.len(),
            });
        }

        let mut words = FxHashSet::default();
        let mut groups: FxHashMap<&str, (&Difficulty, usize)> = FxHashMap::default();

        for tile in &tiles {
            if tile.word.trim().is_empty() {
                return Err(RosterError::EmptyWord {
                    group: tile.group.clone(),
                });
            }
            if !words.insert(tile.word.as_str()) {
                return Err(RosterError::DuplicateWord(tile.word.clone()));
            }

            let entry = groups.entry(tile.group.as_str()).or_insert((&tile.difficulty, 0));
            if *entry.0 != tile.difficulty {
                return Err(RosterError::MixedDifficulty {
                    group: tile.group.clone(),
                    first: entry.0.clone(),
                    second: tile.difficulty.clone(),
                });
            }
            entry.1 += 1;
        }

        if groups.len() != config.groups_needed {
            return Err(RosterError::WrongGroupCount {
                expected: config.groups_needed,
                actual: groups.len(),
            });
        }

        // Report the first offending group in input order.
        for tile in &tiles {
            let (_, count) = groups[tile.group.as_str()];
            if count != config.group_size {
                return Err(RosterError::WrongGroupSize {
                    group: tile.group.clone(),
                    expected: config.group_size,
                    actual: count,
                });
            }
        }

        let tiles = tiles
            .into_iter()
            .map(|mut t| {
                t.is_selected = false;
                t
            })
            .collect();

        Ok(Self { config, tiles })
    }

    /// Configuration the roster was validated against.
    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Tiles in input order.
    #[must_use]
    pub fn tiles(&self) -> &[WordTile] {
        &self.tiles
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a validated roster.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Group names in order of first appearance.
    pub fn group_names(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.tiles
            .iter()
            .map(|t| t.group.as_str())
            .filter(|g| seen.insert(*g))
            .collect()
    }

    /// Tiles of one group, in input order.
    pub fn group_tiles<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a WordTile> + 'a {
        self.tiles.iter().filter(move |t| t.in_group(group))
    }

    /// Look up a tile by word.
    #[must_use]
    pub fn tile(&self, word: &str) -> Option<&WordTile> {
        self.tiles.iter().find(|t| t.word == word)
    }
}

/// Builder for rosters, either group by group or tile by tile.
///
/// ```
/// use connections_engine::core::{Difficulty, PuzzleConfig};
/// use connections_engine::puzzles::RosterBuilder;
///
/// let roster = RosterBuilder::new()
///     .group("Primes", Difficulty::Yellow, ["two", "three"])
///     .group("Squares", Difficulty::Green, ["four", "nine"])
///     .build(PuzzleConfig::new().with_group_size(2).with_groups_needed(2))
///     .unwrap();
///
/// assert_eq!(roster.len(), 4);
/// assert_eq!(roster.group_names(), vec!["Primes", "Squares"]);
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RosterBuilder {
    tiles: Vec<WordTile>,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a whole group.
    #[must_use]
    pub fn group<I, S>(mut self, name: &str, difficulty: Difficulty, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            self.tiles.push(WordTile::new(word, name, difficulty.clone()));
        }
        self
    }

    /// Add a single tile.
    #[must_use]
    pub fn tile(mut self, word: &str, group: &str, difficulty: Difficulty) -> Self {
        self.tiles.push(WordTile::new(word, group, difficulty));
        self
    }

    /// Validate and build.
    pub fn build(self, config: PuzzleConfig) -> Result<Roster, RosterError> {
        Roster::new(config, self.tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> PuzzleConfig {
        PuzzleConfig::new().with_group_size(2).with_groups_needed(2)
    }

    #[test]
    fn test_tile_by_tile_builder() {
        let roster = RosterBuilder::new()
            .tile("a", "G1", Difficulty::Yellow)
            .tile("b", "G2", Difficulty::Green)
            .tile("c", "G1", Difficulty::Yellow)
            .tile("d", "G2", Difficulty::Green)
            .build(small_config())
            .unwrap();

        assert_eq!(roster.group_names(), vec!["G1", "G2"]);
        let g1: Vec<_> = roster.group_tiles("G1").map(|t| t.word.as_str()).collect();
        assert_eq!(g1, vec!["a", "c"]);
        assert!(roster.tile("d").is_some());
        assert!(roster.tile("z").is_none());
    }

    #[test]
    fn test_shared_difficulty_across_groups_allowed() {
        let roster = RosterBuilder::new()
            .group("G1", Difficulty::Blue, ["a", "b"])
            .group("G2", Difficulty::Blue, ["c", "d"])
            .build(small_config());
        assert!(roster.is_ok());
    }

    #[test]
    fn test_custom_tag_case_does_not_split_group() {
        let roster = RosterBuilder::new()
            .tile("a", "G1", Difficulty::from("Teal"))
            .tile("b", "G1", Difficulty::from("teal"))
            .group("G2", Difficulty::from("BLUE"), ["c"])
            .tile("d", "G2", Difficulty::from("blue"))
            .build(small_config())
            .unwrap();
        assert_eq!(roster.tile("a").unwrap().difficulty.tag(), "teal");
    }

    #[test]
    fn test_wrong_word_count() {
        let err = RosterBuilder::new()
            .group("G1", Difficulty::Blue, ["a", "b"])
            .build(small_config())
            .unwrap_err();
        assert_eq!(err, RosterError::WrongWordCount { expected: 4, actual: 2 });
    }

    #[test]
    fn test_duplicate_word() {
        let err = RosterBuilder::new()
            .group("G1", Difficulty::Blue, ["a", "b"])
            .group("G2", Difficulty::Green, ["a", "d"])
            .build(small_config())
            .unwrap_err();
        assert_eq!(err, RosterError::DuplicateWord("a".to_string()));
    }

    #[test]
    fn test_empty_word() {
        let err = RosterBuilder::new()
            .group("G1", Difficulty::Blue, ["a", " "])
            .group("G2", Difficulty::Green, ["c", "d"])
            .build(small_config())
            .unwrap_err();
        assert_eq!(err, RosterError::EmptyWord { group: "G1".to_string() });
    }

    #[test]
    fn test_uneven_groups() {
        let err = RosterBuilder::new()
            .group("G1", Difficulty::Blue, ["a", "b", "c"])
            .group("G2", Difficulty::Green, ["d"])
            .build(small_config())
            .unwrap_err();
        assert_eq!(
            err,
            RosterError::WrongGroupSize {
                group: "G1".to_string(),
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_wrong_group_count() {
        let err = RosterBuilder::new()
            .group("G1", Difficulty::Blue, ["a", "b", "c", "d"])
            .build(small_config())
            .unwrap_err();
        assert_eq!(err, RosterError::WrongGroupCount { expected: 2, actual: 1 });
    }

    #[test]
    fn test_mixed_difficulty() {
        let err = RosterBuilder::new()
            .tile("a", "G1", Difficulty::Blue)
            .tile("b", "G1", Difficulty::Purple)
            .group("G2", Difficulty::Green, ["c", "d"])
            .build(small_config())
            .unwrap_err();
        assert!(matches!(err, RosterError::MixedDifficulty { ref group, .. } if group == "G1"));
        assert_eq!(err.to_string(), "group \"G1\" mixes difficulties blue and purple");
    }

    #[test]
    fn test_invalid_config() {
        let err = RosterBuilder::new()
            .build(PuzzleConfig::new().with_max_mistakes(0))
            .unwrap_err();
        assert!(matches!(err, RosterError::InvalidConfig(_)));
    }

    #[test]
    fn test_builder_from_json() {
        let json = r#"{"tiles":[
            {"word":"a","group":"G1","difficulty":"yellow"},
            {"word":"b","group":"G1","difficulty":"yellow"},
            {"word":"c","group":"G2","difficulty":"teal"},
            {"word":"d","group":"G2","difficulty":"teal"}
        ]}"#;
        let builder: RosterBuilder = serde_json::from_str(json).unwrap();
        let roster = builder.build(small_config()).unwrap();
        assert_eq!(roster.tile("c").unwrap().difficulty.color(), "gray");
    }
}
