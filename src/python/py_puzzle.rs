//! Puzzle engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Difficulty, PuzzleConfig, WordTile};
use crate::puzzles::{reference_roster_with, Roster, RosterError};
use crate::rules::{PuzzleEngine, SelectOutcome, SubmitOutcome};

fn roster_err(err: RosterError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn config(seed: Option<u64>, max_mistakes: u32) -> PuzzleConfig {
    let config = PuzzleConfig::new().with_max_mistakes(max_mistakes);
    match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

/// Python wrapper for PuzzleEngine.
///
/// The host UI calls the command methods and re-reads the properties after
/// each call.
#[pyclass(name = "Puzzle")]
pub struct PyPuzzle {
    engine: PuzzleEngine,
}

#[pymethods]
impl PyPuzzle {
    /// Create a session over the reference puzzle.
    ///
    /// # Arguments
    /// - seed: Shuffle seed, or None for OS entropy
    /// - max_mistakes: Mistake budget
    #[new]
    #[pyo3(signature = (seed = None, max_mistakes = 4))]
    fn new(seed: Option<u64>, max_mistakes: u32) -> PyResult<Self> {
        let roster = reference_roster_with(config(seed, max_mistakes)).map_err(roster_err)?;
        Ok(Self {
            engine: PuzzleEngine::new(roster),
        })
    }

    /// Create a session from `(word, group, difficulty)` tuples.
    #[staticmethod]
    #[pyo3(signature = (tiles, seed = None, max_mistakes = 4))]
    fn from_tiles(
        tiles: Vec<(String, String, String)>,
        seed: Option<u64>,
        max_mistakes: u32,
    ) -> PyResult<Self> {
        let tiles = tiles
            .into_iter()
            .map(|(word, group, difficulty)| {
                WordTile::new(word, group, Difficulty::from(difficulty))
            })
            .collect();
        let roster = Roster::new(config(seed, max_mistakes), tiles).map_err(roster_err)?;
        Ok(Self {
            engine: PuzzleEngine::new(roster),
        })
    }

    /// Toggle a word. Returns False if the click was ignored.
    fn select_word(&mut self, word: &str) -> bool {
        !matches!(self.engine.select_word(word), SelectOutcome::Ignored(_))
    }

    fn shuffle(&mut self) -> bool {
        self.engine.shuffle()
    }

    fn deselect_all(&mut self) -> bool {
        self.engine.deselect_all()
    }

    /// Submit the selection.
    ///
    /// Returns one of "correct", "won", "incorrect", "lost", "ignored".
    fn submit(&mut self) -> &'static str {
        match self.engine.submit() {
            SubmitOutcome::Correct { won: true, .. } => "won",
            SubmitOutcome::Correct { .. } => "correct",
            SubmitOutcome::Incorrect { lost: true, .. } => "lost",
            SubmitOutcome::Incorrect { .. } => "incorrect",
            SubmitOutcome::Ignored(_) => "ignored",
        }
    }

    fn restart(&mut self) {
        self.engine.restart();
    }

    /// Remaining tiles as `(word, group, difficulty, is_selected)`.
    #[getter]
    fn remaining_tiles(&self) -> Vec<(String, String, String, bool)> {
        self.engine
            .state()
            .remaining_tiles()
            .iter()
            .map(|t| (t.word.clone(), t.group.clone(), t.difficulty.to_string(), t.is_selected))
            .collect()
    }

    /// Found groups as `(group_name, difficulty, member_words)`.
    #[getter]
    fn found_groups(&self) -> Vec<(String, String, Vec<String>)> {
        self.engine
            .state()
            .found_groups()
            .iter()
            .map(|g| (g.group_name.clone(), g.difficulty.to_string(), g.member_words.to_vec()))
            .collect()
    }

    #[getter]
    fn mistakes_remaining(&self) -> u32 {
        self.engine.state().mistakes_remaining()
    }

    #[getter]
    fn selected_count(&self) -> usize {
        self.engine.state().selected_count()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.engine.state().game_over()
    }

    #[getter]
    fn game_won(&self) -> bool {
        self.engine.state().game_won()
    }

    #[getter]
    fn message(&self) -> &'static str {
        self.engine.state().status().message()
    }

    /// Display color for a difficulty tag.
    #[staticmethod]
    fn group_color(difficulty: &str) -> &'static str {
        Difficulty::from(difficulty).color()
    }

    fn __repr__(&self) -> String {
        let state = self.engine.state();
        format!(
            "Puzzle(remaining={}, found={}, mistakes_remaining={})",
            state.remaining_tiles().len(),
            state.found_groups().len(),
            state.mistakes_remaining()
        )
    }
}
