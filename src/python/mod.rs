//! Python bindings for the puzzle engine.
//!
//! Lets a Python front end drive the engine headlessly.
//!
//! # Quick Start
//!
//! ```python
//! import connections_engine as ce
//!
//! puzzle = ce.Puzzle(seed=42)
//! for word in ["eye", "pop", "bib", "gag"]:
//!     puzzle.select_word(word)
//!
//! assert puzzle.submit() == "correct"
//! print(puzzle.found_groups)
//! ```

use pyo3::prelude::*;

mod py_puzzle;

pub use py_puzzle::*;

/// connections_engine: a headless word grouping puzzle.
#[pymodule]
fn connections_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPuzzle>()?;
    Ok(())
}
