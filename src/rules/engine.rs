//! The puzzle engine.
//!
//! `PuzzleEngine` owns the session state and is the only thing that mutates
//! it. Every command runs to completion before returning, so callers always
//! observe a consistent state through `state()` or `snapshot()`.
//!
//! ## Transitions
//!
//! - `Playing` -> `Won` when the last group is found
//! - `Playing` -> `Lost` when a wrong guess spends the last mistake;
//!   unfound groups are revealed in the same step
//! - `Won` and `Lost` absorb every further command

use tracing::{debug, info};

use crate::core::{
    Command, CommandRecord, FoundGroup, GameRng, GameRngState, PuzzleConfig, PuzzleState,
    PuzzleStatus, Snapshot,
};
use crate::puzzles::Roster;

use super::outcome::{CommandOutcome, Ignored, PuzzleResult, SelectOutcome, SubmitOutcome};

/// Engine for one puzzle session.
///
/// ```
/// use connections_engine::puzzles::reference_roster;
/// use connections_engine::rules::PuzzleEngine;
///
/// let mut engine = PuzzleEngine::new(reference_roster().unwrap());
/// for word in ["eye", "pop", "bib", "gag"] {
///     engine.select_word(word);
/// }
/// assert!(engine.submit().is_correct());
/// assert_eq!(engine.snapshot().remaining_tiles.len(), 12);
/// ```
#[derive(Clone, Debug)]
pub struct PuzzleEngine {
    roster: Roster,
    state: PuzzleState,
    rng: GameRng,
    history: Vec<CommandRecord>,
}

impl PuzzleEngine {
    /// Start a session over `roster`.
    ///
    /// The shuffle RNG is seeded from the roster's config, or from OS
    /// entropy if no seed is set.
    #[must_use]
    pub fn new(roster: Roster) -> Self {
        let rng = match roster.config().seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(roster, rng)
    }

    /// Start a session with an injected RNG.
    #[must_use]
    pub fn with_rng(roster: Roster, rng: GameRng) -> Self {
        let state = Self::fresh_state(&roster);
        debug!(words = roster.len(), seed = rng.seed(), "puzzle session started");
        Self {
            roster,
            state,
            rng,
            history: Vec::new(),
        }
    }

    fn fresh_state(roster: &Roster) -> PuzzleState {
        PuzzleState::new(roster.tiles().iter().cloned(), roster.config().max_mistakes)
    }

    // === Accessors ===

    /// The roster this session plays over.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        self.roster.config()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Observable snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot(self.config().group_size)
    }

    /// Terminal result, once the puzzle has ended.
    #[must_use]
    pub fn result(&self) -> Option<PuzzleResult> {
        match self.state.status() {
            PuzzleStatus::Playing => None,
            PuzzleStatus::Won => Some(PuzzleResult::Won),
            PuzzleStatus::Lost => Some(PuzzleResult::Lost),
        }
    }

    /// Commands applied through `apply`, oldest first.
    #[must_use]
    pub fn history(&self) -> &[CommandRecord] {
        &self.history
    }

    /// Current RNG state, for reproducing later shuffles.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Commands ===

    /// Toggle selection of a remaining word.
    ///
    /// Deselecting always works. Selecting a new tile is refused once the
    /// selection is full, unless the config leaves that cap to the caller.
    pub fn select_word(&mut self, word: &str) -> SelectOutcome {
        if self.state.game_over() {
            return SelectOutcome::Ignored(Ignored::GameOver);
        }
        let Some(index) = self.state.position_of(word) else {
            debug!(word, "select ignored: unknown word");
            return SelectOutcome::Ignored(Ignored::UnknownWord);
        };

        if self.state.remaining_tiles[index].is_selected {
            self.state.remaining_tiles[index].is_selected = false;
            debug!(word, selected = self.state.selected_count(), "tile deselected");
            return SelectOutcome::Deselected;
        }

        let config = self.roster.config();
        if config.enforce_selection_limit && self.state.selected_count() >= config.group_size {
            debug!(word, "select ignored: selection full");
            return SelectOutcome::Ignored(Ignored::SelectionFull);
        }

        self.state.remaining_tiles[index].is_selected = true;
        debug!(word, selected = self.state.selected_count(), "tile selected");
        SelectOutcome::Selected
    }

    /// Randomly reorder the remaining tiles.
    ///
    /// Membership and selection flags are untouched. Returns false after the
    /// puzzle has ended.
    pub fn shuffle(&mut self) -> bool {
        if self.state.game_over() {
            return false;
        }
        let mut tiles: Vec<_> = self.state.remaining_tiles.iter().cloned().collect();
        self.rng.shuffle(&mut tiles);
        self.state.remaining_tiles = tiles.into_iter().collect();
        debug!(tiles = self.state.remaining_tiles.len(), "tiles shuffled");
        true
    }

    /// Clear every selection. Returns false after the puzzle has ended.
    pub fn deselect_all(&mut self) -> bool {
        if self.state.game_over() {
            return false;
        }
        if self.state.clear_selection() {
            debug!("selection cleared");
        }
        true
    }

    /// Submit the current selection as a group.
    ///
    /// Needs exactly `group_size` selected tiles; anything else is a no-op
    /// and costs no mistake.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state.game_over() {
            return SubmitOutcome::Ignored(Ignored::GameOver);
        }

        let selected = self.state.selected_count();
        if selected != self.config().group_size {
            debug!(selected, "submit ignored: wrong selection size");
            return SubmitOutcome::Ignored(Ignored::WrongSelectionSize { selected });
        }

        let valid = {
            let mut chosen = self.state.selected_tiles();
            let first_group = chosen.next().map(|t| t.group.as_str());
            chosen.all(|t| Some(t.group.as_str()) == first_group)
        };

        if valid {
            self.accept_group()
        } else {
            self.reject_guess()
        }
    }

    /// Apply a command value and record it in the history.
    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        let outcome = match &command {
            Command::SelectWord(word) => CommandOutcome::Select(self.select_word(word)),
            Command::Shuffle => {
                if self.shuffle() {
                    CommandOutcome::Shuffled
                } else {
                    CommandOutcome::Ignored(Ignored::GameOver)
                }
            }
            Command::DeselectAll => {
                if self.deselect_all() {
                    CommandOutcome::DeselectedAll
                } else {
                    CommandOutcome::Ignored(Ignored::GameOver)
                }
            }
            Command::Submit => CommandOutcome::Submit(self.submit()),
        };

        let sequence = self.history.len();
        self.history
            .push(CommandRecord::new(sequence, command, outcome.changed_state()));
        outcome
    }

    /// Discard the session and start over from the same roster.
    ///
    /// The RNG stream continues rather than restarting.
    pub fn restart(&mut self) {
        self.state = Self::fresh_state(&self.roster);
        self.history.clear();
        info!("puzzle restarted");
    }

    // === Transitions ===

    fn accept_group(&mut self) -> SubmitOutcome {
        let Some(group) = FoundGroup::solved(self.state.selected_tiles()) else {
            // Unreachable: the selection size was checked to be non-zero.
            return SubmitOutcome::Ignored(Ignored::WrongSelectionSize { selected: 0 });
        };

        self.state.remaining_tiles.retain(|t| !t.is_selected);
        self.state.found_groups.push_back(group.clone());
        info!(group = %group.group_name, words = %group, "group found");

        let won = self.state.found_groups.len() == self.config().groups_needed;
        if won {
            self.state.status = PuzzleStatus::Won;
            info!(mistakes_remaining = self.state.mistakes_remaining, "puzzle won");
        }
        SubmitOutcome::Correct { group, won }
    }

    fn reject_guess(&mut self) -> SubmitOutcome {
        self.state.clear_selection();
        self.state.mistakes_remaining = self.state.mistakes_remaining.saturating_sub(1);
        let mistakes_remaining = self.state.mistakes_remaining;
        info!(mistakes_remaining, "incorrect guess");

        let lost = mistakes_remaining == 0;
        if lost {
            self.state.status = PuzzleStatus::Lost;
            self.reveal_remaining_solutions();
            info!("puzzle lost");
        }
        SubmitOutcome::Incorrect {
            mistakes_remaining,
            lost,
        }
    }

    /// Disclose every unfound group and empty the board.
    ///
    /// Groups are appended in roster order with words in roster order.
    fn reveal_remaining_solutions(&mut self) {
        for name in self.roster.group_names() {
            let still_on_board = self.state.remaining_tiles.iter().any(|t| t.in_group(name));
            if !still_on_board || self.state.is_group_found(name) {
                continue;
            }
            if let Some(group) = FoundGroup::revealed(self.roster.group_tiles(name)) {
                debug!(group = %group.group_name, "group revealed");
                self.state.found_groups.push_back(group);
            }
        }
        self.state.remaining_tiles.clear();
    }
}
