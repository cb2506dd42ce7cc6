//! Property tests over random command sequences.
//!
//! Whatever the player does, the engine must keep:
//! - every word accounted for exactly once (board + groups)
//! - found groups pure (all members from one category)
//! - the mistake counter within budget, ending the game exactly at zero
//! - terminal states terminal

use connections_engine::core::{Command, GameRng, PuzzleState, WordTile};
use connections_engine::puzzles::{reference_roster, REFERENCE_TILES};
use connections_engine::rules::PuzzleEngine;
use proptest::prelude::*;

fn group_of(word: &str) -> &'static str {
    REFERENCE_TILES
        .iter()
        .find(|(w, _, _)| *w == word)
        .map(|(_, g, _)| *g)
        .expect("word from the reference puzzle")
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        6 => (0..REFERENCE_TILES.len()).prop_map(|i| Command::select(REFERENCE_TILES[i].0)),
        1 => Just(Command::Shuffle),
        1 => Just(Command::DeselectAll),
        3 => Just(Command::Submit),
    ]
}

fn check_invariants(state: &PuzzleState) {
    assert_eq!(state.word_total(), 16);
    assert!(state.found_groups().len() <= 4);
    assert!(state.mistakes_remaining() <= 4);
    assert!(state.selected_count() <= 4);

    for group in state.found_groups() {
        assert_eq!(group.len(), 4);
        for word in &group.member_words {
            assert_eq!(group_of(word), group.group_name);
        }
    }

    let mut words: Vec<&str> = state
        .remaining_tiles()
        .iter()
        .map(|t: &WordTile| t.word.as_str())
        .collect();
    words.extend(
        state
            .found_groups()
            .iter()
            .flat_map(|g| g.member_words.iter().map(String::as_str)),
    );
    words.sort_unstable();
    words.dedup();
    assert_eq!(words.len(), 16);

    if state.game_won() {
        assert!(state.game_over());
        assert_eq!(state.found_groups().len(), 4);
        assert!(state.remaining_tiles().is_empty());
    }
    if state.game_over() && !state.game_won() {
        assert_eq!(state.mistakes_remaining(), 0);
        assert!(state.remaining_tiles().is_empty());
        assert_eq!(state.found_groups().len(), 4);
    }
    if !state.game_over() {
        assert!(state.mistakes_remaining() > 0);
    }
}

proptest! {
    #[test]
    fn prop_invariants_hold(
        seed in any::<u64>(),
        commands in prop::collection::vec(command_strategy(), 0..200),
    ) {
        let mut engine = PuzzleEngine::with_rng(reference_roster().unwrap(), GameRng::new(seed));
        let mut was_over = false;
        let mut mistakes = engine.state().mistakes_remaining();

        for command in commands {
            let before = engine.state().clone();
            engine.apply(command);
            let state = engine.state();

            check_invariants(state);

            // Mistakes never increase
            prop_assert!(state.mistakes_remaining() <= mistakes);
            mistakes = state.mistakes_remaining();

            // Game over never reverts, and nothing moves afterwards
            if was_over {
                prop_assert!(state.game_over());
                prop_assert_eq!(state, &before);
            }
            was_over = state.game_over();
        }
    }

    #[test]
    fn prop_deselect_all_idempotent(
        seed in any::<u64>(),
        commands in prop::collection::vec(command_strategy(), 0..60),
    ) {
        let mut engine = PuzzleEngine::with_rng(reference_roster().unwrap(), GameRng::new(seed));
        for command in commands {
            engine.apply(command);
        }

        engine.deselect_all();
        let once = engine.state().clone();
        engine.deselect_all();
        prop_assert_eq!(engine.state(), &once);
    }

    #[test]
    fn prop_shuffle_preserves_board(
        seed in any::<u64>(),
        picks in prop::collection::vec(0..16usize, 0..4),
    ) {
        let mut engine = PuzzleEngine::with_rng(reference_roster().unwrap(), GameRng::new(seed));
        for i in picks {
            engine.select_word(REFERENCE_TILES[i].0);
        }

        let mut before: Vec<_> = engine.state().remaining_tiles().iter().cloned().collect();
        engine.shuffle();
        let mut after: Vec<_> = engine.state().remaining_tiles().iter().cloned().collect();

        before.sort_by(|a, b| a.word.cmp(&b.word));
        after.sort_by(|a, b| a.word.cmp(&b.word));
        prop_assert_eq!(before, after);
    }
}
