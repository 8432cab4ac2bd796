//! Trap Maze rules
//!
//! Movement is event-driven: one key press, one call to [`apply_intent`].
//! The only time-driven rule is the reveal timer in [`advance_clock`].

use super::level::Level;
use super::state::{
    MSG_GO, MSG_HIT_TRAP, MSG_INVALID_MOVE, MSG_LOSE, MSG_WIN, MazeConfig, MazePhase, MazeState,
};
use crate::input::Intent;

/// What a single intent did to the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Intent has no effect in the current phase
    Ignored,
    /// Candidate cell was off the grid; only the message changed
    Rejected,
    /// Player stepped onto floor
    Moved,
    /// Trap hit with lives to spare; player back on Start
    TrapHit { lives_left: u32 },
    /// Trap hit on the last life
    Lost,
    /// Player reached the exit
    Won,
    /// State rebuilt from scratch
    Restarted,
}

/// Apply one discrete intent
pub fn apply_intent(
    state: &mut MazeState,
    level: &Level,
    config: &MazeConfig,
    intent: Intent,
    now_ms: u64,
) -> StepOutcome {
    if intent == Intent::Restart {
        *state = MazeState::new(level, config, now_ms);
        return StepOutcome::Restarted;
    }

    match (state.phase, intent.delta()) {
        (MazePhase::Play, Some((dx, dy))) => try_move(state, level, dx, dy),
        _ => StepOutcome::Ignored,
    }
}

fn try_move(state: &mut MazeState, level: &Level, dx: i32, dy: i32) -> StepOutcome {
    let candidate = state.player.moved_by(dx, dy);

    if !level.in_bounds(candidate) {
        state.message = MSG_INVALID_MOVE.to_string();
        return StepOutcome::Rejected;
    }

    state.moves += 1;

    if level.is_trap(candidate) {
        state.lives = state.lives.saturating_sub(1);
        if state.lives > 0 {
            state.player = level.start();
            state.message = MSG_HIT_TRAP.to_string();
            log::debug!(
                "Trap at ({}, {}), {} lives left",
                candidate.x,
                candidate.y,
                state.lives
            );
            return StepOutcome::TrapHit {
                lives_left: state.lives,
            };
        }
        state.message = MSG_LOSE.to_string();
        state.phase = MazePhase::Lose;
        log::info!("Maze lost after {} moves", state.moves);
        return StepOutcome::Lost;
    }

    state.player = candidate;

    if candidate == level.exit() {
        state.message = MSG_WIN.to_string();
        state.phase = MazePhase::Win;
        log::info!("Maze won in {} moves", state.moves);
        return StepOutcome::Won;
    }

    state.message.clear();
    StepOutcome::Moved
}

/// Advance the reveal timer; returns true when this call ended the reveal
pub fn advance_clock(state: &mut MazeState, now_ms: u64) -> bool {
    if state.phase != MazePhase::Reveal {
        return false;
    }
    if now_ms.saturating_sub(state.reveal_started_ms) < state.reveal_ms {
        return false;
    }
    state.phase = MazePhase::Play;
    state.message = MSG_GO.to_string();
    log::debug!("Reveal over, traps hidden");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::level::Position;
    use proptest::prelude::*;

    const SMALL: [&str; 3] = ["....", "T..E", "S..."];

    fn playing(rows: &[&str]) -> (Level, MazeConfig, MazeState) {
        let level = Level::parse(rows).unwrap();
        let config = MazeConfig::default();
        let mut state = MazeState::new(&level, &config, 0);
        assert!(advance_clock(&mut state, config.reveal_ms));
        (level, config, state)
    }

    #[test]
    fn test_reveal_locks_movement() {
        let level = Level::parse(&SMALL).unwrap();
        let config = MazeConfig::default();
        let mut state = MazeState::new(&level, &config, 0);

        let outcome = apply_intent(&mut state, &level, &config, Intent::MoveRight, 10);
        assert_eq!(outcome, StepOutcome::Ignored);
        assert_eq!(state.player, level.start());
        assert_eq!(state.moves, 0);
    }

    #[test]
    fn test_reveal_timer() {
        let level = Level::parse(&SMALL).unwrap();
        let config = MazeConfig::default();
        let mut state = MazeState::new(&level, &config, 500);

        assert!(!advance_clock(&mut state, 500));
        assert!(!advance_clock(&mut state, 3499));
        assert_eq!(state.phase, MazePhase::Reveal);

        assert!(advance_clock(&mut state, 3500));
        assert_eq!(state.phase, MazePhase::Play);
        assert_eq!(state.message, MSG_GO);

        // Only fires once
        assert!(!advance_clock(&mut state, 10_000));
    }

    #[test]
    fn test_win_scenario() {
        let (level, config, mut state) = playing(&SMALL);

        for intent in [Intent::MoveRight, Intent::MoveRight, Intent::MoveRight] {
            assert_eq!(
                apply_intent(&mut state, &level, &config, intent, 4000),
                StepOutcome::Moved
            );
        }
        let outcome = apply_intent(&mut state, &level, &config, Intent::MoveUp, 4000);

        assert_eq!(outcome, StepOutcome::Won);
        assert_eq!(state.phase, MazePhase::Win);
        assert_eq!(state.moves, 4);
        assert_eq!(state.lives, 3);
        assert_eq!(state.player, Position::new(3, 1));
        assert!(!state.traps_visible());
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let (level, config, mut state) = playing(&SMALL);
        let before = state.clone();

        let outcome = apply_intent(&mut state, &level, &config, Intent::MoveLeft, 4000);
        assert_eq!(outcome, StepOutcome::Rejected);
        assert_eq!(state.message, MSG_INVALID_MOVE);
        assert_eq!(state.player, before.player);
        assert_eq!(state.moves, before.moves);
        assert_eq!(state.lives, before.lives);

        let outcome = apply_intent(&mut state, &level, &config, Intent::MoveDown, 4000);
        assert_eq!(outcome, StepOutcome::Rejected);
        assert_eq!(state.moves, 0);
    }

    #[test]
    fn test_move_clears_message() {
        let (level, config, mut state) = playing(&SMALL);
        apply_intent(&mut state, &level, &config, Intent::MoveLeft, 4000);
        assert_eq!(state.message, MSG_INVALID_MOVE);

        apply_intent(&mut state, &level, &config, Intent::MoveRight, 4000);
        assert!(state.message.is_empty());
    }

    #[test]
    fn test_trap_hit_resets_to_start() {
        let (level, config, mut state) = playing(&SMALL);
        apply_intent(&mut state, &level, &config, Intent::MoveRight, 4000);

        // (1,2) -> (1,1) -> (0,1) is the trap
        apply_intent(&mut state, &level, &config, Intent::MoveUp, 4000);
        let outcome = apply_intent(&mut state, &level, &config, Intent::MoveLeft, 4000);

        assert_eq!(outcome, StepOutcome::TrapHit { lives_left: 2 });
        assert_eq!(state.lives, 2);
        assert_eq!(state.moves, 3);
        assert_eq!(state.player, level.start());
        assert_eq!(state.phase, MazePhase::Play);
        assert_eq!(state.message, MSG_HIT_TRAP);
    }

    #[test]
    fn test_last_life_loses_in_place() {
        let (level, config, mut state) = playing(&SMALL);
        state.lives = 1;

        // Start (0,2) is directly below the trap at (0,1)
        let outcome = apply_intent(&mut state, &level, &config, Intent::MoveUp, 4000);

        assert_eq!(outcome, StepOutcome::Lost);
        assert_eq!(state.phase, MazePhase::Lose);
        assert_eq!(state.lives, 0);
        assert_eq!(state.moves, 1);
        assert_eq!(state.player, level.start());
        assert_eq!(state.message, MSG_LOSE);
        assert!(state.traps_visible());
    }

    #[test]
    fn test_terminal_phases_ignore_movement() {
        let (level, config, mut state) = playing(&SMALL);
        for phase in [MazePhase::Win, MazePhase::Lose] {
            state.phase = phase;
            let before = state.clone();
            for intent in [
                Intent::MoveUp,
                Intent::MoveDown,
                Intent::MoveLeft,
                Intent::MoveRight,
                Intent::Pause,
            ] {
                assert_eq!(
                    apply_intent(&mut state, &level, &config, intent, 4000),
                    StepOutcome::Ignored
                );
            }
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_restart_from_terminal() {
        let (level, config, mut state) = playing(&SMALL);
        state.lives = 1;
        apply_intent(&mut state, &level, &config, Intent::MoveUp, 4000);
        assert_eq!(state.phase, MazePhase::Lose);

        let outcome = apply_intent(&mut state, &level, &config, Intent::Restart, 9000);
        assert_eq!(outcome, StepOutcome::Restarted);
        assert_eq!(state, MazeState::new(&level, &config, 9000));
        assert_eq!(state.lives, 3);
        assert_eq!(state.moves, 0);
        assert_eq!(state.phase, MazePhase::Reveal);
        assert_eq!(state.player, level.start());
    }

    #[test]
    fn test_restart_mid_play() {
        let (level, config, mut state) = playing(&SMALL);
        apply_intent(&mut state, &level, &config, Intent::MoveRight, 4000);
        apply_intent(&mut state, &level, &config, Intent::Restart, 5000);
        assert_eq!(state.phase, MazePhase::Reveal);
        assert_eq!(state.moves, 0);
        assert_eq!(state.reveal_started_ms, 5000);
    }

    const OPEN: [&str; 6] = [
        "S.......",
        "........",
        "........",
        "........",
        "........",
        ".......E",
    ];

    fn direction() -> impl Strategy<Value = Intent> {
        prop_oneof![
            Just(Intent::MoveUp),
            Just(Intent::MoveDown),
            Just(Intent::MoveLeft),
            Just(Intent::MoveRight),
        ]
    }

    proptest! {
        #[test]
        fn prop_interior_move_changes_one_axis(x in 1i32..7, y in 1i32..5, intent in direction()) {
            let (level, config, mut state) = playing(&OPEN);
            state.player = Position::new(x, y);

            apply_intent(&mut state, &level, &config, intent, 4000);

            let dx = (state.player.x - x).abs();
            let dy = (state.player.y - y).abs();
            prop_assert_eq!(dx + dy, 1);
            prop_assert_eq!(state.moves, 1);
        }

        #[test]
        fn prop_outward_edge_move_is_rejected(along in 0i32..6, side in 0usize..4) {
            let (level, config, mut state) = playing(&OPEN);
            let (pos, intent) = match side {
                0 => (Position::new(0, along), Intent::MoveLeft),
                1 => (Position::new(7, along), Intent::MoveRight),
                2 => (Position::new(along, 0), Intent::MoveUp),
                _ => (Position::new(along, 5), Intent::MoveDown),
            };
            state.player = pos;
            let before = state.clone();

            let outcome = apply_intent(&mut state, &level, &config, intent, 4000);

            prop_assert_eq!(outcome, StepOutcome::Rejected);
            prop_assert_eq!(state.player, before.player);
            prop_assert_eq!(state.moves, before.moves);
            prop_assert_eq!(state.lives, before.lives);
            prop_assert_eq!(state.phase, before.phase);
        }

        #[test]
        fn prop_trap_costs_exactly_one_life(lives in 2u32..10) {
            let (level, config, mut state) = playing(&SMALL);
            state.lives = lives;

            let outcome = apply_intent(&mut state, &level, &config, Intent::MoveUp, 4000);

            prop_assert_eq!(outcome, StepOutcome::TrapHit { lives_left: lives - 1 });
            prop_assert_eq!(state.lives, lives - 1);
            prop_assert_eq!(state.player, level.start());
            prop_assert_eq!(state.phase, MazePhase::Play);
        }
    }
}
