//! Trap Maze bound to the loop driver

use super::level::Level;
use super::state::{MazeConfig, MazeState};
use super::tick::{StepOutcome, advance_clock, apply_intent};
use crate::input::{HeldKeys, Intent};
use crate::platform::Game;
use crate::renderer::{self, DrawCmd};

pub struct MazeSession {
    level: Level,
    config: MazeConfig,
    state: MazeState,
}

impl MazeSession {
    pub fn new(level: Level, config: MazeConfig, now_ms: u64) -> Self {
        let state = MazeState::new(&level, &config, now_ms);
        log::info!(
            "Maze episode started: {}x{} grid, {} traps",
            level.width(),
            level.height(),
            level.traps().count()
        );
        Self {
            level,
            config,
            state,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn state(&self) -> &MazeState {
        &self.state
    }
}

impl Game for MazeSession {
    fn handle_intent(&mut self, intent: Intent, now_ms: u64) {
        let outcome = apply_intent(&mut self.state, &self.level, &self.config, intent, now_ms);
        if outcome == StepOutcome::Restarted {
            log::info!("Maze episode restarted");
        }
    }

    fn update(&mut self, _held: HeldKeys, now_ms: u64) {
        advance_clock(&mut self.state, now_ms);
    }

    fn draw(&self) -> Vec<DrawCmd> {
        renderer::maze::draw(&self.level, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{MazePhase, Position};

    fn session() -> MazeSession {
        let level = Level::parse(&["....", "T..E", "S..."]).unwrap();
        MazeSession::new(level, MazeConfig::default(), 0)
    }

    #[test]
    fn test_update_ends_reveal() {
        let mut session = session();
        session.update(HeldKeys::default(), 2999);
        assert_eq!(session.state().phase, MazePhase::Reveal);
        session.update(HeldKeys::default(), 3000);
        assert_eq!(session.state().phase, MazePhase::Play);
    }

    #[test]
    fn test_held_keys_do_not_move() {
        let mut session = session();
        session.update(HeldKeys::default(), 3000);
        session.update(HeldKeys { up: true, down: false }, 3100);
        assert_eq!(session.state().player, Position::new(0, 2));
        assert_eq!(session.state().moves, 0);
    }

    #[test]
    fn test_restart_via_intent() {
        let mut session = session();
        session.update(HeldKeys::default(), 3000);
        session.handle_intent(Intent::MoveRight, 3100);
        session.handle_intent(Intent::Restart, 3200);
        assert_eq!(session.state().phase, MazePhase::Reveal);
        assert_eq!(session.state().reveal_started_ms, 3200);
        assert_eq!(session.state().player, session.level().start());
    }
}
