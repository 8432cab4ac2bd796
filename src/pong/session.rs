//! Paddle Pong bound to the loop driver
//!
//! Pause and restart are out-of-band: they act on the match regardless of
//! what the tick is doing.

use super::state::{PongConfig, PongPhase, PongState};
use super::tick::{TickEvent, tick};
use crate::input::{HeldKeys, Intent};
use crate::platform::Game;
use crate::renderer::{self, DrawCmd};

pub struct PongSession {
    config: PongConfig,
    state: PongState,
    seed: u64,
    /// Episodes started so far, mixed into each episode's RNG seed
    episode: u64,
}

impl PongSession {
    pub fn new(config: PongConfig, seed: u64) -> Self {
        log::info!("Pong match started with seed: {}", seed);
        let state = PongState::new(&config, seed);
        Self {
            config,
            state,
            seed,
            episode: 0,
        }
    }

    pub fn state(&self) -> &PongState {
        &self.state
    }

    /// Running <-> Paused. Returns false when the match is over.
    pub fn toggle_pause(&mut self) -> bool {
        self.state.phase = match self.state.phase {
            PongPhase::Running => PongPhase::Paused,
            PongPhase::Paused => PongPhase::Running,
            PongPhase::GameOver => return false,
        };
        log::debug!("Pong phase -> {:?}", self.state.phase);
        true
    }

    /// Rebuild the match from scratch. Only allowed once it is over.
    pub fn restart(&mut self) -> bool {
        if self.state.phase != PongPhase::GameOver {
            return false;
        }
        self.episode += 1;
        let seed = self.seed.wrapping_add(self.episode);
        self.state = PongState::new(&self.config, seed);
        log::info!("Pong match restarted (episode {})", self.episode + 1);
        true
    }
}

impl Game for PongSession {
    fn handle_intent(&mut self, intent: Intent, _now_ms: u64) {
        match intent {
            Intent::Pause => {
                self.toggle_pause();
            }
            Intent::Restart => {
                self.restart();
            }
            // Paddle follows held keys, not presses
            Intent::MoveUp
            | Intent::MoveDown
            | Intent::MoveLeft
            | Intent::MoveRight
            | Intent::Quit => {}
        }
    }

    fn update(&mut self, held: HeldKeys, _now_ms: u64) {
        for event in tick(&mut self.state, &self.config, held) {
            if let TickEvent::Miss = event {
                log::info!("Game over at tick {}", self.state.time_ticks);
            }
        }
    }

    fn draw(&self) -> Vec<DrawCmd> {
        renderer::pong::draw(&self.config, &self.state)
    }
}
