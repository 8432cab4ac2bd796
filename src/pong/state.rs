//! Paddle Pong entities and match state
//!
//! Everything a tick reads or writes lives in [`PongState`], including the
//! RNG stream, so a tick is fully determined by its inputs.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::geom::Bounds;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PongPhase {
    /// Active gameplay
    Running,
    /// Simulation frozen, rendering continues
    Paused,
    /// Ball got past the paddle
    GameOver,
}

/// Arena and entity tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PongConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle_x: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Pixels per tick while held
    pub paddle_speed: f32,
    pub ball_size: f32,
    /// Serve velocity (pixels per tick)
    pub ball_velocity: Vec2,
    pub speed_increment: f32,
    /// Half-width of the uniform vertical perturbation on a paddle hit
    pub vertical_jitter: f32,
    pub min_vertical_speed: f32,
}

impl Default for PongConfig {
    fn default() -> Self {
        Self {
            screen_width: PONG_SCREEN_WIDTH,
            screen_height: PONG_SCREEN_HEIGHT,
            paddle_x: PADDLE_X,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            ball_size: BALL_SIZE,
            ball_velocity: Vec2::new(BALL_START_SPEED_X, BALL_START_SPEED_Y),
            speed_increment: BALL_SPEED_INCREMENT,
            vertical_jitter: BALL_VERTICAL_JITTER,
            min_vertical_speed: BALL_MIN_VERTICAL_SPEED,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub bounds: Bounds,
    pub speed: f32,
}

impl Paddle {
    /// Vertically centered at the configured x
    pub fn new(config: &PongConfig) -> Self {
        let y = (config.screen_height - config.paddle_height) / 2.0;
        Self {
            bounds: Bounds::new(config.paddle_x, y, config.paddle_width, config.paddle_height),
            speed: config.paddle_speed,
        }
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub bounds: Bounds,
    pub velocity: Vec2,
    /// Horizontal speed magnitude, ramps up on every paddle hit
    pub current_speed: f32,
}

impl Ball {
    /// Centered in the arena with the serve velocity
    pub fn new(config: &PongConfig) -> Self {
        let center = Vec2::new(config.screen_width / 2.0, config.screen_height / 2.0);
        Self {
            bounds: Bounds::centered(center, Vec2::splat(config.ball_size)),
            velocity: config.ball_velocity,
            current_speed: config.ball_velocity.x.abs(),
        }
    }

    /// True while the ball travels toward the paddle side
    #[inline]
    pub fn moving_left(&self) -> bool {
        self.velocity.x < 0.0
    }
}

/// Seeded RNG position, serializable and comparable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Generator for the next draw; every call gets a fresh stream
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream += 1;
        rng
    }
}

/// Complete match state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PongState {
    pub paddle: Paddle,
    pub ball: Ball,
    pub score: u32,
    pub phase: PongPhase,
    /// Ticks simulated while Running
    pub time_ticks: u64,
    pub rng_state: RngState,
}

impl PongState {
    /// Fresh match: entities rebuilt from the config, score zero, running
    pub fn new(config: &PongConfig, seed: u64) -> Self {
        Self {
            paddle: Paddle::new(config),
            ball: Ball::new(config),
            score: 0,
            phase: PongPhase::Running,
            time_ticks: 0,
            rng_state: RngState::new(seed),
        }
    }
}
