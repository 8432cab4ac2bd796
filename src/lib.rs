//! Mini Arcade - two tiny games on one fixed-rate loop
//!
//! Core modules:
//! - `maze`: Trap Maze level parsing, run state and movement rules
//! - `pong`: Paddle Pong entities, collisions and the per-tick simulator
//! - `input`: Backend-independent keys and the intents they map to
//! - `renderer`: Pure state -> draw-list conversion
//! - `platform`: Backend trait, loop driver and the raylib window backend

pub mod error;
pub mod geom;
pub mod input;
pub mod maze;
pub mod platform;
pub mod pong;
pub mod renderer;

pub use error::{BackendError, LevelError};
pub use geom::Bounds;
pub use input::{HeldKeys, InputMapper, Intent, Key};
pub use platform::{Backend, FrameInput, Game, run};

/// Game configuration constants
pub mod consts {
    /// Trap Maze window and grid layout
    pub const MAZE_WINDOW_WIDTH: i32 = 800;
    pub const MAZE_WINDOW_HEIGHT: i32 = 600;
    pub const MAZE_CELL_SIZE: i32 = 60;
    pub const MAZE_STATUS_BAR: i32 = 80;
    /// Maze loop rate (Hz)
    pub const MAZE_TICK_RATE: u32 = 30;

    /// Traps stay visible this long after an episode starts
    pub const REVEAL_MS: u64 = 3000;
    pub const STARTING_LIVES: u32 = 3;

    /// Baked-in level. `.` floor, `S` start, `E` exit, `T` trap.
    pub const MAZE_LEVEL: &[&str] = &[
        "........",
        ".T..T..E",
        "....T...",
        ".TT.....",
        ".S......",
        "........",
    ];

    /// Paddle Pong arena
    pub const PONG_SCREEN_WIDTH: f32 = 800.0;
    pub const PONG_SCREEN_HEIGHT: f32 = 600.0;
    /// Pong loop rate (Hz)
    pub const PONG_TICK_RATE: u32 = 60;

    /// Paddle defaults - left side, the right side is a bare wall
    pub const PADDLE_X: f32 = 20.0;
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    /// Pixels per tick while a key is held
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults (pixels per tick)
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_START_SPEED_X: f32 = 5.0;
    pub const BALL_START_SPEED_Y: f32 = 5.0;
    /// Added to the ball's horizontal speed on every paddle hit
    pub const BALL_SPEED_INCREMENT: f32 = 0.5;
    /// Vertical velocity perturbation on a paddle hit, uniform in [-J, J]
    pub const BALL_VERTICAL_JITTER: f32 = 2.0;
    /// Vertical speed below this is snapped to +/- itself
    pub const BALL_MIN_VERTICAL_SPEED: f32 = 1.0;
}
