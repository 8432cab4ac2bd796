//! Paddle Pong
//!
//! One paddle on the left, a bare wall on the right. Every return speeds the
//! ball up; letting it past ends the match.
//!
//! This module must stay pure and deterministic:
//! - One fixed step per tick, no sub-stepping
//! - Seeded RNG carried in the state
//! - No rendering or platform dependencies outside `session`

pub mod collision;
pub mod session;
pub mod state;
pub mod tick;

pub use session::PongSession;
pub use state::{Ball, Paddle, PongConfig, PongPhase, PongState, RngState};
pub use tick::{TickEvent, tick};
