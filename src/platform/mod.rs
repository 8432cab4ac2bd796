//! Platform abstraction layer
//!
//! The core needs three things from a display backend:
//! - Input: keys pressed this frame, keys held right now, close requests
//! - Output: replay a draw list onto the canvas
//! - Time: a monotonic millisecond clock and a frame-pacing wait
//!
//! [`run`] drives any [`Game`] on any [`Backend`].

pub mod driver;
#[cfg(feature = "window")]
pub mod window;

pub use driver::run;

use crate::input::{HeldKeys, Intent, Key};
use crate::renderer::DrawCmd;

/// Raw input gathered by the backend for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Key-down events since the previous frame, in arrival order
    pub pressed: Vec<Key>,
    /// Keys currently held down
    pub held: Vec<Key>,
    /// The window's close button was used
    pub close_requested: bool,
}

/// Display/input backend
pub trait Backend {
    fn poll_input(&mut self) -> FrameInput;

    /// Milliseconds on a monotonic clock
    fn now_ms(&self) -> u64;

    fn present(&mut self, frame: &[DrawCmd]);

    /// Block until the next tick is due
    fn wait_for_next_frame(&mut self);
}

/// A game the driver can run
pub trait Game {
    /// Discrete intent from a key press. Quit never reaches the game.
    fn handle_intent(&mut self, intent: Intent, now_ms: u64);

    /// Advance one tick with the keys currently held
    fn update(&mut self, held: HeldKeys, now_ms: u64);

    fn draw(&self) -> Vec<DrawCmd>;
}
