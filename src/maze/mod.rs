//! Trap Maze
//!
//! Walk from `S` to `E` on a grid whose traps are only shown for the first
//! few seconds. All rules are pure functions over [`MazeState`]; the session
//! wires them to the loop driver.

pub mod level;
pub mod session;
pub mod state;
pub mod tick;

pub use level::{Cell, Level, Position};
pub use session::MazeSession;
pub use state::{MazeConfig, MazePhase, MazeState};
pub use tick::{StepOutcome, advance_clock, apply_intent};
