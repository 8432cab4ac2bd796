//! Trap Maze run state

use serde::{Deserialize, Serialize};

use super::level::{Level, Position};
use crate::consts::{REVEAL_MS, STARTING_LIVES};

/// Status text shown while traps are being revealed
pub const MSG_REVEAL: &str = "Showing traps...";
pub const MSG_GO: &str = "Go!";
pub const MSG_INVALID_MOVE: &str = "Invalid Move!";
pub const MSG_HIT_TRAP: &str = "HIT A TRAP! Resetting...";
pub const MSG_LOSE: &str = "GAME OVER! (Press R)";
pub const MSG_WIN: &str = "YOU WON! (Press R)";

/// Top-level maze state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MazePhase {
    /// Traps visible, movement locked until the reveal timer runs out
    Reveal,
    /// Traps hidden, moves accepted
    Play,
    /// Player reached the exit
    Win,
    /// Out of lives
    Lose,
}

impl MazePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, MazePhase::Win | MazePhase::Lose)
    }
}

/// Tunables for a maze episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeConfig {
    /// How long traps stay visible at episode start (ms)
    pub reveal_ms: u64,
    pub starting_lives: u32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            reveal_ms: REVEAL_MS,
            starting_lives: STARTING_LIVES,
        }
    }
}

/// Everything that changes during one maze episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeState {
    pub player: Position,
    pub lives: u32,
    pub moves: u32,
    pub phase: MazePhase,
    pub message: String,
    /// Clock reading (ms) when the reveal started
    pub reveal_started_ms: u64,
    /// Copied from the config so the reveal timer needs no outside lookup
    pub reveal_ms: u64,
}

impl MazeState {
    /// Fresh episode: player on Start, full lives, traps revealed
    pub fn new(level: &Level, config: &MazeConfig, now_ms: u64) -> Self {
        Self {
            player: level.start(),
            lives: config.starting_lives,
            moves: 0,
            phase: MazePhase::Reveal,
            message: MSG_REVEAL.to_string(),
            reveal_started_ms: now_ms,
            reveal_ms: config.reveal_ms,
        }
    }

    /// Traps are drawn during the reveal and after a loss, never after a win
    pub fn traps_visible(&self) -> bool {
        matches!(self.phase, MazePhase::Reveal | MazePhase::Lose)
    }

    /// Status bar line
    pub fn status_line(&self) -> String {
        format!(
            "Lives: {} | Moves: {} | {}",
            self.lives, self.moves, self.message
        )
    }
}
