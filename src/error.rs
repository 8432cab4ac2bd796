//! Fatal startup errors.
//!
//! Everything that happens during play is a state transition, so only two
//! things can fail: parsing the baked-in level and opening the display.

use thiserror::Error;

/// Malformed level layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    /// Layout has no rows, or its first row is empty.
    #[error("level layout is empty")]
    Empty,

    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A character other than `.`, `S`, `E`, `T`.
    #[error("unknown cell {glyph:?} at row {row}, column {col}")]
    UnknownCell { glyph: char, row: usize, col: usize },

    /// No `S` cell.
    #[error("level has no start cell 'S'")]
    MissingStart,

    /// No `E` cell.
    #[error("level has no exit cell 'E'")]
    MissingExit,

    /// More than one `S` or `E`.
    #[error("duplicate {glyph:?} at row {row}, column {col}")]
    Duplicate { glyph: char, row: usize, col: usize },
}

/// Display or input backend could not be brought up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("failed to initialize display: {message}")]
    Init { message: String },
}
