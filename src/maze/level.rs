//! Immutable maze layout parsed from a character grid

use serde::{Deserialize, Serialize};

use crate::consts::MAZE_LEVEL;
use crate::error::LevelError;

/// A cell coordinate on the grid (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Floor,
    Start,
    Exit,
    Trap,
}

impl Cell {
    fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Cell::Floor),
            'S' => Some(Cell::Start),
            'E' => Some(Cell::Exit),
            'T' => Some(Cell::Trap),
            _ => None,
        }
    }
}

/// Parsed level grid, row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: Position,
    exit: Position,
}

impl Level {
    /// Parse rows of `.`/`S`/`E`/`T`. Exactly one start and one exit.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, LevelError> {
        let width = rows
            .first()
            .map(|row| row.as_ref().chars().count())
            .unwrap_or(0);
        if width == 0 {
            return Err(LevelError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        let mut start = None;
        let mut exit = None;

        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(LevelError::RaggedRow {
                    row: r,
                    expected: width,
                    found,
                });
            }

            for (c, glyph) in row.chars().enumerate() {
                let cell = Cell::from_glyph(glyph).ok_or(LevelError::UnknownCell {
                    glyph,
                    row: r,
                    col: c,
                })?;
                let pos = Position::new(c as i32, r as i32);
                let slot = match cell {
                    Cell::Start => Some(&mut start),
                    Cell::Exit => Some(&mut exit),
                    Cell::Floor | Cell::Trap => None,
                };
                if let Some(slot) = slot {
                    if slot.replace(pos).is_some() {
                        return Err(LevelError::Duplicate {
                            glyph,
                            row: r,
                            col: c,
                        });
                    }
                }
                cells.push(cell);
            }
        }

        let start = start.ok_or(LevelError::MissingStart)?;
        let exit = exit.ok_or(LevelError::MissingExit)?;

        Ok(Self {
            width,
            height: rows.len(),
            cells,
            start,
            exit,
        })
    }

    /// The level compiled into the game
    pub fn builtin() -> Result<Self, LevelError> {
        Self::parse(MAZE_LEVEL)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn exit(&self) -> Position {
        self.exit
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Cell at `pos`, `None` outside the grid
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.cells
            .get(pos.y as usize * self.width + pos.x as usize)
            .copied()
    }

    pub fn is_trap(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Trap)
    }

    /// All trap coordinates in row-major order
    pub fn traps(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Trap)
            .map(|(i, _)| Position::new((i % self.width) as i32, (i / self.width) as i32))
    }
}
