//! Trap Maze draw list

use glam::Vec2;

use super::{Anchor, Color, DrawCmd};
use crate::consts::{MAZE_CELL_SIZE, MAZE_STATUS_BAR, MAZE_WINDOW_HEIGHT, MAZE_WINDOW_WIDTH};
use crate::geom::Bounds;
use crate::maze::{Level, MazeState, Position};

const FONT_SIZE: i32 = 32;
/// Player square is this much smaller than a cell on each side
const PLAYER_INSET: i32 = 10;

/// Top-left pixel of the grid: centered horizontally, and vertically in the
/// space below the status bar
pub fn grid_origin(level: &Level) -> (i32, i32) {
    let w = level.width() as i32 * MAZE_CELL_SIZE;
    let h = level.height() as i32 * MAZE_CELL_SIZE;
    (
        (MAZE_WINDOW_WIDTH - w) / 2,
        MAZE_STATUS_BAR + (MAZE_WINDOW_HEIGHT - MAZE_STATUS_BAR - h) / 2,
    )
}

fn cell_bounds(origin: (i32, i32), pos: Position, inset: i32) -> Bounds {
    let x = origin.0 + pos.x * MAZE_CELL_SIZE + inset;
    let y = origin.1 + pos.y * MAZE_CELL_SIZE + inset;
    let size = MAZE_CELL_SIZE - 2 * inset;
    Bounds::new(x as f32, y as f32, size as f32, size as f32)
}

pub fn draw(level: &Level, state: &MazeState) -> Vec<DrawCmd> {
    let mut frame = Vec::with_capacity(level.width() * level.height() * 2 + 8);
    frame.push(DrawCmd::Clear(Color::BLACK));

    // Status bar
    frame.push(DrawCmd::Rect {
        bounds: Bounds::new(0.0, 0.0, MAZE_WINDOW_WIDTH as f32, MAZE_STATUS_BAR as f32),
        color: Color::DARK_GRAY,
    });
    frame.push(DrawCmd::text(
        state.status_line(),
        Vec2::new(MAZE_WINDOW_WIDTH as f32 / 2.0, MAZE_STATUS_BAR as f32 / 2.0),
        FONT_SIZE,
        Color::WHITE,
        Anchor::Center,
    ));

    let origin = grid_origin(level);
    let show_traps = state.traps_visible();

    for y in 0..level.height() as i32 {
        for x in 0..level.width() as i32 {
            let pos = Position::new(x, y);
            let bounds = cell_bounds(origin, pos, 0);

            frame.push(DrawCmd::Rect {
                bounds,
                color: Color::GRAY,
            });
            frame.push(DrawCmd::RectOutline {
                bounds,
                thickness: 1.0,
                color: Color::DARK_GRAY,
            });

            if pos == level.exit() {
                frame.push(DrawCmd::Rect {
                    bounds,
                    color: Color::BLUE,
                });
            }

            if show_traps && level.is_trap(pos) {
                frame.push(DrawCmd::text(
                    "X",
                    bounds.center(),
                    FONT_SIZE,
                    Color::RED,
                    Anchor::Center,
                ));
            }

            if pos == state.player {
                frame.push(DrawCmd::Rect {
                    bounds: cell_bounds(origin, pos, PLAYER_INSET),
                    color: Color::GREEN,
                });
            }
        }
    }

    frame
}
