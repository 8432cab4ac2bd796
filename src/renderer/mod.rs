//! Backend-neutral draw lists
//!
//! Renderers turn a read-only game state into a `Vec<DrawCmd>`; the backend
//! replays the list onto its canvas. Nothing here touches a window.

pub mod maze;
pub mod pong;

use glam::Vec2;

use crate::geom::Bounds;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(150, 150, 150);
    pub const DARK_GRAY: Color = Color::rgb(50, 50, 50);
    pub const GREEN: Color = Color::rgb(0, 200, 0);
    pub const RED: Color = Color::rgb(200, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 200);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 139, 139);
}

/// Where a text position is measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    /// Text is centered on the point; the backend measures it
    Center,
}

/// One draw primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Fill the whole canvas
    Clear(Color),
    Rect {
        bounds: Bounds,
        color: Color,
    },
    RectOutline {
        bounds: Bounds,
        thickness: f32,
        color: Color,
    },
    /// Ellipse inscribed in `bounds`
    Ellipse {
        bounds: Bounds,
        color: Color,
    },
    Text {
        text: String,
        at: Vec2,
        size: i32,
        color: Color,
        anchor: Anchor,
    },
}

impl DrawCmd {
    pub fn text(text: impl Into<String>, at: Vec2, size: i32, color: Color, anchor: Anchor) -> Self {
        DrawCmd::Text {
            text: text.into(),
            at,
            size,
            color,
            anchor,
        }
    }
}

/// Collect the strings of every text command, in draw order
pub fn texts(frame: &[DrawCmd]) -> Vec<&str> {
    frame
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}
