//! Native window backend on raylib
//!
//! raylib owns the window, the default font and frame pacing: with a target
//! FPS set, `EndDrawing` sleeps until the next frame is due and then polls
//! input, so [`Backend::wait_for_next_frame`] has nothing left to do.

use std::ffi::CString;
use std::panic::{self, AssertUnwindSafe};

use raylib::prelude::*;

use super::{Backend, FrameInput};
use crate::error::BackendError;
use crate::input::Key;
use crate::renderer::{self, Anchor, DrawCmd};

/// Key set polled every frame
const KEYS: [(KeyboardKey, Key); 8] = [
    (KeyboardKey::KEY_UP, Key::Up),
    (KeyboardKey::KEY_DOWN, Key::Down),
    (KeyboardKey::KEY_LEFT, Key::Left),
    (KeyboardKey::KEY_RIGHT, Key::Right),
    (KeyboardKey::KEY_P, Key::P),
    (KeyboardKey::KEY_R, Key::R),
    (KeyboardKey::KEY_Q, Key::Q),
    (KeyboardKey::KEY_ESCAPE, Key::Escape),
];

fn map_key(key: KeyboardKey) -> Option<Key> {
    KEYS.iter()
        .find(|(raw, _)| *raw == key)
        .map(|(_, mapped)| *mapped)
}

fn to_raylib(color: renderer::Color) -> Color {
    Color::new(color.r, color.g, color.b, color.a)
}

fn text_width(text: &str, size: i32) -> i32 {
    let Ok(c_text) = CString::new(text) else {
        return 0;
    };
    // SAFETY: MeasureText only reads the NUL-terminated string during the call
    unsafe { raylib::ffi::MeasureText(c_text.as_ptr(), size) }
}

pub struct RaylibWindow {
    rl: RaylibHandle,
    thread: RaylibThread,
}

impl RaylibWindow {
    /// Open a window paced at `tick_rate` frames per second
    pub fn open(title: &str, width: i32, height: i32, tick_rate: u32) -> Result<Self, BackendError> {
        // raylib panics when no graphics context can be created
        let built = panic::catch_unwind(AssertUnwindSafe(|| {
            raylib::init().size(width, height).title(title).build()
        }));
        let (mut rl, thread) = built.map_err(|cause| BackendError::Init {
            message: cause
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| cause.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "window creation failed".to_string()),
        })?;

        rl.set_target_fps(tick_rate);
        // Escape is a game key; quitting goes through the intent mapper
        rl.set_exit_key(None);
        log::info!("Opened {}x{} window at {} Hz", width, height, tick_rate);

        Ok(Self { rl, thread })
    }
}

impl Backend for RaylibWindow {
    fn poll_input(&mut self) -> FrameInput {
        let mut pressed = Vec::new();
        while let Some(raw) = self.rl.get_key_pressed() {
            if let Some(key) = map_key(raw) {
                pressed.push(key);
            }
        }

        let held = KEYS
            .iter()
            .filter(|(raw, _)| self.rl.is_key_down(*raw))
            .map(|(_, key)| *key)
            .collect();

        FrameInput {
            pressed,
            held,
            close_requested: self.rl.window_should_close(),
        }
    }

    fn now_ms(&self) -> u64 {
        (self.rl.get_time() * 1000.0) as u64
    }

    fn present(&mut self, frame: &[DrawCmd]) {
        let mut d = self.rl.begin_drawing(&self.thread);

        for cmd in frame {
            match cmd {
                DrawCmd::Clear(color) => d.clear_background(to_raylib(*color)),
                DrawCmd::Rect { bounds, color } => d.draw_rectangle(
                    bounds.pos.x as i32,
                    bounds.pos.y as i32,
                    bounds.size.x as i32,
                    bounds.size.y as i32,
                    to_raylib(*color),
                ),
                DrawCmd::RectOutline {
                    bounds,
                    thickness,
                    color,
                } => d.draw_rectangle_lines_ex(
                    Rectangle::new(bounds.pos.x, bounds.pos.y, bounds.size.x, bounds.size.y),
                    *thickness,
                    to_raylib(*color),
                ),
                DrawCmd::Ellipse { bounds, color } => {
                    let center = bounds.center();
                    d.draw_ellipse(
                        center.x as i32,
                        center.y as i32,
                        bounds.size.x / 2.0,
                        bounds.size.y / 2.0,
                        to_raylib(*color),
                    )
                }
                DrawCmd::Text {
                    text,
                    at,
                    size,
                    color,
                    anchor,
                } => {
                    let (x, y) = match anchor {
                        Anchor::TopLeft => (at.x as i32, at.y as i32),
                        Anchor::Center => (
                            at.x as i32 - text_width(text, *size) / 2,
                            at.y as i32 - size / 2,
                        ),
                    };
                    d.draw_text(text, x, y, *size, to_raylib(*color));
                }
            }
        }
    }

    fn wait_for_next_frame(&mut self) {
        // EndDrawing in `present` already waited for the target FPS
    }
}
