//! Paddle Pong draw list

use glam::Vec2;

use super::{Anchor, Color, DrawCmd};
use crate::pong::{PongConfig, PongPhase, PongState};

const SCORE_FONT: i32 = 48;
const SMALL_FONT: i32 = 24;
/// Vertical gap between overlay lines
const LINE_GAP: f32 = 50.0;

fn overlay_line(config: &PongConfig, text: String, dy: f32) -> DrawCmd {
    DrawCmd::text(
        text,
        Vec2::new(config.screen_width / 2.0, config.screen_height / 2.0 + dy),
        SMALL_FONT,
        Color::WHITE,
        Anchor::Center,
    )
}

pub fn draw(config: &PongConfig, state: &PongState) -> Vec<DrawCmd> {
    let mut frame = vec![
        DrawCmd::Clear(Color::CYAN),
        DrawCmd::Rect {
            bounds: state.paddle.bounds,
            color: Color::WHITE,
        },
        DrawCmd::Ellipse {
            bounds: state.ball.bounds,
            color: Color::WHITE,
        },
        DrawCmd::text(
            format!("Score: {}", state.score),
            Vec2::new(config.screen_width / 2.0 - 20.0, 10.0),
            SCORE_FONT,
            Color::WHITE,
            Anchor::TopLeft,
        ),
        DrawCmd::text(
            "Press P to Pause",
            Vec2::new(config.screen_width - 200.0, 10.0),
            SMALL_FONT,
            Color::YELLOW,
            Anchor::TopLeft,
        ),
    ];

    match state.phase {
        PongPhase::Running => {}
        PongPhase::Paused => {
            frame.push(overlay_line(config, "PAUSED".into(), -LINE_GAP));
            frame.push(overlay_line(config, "Press P to Continue".into(), 0.0));
        }
        PongPhase::GameOver => {
            frame.push(overlay_line(config, "GAME OVER".into(), -LINE_GAP));
            frame.push(overlay_line(
                config,
                format!("Final Score: {}", state.score),
                0.0,
            ));
            frame.push(overlay_line(config, "Press R to Restart".into(), LINE_GAP));
        }
    }

    frame
}
