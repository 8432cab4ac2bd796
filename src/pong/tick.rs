//! Fixed timestep simulation tick
//!
//! One call advances the match by one frame. Pause and restart are handled
//! by the session, outside the tick.

use super::collision::{bounce_far_wall, bounce_walls, hits_paddle, missed, return_ball};
use super::state::{PongConfig, PongPhase, PongState};
use crate::geom::clamp_vertical;
use crate::input::HeldKeys;

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    WallBounce,
    FarWallBounce,
    PaddleHit { score: u32 },
    Miss,
}

/// Advance the match by one tick. Does nothing unless Running.
pub fn tick(state: &mut PongState, config: &PongConfig, held: HeldKeys) -> Vec<TickEvent> {
    let mut events = Vec::new();
    if state.phase != PongPhase::Running {
        return events;
    }

    state.time_ticks += 1;

    // Held keys add up, so up+down cancel; clamp once afterwards
    let paddle = &mut state.paddle;
    paddle.bounds.pos.y += paddle.speed * held.vertical();
    clamp_vertical(&mut paddle.bounds, config.screen_height);

    let ball = &mut state.ball;
    ball.bounds.pos += ball.velocity;

    if bounce_walls(ball, config.screen_height) {
        events.push(TickEvent::WallBounce);
    }

    if bounce_far_wall(ball, config.screen_width) {
        events.push(TickEvent::FarWallBounce);
    }

    if hits_paddle(ball, &state.paddle) {
        state.score += 1;
        let mut rng = state.rng_state.next_rng();
        return_ball(ball, config, &mut rng);
        log::debug!(
            "Paddle hit #{}, speed now {:.1}",
            state.score,
            ball.current_speed
        );
        events.push(TickEvent::PaddleHit { score: state.score });
    }

    if missed(ball) {
        state.phase = PongPhase::GameOver;
        log::info!("Ball missed, final score {}", state.score);
        events.push(TickEvent::Miss);
    }

    events
}
