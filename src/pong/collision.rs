//! Ball collision tests and responses
//!
//! Each check runs once per tick, in the order the simulator calls them.
//! No position correction anywhere: the ball may overlap a boundary by at
//! most one tick of travel.

use rand::Rng;

use super::state::{Ball, Paddle, PongConfig};
use crate::geom::overlaps;

/// Top or bottom wall: flip vertical velocity
pub fn bounce_walls(ball: &mut Ball, screen_height: f32) -> bool {
    if ball.bounds.top() <= 0.0 || ball.bounds.bottom() >= screen_height {
        ball.velocity.y = -ball.velocity.y;
        return true;
    }
    false
}

/// Far (right) wall acts as a static second paddle
pub fn bounce_far_wall(ball: &mut Ball, screen_width: f32) -> bool {
    if ball.bounds.right() >= screen_width {
        ball.velocity.x = -ball.velocity.x;
        return true;
    }
    false
}

/// Overlap counts only while the ball is heading toward the paddle, so a
/// ball still inside the paddle after bouncing cannot score twice
pub fn hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.moving_left() && overlaps(&ball.bounds, &paddle.bounds)
}

/// Speed the ball up and send it back with a perturbed vertical speed
pub fn return_ball<R: Rng>(ball: &mut Ball, config: &PongConfig, rng: &mut R) {
    ball.current_speed += config.speed_increment;
    ball.velocity.x = ball.current_speed;

    let jitter = config.vertical_jitter;
    if jitter > 0.0 {
        ball.velocity.y += rng.random_range(-jitter..=jitter);
    }

    // Never let the trajectory go flat
    if ball.velocity.y.abs() < config.min_vertical_speed {
        ball.velocity.y = if rng.random_bool(0.5) {
            config.min_vertical_speed
        } else {
            -config.min_vertical_speed
        };
    }
}

/// Ball's left edge reached the paddle-side boundary
pub fn missed(ball: &Ball) -> bool {
    ball.bounds.left() <= 0.0
}
