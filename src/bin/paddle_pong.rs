//! Paddle Pong entry point

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use mini_arcade::consts::{PONG_SCREEN_HEIGHT, PONG_SCREEN_WIDTH, PONG_TICK_RATE};
use mini_arcade::platform::window::RaylibWindow;
use mini_arcade::pong::{PongConfig, PongSession};
use mini_arcade::run;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Paddle Pong starting...");

    let mut window = RaylibWindow::open(
        "Paddle Pong",
        PONG_SCREEN_WIDTH as i32,
        PONG_SCREEN_HEIGHT as i32,
        PONG_TICK_RATE,
    )
    .context("could not open the game window")?;

    // Clock before the epoch falls back to seed 0
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut session = PongSession::new(PongConfig::default(), seed);
    let frames = run(&mut window, &mut session);

    log::info!(
        "Paddle Pong exiting after {} frames (score {})",
        frames,
        session.state().score
    );
    Ok(())
}
