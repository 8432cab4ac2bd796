//! Trap Maze entry point

use anyhow::{Context, Result};

use mini_arcade::consts::{MAZE_TICK_RATE, MAZE_WINDOW_HEIGHT, MAZE_WINDOW_WIDTH};
use mini_arcade::maze::{Level, MazeConfig, MazeSession};
use mini_arcade::platform::window::RaylibWindow;
use mini_arcade::{Backend, run};

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Trap Maze starting...");

    // Fail before any window appears if the baked-in layout is broken
    let level = Level::builtin().context("built-in maze level is malformed")?;

    let mut window = RaylibWindow::open(
        "Trap Maze",
        MAZE_WINDOW_WIDTH,
        MAZE_WINDOW_HEIGHT,
        MAZE_TICK_RATE,
    )
    .context("could not open the game window")?;

    let mut session = MazeSession::new(level, MazeConfig::default(), window.now_ms());
    let frames = run(&mut window, &mut session);

    let state = session.state();
    log::info!(
        "Trap Maze exiting after {} frames ({:?}, {} moves, {} lives)",
        frames,
        state.phase,
        state.moves,
        state.lives
    );
    Ok(())
}
