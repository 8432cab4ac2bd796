//! Fixed-rate loop driver
//!
//! One iteration: poll input, map intents, update, draw, present, wait.
//! Quit is checked once per iteration, before the game sees any input.

use super::{Backend, Game};
use crate::input::{InputMapper, Intent};

/// Run `game` until a quit intent or a close request; returns frames presented
pub fn run<B, G>(backend: &mut B, game: &mut G) -> u64
where
    B: Backend + ?Sized,
    G: Game + ?Sized,
{
    let mapper = InputMapper::new();
    let mut frames = 0u64;

    loop {
        let input = backend.poll_input();
        if input.close_requested {
            log::info!("Window closed after {} frames", frames);
            break;
        }

        let intents = mapper.map_all(&input.pressed);
        if intents.contains(&Intent::Quit) {
            log::info!("Quit after {} frames", frames);
            break;
        }

        let now_ms = backend.now_ms();
        for intent in intents {
            game.handle_intent(intent, now_ms);
        }
        game.update(mapper.map_held(&input.held), now_ms);

        let frame = game.draw();
        backend.present(&frame);
        frames += 1;

        backend.wait_for_next_frame();
    }

    frames
}
