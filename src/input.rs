//! Backend-independent keys and the intents they map to
//!
//! Backends translate their own key codes into [`Key`]; the simulators only
//! ever see [`Intent`] and [`HeldKeys`].

/// The fixed key set both games listen to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    P,
    R,
    Q,
    Escape,
}

/// A normalized user action derived from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Pause,
    Restart,
    Quit,
}

impl Intent {
    /// Grid delta (dx, dy) for movement intents, `None` for the rest
    pub fn delta(&self) -> Option<(i32, i32)> {
        match self {
            Intent::MoveUp => Some((0, -1)),
            Intent::MoveDown => Some((0, 1)),
            Intent::MoveLeft => Some((-1, 0)),
            Intent::MoveRight => Some((1, 0)),
            Intent::Pause | Intent::Restart | Intent::Quit => None,
        }
    }
}

/// Continuous (held) input sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
}

impl HeldKeys {
    /// Net vertical direction: -1 up, +1 down, 0 when neither or both are held
    pub fn vertical(&self) -> f32 {
        let mut dir = 0.0;
        if self.up {
            dir -= 1.0;
        }
        if self.down {
            dir += 1.0;
        }
        dir
    }
}

pub struct InputMapper;

impl InputMapper {
    pub fn new() -> Self {
        Self
    }

    /// Map a key-down event to an intent
    pub fn map_pressed(&self, key: Key) -> Intent {
        match key {
            Key::Up => Intent::MoveUp,
            Key::Down => Intent::MoveDown,
            Key::Left => Intent::MoveLeft,
            Key::Right => Intent::MoveRight,
            Key::P => Intent::Pause,
            Key::R => Intent::Restart,
            Key::Q | Key::Escape => Intent::Quit,
        }
    }

    /// Map every key pressed this frame, in arrival order
    pub fn map_all(&self, pressed: &[Key]) -> Vec<Intent> {
        pressed.iter().map(|&key| self.map_pressed(key)).collect()
    }

    /// Reduce the set of keys currently held down to paddle input
    pub fn map_held(&self, held: &[Key]) -> HeldKeys {
        HeldKeys {
            up: held.contains(&Key::Up),
            down: held.contains(&Key::Down),
        }
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new()
    }
}
