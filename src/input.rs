#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Enter,
    Space,
    Escape,
    P,
    Q,
    Other,
}

impl Key {
    pub fn is_movement(self) -> bool {
        matches!(self, Key::Left | Key::Right)
    }
}

/// Discrete input, already mapped into playfield coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    MouseDown { x: i32, y: i32 },
    MouseMove { x: i32, y: i32 },
}
