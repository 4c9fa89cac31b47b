use std::time::Duration;

/// Side effects the game needs from whatever is hosting it.
pub trait Host {
    /// Terminate the process immediately.
    fn quit(&mut self) -> !;

    /// Block the whole loop.
    fn pause(&mut self, duration: Duration);

    fn set_cursor_visible(&mut self, visible: bool);

    fn cursor_visible(&self) -> bool;
}
