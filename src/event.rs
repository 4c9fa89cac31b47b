use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::input::{GameEvent, Key};
use crate::ui::viewport::Viewport;

/// Drains the terminal's event queue once per frame without blocking and
/// turns it into [`GameEvent`]s.
///
/// Terminals that speak the keyboard enhancement protocol report key
/// releases directly. Everywhere else a movement key counts as held while
/// presses (OS key repeat) keep arriving. The first press is held for
/// `first_hold_frames`, long enough to cover the OS repeat delay. Once
/// repeats arrive the key is released `hold_frames` frames after the last one.
pub struct EventHandler {
    reports_release: bool,
    first_hold_frames: u64,
    hold_frames: u64,
    frame: u64,
    held: Vec<HeldKey>,
}

struct HeldKey {
    key: Key,
    last_press: u64,
    repeating: bool,
}

impl EventHandler {
    pub fn new(reports_release: bool, first_hold_frames: u64, hold_frames: u64) -> Self {
        Self {
            reports_release,
            first_hold_frames,
            hold_frames,
            frame: 0,
            held: Vec::new(),
        }
    }

    pub fn poll(&mut self, viewport: &Viewport) -> io::Result<Vec<GameEvent>> {
        self.begin_frame();
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            let raw = event::read()?;
            self.translate(raw, viewport, &mut events);
        }
        self.end_frame(&mut events);
        Ok(events)
    }

    pub fn begin_frame(&mut self) {
        self.frame += 1;
    }

    /// Emit releases for movement keys that have gone quiet.
    pub fn end_frame(&mut self, out: &mut Vec<GameEvent>) {
        if self.reports_release {
            return;
        }
        let frame = self.frame;
        let (first_hold, hold) = (self.first_hold_frames, self.hold_frames);
        self.held.retain(|held| {
            let window = if held.repeating { hold } else { first_hold };
            if frame.saturating_sub(held.last_press) > window {
                out.push(GameEvent::KeyUp(held.key));
                false
            } else {
                true
            }
        });
    }

    pub fn translate(&mut self, raw: Event, viewport: &Viewport, out: &mut Vec<GameEvent>) {
        match raw {
            Event::Key(key) => self.translate_key(key, out),
            Event::Mouse(mouse) => translate_mouse(mouse, viewport, out),
            _ => {}
        }
    }

    fn translate_key(&mut self, key: KeyEvent, out: &mut Vec<GameEvent>) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.kind == KeyEventKind::Press {
                out.push(GameEvent::Quit);
            }
            return;
        }

        let mapped = map_key(key.code);
        match key.kind {
            KeyEventKind::Press => {
                if self.reports_release || !mapped.is_movement() {
                    out.push(GameEvent::KeyDown(mapped));
                    return;
                }
                let frame = self.frame;
                match self.held.iter_mut().find(|h| h.key == mapped) {
                    Some(held) => {
                        held.last_press = frame;
                        held.repeating = true;
                    }
                    None => {
                        self.held.push(HeldKey {
                            key: mapped,
                            last_press: frame,
                            repeating: false,
                        });
                        out.push(GameEvent::KeyDown(mapped));
                    }
                }
            }
            KeyEventKind::Repeat => {}
            KeyEventKind::Release => out.push(GameEvent::KeyUp(mapped)),
        }
    }
}

fn translate_mouse(mouse: MouseEvent, viewport: &Viewport, out: &mut Vec<GameEvent>) {
    let Some((x, y)) = viewport.to_logical(mouse.column, mouse.row) else {
        return;
    };
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => out.push(GameEvent::MouseDown { x, y }),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => out.push(GameEvent::MouseMove { x, y }),
        _ => {}
    }
}

pub fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char('p') | KeyCode::Char('P') => Key::P,
        KeyCode::Char('q') | KeyCode::Char('Q') => Key::Q,
        _ => Key::Other,
    }
}
