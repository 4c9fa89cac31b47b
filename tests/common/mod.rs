#![allow(dead_code)]

use std::time::Duration;

use alien_invasion::game::Game;
use alien_invasion::host::Host;
use alien_invasion::settings::{BaseSettings, Settings};

/// Host that records what the game asked of it instead of touching a terminal.
#[derive(Debug)]
pub struct RecordingHost {
    pub pauses: Vec<Duration>,
    pub cursor: bool,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            pauses: Vec::new(),
            cursor: true,
        }
    }
}

impl Host for RecordingHost {
    fn quit(&mut self) -> ! {
        panic!("quit requested");
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor = visible;
    }

    fn cursor_visible(&self) -> bool {
        self.cursor
    }
}

pub fn default_game() -> Game {
    Game::new(Settings::new(BaseSettings::default()))
}

pub fn active_game(host: &mut RecordingHost) -> Game {
    let mut game = default_game();
    game.start_game(host);
    game
}
