use std::io::{self, Stdout};
use std::panic;
use std::thread;
use std::time::Duration;

use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::host::Host;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen, mouse capture and, where available, key
/// release reporting. Returns whether releases will be reported.
pub fn init() -> io::Result<(Tui, bool)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let keyboard_enhanced = matches!(supports_keyboard_enhancement(), Ok(true));
    if keyboard_enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    terminal.hide_cursor()?;
    Ok((terminal, keyboard_enhanced))
}

/// Best effort: runs on the way out, including from a panic or a hard quit.
pub fn restore(keyboard_enhanced: bool) {
    let mut stdout = io::stdout();
    if keyboard_enhanced {
        let _ = execute!(stdout, PopKeyboardEnhancementFlags);
    }
    let _ = disable_raw_mode();
    let _ = execute!(
        stdout,
        LeaveAlternateScreen,
        DisableMouseCapture,
        crossterm::cursor::Show
    );
}

pub fn install_panic_hook(keyboard_enhanced: bool) {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore(keyboard_enhanced);
        default_hook(info);
    }));
}

/// Host backed by the real terminal.
pub struct TerminalHost {
    keyboard_enhanced: bool,
    cursor_visible: bool,
}

impl TerminalHost {
    pub fn new(keyboard_enhanced: bool) -> Self {
        Self {
            keyboard_enhanced,
            cursor_visible: true,
        }
    }
}

impl Host for TerminalHost {
    fn quit(&mut self) -> ! {
        tracing::info!("exiting");
        restore(self.keyboard_enhanced);
        std::process::exit(0);
    }

    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }
}
