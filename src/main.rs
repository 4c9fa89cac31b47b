use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use alien_invasion::app::App;
use alien_invasion::clock::FrameClock;
use alien_invasion::config::{self, Config};
use alien_invasion::event::EventHandler;
use alien_invasion::settings::Settings;
use alien_invasion::terminal::{self, TerminalHost, Tui};
use alien_invasion::ui;

/// The terminal belongs to the game, so logs only go to a file and only when
/// one is asked for.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    if let Some(path) = config::log_file_from_env() {
        init_logging(&path)?;
    }

    let config = Config::from_env().context("failed to load settings")?;
    info!(
        width = config.settings.screen_width,
        height = config.settings.screen_height,
        fps = config.settings.frames_per_second,
        "settings loaded"
    );
    let settings = Settings::new(config.settings);

    let (mut terminal, keyboard_enhanced) =
        terminal::init().context("failed to set up terminal")?;
    terminal::install_panic_hook(keyboard_enhanced);
    info!(keyboard_enhanced, "terminal ready");

    let result = run(&mut terminal, settings, keyboard_enhanced);
    terminal::restore(keyboard_enhanced);
    result
}

fn run(terminal: &mut Tui, settings: Settings, keyboard_enhanced: bool) -> anyhow::Result<()> {
    let mut clock = FrameClock::new(settings.base.frames_per_second);
    let mut events = EventHandler::new(
        keyboard_enhanced,
        settings.base.key_first_hold_frames,
        settings.base.key_hold_frames,
    );
    let mut app = App::new(settings, TerminalHost::new(keyboard_enhanced));

    // Quitting exits the process from inside the host, so this never breaks.
    loop {
        for event in events.poll(&app.viewport)? {
            app.on_event(event);
        }
        app.on_tick();
        terminal.draw(|frame| ui::render(frame, &mut app))?;
        clock.tick();
    }
}
