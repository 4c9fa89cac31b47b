mod common;

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use alien_invasion::app::App;
use alien_invasion::event::EventHandler;
use alien_invasion::input::{GameEvent, Key};
use alien_invasion::settings::{BaseSettings, Settings};
use alien_invasion::stats::Phase;
use alien_invasion::ui;

use common::RecordingHost;

fn app() -> App<RecordingHost> {
    let mut app = App::new(Settings::new(BaseSettings::default()), RecordingHost::default());
    app.viewport.area = Rect::new(1, 1, 120, 40);
    app
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn clicking_the_button_cell_starts_the_game() {
    let mut app = app();
    let mut handler = EventHandler::new(true, 45, 20);
    let mut events = Vec::new();
    handler.translate(click(61, 21), &app.viewport, &mut events);
    assert_eq!(events, vec![GameEvent::MouseDown { x: 605, y: 410 }]);

    for event in events {
        app.on_event(event);
    }
    assert_eq!(app.game.phase(), Phase::Active);
    assert_eq!(app.pointer, Some((605, 410)));
    assert!(!app.host.cursor);
}

#[test]
fn clicks_on_the_border_are_dropped() {
    let app = app();
    let mut handler = EventHandler::new(true, 45, 20);
    let mut events = Vec::new();
    handler.translate(click(0, 21), &app.viewport, &mut events);
    assert!(events.is_empty());
}

#[test]
fn ticks_only_advance_an_active_game() {
    let mut app = app();
    let start = app.game.fleet.aliens[0].rect;
    app.on_tick();
    assert_eq!(app.game.fleet.aliens[0].rect, start);

    app.on_event(GameEvent::KeyDown(Key::Enter));
    app.on_tick();
    assert_eq!(app.game.fleet.aliens[0].rect.x, start.x + 1);
}

#[test]
fn menu_frame_shows_the_play_button() {
    let mut app = app();
    let mut terminal = Terminal::new(TestBackend::new(122, 42)).unwrap();
    terminal.draw(|frame| ui::render(frame, &mut app)).unwrap();

    let text = screen_text(&terminal);
    assert!(text.contains("Alien Invasion"));
    assert!(text.contains("Play"));
    assert!(!text.contains("PAUSED"));
    assert_eq!(app.viewport.area, Rect::new(1, 1, 120, 39));
}

#[test]
fn paused_frame_shows_banner_and_button() {
    let mut app = app();
    app.on_event(GameEvent::KeyDown(Key::Enter));
    app.on_event(GameEvent::KeyDown(Key::P));
    let mut terminal = Terminal::new(TestBackend::new(122, 42)).unwrap();
    terminal.draw(|frame| ui::render(frame, &mut app)).unwrap();

    let text = screen_text(&terminal);
    assert!(text.contains("PAUSED"));
    assert!(text.contains("Play"));
}

#[test]
fn active_frame_hides_the_button() {
    let mut app = app();
    app.on_event(GameEvent::KeyDown(Key::Enter));
    let mut terminal = Terminal::new(TestBackend::new(122, 42)).unwrap();
    terminal.draw(|frame| ui::render(frame, &mut app)).unwrap();

    let text = screen_text(&terminal);
    assert!(!text.contains("Play"));
    assert!(!text.contains("GAME OVER"));
}
