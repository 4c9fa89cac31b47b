use crate::game::Game;
use crate::host::Host;
use crate::input::GameEvent;
use crate::settings::Settings;
use crate::ui::backdrop::Backdrop;
use crate::ui::viewport::Viewport;

pub struct App<H: Host> {
    pub game: Game,
    pub host: H,
    pub viewport: Viewport,
    /// Last known mouse position in playfield pixels.
    pub pointer: Option<(i32, i32)>,
    pub backdrop: Backdrop,
}

impl<H: Host> App<H> {
    pub fn new(settings: Settings, host: H) -> Self {
        let base = &settings.base;
        let viewport = Viewport::new(base.screen_width, base.screen_height);
        let backdrop = Backdrop::generate(
            base.backdrop_seed,
            base.backdrop_density,
            base.screen_width,
            base.screen_height,
        );
        Self {
            game: Game::new(settings),
            host,
            viewport,
            pointer: None,
            backdrop,
        }
    }

    pub fn on_event(&mut self, event: GameEvent) {
        if let GameEvent::MouseDown { x, y } | GameEvent::MouseMove { x, y } = event {
            self.pointer = Some((x, y));
        }
        self.game.handle_event(event, &mut self.host);
    }

    pub fn on_tick(&mut self) {
        self.game.update(&mut self.host);
    }
}
