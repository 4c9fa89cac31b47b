//! Per-frame game logic: input transitions, entity updates, collisions and
//! level/life progression.

use std::time::Duration;

use tracing::{debug, info};

use crate::button::PlayButton;
use crate::collision;
use crate::entities::{Bullet, Ship};
use crate::fleet::{Fleet, FleetLayout};
use crate::host::Host;
use crate::input::{GameEvent, Key};
use crate::settings::Settings;
use crate::stats::{Phase, Stats};

pub struct Game {
    pub settings: Settings,
    pub stats: Stats,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub fleet: Fleet,
    pub play_button: PlayButton,
    layout: FleetLayout,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        let base = &settings.base;
        let layout = FleetLayout::compute(
            base.screen_width,
            base.screen_height,
            base.ship_height,
            base.alien_width,
            base.alien_height,
        );
        let mut fleet = Fleet::default();
        fleet.create(&layout);

        Self {
            stats: Stats::new(base.ship_limit),
            ship: Ship::new(&settings),
            bullets: Vec::new(),
            fleet,
            play_button: PlayButton::new(base.screen_width, base.screen_height),
            layout,
            settings,
        }
    }

    pub fn layout(&self) -> &FleetLayout {
        &self.layout
    }

    pub fn phase(&self) -> Phase {
        self.stats.phase
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    pub fn handle_event<H: Host>(&mut self, event: GameEvent, host: &mut H) {
        match event {
            GameEvent::Quit => {
                info!(score = self.stats.score, "window closed");
                host.quit();
            }
            GameEvent::KeyDown(key) => self.check_keydown_events(key, host),
            GameEvent::KeyUp(key) => self.check_keyup_events(key),
            GameEvent::MouseDown { x, y } => self.check_play_button(x, y, host),
            GameEvent::MouseMove { .. } => {}
        }
    }

    pub fn check_keydown_events<H: Host>(&mut self, key: Key, host: &mut H) {
        match key {
            Key::Right => self.ship.moving_right = true,
            Key::Left => self.ship.moving_left = true,
            Key::Enter => match self.stats.phase {
                Phase::Inactive => self.start_game(host),
                Phase::Paused => self.resume_game(),
                Phase::Active => {}
            },
            Key::Space => match self.stats.phase {
                Phase::Active => {
                    self.fire_bullet();
                }
                Phase::Paused => self.resume_game(),
                Phase::Inactive => self.start_game(host),
            },
            Key::Q => {
                info!(score = self.stats.score, "quit key pressed");
                host.quit();
            }
            Key::Escape | Key::P => {
                if self.stats.is_active() {
                    self.pause_game();
                }
            }
            Key::Other => {}
        }
    }

    pub fn check_keyup_events(&mut self, key: Key) {
        match key {
            Key::Right => self.ship.moving_right = false,
            Key::Left => self.ship.moving_left = false,
            _ => {}
        }
    }

    /// Starts a new game when the button is hit and play is not running,
    /// which includes the paused state.
    pub fn check_play_button<H: Host>(&mut self, x: i32, y: i32, host: &mut H) {
        if self.play_button.is_clicked(x, y) && !self.stats.is_active() {
            self.start_game(host);
        }
    }

    // ── State transitions ─────────────────────────────────────────────────────

    pub fn start_game<H: Host>(&mut self, host: &mut H) {
        self.settings.initialize_dynamic_settings();
        self.fleet.reset_direction();
        host.set_cursor_visible(false);

        self.stats.reset_stats();
        self.stats.phase = Phase::Active;
        self.stats.game_over = false;

        self.fleet.clear();
        self.bullets.clear();
        self.fleet.create(&self.layout);
        self.ship.center_ship();
        info!(ships = self.stats.ships_left, "game started");
    }

    pub fn pause_game(&mut self) {
        self.stats.phase = Phase::Paused;
        info!(score = self.stats.score, level = self.stats.level, "game paused");
    }

    pub fn resume_game(&mut self) {
        self.stats.phase = Phase::Active;
        info!("game resumed");
    }

    /// Returns false when the on-screen cap is already reached.
    pub fn fire_bullet(&mut self) -> bool {
        if self.bullets.len() >= self.settings.base.bullets_allowed {
            return false;
        }
        self.bullets.push(Bullet::new(&self.settings, &self.ship));
        debug!(active = self.bullets.len(), "bullet fired");
        true
    }

    // ── Frame update ──────────────────────────────────────────────────────────

    /// One frame of simulation. Does nothing unless the game is active.
    pub fn update<H: Host>(&mut self, host: &mut H) {
        if !self.stats.is_active() {
            return;
        }
        self.ship.update(self.settings.ship_speed);
        self.update_bullets();
        self.update_aliens(host);
    }

    pub fn update_bullets(&mut self) {
        let speed = self.settings.bullet_speed;
        for bullet in &mut self.bullets {
            bullet.update(speed);
        }
        self.bullets.retain(|b| !b.is_off_screen());

        self.check_bullet_alien_collisions();
    }

    pub fn check_bullet_alien_collisions(&mut self) {
        let destroyed = collision::bullet_alien_collisions(&mut self.bullets, &mut self.fleet.aliens);
        if destroyed > 0 {
            let points = self.settings.alien_points.saturating_mul(destroyed as u32);
            self.stats.add_score(points);
            self.stats.check_high_score();
            debug!(destroyed, points, score = self.stats.score, "aliens destroyed");
        }

        if self.fleet.is_empty() {
            self.start_new_level();
        }
    }

    pub fn start_new_level(&mut self) {
        self.bullets.clear();
        self.settings.increase_speed();
        self.stats.level = self.stats.level.saturating_add(1);
        self.fleet.create(&self.layout);
        info!(
            level = self.stats.level,
            speedups = self.settings.speedups,
            alien_speed = self.settings.alien_speed,
            alien_points = self.settings.alien_points,
            "level up"
        );
    }

    pub fn update_aliens<H: Host>(&mut self, host: &mut H) {
        let base = &self.settings.base;
        self.fleet.check_edges(base.screen_width, base.fleet_drop_speed);
        self.fleet.update(self.settings.alien_speed);

        let rammed = collision::ship_collides(&self.ship, &self.fleet.aliens);
        let landed = collision::aliens_reached_bottom(&self.fleet.aliens, base.screen_height);
        if rammed || landed {
            self.ship_hit(host);
        }
    }

    pub fn ship_hit<H: Host>(&mut self, host: &mut H) {
        if self.stats.ships_left > 0 {
            self.stats.ships_left -= 1;
            info!(ships_left = self.stats.ships_left, "ship hit");

            self.fleet.clear();
            self.bullets.clear();
            self.fleet.create(&self.layout);
            self.ship.center_ship();

            host.pause(Duration::from_millis(self.settings.base.hit_pause_ms));
        } else {
            self.stats.phase = Phase::Inactive;
            self.stats.game_over = true;
            host.set_cursor_visible(true);
            info!(
                score = self.stats.score,
                high_score = self.stats.high_score,
                level = self.stats.level,
                "game over"
            );
        }
    }
}
