//! Ship, bullet and alien state with their per-frame update steps.

use crate::fleet::FleetDirection;
use crate::geometry::{Rect, Sprite};
use crate::settings::{Rgb, Settings};

// ── Ship ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Ship {
    pub rect: Rect,
    /// Horizontal center with sub-pixel precision; `rect` follows it.
    pub center: f32,
    /// Both intents may be set at once; each is bounds-checked on its own.
    pub moving_right: bool,
    pub moving_left: bool,
    screen_width: i32,
    screen_height: i32,
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        let base = &settings.base;
        let mut ship = Self {
            rect: Rect::new(0, 0, base.ship_width, base.ship_height),
            center: 0.0,
            moving_right: false,
            moving_left: false,
            screen_width: base.screen_width,
            screen_height: base.screen_height,
        };
        ship.center_ship();
        ship
    }

    pub fn update(&mut self, speed: f32) {
        if self.moving_right && self.rect.right() < self.screen_width {
            self.center += speed;
        }
        if self.moving_left && self.rect.left() > 0 {
            self.center -= speed;
        }
        self.rect.set_centerx(self.center.floor() as i32);
    }

    /// Bottom center of the screen.
    pub fn center_ship(&mut self) {
        self.center = (self.screen_width / 2) as f32;
        self.rect.set_centerx(self.screen_width / 2);
        self.rect.set_bottom(self.screen_height);
    }
}

impl Sprite for Ship {
    fn rect(&self) -> Rect {
        self.rect
    }
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    pub rect: Rect,
    pub y: f32,
    pub color: Rgb,
}

impl Bullet {
    /// Spawned at the ship's nose.
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        let base = &settings.base;
        let mut rect = Rect::new(0, 0, base.bullet_width, base.bullet_height);
        rect.set_centerx(ship.rect.centerx());
        rect.set_top(ship.rect.top());
        Self {
            y: rect.y as f32,
            rect,
            color: base.bullet_color,
        }
    }

    pub fn at(rect: Rect, color: Rgb) -> Self {
        Self { y: rect.y as f32, rect, color }
    }

    pub fn update(&mut self, speed: f32) {
        self.y -= speed;
        self.rect.y = self.y.floor() as i32;
    }

    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() <= 0
    }
}

impl Sprite for Bullet {
    fn rect(&self) -> Rect {
        self.rect
    }
}

// ── Alien ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Alien {
    pub rect: Rect,
    pub x: f32,
}

impl Alien {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            x: x as f32,
        }
    }

    pub fn check_edges(&self, screen_width: i32) -> bool {
        self.rect.right() >= screen_width || self.rect.left() <= 0
    }

    pub fn update(&mut self, speed: f32, direction: FleetDirection) {
        self.x += speed * direction.sign();
        self.rect.x = self.x.floor() as i32;
    }

    pub fn drop_by(&mut self, distance: i32) {
        self.rect.y += distance;
    }
}

impl Sprite for Alien {
    fn rect(&self) -> Rect {
        self.rect
    }
}
