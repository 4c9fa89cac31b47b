use ratatui::layout::{Position, Rect};

use crate::geometry;

/// Where the playfield landed on the terminal during the last draw, used to
/// map mouse cells back into logical pixels.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub area: Rect,
    pub screen_width: i32,
    pub screen_height: i32,
}

impl Viewport {
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        Self {
            area: Rect::default(),
            screen_width,
            screen_height,
        }
    }

    /// Logical coordinates of the center of a terminal cell, or `None` when
    /// the cell is outside the playfield.
    pub fn to_logical(&self, column: u16, row: u16) -> Option<(i32, i32)> {
        if self.area.is_empty() || !self.area.contains(Position::new(column, row)) {
            return None;
        }
        let fx = (column - self.area.x) as f64 + 0.5;
        let fy = (row - self.area.y) as f64 + 0.5;
        let x = fx / self.area.width as f64 * self.screen_width as f64;
        let y = fy / self.area.height as f64 * self.screen_height as f64;
        Some((x.floor() as i32, y.floor() as i32))
    }

    /// Canvas y grows upward.
    pub fn canvas_y(&self, y: f64) -> f64 {
        self.screen_height as f64 - y
    }

    /// Bottom-left corner of `rect` in canvas space.
    pub fn canvas_origin(&self, rect: &geometry::Rect) -> (f64, f64) {
        (rect.x as f64, self.canvas_y(rect.bottom() as f64))
    }

    /// Width of one terminal cell in logical pixels.
    pub fn cell_width(&self) -> f64 {
        if self.area.width == 0 {
            return 1.0;
        }
        self.screen_width as f64 / self.area.width as f64
    }

    /// Height of one braille dot in logical pixels.
    pub fn dot_height(&self) -> f64 {
        if self.area.height == 0 {
            return 1.0;
        }
        (self.screen_height as f64 / (self.area.height as f64 * 4.0)).max(1.0)
    }
}
