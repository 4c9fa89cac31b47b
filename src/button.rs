use crate::geometry::Rect;
use crate::settings::Rgb;

pub const BUTTON_WIDTH: i32 = 200;
pub const BUTTON_HEIGHT: i32 = 50;

#[derive(Clone, Debug)]
pub struct PlayButton {
    pub rect: Rect,
    pub label: &'static str,
    pub button_color: Rgb,
    pub text_color: Rgb,
}

impl PlayButton {
    /// Centered on the screen.
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        let mut rect = Rect::new(0, 0, BUTTON_WIDTH, BUTTON_HEIGHT);
        rect.set_center(screen_width / 2, screen_height / 2);
        Self {
            rect,
            label: "Play",
            button_color: Rgb(0, 255, 0),
            text_color: Rgb(255, 255, 255),
        }
    }

    pub fn is_clicked(&self, x: i32, y: i32) -> bool {
        self.rect.collide_point(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_is_centered() {
        let button = PlayButton::new(1200, 800);
        assert_eq!(button.rect, Rect::new(500, 375, 200, 50));
    }

    #[test]
    fn hit_test() {
        let button = PlayButton::new(1200, 800);
        assert!(button.is_clicked(600, 400));
        assert!(button.is_clicked(500, 375));
        assert!(!button.is_clicked(700, 400));
        assert!(!button.is_clicked(600, 425));
    }
}
