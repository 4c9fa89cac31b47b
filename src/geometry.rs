/// Axis-aligned rectangle in logical playfield pixels (y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn centerx(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn centery(&self) -> i32 {
        self.y + self.height / 2
    }

    pub fn set_centerx(&mut self, cx: i32) {
        self.x = cx - self.width / 2;
    }

    pub fn set_center(&mut self, cx: i32, cy: i32) {
        self.x = cx - self.width / 2;
        self.y = cy - self.height / 2;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.height;
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn collide_point(&self, px: i32, py: i32) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }

    /// Strict overlap. Rects that only share an edge, or have no area, never collide.
    pub fn colliderect(&self, other: &Rect) -> bool {
        self.width > 0
            && self.height > 0
            && other.width > 0
            && other.height > 0
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Anything that occupies a rectangle on the playfield.
pub trait Sprite {
    fn rect(&self) -> Rect;
}

impl Sprite for Rect {
    fn rect(&self) -> Rect {
        *self
    }
}
