use std::ops::{Add, Sub};

/// A position or offset in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Degenerate rectangle handed out for reads that cannot be resolved.
    pub const INVALID: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub const fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub const fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Half-open containment: the left and top edges are inside, the right
    /// and bottom edges are not.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    pub fn add_x(self, x: f32) -> Self {
        Self { x: self.x + x, ..self }
    }

    pub fn add_y(self, y: f32) -> Self {
        Self { y: self.y + y, ..self }
    }

    pub fn add_width(self, width: f32) -> Self {
        Self {
            width: self.width + width,
            ..self
        }
    }

    pub fn add_height(self, height: f32) -> Self {
        Self {
            height: self.height + height,
            ..self
        }
    }

    pub fn replace_x(self, x: f32) -> Self {
        Self { x, ..self }
    }

    pub fn replace_y(self, y: f32) -> Self {
        Self { y, ..self }
    }

    pub fn replace_width(self, width: f32) -> Self {
        Self { width, ..self }
    }

    pub fn replace_height(self, height: f32) -> Self {
        Self { height, ..self }
    }

    pub fn left_half(self) -> Self {
        Self {
            width: self.width / 2.0,
            ..self
        }
    }

    pub fn right_half(self) -> Self {
        let half = self.width / 2.0;
        Self {
            x: self.x + half,
            width: half,
            ..self
        }
    }

    /// Split off `leading` units from the left, separated by `gap`.
    /// Returns `(leading, rest)`; the rest never has negative width.
    pub fn split_left(self, leading: f32, gap: f32) -> (Self, Self) {
        let head = self.replace_width(leading.min(self.width));
        let rest_x = self.x + leading + gap;
        let rest = Self::new(rest_x, self.y, (self.right() - rest_x).max(0.0), self.height);
        (head, rest)
    }
}

/// Component-wise sum.
impl Add for Rect {
    type Output = Rect;

    fn add(self, other: Rect) -> Rect {
        Rect::new(
            self.x + other.x,
            self.y + other.y,
            self.width + other.width,
            self.height + other.height,
        )
    }
}

/// Component-wise difference.
impl Sub for Rect {
    type Output = Rect;

    fn sub(self, other: Rect) -> Rect {
        Rect::new(
            self.x - other.x,
            self.y - other.y,
            self.width - other.width,
            self.height - other.height,
        )
    }
}
