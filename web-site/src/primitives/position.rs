//! Position and Rect - pointer coordinates and element boxes in CSS pixels

/// A point in client (viewport) pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// `transform` declaration placing a fixed element at this point
    pub fn to_css(&self) -> String {
        format!("transform: translate3d({:.2}px, {:.2}px, 0);", self.x, self.y)
    }
}

/// Bounding box in client pixels, as reported by `getBoundingClientRect`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> Position {
        Position::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Whether any part of the box lies inside a viewport of `viewport_h` pixels
    pub fn intersects_viewport(&self, viewport_h: f32) -> bool {
        self.bottom() > 0.0 && self.y < viewport_h
    }

    pub fn from_dom(rect: &web_sys::DomRect) -> Self {
        Self::new(
            rect.x() as f32,
            rect.y() as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }
}
