//! Tilt - pointer position over a card to a sprung 3D rotation

use crate::primitives::{
    Angle, Axis, Interpolation, Linear, Position, Rect, Spring, SpringConfig,
};

use super::stack::TransformStack;

/// Largest rotation reached at the card's edges, in degrees
pub const MAX_TILT_DEG: f32 = 10.0;

const ROTATE_Y: Linear = Interpolation::new([-0.5, 0.5], [-MAX_TILT_DEG, MAX_TILT_DEG]);
const ROTATE_X: Linear = Interpolation::new([-0.5, 0.5], [MAX_TILT_DEG, -MAX_TILT_DEG]);

/// Pointer offset from a box's center, normalized by the box size.
///
/// Nominally in [-0.5, 0.5] on each axis while the pointer is inside the box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    pub fn from_pointer(pointer: Position, rect: Rect) -> Self {
        if rect.is_empty() {
            return Self::CENTER;
        }
        let center = rect.center();
        Self {
            x: (pointer.x - center.x) / rect.w,
            y: (pointer.y - center.y) / rect.h,
        }
    }

    /// Target rotation (about X, about Y) for this sample
    pub fn angles(&self) -> (Angle, Angle) {
        (
            Angle::new(ROTATE_X.sample(self.y)),
            Angle::new(ROTATE_Y.sample(self.x)),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltFrame {
    pub rotate_x: Angle,
    pub rotate_y: Angle,
}

impl TiltFrame {
    pub fn to_css(&self) -> String {
        let transform = TransformStack::new()
            .rotate(self.rotate_x, Axis::X)
            .rotate(self.rotate_y, Axis::Y)
            .to_css();
        format!("transform-style: preserve-3d; {transform}")
    }
}

/// Sprung tilt state for one card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    rotate_x: Spring,
    rotate_y: Spring,
}

impl Tilt {
    pub fn new() -> Self {
        Self {
            rotate_x: Spring::new(SpringConfig::TILT, 0.0),
            rotate_y: Spring::new(SpringConfig::TILT, 0.0),
        }
    }

    pub fn pointer_move(&mut self, pointer: Position, rect: Rect) {
        let (x, y) = PointerSample::from_pointer(pointer, rect).angles();
        self.rotate_x.set_target(x.degrees());
        self.rotate_y.set_target(y.degrees());
    }

    pub fn pointer_leave(&mut self) {
        self.rotate_x.set_target(0.0);
        self.rotate_y.set_target(0.0);
    }

    #[cfg(test)]
    pub fn targets(&self) -> (f32, f32) {
        (self.rotate_x.target(), self.rotate_y.target())
    }

    pub fn tick(&mut self, dt: f32) -> TiltFrame {
        self.rotate_x.tick(dt);
        self.rotate_y.tick(dt);
        self.frame()
    }

    pub fn frame(&self) -> TiltFrame {
        TiltFrame {
            rotate_x: Angle::new(self.rotate_x.value()),
            rotate_y: Angle::new(self.rotate_y.value()),
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.rotate_x.is_at_rest() && self.rotate_y.is_at_rest()
    }
}

impl Default for Tilt {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect::new(100.0, 200.0, 300.0, 400.0);

    #[test]
    fn center_of_card_is_level() {
        let sample = PointerSample::from_pointer(CARD.center(), CARD);
        assert_eq!(sample, PointerSample::CENTER);
        let (x, y) = sample.angles();
        assert_eq!(x.degrees(), 0.0);
        assert_eq!(y.degrees(), 0.0);
    }

    #[test]
    fn corners_reach_max_tilt() {
        // top-right: pointer up tilts the top toward the viewer
        let (x, y) = PointerSample::from_pointer(Position::new(400.0, 200.0), CARD).angles();
        assert_eq!(x.degrees(), MAX_TILT_DEG);
        assert_eq!(y.degrees(), MAX_TILT_DEG);

        let (x, y) = PointerSample::from_pointer(Position::new(100.0, 600.0), CARD).angles();
        assert_eq!(x.degrees(), -MAX_TILT_DEG);
        assert_eq!(y.degrees(), -MAX_TILT_DEG);
    }

    #[test]
    fn pointer_outside_card_clamps() {
        let (_, y) = PointerSample::from_pointer(Position::new(5_000.0, 400.0), CARD).angles();
        assert_eq!(y.degrees(), MAX_TILT_DEG);
    }

    #[test]
    fn zero_sized_box_is_centered() {
        let empty = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(
            PointerSample::from_pointer(Position::new(50.0, 50.0), empty),
            PointerSample::CENTER
        );
    }

    #[test]
    fn leave_resets_targets_and_settles_to_level() {
        let mut tilt = Tilt::new();
        tilt.pointer_move(Position::new(400.0, 600.0), CARD);
        for _ in 0..30 {
            tilt.tick(1.0 / 60.0);
        }
        assert!(tilt.frame().rotate_y.degrees() > 5.0);

        tilt.pointer_leave();
        assert_eq!(tilt.targets(), (0.0, 0.0));

        let mut min_y = f32::MAX;
        for _ in 0..120 {
            min_y = min_y.min(tilt.tick(1.0 / 60.0).rotate_y.degrees());
        }
        assert!(min_y > -0.05, "overshot to {min_y}");
        assert!(tilt.is_at_rest());
        assert!(tilt.frame().rotate_x.degrees().abs() < 1e-3);
        assert!(tilt.frame().rotate_y.degrees().abs() < 1e-3);
    }

    #[test]
    fn frame_css_is_3d() {
        let frame = TiltFrame {
            rotate_x: Angle::new(5.0),
            rotate_y: Angle::ZERO,
        };
        assert_eq!(
            frame.to_css(),
            "transform-style: preserve-3d; transform: rotateX(5.000deg);"
        );
    }
}
