//! Progress - scroll and intersection fractions in [0, 1]

use super::bounded::bounded_f32;
use super::position::Rect;

bounded_f32!(Progress, 0.0, 1.0);

impl Progress {
    pub const START: Self = Self::new(0.0);
    pub const END: Self = Self::new(1.0);

    /// Progress of an element through the viewport.
    ///
    /// 0 when the element's top touches the viewport's bottom edge, 1 when its
    /// bottom leaves through the top edge.
    pub fn through_viewport(rect: Rect, viewport_h: f32) -> Self {
        let travel = viewport_h + rect.h;
        if travel <= 0.0 {
            return Self::START;
        }
        Self::clamped((viewport_h - rect.y) / travel)
    }

    /// How far the page has been scrolled, 0 when it cannot scroll at all
    pub fn of_page(scroll_y: f32, document_h: f32, viewport_h: f32) -> Self {
        let scrollable = document_h - viewport_h;
        if scrollable <= 0.0 {
            return Self::START;
        }
        Self::clamped(scroll_y / scrollable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f32 = 800.0;

    #[test]
    fn element_entering_from_below_is_zero() {
        let rect = Rect::new(0.0, VIEWPORT, 400.0, 200.0);
        assert_eq!(Progress::through_viewport(rect, VIEWPORT), Progress::START);
    }

    #[test]
    fn element_leaving_through_top_is_one() {
        let rect = Rect::new(0.0, -200.0, 400.0, 200.0);
        assert_eq!(Progress::through_viewport(rect, VIEWPORT), Progress::END);
    }

    #[test]
    fn element_centered_is_half() {
        let rect = Rect::new(0.0, 300.0, 400.0, 200.0);
        assert_eq!(Progress::through_viewport(rect, VIEWPORT).value(), 0.5);
    }

    #[test]
    fn far_offscreen_clamps() {
        let rect = Rect::new(0.0, 5_000.0, 400.0, 200.0);
        assert_eq!(Progress::through_viewport(rect, VIEWPORT), Progress::START);
        let rect = Rect::new(0.0, -5_000.0, 400.0, 200.0);
        assert_eq!(Progress::through_viewport(rect, VIEWPORT), Progress::END);
    }

    #[test]
    fn page_progress() {
        assert_eq!(Progress::of_page(600.0, 2_000.0, 800.0).value(), 0.5);
        assert_eq!(Progress::of_page(300.0, 600.0, 800.0), Progress::START);
        assert_eq!(Progress::of_page(9_999.0, 2_000.0, 800.0), Progress::END);
    }
}
