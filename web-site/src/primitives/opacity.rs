//! Opacity - fade level with CSS output

use super::bounded::bounded_f32;

bounded_f32!(Opacity, 0.0, 1.0);

impl Opacity {
    pub const FULL: Self = Self::new(1.0);
    pub const ZERO: Self = Self::new(0.0);

    pub const fn is_visible(&self) -> bool {
        self.0 > 0.0
    }

    pub const fn is_opaque(&self) -> bool {
        self.0 >= 1.0
    }

    /// CSS declaration, empty at full opacity
    pub fn to_css(&self) -> String {
        if self.is_opaque() {
            return String::new();
        }
        format!("opacity: {:.3};", self.0)
    }

    /// Background overlay used by image containers, `rgba(10, 10, 10, a)`
    pub fn overlay_css(&self) -> String {
        format!("background-color: rgba(10, 10, 10, {:.2});", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_css() {
        assert_eq!(Opacity::FULL.to_css(), "");
        assert_eq!(Opacity::new(0.5).to_css(), "opacity: 0.500;");
    }

    #[test]
    fn zero_is_invisible() {
        assert!(!Opacity::ZERO.is_visible());
        assert!(Opacity::new(0.01).is_visible());
    }

    #[test]
    fn overlay_uses_page_background() {
        assert_eq!(
            Opacity::new(0.3).overlay_css(),
            "background-color: rgba(10, 10, 10, 0.30);"
        );
    }
}
