//! Scale - CSS transform scale factor

use super::bounded::bounded_f32;

bounded_f32!(Scale, 0.5, 3.0);

impl Scale {
    pub const NORMAL: Self = Self::new(1.0);

    pub fn to_css(&self) -> String {
        if (self.0 - 1.0).abs() < 0.0005 {
            return String::new();
        }
        format!("scale({:.3})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_css() {
        assert_eq!(Scale::NORMAL.to_css(), "");
        assert_eq!(Scale::new(1.1).to_css(), "scale(1.100)");
    }

    #[test]
    fn clamped_scale_never_collapses() {
        assert_eq!(Scale::clamped(0.0).value(), 0.5);
    }
}
