//! Angle - rotation in degrees with CSS transform output

/// Rotation axis for 3D transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    fn css_fn(&self) -> &'static str {
        match self {
            Self::X => "rotateX",
            Self::Y => "rotateY",
        }
    }
}

/// Angle in degrees, normalized to [-180, 180]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(f32);

impl Angle {
    #[cfg(test)]
    pub const ZERO: Self = Self(0.0);

    pub fn new(degrees: f32) -> Self {
        Self(Self::normalize(degrees))
    }

    pub const fn degrees(&self) -> f32 {
        self.0
    }

    fn normalize(degrees: f32) -> f32 {
        let mut d = degrees % 360.0;
        if d > 180.0 {
            d -= 360.0;
        } else if d < -180.0 {
            d += 360.0;
        }
        d
    }

    /// CSS transform function about `axis`, empty when the rotation is negligible
    pub fn to_css(&self, axis: Axis) -> String {
        if self.0.abs() < 0.001 {
            return String::new();
        }
        format!("{}({:.3}deg)", axis.css_fn(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_normalization() {
        assert!(Angle::new(360.0).degrees().abs() < 0.01);
        assert!((Angle::new(-270.0).degrees() - 90.0).abs() < 0.01);
    }

    #[test]
    fn angle_css_per_axis() {
        assert_eq!(Angle::ZERO.to_css(Axis::X), "");
        assert_eq!(Angle::new(10.0).to_css(Axis::X), "rotateX(10.000deg)");
        assert_eq!(Angle::new(-2.5).to_css(Axis::Y), "rotateY(-2.500deg)");
    }
}
