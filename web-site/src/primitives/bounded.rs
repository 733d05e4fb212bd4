//! Bounded - macro for range-constrained animation scalars
//!
//! Generated types validate in const contexts and clamp everywhere else,
//! so a mapping that drifts past its range lands on the nearest endpoint.

/// Creates a bounded f32 type with min/max constraints.
///
/// # Example
/// ```ignore
/// bounded_f32!(Opacity, 0.0, 1.0);
/// let o = Opacity::new(0.5);
/// let o2 = o + 0.7;  // Opacity(1.0) - clamped to max
/// ```
macro_rules! bounded_f32 {
    ($name:ident, $min:expr, $max:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f32);

        impl $name {
            pub const MIN: f32 = $min;
            pub const MAX: f32 = $max;

            #[track_caller]
            pub const fn new(value: f32) -> Self {
                if value < Self::MIN || value > Self::MAX {
                    panic!(concat!(
                        stringify!($name),
                        " value out of bounds [",
                        stringify!($min),
                        ", ",
                        stringify!($max),
                        "]"
                    ));
                }
                Self(value)
            }

            /// NaN clamps to `MIN` so a degenerate measurement renders at rest.
            pub fn clamped(value: f32) -> Self {
                if value.is_nan() {
                    return Self(Self::MIN);
                }
                Self(value.clamp(Self::MIN, Self::MAX))
            }

            pub const fn value(&self) -> f32 {
                self.0
            }

            /// Position within the range as a fraction in [0.0, 1.0]
            pub const fn ratio(&self) -> f32 {
                (self.0 - Self::MIN) / (Self::MAX - Self::MIN)
            }

            /// Lerp between min and max
            pub fn lerp(t: f32) -> Self {
                Self::clamped(Self::MIN + t * (Self::MAX - Self::MIN))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(Self::MIN)
            }
        }

        impl From<$name> for f32 {
            fn from(v: $name) -> f32 {
                v.0
            }
        }

        impl std::ops::Add<f32> for $name {
            type Output = Self;
            fn add(self, rhs: f32) -> Self::Output {
                Self::clamped(self.0 + rhs)
            }
        }

        impl std::ops::Sub<f32> for $name {
            type Output = Self;
            fn sub(self, rhs: f32) -> Self::Output {
                Self::clamped(self.0 - rhs)
            }
        }
    };
}

pub(crate) use bounded_f32;

#[cfg(test)]
mod tests {
    use super::*;

    bounded_f32!(TestFraction, 0.0, 1.0);
    bounded_f32!(TestZoom, 1.0, 2.0);

    const HALF: TestFraction = TestFraction::new(0.5);

    #[test]
    fn const_construction_keeps_value() {
        assert_eq!(HALF.value(), 0.5);
        assert_eq!(HALF.ratio(), 0.5);
    }

    #[test]
    fn add_clamps_at_max() {
        assert_eq!((TestZoom::new(1.8) + 0.5).value(), 2.0);
    }

    #[test]
    fn sub_clamps_at_min() {
        assert_eq!((TestFraction::new(0.1) - 0.5).value(), 0.0);
    }

    #[test]
    fn nan_clamps_to_min() {
        assert_eq!(TestZoom::clamped(f32::NAN).value(), 1.0);
    }

    #[test]
    fn lerp_spans_the_range() {
        assert_eq!(TestZoom::lerp(0.25).value(), 1.25);
        assert_eq!(TestZoom::lerp(4.0).value(), 2.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn new_rejects_out_of_range() {
        let _ = TestFraction::new(1.5);
    }
}
