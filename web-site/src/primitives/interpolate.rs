//! Interpolation - fixed piecewise-linear maps from an input signal to an output value
//!
//! Inputs outside the declared range clamp to the nearest endpoint, so a
//! mapping is monotonic over its domain whenever its outputs are.

/// Piecewise-linear map through `N` (input, output) stops.
///
/// Inputs must be strictly increasing; this is checked at construction so
/// the maps can live in `const` items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation<const N: usize> {
    input: [f32; N],
    output: [f32; N],
}

impl<const N: usize> Interpolation<N> {
    #[track_caller]
    pub const fn new(input: [f32; N], output: [f32; N]) -> Self {
        if N < 2 {
            panic!("Interpolation needs at least two stops");
        }
        let mut i = 1;
        while i < N {
            if input[i] <= input[i - 1] {
                panic!("Interpolation inputs must be strictly increasing");
            }
            i += 1;
        }
        Self { input, output }
    }

    pub fn sample(&self, x: f32) -> f32 {
        if x.is_nan() || x <= self.input[0] {
            return self.output[0];
        }
        if x >= self.input[N - 1] {
            return self.output[N - 1];
        }
        // first stop strictly above x; guaranteed to exist by the checks above
        let hi = self.input.iter().position(|&s| s > x).unwrap_or(N - 1);
        let lo = hi - 1;
        let t = (x - self.input[lo]) / (self.input[hi] - self.input[lo]);
        lerp(self.output[lo], self.output[hi], t)
    }
}

/// Two-stop map, the common case
pub type Linear = Interpolation<2>;

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const FADE: Linear = Interpolation::new([0.0, 500.0], [1.0, 0.0]);
    const BUMP: Interpolation<3> = Interpolation::new([0.0, 0.5, 1.0], [0.0, 10.0, 0.0]);

    #[test]
    fn linear_endpoints_and_midpoint() {
        assert_eq!(FADE.sample(0.0), 1.0);
        assert_eq!(FADE.sample(250.0), 0.5);
        assert_eq!(FADE.sample(500.0), 0.0);
    }

    #[test]
    fn clamps_outside_domain() {
        assert_eq!(FADE.sample(-100.0), 1.0);
        assert_eq!(FADE.sample(10_000.0), 0.0);
        assert_eq!(FADE.sample(f32::NAN), 1.0);
    }

    #[test]
    fn piecewise_segments() {
        assert_eq!(BUMP.sample(0.25), 5.0);
        assert_eq!(BUMP.sample(0.5), 10.0);
        assert_eq!(BUMP.sample(0.75), 5.0);
    }

    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn rejects_unsorted_inputs() {
        let _ = Interpolation::new([1.0, 0.0], [0.0, 1.0]);
    }
}
