//! Spring - damped second-order filter that eases a value toward a target
//!
//! Construct with a [`SpringConfig`], call [`Spring::set_target`] on new input
//! and [`Spring::tick`] once per animation frame. The filter is independent
//! of any rendering host; the UI layer owns the frame loop.

use super::position::Position;

/// Integration sub-step in seconds
const SUBSTEP: f32 = 0.001;
/// Longest frame delta honoured per tick; longer gaps (background tabs) are truncated
const MAX_FRAME_DT: f32 = 0.064;
const REST_DELTA: f32 = 0.01;
const REST_SPEED: f32 = 0.01;

/// Spring parameters with unit mass by default
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Tilt cards: overdamped, settles without overshoot
    pub const TILT: Self = Self::new(500.0, 50.0);
    /// Cursor follower: lively, slightly underdamped
    pub const CURSOR: Self = Self::new(700.0, 25.0);

    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// ζ = c / (2·√(k·m)); 1.0 is critical damping
    #[cfg(test)]
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    at_rest: bool,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            at_rest: true,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    #[cfg(test)]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[cfg(test)]
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    pub fn set_target(&mut self, target: f32) {
        if target.is_nan() || target == self.target {
            return;
        }
        self.target = target;
        self.at_rest = false;
    }

    /// Jump straight to `value` and stop
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    /// Advance by `dt` seconds and return the new value
    pub fn tick(&mut self, dt: f32) -> f32 {
        if self.at_rest || !(dt > 0.0) {
            return self.value;
        }
        let dt = dt.min(MAX_FRAME_DT);
        let steps = (dt / SUBSTEP).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;

        for _ in 0..steps {
            let force = -stiffness * (self.value - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
        }

        if (self.value - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED {
            self.snap_to(self.target);
        }
        self.value
    }
}

/// Two independent springs driving a 2D point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring2 {
    pub x: Spring,
    pub y: Spring,
}

impl Spring2 {
    pub fn new(config: SpringConfig, initial: Position) -> Self {
        Self {
            x: Spring::new(config, initial.x),
            y: Spring::new(config, initial.y),
        }
    }

    pub fn set_target(&mut self, target: Position) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn tick(&mut self, dt: f32) -> Position {
        Position::new(self.x.tick(dt), self.y.tick(dt))
    }

    pub fn value(&self) -> Position {
        Position::new(self.x.value(), self.y.value())
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn run(spring: &mut Spring, frames: usize) -> Vec<f32> {
        (0..frames).map(|_| spring.tick(FRAME)).collect()
    }

    #[test]
    fn damping_ratios_of_builtin_configs() {
        assert!(SpringConfig::TILT.damping_ratio() > 1.0);
        assert!(SpringConfig::CURSOR.damping_ratio() < 1.0);
    }

    #[test]
    fn new_spring_is_at_rest() {
        let mut s = Spring::new(SpringConfig::TILT, 3.0);
        assert!(s.is_at_rest());
        assert_eq!(s.tick(FRAME), 3.0);
    }

    #[test]
    fn overdamped_converges_without_overshoot() {
        let mut s = Spring::new(SpringConfig::TILT, 10.0);
        s.set_target(0.0);
        let samples = run(&mut s, 120);
        assert!(samples.iter().all(|&v| v >= -REST_DELTA), "overshot zero");
        assert!(samples.windows(2).all(|w| w[1] <= w[0] + 1e-4), "not monotone");
        assert!(s.is_at_rest());
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn underdamped_overshoot_is_bounded_and_decays() {
        let mut s = Spring::new(SpringConfig::CURSOR, 0.0);
        s.set_target(100.0);
        let samples = run(&mut s, 180);
        let peak = samples.iter().cloned().fold(f32::MIN, f32::max);
        assert!(peak > 100.0);
        assert!(peak < 125.0, "peak {peak}");
        assert!(s.is_at_rest());
        assert_eq!(s.value(), 100.0);
    }

    #[test]
    fn long_frame_gaps_are_truncated() {
        let mut s = Spring::new(SpringConfig::CURSOR, 0.0);
        s.set_target(100.0);
        let v = s.tick(10.0);
        assert!(v.is_finite());
        assert!(v < 100.0, "a single tick should not settle after truncation");
    }

    #[test]
    fn retargeting_mid_flight_keeps_velocity() {
        let mut s = Spring::new(SpringConfig::TILT, 0.0);
        s.set_target(10.0);
        run(&mut s, 5);
        let v = s.velocity();
        assert!(v > 0.0);
        s.set_target(0.0);
        assert_eq!(s.velocity(), v);
    }

    #[test]
    fn nan_target_is_ignored() {
        let mut s = Spring::new(SpringConfig::TILT, 1.0);
        s.set_target(f32::NAN);
        assert_eq!(s.target(), 1.0);
        assert!(s.is_at_rest());
    }

    #[test]
    fn spring2_tracks_both_axes() {
        let mut s = Spring2::new(SpringConfig::CURSOR, Position::new(-100.0, -100.0));
        s.set_target(Position::new(200.0, 50.0));
        for _ in 0..240 {
            s.tick(FRAME);
        }
        assert!(s.is_at_rest());
        assert_eq!(s.value(), Position::new(200.0, 50.0));
    }
}
