//! Follower - a ring that trails the pointer on a spring

use crate::primitives::{Position, Spring2, SpringConfig};

/// Ring diameter in pixels; the target is offset by half so it centers on the pointer
pub const RING_SIZE: f32 = 32.0;

/// Parked off-screen until the first pointer move
const PARKED: Position = Position::new(-100.0, -100.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFollower {
    spring: Spring2,
}

impl CursorFollower {
    pub fn new() -> Self {
        Self {
            spring: Spring2::new(SpringConfig::CURSOR, PARKED),
        }
    }

    pub fn pointer_move(&mut self, client: Position) {
        let half = RING_SIZE / 2.0;
        self.spring.set_target(client.translate(-half, -half));
    }

    pub fn tick(&mut self, dt: f32) -> Position {
        self.spring.tick(dt)
    }

    pub fn position(&self) -> Position {
        self.spring.value()
    }

    pub fn is_at_rest(&self) -> bool {
        self.spring.is_at_rest()
    }
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_parked_offscreen() {
        let f = CursorFollower::new();
        assert_eq!(f.position(), PARKED);
        assert!(f.is_at_rest());
    }

    #[test]
    fn converges_centered_on_pointer() {
        let mut f = CursorFollower::new();
        f.pointer_move(Position::new(500.0, 300.0));
        assert!(!f.is_at_rest());
        for _ in 0..240 {
            f.tick(1.0 / 60.0);
        }
        assert_eq!(f.position(), Position::new(484.0, 284.0));
    }

    #[test]
    fn lags_behind_a_fresh_target() {
        let mut f = CursorFollower::new();
        f.pointer_move(Position::new(500.0, 300.0));
        let p = f.tick(1.0 / 60.0);
        assert!(p.x > PARKED.x && p.x < 484.0);
    }
}
