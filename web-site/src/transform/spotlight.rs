//! Spotlight - radial glow that follows the pointer across the hero

use crate::primitives::{Position, Rect};

const RADIUS_PX: u32 = 800;

/// Pointer position relative to the section's top-left corner
pub fn local_position(client: Position, section: Rect) -> Position {
    Position::new(client.x - section.x, client.y - section.y)
}

pub fn spotlight_css(local: Position) -> String {
    format!(
        "background: radial-gradient({RADIUS_PX}px circle at {:.0}px {:.0}px, rgba(6,182,212,0.1), transparent 40%);",
        local.x, local.y
    )
}
