//! Transform - maps input signals (scroll, pointer, visibility) to CSS
//!
//! Every mapping here is a pure function of its sample, except the spring
//! state held by `Tilt` and `CursorFollower`. Components own that state and
//! advance it from their frame loop.

pub mod follower;
pub mod parallax;
pub mod reveal;
pub mod spotlight;
pub mod stack;
pub mod tilt;

pub use follower::CursorFollower;
pub use parallax::{HeroParallax, ParallaxRange};
pub use reveal::{RevealTrigger, reveal_tokens};
pub use spotlight::{local_position, spotlight_css};
pub use tilt::Tilt;
