//! Motion primitives - value types the animation layer is built from
//!
//! Each primitive:
//! - is a plain value, recomputed every frame or event
//! - clamps instead of panicking at runtime
//! - renders itself with `to_css()`

#[macro_use]
pub mod bounded;
pub mod angle;
pub mod animation;
pub mod interpolate;
pub mod opacity;
pub mod position;
pub mod progress;
pub mod scale;
pub mod spring;

pub use angle::{Angle, Axis};
pub use animation::Animation;
pub use interpolate::{Interpolation, Linear};
pub use opacity::Opacity;
pub use position::{Position, Rect};
pub use progress::Progress;
pub use scale::Scale;
pub use spring::{Spring, Spring2, SpringConfig};
