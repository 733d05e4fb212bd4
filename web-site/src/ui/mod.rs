//! UI - Dioxus components wiring DOM samples into the transform layer

pub mod button;
pub mod cursor;
pub mod decor;
pub mod dom;
pub mod frame;
pub mod image;
pub mod parallax;
pub mod reveal;
pub mod scroll;
pub mod tilt;
pub mod viewport;

pub use button::{ButtonVariant, CtaButton};
pub use cursor::{CursorRing, use_cursor_follower};
pub use decor::{FloatingElement, NoiseOverlay, SectionTitle};
pub use image::GeneratedImage;
pub use parallax::ParallaxImage;
pub use reveal::{FadeInView, TextReveal};
pub use scroll::ScrollProgress;
pub use tilt::TiltCard;
