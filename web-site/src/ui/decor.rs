//! Decorative layers and section headings

use dioxus::prelude::*;

use crate::primitives::Animation;

use super::reveal::TextReveal;

/// Fixed film-grain texture over the whole page
#[component]
pub fn NoiseOverlay() -> Element {
    rsx! {
        div {
            "aria-hidden": "true",
            style: "position: fixed; inset: 0; pointer-events: none; z-index: 50; opacity: 0.04; background-image: url(\"data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='200' height='200'><filter id='n'><feTurbulence type='fractalNoise' baseFrequency='0.8' numOctaves='4' stitchTiles='stitch'/></filter><rect width='100%' height='100%' filter='url(%23n)'/></svg>\");",
        }
    }
}

/// Blurred glow orb bobbing in place
#[component]
pub fn FloatingElement(
    #[props(default = 6.0)] duration: f32,
    #[props(default)] delay: f32,
    #[props(default, into)] style: String,
) -> Element {
    let bob = Animation::Float { duration, delay }.to_css();
    rsx! {
        div {
            "aria-hidden": "true",
            style: "position: absolute; border-radius: 50%; filter: blur(80px); pointer-events: none; {bob} {style}",
        }
    }
}

/// Section heading: optional eyebrow line above a word-revealed title
#[component]
pub fn SectionTitle(#[props(into)] title: String, #[props(default, into)] eyebrow: String) -> Element {
    rsx! {
        div {
            style: "position: relative; z-index: 10; margin-bottom: 80px;",
            if !eyebrow.is_empty() {
                span {
                    style: "display: block; color: #22d3ee; font-weight: 700; letter-spacing: 0.2em; text-transform: uppercase; margin-bottom: 16px; font-size: 14px;",
                    "{eyebrow}"
                }
            }
            h2 {
                style: "font-size: clamp(36px, 6vw, 60px); font-weight: 800; line-height: 1.15; margin: 0; overflow: hidden; color: #fff;",
                TextReveal { text: title.clone() }
                span { style: "color: #06b6d4;", "." }
            }
        }
    }
}
