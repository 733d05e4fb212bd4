//! ParallaxImage - a generated image drifting with its own scroll progress

use dioxus::prelude::*;

use crate::content::AspectRatio;
use crate::primitives::Progress;
use crate::transform::ParallaxRange;

use super::dom::{element_rect, unique_id};
use super::image::GeneratedImage;
use super::viewport::use_viewport;

#[component]
pub fn ParallaxImage(
    #[props(into)] name: String,
    #[props(into)] alt: String,
    #[props(default)] ratio: AspectRatio,
    #[props(default)] overlay: f32,
) -> Element {
    let id = use_hook(|| unique_id("parallax"));
    let mut frame = use_signal(|| ParallaxRange::IMAGE.sample(Progress::START));

    let viewport = use_viewport();
    let probe = id.clone();
    use_effect(move || {
        let height = viewport.read().height;
        let Some(rect) = element_rect(&probe) else {
            return;
        };
        let next = ParallaxRange::IMAGE.sample(Progress::through_viewport(rect, height));
        if next != *frame.peek() {
            frame.set(next);
        }
    });

    let layer_css = frame().to_css();
    let aspect = ratio.to_css();

    rsx! {
        div {
            id: "{id}",
            style: "position: relative; overflow: hidden; border-radius: 12px; aspect-ratio: {aspect};",
            div {
                style: "position: absolute; inset: -12% 0; will-change: transform; {layer_css}",
                GeneratedImage {
                    name: name.clone(),
                    alt: alt.clone(),
                    overlay,
                    style: "width: 100%; height: 100%;",
                }
            }
        }
    }
}
