//! TiltCard - a card that leans toward the pointer in 3D

use dioxus::prelude::*;

use crate::primitives::Position;
use crate::transform::Tilt;

use super::dom::{element_rect, unique_id};
use super::frame::{continue_until, use_ticker};

#[component]
pub fn TiltCard(#[props(default, into)] style: String, children: Element) -> Element {
    let id = use_hook(|| unique_id("tilt"));
    let mut tilt = use_signal(Tilt::new);
    let mut css = use_signal(|| Tilt::new().frame().to_css());

    let ticker = use_ticker(move |dt| {
        let next = tilt.write().tick(dt).to_css();
        css.set(next);
        continue_until(tilt.peek().is_at_rest())
    });

    let transform_css = css();
    let probe = id.clone();
    rsx! {
        div {
            style: "perspective: 1000px; {style}",
            div {
                id: "{id}",
                style: "height: 100%; will-change: transform; {transform_css}",
                onmousemove: move |e: Event<MouseData>| {
                    let Some(rect) = element_rect(&probe) else {
                        return;
                    };
                    let client = e.client_coordinates();
                    tilt.write().pointer_move(Position::new(client.x as f32, client.y as f32), rect);
                    ticker.wake();
                },
                onmouseleave: move |_| {
                    tilt.write().pointer_leave();
                    ticker.wake();
                },
                {children}
            }
        }
    }
}
