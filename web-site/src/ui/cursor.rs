//! CursorRing - a ring trailing the pointer on a spring

use dioxus::prelude::*;

use crate::transform::CursorFollower;
use crate::transform::follower::RING_SIZE;

use super::frame::{Ticker, continue_until, use_ticker};

/// Follower state plus the ticker that settles it; wake after every pointer move
pub fn use_cursor_follower() -> (Signal<CursorFollower>, Ticker) {
    let mut follower = use_signal(CursorFollower::new);
    let ticker = use_ticker(move |dt| {
        let mut state = follower.write();
        state.tick(dt);
        continue_until(state.is_at_rest())
    });
    (follower, ticker)
}

/// The follower is owned by the page root, which feeds it pointer moves
#[component]
pub fn CursorRing(follower: Signal<CursorFollower>) -> Element {
    let transform_css = follower.read().position().to_css();
    rsx! {
        div {
            "aria-hidden": "true",
            style: "position: fixed; top: 0; left: 0; width: {RING_SIZE}px; height: {RING_SIZE}px; border: 1px solid rgba(6, 182, 212, 0.5); border-radius: 50%; pointer-events: none; z-index: 100; mix-blend-mode: difference; will-change: transform; {transform_css}",
        }
    }
}
