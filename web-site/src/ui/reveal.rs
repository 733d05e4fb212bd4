//! TextReveal and FadeInView - content that animates in once, on first sight

use dioxus::prelude::*;

use crate::transform::{RevealTrigger, reveal_tokens};

use super::dom::{is_in_view, unique_id};
use super::viewport::use_viewport;

/// Check element `id` on every viewport change until it is first seen; stays true afterwards
fn use_revealed(id: String) -> bool {
    let mut trigger = use_signal(RevealTrigger::new);
    let viewport = use_viewport();
    use_effect(move || {
        // returning before the viewport is read drops the subscription for good
        if trigger.peek().is_revealed() {
            return;
        }
        let height = viewport.read().height;
        if is_in_view(&id, height) {
            trigger.write().observe(true);
        }
    });
    trigger.read().is_revealed()
}

/// Headline whose words slide up from behind a mask one after another
#[component]
pub fn TextReveal(
    #[props(into)] text: String,
    /// Seconds before the first word starts
    #[props(default)]
    delay: f32,
    #[props(default, into)] style: String,
) -> Element {
    let id = use_hook(|| unique_id("reveal"));
    let revealed = use_revealed(id.clone());
    let words: Vec<(usize, String, String)> = reveal_tokens(&text, delay)
        .into_iter()
        .map(|token| (token.index, token.style(revealed), token.text))
        .collect();

    rsx! {
        span {
            id: "{id}",
            "aria-label": "{text}",
            style: "display: inline; {style}",
            for (index, word_style, word) in words {
                span {
                    key: "{index}",
                    "aria-hidden": "true",
                    style: "display: inline-block; overflow: hidden; vertical-align: bottom; margin-right: 0.25em;",
                    span { style: "{word_style}", "{word}" }
                }
            }
        }
    }
}

/// Block that fades and rises into place the first time it scrolls into view
#[component]
pub fn FadeInView(
    #[props(default)] delay: f32,
    #[props(default, into)] style: String,
    children: Element,
) -> Element {
    let id = use_hook(|| unique_id("fade"));
    let revealed = use_revealed(id.clone());
    let state = if revealed {
        "opacity: 1; transform: translateY(0);"
    } else {
        "opacity: 0; transform: translateY(24px);"
    };

    rsx! {
        div {
            id: "{id}",
            style: "transition: opacity 0.6s ease-out {delay}s, transform 0.6s ease-out {delay}s; {state} {style}",
            {children}
        }
    }
}
