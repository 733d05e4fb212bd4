//! ScrollProgress - thin bar across the top tracking page scroll

use dioxus::prelude::*;

use super::viewport::use_viewport;

#[component]
pub fn ScrollProgress() -> Element {
    let viewport = use_viewport();
    let progress = use_memo(move || viewport.read().page_progress());

    let fraction = progress().value();
    let percent = (fraction * 100.0).round();
    let bar_scale = format!("{fraction:.4}");
    rsx! {
        div {
            role: "progressbar",
            "aria-label": "Page scroll progress",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{percent}",
            style: "position: fixed; top: 0; left: 0; right: 0; height: 2px; z-index: 60; background: linear-gradient(90deg, #06b6d4, #3b82f6); transform-origin: 0 50%; transform: scaleX({bar_scale});",
        }
    }
}
