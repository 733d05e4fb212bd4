//! CtaButton - call-to-action link, solid or outlined

use dioxus::prelude::*;

use crate::primitives::Animation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Solid gradient with a shimmer sweep on hover
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn style(&self) -> &'static str {
        match self {
            Self::Primary => "background: linear-gradient(90deg, #06b6d4, #3b82f6); color: #fff; border: 1px solid transparent;",
            Self::Secondary => "background: transparent; color: #e5e7eb; border: 1px solid rgba(255, 255, 255, 0.2);",
        }
    }
}

#[component]
pub fn CtaButton(
    #[props(into)] href: String,
    #[props(into)] label: String,
    #[props(default)] variant: ButtonVariant,
) -> Element {
    let mut hovered = use_signal(|| false);
    let shimmer = if variant == ButtonVariant::Primary && hovered() {
        Animation::Shimmer.to_css()
    } else {
        "transform: translateX(-100%);".to_string()
    };
    let base = variant.style();

    rsx! {
        a {
            href: "{href}",
            style: "position: relative; overflow: hidden; display: inline-flex; align-items: center; gap: 8px; padding: 14px 28px; border-radius: 9999px; font-weight: 600; text-decoration: none; transition: transform 0.2s, box-shadow 0.2s; {base}",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            if variant == ButtonVariant::Primary {
                span {
                    "aria-hidden": "true",
                    style: "position: absolute; inset: 0; background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.3), transparent); pointer-events: none; {shimmer}",
                }
            }
            span { style: "position: relative;", "{label}" }
        }
    }
}
