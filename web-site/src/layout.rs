//! Layout - fixed navbar with mobile drawer, and the footer

use dioxus::prelude::*;

use crate::content::{NAV_LINKS, PROJECTS};
use crate::ui::viewport::use_viewport;

/// Scroll distance after which the navbar gains its backdrop
pub const SCROLLED_THRESHOLD: f32 = 50.0;

pub fn is_scrolled(scroll_y: f32) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

const LOGO_SRC: &str = "/images/DVW%20Transparent%20Horizontal.png";

#[component]
pub fn Navbar() -> Element {
    let viewport = use_viewport();
    let scrolled = use_memo(move || is_scrolled(viewport.read().scroll_y));
    let mut menu_open = use_signal(|| false);

    let bar = if scrolled() {
        "background: rgba(10,10,10,0.8); backdrop-filter: blur(12px); border-bottom: 1px solid rgba(255,255,255,0.05); padding: 16px 0;"
    } else {
        "background: transparent; padding: 24px 0;"
    };
    let expanded = if menu_open() { "true" } else { "false" };

    rsx! {
        header {
            role: "banner",
            style: "position: fixed; top: 0; left: 0; right: 0; z-index: 50; transition: all 0.3s; {bar}",
            div {
                class: "container",
                style: "display: flex; justify-content: space-between; align-items: center;",
                a {
                    href: "#",
                    "aria-label": "Digital VisionWorks - Home",
                    img { src: LOGO_SRC, alt: "Digital VisionWorks", style: "height: clamp(56px, 8vw, 112px); width: auto; max-width: 60vw;" }
                }
                nav {
                    class: "desktop-nav",
                    "aria-label": "Main navigation",
                    for (name, href) in NAV_LINKS.iter().copied() {
                        a {
                            key: "{name}",
                            href: href,
                            style: "font-size: 14px; font-weight: 600; text-transform: uppercase; letter-spacing: 0.1em; color: #d1d5db; text-decoration: none;",
                            "{name}"
                        }
                    }
                    a {
                        href: "#contact",
                        style: "padding: 8px 24px; border: 1px solid rgba(6,182,212,0.5); color: #22d3ee; font-size: 14px; font-weight: 700; text-transform: uppercase; letter-spacing: 0.1em; text-decoration: none;",
                        "Start Project"
                    }
                }
                button {
                    class: "mobile-toggle",
                    "aria-label": "Open mobile menu",
                    "aria-expanded": expanded,
                    "aria-controls": "mobile-menu",
                    style: "background: none; border: none; color: #fff; min-width: 44px; min-height: 44px; font-size: 28px; cursor: pointer;",
                    onclick: move |_| menu_open.set(true),
                    "\u{2630}"
                }
            }
            if menu_open() {
                div {
                    id: "mobile-menu",
                    role: "dialog",
                    "aria-modal": "true",
                    "aria-label": "Mobile navigation menu",
                    style: "position: fixed; inset: 0; z-index: 60; background: #0a0a0a; display: flex; flex-direction: column; justify-content: center; align-items: center; padding: 32px; animation: fade-in 0.3s ease-out;",
                    button {
                        "aria-label": "Close mobile menu",
                        style: "position: absolute; top: 32px; right: 32px; background: none; border: none; color: rgba(255,255,255,0.5); min-width: 44px; min-height: 44px; font-size: 28px; cursor: pointer;",
                        onclick: move |_| menu_open.set(false),
                        "\u{2715}"
                    }
                    nav {
                        "aria-label": "Mobile navigation",
                        style: "display: flex; flex-direction: column; gap: 32px; text-align: center;",
                        for (name, href) in NAV_LINKS.iter().copied() {
                            a {
                                key: "{name}",
                                href: href,
                                style: "font-size: 30px; font-weight: 700; color: #fff; text-decoration: none;",
                                onclick: move |_| menu_open.set(false),
                                "{name}"
                            }
                        }
                    }
                }
            }
        }
    }
}

const BUILT_WITH: &[&str] = &["Rust", "Dioxus", "WebAssembly", "Gemini AI"];

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            role: "contentinfo",
            style: "background: #050505; border-top: 1px solid rgba(255,255,255,0.05); padding: 80px 0 40px; position: relative; overflow: hidden;",
            div {
                "aria-hidden": "true",
                style: "position: absolute; bottom: -80px; left: -40px; user-select: none; pointer-events: none; opacity: 0.03; font-size: 15vw; font-weight: 900; line-height: 1; white-space: nowrap; color: #fff;",
                "DIGITAL VISIONWORKS"
            }
            div {
                class: "container",
                style: "position: relative; z-index: 10;",
                div {
                    style: "display: flex; flex-wrap: wrap; justify-content: space-between; align-items: flex-end; gap: 32px; margin-bottom: 48px;",
                    div {
                        img { src: LOGO_SRC, alt: "Digital VisionWorks", style: "height: 48px; width: auto; margin-bottom: 16px;" }
                        p {
                            style: "color: #9ca3af; max-width: 384px; margin: 0;",
                            "Building the future of digital experiences with AI-first development and premium design."
                        }
                    }
                    div {
                        style: "display: flex; gap: 32px;",
                        for (index, project) in PROJECTS.iter().enumerate() {
                            a {
                                key: "{index}",
                                href: project.link,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                style: "color: #9ca3af; text-decoration: none;",
                                {project.title}
                                " \u{2192}"
                                span { class: "sr-only", "(opens in new tab)" }
                            }
                        }
                    }
                }
                div {
                    style: "border-top: 1px solid rgba(255,255,255,0.1); padding-top: 32px; display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 24px; font-size: 14px; color: #6b7280;",
                    p { style: "margin: 0;", "\u{a9} 2025 Digital VisionWorks LLC. All rights reserved." }
                    div {
                        role: "list",
                        "aria-label": "Technologies used",
                        style: "display: flex; align-items: center; gap: 16px; background: rgba(255,255,255,0.05); padding: 8px 16px; border-radius: 9999px; border: 1px solid rgba(255,255,255,0.05);",
                        span { style: "font-size: 10px; text-transform: uppercase; letter-spacing: 0.2em; opacity: 0.6;", "Built With" }
                        for tech in BUILT_WITH.iter().copied() {
                            span { key: "{tech}", role: "listitem", style: "color: #9ca3af;", "{tech}" }
                        }
                    }
                    nav {
                        "aria-label": "Legal",
                        style: "display: flex; gap: 24px;",
                        a { href: "#", style: "color: inherit;", "Privacy Policy" }
                        a { href: "#", style: "color: inherit;", "Terms of Service" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_turns_solid_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }
}
