//! Hero - full-height opener with scroll parallax and a pointer spotlight

use dioxus::prelude::*;

use crate::primitives::{Animation, Position};
use crate::transform::{HeroParallax, local_position, spotlight_css};
use crate::ui::dom::element_rect;
use crate::ui::viewport::use_viewport;
use crate::ui::{ButtonVariant, CtaButton, FloatingElement, GeneratedImage, TextReveal};

const HERO_ID: &str = "hero";

#[component]
pub fn Hero() -> Element {
    let viewport = use_viewport();
    let backdrop = use_memo(move || HeroParallax::sample(viewport.read().scroll_y));
    let mut spotlight = use_signal(|| Position::ORIGIN);

    let backdrop_css = backdrop().to_css();
    let spotlight_style = spotlight_css(spotlight());
    let intro = Animation::FadeUp { distance: 30.0, duration: 0.8, delay: 0.8 }.to_css();
    let actions = Animation::FadeUp { distance: 20.0, duration: 0.8, delay: 1.0 }.to_css();
    let hint_in = Animation::FadeIn { delay: 1.5 }.to_css();
    let hint_bob = Animation::ScrollHint.to_css();

    rsx! {
        section {
            id: HERO_ID,
            style: "position: relative; height: 100vh; width: 100%; display: flex; align-items: center; justify-content: center; overflow: hidden; background: #0a0a0a;",
            onmousemove: move |e: Event<MouseData>| {
                let Some(rect) = element_rect(HERO_ID) else {
                    return;
                };
                let client = e.client_coordinates();
                spotlight.set(local_position(Position::new(client.x as f32, client.y as f32), rect));
            },

            div {
                style: "position: absolute; inset: 0; z-index: 0; will-change: transform, opacity; {backdrop_css}",
                GeneratedImage {
                    name: "hero-bg",
                    alt: "Hero Background",
                    overlay: 0.3,
                    style: "width: 100%; height: 100%;",
                }
            }

            div {
                "aria-hidden": "true",
                style: "position: absolute; inset: 0; z-index: 1; pointer-events: none; transition: opacity 0.3s; {spotlight_style}",
            }

            div {
                style: "position: absolute; inset: 0; z-index: 1; pointer-events: none; overflow: hidden;",
                FloatingElement {
                    duration: 6.0,
                    style: "top: 25%; left: 40px; width: 256px; height: 256px; background: rgba(6, 182, 212, 0.1);",
                }
                FloatingElement {
                    duration: 7.0,
                    delay: 1.0,
                    style: "bottom: 25%; right: 40px; width: 384px; height: 384px; background: rgba(37, 99, 235, 0.1); filter: blur(100px);",
                }
            }

            div {
                class: "container",
                style: "position: relative; z-index: 10; text-align: center;",
                h1 {
                    style: "font-size: clamp(48px, 9vw, 96px); font-weight: 800; letter-spacing: -0.02em; line-height: 1.1; color: #fff; margin: 0 0 24px;",
                    TextReveal { text: "Build Smarter." }
                    br {}
                    span {
                        style: "background: linear-gradient(90deg, #22d3ee, #2563eb); -webkit-background-clip: text; background-clip: text; color: transparent;",
                        TextReveal { text: "Launch Faster.", delay: 0.4 }
                    }
                }
                p {
                    style: "font-size: clamp(18px, 2vw, 20px); color: #d1d5db; max-width: 672px; margin: 0 auto 40px; {intro}",
                    "We turn complex ideas into powerful digital products, at a fraction of the traditional time and cost."
                }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px; justify-content: center; {actions}",
                    CtaButton { href: "#contact", label: "Start Your Project" }
                    CtaButton { href: "#portfolio", label: "See Our Work", variant: ButtonVariant::Secondary }
                }
            }

            div {
                style: "position: absolute; bottom: 40px; left: 50%; transform: translateX(-50%); {hint_in}",
                div {
                    style: "display: flex; flex-direction: column; align-items: center; gap: 8px; {hint_bob}",
                    span {
                        style: "font-size: 12px; text-transform: uppercase; letter-spacing: 0.2em; color: rgba(6, 182, 212, 0.7);",
                        "Scroll"
                    }
                    div { style: "width: 1px; height: 48px; background: linear-gradient(to bottom, #06b6d4, transparent);" }
                }
            }
        }
    }
}
