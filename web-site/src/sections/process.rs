//! Process - four numbered steps joined by a line that draws itself in

use dioxus::prelude::*;

use crate::content::STEPS;
use crate::ui::{FadeInView, GeneratedImage, SectionTitle};

#[component]
pub fn Process() -> Element {
    rsx! {
        section {
            style: "padding: 128px 0; background: #0a0a0a; position: relative; overflow: hidden;",
            div {
                style: "position: absolute; inset: 0; opacity: 0.2; pointer-events: none;",
                GeneratedImage {
                    name: "process-bg",
                    alt: "Process Background",
                    overlay: 0.8,
                    style: "width: 100%; height: 100%;",
                }
            }
            div {
                class: "container",
                style: "position: relative; z-index: 10;",
                SectionTitle { title: "How We Work", eyebrow: "The Process" }
                div {
                    class: "grid-4",
                    style: "position: relative;",
                    div {
                        class: "desktop-only",
                        "aria-hidden": "true",
                        style: "position: absolute; top: 24px; left: 12.5%; right: 12.5%; height: 1px; background: rgba(255,255,255,0.1);",
                        FadeInView { delay: 0.2, style: "height: 100%;",
                            div { style: "height: 100%; background: linear-gradient(90deg, #06b6d4, #2563eb);" }
                        }
                    }
                    for (index, step) in STEPS.iter().enumerate() {
                        FadeInView { key: "{index}", delay: index as f32 * 0.2,
                            div {
                                style: "position: relative; z-index: 10; width: 48px; height: 48px; border-radius: 50%; border: 1px solid #06b6d4; background: #0a0a0a; display: flex; align-items: center; justify-content: center; color: #22d3ee; font-weight: 700; margin-bottom: 24px; box-shadow: 0 0 20px rgba(6,182,212,0.3);",
                                {step.number}
                            }
                            h3 { style: "font-size: 20px; font-weight: 700; margin: 0 0 12px; color: #fff;", {step.title} }
                            p { style: "font-size: 14px; line-height: 1.6; color: #9ca3af; margin: 0;", {step.description} }
                        }
                    }
                }
            }
        }
    }
}
