//! ProblemSolution - why the old way is slow, and what changes

use dioxus::prelude::*;

use crate::content::AspectRatio;
use crate::ui::{FadeInView, FloatingElement, GeneratedImage, ParallaxImage, SectionTitle};

#[component]
pub fn ProblemSolution() -> Element {
    rsx! {
        section {
            style: "padding: 128px 0; background: #0a0a0a; position: relative; overflow: hidden;",
            div {
                style: "position: absolute; inset: 0; z-index: 0;",
                div { style: "position: absolute; inset: 0; z-index: 2; background: linear-gradient(to bottom, #0a0a0a, transparent, #0a0a0a);" }
                GeneratedImage {
                    name: "problem-speed",
                    alt: "Speed Texture",
                    overlay: 0.3,
                    style: "width: 100%; height: 100%; opacity: 0.8;",
                }
            }
            div {
                "aria-hidden": "true",
                style: "position: absolute; inset: 0; z-index: 1; pointer-events: none; background-image: linear-gradient(rgba(6,182,212,0.03) 1px, transparent 1px), linear-gradient(90deg, rgba(6,182,212,0.03) 1px, transparent 1px); background-size: 100px 100px;",
            }
            FloatingElement {
                duration: 10.0,
                style: "top: -266px; right: -266px; width: 800px; height: 800px; background: rgba(22, 78, 99, 0.1); filter: blur(150px); z-index: 1;",
            }
            FloatingElement {
                duration: 12.0,
                delay: 2.0,
                style: "bottom: -200px; left: -200px; width: 600px; height: 600px; background: rgba(30, 58, 138, 0.1); filter: blur(120px); z-index: 1;",
            }

            div {
                class: "container grid-2",
                style: "position: relative; z-index: 3; align-items: center;",
                FadeInView {
                    SectionTitle { title: "What Used to Take Months Now Takes Weeks", eyebrow: "The New Standard" }
                    div {
                        style: "display: flex; flex-direction: column; gap: 24px; font-size: 18px; line-height: 1.7; color: #9ca3af;",
                        FadeInView { delay: 0.2,
                            p { style: "margin: 0;",
                                "Traditional development is slow and expensive. Agencies charge premium rates, timelines stretch for months, and budgets balloon out of control."
                            }
                        }
                        FadeInView { delay: 0.4,
                            div {
                                style: "color: #fff; font-weight: 500; border-left: 2px solid #06b6d4; padding: 24px; background: rgba(255,255,255,0.05); backdrop-filter: blur(4px);",
                                "Digital VisionWorks operates differently. By leveraging AI-first development workflows and modern tooling, we deliver production-ready applications in a fraction of the time, without sacrificing quality."
                            }
                        }
                        FadeInView { delay: 0.6,
                            p { style: "margin: 0;",
                                "Whether you're a startup launching your first product or an established business streamlining operations, we build solutions that actually ship."
                            }
                        }
                    }
                }
                div {
                    style: "position: relative; border: 1px solid rgba(255,255,255,0.1); box-shadow: 0 0 50px rgba(0,0,0,0.5);",
                    ParallaxImage {
                        name: "problem-workspace",
                        alt: "Modern workspace",
                        ratio: AspectRatio::Classic,
                        overlay: 0.1,
                    }
                    div { style: "position: absolute; top: 0; left: 0; width: 32px; height: 32px; border-top: 2px solid #06b6d4; border-left: 2px solid #06b6d4; opacity: 0.5;" }
                    div { style: "position: absolute; bottom: 0; right: 0; width: 32px; height: 32px; border-bottom: 2px solid #06b6d4; border-right: 2px solid #06b6d4; opacity: 0.5;" }
                }
            }
        }
    }
}
