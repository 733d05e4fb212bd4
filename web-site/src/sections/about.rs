//! About - who the studio is

use dioxus::prelude::*;

use crate::content::AspectRatio;
use crate::ui::{FadeInView, ParallaxImage, SectionTitle};

const PARAGRAPHS: &[&str] = &[
    "Digital VisionWorks LLC is a North American software studio founded on a simple belief: great software shouldn't require massive teams or massive budgets.",
    "We're developers, designers, and problem-solvers who've spent years in the trenches: building products, shipping features, and learning what actually works. Now we bring that experience to clients who want to move fast and build right.",
];

const CLOSING: &str = "When you work with us, you get direct access to senior talent, not layers of project managers. We're small by design, selective about projects, and obsessive about quality.";

#[component]
pub fn About() -> Element {
    rsx! {
        section {
            id: "about",
            style: "padding: 96px 0; background: #080808; position: relative;",
            div {
                class: "container grid-2",
                style: "align-items: center;",
                FadeInView { style: "order: 2;",
                    div {
                        style: "border: 1px solid rgba(255,255,255,0.1); box-shadow: 0 25px 50px rgba(0,0,0,0.5);",
                        ParallaxImage {
                            name: "about-team",
                            alt: "The team at work",
                            ratio: AspectRatio::Square,
                            overlay: 0.3,
                        }
                    }
                }
                div {
                    style: "order: 1;",
                    SectionTitle { title: "Who We Are" }
                    div {
                        style: "display: flex; flex-direction: column; gap: 24px; font-size: 18px; line-height: 1.7; color: #d1d5db;",
                        for (index, text) in PARAGRAPHS.iter().enumerate() {
                            FadeInView { key: "{index}", delay: 0.2 + index as f32 * 0.1,
                                p { style: "margin: 0;", {*text} }
                            }
                        }
                        FadeInView { delay: 0.4,
                            p {
                                style: "margin: 0; color: #fff; border-left: 4px solid #06b6d4; padding: 8px 0 8px 24px; background: rgba(255,255,255,0.05);",
                                {CLOSING}
                            }
                        }
                    }
                }
            }
        }
    }
}
