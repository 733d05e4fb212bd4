//! WhyUs - three differentiators beside a tall parallax visual

use dioxus::prelude::*;

use crate::content::{AspectRatio, DIFFERENTIATORS};
use crate::ui::{FadeInView, ParallaxImage, SectionTitle};

/// Two-digit ordinal shown behind each item ("01", "02", ...)
pub fn ordinal(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[component]
pub fn WhyUs() -> Element {
    rsx! {
        section {
            style: "padding: 96px 0; background: #050505; border-top: 1px solid rgba(255,255,255,0.05); border-bottom: 1px solid rgba(255,255,255,0.05); position: relative; overflow: hidden;",
            div {
                "aria-hidden": "true",
                style: "position: absolute; inset: 0; pointer-events: none; background-image: linear-gradient(rgba(255,255,255,0.02) 1px, transparent 1px), linear-gradient(90deg, rgba(255,255,255,0.02) 1px, transparent 1px); background-size: 40px 40px;",
            }
            div {
                class: "container grid-2",
                style: "position: relative; z-index: 10; align-items: start;",
                div {
                    class: "sticky-column",
                    SectionTitle { title: "The Digital VisionWorks Difference", eyebrow: "Why Choose Us" }
                    div {
                        class: "desktop-only",
                        style: "margin-top: 32px; border: 1px solid rgba(255,255,255,0.1); box-shadow: 0 25px 50px rgba(0,0,0,0.5);",
                        ParallaxImage {
                            name: "why-us-sculpture",
                            alt: "Abstract sculpture",
                            ratio: AspectRatio::Portrait,
                            overlay: 0.2,
                        }
                    }
                }
                div {
                    style: "display: flex; flex-direction: column; gap: 64px;",
                    for (index, item) in DIFFERENTIATORS.iter().enumerate() {
                        FadeInView { key: "{index}", delay: index as f32 * 0.2,
                            div {
                                style: "position: relative; padding-left: 32px; border-left: 1px solid rgba(255,255,255,0.1);",
                                div {
                                    "aria-hidden": "true",
                                    style: "position: absolute; top: -40px; right: 0; font-size: 48px; font-weight: 900; color: rgba(255,255,255,0.05); user-select: none;",
                                    {ordinal(index)}
                                }
                                h3 { style: "font-size: 24px; font-weight: 700; margin: 0 0 16px; color: #fff;", {item.title} }
                                p { style: "font-size: 18px; line-height: 1.7; color: #9ca3af; margin: 0;", {item.description} }
                            }
                        }
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
    fn ordinals_are_zero_padded() {
        assert_eq!(ordinal(0), "01");
        assert_eq!(ordinal(2), "03");
    }
}
