//! Portfolio - featured projects, image and copy alternating sides

use dioxus::prelude::*;

use crate::content::{AspectRatio, PROJECTS, ProjectItem};
use crate::ui::{ButtonVariant, CtaButton, FadeInView, ParallaxImage, SectionTitle};

/// Odd rows put the image on the right
pub fn is_reversed(index: usize) -> bool {
    index % 2 == 1
}

#[component]
fn ProjectRow(project: ProjectItem, index: usize) -> Element {
    let direction = if is_reversed(index) { "row-reverse" } else { "row" };
    let ProjectItem {
        title,
        kind,
        description,
        tech_stack,
        link,
        image,
    } = project;

    rsx! {
        div {
            class: "project-row",
            style: "--row-direction: {direction};",
            div {
                class: "project-media",
                FadeInView {
                    div {
                        style: "position: relative; overflow: hidden; border: 1px solid rgba(255,255,255,0.1); background: #111; box-shadow: 0 25px 50px rgba(0,0,0,0.5);",
                        ParallaxImage { name: image, alt: title, ratio: AspectRatio::Wide }
                    }
                }
            }
            FadeInView { delay: 0.2, style: "flex: 2;",
                span {
                    style: "display: inline-block; padding: 4px 12px; margin-bottom: 16px; font-size: 12px; font-weight: 700; letter-spacing: 0.2em; text-transform: uppercase; color: #22d3ee; border: 1px solid rgba(6,182,212,0.3); border-radius: 9999px; background: rgba(8,51,68,0.2);",
                    {kind}
                }
                h3 { style: "font-size: clamp(30px, 4vw, 48px); font-weight: 700; margin: 0 0 24px; color: #fff;", {title} }
                p { style: "font-size: 18px; line-height: 1.7; color: #9ca3af; margin: 0 0 32px;", {description} }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; margin-bottom: 40px;",
                    for tech in tech_stack.iter() {
                        span {
                            key: "{tech}",
                            style: "padding: 4px 12px; background: #1a1a1a; border: 1px solid rgba(255,255,255,0.1); color: #d1d5db; font-size: 12px; font-weight: 600;",
                            "{tech}"
                        }
                    }
                }
                CtaButton { href: link, label: "View Live Project", variant: ButtonVariant::Secondary }
            }
        }
    }
}

#[component]
pub fn Portfolio() -> Element {
    rsx! {
        section {
            id: "portfolio",
            style: "padding: 96px 0; background: #0a0a0a;",
            div {
                class: "container",
                SectionTitle { title: "Projects That Ship", eyebrow: "Featured Work" }
                div {
                    style: "display: flex; flex-direction: column; gap: 128px;",
                    for (index, project) in PROJECTS.iter().enumerate() {
                        ProjectRow { key: "{index}", project: project.clone(), index }
                    }
                }
            }
        }
    }
}
