//! Services - six tilt cards over generated artwork

use dioxus::prelude::*;

use crate::content::{SERVICES, ServiceItem};
use crate::ui::{FadeInView, GeneratedImage, SectionTitle, TiltCard};

/// Entry delay of the card at `index`, in seconds
pub fn card_delay(index: usize) -> f32 {
    index as f32 * 0.1
}

#[component]
fn ServiceCard(service: ServiceItem, index: usize) -> Element {
    let glyph = service.icon.glyph();
    let title = service.title;
    let description = service.description;
    rsx! {
        FadeInView { delay: card_delay(index), style: "height: 100%;",
            TiltCard {
                style: "height: 100%;",
                div {
                    style: "position: relative; overflow: hidden; min-height: 320px; height: 100%; box-sizing: border-box; padding: 32px; display: flex; flex-direction: column; justify-content: space-between; background: #111; border: 1px solid rgba(255,255,255,0.05); transition: border-color 0.3s, box-shadow 0.3s;",
                    div {
                        style: "position: absolute; inset: 0; opacity: 0.4; mix-blend-mode: screen; filter: grayscale(1); pointer-events: none;",
                        GeneratedImage {
                            name: service.image,
                            alt: service.title,
                            overlay: 0.4,
                            style: "width: 100%; height: 100%;",
                        }
                    }
                    div {
                        "aria-hidden": "true",
                        style: "position: relative; z-index: 10; width: 56px; height: 56px; display: inline-flex; align-items: center; justify-content: center; border-radius: 8px; border: 1px solid rgba(255,255,255,0.1); background: linear-gradient(135deg, #1a1a1a, #0d0d0d); color: #22d3ee; font-size: 20px; margin-bottom: 24px;",
                        "{glyph}"
                    }
                    div {
                        style: "position: relative; z-index: 10; margin-top: auto;",
                        h3 { style: "font-size: 20px; font-weight: 700; margin: 0 0 16px; color: #fff;", "{title}" }
                        p { style: "font-size: 14px; line-height: 1.6; color: #9ca3af; margin: 0;", "{description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Services() -> Element {
    rsx! {
        section {
            id: "services",
            style: "padding: 96px 0; background: #080808; position: relative;",
            div {
                class: "container",
                style: "position: relative; z-index: 10;",
                SectionTitle { title: "What We Build", eyebrow: "Our Expertise" }
                div {
                    class: "grid-3",
                    for (index, service) in SERVICES.iter().enumerate() {
                        ServiceCard { key: "{index}", service: service.clone(), index }
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
    fn cards_enter_one_after_another() {
        assert_eq!(card_delay(0), 0.0);
        assert!(card_delay(5) > card_delay(4));
    }
}
