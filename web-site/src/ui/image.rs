//! GeneratedImage - a generated PNG with a darkening overlay
//!
//! Images come from an offline generator and may be missing; a failed load
//! swaps in a neutral placeholder instead of the browser's broken-image icon.

use dioxus::prelude::*;

use crate::content::image_src;
use crate::primitives::Opacity;

/// Load state of one image element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageLoad {
    #[default]
    Pending,
    Loaded,
    Failed,
}

impl ImageLoad {
    pub fn loaded(&mut self) {
        if *self == Self::Pending {
            *self = Self::Loaded;
        }
    }

    /// Mark the image broken; true only on the first failure
    pub fn failed(&mut self) -> bool {
        let first = *self != Self::Failed;
        *self = Self::Failed;
        first
    }

    pub fn shows_placeholder(&self) -> bool {
        *self == Self::Failed
    }
}

#[component]
pub fn GeneratedImage(
    /// Job name, resolved to `/images/<name>.png`
    #[props(into)]
    name: String,
    #[props(into)] alt: String,
    #[props(default)] overlay: f32,
    #[props(default, into)] style: String,
) -> Element {
    let mut load = use_signal(ImageLoad::default);
    let src = image_src(&name);
    let overlay = Opacity::clamped(overlay);
    let overlay_css = overlay.overlay_css();

    rsx! {
        div {
            style: "position: relative; overflow: hidden; background: #1a1a1a; {style}",
            if load().shows_placeholder() {
                div {
                    role: "img",
                    "aria-label": "{alt}",
                    style: "width: 100%; height: 100%; display: flex; align-items: center; justify-content: center; color: #4b5563; font-size: 12px; letter-spacing: 0.2em; text-transform: uppercase; background: repeating-linear-gradient(45deg, #141414, #141414 10px, #181818 10px, #181818 20px);",
                    "Image unavailable"
                }
            } else {
                img {
                    src: "{src}",
                    alt: "{alt}",
                    loading: "lazy",
                    decoding: "async",
                    style: "width: 100%; height: 100%; object-fit: cover; display: block; animation: image-in 0.8s ease-out both;",
                    onload: move |_| load.write().loaded(),
                    onerror: move |_| {
                        if load.write().failed() {
                            log::warn!("image {} failed to load, showing placeholder", name);
                        }
                    },
                }
            }
            if overlay.is_visible() {
                div {
                    "aria-hidden": "true",
                    style: "position: absolute; inset: 0; pointer-events: none; {overlay_css}",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_image_is_shown() {
        assert!(!ImageLoad::default().shows_placeholder());
    }

    #[test]
    fn load_error_swaps_in_placeholder() {
        let mut load = ImageLoad::default();
        assert!(load.failed());
        assert!(load.shows_placeholder());
        assert!(!load.failed(), "a repeated error is not reported again");
    }

    #[test]
    fn late_load_event_does_not_hide_placeholder() {
        let mut load = ImageLoad::default();
        load.failed();
        load.loaded();
        assert_eq!(load, ImageLoad::Failed);
    }

    #[test]
    fn successful_load_keeps_image() {
        let mut load = ImageLoad::default();
        load.loaded();
        assert_eq!(load, ImageLoad::Loaded);
        assert!(!load.shows_placeholder());
    }
}
