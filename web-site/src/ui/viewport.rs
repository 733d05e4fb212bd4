//! Viewport - scroll and window metrics shared through context
//!
//! The page root measures once per frame and publishes a new value only when
//! something moved. Scroll-driven components derive from it with memos and
//! effects instead of polling the DOM themselves.

use std::ops::ControlFlow;

use dioxus::prelude::*;

use crate::primitives::Progress;

use super::dom::{document_height, scroll_y, viewport_height};
use super::frame::use_frame_loop;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_y: f32,
    pub height: f32,
    pub document_height: f32,
}

impl Viewport {
    pub fn measure() -> Self {
        Self {
            scroll_y: scroll_y(),
            height: viewport_height(),
            document_height: document_height(),
        }
    }

    pub fn page_progress(&self) -> Progress {
        Progress::of_page(self.scroll_y, self.document_height, self.height)
    }
}

/// Start the page's viewport loop and share its signal with descendants
pub fn use_viewport_provider() -> Signal<Viewport> {
    let mut viewport = use_context_provider(|| Signal::new(Viewport::measure()));
    use_frame_loop(move |_| {
        let next = Viewport::measure();
        if next != *viewport.peek() {
            viewport.set(next);
        }
        ControlFlow::Continue(())
    });
    viewport
}

/// The viewport published by the nearest [`use_viewport_provider`]
pub fn use_viewport() -> Signal<Viewport> {
    use_context()
}
