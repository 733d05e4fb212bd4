//! DOM queries - measurements the motion primitives are sampled from

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::primitives::Rect;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Fresh element id, stable for the lifetime of the component that asked
pub fn unique_id(prefix: &str) -> String {
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{n}")
}

/// Bounding box of the element with `id` in client coordinates
pub fn element_rect(id: &str) -> Option<Rect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(id)?;
    Some(Rect::from_dom(&element.get_bounding_client_rect()))
}

pub fn viewport_height() -> f32 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

pub fn scroll_y() -> f32 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

pub fn document_height() -> f32 {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height())
        .unwrap_or(0) as f32
}

/// Whether the element with `id` currently overlaps a viewport `viewport_h` tall
pub fn is_in_view(id: &str, viewport_h: f32) -> bool {
    element_rect(id).is_some_and(|rect| rect.intersects_viewport(viewport_h))
}
