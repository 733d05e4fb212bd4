//! TransformStack - composes primitive outputs into one inline style
//!
//! Several primitives may want to contribute to `transform` on the same
//! element; CSS only honours the last declaration, so they are chained
//! here into a single property.

use crate::primitives::{Angle, Axis, Opacity, Scale};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformStack {
    transforms: Vec<String>,
    extra: Vec<String>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate_y_percent(mut self, percent: f32) -> Self {
        if percent.abs() >= 0.0005 {
            self.transforms.push(format!("translateY({percent:.3}%)"));
        }
        self
    }

    pub fn translate_y_px(mut self, px: f32) -> Self {
        if px.abs() >= 0.005 {
            self.transforms.push(format!("translateY({px:.2}px)"));
        }
        self
    }

    pub fn scale(mut self, scale: Scale) -> Self {
        let css = scale.to_css();
        if !css.is_empty() {
            self.transforms.push(css);
        }
        self
    }

    pub fn rotate(mut self, angle: Angle, axis: Axis) -> Self {
        let css = angle.to_css(axis);
        if !css.is_empty() {
            self.transforms.push(css);
        }
        self
    }

    pub fn opacity(mut self, opacity: Opacity) -> Self {
        let css = opacity.to_css();
        if !css.is_empty() {
            self.extra.push(css);
        }
        self
    }

    /// Inline style with a trailing `;`, or empty when nothing applies
    pub fn to_css(&self) -> String {
        let mut parts = Vec::with_capacity(self.extra.len() + 1);
        if !self.transforms.is_empty() {
            parts.push(format!("transform: {};", self.transforms.join(" ")));
        }
        parts.extend(self.extra.iter().cloned());
        parts.join(" ")
    }
}
