//! Parallax - scroll progress to translate/scale/opacity

use crate::primitives::{Interpolation, Linear, Opacity, Progress, Scale};

use super::stack::TransformStack;

/// Start/end pairs for a parallax layer driven by its own viewport progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxRange {
    /// Vertical offset in percent of the layer's height
    pub offset: Linear,
    pub scale: Linear,
}

impl ParallaxRange {
    /// Image layers inside section cards
    pub const IMAGE: Self = Self {
        offset: Interpolation::new([0.0, 1.0], [-10.0, 10.0]),
        scale: Interpolation::new([0.0, 1.0], [1.1, 1.2]),
    };

    pub fn sample(&self, progress: Progress) -> ParallaxFrame {
        let p = progress.value();
        ParallaxFrame {
            offset_percent: self.offset.sample(p),
            scale: Scale::clamped(self.scale.sample(p)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxFrame {
    pub offset_percent: f32,
    pub scale: Scale,
}

impl ParallaxFrame {
    pub fn to_css(&self) -> String {
        TransformStack::new()
            .translate_y_percent(self.offset_percent)
            .scale(self.scale)
            .to_css()
    }
}

/// Hero background: driven by absolute page scroll rather than element progress
pub struct HeroParallax;

impl HeroParallax {
    const DRIFT: Linear = Interpolation::new([0.0, 1000.0], [0.0, 400.0]);
    const FADE: Linear = Interpolation::new([0.0, 500.0], [1.0, 0.0]);

    pub fn sample(scroll_y: f32) -> HeroFrame {
        HeroFrame {
            offset_px: Self::DRIFT.sample(scroll_y),
            opacity: Opacity::clamped(Self::FADE.sample(scroll_y)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFrame {
    pub offset_px: f32,
    pub opacity: Opacity,
}

impl HeroFrame {
    pub fn to_css(&self) -> String {
        TransformStack::new()
            .translate_y_px(self.offset_px)
            .opacity(self.opacity)
            .to_css()
    }
}
