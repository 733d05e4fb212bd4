//! Animation - looping and one-shot CSS keyframe animations
//!
//! These run entirely in the browser's compositor; nothing here is sampled
//! per frame. Scroll- and pointer-linked motion lives in `transform`.

/// CSS keyframe animation applied to an element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Animation {
    #[default]
    None,
    /// Gentle vertical bob, used for ambient glow orbs
    Float { duration: f32, delay: f32 },
    /// Small bounce of the hero's scroll hint
    ScrollHint,
    /// Highlight sweeping across a primary button on hover
    Shimmer,
    /// One-shot rise into place on page load
    FadeUp { distance: f32, duration: f32, delay: f32 },
    /// One-shot fade on page load
    FadeIn { delay: f32 },
}

impl Animation {
    /// CSS declarations for the animated element
    pub fn to_css(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::Float { duration, delay } => format!(
                "animation: float-bob {duration}s ease-in-out {delay}s infinite;"
            ),
            Self::ScrollHint => "animation: scroll-hint 2s ease-in-out infinite;".to_string(),
            Self::Shimmer => "animation: shimmer 1.5s linear infinite;".to_string(),
            Self::FadeUp {
                distance,
                duration,
                delay,
            } => format!(
                "--rise: {distance}px; opacity: 0; animation: fade-up {duration}s ease-out {delay}s forwards;"
            ),
            Self::FadeIn { delay } => {
                format!("opacity: 0; animation: fade-in 0.6s ease-out {delay}s forwards;")
            }
        }
    }

    /// All @keyframes definitions - inject once as a <style> block
    pub fn keyframes_css() -> &'static str {
        r#"
@keyframes float-bob   { 0%,100% { transform: translateY(0); } 50% { transform: translateY(-20px); } }
@keyframes scroll-hint { 0%,100% { transform: translateY(0); } 50% { transform: translateY(10px); } }
@keyframes shimmer     { from { transform: translateX(-100%) skewX(12deg); } to { transform: translateX(100%) skewX(12deg); } }
@keyframes fade-up     { from { opacity: 0; transform: translateY(var(--rise)); } to { opacity: 1; transform: translateY(0); } }
@keyframes fade-in     { from { opacity: 0; } to { opacity: 1; } }
@keyframes image-in    { from { opacity: 0; transform: scale(1.1); } to { opacity: 1; transform: scale(1); } }
"#
    }
}
