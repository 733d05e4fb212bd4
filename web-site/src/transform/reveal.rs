//! Reveal - word-by-word slide-up triggered on first visibility

/// Seconds added per word
pub const WORD_STAGGER: f32 = 0.03;
/// Seconds each word takes to reach rest
pub const WORD_DURATION: f32 = 0.5;
const EASING: &str = "cubic-bezier(0.33, 1, 0.68, 1)";

/// One whitespace-delimited word and its start delay
#[derive(Debug, Clone, PartialEq)]
pub struct RevealToken {
    pub text: String,
    pub index: usize,
    /// Seconds
    pub delay: f32,
}

impl RevealToken {
    /// Inline style for the word's inner span
    pub fn style(&self, revealed: bool) -> String {
        let offset = if revealed { "0" } else { "100%" };
        format!(
            "display: inline-block; transform: translateY({offset}); transition: transform {WORD_DURATION}s {EASING} {:.2}s;",
            self.delay
        )
    }
}

/// Split `text` into staggered tokens starting at `base_delay` seconds
pub fn reveal_tokens(text: &str, base_delay: f32) -> Vec<RevealToken> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, word)| RevealToken {
            text: word.to_string(),
            index,
            delay: base_delay + index as f32 * WORD_STAGGER,
        })
        .collect()
}

/// Latches the first time an element is seen; never re-arms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealTrigger {
    fired: bool,
}

impl RevealTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current visibility; returns true only on the call that fires
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.fired || !visible {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_headline_has_two_staggered_tokens() {
        let tokens = reveal_tokens("Build Smarter.", 0.0);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "Build");
        assert_eq!(tokens[1].text, "Smarter.");
        assert!(tokens[1].delay > tokens[0].delay);
    }

    #[test]
    fn base_delay_offsets_every_token() {
        let tokens = reveal_tokens("Launch Faster.", 0.4);
        assert_eq!(tokens[0].delay, 0.4);
        assert!((tokens[1].delay - 0.43).abs() < 1e-6);
    }

    #[test]
    fn repeated_whitespace_yields_no_empty_tokens() {
        let tokens = reveal_tokens("  What   We\tBuild \n", 0.0);
        let words: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, ["What", "We", "Build"]);
        assert!(reveal_tokens("   ", 0.0).is_empty());
    }

    #[test]
    fn style_moves_to_rest_when_revealed() {
        let token = &reveal_tokens("Hello", 0.0)[0];
        assert!(token.style(false).contains("translateY(100%)"));
        assert!(token.style(true).contains("translateY(0)"));
        assert!(token.style(true).contains("0.5s"));
    }

    #[test]
    fn trigger_fires_once() {
        let mut trigger = RevealTrigger::new();
        assert!(!trigger.observe(false));
        assert!(!trigger.is_revealed());
        assert!(trigger.observe(true));
        assert!(!trigger.observe(true));
        assert!(!trigger.observe(false));
        assert!(trigger.is_revealed());
    }
}
