/// Character-by-character reveal of a single string, driven by discrete
/// ticks from an external interval timer.
///
/// Completion is reported by `tick` exactly once; further ticks are no-ops,
/// so a late interval firing can never double-fire a completion handler.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    total_chars: usize,
    revealed: usize,
    chars_per_tick: usize,
    signaled: bool,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, chars_per_tick: usize) -> Self {
        let text = text.into();
        let total_chars = text.chars().count();
        Typewriter {
            text,
            total_chars,
            revealed: 0,
            chars_per_tick: chars_per_tick.max(1),
            signaled: false,
        }
    }

    /// Advances the reveal by one tick. Returns `true` on the tick that
    /// completes the reveal, and never again for this instance.
    pub fn tick(&mut self) -> bool {
        if self.signaled {
            return false;
        }
        self.revealed = (self.revealed + self.chars_per_tick).min(self.total_chars);
        if self.revealed == self.total_chars {
            self.signaled = true;
            return true;
        }
        false
    }

    /// The currently visible prefix, respecting UTF-8 char boundaries.
    pub fn visible(&self) -> &str {
        self.text
            .char_indices()
            .nth(self.revealed)
            .map(|(i, _)| &self.text[..i])
            .unwrap_or(&self.text)
    }

    pub fn is_done(&self) -> bool {
        self.signaled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_in_ceil_len_over_rate_ticks() {
        // 7 chars at 3 per tick: ceil(7/3) = 3 ticks.
        let mut tw = Typewriter::new("workers", 3);
        assert!(!tw.tick());
        assert!(!tw.tick());
        assert!(tw.tick());
        assert_eq!(tw.visible(), "workers");
    }

    #[test]
    fn completion_fires_exactly_once() {
        let mut tw = Typewriter::new("ok", 5);
        assert!(tw.tick());
        assert!(!tw.tick());
        assert!(!tw.tick());
        assert!(tw.is_done());
    }

    #[test]
    fn prefix_grows_by_rate_each_tick() {
        let mut tw = Typewriter::new("pipeline", 2);
        tw.tick();
        assert_eq!(tw.visible(), "pi");
        tw.tick();
        assert_eq!(tw.visible(), "pipe");
    }

    #[test]
    fn multibyte_text_stays_on_char_boundaries() {
        let mut tw = Typewriter::new("déployé ✓", 1);
        let mut seen = Vec::new();
        while !tw.is_done() {
            tw.tick();
            seen.push(tw.visible().to_string());
        }
        assert_eq!(seen.last().unwrap(), "déployé ✓");
        // 9 chars revealed one at a time.
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn empty_string_completes_on_first_tick() {
        let mut tw = Typewriter::new("", 4);
        assert!(tw.tick());
        assert_eq!(tw.visible(), "");
    }
}
