use crate::engine::error::EngineError;
use std::ops::RangeInclusive;

/// How many tokens the composed display frame holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// One word at a time.
    #[default]
    Single,
    /// Up to three adjacent words (previous, current, next), boundaries
    /// permitting.
    SlidingWindow,
}

/// Pacing parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingConfig {
    /// Words per minute reading speed.
    pub wpm: u32,
    /// Allowed WPM range; rates are clamped into it at the config
    /// boundary so the pacing math never sees a zero rate.
    pub wpm_range: RangeInclusive<u32>,

    /// Every word inside a heading is slowed by this factor.
    pub heading_multiplier: f64,

    /// Pause factors; the largest applicable one wins, they do not stack.
    pub block_end_multiplier: f64,
    pub sentence_end_multiplier: f64,
    pub clause_multiplier: f64,

    /// Long-word thresholds on visible length (graphemes for complex
    /// scripts, chars otherwise) and their factors.
    pub long_word_threshold: usize,
    pub long_word_multiplier: f64,
    pub very_long_word_threshold: usize,
    pub very_long_word_multiplier: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            wpm: 300,
            wpm_range: 60..=1000,
            heading_multiplier: 2.0,
            block_end_multiplier: 1.8,
            sentence_end_multiplier: 1.5,
            clause_multiplier: 1.2,
            long_word_threshold: 8,
            long_word_multiplier: 1.2,
            very_long_word_threshold: 12,
            very_long_word_multiplier: 1.5,
        }
    }
}

impl TimingConfig {
    /// Set the rate, clamping into the allowed range. A rate of zero is
    /// rejected outright rather than clamped, since it can only be a
    /// caller bug.
    pub fn set_wpm(&mut self, wpm: u32) -> Result<(), EngineError> {
        if wpm == 0 {
            return Err(EngineError::InvalidRate(wpm));
        }
        self.wpm = wpm.clamp(*self.wpm_range.start(), *self.wpm_range.end());
        Ok(())
    }

    /// Step the rate by a signed delta, clamping into the allowed range.
    pub fn adjust_wpm(&mut self, delta: i32) {
        let new_wpm = self.wpm as i64 + delta as i64;
        self.wpm = new_wpm.clamp(
            *self.wpm_range.start() as i64,
            *self.wpm_range.end() as i64,
        ) as u32;
    }
}

/// Engine-wide configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineConfig {
    pub timing: TimingConfig,
    pub display_mode: DisplayMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_wpm_clamps_low() {
        let mut config = TimingConfig::default();
        config.set_wpm(10).unwrap();
        assert_eq!(config.wpm, 60);
    }

    #[test]
    fn test_set_wpm_clamps_high() {
        let mut config = TimingConfig::default();
        config.set_wpm(5000).unwrap();
        assert_eq!(config.wpm, 1000);
    }

    #[test]
    fn test_set_wpm_zero_rejected() {
        let mut config = TimingConfig::default();
        assert!(matches!(config.set_wpm(0), Err(EngineError::InvalidRate(0))));
        assert_eq!(config.wpm, 300);
    }

    #[test]
    fn test_adjust_wpm_steps_and_clamps() {
        let mut config = TimingConfig::default();
        config.adjust_wpm(50);
        assert_eq!(config.wpm, 350);
        config.adjust_wpm(-1000);
        assert_eq!(config.wpm, 60);
        config.adjust_wpm(2000);
        assert_eq!(config.wpm, 1000);
    }
}
