//! Per-token display delay.
//!
//! Pure arithmetic over a token and a rate; no scheduling state in
//! here, so the policy is testable on its own. Three multipliers
//! compose multiplicatively on top of the base 60000/wpm delay:
//! heading, pause (the largest applicable pause factor, not a product)
//! and word length.

use crate::engine::config::TimingConfig;
use crate::engine::script::Script;
use crate::engine::token::Token;

/// Milliseconds per word at the given rate, before any modulation.
pub fn base_delay_ms(wpm: u32) -> f64 {
    60_000.0 / wpm.max(1) as f64
}

/// Display delay for one token, in milliseconds.
pub fn delay_ms(token: &Token, config: &TimingConfig) -> u64 {
    let base = base_delay_ms(config.wpm);
    let delay = base * heading_factor(token, config)
        * pause_factor(token, config)
        * length_factor(token, config);
    delay.round() as u64
}

fn heading_factor(token: &Token, config: &TimingConfig) -> f64 {
    if token.styles.has_heading() {
        config.heading_multiplier
    } else {
        1.0
    }
}

/// The largest applicable pause factor: block ends, sentence-terminal
/// punctuation (danda marks for complex scripts) and clause punctuation
/// do not stack.
fn pause_factor(token: &Token, config: &TimingConfig) -> f64 {
    let mut factor = 1.0_f64;

    if token.is_block_end {
        factor = factor.max(config.block_end_multiplier);
    }

    if token.script == Script::Complex {
        if token.text.contains('\u{0965}') {
            // Double danda closes a verse, pause like a paragraph.
            factor = factor.max(config.block_end_multiplier);
        } else if token.text.contains('\u{0964}') {
            factor = factor.max(config.sentence_end_multiplier);
        }
    }

    // Same terminal rule the navigator and frame composer use.
    if token.is_sentence_terminal() {
        factor = factor.max(config.sentence_end_multiplier);
    } else if token.ends_with_clause_mark() || token.text.contains(['-', '(', ')']) {
        factor = factor.max(config.clause_multiplier);
    }

    factor
}

fn length_factor(token: &Token, config: &TimingConfig) -> f64 {
    let len = token.visible_len();
    if len >= config.very_long_word_threshold {
        config.very_long_word_multiplier
    } else if len >= config.long_word_threshold {
        config.long_word_multiplier
    } else {
        1.0
    }
}
