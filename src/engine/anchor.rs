//! Focal-character (optical recognition point) selection.
//!
//! Words are aligned so one character sits at a fixed visual position;
//! which one depends on word length. Indexing is over graphemes for
//! complex-script tokens so the anchor is always a whole user-perceived
//! character.

use crate::engine::token::Token;

/// 0-based focal index for a word of the given visible length:
/// 1 char -> 1st, 2-5 -> 2nd, 6-9 -> 3rd, 10-13 -> 4th, longer -> 5th.
pub fn anchor_index_for_len(len: usize) -> usize {
    match len {
        0..=1 => 0,
        2..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => 4,
    }
}

/// Focal index for a token, valid against its grapheme breakdown when
/// present and its chars otherwise.
pub fn anchor_index(token: &Token) -> usize {
    anchor_index_for_len(token.visible_len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tokenizer::tokenize_markup;

    #[test]
    fn test_anchor_buckets() {
        assert_eq!(anchor_index_for_len(1), 0);
        assert_eq!(anchor_index_for_len(2), 1);
        assert_eq!(anchor_index_for_len(5), 1);
        assert_eq!(anchor_index_for_len(6), 2);
        assert_eq!(anchor_index_for_len(9), 2);
        assert_eq!(anchor_index_for_len(10), 3);
        assert_eq!(anchor_index_for_len(13), 3);
        assert_eq!(anchor_index_for_len(14), 4);
    }

    #[test]
    fn test_anchor_for_empty_len() {
        assert_eq!(anchor_index_for_len(0), 0);
    }

    #[test]
    fn test_anchor_index_within_grapheme_bounds() {
        let tokens = tokenize_markup("नमस्ते");
        let token = &tokens.tokens[0];
        let index = anchor_index(token);
        assert!(index < token.graphemes.as_ref().unwrap().len());
    }

    #[test]
    fn test_anchor_uses_visible_length() {
        let tokens = tokenize_markup("reading");
        assert_eq!(anchor_index(&tokens.tokens[0]), 2);
    }
}
