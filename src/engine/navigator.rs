//! Sentence and section navigation over the token stream.
//!
//! All functions are read-only searches; the caller owns the cursor
//! and decides what to do with the returned index.

use crate::engine::token::TocEntry;
use crate::engine::tokenizer::TokenStream;

/// Current place in the document, drawn from the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionContext {
    /// Text of the nearest preceding heading of level 1 or 2.
    pub section: String,
    /// Text of the nearest preceding heading, but only when it is
    /// deeper than level 2 (otherwise it *is* the section).
    pub sub_section: String,
}

/// True if the token at `index` starts a new sentence: it is the first
/// token, or the previous token ends a sentence or a block.
pub fn is_sentence_start(tokens: &TokenStream, index: usize) -> bool {
    if index == 0 {
        return true;
    }
    tokens
        .get(index - 1)
        .is_some_and(|prev| prev.is_sentence_terminal() || prev.is_block_end)
}

/// Index of the first token of the next sentence at or after `cursor`:
/// one past the first sentence-terminal or block-end token found,
/// clamped to the last index.
pub fn next_sentence(tokens: &TokenStream, cursor: usize) -> usize {
    if tokens.is_empty() {
        return 0;
    }
    let last = tokens.len() - 1;
    for index in cursor..tokens.len() {
        let token = &tokens.tokens[index];
        if token.is_sentence_terminal() || token.is_block_end {
            return (index + 1).min(last);
        }
    }
    last
}

/// Index of the start of the previous sentence.
///
/// When the cursor already sits on a sentence start, the search begins
/// one position earlier, so repeated calls walk progressively backward
/// instead of re-selecting the same boundary.
pub fn previous_sentence(tokens: &TokenStream, cursor: usize) -> usize {
    if tokens.is_empty() {
        return 0;
    }
    let mut from = cursor.min(tokens.len() - 1);
    if is_sentence_start(tokens, from) {
        if from == 0 {
            return 0;
        }
        from -= 1;
    }
    (0..=from)
        .rev()
        .find(|&index| is_sentence_start(tokens, index))
        .unwrap_or(0)
}

/// Section/sub-section labels for the cursor position: among TOC
/// entries at or before the cursor, the section is the last level<=2
/// entry and the sub-section is the overall last entry when it is
/// deeper than level 2.
pub fn active_context(toc: &[TocEntry], cursor: usize) -> SectionContext {
    let preceding = toc.iter().filter(|entry| entry.index <= cursor);

    let mut section = String::new();
    let mut last: Option<&TocEntry> = None;
    for entry in preceding {
        if entry.level <= 2 {
            section = entry.text.clone();
        }
        last = Some(entry);
    }

    let sub_section = match last {
        Some(entry) if entry.level > 2 => entry.text.clone(),
        _ => String::new(),
    };

    SectionContext {
        section,
        sub_section,
    }
}
