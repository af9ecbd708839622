//! Display frame composition.
//!
//! Derives the 1-or-3-token window shown to the renderer from the
//! cursor. Sliding-window ("revolver") mode shares its boundary rule
//! with the navigator, plus one extra case: a heading word and body
//! text never share a window.

use crate::engine::config::DisplayMode;
use crate::engine::token::Token;
use crate::engine::tokenizer::TokenStream;

/// One slot of the composed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSlot<'a> {
    pub token: &'a Token,
    /// Position in the token stream.
    pub index: usize,
    /// The focused word; neighbors are context.
    pub is_primary: bool,
}

/// Compose the display frame for the cursor position. Empty when the
/// stream is empty or the cursor is out of range.
pub fn compose(tokens: &TokenStream, cursor: usize, mode: DisplayMode) -> Vec<FrameSlot<'_>> {
    let Some(current) = tokens.get(cursor) else {
        return Vec::new();
    };

    let primary = FrameSlot {
        token: current,
        index: cursor,
        is_primary: true,
    };

    match mode {
        DisplayMode::Single => vec![primary],
        DisplayMode::SlidingWindow => {
            let mut frame = Vec::with_capacity(3);

            if cursor > 0 {
                if let Some(prev) = tokens.get(cursor - 1) {
                    if !separated(prev, current) {
                        frame.push(FrameSlot {
                            token: prev,
                            index: cursor - 1,
                            is_primary: false,
                        });
                    }
                }
            }

            frame.push(primary);

            if let Some(next) = tokens.get(cursor + 1) {
                if !separated(current, next) {
                    frame.push(FrameSlot {
                        token: next,
                        index: cursor + 1,
                        is_primary: false,
                    });
                }
            }

            frame
        }
    }
}

/// True when a boundary falls between two adjacent tokens: the earlier
/// one terminates a sentence or block, or heading membership changes.
fn separated(earlier: &Token, later: &Token) -> bool {
    earlier.is_sentence_terminal()
        || earlier.is_block_end
        || earlier.styles.has_heading() != later.styles.has_heading()
}
