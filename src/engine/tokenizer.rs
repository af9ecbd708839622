//! Markup tree to token stream conversion.
//!
//! Traversal is depth-first pre-order. The accumulated style set is
//! passed down by value: every token gets its own copy, so styles never
//! leak to siblings and later mutation cannot reach already-emitted
//! tokens. All output is collected through an explicit builder rather
//! than shared mutable state.

use crate::engine::script::{self, Script};
use crate::engine::token::{LengthStats, StyleSet, StyleTag, TocEntry, Token};
use crate::markup::{Element, Node};

/// Immutable product of tokenization. Rebuilt wholesale on every input
/// change, never patched.
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    pub tokens: Vec<Token>,
    pub toc: Vec<TocEntry>,
    pub length_stats: LengthStats,
}

impl TokenStream {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }
}

/// Convert a parsed markup tree into a token stream with its table of
/// contents and per-category length maxima.
pub fn tokenize(nodes: &[Node]) -> TokenStream {
    let mut builder = StreamBuilder::default();
    for node in nodes {
        builder.visit(node, StyleSet::new());
    }
    builder.finish()
}

/// Convenience wrapper: parse markup and tokenize in one step.
pub fn tokenize_markup(markup: &str) -> TokenStream {
    tokenize(&crate::markup::parse(markup))
}

#[derive(Default)]
struct StreamBuilder {
    tokens: Vec<Token>,
    toc: Vec<TocEntry>,
    stats: LengthStats,
}

impl StreamBuilder {
    fn visit(&mut self, node: &Node, styles: StyleSet) {
        match node {
            Node::Text(text) => self.emit_words(text, styles),
            Node::Element(el) => self.visit_element(el, styles),
        }
    }

    fn visit_element(&mut self, el: &Element, inherited: StyleSet) {
        let mut styles = inherited;
        if let Some(tag) = style_tag(&el.name) {
            styles.insert(tag);
        }
        // Inline presentation folds into the same tags; StyleSet
        // semantics make duplicate insertion harmless.
        if el.inline.bold {
            styles.insert(StyleTag::Bold);
        }
        if el.inline.italic {
            styles.insert(StyleTag::Italic);
        }

        if let Some(level) = heading_level(&el.name) {
            let text = el.text_content();
            if !text.trim().is_empty() {
                // Points at the slot the heading's first token will take.
                self.toc.push(TocEntry {
                    text,
                    index: self.tokens.len(),
                    level,
                });
            }
        }

        let emitted_before = self.tokens.len();
        for child in &el.children {
            self.visit(child, styles);
        }

        if is_block(&el.name) && self.tokens.len() > emitted_before {
            if let Some(last) = self.tokens.last_mut() {
                last.is_block_end = true;
            }
        }
        // A childless <br> still terminates whatever came before it,
        // even a token from a different branch.
        if el.name == "br" {
            if let Some(last) = self.tokens.last_mut() {
                last.is_block_end = true;
            }
        }
    }

    fn emit_words(&mut self, text: &str, styles: StyleSet) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        // Surround dashes with spaces so "well-known" splits into
        // "well", "-", "known" and em-dashes become standalone tokens.
        let mut separated = String::with_capacity(text.len());
        for c in text.chars() {
            if c == '-' || c == '\u{2014}' {
                separated.push(' ');
                separated.push(c);
                separated.push(' ');
            } else {
                separated.push(c);
            }
        }

        for word in separated.split_whitespace() {
            let script = script::classify(word);
            let graphemes = match script {
                Script::Complex => Some(script::grapheme_clusters(word)),
                Script::Latin => None,
            };
            let token = Token {
                text: word.to_string(),
                styles,
                graphemes,
                script,
                is_block_end: false,
            };
            self.stats.record(styles, token.visible_len());
            self.tokens.push(token);
        }
    }

    fn finish(self) -> TokenStream {
        TokenStream {
            tokens: self.tokens,
            toc: self.toc,
            length_stats: self.stats,
        }
    }
}

fn style_tag(name: &str) -> Option<StyleTag> {
    match name {
        "h1" => Some(StyleTag::H1),
        "h2" => Some(StyleTag::H2),
        "h3" => Some(StyleTag::H3),
        "h4" => Some(StyleTag::H4),
        "h5" => Some(StyleTag::H5),
        "h6" => Some(StyleTag::H6),
        "b" | "strong" => Some(StyleTag::Bold),
        "i" | "em" => Some(StyleTag::Italic),
        "u" => Some(StyleTag::Underline),
        "small" => Some(StyleTag::Small),
        _ => None,
    }
}

fn heading_level(name: &str) -> Option<u8> {
    match name {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

fn is_block(name: &str) -> bool {
    matches!(
        name,
        "p" | "div" | "li" | "br" | "blockquote" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
    )
}
