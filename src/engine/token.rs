use crate::engine::script::Script;

/// Structural and inline style markers a token can carry.
///
/// This is a closed set: the tokenizer maps the recognized markup
/// vocabulary onto it and ignores everything else. A token may carry
/// several tags at once (e.g. a bold word inside an H1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleTag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Bold,
    Italic,
    Underline,
    Small,
}

impl StyleTag {
    const ALL: [StyleTag; 10] = [
        StyleTag::H1,
        StyleTag::H2,
        StyleTag::H3,
        StyleTag::H4,
        StyleTag::H5,
        StyleTag::H6,
        StyleTag::Bold,
        StyleTag::Italic,
        StyleTag::Underline,
        StyleTag::Small,
    ];

    fn bit(self) -> u16 {
        1 << (self as u16)
    }

    /// Heading level for H1-H6 tags, None otherwise.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            StyleTag::H1 => Some(1),
            StyleTag::H2 => Some(2),
            StyleTag::H3 => Some(3),
            StyleTag::H4 => Some(4),
            StyleTag::H5 => Some(5),
            StyleTag::H6 => Some(6),
            _ => None,
        }
    }
}

/// Set of style tags, cheap to copy.
///
/// Inserting a tag twice is a no-op, so nested `<b><b>..</b></b>` markup
/// cannot produce duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct StyleSet(u16);

impl StyleSet {
    pub fn new() -> Self {
        StyleSet(0)
    }

    pub fn insert(&mut self, tag: StyleTag) {
        self.0 |= tag.bit();
    }

    pub fn with(mut self, tag: StyleTag) -> Self {
        self.insert(tag);
        self
    }

    pub fn contains(&self, tag: StyleTag) -> bool {
        self.0 & tag.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// True if any H1-H6 tag is present.
    pub fn has_heading(&self) -> bool {
        self.heading_level().is_some()
    }

    /// Smallest (most prominent) heading level present, if any.
    pub fn heading_level(&self) -> Option<u8> {
        self.iter().find_map(StyleTag::heading_level)
    }

    pub fn iter(&self) -> impl Iterator<Item = StyleTag> + '_ {
        StyleTag::ALL.into_iter().filter(|t| self.contains(*t))
    }
}

impl FromIterator<StyleTag> for StyleSet {
    fn from_iter<I: IntoIterator<Item = StyleTag>>(iter: I) -> Self {
        let mut set = StyleSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

/// One word-level unit of the reading stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The literal word, including any punctuation captured during splitting.
    pub text: String,
    /// Styles accumulated from every ancestor markup element.
    pub styles: StyleSet,
    /// Grapheme-cluster breakdown, present only for complex-script tokens
    /// where char indexing would split user-perceived characters.
    pub graphemes: Option<Vec<String>>,
    pub script: Script,
    /// True if this token is the last one before a structural break
    /// (paragraph, list item, heading, explicit line break).
    pub is_block_end: bool,
}

impl Token {
    /// Visible length: grapheme count for complex-script tokens, char
    /// count otherwise.
    pub fn visible_len(&self) -> usize {
        match &self.graphemes {
            Some(g) => g.len(),
            None => self.text.chars().count(),
        }
    }

    /// True if the token ends a sentence: it ends in `.`, `!` or `?`
    /// (optionally followed by a closing quote), or, for complex-script
    /// tokens, contains a danda mark.
    ///
    /// This is the single detection rule shared by pacing, navigation
    /// and frame composition.
    pub fn is_sentence_terminal(&self) -> bool {
        if self.script == Script::Complex && self.text.contains(['\u{0964}', '\u{0965}']) {
            return true;
        }
        strip_closing_quote(&self.text).ends_with(['.', '!', '?'])
    }

    /// True if the token ends in a clause mark (optionally followed by
    /// a closing quote).
    pub fn ends_with_clause_mark(&self) -> bool {
        strip_closing_quote(&self.text).ends_with([',', ';', ':'])
    }
}

fn strip_closing_quote(text: &str) -> &str {
    text.strip_suffix(['\'', '"', '\u{2019}', '\u{201D}'])
        .unwrap_or(text)
}

/// Table-of-contents entry pointing at the first token of a heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub text: String,
    /// Position in the token sequence the heading's first word occupies.
    pub index: usize,
    /// Heading level 1-6.
    pub level: u8,
}

/// Per-category maximum word lengths, used by presentation sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LengthStats {
    /// H1/H2 tokens.
    pub heading: usize,
    /// H3-H6 tokens.
    pub sub_heading: usize,
    pub normal: usize,
}

impl LengthStats {
    pub(crate) fn record(&mut self, styles: StyleSet, len: usize) {
        let slot = match styles.heading_level() {
            Some(1..=2) => &mut self.heading,
            Some(_) => &mut self.sub_heading,
            None => &mut self.normal,
        };
        *slot = (*slot).max(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_set_no_duplicates() {
        let mut set = StyleSet::new();
        set.insert(StyleTag::Bold);
        set.insert(StyleTag::Bold);
        assert_eq!(set.iter().count(), 1);
    }

    #[test]
    fn test_style_set_non_exclusive() {
        let set = StyleSet::new().with(StyleTag::H1).with(StyleTag::Bold);
        assert!(set.contains(StyleTag::H1));
        assert!(set.contains(StyleTag::Bold));
        assert!(!set.contains(StyleTag::Italic));
    }

    #[test]
    fn test_heading_level_prefers_most_prominent() {
        let set = StyleSet::new().with(StyleTag::H3).with(StyleTag::H1);
        assert_eq!(set.heading_level(), Some(1));
        assert!(set.has_heading());
    }

    #[test]
    fn test_sentence_terminal_plain() {
        let token = word("done.");
        assert!(token.is_sentence_terminal());
        assert!(!word("done").is_sentence_terminal());
    }

    #[test]
    fn test_sentence_terminal_with_closing_quote() {
        assert!(word("done.\"").is_sentence_terminal());
        assert!(word("done!'").is_sentence_terminal());
        assert!(!word("done\u{201D}").is_sentence_terminal());
    }

    #[test]
    fn test_sentence_terminal_danda() {
        let mut token = word("\u{0915}\u{0964}");
        token.script = Script::Complex;
        assert!(token.is_sentence_terminal());
    }

    #[test]
    fn test_punctuation_only_token_is_terminal() {
        assert!(word("...").is_sentence_terminal());
        assert!(word("?").is_sentence_terminal());
    }

    #[test]
    fn test_clause_mark_with_optional_quote() {
        assert!(word("however,").ends_with_clause_mark());
        assert!(word("said,'").ends_with_clause_mark());
        assert!(word("thus;").ends_with_clause_mark());
        assert!(!word("plain").ends_with_clause_mark());
        assert!(!word("done.").ends_with_clause_mark());
    }

    #[test]
    fn test_length_stats_categories() {
        let mut stats = LengthStats::default();
        stats.record(StyleSet::new().with(StyleTag::H1), 5);
        stats.record(StyleSet::new().with(StyleTag::H4), 9);
        stats.record(StyleSet::new(), 7);
        stats.record(StyleSet::new(), 3);
        assert_eq!(stats.heading, 5);
        assert_eq!(stats.sub_heading, 9);
        assert_eq!(stats.normal, 7);
    }

    fn word(text: &str) -> Token {
        Token {
            text: text.to_string(),
            styles: StyleSet::new(),
            graphemes: None,
            script: Script::Latin,
            is_block_end: false,
        }
    }
}
