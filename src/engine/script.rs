use unicode_segmentation::UnicodeSegmentation;

/// Script classification for a token.
///
/// Complex scripts are those whose user-perceived characters can span
/// several code points (combining vowel signs, viramas), so any indexing
/// into the word has to go through grapheme clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Latin,
    Complex,
}

// Unicode blocks treated as complex: the Indic family plus the mainland
// Southeast Asian scripts that share the same clustering behavior.
const COMPLEX_RANGES: &[(u32, u32)] = &[
    (0x0900, 0x097F), // Devanagari
    (0x0980, 0x09FF), // Bengali
    (0x0A00, 0x0A7F), // Gurmukhi
    (0x0A80, 0x0AFF), // Gujarati
    (0x0B00, 0x0B7F), // Oriya
    (0x0B80, 0x0BFF), // Tamil
    (0x0C00, 0x0C7F), // Telugu
    (0x0C80, 0x0CFF), // Kannada
    (0x0D00, 0x0D7F), // Malayalam
    (0x0D80, 0x0DFF), // Sinhala
    (0x0E00, 0x0E7F), // Thai
    (0x0E80, 0x0EFF), // Lao
    (0x1000, 0x109F), // Myanmar
    (0x1780, 0x17FF), // Khmer
];

/// Classify a word: Complex if any character falls in a complex-script
/// block, Latin otherwise.
pub fn classify(word: &str) -> Script {
    let complex = word.chars().any(|c| {
        let cp = c as u32;
        COMPLEX_RANGES
            .iter()
            .any(|&(start, end)| cp >= start && cp <= end)
    });
    if complex {
        Script::Complex
    } else {
        Script::Latin
    }
}

/// Grapheme-cluster breakdown of a word, in order.
pub fn grapheme_clusters(word: &str) -> Vec<String> {
    word.graphemes(true).map(str::to_string).collect()
}
