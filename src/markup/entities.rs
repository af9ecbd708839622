use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    // Named entities worth knowing about in prose documents. Anything
    // else falls through to the numeric forms or is left as-is.
    static ref NAMED: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("amp", "&");
        m.insert("lt", "<");
        m.insert("gt", ">");
        m.insert("quot", "\"");
        m.insert("apos", "'");
        m.insert("nbsp", " ");
        m.insert("lsquo", "\u{2018}");
        m.insert("rsquo", "\u{2019}");
        m.insert("ldquo", "\u{201C}");
        m.insert("rdquo", "\u{201D}");
        m.insert("ndash", "\u{2013}");
        m.insert("mdash", "\u{2014}");
        m.insert("hellip", "\u{2026}");
        m
    };
}

/// Decode a single entity body (the part between `&` and `;`).
///
/// Returns None for anything unrecognized so the caller can keep the
/// original text verbatim.
pub(super) fn decode_entity(body: &str) -> Option<String> {
    if let Some(named) = NAMED.get(body) {
        return Some((*named).to_string());
    }
    let digits = body.strip_prefix('#')?;
    let (digits, radix) = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => (hex, 16),
        None => (digits, 10),
    };
    let code = u32::from_str_radix(digits, radix).ok()?;
    char::from_u32(code).map(|c| c.to_string())
}

/// Replace recognized `&entity;` sequences in a text run, leaving
/// unknown or malformed entities untouched.
pub(super) fn decode_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        // Entity bodies are short; cap the scan so stray ampersands in
        // long text do not trigger a search to the end of the document.
        let semi = after
            .char_indices()
            .take(12)
            .find(|&(_, c)| c == ';')
            .map(|(i, _)| i);
        match semi.and_then(|i| decode_entity(&after[..i]).map(|d| (i, d))) {
            Some((i, decoded)) => {
                out.push_str(&decoded);
                rest = &after[i + 1..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
