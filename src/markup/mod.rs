//! Restricted HTML parsing for the reading engine.
//!
//! The engine only acts on a small structural/style vocabulary
//! (headings, bold/italic/underline/small, block containers, line
//! breaks); everything else still parses into the tree so its text is
//! reachable, it just contributes no styling. The parser is tolerant:
//! stray close tags, unclosed elements and malformed entities degrade
//! gracefully instead of failing.

mod entities;

use entities::decode_text;

/// A node of the parsed markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element(Element),
}

/// An element with its (lowercased) tag name, interpreted inline style
/// and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub inline: InlineStyle,
    pub children: Vec<Node>,
}

/// The slice of the `style` attribute the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InlineStyle {
    pub bold: bool,
    pub italic: bool,
}

impl Element {
    /// Concatenated text of all descendant text nodes, in order.
    pub fn text_content(&self) -> String {
        fn walk(nodes: &[Node], out: &mut String) {
            for node in nodes {
                match node {
                    Node::Text(text) => {
                        if !out.is_empty() && !out.ends_with(' ') {
                            out.push(' ');
                        }
                        out.push_str(text.trim());
                    }
                    Node::Element(el) => walk(&el.children, out),
                }
            }
        }
        let mut out = String::new();
        walk(&self.children, &mut out);
        out.trim().to_string()
    }
}

// Elements that never hold children in this vocabulary.
fn is_void(name: &str) -> bool {
    matches!(name, "br" | "hr" | "img" | "meta" | "link" | "input")
}

// Raw-text elements whose content must not be tokenized.
fn is_raw_text(name: &str) -> bool {
    matches!(name, "script" | "style")
}

struct TreeBuilder {
    root: Vec<Node>,
    stack: Vec<Element>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            root: Vec::new(),
            stack: Vec::new(),
        }
    }

    fn attach(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.root.push(node),
        }
    }

    fn text(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }
        self.attach(Node::Text(decode_text(raw)));
    }

    fn open(&mut self, element: Element, self_closing: bool) {
        if self_closing || is_void(&element.name) {
            self.attach(Node::Element(element));
        } else {
            self.stack.push(element);
        }
    }

    fn close(&mut self, name: &str) {
        // Close the nearest matching open element, implicitly closing
        // anything opened inside it. A close tag with no matching open
        // element is ignored.
        let Some(at) = self.stack.iter().rposition(|el| el.name == name) else {
            return;
        };
        while self.stack.len() > at {
            if let Some(el) = self.stack.pop() {
                self.attach(Node::Element(el));
            }
        }
    }

    fn finish(mut self) -> Vec<Node> {
        while let Some(el) = self.stack.pop() {
            self.attach(Node::Element(el));
        }
        self.root
    }
}

/// Parse a markup string into a node tree.
pub fn parse(input: &str) -> Vec<Node> {
    let mut builder = TreeBuilder::new();
    let mut rest = input;

    while let Some(lt) = rest.find('<') {
        builder.text(&rest[..lt]);
        rest = &rest[lt..];

        if let Some(after_comment) = rest.strip_prefix("<!--") {
            rest = match after_comment.find("-->") {
                Some(end) => &after_comment[end + 3..],
                None => "",
            };
            continue;
        }
        if rest.starts_with("<!") || rest.starts_with("<?") {
            rest = match rest.find('>') {
                Some(end) => &rest[end + 1..],
                None => "",
            };
            continue;
        }

        let Some(gt) = rest.find('>') else {
            // Unterminated tag: treat the remainder as text.
            builder.text(rest);
            rest = "";
            break;
        };
        let tag_body = &rest[1..gt];
        rest = &rest[gt + 1..];

        if let Some(name) = tag_body.strip_prefix('/') {
            builder.close(name.trim().to_ascii_lowercase().as_str());
            continue;
        }

        let (element, self_closing) = parse_tag(tag_body);
        let name = element.name.clone();
        builder.open(element, self_closing);

        if !self_closing && is_raw_text(&name) {
            // Skip raw content up to the matching close tag.
            let close = format!("</{name}");
            match rest.to_ascii_lowercase().find(&close) {
                Some(at) => {
                    let after = &rest[at..];
                    let end = after.find('>').map(|i| at + i + 1).unwrap_or(rest.len());
                    rest = &rest[end..];
                }
                None => rest = "",
            }
            builder.close(&name);
        }
    }
    builder.text(rest);
    builder.finish()
}

fn parse_tag(body: &str) -> (Element, bool) {
    let body = body.trim();
    let (body, self_closing) = match body.strip_suffix('/') {
        Some(stripped) => (stripped.trim_end(), true),
        None => (body, false),
    };

    let name_end = body
        .find(|c: char| c.is_whitespace())
        .unwrap_or(body.len());
    let name = body[..name_end].to_ascii_lowercase();
    let attrs = &body[name_end..];

    let inline = match attribute_value(attrs, "style") {
        Some(style) => parse_inline_style(&style),
        None => InlineStyle::default(),
    };

    (
        Element {
            name,
            inline,
            children: Vec::new(),
        },
        self_closing,
    )
}

/// Pull a single attribute's value out of the attribute region of a tag.
fn attribute_value(attrs: &str, wanted: &str) -> Option<String> {
    let mut rest = attrs;
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            return None;
        }
        let name_end = rest
            .find(|c: char| c.is_whitespace() || c == '=')
            .unwrap_or(rest.len());
        let name = rest[..name_end].to_ascii_lowercase();
        rest = rest[name_end..].trim_start();

        let value = match rest.strip_prefix('=') {
            Some(after_eq) => {
                let after_eq = after_eq.trim_start();
                match after_eq.chars().next() {
                    Some(quote @ ('"' | '\'')) => {
                        let inner = &after_eq[1..];
                        let end = inner.find(quote).unwrap_or(inner.len());
                        rest = inner.get(end + 1..).unwrap_or("");
                        inner[..end].to_string()
                    }
                    _ => {
                        let end = after_eq
                            .find(|c: char| c.is_whitespace())
                            .unwrap_or(after_eq.len());
                        rest = &after_eq[end..];
                        after_eq[..end].to_string()
                    }
                }
            }
            None => String::new(),
        };

        if name == wanted {
            return Some(value);
        }
    }
}

/// Interpret a `style` attribute, recognizing only equivalents of bold
/// (font-weight: bold, or a numeric weight of 700 and above) and italic.
fn parse_inline_style(style: &str) -> InlineStyle {
    let mut inline = InlineStyle::default();
    for declaration in style.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let property = property.trim().to_ascii_lowercase();
        let value = value.trim().to_ascii_lowercase();
        match property.as_str() {
            "font-weight" => {
                if value == "bold" || value.parse::<u32>().is_ok_and(|w| w >= 700) {
                    inline.bold = true;
                }
            }
            "font-style" => {
                if value == "italic" || value == "oblique" {
                    inline.italic = true;
                }
            }
            _ => {}
        }
    }
    inline
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only_element(nodes: &[Node]) -> &Element {
        match nodes {
            [Node::Element(el)] => el,
            other => panic!("expected a single element, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_plain_text() {
        let nodes = parse("hello world");
        assert_eq!(nodes, vec![Node::Text("hello world".to_string())]);
    }

    #[test]
    fn test_parse_simple_element() {
        let nodes = parse("<p>hello</p>");
        let el = only_element(&nodes);
        assert_eq!(el.name, "p");
        assert_eq!(el.children, vec![Node::Text("hello".to_string())]);
    }

    #[test]
    fn test_parse_nested_elements() {
        let nodes = parse("<p>The <b>quick</b> fox.</p>");
        let p = only_element(&nodes);
        assert_eq!(p.children.len(), 3);
        match &p.children[1] {
            Node::Element(b) => {
                assert_eq!(b.name, "b");
                assert_eq!(b.children, vec![Node::Text("quick".to_string())]);
            }
            other => panic!("expected <b>, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_self_closing_br() {
        let nodes = parse("a<br/>b");
        assert_eq!(nodes.len(), 3);
        assert_eq!(only_element(&nodes[1..2]).name, "br");
    }

    #[test]
    fn test_parse_void_br_without_slash() {
        let nodes = parse("a<br>b");
        assert_eq!(nodes.len(), 3);
        match &nodes[2] {
            Node::Text(text) => assert_eq!(text, "b"),
            other => panic!("br swallowed following text: {other:?}"),
        }
    }

    #[test]
    fn test_parse_unclosed_element_is_closed_at_end() {
        let nodes = parse("<p>dangling");
        let p = only_element(&nodes);
        assert_eq!(p.children, vec![Node::Text("dangling".to_string())]);
    }

    #[test]
    fn test_parse_stray_close_tag_ignored() {
        let nodes = parse("hello</b> world");
        assert_eq!(
            nodes,
            vec![
                Node::Text("hello".to_string()),
                Node::Text(" world".to_string())
            ]
        );
    }

    #[test]
    fn test_parse_case_insensitive_names() {
        let nodes = parse("<H1>Title</H1>");
        assert_eq!(only_element(&nodes).name, "h1");
    }

    #[test]
    fn test_parse_inline_bold_weight() {
        let nodes = parse("<span style=\"font-weight: 700\">x</span>");
        assert!(only_element(&nodes).inline.bold);
        let nodes = parse("<span style=\"font-weight: bold\">x</span>");
        assert!(only_element(&nodes).inline.bold);
        let nodes = parse("<span style=\"font-weight: 400\">x</span>");
        assert!(!only_element(&nodes).inline.bold);
    }

    #[test]
    fn test_parse_inline_italic() {
        let nodes = parse("<span style='font-style: italic'>x</span>");
        assert!(only_element(&nodes).inline.italic);
    }

    #[test]
    fn test_parse_comment_skipped() {
        let nodes = parse("a<!-- hidden -->b");
        assert_eq!(
            nodes,
            vec![Node::Text("a".to_string()), Node::Text("b".to_string())]
        );
    }

    #[test]
    fn test_parse_entities_in_text() {
        let nodes = parse("<p>Tom &amp; Jerry</p>");
        let p = only_element(&nodes);
        assert_eq!(p.children, vec![Node::Text("Tom & Jerry".to_string())]);
    }

    #[test]
    fn test_parse_style_content_not_text() {
        let nodes = parse("<style>.x { color: red }</style><p>word</p>");
        let texts: Vec<_> = nodes
            .iter()
            .filter_map(|n| match n {
                Node::Element(el) => Some(el.text_content()),
                _ => None,
            })
            .collect();
        assert!(texts.contains(&"word".to_string()));
        assert!(!texts.iter().any(|t| t.contains("color")));
    }

    #[test]
    fn test_text_content_joins_descendants() {
        let nodes = parse("<h2>The <em>Big</em> Idea</h2>");
        assert_eq!(only_element(&nodes).text_content(), "The Big Idea");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse("").is_empty());
    }
}
