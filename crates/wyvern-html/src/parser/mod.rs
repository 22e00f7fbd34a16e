//! Tree construction from the token stream.
//!
//! [§ 13.2.6 Tree construction](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction)
//!
//! A single-pass constructor driven by a stack of open elements. Insertion
//! modes and implicit element synthesis are omitted: the converter receives
//! snippets or complete documents that already spell out their structure.

use wyvern_common::warning::warn_once;
use wyvern_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType};

use crate::tokenizer::Token;

/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
///
/// "Void elements: area, base, br, col, embed, hr, img, input, link, meta,
/// source, track, wbr"
const VOID_ELEMENTS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// HTML parser building a [`DomTree`] from tokens.
pub struct HtmlParser {
    tokens: Vec<Token>,
}

impl HtmlParser {
    /// Create a parser over a token stream.
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// [§ 13.2.6 Tree construction](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction)
    ///
    /// "As tokens are emitted from the tokenizer, they must be processed
    /// according to the rules of the insertion mode."
    ///
    /// Build the document tree. Never fails: parse errors degrade to the
    /// recovery behavior noted inline.
    #[must_use]
    pub fn run(self) -> DomTree {
        let mut tree = DomTree::new();
        // [§ 13.2.4.2 The stack of open elements]
        let mut open_elements: Vec<NodeId> = vec![tree.root()];

        for token in self.tokens {
            let current = *open_elements.last().unwrap_or(&NodeId::ROOT);

            match token {
                // [§ 13.2.6.4.1 The "initial" insertion mode]
                // The DOCTYPE only selects quirks mode, which conversion
                // ignores entirely.
                Token::Doctype { .. } => {}

                Token::Comment { data } => {
                    let id = tree.alloc(NodeType::Comment(data));
                    tree.append_child(current, id);
                }

                Token::Text { data } => {
                    // Inter-element whitespace is formatting noise; dropping
                    // it keeps the tree free of empty text nodes.
                    if !data.trim().is_empty() {
                        let id = tree.alloc(NodeType::Text(data));
                        tree.append_child(current, id);
                    }
                }

                Token::StartTag {
                    name,
                    self_closing,
                    attributes,
                } => {
                    let mut attrs = AttributesMap::new();
                    for attr in attributes {
                        let _ = attrs.insert(attr.name, attr.value);
                    }
                    let id = tree.alloc(NodeType::Element(ElementData {
                        tag_name: name.clone(),
                        attrs,
                    }));
                    tree.append_child(current, id);

                    // "If the token's self-closing flag is set" or the
                    // element is void, it takes no children.
                    if !self_closing && !VOID_ELEMENTS.contains(&name.as_str()) {
                        open_elements.push(id);
                    }
                }

                Token::EndTag { name } => {
                    // "If the stack of open elements does not have an element
                    // in scope that is an HTML element with the same tag name
                    // as that of the token, then this is a parse error;
                    // ignore the token."
                    let matching = open_elements.iter().rposition(|&id| {
                        tree.as_element(id)
                            .is_some_and(|e| e.tag_name.eq_ignore_ascii_case(&name))
                    });
                    match matching {
                        // "Pop elements from the stack of open elements until
                        // an HTML element with the same tag name as the token
                        // has been popped from the stack."
                        Some(index) if index > 0 => open_elements.truncate(index),
                        _ => warn_once("HTML", &format!("ignoring stray end tag </{name}>")),
                    }
                }

                Token::EndOfFile => break,
            }
        }

        tree
    }
}
