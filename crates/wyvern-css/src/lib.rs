//! CSS tokenizer, parser, selector matching, and style resolution for the
//! Wyvern converter.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Tokenizer** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//!   - Ident, function, hash, string, numeric, and punctuation tokens
//!   - Comment handling
//!
//! - **CSS Parser** ([§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing))
//!   - Stylesheet and style-rule parsing
//!   - Declaration parsing (including `style=""` attribute contents)
//!
//! - **CSS Selectors** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, class, ID, and universal selectors; compound selectors
//!
//! - **Style Resolution**
//!   - Source-order rule replay: later matching rules overwrite earlier
//!     ones per property, inline `style=""` declarations win last
//!   - Shorthand expansion for `padding`, `border`, `border-radius`,
//!     and `background`
//!
//! # Not Yet Implemented
//!
//! These are intentional scope limitations of the converter, not gaps:
//!
//! - Specificity weighting and `!important` precedence (resolution is
//!   source-order only)
//! - Combinators, attribute selectors, and pseudo-classes (rules using
//!   them simply never match)
//! - At-rules (`@media`, `@import`, ...) are skipped with a warning
//! - Property inheritance (every element is resolved in isolation)

/// CSS parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod parser;
/// Style resolution by source-order rule replay.
pub mod resolve;
/// CSS selector parsing and matching per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;
/// CSS tokenizer per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod tokenizer;

pub use parser::{ComponentValue, CssParser, Declaration, Selector, StyleRule, Stylesheet};
pub use resolve::{ResolvedStyle, resolve};
pub use selector::{CompoundSelector, SimpleSelector, parse_selector};
pub use tokenizer::{CssToken, CssTokenizer};

use wyvern_dom::{DomTree, NodeId, NodeType};

/// Parse stylesheet text into a [`Stylesheet`].
#[must_use]
pub fn parse_stylesheet_text(css: &str) -> Stylesheet {
    let mut tokenizer = CssTokenizer::new(css.to_string());
    tokenizer.run();
    let mut parser = CssParser::new(tokenizer.into_tokens());
    parser.parse_stylesheet()
}

/// Parse the contents of a `style=""` attribute into declarations.
///
/// [§ 5.3.6 Parse a list of declarations](https://www.w3.org/TR/css-syntax-3/#parse-list-of-declarations)
#[must_use]
pub fn parse_inline_declarations(style_attr: &str) -> Vec<Declaration> {
    let mut tokenizer = CssTokenizer::new(style_attr.to_string());
    tokenizer.run();
    let mut parser = CssParser::new(tokenizer.into_tokens());
    parser.parse_declaration_list()
}

/// [HTML Standard § 4.2.6 The style element](https://html.spec.whatwg.org/multipage/semantics.html#the-style-element)
///
/// Extract CSS text from all `<style>` elements in the document tree, in
/// document order.
#[must_use]
pub fn extract_style_content(tree: &DomTree) -> String {
    let mut css = String::new();
    collect_style_content(tree, tree.root(), &mut css);
    css
}

/// Recursively collect CSS text from style elements.
fn collect_style_content(tree: &DomTree, id: NodeId, css: &mut String) {
    let Some(node) = tree.get(id) else { return };

    if let NodeType::Element(data) = &node.node_type {
        if data.tag_name.eq_ignore_ascii_case("style") {
            for &child_id in tree.children(id) {
                if let Some(text) = tree.as_text(child_id) {
                    css.push_str(text);
                    css.push('\n');
                }
            }
            return;
        }
    }

    for &child_id in tree.children(id) {
        collect_style_content(tree, child_id, css);
    }
}
