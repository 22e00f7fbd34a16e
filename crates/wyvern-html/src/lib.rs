//! HTML tokenizer and tree constructor for the Wyvern converter.
//!
//! # Scope
//!
//! This crate implements:
//! - **HTML Tokenizer** ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization))
//!   - Tag, attribute, text, comment, and DOCTYPE handling
//!   - RAWTEXT consumption for `<style>` and `<script>` content
//!   - A minimal character reference set (`&amp;`, `&lt;`, numeric, ...)
//!
//! - **Tree Constructor** ([WHATWG § 13.2.6](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction))
//!   - Stack of open elements, void elements, stray end-tag recovery
//!
//! # Not Yet Implemented
//!
//! The converter only needs well-formed snippets, so the heavyweight parts
//! of the spec are intentionally absent:
//!
//! - Insertion modes and implicit `<html>`/`<head>`/`<body>` synthesis
//! - The full named character reference table
//! - Foster parenting and table parsing
//! - The adoption agency algorithm

/// Tree construction from the token stream.
pub mod parser;
/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use parser::HtmlParser;
pub use tokenizer::{Attribute, HtmlTokenizer, Token};
