//! HTML tokenizer module.
//!
//! Implements a compact subset of
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! of the WHATWG HTML Living Standard.

/// Token types produced by the tokenizer.
pub mod token;
/// HTML tokenizer scanning implementation.
pub mod core;

pub use self::core::HtmlTokenizer;
pub use token::{Attribute, Token};
