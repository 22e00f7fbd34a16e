//! CSS tokenization per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).

/// Token types produced by the tokenizer.
pub mod token;
/// CSS tokenizer scanning implementation.
pub mod core;

pub use self::core::CssTokenizer;
pub use token::CssToken;
