//! Token types for the CSS tokenizer.

use std::fmt;

/// [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization)
///
/// The token set is trimmed to what stylesheet snippets actually use:
/// unicode-range, CDO/CDC, url tokens and the hash type flag are absent.
#[derive(Debug, Clone, PartialEq)]
pub enum CssToken {
    /// `<ident-token>`, e.g. `color`, `solid`, `red`
    Ident(String),
    /// `<function-token>`, the name before `(`, e.g. `rgb`
    Function(String),
    /// `<at-keyword-token>`, the name after `@`, e.g. `media`
    AtKeyword(String),
    /// `<hash-token>`, the value after `#`, e.g. `ff0000` or `main`
    Hash(String),
    /// `<string-token>`
    String(String),
    /// `<number-token>`
    Number {
        /// The numeric value.
        value: f64,
    },
    /// `<percentage-token>`
    Percentage {
        /// The numeric value before the `%`.
        value: f64,
    },
    /// `<dimension-token>`, e.g. `16px`, `1.5em`
    Dimension {
        /// The numeric value.
        value: f64,
        /// The unit identifier.
        unit: String,
    },
    /// `<delim-token>`
    Delim(char),
    /// `<colon-token>`
    Colon,
    /// `<semicolon-token>`
    Semicolon,
    /// `<comma-token>`
    Comma,
    /// `<{-token>`
    LeftBrace,
    /// `<}-token>`
    RightBrace,
    /// `<(-token>`
    LeftParen,
    /// `<)-token>`
    RightParen,
    /// `<[-token>`
    LeftBracket,
    /// `<]-token>`
    RightBracket,
    /// `<whitespace-token>` (consecutive whitespace collapsed)
    Whitespace,
    /// `<EOF-token>`
    EndOfFile,
}

impl CssToken {
    /// Check whether this is the end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, CssToken::EndOfFile)
    }
}

impl fmt::Display for CssToken {
    /// Render the token back to CSS source form. Used to reassemble raw
    /// declaration values for [`crate::resolve::ResolvedStyle`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(s) | Self::Function(s) => write!(f, "{s}"),
            Self::AtKeyword(s) => write!(f, "@{s}"),
            Self::Hash(s) => write!(f, "#{s}"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Number { value } => write!(f, "{}", format_number(*value)),
            Self::Percentage { value } => write!(f, "{}%", format_number(*value)),
            Self::Dimension { value, unit } => write!(f, "{}{unit}", format_number(*value)),
            Self::Delim(c) => write!(f, "{c}"),
            Self::Colon => write!(f, ":"),
            Self::Semicolon => write!(f, ";"),
            Self::Comma => write!(f, ","),
            Self::LeftBrace => write!(f, "{{"),
            Self::RightBrace => write!(f, "}}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::LeftBracket => write!(f, "["),
            Self::RightBracket => write!(f, "]"),
            Self::Whitespace => write!(f, " "),
            Self::EndOfFile => Ok(()),
        }
    }
}

/// Format a numeric token value without a trailing `.0` for integers.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        (value as i64).to_string()
    } else {
        format!("{value}")
    }
}
