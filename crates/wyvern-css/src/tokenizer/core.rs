//! CSS tokenizer scanning implementation.
//!
//! [§ 4.3 Tokenizer Algorithms](https://www.w3.org/TR/css-syntax-3/#tokenizer-algorithms)
//!
//! A compact scanner over the CSS Syntax Level 3 token set, trimmed to the
//! tokens stylesheet snippets actually produce.

use super::token::CssToken;

/// CSS tokenizer producing [`CssToken`]s from input text.
pub struct CssTokenizer {
    /// The input string being tokenized
    input: Vec<char>,
    /// Current position in the input
    position: usize,
    /// Collected tokens
    tokens: Vec<CssToken>,
}

impl CssTokenizer {
    /// Create a new CSS tokenizer with the given input.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into().chars().collect(),
            position: 0,
            tokens: Vec::new(),
        }
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    ///
    /// "This section describes how to consume a token from a stream of code
    /// points. It will return a single token of any type."
    pub fn run(&mut self) {
        loop {
            let token = self.consume_token();
            let is_eof = token.is_eof();
            self.tokens.push(token);
            if is_eof {
                break;
            }
        }
    }

    /// Return the collected tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<CssToken> {
        self.tokens
    }

    /// Return a reference to the collected tokens.
    #[must_use]
    pub fn tokens(&self) -> &[CssToken] {
        &self.tokens
    }

    // =========================================================================
    // Input helpers
    // =========================================================================

    fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied();
        if c.is_some() {
            self.position += 1;
        }
        c
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comments)
    ///
    /// "If the next two input code points are U+002F SOLIDUS (/) followed by
    /// a U+002A ASTERISK (*), consume them and all following code points up
    /// to and including the first U+002A ASTERISK (*) followed by a U+002F
    /// SOLIDUS (/), or up to an EOF code point."
    fn consume_comments(&mut self) {
        while self.peek() == Some('/') && self.peek_at(1) == Some('*') {
            let _ = self.consume();
            let _ = self.consume();
            while let Some(c) = self.consume() {
                if c == '*' && self.peek() == Some('/') {
                    let _ = self.consume();
                    break;
                }
            }
        }
    }

    // =========================================================================
    // Token dispatch
    // =========================================================================

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    fn consume_token(&mut self) -> CssToken {
        // "Consume comments."
        self.consume_comments();

        let Some(c) = self.peek() else {
            return CssToken::EndOfFile;
        };

        match c {
            // "whitespace: Consume as much whitespace as possible.
            // Return a <whitespace-token>."
            c if c.is_ascii_whitespace() => {
                while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
                    let _ = self.consume();
                }
                CssToken::Whitespace
            }

            // "U+0022 QUOTATION MARK (\") / U+0027 APOSTROPHE (')"
            // "Consume a string token and return it."
            '"' | '\'' => self.consume_string_token(),

            // "U+0023 NUMBER SIGN (#)"
            '#' => {
                let _ = self.consume();
                if self.peek().is_some_and(is_ident_code_point) {
                    CssToken::Hash(self.consume_ident_sequence())
                } else {
                    CssToken::Delim('#')
                }
            }

            '(' => self.punct(CssToken::LeftParen),
            ')' => self.punct(CssToken::RightParen),
            '[' => self.punct(CssToken::LeftBracket),
            ']' => self.punct(CssToken::RightBracket),
            '{' => self.punct(CssToken::LeftBrace),
            '}' => self.punct(CssToken::RightBrace),
            ',' => self.punct(CssToken::Comma),
            ':' => self.punct(CssToken::Colon),
            ';' => self.punct(CssToken::Semicolon),

            // "U+0040 COMMERCIAL AT (@): If the next 3 input code points
            // would start an ident sequence... Return an <at-keyword-token>."
            '@' => {
                let _ = self.consume();
                if self.peek().is_some_and(is_ident_start_code_point) {
                    CssToken::AtKeyword(self.consume_ident_sequence())
                } else {
                    CssToken::Delim('@')
                }
            }

            // "digit: Reconsume... Consume a numeric token, and return it."
            c if c.is_ascii_digit() => self.consume_numeric_token(),

            // "U+002B PLUS SIGN (+) / U+002D HYPHEN-MINUS (-) /
            // U+002E FULL STOP (.)": number if the stream starts with one,
            // ident if `-` starts an ident sequence, delim otherwise.
            '+' | '-' | '.' => {
                if self.would_start_number() {
                    self.consume_numeric_token()
                } else if c == '-' && self.peek_at(1).is_some_and(is_ident_code_point) {
                    self.consume_ident_like_token()
                } else {
                    let _ = self.consume();
                    CssToken::Delim(c)
                }
            }

            // "ident-start code point: Reconsume... Consume an ident-like
            // token, and return it."
            c if is_ident_start_code_point(c) => self.consume_ident_like_token(),

            // "anything else: Return a <delim-token> with its value set to
            // the current input code point."
            _ => {
                let _ = self.consume();
                CssToken::Delim(c)
            }
        }
    }

    fn punct(&mut self, token: CssToken) -> CssToken {
        let _ = self.consume();
        token
    }

    // =========================================================================
    // Compound tokens
    // =========================================================================

    /// [§ 4.3.5 Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    fn consume_string_token(&mut self) -> CssToken {
        let Some(quote) = self.consume() else {
            return CssToken::EndOfFile;
        };
        let mut value = String::new();
        while let Some(c) = self.consume() {
            match c {
                c if c == quote => break,
                // "U+005C REVERSE SOLIDUS (\\): ... consume an escaped code
                // point and append the returned code point."
                '\\' => {
                    if let Some(escaped) = self.consume() {
                        value.push(escaped);
                    }
                }
                // "newline: This is a parse error."
                '\n' => break,
                _ => value.push(c),
            }
        }
        CssToken::String(value)
    }

    /// [§ 4.3.12 Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    fn consume_ident_sequence(&mut self) -> String {
        let mut name = String::new();
        while self.peek().is_some_and(is_ident_code_point) {
            if let Some(c) = self.consume() {
                name.push(c);
            }
        }
        name
    }

    /// [§ 4.3.4 Consume an ident-like token](https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token)
    ///
    /// "If the next input code point is U+0028 LEFT PARENTHESIS ((), consume
    /// it. ... return a <function-token>."
    fn consume_ident_like_token(&mut self) -> CssToken {
        let name = self.consume_ident_sequence();
        if self.peek() == Some('(') {
            let _ = self.consume();
            CssToken::Function(name)
        } else {
            CssToken::Ident(name)
        }
    }

    /// [§ 4.3.3 Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
    fn consume_numeric_token(&mut self) -> CssToken {
        let value = self.consume_number();

        // "If the next 3 input code points would start an ident sequence...
        // Create a <dimension-token>."
        if self.peek().is_some_and(is_ident_start_code_point) {
            let unit = self.consume_ident_sequence();
            return CssToken::Dimension { value, unit };
        }

        // "Otherwise, if the next input code point is U+0025 PERCENTAGE SIGN
        // (%)... Return a <percentage-token>."
        if self.peek() == Some('%') {
            let _ = self.consume();
            return CssToken::Percentage { value };
        }

        CssToken::Number { value }
    }

    /// [§ 4.3.13 Convert a string to a number](https://www.w3.org/TR/css-syntax-3/#convert-string-to-number)
    ///
    /// Scientific notation is not consumed; stylesheet snippets never use it.
    fn consume_number(&mut self) -> f64 {
        let mut repr = String::new();
        if matches!(self.peek(), Some('+' | '-')) {
            if let Some(c) = self.consume() {
                repr.push(c);
            }
        }
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            if let Some(c) = self.consume() {
                repr.push(c);
            }
        }
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            repr.push('.');
            let _ = self.consume();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                if let Some(c) = self.consume() {
                    repr.push(c);
                }
            }
        }
        repr.parse().unwrap_or(0.0)
    }

    /// [§ 4.3.10 Check if three code points would start a number](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
    fn would_start_number(&self) -> bool {
        match self.peek() {
            Some(c) if c.is_ascii_digit() => true,
            Some('+' | '-') => matches!(self.peek_at(1), Some(c2) if c2.is_ascii_digit())
                || (self.peek_at(1) == Some('.')
                    && matches!(self.peek_at(2), Some(c3) if c3.is_ascii_digit())),
            Some('.') => matches!(self.peek_at(1), Some(c2) if c2.is_ascii_digit()),
            _ => false,
        }
    }
}

/// [§ 4.2 Definitions: ident-start code point](https://www.w3.org/TR/css-syntax-3/#ident-start-code-point)
const fn is_ident_start_code_point(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// [§ 4.2 Definitions: ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
const fn is_ident_code_point(c: char) -> bool {
    is_ident_start_code_point(c) || c.is_ascii_digit() || c == '-'
}
