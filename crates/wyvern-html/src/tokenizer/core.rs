//! HTML tokenizer scanning implementation.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! A compact scanner rather than the full 80-state machine: the converter
//! consumes pasted snippets, not the open web. Recovery behavior follows the
//! spec where it matters (bogus comments, stray `<`, duplicate attributes).

use super::token::{Attribute, Token};

/// Names of elements whose content is consumed as raw text.
///
/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#raw-text-elements)
/// "Raw text elements: script, style." RCDATA elements (`title`,
/// `textarea`) are treated the same way; the converter never looks at
/// their markup anyway.
const RAW_TEXT_ELEMENTS: [&str; 4] = ["script", "style", "title", "textarea"];

/// HTML tokenizer producing [`Token`]s from input text.
pub struct HtmlTokenizer {
    /// The input string being tokenized
    input: Vec<char>,
    /// Current position in the input
    position: usize,
    /// Collected tokens
    tokens: Vec<Token>,
}

impl HtmlTokenizer {
    /// Create a new HTML tokenizer with the given input.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into().chars().collect(),
            position: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the whole input.
    ///
    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    /// "The output of the tokenization step is a series of zero or more...
    /// tokens."
    pub fn run(&mut self) {
        loop {
            let token = self.consume_token();
            let is_eof = token.is_eof();

            // [§ 13.2.5.6 Script data state] / RAWTEXT: the content of these
            // elements is text until the matching end tag, markup included.
            let raw_text_name = match &token {
                Token::StartTag {
                    name, self_closing, ..
                } if !self_closing && RAW_TEXT_ELEMENTS.contains(&name.as_str()) => {
                    Some(name.clone())
                }
                _ => None,
            };

            self.tokens.push(token);
            if let Some(name) = raw_text_name {
                self.consume_raw_text(&name);
            }
            if is_eof {
                break;
            }
        }
    }

    /// Return the collected tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Return a reference to the collected tokens.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    // =========================================================================
    // Input helpers
    // =========================================================================

    /// "Consume the next input character"
    fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied();
        if c.is_some() {
            self.position += 1;
        }
        c
    }

    /// Peek at the current input character without consuming it.
    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    /// Peek `n` characters ahead of the current position.
    fn peek_at(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Check whether the input at the current position starts with `s`,
    /// ASCII case-insensitively.
    fn starts_with_ignore_case(&self, s: &str) -> bool {
        s.chars()
            .enumerate()
            .all(|(i, expected)| self.peek_at(i).is_some_and(|c| c.eq_ignore_ascii_case(&expected)))
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            let _ = self.consume();
        }
    }

    // =========================================================================
    // Token dispatch
    // =========================================================================

    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    fn consume_token(&mut self) -> Token {
        let Some(c) = self.peek() else {
            return Token::EndOfFile;
        };

        if c == '<' {
            match self.peek_at(1) {
                // "U+002F SOLIDUS (/): Switch to the end tag open state."
                Some('/') if self.peek_at(2).is_some_and(|c| c.is_ascii_alphabetic()) => {
                    return self.consume_end_tag();
                }
                // "U+0021 EXCLAMATION MARK (!): Switch to the markup
                // declaration open state."
                Some('!') => {
                    return self.consume_markup_declaration();
                }
                // "ASCII alpha: Create a new start tag token..."
                Some(c2) if c2.is_ascii_alphabetic() => {
                    return self.consume_start_tag();
                }
                // "Anything else: This is an invalid-first-character-of-tag-name
                // parse error... Emit a U+003C LESS-THAN SIGN character token."
                _ => {}
            }
        }

        self.consume_text()
    }

    /// Accumulate a run of character tokens until the next tag-ish `<`.
    fn consume_text(&mut self) -> Token {
        let mut data = String::new();

        // First character is consumed unconditionally: when we get here on a
        // lone `<` it is plain text.
        if let Some(c) = self.consume() {
            data.push(c);
        }

        while let Some(c) = self.peek() {
            if c == '<'
                && matches!(self.peek_at(1), Some(c2) if c2 == '/' || c2 == '!' || c2.is_ascii_alphabetic())
            {
                break;
            }
            data.push(c);
            let _ = self.consume();
        }

        Token::Text {
            data: decode_character_references(&data),
        }
    }

    // =========================================================================
    // Tags
    // =========================================================================

    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    ///
    /// "Append the lowercase version of the current input character... to the
    /// current tag token's tag name."
    fn consume_tag_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '-' || c == ':' {
                name.push(c.to_ascii_lowercase());
                let _ = self.consume();
            } else {
                break;
            }
        }
        name
    }

    /// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
    fn consume_start_tag(&mut self) -> Token {
        let _ = self.consume(); // '<'
        let name = self.consume_tag_name();

        let mut attributes: Vec<Attribute> = Vec::new();
        let mut self_closing = false;

        loop {
            self.skip_whitespace();
            match self.peek() {
                // "U+003E GREATER-THAN SIGN (>): Switch to the data state.
                // Emit the current tag token."
                Some('>') => {
                    let _ = self.consume();
                    break;
                }
                // [§ 13.2.5.40 Self-closing start tag state]
                Some('/') => {
                    let _ = self.consume();
                    if self.peek() == Some('>') {
                        let _ = self.consume();
                        self_closing = true;
                        break;
                    }
                    // "Anything else: This is an unexpected-solidus-in-tag
                    // parse error." The solidus is dropped.
                }
                None => break,
                Some(_) => {
                    if let Some(attr) = self.consume_attribute() {
                        // [§ 13.2.5.33 Attribute name state]
                        // "If there is already an attribute on the token with
                        // the exact same name... the new attribute must be
                        // removed from the token."
                        if attributes.iter().all(|a| a.name != attr.name) {
                            attributes.push(attr);
                        }
                    }
                }
            }
        }

        Token::StartTag {
            name,
            self_closing,
            attributes,
        }
    }

    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    /// and the attribute value states.
    fn consume_attribute(&mut self) -> Option<Attribute> {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() || c == '=' || c == '>' || c == '/' {
                break;
            }
            name.push(c.to_ascii_lowercase());
            let _ = self.consume();
        }
        if name.is_empty() {
            // Unparseable junk in the tag; drop one character and move on.
            let _ = self.consume();
            return None;
        }

        self.skip_whitespace();
        if self.peek() != Some('=') {
            // [§ 13.2.5.34] Attribute without a value, e.g. `disabled`.
            return Some(Attribute::new(name, String::new()));
        }
        let _ = self.consume(); // '='
        self.skip_whitespace();

        let mut value = String::new();
        match self.peek() {
            // [§ 13.2.5.36/37] Quoted attribute values.
            Some(quote @ ('"' | '\'')) => {
                let _ = self.consume();
                while let Some(c) = self.consume() {
                    if c == quote {
                        break;
                    }
                    value.push(c);
                }
            }
            // [§ 13.2.5.38] Unquoted attribute value.
            _ => {
                while let Some(c) = self.peek() {
                    if c.is_ascii_whitespace() || c == '>' {
                        break;
                    }
                    value.push(c);
                    let _ = self.consume();
                }
            }
        }

        Some(Attribute::new(name, decode_character_references(&value)))
    }

    /// [§ 13.2.5.7 End tag open state](https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state)
    fn consume_end_tag(&mut self) -> Token {
        let _ = self.consume(); // '<'
        let _ = self.consume(); // '/'
        let name = self.consume_tag_name();

        // Attributes on an end tag are an end-tag-with-attributes parse
        // error; everything up to `>` is discarded.
        while let Some(c) = self.consume() {
            if c == '>' {
                break;
            }
        }

        Token::EndTag { name }
    }

    // =========================================================================
    // Markup declarations
    // =========================================================================

    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    fn consume_markup_declaration(&mut self) -> Token {
        let _ = self.consume(); // '<'
        let _ = self.consume(); // '!'

        // "If the next two characters are both U+002D HYPHEN-MINUS characters
        // (-), consume those two characters... switch to the comment start
        // state."
        if self.peek() == Some('-') && self.peek_at(1) == Some('-') {
            let _ = self.consume();
            let _ = self.consume();
            return self.consume_comment();
        }

        // "If the next seven characters are an ASCII case-insensitive match
        // for the word 'DOCTYPE'..."
        if self.starts_with_ignore_case("doctype") {
            for _ in 0..7 {
                let _ = self.consume();
            }
            return self.consume_doctype();
        }

        // "Otherwise... this is an incorrectly-opened-comment parse error.
        // Create a comment token... (bogus comment state)."
        let mut data = String::new();
        while let Some(c) = self.consume() {
            if c == '>' {
                break;
            }
            data.push(c);
        }
        Token::Comment { data }
    }

    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    fn consume_comment(&mut self) -> Token {
        let mut data = String::new();
        while let Some(c) = self.consume() {
            if c == '-' && self.peek() == Some('-') && self.peek_at(1) == Some('>') {
                let _ = self.consume();
                let _ = self.consume();
                return Token::Comment { data };
            }
            data.push(c);
        }
        // EOF in comment: emit what we have.
        Token::Comment { data }
    }

    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    ///
    /// Only the name is kept; identifiers and quirks handling are dropped.
    fn consume_doctype(&mut self) -> Token {
        self.skip_whitespace();
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() || c == '>' {
                break;
            }
            name.push(c.to_ascii_lowercase());
            let _ = self.consume();
        }
        while let Some(c) = self.consume() {
            if c == '>' {
                break;
            }
        }
        Token::Doctype {
            name: (!name.is_empty()).then_some(name),
        }
    }

    // =========================================================================
    // Raw text
    // =========================================================================

    /// [§ 13.2.5.3 RAWTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
    ///
    /// Consume everything up to the matching end tag as a single text run,
    /// then the end tag itself. Character references are *not* decoded
    /// ("the text... is treated as raw text").
    fn consume_raw_text(&mut self, element: &str) {
        let closing = format!("</{element}");
        let mut data = String::new();

        while self.peek().is_some() {
            if self.peek() == Some('<')
                && self.starts_with_ignore_case(&closing)
                && self
                    .peek_at(closing.chars().count())
                    .is_none_or(|c| c.is_ascii_whitespace() || c == '/' || c == '>')
            {
                break;
            }
            if let Some(c) = self.consume() {
                data.push(c);
            }
        }

        if !data.is_empty() {
            self.tokens.push(Token::Text { data });
        }
        if self.peek().is_some() {
            let end = self.consume_end_tag();
            self.tokens.push(end);
        }
    }
}

/// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
///
/// Decode character references in a text or attribute-value run. Only the
/// predefined XML entities, `&nbsp;`, and numeric references are supported;
/// anything else is passed through verbatim (an unknown-named-character-reference
/// is "flushed... as-is" per spec).
#[must_use]
pub fn decode_character_references(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let chars: Vec<char> = input.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '&' {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        // Find the terminating semicolon within a reasonable window.
        let Some(end) = chars[i + 1..].iter().take(10).position(|&c| c == ';') else {
            out.push('&');
            i += 1;
            continue;
        };
        let entity: String = chars[i + 1..i + 1 + end].iter().collect();

        let decoded = match entity.as_str() {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some('\u{a0}'),
            _ => decode_numeric_reference(&entity),
        };

        match decoded {
            Some(c) => {
                out.push(c);
                i += entity.chars().count() + 2;
            }
            None => {
                out.push('&');
                i += 1;
            }
        }
    }

    out
}

/// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
fn decode_numeric_reference(entity: &str) -> Option<char> {
    let digits = entity.strip_prefix('#')?;
    let code = if let Some(hex) = digits.strip_prefix(['x', 'X']) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse::<u32>().ok()?
    };
    char::from_u32(code)
}
