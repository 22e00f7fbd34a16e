//! CSS Parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
//!
//! "The input to the parsing stage is a stream of tokens from the
//! tokenization stage." This implementation parses style rules and
//! declaration lists; at-rules are recognized, consumed, and skipped.

use wyvern_common::warning::warn_once;

use crate::tokenizer::CssToken;

/// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
///
/// A CSS declaration (e.g., `color: red`).
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The property name, lower-cased.
    pub name: String,
    /// The property value as component values.
    pub value: Vec<ComponentValue>,
    /// Whether the declaration has `!important`.
    ///
    /// Parsed so the flag never leaks into the value text, but carries no
    /// precedence: resolution is source-order only.
    pub important: bool,
}

impl Declaration {
    /// Reassemble the declaration's value as raw CSS text,
    /// e.g. `rgb(255, 0, 0)` or `10px 20px`.
    #[must_use]
    pub fn value_text(&self) -> String {
        component_values_to_text(&self.value)
    }
}

/// [§ 5.4.8 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
///
/// A component value in a declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentValue {
    /// A preserved token.
    Token(CssToken),
    /// A function with its contents.
    Function {
        /// The function name.
        name: String,
        /// The function arguments.
        value: Vec<ComponentValue>,
    },
    /// A simple block.
    Block {
        /// The opening token character.
        token: char,
        /// The block contents.
        value: Vec<ComponentValue>,
    },
}

impl ComponentValue {
    /// Check whether this is a whitespace token.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, Self::Token(CssToken::Whitespace))
    }

    /// Render back to CSS source form.
    #[must_use]
    pub fn to_css_string(&self) -> String {
        match self {
            Self::Token(token) => token.to_string(),
            Self::Function { name, value } => {
                format!("{name}({})", component_values_to_text(value))
            }
            Self::Block { token, value } => {
                let (open, close) = match token {
                    '[' => ('[', ']'),
                    '(' => ('(', ')'),
                    _ => ('{', '}'),
                };
                format!("{open}{}{close}", component_values_to_text(value))
            }
        }
    }
}

/// Render a component value list back to trimmed CSS source text.
#[must_use]
pub fn component_values_to_text(values: &[ComponentValue]) -> String {
    let mut out = String::new();
    for v in values {
        out.push_str(&v.to_css_string());
    }
    out.trim().to_string()
}

/// A CSS selector kept as raw text; parsed on demand by
/// [`crate::selector::parse_selector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Raw selector text
    pub text: String,
}

/// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-a-qualified-rule)
///
/// A CSS style rule (selector list + declarations).
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    /// The list of selectors for this rule.
    pub selectors: Vec<Selector>,
    /// The declarations in this rule block.
    pub declarations: Vec<Declaration>,
}

/// [§ 5.3.2 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
///
/// A parsed CSS stylesheet. Only style rules are retained; at-rules are
/// consumed and dropped during parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    /// The style rules in the stylesheet, in source order.
    pub rules: Vec<StyleRule>,
}

impl Stylesheet {
    /// Append another stylesheet's rules after this one's.
    ///
    /// [§ 6.1 Cascade Sorting Order](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
    /// "Declarations from style sheets independently linked by the
    /// originating document are treated as if they were concatenated in
    /// linking order."
    pub fn extend(&mut self, other: Stylesheet) {
        self.rules.extend(other.rules);
    }
}

/// CSS parser
pub struct CssParser {
    tokens: Vec<CssToken>,
    position: usize,
}

impl CssParser {
    /// Create a new parser from a list of tokens.
    #[must_use]
    pub const fn new(tokens: Vec<CssToken>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    fn peek(&self) -> Option<&CssToken> {
        self.tokens.get(self.position)
    }

    fn consume(&mut self) -> Option<&CssToken> {
        let token = self.tokens.get(self.position);
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
    pub fn parse_stylesheet(&mut self) -> Stylesheet {
        let mut rules = Vec::new();

        loop {
            match self.peek() {
                // "<whitespace-token>: Do nothing."
                Some(CssToken::Whitespace) => {
                    let _ = self.consume();
                }

                // "<EOF-token>: Return the list of rules."
                None | Some(CssToken::EndOfFile) => {
                    return Stylesheet { rules };
                }

                // "<at-keyword-token>: ... Consume an at-rule."
                // The converter has no use for at-rules; consume and skip.
                Some(CssToken::AtKeyword(_)) => {
                    self.skip_at_rule();
                }

                // "anything else: ... Consume a qualified rule. If anything
                // is returned, append it to the list of rules."
                Some(_) => {
                    if let Some(rule) = self.consume_qualified_rule() {
                        rules.push(rule);
                    }
                }
            }
        }
    }

    /// [§ 5.3.6 Parse a list of declarations](https://www.w3.org/TR/css-syntax-3/#parse-list-of-declarations)
    ///
    /// Parse declarations from a style attribute or similar.
    pub fn parse_declaration_list(&mut self) -> Vec<Declaration> {
        self.consume_list_of_declarations()
    }

    /// [§ 5.4.2 Consume an at-rule](https://www.w3.org/TR/css-syntax-3/#consume-at-rule)
    ///
    /// Consumed for stream sanity, then dropped with a warning: `@media`
    /// blocks and `@import`s have no counterpart in the conversion.
    fn skip_at_rule(&mut self) {
        let name = match self.consume() {
            Some(CssToken::AtKeyword(name)) => name.clone(),
            _ => return,
        };
        warn_once("CSS", &format!("skipping at-rule @{name}"));

        loop {
            match self.peek() {
                // "<semicolon-token>: Return the at-rule."
                Some(CssToken::Semicolon) => {
                    let _ = self.consume();
                    return;
                }
                // "<EOF-token>: This is a parse error. Return the at-rule."
                None | Some(CssToken::EndOfFile) => return,
                // "<{-token>: Consume a simple block... Return the at-rule."
                Some(CssToken::LeftBrace) => {
                    let _ = self.consume_component_value();
                    return;
                }
                Some(_) => {
                    let _ = self.consume_component_value();
                }
            }
        }
    }

    /// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-qualified-rule)
    fn consume_qualified_rule(&mut self) -> Option<StyleRule> {
        let mut prelude = Vec::new();

        loop {
            match self.peek() {
                // "<EOF-token>: This is a parse error. Return nothing."
                None | Some(CssToken::EndOfFile) => return None,

                // "<{-token>: Consume a simple block and assign it to the
                // qualified rule's block. Return the qualified rule."
                Some(CssToken::LeftBrace) => {
                    let _ = self.consume(); // {
                    let selectors = split_selector_list(&prelude);
                    let declarations = self.consume_list_of_declarations();
                    if self.peek() == Some(&CssToken::RightBrace) {
                        let _ = self.consume();
                    }
                    return Some(StyleRule {
                        selectors,
                        declarations,
                    });
                }

                // "anything else: ... Append the returned value to the
                // qualified rule's prelude."
                Some(_) => {
                    if let Some(token) = self.consume().cloned() {
                        prelude.push(token);
                    }
                }
            }
        }
    }

    /// [§ 5.4.5 Consume a list of declarations](https://www.w3.org/TR/css-syntax-3/#consume-list-of-declarations)
    fn consume_list_of_declarations(&mut self) -> Vec<Declaration> {
        let mut declarations = Vec::new();

        loop {
            match self.peek() {
                // "<whitespace-token> or <semicolon-token>: Do nothing."
                Some(CssToken::Whitespace | CssToken::Semicolon) => {
                    let _ = self.consume();
                }

                // "<EOF-token> or <}-token>: Return the list of declarations."
                None | Some(CssToken::EndOfFile | CssToken::RightBrace) => {
                    return declarations;
                }

                // "<ident-token>: Consume a declaration. If anything was
                // returned, append it to the list of declarations."
                Some(CssToken::Ident(_)) => {
                    if let Some(decl) = self.consume_declaration() {
                        declarations.push(decl);
                    }
                }

                // "anything else: This is a parse error... consume a
                // component value and throw away the returned value."
                Some(_) => {
                    let _ = self.consume();
                    while !matches!(
                        self.peek(),
                        None | Some(CssToken::Semicolon | CssToken::RightBrace | CssToken::EndOfFile)
                    ) {
                        let _ = self.consume_component_value();
                    }
                }
            }
        }
    }

    /// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
    fn consume_declaration(&mut self) -> Option<Declaration> {
        let name = match self.consume() {
            Some(CssToken::Ident(name)) => name.to_ascii_lowercase(),
            _ => return None,
        };

        while self.peek() == Some(&CssToken::Whitespace) {
            let _ = self.consume();
        }

        // "If the next input token is anything other than a <colon-token>,
        // this is a parse error. Return nothing."
        if self.peek() != Some(&CssToken::Colon) {
            return None;
        }
        let _ = self.consume(); // :

        while self.peek() == Some(&CssToken::Whitespace) {
            let _ = self.consume();
        }

        let mut value = Vec::new();
        while !matches!(
            self.peek(),
            None | Some(CssToken::EndOfFile | CssToken::Semicolon | CssToken::RightBrace)
        ) {
            if let Some(v) = self.consume_component_value() {
                value.push(v);
            }
        }

        let important = check_important(&value);
        let value = trim_important(value);

        Some(Declaration {
            name,
            value,
            important,
        })
    }

    /// [§ 5.4.8 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
    fn consume_component_value(&mut self) -> Option<ComponentValue> {
        match self.peek() {
            Some(CssToken::LeftBrace | CssToken::LeftBracket | CssToken::LeftParen) => {
                let token = match self.peek() {
                    Some(CssToken::LeftBracket) => '[',
                    Some(CssToken::LeftParen) => '(',
                    _ => '{',
                };
                let value = self.consume_simple_block();
                Some(ComponentValue::Block { token, value })
            }

            Some(CssToken::Function(_)) => {
                let name = match self.consume() {
                    Some(CssToken::Function(name)) => name.clone(),
                    _ => return None,
                };
                let mut value = Vec::new();
                loop {
                    match self.peek() {
                        Some(CssToken::RightParen) => {
                            let _ = self.consume();
                            break;
                        }
                        None | Some(CssToken::EndOfFile) => break,
                        Some(_) => {
                            if let Some(v) = self.consume_component_value() {
                                value.push(v);
                            }
                        }
                    }
                }
                Some(ComponentValue::Function { name, value })
            }

            Some(_) => self
                .consume()
                .cloned()
                .map(ComponentValue::Token),

            None => None,
        }
    }

    /// [§ 5.4.7 Consume a simple block](https://www.w3.org/TR/css-syntax-3/#consume-simple-block)
    fn consume_simple_block(&mut self) -> Vec<ComponentValue> {
        let ending = match self.consume() {
            Some(CssToken::LeftBrace) => CssToken::RightBrace,
            Some(CssToken::LeftBracket) => CssToken::RightBracket,
            Some(CssToken::LeftParen) => CssToken::RightParen,
            _ => return Vec::new(),
        };

        let mut value = Vec::new();
        loop {
            match self.peek() {
                Some(token) if *token == ending => {
                    let _ = self.consume();
                    return value;
                }
                None | Some(CssToken::EndOfFile) => return value,
                Some(_) => {
                    if let Some(v) = self.consume_component_value() {
                        value.push(v);
                    }
                }
            }
        }
    }
}

/// [§ 5.1 Selector Lists](https://www.w3.org/TR/selectors-4/#selector-list)
///
/// "A selector list is a comma-separated list of selectors."
///
/// Split prelude tokens on commas into raw selector texts.
fn split_selector_list(prelude: &[CssToken]) -> Vec<Selector> {
    let mut selectors = Vec::new();
    let mut current = String::new();

    for token in prelude {
        if *token == CssToken::Comma {
            push_selector(&mut selectors, &current);
            current.clear();
        } else {
            current.push_str(&token.to_string());
        }
    }
    push_selector(&mut selectors, &current);

    selectors
}

fn push_selector(selectors: &mut Vec<Selector>, text: &str) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        selectors.push(Selector {
            text: trimmed.to_string(),
        });
    }
}

/// Check whether the trailing component values are `! important`.
fn check_important(value: &[ComponentValue]) -> bool {
    let meaningful: Vec<&ComponentValue> = value.iter().filter(|v| !v.is_whitespace()).collect();
    let n = meaningful.len();
    n >= 2
        && matches!(meaningful[n - 2], ComponentValue::Token(CssToken::Delim('!')))
        && matches!(
            meaningful[n - 1],
            ComponentValue::Token(CssToken::Ident(name)) if name.eq_ignore_ascii_case("important")
        )
}

/// Remove a trailing `! important` (and surrounding whitespace) from a value.
fn trim_important(mut value: Vec<ComponentValue>) -> Vec<ComponentValue> {
    if !check_important(&value) {
        while value.last().is_some_and(ComponentValue::is_whitespace) {
            let _ = value.pop();
        }
        return value;
    }

    // Drop the ident, the bang, and any whitespace in between or before.
    let mut dropped_idents = 0;
    while let Some(last) = value.last() {
        match last {
            ComponentValue::Token(CssToken::Whitespace) => {
                let _ = value.pop();
            }
            ComponentValue::Token(CssToken::Ident(_)) if dropped_idents == 0 => {
                dropped_idents += 1;
                let _ = value.pop();
            }
            ComponentValue::Token(CssToken::Delim('!')) => {
                let _ = value.pop();
                break;
            }
            _ => break,
        }
    }
    while value.last().is_some_and(ComponentValue::is_whitespace) {
        let _ = value.pop();
    }
    value
}
