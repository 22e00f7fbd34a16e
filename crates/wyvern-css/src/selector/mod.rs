//! Selector parsing and matching per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
//!
//! Only simple selectors and compound selectors are supported: type,
//! class, id, and universal, optionally chained (`p.note#intro`).
//! Combinators, attribute selectors, and pseudo-classes/elements do not
//! parse; rules carrying them are skipped by the resolver with a warning.

use wyvern_dom::ElementData;

/// [§ 4 Simple Selectors](https://www.w3.org/TR/selectors-4/#simple)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors), e.g. `div`
    Type(String),
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html), e.g. `.card`
    Class(String),
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors), e.g. `#main`
    Id(String),
    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#the-universal-selector), `*`
    Universal,
}

impl SimpleSelector {
    /// [§ 3.1 "a selector represents a particular pattern of element(s)"](https://www.w3.org/TR/selectors-4/#overview)
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        match self {
            Self::Type(name) => element.tag_name.eq_ignore_ascii_case(name),
            Self::Class(name) => element.has_class(name),
            Self::Id(name) => element.id().is_some_and(|id| id == name),
            Self::Universal => true,
        }
    }
}

/// [§ 4.2 Compound selector](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSelector {
    /// The simple selectors, all of which must match.
    pub parts: Vec<SimpleSelector>,
}

impl CompoundSelector {
    /// An element matches a compound selector when it matches every
    /// simple selector in it.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        self.parts.iter().all(|part| part.matches(element))
    }
}

/// Parse raw selector text into a compound selector.
///
/// Returns `None` for anything outside the supported subset (combinators,
/// pseudo-classes, attribute selectors), letting the caller decide how to
/// report the skip.
#[must_use]
pub fn parse_selector(text: &str) -> Option<CompoundSelector> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    // Internal whitespace means a descendant combinator.
    if text.chars().any(char::is_whitespace) {
        return None;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut position = 0;
    let mut parts = Vec::new();

    while position < chars.len() {
        match chars[position] {
            '*' => {
                parts.push(SimpleSelector::Universal);
                position += 1;
            }
            '.' => {
                position += 1;
                let name = consume_name(&chars, &mut position)?;
                parts.push(SimpleSelector::Class(name));
            }
            '#' => {
                position += 1;
                let name = consume_name(&chars, &mut position)?;
                parts.push(SimpleSelector::Id(name));
            }
            c if is_name_char(c) => {
                let name = consume_name(&chars, &mut position)?;
                parts.push(SimpleSelector::Type(name.to_ascii_lowercase()));
            }
            // Combinators (`>`, `+`, `~`), pseudo (`:`), attribute (`[`),
            // and anything else unsupported.
            _ => return None,
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(CompoundSelector { parts })
    }
}

fn consume_name(chars: &[char], position: &mut usize) -> Option<String> {
    let start = *position;
    while *position < chars.len() && is_name_char(chars[*position]) {
        *position += 1;
    }
    if *position == start {
        return None;
    }
    Some(chars[start..*position].iter().collect())
}

const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn element(tag: &str, id: Option<&str>, classes: &str) -> ElementData {
        let mut attrs = HashMap::new();
        if let Some(id) = id {
            let _ = attrs.insert("id".to_string(), id.to_string());
        }
        if !classes.is_empty() {
            let _ = attrs.insert("class".to_string(), classes.to_string());
        }
        ElementData {
            tag_name: tag.to_string(),
            attrs,
        }
    }

    #[test]
    fn type_selector_matches_tag() {
        let sel = parse_selector("div").unwrap();
        assert!(sel.matches(&element("div", None, "")));
        assert!(!sel.matches(&element("p", None, "")));
    }

    #[test]
    fn class_selector_matches_any_class() {
        let sel = parse_selector(".card").unwrap();
        assert!(sel.matches(&element("div", None, "card shadow")));
        assert!(!sel.matches(&element("div", None, "cardinal")));
    }

    #[test]
    fn id_selector_is_exact() {
        let sel = parse_selector("#main").unwrap();
        assert!(sel.matches(&element("div", Some("main"), "")));
        assert!(!sel.matches(&element("div", Some("mainframe"), "")));
        assert!(!sel.matches(&element("div", None, "")));
    }

    #[test]
    fn universal_matches_everything() {
        let sel = parse_selector("*").unwrap();
        assert!(sel.matches(&element("span", None, "")));
    }

    #[test]
    fn compound_requires_all_parts() {
        let sel = parse_selector("p.note#intro").unwrap();
        assert!(sel.matches(&element("p", Some("intro"), "note")));
        assert!(!sel.matches(&element("p", Some("intro"), "other")));
        assert!(!sel.matches(&element("div", Some("intro"), "note")));
    }

    #[test]
    fn unsupported_syntax_does_not_parse() {
        assert!(parse_selector("div p").is_none());
        assert!(parse_selector("div > p").is_none());
        assert!(parse_selector("a:hover").is_none());
        assert!(parse_selector("[href]").is_none());
        assert!(parse_selector("").is_none());
    }

    #[test]
    fn type_selector_is_case_insensitive() {
        let sel = parse_selector("DIV").unwrap();
        assert!(sel.matches(&element("div", None, "")));
    }
}
