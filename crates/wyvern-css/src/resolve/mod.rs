//! Style resolution per [CSS Cascading and Inheritance Level 4](https://www.w3.org/TR/css-cascade-4/).
//!
//! A deliberately flat cascade: rules apply in source order with no
//! specificity weighting, later declarations overwrite earlier ones for
//! the same property, and inline `style` attributes are applied last.
//! Shorthands (`padding`, `border`, `border-radius`, `background`) are
//! expanded into their longhands at application time.

use wyvern_common::warning::warn_once;
use wyvern_dom::ElementData;

use crate::parser::{ComponentValue, Declaration, Stylesheet, component_values_to_text};
use crate::selector::parse_selector;

/// The resolved declarations for a single element.
///
/// Properties keep first-set order; re-setting a property overwrites its
/// value in place. [§ 6.1](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
/// "The last declaration in document order wins."
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedStyle {
    entries: Vec<(String, String)>,
}

impl ResolvedStyle {
    /// Create an empty resolved style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set a property, overwriting any earlier value in place.
    pub fn set(&mut self, name: &str, value: String) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name.to_string(), value));
        }
    }

    /// Look up a property value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate properties in first-set order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Whether no properties are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of properties set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Resolve an element's style against a stylesheet, then apply its inline
/// `style` attribute on top.
///
/// [§ 6.2 Cascade Origins](https://www.w3.org/TR/css-cascade-4/#cascading-origins)
/// treats the style attribute as the highest-precedence author source.
#[must_use]
pub fn resolve(element: &ElementData, stylesheet: &Stylesheet) -> ResolvedStyle {
    let mut style = resolve_stylesheet(element, stylesheet);

    if let Some(inline) = element.attr("style") {
        for declaration in crate::parse_inline_declarations(inline) {
            apply_declaration(&mut style, &declaration);
        }
    }

    style
}

/// Replay the stylesheet's rules in source order against one element.
#[must_use]
pub fn resolve_stylesheet(element: &ElementData, stylesheet: &Stylesheet) -> ResolvedStyle {
    let mut style = ResolvedStyle::new();

    for rule in &stylesheet.rules {
        let mut matched = false;
        let mut any_parsed = false;

        for selector in &rule.selectors {
            if let Some(compound) = parse_selector(&selector.text) {
                any_parsed = true;
                if compound.matches(element) {
                    matched = true;
                    break;
                }
            }
        }

        if !any_parsed {
            let list = rule
                .selectors
                .iter()
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            warn_once("CSS", &format!("skipping rule with unsupported selector \"{list}\""));
            continue;
        }

        if matched {
            for declaration in &rule.declarations {
                apply_declaration(&mut style, declaration);
            }
        }
    }

    style
}

/// Apply one declaration, expanding supported shorthands.
pub fn apply_declaration(style: &mut ResolvedStyle, declaration: &Declaration) {
    match declaration.name.as_str() {
        "padding" => expand_box_shorthand(
            style,
            &declaration.value,
            ["padding-top", "padding-right", "padding-bottom", "padding-left"],
        ),
        "border-radius" => expand_corner_shorthand(style, &declaration.value),
        "border" => expand_border_shorthand(style, &declaration.value),
        "background" => expand_background_shorthand(style, &declaration.value),
        _ => {
            let value = declaration.value_text();
            if !value.is_empty() {
                style.set(&declaration.name, value);
            }
        }
    }
}

/// Split a component value list on whitespace into rendered value strings.
fn split_values(value: &[ComponentValue]) -> Vec<String> {
    split_component_groups(value)
        .iter()
        .map(|g| component_values_to_text(g))
        .collect()
}

/// [§ 8.4 `padding`](https://www.w3.org/TR/css-box-4/#padding-shorthand)
///
/// "If there is only one component value, it applies to all sides. If
/// there are two values, the top and bottom are set to the first value
/// and the right and left are set to the second. If there are three
/// values, the top is set to the first value, the left and right are set
/// to the second, and the bottom is set to the third. If there are four
/// values, they apply to the top, right, bottom, and left."
fn expand_box_shorthand(style: &mut ResolvedStyle, value: &[ComponentValue], sides: [&str; 4]) {
    let values = split_values(value);
    let [top, right, bottom, left] = sides;

    let (t, r, b, l) = match values.as_slice() {
        [all] => (all, all, all, all),
        [tb, rl] => (tb, rl, tb, rl),
        [t, rl, b] => (t, rl, b, rl),
        [t, r, b, l] => (t, r, b, l),
        _ => return,
    };

    style.set(top, t.clone());
    style.set(right, r.clone());
    style.set(bottom, b.clone());
    style.set(left, l.clone());
}

/// [§ 5.1 `border-radius`](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
///
/// Values apply to the top-left, top-right, bottom-right, and bottom-left
/// corners, with the two- and three-value forms filling in diagonally.
fn expand_corner_shorthand(style: &mut ResolvedStyle, value: &[ComponentValue]) {
    let values = split_values(value);

    let (tl, tr, br, bl) = match values.as_slice() {
        [all] => (all, all, all, all),
        [a, b] => (a, b, a, b),
        [a, b, c] => (a, b, c, b),
        [a, b, c, d] => (a, b, c, d),
        _ => return,
    };

    style.set("border-top-left-radius", tl.clone());
    style.set("border-top-right-radius", tr.clone());
    style.set("border-bottom-right-radius", br.clone());
    style.set("border-bottom-left-radius", bl.clone());
}

const BORDER_STYLE_KEYWORDS: [&str; 10] = [
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

/// [§ 4.4 `border`](https://www.w3.org/TR/css-backgrounds-3/#the-border-shorthands)
///
/// Components are sorted by kind rather than position: numeric values set
/// the width, line-style keywords set the style, everything else sets the
/// color.
fn expand_border_shorthand(style: &mut ResolvedStyle, value: &[ComponentValue]) {
    use crate::tokenizer::CssToken;

    for group in split_component_groups(value) {
        let rendered = component_values_to_text(&group);
        if rendered.is_empty() {
            continue;
        }

        let is_width = matches!(
            group.first(),
            Some(ComponentValue::Token(
                CssToken::Dimension { .. } | CssToken::Number { .. }
            ))
        );
        let is_style = matches!(
            group.first(),
            Some(ComponentValue::Token(CssToken::Ident(name)))
                if BORDER_STYLE_KEYWORDS.contains(&name.to_ascii_lowercase().as_str())
        );

        if is_width {
            style.set("border-width", rendered);
        } else if is_style {
            style.set("border-style", rendered);
        } else {
            style.set("border-color", rendered);
        }
    }
}

const BACKGROUND_NON_COLOR_KEYWORDS: [&str; 17] = [
    "none",
    "repeat",
    "repeat-x",
    "repeat-y",
    "no-repeat",
    "space",
    "round",
    "scroll",
    "fixed",
    "local",
    "center",
    "top",
    "bottom",
    "left",
    "right",
    "cover",
    "contain",
];

/// [§ 3.10 `background`](https://www.w3.org/TR/css-backgrounds-3/#the-background)
///
/// Only the color component is meaningful to the converter; the first
/// color-shaped value becomes `background-color` and the rest is dropped.
fn expand_background_shorthand(style: &mut ResolvedStyle, value: &[ComponentValue]) {
    use crate::tokenizer::CssToken;

    for group in split_component_groups(value) {
        let looks_like_color = match group.first() {
            Some(ComponentValue::Token(CssToken::Hash(_))) => true,
            Some(ComponentValue::Function { name, .. }) => {
                matches!(name.to_ascii_lowercase().as_str(), "rgb" | "rgba" | "hsl" | "hsla")
            }
            Some(ComponentValue::Token(CssToken::Ident(name))) => {
                !BACKGROUND_NON_COLOR_KEYWORDS.contains(&name.to_ascii_lowercase().as_str())
            }
            _ => false,
        };

        if looks_like_color {
            style.set("background-color", component_values_to_text(&group));
            return;
        }
    }
}

/// Like [`split_values`] but keeping the component values themselves.
fn split_component_groups(value: &[ComponentValue]) -> Vec<Vec<ComponentValue>> {
    let mut groups: Vec<Vec<ComponentValue>> = Vec::new();
    let mut current: Vec<ComponentValue> = Vec::new();

    for v in value {
        if v.is_whitespace() {
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
        } else {
            current.push(v.clone());
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }

    groups
}
