//! Element-to-control mapping.
//!
//! Every HTML element converts to exactly one control kind, chosen by a
//! fixed tag table, and gets a name derived from its `id`, first class,
//! or tag.

use serde::Serialize;
use strum_macros::Display;
use wyvern_dom::ElementData;

/// The control kinds a converted document can contain, pinned to the
/// template versions the target runtime ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum ControlKind {
    /// Generic layout container.
    #[strum(serialize = "GroupContainer@1.4.0")]
    #[serde(rename = "GroupContainer@1.4.0")]
    GroupContainer,
    /// Clickable button.
    #[strum(serialize = "Button@0.0.45")]
    #[serde(rename = "Button@0.0.45")]
    Button,
    /// Static text.
    #[strum(serialize = "Label@2.5.1")]
    #[serde(rename = "Label@2.5.1")]
    Label,
    /// Image placeholder.
    #[strum(serialize = "Image@2.2.3")]
    #[serde(rename = "Image@2.2.3")]
    Image,
    /// Single-line text input.
    #[strum(serialize = "TextInput@0.0.54")]
    #[serde(rename = "TextInput@0.0.54")]
    TextInput,
}

impl ControlKind {
    /// Map a tag name to its control kind. Unknown tags become labels.
    #[must_use]
    pub fn for_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "div" | "section" | "header" | "footer" | "main" => Self::GroupContainer,
            "button" => Self::Button,
            "img" => Self::Image,
            "input" => Self::TextInput,
            _ => Self::Label,
        }
    }
}

/// Derive a control's base name from its element.
///
/// Precedence: `id` (first letter capitalized, otherwise verbatim), then
/// the first class converted from kebab-case to PascalCase, then
/// `{Tag}Control`.
#[must_use]
pub fn control_name(element: &ElementData) -> String {
    if let Some(id) = element.id() {
        let name = capitalize_first(id);
        if !name.is_empty() {
            return name;
        }
    }

    if let Some(class) = element.classes().first() {
        let name = pascal_case(class);
        if !name.is_empty() {
            return name;
        }
    }

    format!("{}Control", pascal_case(&element.tag_name))
}

/// Uppercase the first letter, leaving the rest as written.
#[must_use]
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.trim().chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

/// Convert kebab-case (or snake_case) to PascalCase.
///
/// `nav-bar` becomes `NavBar`; already-capitalized segments keep their
/// remaining letters as written.
#[must_use]
pub fn pascal_case(input: &str) -> String {
    input
        .split(['-', '_'])
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect()
}
