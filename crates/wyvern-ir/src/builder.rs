//! Component tree construction.
//!
//! Walks the DOM bottom-up, resolving each element's style and producing
//! an immutable [`ControlNode`] tree. Properties are emitted in a fixed
//! order, and only when they carry a meaningful value; a control with no
//! properties simply has none.

use std::collections::HashMap;

use serde::Serialize;
use strum_macros::Display;
use wyvern_common::warning::warn_once;
use wyvern_css::resolve::{ResolvedStyle, resolve};
use wyvern_css::Stylesheet;
use wyvern_dom::{DomTree, NodeId};

use crate::color::normalize;
use crate::mapper::{ControlKind, control_name};

/// Elements that carry document metadata rather than content; their
/// subtrees produce no controls.
const SKIPPED_ELEMENTS: [&str; 6] = ["head", "link", "meta", "script", "style", "title"];

/// The properties a control can carry, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum PropertyName {
    /// Text content, leaf controls only.
    Text,
    /// Background color.
    Fill,
    /// Foreground text color.
    Color,
    /// Width in pixels.
    Width,
    /// Height in pixels.
    Height,
    /// Top padding in pixels.
    PaddingTop,
    /// Right padding in pixels.
    PaddingRight,
    /// Bottom padding in pixels.
    PaddingBottom,
    /// Left padding in pixels.
    PaddingLeft,
    /// Border width in pixels.
    BorderThickness,
    /// Border line style.
    BorderStyle,
    /// Border color.
    BorderColor,
    /// Top-left corner radius in pixels.
    RadiusTopLeft,
    /// Top-right corner radius in pixels.
    RadiusTopRight,
    /// Bottom-left corner radius in pixels.
    RadiusBottomLeft,
    /// Bottom-right corner radius in pixels.
    RadiusBottomRight,
    /// Font weight.
    FontWeight,
    /// Font size in pixels.
    FontSize,
}

/// A single property on a control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    /// The property name.
    pub name: PropertyName,
    /// The property value expression.
    pub value: String,
}

/// One node of the component tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlNode {
    /// The control's name, unique among its siblings.
    pub name: String,
    /// The control kind.
    pub control: ControlKind,
    /// Properties in emission order; empty means none are emitted.
    pub properties: Vec<Property>,
    /// Child controls in document order.
    pub children: Vec<ControlNode>,
}

impl ControlNode {
    /// Look up a property's value.
    #[must_use]
    pub fn property(&self, name: PropertyName) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

/// Builds [`ControlNode`] trees from a parsed document and stylesheet.
pub struct TreeBuilder<'a> {
    tree: &'a DomTree,
    stylesheet: &'a Stylesheet,
}

impl<'a> TreeBuilder<'a> {
    /// Create a builder over a document and its resolved stylesheet.
    #[must_use]
    pub const fn new(tree: &'a DomTree, stylesheet: &'a Stylesheet) -> Self {
        Self { tree, stylesheet }
    }

    /// Build controls for a sibling list, deduplicating names with a
    /// per-parent counter: the first `DivControl` keeps its name, the
    /// next becomes `DivControl2`, then `DivControl3`.
    #[must_use]
    pub fn build_nodes(&self, ids: &[NodeId]) -> Vec<ControlNode> {
        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut nodes = Vec::new();

        for &id in ids {
            let Some(mut node) = self.build_node(id) else {
                continue;
            };
            let count = seen.entry(node.name.clone()).or_insert(0);
            *count += 1;
            if *count > 1 {
                node.name = format!("{}{count}", node.name);
            }
            nodes.push(node);
        }

        nodes
    }

    /// Build the control for one element, or `None` for metadata
    /// elements.
    fn build_node(&self, id: NodeId) -> Option<ControlNode> {
        let element = self.tree.as_element(id)?;
        if SKIPPED_ELEMENTS.contains(&element.tag_name.as_str()) {
            return None;
        }

        let children = self.build_nodes(&self.tree.element_children(id));
        let style = resolve(element, self.stylesheet);

        // Inputs have no text children; their value attribute stands in.
        let text = if children.is_empty() {
            leaf_text(self.tree, id).or_else(|| {
                element
                    .attr("value")
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
            })
        } else {
            None
        };

        Some(ControlNode {
            name: control_name(element),
            control: ControlKind::for_tag(&element.tag_name),
            properties: build_properties(&style, text.as_deref()),
            children,
        })
    }
}

/// Collapse a leaf element's text content to a single line.
fn leaf_text(tree: &DomTree, id: NodeId) -> Option<String> {
    let content = tree.text_content(id);
    let collapsed = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Compute a control's properties in emission order, omitting everything
/// without a meaningful value.
fn build_properties(style: &ResolvedStyle, text: Option<&str>) -> Vec<Property> {
    let mut properties = Vec::new();
    let mut push = |name: PropertyName, value: Option<String>| {
        if let Some(value) = value {
            properties.push(Property { name, value });
        }
    };

    push(PropertyName::Text, text.map(text_expression));
    push(PropertyName::Fill, color_expression(style, "background-color"));
    push(PropertyName::Color, color_expression(style, "color"));
    push(PropertyName::Width, length_expression(style, "width"));
    push(PropertyName::Height, length_expression(style, "height"));
    push(PropertyName::PaddingTop, length_expression(style, "padding-top"));
    push(PropertyName::PaddingRight, length_expression(style, "padding-right"));
    push(PropertyName::PaddingBottom, length_expression(style, "padding-bottom"));
    push(PropertyName::PaddingLeft, length_expression(style, "padding-left"));
    push(PropertyName::BorderThickness, length_expression(style, "border-width"));
    push(PropertyName::BorderStyle, border_style_expression(style));
    push(PropertyName::BorderColor, color_expression(style, "border-color"));
    push(
        PropertyName::RadiusTopLeft,
        length_expression(style, "border-top-left-radius"),
    );
    push(
        PropertyName::RadiusTopRight,
        length_expression(style, "border-top-right-radius"),
    );
    push(
        PropertyName::RadiusBottomLeft,
        length_expression(style, "border-bottom-left-radius"),
    );
    push(
        PropertyName::RadiusBottomRight,
        length_expression(style, "border-bottom-right-radius"),
    );
    push(PropertyName::FontWeight, font_weight_expression(style));
    push(PropertyName::FontSize, length_expression(style, "font-size"));

    properties
}

/// A leaf's text as a formula string literal, with embedded quotes
/// doubled.
fn text_expression(text: &str) -> String {
    format!("=\"{}\"", text.replace('"', "\"\""))
}

/// An `=RGBA(r, g, b, a)` expression. Fully transparent colors are
/// omitted rather than painted.
fn color_expression(style: &ResolvedStyle, property: &str) -> Option<String> {
    let color = normalize(style.get(property)?);
    if color.is_transparent() {
        return None;
    }
    Some(format!("=RGBA({color})"))
}

/// An integer pixel count formula. Zero and unparsable lengths are
/// omitted.
fn length_expression(style: &ResolvedStyle, property: &str) -> Option<String> {
    let value = style.get(property)?;
    let Some(px) = parse_pixels(value) else {
        warn_once("IR", &format!("ignoring unparseable {property} value \"{value}\""));
        return None;
    };
    (px != 0).then(|| format!("={px}"))
}

/// Parse the integer part of a length value, truncating any fraction and
/// ignoring any unit suffix.
fn parse_pixels(value: &str) -> Option<i64> {
    let value = value.trim();
    let end = value
        .char_indices()
        .take_while(|(i, c)| {
            c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+'))
        })
        .map(|(i, c)| i + c.len_utf8())
        .last()?;
    let number: f64 = value[..end].parse().ok()?;
    Some(number.trunc() as i64)
}

/// `=BorderStyle.Solid` and friends. `none` and unknown styles are
/// omitted.
fn border_style_expression(style: &ResolvedStyle) -> Option<String> {
    let variant = match style.get("border-style")?.to_ascii_lowercase().as_str() {
        "solid" => "Solid",
        "dashed" => "Dashed",
        "dotted" => "Dotted",
        _ => return None,
    };
    Some(format!("=BorderStyle.{variant}"))
}

/// `=FontWeight.Bold` above 600, `=FontWeight.Semibold` from 500 through
/// 600. Normal weights are omitted.
fn font_weight_expression(style: &ResolvedStyle) -> Option<String> {
    let value = style.get("font-weight")?.to_ascii_lowercase();
    let weight: f64 = match value.as_str() {
        "bold" => 700.0,
        "normal" => 400.0,
        other => other.trim().parse().ok()?,
    };

    if weight > 600.0 {
        Some("=FontWeight.Bold".to_string())
    } else if weight >= 500.0 {
        Some("=FontWeight.Semibold".to_string())
    } else {
        None
    }
}
