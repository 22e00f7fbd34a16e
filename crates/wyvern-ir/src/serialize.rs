//! YAML emission for component trees.
//!
//! The output grammar is fixed: two-space indentation, dash list items,
//! and a `|-` literal block scalar for `Text` so formula strings survive
//! quoting untouched. The emitter is deliberately hand-rolled; the
//! grammar is small and the exact layout is part of the contract with
//! the consuming runtime.

use crate::builder::{ControlNode, PropertyName};

const INDENT: &str = "  ";

/// Serialize a list of root controls to a YAML document.
///
/// The document always ends with a trailing newline; an empty root list
/// yields an empty string.
#[must_use]
pub fn serialize(roots: &[ControlNode]) -> String {
    let mut out = String::new();
    for root in roots {
        write_node(&mut out, root, 0);
    }
    out
}

/// Write one `- Name:` list item and its body.
///
/// `depth` counts indent units at the dash. The body sits two units
/// deeper: one for the dash, one for nesting under the name.
fn write_node(out: &mut String, node: &ControlNode, depth: usize) {
    push_indent(out, depth);
    out.push_str("- ");
    out.push_str(&node.name);
    out.push_str(":\n");

    let body = depth + 2;

    push_indent(out, body);
    out.push_str("Control: ");
    out.push_str(&node.control.to_string());
    out.push('\n');

    if !node.properties.is_empty() {
        push_indent(out, body);
        out.push_str("Properties:\n");
        for property in &node.properties {
            write_property(out, property.name, &property.value, body + 1);
        }
    }

    if !node.children.is_empty() {
        push_indent(out, body);
        out.push_str("Children:\n");
        for child in &node.children {
            write_node(out, child, body + 1);
        }
    }
}

/// `Text` uses a literal block scalar; everything else is a plain scalar
/// on one line.
fn write_property(out: &mut String, name: PropertyName, value: &str, depth: usize) {
    push_indent(out, depth);
    if name == PropertyName::Text {
        out.push_str("Text: |-\n");
        push_indent(out, depth + 1);
        out.push_str(value);
        out.push('\n');
    } else {
        out.push_str(&name.to_string());
        out.push_str(": ");
        out.push_str(value);
        out.push('\n');
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
