//! Conversion pipeline: HTML and CSS in, component-definition YAML out.
//!
//! The pipeline stages are:
//!
//! 1. Tokenize and parse the HTML into a DOM tree (`wyvern-html`)
//! 2. Collect CSS from `<style>` elements, then any separate stylesheet
//!    text, into one source-ordered stylesheet (`wyvern-css`)
//! 3. Map elements to controls and resolve each one's style into a fixed
//!    property set ([`builder`], [`mapper`], [`color`])
//! 4. Emit YAML and parse it back to prove it well-formed ([`serialize`],
//!    [`validate`])
//!
//! Conversion is best-effort: malformed CSS values fall back or drop out
//! with warnings, and only an empty input, a rootless document, or a
//! broken emission surface as [`ConvertError`].

/// Component tree construction from the DOM.
pub mod builder;
/// Color normalization to `RGBA` form.
pub mod color;
/// Conversion error types.
pub mod error;
/// Element-to-control mapping and naming.
pub mod mapper;
/// YAML emission.
pub mod serialize;
/// YAML validation.
pub mod validate;

pub use builder::{ControlNode, Property, PropertyName, TreeBuilder};
pub use color::{Rgba, normalize};
pub use error::ConvertError;
pub use mapper::{ControlKind, control_name};
pub use serialize::serialize;
pub use validate::validate;

use wyvern_css::Stylesheet;
use wyvern_dom::{DomTree, NodeId};
use wyvern_html::{HtmlParser, HtmlTokenizer};

/// Convert an HTML document (plus optional separate CSS text) to
/// component-definition YAML.
///
/// # Errors
///
/// [`ConvertError::EmptyInput`] for whitespace-only input,
/// [`ConvertError::NoRootElement`] when nothing convertible remains
/// after parsing, and [`ConvertError::Syntax`] when the emitted YAML
/// fails to parse back.
pub fn convert(html: &str, extra_css: Option<&str>) -> Result<String, ConvertError> {
    let roots = build_component_tree(html, extra_css)?;
    let document = serialize(&roots);
    validate(&document)?;
    Ok(document)
}

/// Run the whole pipeline for its errors only, discarding the output.
///
/// # Errors
///
/// The same errors as [`convert`].
pub fn validate_only(html: &str, extra_css: Option<&str>) -> Result<(), ConvertError> {
    let _ = convert(html, extra_css)?;
    Ok(())
}

/// Run the pipeline up to the component tree, without emitting YAML.
///
/// # Errors
///
/// [`ConvertError::EmptyInput`] and [`ConvertError::NoRootElement`] as
/// for [`convert`].
pub fn build_component_tree(
    html: &str,
    extra_css: Option<&str>,
) -> Result<Vec<ControlNode>, ConvertError> {
    if html.trim().is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let tree = parse_html(html);
    let stylesheet = collect_stylesheet(&tree, extra_css);

    let builder = TreeBuilder::new(&tree, &stylesheet);
    let roots = builder.build_nodes(&root_elements(&tree));
    if roots.is_empty() {
        return Err(ConvertError::NoRootElement);
    }

    Ok(roots)
}

/// Tokenize and parse HTML into a DOM tree.
fn parse_html(html: &str) -> DomTree {
    let mut tokenizer = HtmlTokenizer::new(html.to_string());
    tokenizer.run();
    HtmlParser::new(tokenizer.into_tokens()).run()
}

/// Collect `<style>` element CSS first, then separate stylesheet text,
/// so the separate text wins source-order ties.
fn collect_stylesheet(tree: &DomTree, extra_css: Option<&str>) -> Stylesheet {
    let mut stylesheet = wyvern_css::parse_stylesheet_text(&wyvern_css::extract_style_content(tree));
    if let Some(css) = extra_css {
        stylesheet.extend(wyvern_css::parse_stylesheet_text(css));
    }
    stylesheet
}

/// The elements conversion starts from: the body's element children when
/// a body exists, otherwise the document's own top-level elements
/// (descending through bare `<html>` or `<body>` wrappers).
fn root_elements(tree: &DomTree) -> Vec<NodeId> {
    if let Some(body) = tree.body() {
        return tree.element_children(body);
    }

    let mut tops = tree.element_children(tree.root());
    while let [only] = tops.as_slice() {
        let Some(element) = tree.as_element(*only) else { break };
        let tag = element.tag_name.as_str();
        if tag.eq_ignore_ascii_case("html") || tag.eq_ignore_ascii_case("body") {
            tops = tree.element_children(*only);
        } else {
            break;
        }
    }
    tops
}
