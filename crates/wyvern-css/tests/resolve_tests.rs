//! Tests for CSS cascade and style resolution.

use std::collections::HashMap;

use wyvern_css::{parse_stylesheet_text, resolve};
use wyvern_dom::ElementData;

fn element(tag: &str, attrs: &[(&str, &str)]) -> ElementData {
    let mut map = HashMap::new();
    for (name, value) in attrs {
        let _ = map.insert((*name).to_string(), (*value).to_string());
    }
    ElementData {
        tag_name: tag.to_string(),
        attrs: map,
    }
}

#[test]
fn matching_rule_applies() {
    let sheet = parse_stylesheet_text("p { color: red; }");
    let style = resolve(&element("p", &[]), &sheet);
    assert_eq!(style.get("color"), Some("red"));
}

#[test]
fn non_matching_rule_is_ignored() {
    let sheet = parse_stylesheet_text("div { color: red; }");
    let style = resolve(&element("p", &[]), &sheet);
    assert!(style.is_empty());
}

#[test]
fn later_rule_wins_regardless_of_selector_kind() {
    // No specificity: the id rule loses to the later type rule.
    let sheet = parse_stylesheet_text("#main { color: red; } p { color: blue; }");
    let style = resolve(&element("p", &[("id", "main")]), &sheet);
    assert_eq!(style.get("color"), Some("blue"));
}

#[test]
fn inline_style_wins_last() {
    let sheet = parse_stylesheet_text("p { color: red; }");
    let style = resolve(&element("p", &[("style", "color: green")]), &sheet);
    assert_eq!(style.get("color"), Some("green"));
}

#[test]
fn unrelated_properties_accumulate() {
    let sheet = parse_stylesheet_text("p { color: red; } .note { width: 100px; }");
    let style = resolve(&element("p", &[("class", "note")]), &sheet);
    assert_eq!(style.get("color"), Some("red"));
    assert_eq!(style.get("width"), Some("100px"));
    assert_eq!(style.len(), 2);
}

#[test]
fn padding_shorthand_expands_one_value() {
    let sheet = parse_stylesheet_text(".card { padding: 10px; }");
    let style = resolve(&element("div", &[("class", "card")]), &sheet);
    assert_eq!(style.get("padding-top"), Some("10px"));
    assert_eq!(style.get("padding-right"), Some("10px"));
    assert_eq!(style.get("padding-bottom"), Some("10px"));
    assert_eq!(style.get("padding-left"), Some("10px"));
}

#[test]
fn padding_shorthand_expands_two_and_four_values() {
    let sheet = parse_stylesheet_text("a { padding: 1px 2px; } b { padding: 1px 2px 3px 4px; }");

    let two = resolve(&element("a", &[]), &sheet);
    assert_eq!(two.get("padding-top"), Some("1px"));
    assert_eq!(two.get("padding-right"), Some("2px"));
    assert_eq!(two.get("padding-bottom"), Some("1px"));
    assert_eq!(two.get("padding-left"), Some("2px"));

    let four = resolve(&element("b", &[]), &sheet);
    assert_eq!(four.get("padding-top"), Some("1px"));
    assert_eq!(four.get("padding-right"), Some("2px"));
    assert_eq!(four.get("padding-bottom"), Some("3px"));
    assert_eq!(four.get("padding-left"), Some("4px"));
}

#[test]
fn border_shorthand_splits_by_component_kind() {
    let sheet = parse_stylesheet_text("p { border: 2px solid red; }");
    let style = resolve(&element("p", &[]), &sheet);
    assert_eq!(style.get("border-width"), Some("2px"));
    assert_eq!(style.get("border-style"), Some("solid"));
    assert_eq!(style.get("border-color"), Some("red"));
}

#[test]
fn border_shorthand_components_in_any_order() {
    let sheet = parse_stylesheet_text("p { border: dashed #00ff00 1px; }");
    let style = resolve(&element("p", &[]), &sheet);
    assert_eq!(style.get("border-width"), Some("1px"));
    assert_eq!(style.get("border-style"), Some("dashed"));
    assert_eq!(style.get("border-color"), Some("#00ff00"));
}

#[test]
fn border_radius_shorthand_expands_corners() {
    let sheet = parse_stylesheet_text("p { border-radius: 1px 2px 3px 4px; }");
    let style = resolve(&element("p", &[]), &sheet);
    assert_eq!(style.get("border-top-left-radius"), Some("1px"));
    assert_eq!(style.get("border-top-right-radius"), Some("2px"));
    assert_eq!(style.get("border-bottom-right-radius"), Some("3px"));
    assert_eq!(style.get("border-bottom-left-radius"), Some("4px"));
}

#[test]
fn background_shorthand_extracts_color() {
    let sheet = parse_stylesheet_text("div { background: #336699 no-repeat; }");
    let style = resolve(&element("div", &[]), &sheet);
    assert_eq!(style.get("background-color"), Some("#336699"));
    assert!(style.get("background").is_none());
}

#[test]
fn background_shorthand_skips_non_color_keywords() {
    let sheet = parse_stylesheet_text("div { background: no-repeat fixed red; }");
    let style = resolve(&element("div", &[]), &sheet);
    assert_eq!(style.get("background-color"), Some("red"));
}

#[test]
fn unsupported_selector_rule_never_matches() {
    let sheet = parse_stylesheet_text("div p { color: red; } p { width: 5px; }");
    let style = resolve(&element("p", &[]), &sheet);
    assert!(style.get("color").is_none());
    assert_eq!(style.get("width"), Some("5px"));
}

#[test]
fn later_shorthand_overrides_earlier_longhand() {
    let sheet = parse_stylesheet_text("p { padding-top: 1px; } p { padding: 9px; }");
    let style = resolve(&element("p", &[]), &sheet);
    assert_eq!(style.get("padding-top"), Some("9px"));
}

#[test]
fn inline_shorthand_expands_too() {
    let sheet = parse_stylesheet_text("");
    let style = resolve(&element("p", &[("style", "padding: 3px")]), &sheet);
    assert_eq!(style.get("padding-left"), Some("3px"));
}
