//! Tests for HTML-to-IR conversion and validation.

use wyvern_ir::{
    ControlKind, ConvertError, PropertyName, build_component_tree, convert, validate,
    validate_only,
};

#[test]
fn styled_div_with_paragraph() {
    let html = "<div style=\"background-color: red;\"><p>Hi</p></div>";
    let yaml = convert(html, None).unwrap();
    assert_eq!(
        yaml,
        "- DivControl:\n    \
             Control: GroupContainer@1.4.0\n    \
             Properties:\n      \
               Fill: =RGBA(255, 0, 0, 1)\n    \
             Children:\n      \
               - PControl:\n          \
                   Control: Label@2.5.1\n          \
                   Properties:\n            \
                     Text: |-\n              \
                       =\"Hi\"\n"
    );
}

#[test]
fn validate_only_reports_the_same_errors() {
    assert!(validate_only("<p>Hi</p>", None).is_ok());
    assert!(matches!(validate_only("", None), Err(ConvertError::EmptyInput)));
}

#[test]
fn empty_input_is_an_error() {
    assert!(matches!(convert("", None), Err(ConvertError::EmptyInput)));
    assert!(matches!(convert("   \n\t ", None), Err(ConvertError::EmptyInput)));
}

#[test]
fn conversion_is_deterministic() {
    let html = "<div class=\"card\"><p>Hi</p><p>Bye</p></div>";
    let css = ".card { padding: 4px; } p { color: teal; }";
    assert_eq!(
        convert(html, Some(css)).unwrap(),
        convert(html, Some(css)).unwrap()
    );
}

#[test]
fn comment_only_input_has_no_root() {
    assert!(matches!(
        convert("<!-- nothing here -->", None),
        Err(ConvertError::NoRootElement)
    ));
}

#[test]
fn output_parses_as_yaml() {
    let html = "<div id=\"app\"><button class=\"cta\">Go</button><img src=\"x.png\"><input value=\"name\"></div>";
    let yaml = convert(html, Some(".cta { color: #333; font-weight: bold; }")).unwrap();
    assert!(validate(&yaml).is_ok());
}

#[test]
fn control_mapping_and_naming() {
    let html = "<section id=\"hero-area\"><button class=\"cta-button\">Go</button><span>hey</span></section>";
    let roots = build_component_tree(html, None).unwrap();

    assert_eq!(roots.len(), 1);
    let section = &roots[0];
    assert_eq!(section.name, "Hero-area");
    assert_eq!(section.control, ControlKind::GroupContainer);

    assert_eq!(section.children[0].name, "CtaButton");
    assert_eq!(section.children[0].control, ControlKind::Button);
    assert_eq!(section.children[1].name, "SpanControl");
    assert_eq!(section.children[1].control, ControlKind::Label);
}

#[test]
fn sibling_names_are_deduplicated() {
    let html = "<div></div><div></div><div></div>";
    let roots = build_component_tree(html, None).unwrap();
    let names: Vec<&str> = roots.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["DivControl", "DivControl2", "DivControl3"]);
}

#[test]
fn dedup_counters_are_per_parent() {
    let html = "<div><p>a</p></div><div><p>b</p></div>";
    let roots = build_component_tree(html, None).unwrap();
    assert_eq!(roots[0].children[0].name, "PControl");
    assert_eq!(roots[1].children[0].name, "PControl");
}

#[test]
fn class_padding_expands_to_four_sides() {
    let html = "<div class=\"card\"></div>";
    let roots = build_component_tree(html, Some(".card { padding: 10px; }")).unwrap();
    let card = &roots[0];

    for name in [
        PropertyName::PaddingTop,
        PropertyName::PaddingRight,
        PropertyName::PaddingBottom,
        PropertyName::PaddingLeft,
    ] {
        assert_eq!(card.property(name), Some("=10"), "{name}");
    }
}

#[test]
fn length_values_carry_the_formula_prefix() {
    let html = "<div class=\"card\"></div>";
    let css = ".card { padding: 10px; width: 40px; height: 12.6px; }";
    let yaml = convert(html, Some(css)).unwrap();

    assert!(yaml.contains("Width: =40\n"));
    assert!(yaml.contains("Height: =12\n"));
    assert!(yaml.contains("PaddingTop: =10\n"));
    assert!(yaml.contains("PaddingLeft: =10\n"));
}

#[test]
fn properties_emit_in_fixed_order() {
    let html = "<p>Hi</p>";
    let css = "p { font-size: 12px; color: blue; padding-top: 4px; background-color: #fff; }";
    let roots = build_component_tree(html, Some(css)).unwrap();

    let names: Vec<PropertyName> = roots[0].properties.iter().map(|p| p.name).collect();
    assert_eq!(
        names,
        vec![
            PropertyName::Text,
            PropertyName::Fill,
            PropertyName::Color,
            PropertyName::PaddingTop,
            PropertyName::FontSize,
        ]
    );
}

#[test]
fn style_element_css_applies_and_is_not_converted() {
    let html = "<html><head><style>p { color: red; }</style></head><body><p>Hi</p></body></html>";
    let roots = build_component_tree(html, None).unwrap();

    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].control, ControlKind::Label);
    assert_eq!(roots[0].property(PropertyName::Color), Some("=RGBA(255, 0, 0, 1)"));
}

#[test]
fn bare_body_wrapper_is_descended_not_converted() {
    let roots = build_component_tree("<body><p>Hi</p></body>", None).unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].name, "PControl");
    assert_eq!(roots[0].control, ControlKind::Label);

    let nested = build_component_tree("<html><body><p>Hi</p></body></html>", None).unwrap();
    assert_eq!(nested[0].name, "PControl");

    assert!(matches!(
        build_component_tree("<body></body>", None),
        Err(ConvertError::NoRootElement)
    ));
}

#[test]
fn separate_css_wins_ties_against_style_element() {
    let html = "<style>p { color: red; }</style><p>Hi</p>";
    let roots = build_component_tree(html, Some("p { color: blue; }")).unwrap();
    assert_eq!(roots[0].property(PropertyName::Color), Some("=RGBA(0, 0, 255, 1)"));
}

#[test]
fn inline_style_wins_over_everything() {
    let html = "<p style=\"color: lime\">Hi</p>";
    let roots = build_component_tree(html, Some("p { color: red !important; }")).unwrap();
    assert_eq!(roots[0].property(PropertyName::Color), Some("=RGBA(0, 255, 0, 1)"));
}

#[test]
fn malformed_selector_is_not_fatal() {
    let html = "<p>Hi</p>";
    let css = "p:hover { color: red; } p { color: blue; }";
    let roots = build_component_tree(html, Some(css)).unwrap();
    assert_eq!(roots[0].property(PropertyName::Color), Some("=RGBA(0, 0, 255, 1)"));
}

#[test]
fn invalid_color_falls_back_to_black() {
    let html = "<p style=\"color: bogus\">Hi</p>";
    let roots = build_component_tree(html, None).unwrap();
    assert_eq!(roots[0].property(PropertyName::Color), Some("=RGBA(0, 0, 0, 1)"));
}

#[test]
fn transparent_fill_is_omitted() {
    let html = "<div style=\"background-color: transparent\"></div>";
    let roots = build_component_tree(html, None).unwrap();
    assert_eq!(roots[0].property(PropertyName::Fill), None);
}

#[test]
fn text_only_on_leaves() {
    let html = "<div>stray text<p>Hi</p></div>";
    let roots = build_component_tree(html, None).unwrap();

    assert_eq!(roots[0].property(PropertyName::Text), None);
    assert_eq!(roots[0].children[0].property(PropertyName::Text), Some("=\"Hi\""));
}

#[test]
fn nested_leaf_text_is_flattened() {
    let html = "<p>  Hello\n   world  </p>";
    let roots = build_component_tree(html, None).unwrap();
    assert_eq!(
        roots[0].property(PropertyName::Text),
        Some("=\"Hello world\"")
    );
}

#[test]
fn quotes_in_text_are_doubled() {
    let html = "<p>Say \"hi\"</p>";
    let roots = build_component_tree(html, None).unwrap();
    assert_eq!(
        roots[0].property(PropertyName::Text),
        Some("=\"Say \"\"hi\"\"\"")
    );
}

#[test]
fn input_value_becomes_text() {
    let html = "<input value=\"Your name\">";
    let roots = build_component_tree(html, None).unwrap();
    assert_eq!(roots[0].control, ControlKind::TextInput);
    assert_eq!(roots[0].property(PropertyName::Text), Some("=\"Your name\""));
}

#[test]
fn border_shorthand_maps_to_three_properties() {
    let html = "<div style=\"border: 2px dashed #00ff00\"></div>";
    let roots = build_component_tree(html, None).unwrap();
    let div = &roots[0];

    assert_eq!(div.property(PropertyName::BorderThickness), Some("=2"));
    assert_eq!(div.property(PropertyName::BorderStyle), Some("=BorderStyle.Dashed"));
    assert_eq!(div.property(PropertyName::BorderColor), Some("=RGBA(0, 255, 0, 1)"));
}

#[test]
fn fractional_alpha_formats_with_two_decimals() {
    let html = "<div style=\"background-color: rgba(0, 0, 0, 0.5)\"></div>";
    let roots = build_component_tree(html, None).unwrap();
    assert_eq!(
        roots[0].property(PropertyName::Fill),
        Some("=RGBA(0, 0, 0, 0.50)")
    );
}

#[test]
fn full_document_round_trips_through_validation() {
    let html = "<html><head><title>t</title><style>.card { padding: 8px; border-radius: 4px; }</style></head>\
                <body><div class=\"card\"><h1 style=\"font-weight: bold\">Title</h1>\
                <p>Body text</p></div></body></html>";
    let yaml = convert(html, None).unwrap();
    assert!(validate(&yaml).is_ok());
    assert!(yaml.contains("Text: |-"));
    assert!(yaml.contains("FontWeight: =FontWeight.Bold"));
    assert!(!yaml.contains("Title@"), "head title must not convert");
}
