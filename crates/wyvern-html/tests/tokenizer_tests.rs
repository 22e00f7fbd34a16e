//! Tests for the HTML tokenizer: tags, attributes, comments, raw text.

use wyvern_html::{Attribute, HtmlTokenizer, Token};

fn tokenize(input: &str) -> Vec<Token> {
    let mut tokenizer = HtmlTokenizer::new(input);
    tokenizer.run();
    tokenizer.into_tokens()
}

#[test]
fn test_simple_start_and_end_tag() {
    let tokens = tokenize("<div>Hi</div>");
    assert_eq!(
        tokens,
        vec![
            Token::StartTag {
                name: "div".to_string(),
                self_closing: false,
                attributes: vec![],
            },
            Token::Text {
                data: "Hi".to_string()
            },
            Token::EndTag {
                name: "div".to_string()
            },
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_tag_names_are_lowercased() {
    let tokens = tokenize("<DIV></DIV>");
    assert!(matches!(&tokens[0], Token::StartTag { name, .. } if name == "div"));
    assert!(matches!(&tokens[1], Token::EndTag { name } if name == "div"));
}

#[test]
fn test_attributes_quoted_unquoted_and_bare() {
    let tokens = tokenize(r#"<input type="text" id=main disabled>"#);
    let Token::StartTag { attributes, .. } = &tokens[0] else {
        panic!("expected start tag, got {:?}", tokens[0]);
    };
    assert_eq!(
        attributes,
        &vec![
            Attribute::new("type".to_string(), "text".to_string()),
            Attribute::new("id".to_string(), "main".to_string()),
            Attribute::new("disabled".to_string(), String::new()),
        ]
    );
}

#[test]
fn test_single_quoted_attribute_value() {
    let tokens = tokenize("<div class='card wide'></div>");
    let Token::StartTag { attributes, .. } = &tokens[0] else {
        panic!("expected start tag");
    };
    assert_eq!(attributes[0].value, "card wide");
}

#[test]
fn test_duplicate_attribute_keeps_first() {
    let tokens = tokenize(r#"<div id="a" id="b"></div>"#);
    let Token::StartTag { attributes, .. } = &tokens[0] else {
        panic!("expected start tag");
    };
    assert_eq!(attributes.len(), 1);
    assert_eq!(attributes[0].value, "a");
}

#[test]
fn test_self_closing_tag() {
    let tokens = tokenize("<img src=\"a.png\"/>");
    assert!(matches!(
        &tokens[0],
        Token::StartTag {
            name,
            self_closing: true,
            ..
        } if name == "img"
    ));
}

#[test]
fn test_comment_token() {
    let tokens = tokenize("<!-- a comment -->");
    assert_eq!(
        tokens[0],
        Token::Comment {
            data: " a comment ".to_string()
        }
    );
}

#[test]
fn test_doctype_token() {
    let tokens = tokenize("<!DOCTYPE html><p>x</p>");
    assert_eq!(
        tokens[0],
        Token::Doctype {
            name: Some("html".to_string())
        }
    );
}

#[test]
fn test_style_content_is_raw_text() {
    let tokens = tokenize("<style>p > span { color: red; }</style>");
    assert_eq!(
        tokens[1],
        Token::Text {
            data: "p > span { color: red; }".to_string()
        }
    );
    assert!(matches!(&tokens[2], Token::EndTag { name } if name == "style"));
}

#[test]
fn test_character_references_in_text() {
    let tokens = tokenize("<p>Fish &amp; chips &lt;now&gt;</p>");
    assert_eq!(
        tokens[1],
        Token::Text {
            data: "Fish & chips <now>".to_string()
        }
    );
}

#[test]
fn test_numeric_character_reference() {
    let tokens = tokenize("<p>&#65;&#x42;</p>");
    assert_eq!(
        tokens[1],
        Token::Text {
            data: "AB".to_string()
        }
    );
}

#[test]
fn test_unknown_entity_passes_through() {
    let tokens = tokenize("<p>&bogus; &unclosed</p>");
    assert_eq!(
        tokens[1],
        Token::Text {
            data: "&bogus; &unclosed".to_string()
        }
    );
}

#[test]
fn test_lone_less_than_is_text() {
    let tokens = tokenize("<p>1 < 2</p>");
    assert_eq!(
        tokens[1],
        Token::Text {
            data: "1 < 2".to_string()
        }
    );
}
