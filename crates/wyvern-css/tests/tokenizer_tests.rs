//! Tests for the CSS tokenizer.

use wyvern_css::{CssToken, CssTokenizer};

fn tokenize(input: &str) -> Vec<CssToken> {
    let mut tokenizer = CssTokenizer::new(input.to_string());
    tokenizer.run();
    tokenizer.into_tokens()
}

#[test]
fn simple_rule_tokens() {
    let tokens = tokenize("p{color:red}");
    assert_eq!(
        tokens,
        vec![
            CssToken::Ident("p".to_string()),
            CssToken::LeftBrace,
            CssToken::Ident("color".to_string()),
            CssToken::Colon,
            CssToken::Ident("red".to_string()),
            CssToken::RightBrace,
            CssToken::EndOfFile,
        ]
    );
}

#[test]
fn whitespace_collapses_to_one_token() {
    let tokens = tokenize("a   \n\t b");
    assert_eq!(
        tokens,
        vec![
            CssToken::Ident("a".to_string()),
            CssToken::Whitespace,
            CssToken::Ident("b".to_string()),
            CssToken::EndOfFile,
        ]
    );
}

#[test]
fn hash_token_for_hex_color() {
    let tokens = tokenize("#ff0000");
    assert_eq!(
        tokens,
        vec![CssToken::Hash("ff0000".to_string()), CssToken::EndOfFile]
    );
}

#[test]
fn function_token_for_rgb() {
    let tokens = tokenize("rgb(255, 0, 0)");
    assert_eq!(tokens[0], CssToken::Function("rgb".to_string()));
    assert!(tokens.contains(&CssToken::Number { value: 255.0 }));
    assert!(tokens.contains(&CssToken::RightParen));
}

#[test]
fn dimension_token_carries_unit() {
    let tokens = tokenize("10px");
    assert_eq!(
        tokens[0],
        CssToken::Dimension {
            value: 10.0,
            unit: "px".to_string()
        }
    );
}

#[test]
fn percentage_token() {
    let tokens = tokenize("50%");
    assert_eq!(tokens[0], CssToken::Percentage { value: 50.0 });
}

#[test]
fn negative_and_fractional_numbers() {
    assert_eq!(tokenize("-3")[0], CssToken::Number { value: -3.0 });
    assert_eq!(tokenize(".5")[0], CssToken::Number { value: 0.5 });
    assert_eq!(tokenize("0.25")[0], CssToken::Number { value: 0.25 });
}

#[test]
fn hyphenated_ident() {
    let tokens = tokenize("background-color");
    assert_eq!(tokens[0], CssToken::Ident("background-color".to_string()));
}

#[test]
fn comments_are_dropped() {
    let tokens = tokenize("a/* comment */b");
    assert_eq!(
        tokens,
        vec![
            CssToken::Ident("a".to_string()),
            CssToken::Ident("b".to_string()),
            CssToken::EndOfFile,
        ]
    );
}

#[test]
fn string_token_keeps_contents() {
    let tokens = tokenize("\"hello world\"");
    assert_eq!(tokens[0], CssToken::String("hello world".to_string()));
}

#[test]
fn at_keyword_token() {
    let tokens = tokenize("@media");
    assert_eq!(tokens[0], CssToken::AtKeyword("media".to_string()));
}

#[test]
fn token_display_round_trips_source_shape() {
    assert_eq!(CssToken::Hash("fff".to_string()).to_string(), "#fff");
    assert_eq!(CssToken::Dimension { value: 10.0, unit: "px".to_string() }.to_string(), "10px");
    assert_eq!(CssToken::Percentage { value: 50.0 }.to_string(), "50%");
    assert_eq!(CssToken::Number { value: 0.5 }.to_string(), "0.5");
    assert_eq!(CssToken::Number { value: 12.0 }.to_string(), "12");
}
