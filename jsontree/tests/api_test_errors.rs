// SPDX-License-Identifier: Apache-2.0

// Error reporting through the public API

use jsontree::tokenizer::ErrKind;
use jsontree::{parse_str, ParseError};
use test_log::test;

fn tokenizer_error(json: &str) -> (ErrKind, usize) {
    match parse_str(json) {
        Err(ParseError::TokenizerError(e)) => (e.kind(), e.position()),
        other => panic!("Expected TokenizerError for {:?}, got: {:?}", json, other),
    }
}

#[test]
fn test_leading_zero_is_invalid_number() {
    assert_eq!(tokenizer_error("01"), (ErrKind::InvalidNumber, 1));
    assert_eq!(tokenizer_error("[-012]"), (ErrKind::InvalidNumber, 3));
}

#[test]
fn test_malformed_numbers() {
    assert_eq!(tokenizer_error("-"), (ErrKind::InvalidNumber, 1));
    assert_eq!(tokenizer_error("1."), (ErrKind::InvalidNumber, 2));
    assert_eq!(tokenizer_error("1.e5"), (ErrKind::InvalidNumber, 2));
    assert_eq!(tokenizer_error("2e"), (ErrKind::InvalidNumber, 2));
    assert_eq!(tokenizer_error("2e+"), (ErrKind::InvalidNumber, 3));
    assert_eq!(tokenizer_error("-a"), (ErrKind::InvalidNumber, 1));
    // A leading '+' is not part of the grammar
    assert_eq!(tokenizer_error("+1"), (ErrKind::UnexpectedCharacter, 0));
    assert_eq!(tokenizer_error(".5"), (ErrKind::UnexpectedCharacter, 0));
}

#[test]
fn test_unterminated_string() {
    assert_eq!(tokenizer_error("\"unterminated"), (ErrKind::UnclosedString, 0));
    // Escaped quote does not close the string
    assert_eq!(tokenizer_error(r#"["abc\"]"#), (ErrKind::UnclosedString, 1));
}

#[test]
fn test_unexpected_character() {
    assert_eq!(tokenizer_error("hello"), (ErrKind::UnexpectedCharacter, 0));
    assert_eq!(
        tokenizer_error(r#"{key: "value"}"#),
        (ErrKind::UnexpectedCharacter, 1)
    );
    assert_eq!(tokenizer_error("['x']"), (ErrKind::UnexpectedCharacter, 1));
}

#[test]
fn test_misspelled_literals() {
    assert_eq!(tokenizer_error("nul"), (ErrKind::InvalidKeyword, 3));
    assert_eq!(tokenizer_error("[tru]"), (ErrKind::InvalidKeyword, 4));
    assert_eq!(tokenizer_error("fals3"), (ErrKind::InvalidKeyword, 4));
}

#[test]
fn test_raw_control_character_in_string() {
    assert_eq!(
        tokenizer_error("\"line\nbreak\""),
        (ErrKind::UnescapedControlCharacter, 5)
    );
    assert_eq!(
        tokenizer_error("\"tab\there\""),
        (ErrKind::UnescapedControlCharacter, 4)
    );
}

#[test]
fn test_invalid_utf8_in_string() {
    let mut json = b"\"ok".to_vec();
    json.push(0xFF);
    json.push(b'"');
    match jsontree::parse(&json) {
        Err(ParseError::TokenizerError(e)) => {
            assert_eq!(e.kind(), ErrKind::InvalidUtf8);
            assert_eq!(e.position(), 3);
            assert_eq!(e.character(), 0xFF);
        }
        other => panic!("Expected InvalidUtf8 tokenizer error, got: {:?}", other),
    }
}

#[test]
fn test_invalid_escapes() {
    assert_eq!(
        parse_str(r#"{"bad_escape": "invalid\x"}"#),
        Err(ParseError::InvalidEscapeSequence)
    );
    assert_eq!(
        parse_str(r#""\u00G1""#),
        Err(ParseError::InvalidUnicodeHex)
    );
    assert_eq!(parse_str(r#""\u41""#), Err(ParseError::InvalidUnicodeHex));
}

#[test]
fn test_trailing_commas() {
    assert_eq!(
        parse_str(r#"{"a":1,}"#),
        Err(ParseError::TrailingComma { position: 7 })
    );
    assert_eq!(
        parse_str("[1,]"),
        Err(ParseError::TrailingComma { position: 3 })
    );
    assert_eq!(
        parse_str("[[1,2,],3]"),
        Err(ParseError::TrailingComma { position: 6 })
    );
}

#[test]
fn test_unexpected_end_of_input() {
    assert_eq!(
        parse_str("{"),
        Err(ParseError::UnexpectedEndOfInput { position: 1 })
    );
    assert_eq!(
        parse_str("   "),
        Err(ParseError::UnexpectedEndOfInput { position: 3 })
    );
    assert_eq!(
        parse_str(r#"{"key""#),
        Err(ParseError::UnexpectedEndOfInput { position: 6 })
    );
    assert_eq!(
        parse_str("[1, [2, 3]"),
        Err(ParseError::UnexpectedEndOfInput { position: 10 })
    );
}

#[test]
fn test_structural_errors() {
    assert_eq!(
        parse_str(r#"{"a" "b"}"#),
        Err(ParseError::UnexpectedToken {
            token: "string",
            position: 5
        })
    );
    assert_eq!(
        parse_str(r#"{"a": 1:}"#),
        Err(ParseError::UnexpectedToken {
            token: "':'",
            position: 7
        })
    );
    assert_eq!(
        parse_str(r#"["a": 1]"#),
        Err(ParseError::UnexpectedToken {
            token: "':'",
            position: 4
        })
    );
    assert_eq!(
        parse_str("{null: 1}"),
        Err(ParseError::UnexpectedToken {
            token: "null",
            position: 1
        })
    );
}

#[test]
fn test_error_positions_and_messages() {
    let err = parse_str("[1, 2}").unwrap_err();
    assert_eq!(err.position(), Some(5));
    assert_eq!(err.to_string(), "unexpected '}' at byte 5");

    let err = parse_str("01").unwrap_err();
    assert_eq!(err.position(), Some(1));
    assert_eq!(err.to_string(), "invalid number '1' at byte 1");

    let err = parse_str("\"a\u{1}\"").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unescaped control character in string (byte 0x01) at byte 2"
    );

    assert_eq!(parse_str(r#""\q""#).unwrap_err().position(), None);
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    let err = parse_str("[").unwrap_err();
    assert_error(&err);
    assert_eq!(err.to_string(), "unexpected end of input at byte 1");
}
