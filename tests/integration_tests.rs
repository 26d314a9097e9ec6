//! Integration tests for end-to-end tokenization.
//!
//! These tests go through the public API only: source text in, token
//! sequence (or a positioned error) out.

use interp::{
    config::LexerConfig,
    lexer::{
        lexer::{tokenize, tokenize_with},
        tokens::{TokenKind, DEFAULT_TABLES},
    },
    render_error, Position,
};

#[test]
fn test_tokenize_sample_program() {
    let source = "number x ; x = 3 ; check ( x < 5 ) { writeInFile x ; }";
    let tokens = tokenize(source).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Int,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::If,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Less,
            TokenKind::Number,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::Write,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );

    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[5].value, "3");
    assert_eq!(tokens[11].value, "5");
}

#[test]
fn test_round_trip_preserves_non_whitespace() {
    let source = "number a;\nnumber b [10];\nrepeatIf (a<b) {\n\ta = a+1;\n\tb[a] = a*2/3-1;\n}\nnotSuccess { readFromFile a; }\n";
    let tokens = tokenize(source).unwrap();

    let joined: String = tokens.iter().map(|token| token.value.as_str()).collect();
    let stripped: String = source.chars().filter(|c| !c.is_whitespace()).collect();

    assert_eq!(joined, stripped);
}

#[test]
fn test_only_last_token_is_eof() {
    let tokens = tokenize("a = b == c;\n").unwrap();

    let eof_count = tokens.iter().filter(|token| token.kind == TokenKind::EOF).count();
    assert_eq!(eof_count, 1);
    assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));
    assert!(tokens[..tokens.len() - 1].iter().all(|token| !token.value.is_empty()));
}

#[test]
fn test_multiline_positions() {
    let source = "number x;\ncheck (x > 1) {\n  writeInFile x;\n}";
    let tokens = tokenize(source).unwrap();

    let write = tokens.iter().find(|token| token.kind == TokenKind::Write).unwrap();
    assert_eq!(write.position, Position::new(3, 3));

    let greater = tokens.iter().find(|token| token.kind == TokenKind::Greater).unwrap();
    assert_eq!(greater.position, Position::new(2, 10));

    let close = tokens.iter().find(|token| token.kind == TokenKind::CloseCurly).unwrap();
    assert_eq!(close.position, Position::new(4, 1));
}

#[test]
fn test_illegal_character_report() {
    let source = "x ! y";
    let error = tokenize(source).unwrap_err();

    assert_eq!(error.get_error_name(), "IllegalCharacter");
    assert_eq!(*error.get_position(), Position::new(1, 3));

    let rendered = render_error(&error, source, "prog.txt");
    assert!(rendered.contains("1 | x ! y"));
    assert!(rendered.ends_with("  |   ^\n"));
}

#[test]
fn test_first_error_aborts() {
    let error = tokenize("a = 1x;\nb <= 2;").unwrap_err();

    assert_eq!(error.get_error_name(), "MalformedNumericLiteral");
    assert_eq!(*error.get_position(), Position::new(1, 6));
}

#[test]
fn test_operator_sequence_on_second_line() {
    let error = tokenize("a = 1;\ncheck (a >= 2) {}").unwrap_err();

    assert_eq!(error.get_error_name(), "IllegalOperatorSequence");
    assert_eq!(*error.get_position(), Position::new(2, 11));
}

#[test]
fn test_trailing_operator_is_finalized() {
    let tokens = tokenize("a =").unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Assignment);
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_configured_keywords() {
    let config = LexerConfig::from_toml_str("[keywords]\nif = \"if\"\nelse = \"else\"\n").unwrap();
    let tables = config.into_tables();

    let tokens = tokenize_with("if (a) {} else {}", &tables).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::If);
    assert_eq!(tokens[6].kind, TokenKind::Else);

    let tokens = tokenize_with("check", &tables).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
}

#[test]
fn test_lexers_share_tables_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("number v{} ; v{} = {} ;", i, i, i);
                tokenize_with(&source, &DEFAULT_TABLES).unwrap().len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 8);
    }
}
