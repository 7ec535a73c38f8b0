//! Tests for the lexer: classification, positions and lexical errors

use lispfront::{tokenize, Error, Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

// ====================
// Skipping
// ====================

#[test]
fn test_whitespace_and_comments_only() {
    for source in ["", "   ", "\t\r\n", ";; comment", ";; a\n\n  ;; b\n", ";;;;"] {
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.len(), 1, "source {:?}", source);
        assert_eq!(tokens[0].kind, TokenKind::EndOfInput);
        assert_eq!(tokens[0].lexeme, "<EOF>");
    }
}

#[test]
fn test_comment_runs_to_end_of_line() {
    assert_eq!(
        kinds("1 ;; (ignored \"stuff\n2"),
        vec![TokenKind::Int, TokenKind::Int, TokenKind::EndOfInput]
    );
}

#[test]
fn test_eof_position_after_trailing_comment() {
    let tokens = tokenize("x\n;; done").unwrap();
    let eof = tokens.last().unwrap();
    assert_eq!((eof.line, eof.column), (2, 8));
}

// ====================
// Positions
// ====================

#[test]
fn test_line_and_column_tracking() {
    let tokens = tokenize("\n\n  (").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::LeftParen);
    assert_eq!((tokens[0].line, tokens[0].column), (3, 3));
}

#[test]
fn test_positions_across_program() {
    let source = "(defn hello (n)\n  (print n))";
    let positions: Vec<(usize, usize)> = tokenize(source)
        .unwrap()
        .iter()
        .map(|t| (t.line, t.column))
        .collect();

    assert_eq!(
        positions,
        vec![
            (1, 1),  // (
            (1, 2),  // defn
            (1, 7),  // hello
            (1, 13), // (
            (1, 14), // n
            (1, 15), // )
            (2, 3),  // (
            (2, 4),  // print
            (2, 10), // n
            (2, 11), // )
            (2, 12), // )
            (2, 13), // EOF
        ]
    );
}

#[test]
fn test_multiline_string_advances_line() {
    let tokens = tokenize("\"a\nb\" x").unwrap();
    assert_eq!(tokens[0].lexeme, "a\nb");
    assert_eq!((tokens[1].line, tokens[1].column), (2, 4));
}

// ====================
// Literals and words
// ====================

#[test]
fn test_integer_literals() {
    let tokens = tokenize("0 007 1234567890").unwrap();
    let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["0", "007", "1234567890", "<EOF>"]);
    assert!(tokens[..3].iter().all(|t| t.kind == TokenKind::Int));
}

#[test]
fn test_empty_string_literal() {
    let tokens = tokenize(r#""""#).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "");
}

#[test]
fn test_bool_lexeme_preserved() {
    let tokens = tokenize("true false").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Bool);
    assert_eq!(tokens[0].lexeme, "true");
    assert_eq!(tokens[1].lexeme, "false");
}

#[test]
fn test_identifiers() {
    let tokens = tokenize("x _tmp list2 nth_of heads").unwrap();
    assert!(tokens[..5].iter().all(|t| t.kind == TokenKind::Identifier));
}

#[test]
fn test_reserved_words_adjacent_to_parens() {
    assert_eq!(
        kinds("(if)(do)"),
        vec![
            TokenKind::LeftParen,
            TokenKind::If,
            TokenKind::RightParen,
            TokenKind::LeftParen,
            TokenKind::Do,
            TokenKind::RightParen,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_sample_program_dump() {
    let code = r#"
(defn hello (n)
  (if (< n 10)
      (print (str "small: " n))
      (print (str "big: " n))))

;; comment
(hello 5)
"#;
    let dump: Vec<String> = tokenize(code)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(dump[0], "LPAREN('(')@2:1");
    assert_eq!(dump[1], "DEFN('defn')@2:2");
    assert!(dump.contains(&"STRING('small: ')@4:19".to_string()));
    assert!(dump.contains(&"STRFN('str')@4:15".to_string()));
    assert_eq!(dump.last().unwrap(), "EOF('<EOF>')@9:1");
}

// ====================
// Errors
// ====================

#[test]
fn test_unterminated_string() {
    let err = tokenize("  \"abc").unwrap_err();
    assert_eq!(err, Error::UnterminatedString { line: 1, col: 3 });
    assert!(err.to_string().contains("line 1, column 3"));
}

#[test]
fn test_unexpected_characters() {
    for (source, ch, col) in [("[", '[', 1), ("(a . b)", '.', 4), ("x!", '!', 2)] {
        let err = tokenize(source).unwrap_err();
        assert_eq!(err, Error::UnexpectedChar { ch, line: 1, col }, "{}", source);
    }
}

#[test]
fn test_error_stops_iteration() {
    let results: Vec<_> = Lexer::new("a b ? c").collect();
    assert_eq!(results.len(), 3);
    assert!(results[2].is_err());
}
