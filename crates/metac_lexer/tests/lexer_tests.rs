//! Lexer integration tests.

use bumpalo::Bump;
use metac_core::SourceText;
use metac_lexer::lex;
use metac_syntax::{LiteralValue, SyntaxKind};

/// Helper: lex source and return (kind, text) pairs, end-of-file excluded.
fn lex_all(text: &str) -> Vec<(SyntaxKind, String)> {
    let arena = Bump::new();
    let source = SourceText::new("test.mc", text);
    let (tokens, _) = lex(&arena, &source);
    tokens
        .iter()
        .filter(|t| t.kind != SyntaxKind::EndOfFileToken)
        .map(|t| (t.kind, t.text.to_string()))
        .collect()
}

fn lex_kinds(text: &str) -> Vec<SyntaxKind> {
    lex_all(text).into_iter().map(|(k, _)| k).collect()
}

#[test]
fn test_empty_source() {
    let arena = Bump::new();
    let source = SourceText::new("test.mc", "");
    let (tokens, diagnostics) = lex(&arena, &source);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, SyntaxKind::EndOfFileToken);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_whitespace_only_becomes_eof_trivia() {
    let arena = Bump::new();
    let source = SourceText::new("test.mc", "  \n\t ");
    let (tokens, _) = lex(&arena, &source);
    assert_eq!(tokens.len(), 1);
    let trivia: Vec<_> = tokens[0].leading_trivia.iter().map(|t| t.kind).collect();
    assert_eq!(
        trivia,
        vec![
            SyntaxKind::WhitespaceTrivia,
            SyntaxKind::LineBreakTrivia,
            SyntaxKind::WhitespaceTrivia,
        ]
    );
}

#[test]
fn test_function_declaration_tokens() {
    assert_eq!(
        lex_kinds("int add(int x, int y) { return x + y }"),
        vec![
            SyntaxKind::IntKeyword,
            SyntaxKind::IdentifierToken,
            SyntaxKind::OpenParenthesisToken,
            SyntaxKind::IntKeyword,
            SyntaxKind::IdentifierToken,
            SyntaxKind::CommaToken,
            SyntaxKind::IntKeyword,
            SyntaxKind::IdentifierToken,
            SyntaxKind::CloseParenthesisToken,
            SyntaxKind::OpenBraceToken,
            SyntaxKind::ReturnKeyword,
            SyntaxKind::IdentifierToken,
            SyntaxKind::PlusToken,
            SyntaxKind::IdentifierToken,
            SyntaxKind::CloseBraceToken,
        ]
    );
}

#[test]
fn test_container_keywords_and_contains_key() {
    assert_eq!(
        lex_kinds("Dictionary<String, int> m\nm.ContainsKey(k)"),
        vec![
            SyntaxKind::DictionaryKeyword,
            SyntaxKind::LessToken,
            SyntaxKind::IdentifierToken,
            SyntaxKind::CommaToken,
            SyntaxKind::IntKeyword,
            SyntaxKind::GreaterToken,
            SyntaxKind::IdentifierToken,
            SyntaxKind::IdentifierToken,
            SyntaxKind::PeriodToken,
            SyntaxKind::ContainsKeyCall,
            SyntaxKind::OpenParenthesisToken,
            SyntaxKind::IdentifierToken,
            SyntaxKind::CloseParenthesisToken,
        ]
    );
}

#[test]
fn test_literal_values() {
    let arena = Bump::new();
    let source = SourceText::new("test.mc", r#"42 3.5 "hi \"there\"" true false"#);
    let (tokens, diagnostics) = lex(&arena, &source);
    assert!(diagnostics.is_empty());
    assert_eq!(tokens[0].value, Some(LiteralValue::Integer(42)));
    assert_eq!(tokens[1].value, Some(LiteralValue::Float(3.5)));
    assert_eq!(tokens[2].kind, SyntaxKind::StringToken);
    assert_eq!(tokens[2].text, r#""hi \"there\"""#);
    assert_eq!(tokens[2].value, Some(LiteralValue::String(r#"hi \"there\""#)));
    assert_eq!(tokens[3].value, Some(LiteralValue::Bool(true)));
    assert_eq!(tokens[4].value, Some(LiteralValue::Bool(false)));
}

#[test]
fn test_number_followed_by_member_access() {
    assert_eq!(
        lex_kinds("1.x"),
        vec![SyntaxKind::NumberToken, SyntaxKind::PeriodToken, SyntaxKind::IdentifierToken]
    );
}

#[test]
fn test_trailing_trivia_stops_after_line_break() {
    let arena = Bump::new();
    let source = SourceText::new("test.mc", "a  // note\n\n  b");
    let (tokens, _) = lex(&arena, &source);

    let trailing: Vec<_> = tokens[0].trailing_trivia.iter().map(|t| t.kind).collect();
    assert_eq!(
        trailing,
        vec![
            SyntaxKind::WhitespaceTrivia,
            SyntaxKind::SingleLineCommentTrivia,
            SyntaxKind::LineBreakTrivia,
        ]
    );
    let leading: Vec<_> = tokens[1].leading_trivia.iter().map(|t| t.kind).collect();
    assert_eq!(leading, vec![SyntaxKind::LineBreakTrivia, SyntaxKind::WhitespaceTrivia]);
    assert!(tokens[1].has_preceding_line_break());
    assert!(!tokens[0].has_preceding_line_break());
}

#[test]
fn test_every_byte_is_accounted_for() {
    let text = "int x = 5 /* c */\n  @ y += \"s\"\r\n// end";
    let arena = Bump::new();
    let source = SourceText::new("test.mc", text);
    let (tokens, _) = lex(&arena, &source);

    let mut rebuilt = String::new();
    for token in &tokens {
        for trivia in token.leading_trivia {
            rebuilt.push_str(trivia.text);
        }
        rebuilt.push_str(token.text);
        for trivia in token.trailing_trivia {
            rebuilt.push_str(trivia.text);
        }
    }
    assert_eq!(rebuilt, text);
}

#[test]
fn test_bad_character_reports_diagnostic() {
    let arena = Bump::new();
    let source = SourceText::new("test.mc", "x = 1 $ 2");
    let (tokens, diagnostics) = lex(&arena, &source);

    let bad: Vec<_> = tokens.iter().filter(|t| t.kind == SyntaxKind::BadToken).collect();
    assert_eq!(bad.len(), 1);
    assert_eq!(bad[0].text, "$");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, 1001);
    assert_eq!(diagnostics[0].message_text, "Bad character input: '$'.");
}

#[test]
fn test_unterminated_string() {
    let arena = Bump::new();
    let source = SourceText::new("test.mc", "s = \"abc\nx");
    let (tokens, diagnostics) = lex(&arena, &source);
    assert_eq!(tokens[2].kind, SyntaxKind::StringToken);
    assert_eq!(tokens[2].text, "\"abc");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, 1002);
    assert_eq!(tokens[3].text, "x");
}

#[test]
fn test_unterminated_comment() {
    let arena = Bump::new();
    let source = SourceText::new("test.mc", "x /* never closed");
    let (tokens, diagnostics) = lex(&arena, &source);
    assert_eq!(tokens.len(), 2);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, 1010);
}

#[test]
fn test_integer_overflow_is_reported() {
    let arena = Bump::new();
    let source = SourceText::new("test.mc", "99999999999999999999");
    let (tokens, diagnostics) = lex(&arena, &source);
    assert_eq!(tokens[0].kind, SyntaxKind::NumberToken);
    assert_eq!(tokens[0].value, None);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, 1004);
}

#[test]
fn test_unicode_identifiers() {
    assert_eq!(
        lex_all("größe = _x1"),
        vec![
            (SyntaxKind::IdentifierToken, "größe".to_string()),
            (SyntaxKind::EqualsToken, "=".to_string()),
            (SyntaxKind::IdentifierToken, "_x1".to_string()),
        ]
    );
}
