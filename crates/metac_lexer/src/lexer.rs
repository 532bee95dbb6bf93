//! The lexer.
//!
//! Trivia is attached Roslyn-style: a token's leading trivia is everything
//! between the previous token's trailing trivia and the token itself; its
//! trailing trivia runs to the end of the line, including the first line
//! break.

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;
use metac_core::text::{TextPos, TextSpan};
use metac_core::SourceText;
use metac_diagnostics::{messages, Diagnostic, DiagnosticMessage};
use metac_syntax::{LiteralValue, SyntaxKind, Token, TokenFlags, Trivia};

pub struct Lexer<'a> {
    arena: &'a Bump,
    source: &'a SourceText,
    text: &'a str,
    /// Byte offset of the next unread character.
    pos: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Lexer<'a> {
    pub fn new(arena: &'a Bump, source: &'a SourceText) -> Self {
        Self {
            arena,
            source,
            text: source.text(),
            pos: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Lex the whole input.
    pub fn lex(mut self) -> (Vec<Token<'a>>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        let mut previous_ended_line = false;

        loop {
            let leading = self.scan_trivia(true);
            let start = self.pos;
            let (kind, value) = self.scan_token();
            let end = self.pos;
            let trailing = self.scan_trivia(false);

            let mut token = Token::new(kind, self.span(start, end), &self.text[start..end])
                .with_trivia(leading, trailing);
            if let Some(value) = value {
                token = token.with_value(value);
            }
            if previous_ended_line || contains_line_break(leading) {
                token = token.with_flags(TokenFlags::PRECEDING_LINE_BREAK);
            }
            previous_ended_line = contains_line_break(trailing);

            tokens.push(token);
            if kind == SyntaxKind::EndOfFileToken {
                break;
            }
        }

        tracing::debug!(
            file = self.source.file_name(),
            tokens = tokens.len(),
            errors = self.diagnostics.len(),
            "lexed source"
        );
        (tokens, self.diagnostics)
    }

    // ========================================================================
    // Character access
    // ========================================================================

    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    #[inline]
    fn byte_at(&self, offset: usize) -> Option<u8> {
        self.text.as_bytes().get(self.pos + offset).copied()
    }

    #[inline]
    fn span(&self, start: usize, end: usize) -> TextSpan {
        TextSpan::from_bounds(start as TextPos, end as TextPos)
    }

    fn report(&mut self, start: usize, message: &DiagnosticMessage, args: &[&str]) {
        let span = self.span(start, self.pos);
        self.diagnostics.push(Diagnostic::at(self.source, span, message, args));
    }

    // ========================================================================
    // Trivia
    // ========================================================================

    /// Collect trivia. Trailing trivia stops after the first line break.
    fn scan_trivia(&mut self, leading: bool) -> &'a [Trivia<'a>] {
        let mut trivia = BumpVec::new_in(self.arena);

        loop {
            let start = self.pos;
            let kind = match self.current_char() {
                Some('\r') | Some('\n') => {
                    if self.byte_at(0) == Some(b'\r') && self.byte_at(1) == Some(b'\n') {
                        self.pos += 2;
                    } else {
                        self.pos += 1;
                    }
                    SyntaxKind::LineBreakTrivia
                }
                Some(c) if is_whitespace(c) => {
                    while let Some(c) = self.current_char().filter(|&c| is_whitespace(c)) {
                        self.pos += c.len_utf8();
                    }
                    SyntaxKind::WhitespaceTrivia
                }
                Some('/') if self.byte_at(1) == Some(b'/') => {
                    while let Some(c) = self.current_char().filter(|&c| !is_line_break(c)) {
                        self.pos += c.len_utf8();
                    }
                    SyntaxKind::SingleLineCommentTrivia
                }
                Some('/') if self.byte_at(1) == Some(b'*') => {
                    self.scan_multi_line_comment(start);
                    SyntaxKind::MultiLineCommentTrivia
                }
                _ => break,
            };

            trivia.push(Trivia::new(kind, self.span(start, self.pos), &self.text[start..self.pos]));
            if !leading && kind == SyntaxKind::LineBreakTrivia {
                break;
            }
        }

        trivia.into_bump_slice()
    }

    fn scan_multi_line_comment(&mut self, start: usize) {
        self.pos += 2;
        match self.text[self.pos..].find("*/") {
            Some(offset) => self.pos += offset + 2,
            None => {
                self.pos = self.text.len();
                self.report(start, &messages::UNTERMINATED_COMMENT, &[]);
            }
        }
    }

    // ========================================================================
    // Tokens
    // ========================================================================

    fn scan_token(&mut self) -> (SyntaxKind, Option<LiteralValue<'a>>) {
        let Some(c) = self.current_char() else {
            return (SyntaxKind::EndOfFileToken, None);
        };

        match c {
            '0'..='9' => return self.scan_number(),
            '"' => return self.scan_string(),
            c if is_identifier_start(c) => return self.scan_identifier_or_keyword(),
            _ => {}
        }

        let next = self.byte_at(1);
        let (kind, len) = match (c, next) {
            ('+', Some(b'+')) => (SyntaxKind::PlusPlusToken, 2),
            ('+', Some(b'=')) => (SyntaxKind::PlusEqualsToken, 2),
            ('+', _) => (SyntaxKind::PlusToken, 1),
            ('-', Some(b'-')) => (SyntaxKind::MinusMinusToken, 2),
            ('-', Some(b'=')) => (SyntaxKind::MinusEqualsToken, 2),
            ('-', _) => (SyntaxKind::MinusToken, 1),
            ('*', Some(b'=')) => (SyntaxKind::StarEqualsToken, 2),
            ('*', _) => (SyntaxKind::StarToken, 1),
            ('/', Some(b'=')) => (SyntaxKind::SlashEqualsToken, 2),
            ('/', _) => (SyntaxKind::SlashToken, 1),
            ('!', Some(b'=')) => (SyntaxKind::BangEqualsToken, 2),
            ('!', _) => (SyntaxKind::BangToken, 1),
            ('=', Some(b'=')) => (SyntaxKind::EqualsEqualsToken, 2),
            ('=', _) => (SyntaxKind::EqualsToken, 1),
            ('<', Some(b'=')) => (SyntaxKind::LessOrEqualsToken, 2),
            ('<', _) => (SyntaxKind::LessToken, 1),
            ('>', Some(b'=')) => (SyntaxKind::GreaterOrEqualsToken, 2),
            ('>', _) => (SyntaxKind::GreaterToken, 1),
            ('&', Some(b'&')) => (SyntaxKind::AmpersandAmpersandToken, 2),
            ('&', Some(b'=')) => (SyntaxKind::AmpersandEqualsToken, 2),
            ('&', _) => (SyntaxKind::AmpersandToken, 1),
            ('|', Some(b'|')) => (SyntaxKind::PipePipeToken, 2),
            ('|', Some(b'=')) => (SyntaxKind::PipeEqualsToken, 2),
            ('|', _) => (SyntaxKind::PipeToken, 1),
            ('^', Some(b'=')) => (SyntaxKind::HatEqualsToken, 2),
            ('^', _) => (SyntaxKind::HatToken, 1),
            ('~', _) => (SyntaxKind::TildeToken, 1),
            ('(', _) => (SyntaxKind::OpenParenthesisToken, 1),
            (')', _) => (SyntaxKind::CloseParenthesisToken, 1),
            ('{', _) => (SyntaxKind::OpenBraceToken, 1),
            ('}', _) => (SyntaxKind::CloseBraceToken, 1),
            ('[', _) => (SyntaxKind::OpenSquareBracketToken, 1),
            (']', _) => (SyntaxKind::CloseSquareBracketToken, 1),
            (':', _) => (SyntaxKind::ColonToken, 1),
            (',', _) => (SyntaxKind::CommaToken, 1),
            ('.', _) => (SyntaxKind::PeriodToken, 1),
            (';', _) => (SyntaxKind::SemicolonToken, 1),
            (c, _) => {
                let start = self.pos;
                self.pos += c.len_utf8();
                let mut buf = [0u8; 4];
                let text: &str = c.encode_utf8(&mut buf);
                self.report(start, &messages::BAD_CHARACTER, &[text]);
                return (SyntaxKind::BadToken, None);
            }
        };

        self.pos += len;
        (kind, None)
    }

    fn scan_number(&mut self) -> (SyntaxKind, Option<LiteralValue<'a>>) {
        let start = self.pos;
        self.skip_digits();

        let is_float = self.byte_at(0) == Some(b'.') && self.byte_at(1).is_some_and(|b| b.is_ascii_digit());
        if is_float {
            self.pos += 1;
            self.skip_digits();
        }

        let text = &self.text[start..self.pos];
        let value = if is_float {
            text.parse::<f64>().ok().map(LiteralValue::Float)
        } else {
            text.parse::<i64>().ok().map(LiteralValue::Integer)
        };
        if value.is_none() {
            let type_name = if is_float { "float" } else { "int" };
            self.report(start, &messages::INVALID_NUMBER, &[text, type_name]);
        }
        (SyntaxKind::NumberToken, value)
    }

    fn skip_digits(&mut self) {
        while self.byte_at(0).is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
    }

    fn scan_string(&mut self) -> (SyntaxKind, Option<LiteralValue<'a>>) {
        let start = self.pos;
        self.pos += 1;

        loop {
            match self.current_char() {
                None | Some('\r') | Some('\n') => {
                    self.report(start, &messages::UNTERMINATED_STRING, &[]);
                    let inner = &self.text[start + 1..self.pos];
                    return (SyntaxKind::StringToken, Some(LiteralValue::String(inner)));
                }
                Some('\\') => {
                    self.pos += 1;
                    if let Some(escaped) = self.current_char().filter(|&c| !is_line_break(c)) {
                        self.pos += escaped.len_utf8();
                    }
                }
                Some('"') => {
                    let inner = &self.text[start + 1..self.pos];
                    self.pos += 1;
                    return (SyntaxKind::StringToken, Some(LiteralValue::String(inner)));
                }
                Some(c) => self.pos += c.len_utf8(),
            }
        }
    }

    fn scan_identifier_or_keyword(&mut self) -> (SyntaxKind, Option<LiteralValue<'a>>) {
        let start = self.pos;
        while let Some(c) = self.current_char().filter(|&c| is_identifier_part(c)) {
            self.pos += c.len_utf8();
        }

        let text = &self.text[start..self.pos];
        match SyntaxKind::from_keyword(text) {
            Some(SyntaxKind::TrueKeyword) => (SyntaxKind::TrueKeyword, Some(LiteralValue::Bool(true))),
            Some(SyntaxKind::FalseKeyword) => (SyntaxKind::FalseKeyword, Some(LiteralValue::Bool(false))),
            Some(keyword) => (keyword, None),
            None => (SyntaxKind::IdentifierToken, None),
        }
    }
}

fn contains_line_break(trivia: &[Trivia<'_>]) -> bool {
    trivia.iter().any(|t| t.kind == SyntaxKind::LineBreakTrivia)
}

#[inline]
fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

#[inline]
fn is_whitespace(c: char) -> bool {
    c.is_whitespace() && !is_line_break(c)
}

#[inline]
fn is_identifier_start(c: char) -> bool {
    c == '_' || unicode_xid::UnicodeXID::is_xid_start(c)
}

#[inline]
fn is_identifier_part(c: char) -> bool {
    unicode_xid::UnicodeXID::is_xid_continue(c)
}
