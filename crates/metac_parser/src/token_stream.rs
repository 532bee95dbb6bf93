//! Cursor over the lexer's output.
//!
//! Bad tokens never reach the parser: on construction each one is folded
//! into the leading trivia of the next good token as skipped text, so the
//! source stays fully accounted for. Lookahead past the end clamps to the
//! end-of-file token.

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;
use metac_core::text::{TextPos, TextSpan};
use metac_core::SourceText;
use metac_diagnostics::{messages, Diagnostic};
use metac_syntax::{SyntaxKind, Token, TokenFlags, Trivia};

pub struct TokenStream<'a> {
    source: &'a SourceText,
    /// Never empty; the last token is always end-of-file.
    tokens: Vec<Token<'a>>,
    position: usize,
    /// End of the most recently consumed token.
    previous_end: TextPos,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> TokenStream<'a> {
    pub fn new(arena: &'a Bump, source: &'a SourceText, tokens: Vec<Token<'a>>) -> Self {
        let mut tokens = splice_bad_tokens(arena, tokens);
        if tokens.last().map(|t| t.kind) != Some(SyntaxKind::EndOfFileToken) {
            let end = source.len() as TextPos;
            tokens.push(Token::new(SyntaxKind::EndOfFileToken, TextSpan::empty(end), ""));
        }

        Self {
            source,
            tokens,
            position: 0,
            previous_end: 0,
            diagnostics: Vec::new(),
        }
    }

    /// The token `offset` positions ahead of the cursor, or end-of-file.
    pub fn peek(&self, offset: usize) -> Token<'a> {
        let index = self.position.saturating_add(offset).min(self.tokens.len() - 1);
        self.tokens[index]
    }

    pub fn current(&self) -> Token<'a> {
        self.peek(0)
    }

    pub fn current_kind(&self) -> SyntaxKind {
        self.current().kind
    }

    /// Consume the current token. The cursor never moves past end-of-file.
    pub fn advance(&mut self) -> Token<'a> {
        let token = self.current();
        if self.position < self.tokens.len() - 1 {
            self.position += 1;
        }
        self.previous_end = token.span.end();
        token
    }

    /// Index of the current token.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn previous_end(&self) -> TextPos {
        self.previous_end
    }

    #[cfg(test)]
    fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Consume the current token if it has the given kind. Otherwise report
    /// it and return a zero-width placeholder without consuming anything.
    pub fn match_token(&mut self, kind: SyntaxKind) -> Token<'a> {
        let current = self.current();
        if current.kind == kind {
            return self.advance();
        }

        self.diagnostics.push(Diagnostic::at(
            self.source,
            current.span,
            &messages::UNEXPECTED_TOKEN,
            &[&current.kind.to_string(), &kind.to_string()],
        ));
        Token::missing(kind, current.span.start)
    }

    /// Consume the current token only if it has the given kind.
    pub fn eat(&mut self, kind: SyntaxKind) -> Option<Token<'a>> {
        if self.current_kind() == kind {
            Some(self.advance())
        } else {
            None
        }
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

fn splice_bad_tokens<'a>(arena: &'a Bump, tokens: Vec<Token<'a>>) -> Vec<Token<'a>> {
    let mut result = Vec::with_capacity(tokens.len());
    let mut pending: Vec<Token<'a>> = Vec::new();

    for token in tokens {
        if token.kind == SyntaxKind::BadToken {
            pending.push(token);
            continue;
        }
        if pending.is_empty() {
            result.push(token);
            continue;
        }

        let mut line_break = pending[0].has_preceding_line_break() || token.has_preceding_line_break();
        let mut leading = BumpVec::new_in(arena);
        for bad in pending.drain(..) {
            leading.extend_from_slice(bad.leading_trivia);
            leading.push(Trivia::new(SyntaxKind::SkippedTextTrivia, bad.span, bad.text));
            leading.extend_from_slice(bad.trailing_trivia);
            line_break |= bad.trailing_trivia.iter().any(|t| t.kind == SyntaxKind::LineBreakTrivia);
        }
        leading.extend_from_slice(token.leading_trivia);

        let mut spliced = token.with_trivia(leading.into_bump_slice(), token.trailing_trivia);
        if line_break {
            spliced = spliced.with_flags(TokenFlags::PRECEDING_LINE_BREAK);
        }
        result.push(spliced);
    }

    result
}
