//! Tokens and trivia.

use crate::syntax_kind::SyntaxKind;
use metac_core::text::{TextPos, TextSpan};

bitflags::bitflags! {
    /// Flags carried by a token.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TokenFlags: u8 {
        const NONE                 = 0;
        /// The token is the first on its source line.
        const PRECEDING_LINE_BREAK = 1 << 0;
        /// Zero-width placeholder inserted by error recovery.
        const MISSING              = 1 << 1;
        /// Inserted by the parser with its default spelling, e.g. an
        /// implicit `public`.
        const SYNTHESIZED          = 1 << 2;
    }
}

/// The value of a literal token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue<'a> {
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// The raw text between the quotes, escapes left as written.
    String(&'a str),
}

/// A piece of non-semantic text attached to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trivia<'a> {
    pub kind: SyntaxKind,
    pub span: TextSpan,
    pub text: &'a str,
}

impl<'a> Trivia<'a> {
    pub fn new(kind: SyntaxKind, span: TextSpan, text: &'a str) -> Self {
        Self { kind, span, text }
    }
}

/// A lexical token. Immutable; trivia slices live in the parse arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub span: TextSpan,
    pub text: &'a str,
    pub value: Option<LiteralValue<'a>>,
    pub leading_trivia: &'a [Trivia<'a>],
    pub trailing_trivia: &'a [Trivia<'a>],
    pub flags: TokenFlags,
}

impl<'a> Token<'a> {
    pub fn new(kind: SyntaxKind, span: TextSpan, text: &'a str) -> Self {
        Self {
            kind,
            span,
            text,
            value: None,
            leading_trivia: &[],
            trailing_trivia: &[],
            flags: TokenFlags::NONE,
        }
    }

    /// A zero-width error-recovery token of `kind` at `pos`.
    pub fn missing(kind: SyntaxKind, pos: TextPos) -> Self {
        Self::new(kind, TextSpan::empty(pos), "").with_flags(TokenFlags::MISSING)
    }

    /// A zero-width token of `kind` at `pos`, spelled the way the kind is
    /// normally spelled.
    pub fn synthesized(kind: SyntaxKind, pos: TextPos) -> Self {
        Self::new(kind, TextSpan::empty(pos), kind.text().unwrap_or(""))
            .with_flags(TokenFlags::SYNTHESIZED)
    }

    pub fn with_value(mut self, value: LiteralValue<'a>) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_trivia(mut self, leading: &'a [Trivia<'a>], trailing: &'a [Trivia<'a>]) -> Self {
        self.leading_trivia = leading;
        self.trailing_trivia = trailing;
        self
    }

    pub fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn is_missing(&self) -> bool {
        self.flags.contains(TokenFlags::MISSING)
    }

    pub fn is_synthesized(&self) -> bool {
        self.flags.contains(TokenFlags::SYNTHESIZED)
    }

    pub fn has_preceding_line_break(&self) -> bool {
        self.flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    /// The span including leading and trailing trivia.
    pub fn full_span(&self) -> TextSpan {
        let start = self
            .leading_trivia
            .first()
            .map_or(self.span.start, |t| t.span.start.min(self.span.start));
        let end = self
            .trailing_trivia
            .last()
            .map_or(self.span.end(), |t| t.span.end().max(self.span.end()));
        TextSpan::from_bounds(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_zero_width() {
        let token = Token::missing(SyntaxKind::IdentifierToken, 12);
        assert!(token.is_missing());
        assert_eq!(token.text, "");
        assert_eq!(token.span, TextSpan::empty(12));
    }

    #[test]
    fn test_synthesized_token_uses_keyword_text() {
        let token = Token::synthesized(SyntaxKind::PublicKeyword, 0);
        assert!(token.is_synthesized());
        assert!(!token.is_missing());
        assert_eq!(token.text, "public");
    }

    #[test]
    fn test_full_span_covers_trivia() {
        let leading = [Trivia::new(SyntaxKind::WhitespaceTrivia, TextSpan::new(0, 2), "  ")];
        let trailing = [Trivia::new(SyntaxKind::LineBreakTrivia, TextSpan::new(3, 1), "\n")];
        let token = Token::new(SyntaxKind::IdentifierToken, TextSpan::new(2, 1), "x")
            .with_trivia(&leading, &trailing);
        assert_eq!(token.full_span(), TextSpan::from_bounds(0, 4));
    }
}
