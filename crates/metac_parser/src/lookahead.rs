//! Bounded lookahead decisions.
//!
//! The grammar is not LL(1): whether a line is a function declaration, and
//! whether `a.b...` is a call, an indexed access or a plain dotted name,
//! is decided by scanning a fixed window of tokens ahead of the cursor.

use crate::parser::Parser;
use metac_syntax::{SyntaxKind, Token};

/// Last offset past the current token that member classification inspects.
pub(crate) const MEMBER_LOOKAHEAD: usize = 7;

/// How far past the current token dotted-access classification looks.
pub(crate) const DOTTED_LOOKAHEAD: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MemberKind {
    FunctionDeclaration,
    GlobalStatement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DottedAccess {
    Call,
    ArrayAccess,
    Name,
}

impl<'a> Parser<'a> {
    /// A top-level member is a function declaration when an `(` follows an
    /// identifier name within the window, on the current line, before
    /// anything that can only start a statement.
    pub(crate) fn classify_member(&self) -> MemberKind {
        let current = self.tokens.current();
        if current.kind == SyntaxKind::OpenBraceToken || current.kind.is_statement_keyword() {
            return MemberKind::GlobalStatement;
        }

        for offset in 1..=MEMBER_LOOKAHEAD {
            let token = self.tokens.peek(offset);
            if token.kind == SyntaxKind::EndOfFileToken || token.has_preceding_line_break() {
                break;
            }
            match token.kind {
                SyntaxKind::OpenParenthesisToken => {
                    let name = self.tokens.peek(offset - 1);
                    if offset >= 2 && name.kind == SyntaxKind::IdentifierToken {
                        tracing::trace!(offset, name = name.text, "member is a function declaration");
                        return MemberKind::FunctionDeclaration;
                    }
                    return MemberKind::GlobalStatement;
                }
                SyntaxKind::PeriodToken => return MemberKind::GlobalStatement,
                kind if kind.is_assignment_operator() || kind.is_increment_or_decrement() => {
                    return MemberKind::GlobalStatement;
                }
                _ => {}
            }
        }

        MemberKind::GlobalStatement
    }

    /// Classify `identifier . ...` by the first `(` or `[` in the window.
    /// The window ends at the end of the line.
    pub(crate) fn classify_dotted_access(&self) -> DottedAccess {
        for offset in 1..DOTTED_LOOKAHEAD {
            let token = self.tokens.peek(offset);
            if token.has_preceding_line_break() {
                break;
            }
            match token.kind {
                SyntaxKind::OpenParenthesisToken => return DottedAccess::Call,
                SyntaxKind::OpenSquareBracketToken => return DottedAccess::ArrayAccess,
                SyntaxKind::EndOfFileToken => break,
                _ => {}
            }
        }
        DottedAccess::Name
    }

    /// `Point p`, `Point[] ps`: a statement that declares a variable of a
    /// user-named type.
    pub(crate) fn at_named_type_declaration(&self) -> bool {
        if self.tokens.current_kind() != SyntaxKind::IdentifierToken {
            return false;
        }
        let next = self.tokens.peek(1);
        if next.has_preceding_line_break() {
            return false;
        }
        match next.kind {
            SyntaxKind::IdentifierToken => true,
            SyntaxKind::OpenSquareBracketToken => {
                self.tokens.peek(2).kind == SyntaxKind::CloseSquareBracketToken
                    && self.tokens.peek(3).kind == SyntaxKind::IdentifierToken
            }
            _ => false,
        }
    }

    /// A function's return type is present when the token after the
    /// modifiers is a type and is not itself the function name.
    pub(crate) fn at_return_type(&self) -> bool {
        let current = self.tokens.current_kind();
        let is_type = current.is_type_keyword() || current == SyntaxKind::IdentifierToken;
        is_type && self.tokens.peek(1).kind != SyntaxKind::OpenParenthesisToken
    }
}

/// An identifier whose trailing trivia starts with layout (whitespace or a
/// line break) does not continue into a following `.`.
pub(crate) fn ends_with_layout_break(token: &Token<'_>) -> bool {
    token
        .trailing_trivia
        .first()
        .is_some_and(|t| matches!(t.kind, SyntaxKind::WhitespaceTrivia | SyntaxKind::LineBreakTrivia))
}
