//! Operator precedence for binary and unary operators.

use metac_syntax::SyntaxKind;

/// Operator precedence levels, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum OperatorPrecedence {
    /// Not an operator in this position.
    Lowest = 0,
    /// `|`, `||`, `^`
    LogicalOr = 1,
    /// `&`, `&&`
    LogicalAnd = 2,
    /// `==`, `!=`, `<`, `<=`, `>`, `>=`
    Comparison = 3,
    /// `+`, `-`
    Additive = 4,
    /// `*`, `/`
    Multiplicative = 5,
    /// Prefix `+`, `-`, `!`, `~`
    Unary = 6,
}

/// Get the binary operator precedence for a given token kind.
pub fn binary_operator_precedence(kind: SyntaxKind) -> OperatorPrecedence {
    match kind {
        SyntaxKind::StarToken | SyntaxKind::SlashToken => OperatorPrecedence::Multiplicative,
        SyntaxKind::PlusToken | SyntaxKind::MinusToken => OperatorPrecedence::Additive,
        SyntaxKind::EqualsEqualsToken
        | SyntaxKind::BangEqualsToken
        | SyntaxKind::LessToken
        | SyntaxKind::LessOrEqualsToken
        | SyntaxKind::GreaterToken
        | SyntaxKind::GreaterOrEqualsToken => OperatorPrecedence::Comparison,
        SyntaxKind::AmpersandToken | SyntaxKind::AmpersandAmpersandToken => OperatorPrecedence::LogicalAnd,
        SyntaxKind::PipeToken | SyntaxKind::PipePipeToken | SyntaxKind::HatToken => OperatorPrecedence::LogicalOr,
        _ => OperatorPrecedence::Lowest,
    }
}

/// Get the prefix unary operator precedence for a given token kind.
pub fn unary_operator_precedence(kind: SyntaxKind) -> OperatorPrecedence {
    match kind {
        SyntaxKind::PlusToken | SyntaxKind::MinusToken | SyntaxKind::BangToken | SyntaxKind::TildeToken => {
            OperatorPrecedence::Unary
        }
        _ => OperatorPrecedence::Lowest,
    }
}
