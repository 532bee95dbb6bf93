//! metac_parser: Recursive descent parser for the metac source language.
//!
//! Consumes the lexer's token stream and builds an arena-allocated syntax
//! tree. Parsing never fails: mismatched tokens are reported as diagnostics
//! and replaced by zero-width placeholders so the tree stays well formed.

mod lookahead;
mod parser;
mod precedence;
mod token_stream;

pub use parser::{ParseOptions, Parser};
pub use precedence::{binary_operator_precedence, unary_operator_precedence, OperatorPrecedence};
pub use token_stream::TokenStream;

use bumpalo::Bump;
use metac_core::SourceText;
use metac_syntax::SyntaxTree;

/// Lex and parse a source text with default options.
pub fn parse<'a>(arena: &'a Bump, source: &'a SourceText) -> SyntaxTree<'a> {
    Parser::new(arena, source).parse()
}
