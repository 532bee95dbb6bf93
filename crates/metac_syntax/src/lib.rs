//! metac_syntax: Token and syntax-tree definitions for the metac translator.
//!
//! Defines the `SyntaxKind` vocabulary shared by lexer, parser and emitter,
//! the `Token`/`Trivia` types, and the arena-allocated node hierarchy
//! (compilation unit, members, statements, expressions).

pub mod accessors;
pub mod node;
pub mod separated_list;
pub mod syntax_kind;
pub mod token;
pub mod tree;

pub use node::*;
pub use separated_list::SeparatedList;
pub use syntax_kind::SyntaxKind;
pub use token::{LiteralValue, Token, TokenFlags, Trivia};
pub use tree::{SyntaxTree, SyntaxTreeId};
