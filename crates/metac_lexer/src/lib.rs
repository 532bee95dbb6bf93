//! metac_lexer: Turns source text into the token stream the parser consumes.
//!
//! Every byte of the input ends up either in a token's text or in one of its
//! trivia pieces. Characters the language does not know become single-character
//! `BadToken`s plus a diagnostic; the parser later folds those into trivia.

mod lexer;

pub use lexer::Lexer;

use bumpalo::Bump;
use metac_core::SourceText;
use metac_diagnostics::Diagnostic;
use metac_syntax::Token;

/// Lex a whole source text. The returned tokens always end with exactly one
/// `EndOfFileToken`.
pub fn lex<'a>(arena: &'a Bump, source: &'a SourceText) -> (Vec<Token<'a>>, Vec<Diagnostic>) {
    Lexer::new(arena, source).lex()
}
