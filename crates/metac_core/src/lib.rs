//! metac_core: Core utilities shared by every stage of the metac translator.
//!
//! Provides text spans, line/column mapping and the `SourceText` handle that
//! the lexer, parser, emitter and diagnostics all borrow from.

pub mod source;
pub mod text;

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use source::SourceText;
pub use text::{LineAndColumn, LineMap, TextPos, TextSpan};
