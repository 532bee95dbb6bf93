//! The parsed form of one compilation unit.

use crate::node::CompilationUnit;
use metac_core::SourceText;
use metac_diagnostics::Diagnostic;
use std::sync::atomic::{AtomicU32, Ordering};

/// Identifies the syntax tree a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SyntaxTreeId(pub u32);

static NEXT_TREE_ID: AtomicU32 = AtomicU32::new(1);

impl SyntaxTreeId {
    /// Placeholder for nodes built outside a parse, e.g. in tests.
    pub const DETACHED: SyntaxTreeId = SyntaxTreeId(0);

    /// A process-unique id for a new tree.
    pub fn next() -> Self {
        SyntaxTreeId(NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A parsed compilation unit together with its source and the lexer and
/// parser diagnostics produced while building it.
#[derive(Debug)]
pub struct SyntaxTree<'a> {
    pub id: SyntaxTreeId,
    pub source: &'a SourceText,
    pub root: &'a CompilationUnit<'a>,
    pub diagnostics: Vec<Diagnostic>,
}

impl SyntaxTree<'_> {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}
