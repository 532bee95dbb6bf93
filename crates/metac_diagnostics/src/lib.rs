//! metac_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! Lexer, parser and emitter never fail on malformed input; they append
//! `Diagnostic`s to a collection instead and keep going. The host decides
//! whether the accumulated diagnostics block writing output.

use metac_core::text::{LineAndColumn, TextSpan};
use metac_core::SourceText;
use std::fmt;

mod render;

pub use render::RenderedDiagnostic;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
            DiagnosticCategory::Message => write!(f, "message"),
        }
    }
}

/// An entry in the message table: code, severity and text template.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code, displayed as `MC<code>`.
    pub code: u32,
    pub category: DiagnosticCategory,
    /// The message template. May contain `{0}`, `{1}`, ... placeholders.
    pub message: &'static str,
}

/// One reported problem, with its template filled in and its location
/// resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// The file the diagnostic was reported in, if any.
    pub file: Option<String>,
    /// The source span the diagnostic points at, if any.
    pub span: Option<TextSpan>,
    /// Line and column of `span.start`, resolved at creation time.
    pub position: Option<LineAndColumn>,
    pub message_text: String,
    pub code: u32,
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            span: None,
            position: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a diagnostic pointing at a span of a source file.
    pub fn at(source: &SourceText, span: TextSpan, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: Some(source.file_name().to_string()),
            span: Some(span),
            position: Some(source.line_and_column_of(span.start)),
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }

    /// The code as users see it, e.g. `MC1012`.
    pub fn code_string(&self) -> String {
        format!("MC{}", self.code)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(file) = &self.file {
            f.write_str(file)?;
            if let Some(position) = self.position {
                write!(f, "({position})")?;
            }
            write!(f, ": ")?;
        }
        write!(f, "{} MC{}: {}", self.category, self.code, self.message_text)
    }
}

/// Fill `{0}`, `{1}`, ... in `template` from `args`. Placeholders without a
/// matching argument are left as written.
pub fn format_message(template: &str, args: &[&str]) -> String {
    args.iter()
        .enumerate()
        .fold(template.to_string(), |text, (i, arg)| text.replace(&format!("{{{i}}}"), arg))
}

/// An append-only collection of diagnostics.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Warning)
            .count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn extend(&mut self, other: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(other);
    }

    /// Sort diagnostics by file and position. Stable, so diagnostics at the
    /// same position keep their report order.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| {
            a.file
                .cmp(&b.file)
                .then_with(|| a.span.map(|s| s.start).cmp(&b.span.map(|s| s.start)))
        });
    }
}

impl IntoIterator for DiagnosticCollection {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

// ----------------------------------------------------------------------------
// Message table
// ----------------------------------------------------------------------------

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
    }

    // Lexer (1000-1009)
    pub const BAD_CHARACTER: DiagnosticMessage = diag!(1001, Error, "Bad character input: '{0}'.");
    pub const UNTERMINATED_STRING: DiagnosticMessage = diag!(1002, Error, "Unterminated string literal.");
    pub const INVALID_NUMBER: DiagnosticMessage = diag!(1004, Error, "The number {0} isn't a valid {1}.");
    pub const UNTERMINATED_COMMENT: DiagnosticMessage = diag!(1010, Error, "'*/' expected.");

    // Parser (1010-1099)
    pub const UNEXPECTED_TOKEN: DiagnosticMessage = diag!(1012, Error, "Unexpected token <{0}>, expected <{1}>.");
    pub const EXPRESSION_TOO_DEEP: DiagnosticMessage = diag!(1013, Error, "Expression or statement nesting is too deep.");

    // Emitter (5000-5099)
    pub const NO_TRANSLATION_FOR_TOKEN: DiagnosticMessage =
        diag!(5001, Warning, "No target translation for token kind '{0}'; '{1}' was emitted unchanged.");
}
