//! Bridge from `Diagnostic` to `miette` for terminal rendering.

use crate::{Diagnostic, DiagnosticCategory};
use miette::{LabeledSpan, NamedSource, Severity, SourceCode, SourceSpan};
use std::fmt;

/// A diagnostic paired with the source text it points into, renderable by
/// any `miette` report handler.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct RenderedDiagnostic {
    message: String,
    code: String,
    severity: Severity,
    src: NamedSource<String>,
    span: Option<SourceSpan>,
}

impl RenderedDiagnostic {
    pub fn new(diagnostic: &Diagnostic, file_name: &str, text: &str) -> Self {
        let severity = match diagnostic.category {
            DiagnosticCategory::Error => Severity::Error,
            DiagnosticCategory::Warning => Severity::Warning,
            DiagnosticCategory::Message => Severity::Advice,
        };
        Self {
            message: diagnostic.message_text.clone(),
            code: diagnostic.code_string(),
            severity,
            src: NamedSource::new(file_name, text.to_string()),
            span: diagnostic
                .span
                .map(|span| SourceSpan::from((span.start as usize, span.length as usize))),
        }
    }
}

impl miette::Diagnostic for RenderedDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.code))
    }

    fn severity(&self) -> Option<Severity> {
        Some(self.severity)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span?;
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(None, span))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages;
    use metac_core::{SourceText, TextSpan};
    use miette::Diagnostic as _;

    #[test]
    fn test_rendered_diagnostic_carries_code_and_label() {
        let source = SourceText::new("main.mc", "int x = #");
        let diag = Diagnostic::at(&source, TextSpan::new(8, 1), &messages::BAD_CHARACTER, &["#"]);
        let rendered = RenderedDiagnostic::new(&diag, source.file_name(), source.text());

        assert_eq!(rendered.to_string(), "Bad character input: '#'.");
        assert_eq!(rendered.code().map(|c| c.to_string()).as_deref(), Some("MC1001"));
        assert_eq!(rendered.severity(), Some(Severity::Error));
        let labels: Vec<_> = rendered.labels().into_iter().flatten().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 8);
        assert_eq!(labels[0].len(), 1);
    }
}
