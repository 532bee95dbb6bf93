//! The source text of one compilation unit.

use crate::text::{LineAndColumn, LineMap, TextPos, TextSpan};

/// A named piece of source text with a precomputed line map.
///
/// Tokens borrow their text from here, so a `SourceText` must outlive every
/// token and syntax tree built from it.
#[derive(Debug, Clone)]
pub struct SourceText {
    file_name: String,
    text: String,
    line_map: LineMap,
}

impl SourceText {
    pub fn new(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let line_map = LineMap::new(&text);
        Self {
            file_name: file_name.into(),
            text,
            line_map,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn line_map(&self) -> &LineMap {
        &self.line_map
    }

    /// The 0-based line a byte offset falls on.
    pub fn line_of(&self, pos: TextPos) -> u32 {
        self.line_map.line_of(pos)
    }

    pub fn line_and_column_of(&self, pos: TextPos) -> LineAndColumn {
        self.line_map.line_and_column_of(pos)
    }

    /// The text covered by a span, or `""` if the span is out of range.
    pub fn slice(&self, span: TextSpan) -> &str {
        self.text.get(span.to_range()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_text_slice() {
        let source = SourceText::new("main.mc", "int x = 5\nreturn x");
        assert_eq!(source.file_name(), "main.mc");
        assert_eq!(source.slice(TextSpan::new(4, 1)), "x");
        assert_eq!(source.slice(TextSpan::new(100, 3)), "");
        assert_eq!(source.line_of(10), 1);
        assert_eq!(source.line_and_column_of(17), LineAndColumn::new(1, 7));
    }
}
