//! Byte spans and the offset-to-line table.
//!
//! Everything that points back into source (tokens, trivia, nodes,
//! diagnostics) does so with a `TextSpan`. `LineMap` resolves those offsets
//! to the line/column pairs printed in diagnostics.

use std::fmt;
use std::ops::Range;

/// Byte offset into a `SourceText`.
pub type TextPos = u32;

/// `start..start + length`, in bytes.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TextSpan {
    pub start: TextPos,
    pub length: TextPos,
}

impl TextSpan {
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    #[inline]
    pub fn from_bounds(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start, "span end {end} before start {start}");
        Self::new(start, end.saturating_sub(start))
    }

    /// Zero-width span, used for missing and synthesized tokens.
    #[inline]
    pub fn empty(at: TextPos) -> Self {
        Self::new(at, 0)
    }

    /// Exclusive end offset.
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }

    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

/// A resolved source position. Both fields are 0-based; `Display` prints
/// them 1-based.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct LineAndColumn {
    pub line: u32,
    /// Byte column within the line.
    pub character: u32,
}

impl LineAndColumn {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

impl fmt::Display for LineAndColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.line + 1, self.character + 1)
    }
}

/// Start offsets of every line in a text.
///
/// `\r\n`, `\n` and a lone `\r` each end a line, the same set the lexer
/// emits as line-break trivia.
#[derive(Debug, Clone)]
pub struct LineMap {
    starts: Vec<TextPos>,
}

impl LineMap {
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut starts = vec![0];
        for i in memchr::memchr2_iter(b'\n', b'\r', bytes) {
            let crlf = bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n');
            if !crlf {
                starts.push((i + 1) as TextPos);
            }
        }
        Self { starts }
    }

    /// 0-based line containing `pos`.
    pub fn line_of(&self, pos: TextPos) -> u32 {
        let after = self.starts.partition_point(|&start| start <= pos);
        after.saturating_sub(1) as u32
    }

    pub fn line_and_column_of(&self, pos: TextPos) -> LineAndColumn {
        let line = self.line_of(pos);
        LineAndColumn::new(line, pos - self.starts[line as usize])
    }

    pub fn line_start(&self, line: u32) -> Option<TextPos> {
        self.starts.get(line as usize).copied()
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }
}
