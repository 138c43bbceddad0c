//! Source positions.

use std::fmt;

/// A line/column position in the source text.
///
/// Lines are one-based and columns are zero-based, as in ESTree's
/// `SourceLocation`. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    line: usize,
    column: usize,
}

impl Position {
    /// Create a position from its line and column.
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }

    /// The one-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The zero-based column number.
    pub fn column(&self) -> usize {
        self.column
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new(1, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The start and end for a span of text.
///
/// The end position is exclusive: it points just past the last character of
/// the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    start: Position,
    end: Position,
}

impl Span {
    /// Create a span from its endpoints.
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// Get the starting line/column in the source file for this span.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Get the ending line/column in the source file for this span.
    pub fn end(&self) -> Position {
        self.end
    }

    /// The span starting where `self` starts and ending where `other` ends.
    pub fn to(self, other: Span) -> Span {
        Span::new(self.start, other.end)
    }
}
