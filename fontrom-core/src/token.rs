//! Token types for the font-table scanner.
//!
//! A token is one extracted hexadecimal byte literal: its numeric value
//! and where in the source text it was found. The scan order of the
//! tokens defines the output order; nothing else about the surrounding
//! text is recorded.

use std::fmt;

// ---------------------------------------------------------------------------
// Source location
// ---------------------------------------------------------------------------

/// A byte-offset span in the source input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// One extracted byte literal.
///
/// Semantically a token is one 8-bit raster row of a glyph; 16
/// consecutive tokens form one 8x16 character cell. That grouping is a
/// convention applied later by [`crate::table::FontTable`] — the token
/// itself is just a value and a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The byte value of the literal (digits interpreted as base 16).
    pub value: u8,
    /// Source location of the whole literal, including the `0x` prefix.
    pub span: Span,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.value)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_basics() {
        let s = Span::new(10, 14);
        assert_eq!(s.len(), 4);
        assert!(!s.is_empty());

        let z = Span::new(5, 5);
        assert_eq!(z.len(), 0);
        assert!(z.is_empty());
    }

    #[test]
    fn token_display_is_padded_lowercase() {
        let t = Token {
            value: 0x0a,
            span: Span::new(0, 4),
        };
        assert_eq!(t.to_string(), "0x0a");

        let t = Token {
            value: 0xff,
            span: Span::new(0, 4),
        };
        assert_eq!(t.to_string(), "0xff");
    }
}
