//! Textual scanner for hexadecimal byte literals.
//!
//! The input is treated as an unstructured character stream: any
//! substring of the form `0x` followed by one or two hex digits yields
//! a token, wherever it occurs. Surrounding syntax (array brackets,
//! commas, comments, string quotes) is never interpreted, so a literal
//! accidentally embedded in a comment matches too. This is a deliberate
//! trade-off of simplicity over structural correctness.
//!
//! # Match rules
//!
//! | Input      | Tokens produced                                  |
//! |------------|--------------------------------------------------|
//! | `0x3f`     | one token, value `0x3f`                          |
//! | `0x5`      | one token, value `0x05` (single digit)           |
//! | `0xAB`     | one token, value `0xab` (digits case-insensitive)|
//! | `0x123`    | one token, value `0x12` (two digits, greedy)     |
//! | `0X3f`     | nothing (the `x` must be lowercase)              |
//! | `0x,`      | nothing (at least one digit required)            |
//!
//! Matches are non-overlapping and found in document order; scanning
//! resumes after the consumed digits, never inside them.

use crate::token::{Span, Token};

/// Scanner over one input text.
///
/// Works on raw bytes: every byte of a multi-byte UTF-8 sequence is
/// `>= 0x80` and can never be `0`, `x`, or a hex digit, so byte-level
/// scanning finds exactly the matches character-level scanning would.
pub struct Scanner {
    /// Source bytes (owned).
    src: Vec<u8>,
    /// Current byte position.
    pos: usize,
}

impl Scanner {
    /// Create a new scanner over the given source text.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self {
            src: source.as_bytes().to_vec(),
            pos: 0,
        }
    }

    /// Scan forward to the next byte literal and return its token.
    ///
    /// Returns `None` when the rest of the input contains no match.
    pub fn next_token(&mut self) -> Option<Token> {
        while self.pos < self.src.len() {
            if self.src[self.pos] == b'0'
                && self.src.get(self.pos + 1) == Some(&b'x')
                && self
                    .src
                    .get(self.pos + 2)
                    .is_some_and(u8::is_ascii_hexdigit)
            {
                return Some(self.scan_literal());
            }
            self.pos += 1;
        }
        None
    }

    /// Scan all remaining tokens in document order.
    #[must_use]
    pub fn scan_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(tok) = self.next_token() {
            tokens.push(tok);
        }
        tokens
    }

    /// Scan one literal. The caller has verified that `self.pos` is at
    /// a `0`, followed by `x` and at least one hex digit.
    fn scan_literal(&mut self) -> Token {
        let start = self.pos;
        self.pos += 2; // consume "0x"

        let digits_start = self.pos;
        while self.pos < self.src.len()
            && self.pos - digits_start < 2
            && self.src[self.pos].is_ascii_hexdigit()
        {
            self.pos += 1;
        }

        let text = &self.src[digits_start..self.pos];
        // One or two ASCII hex digits; cannot fail to parse or overflow.
        let s = std::str::from_utf8(text).unwrap_or("0");
        let value = u8::from_str_radix(s, 16).unwrap_or(0);

        Token {
            value,
            span: Span::new(start, self.pos),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
