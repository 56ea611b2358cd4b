//! Error and warning types for the conversion pipeline.
//!
//! Fatal conditions ([`ConvertError`]) stop the run before any output
//! is produced. Advisories ([`Warning`]) are reported to the caller but
//! never change the output or the exit status.

use std::fmt;

use crate::table::{EXPECTED_GLYPHS, GLYPH_HEIGHT};

// ---------------------------------------------------------------------------
// Fatal errors
// ---------------------------------------------------------------------------

/// A fatal condition detected while validating the scanned rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// The row count is not a multiple of [`GLYPH_HEIGHT`], so the last
    /// glyph is incomplete. This indicates a corrupted or mismatched
    /// input file rather than a legitimately smaller font.
    IncompleteRowData {
        /// Actual number of rows scanned.
        rows: usize,
    },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteRowData { rows } => write!(
                f,
                "expected groups of {GLYPH_HEIGHT} rows, got {rows} rows; \
                 is this the correct font table?"
            ),
        }
    }
}

impl std::error::Error for ConvertError {}

// ---------------------------------------------------------------------------
// Warnings
// ---------------------------------------------------------------------------

/// A non-fatal advisory. The run proceeds and output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// Every glyph is complete, but the count differs from the
    /// conventional 256-glyph CP437 layout.
    UnexpectedGlyphCount {
        /// Actual number of complete glyphs.
        glyphs: usize,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedGlyphCount { glyphs } => write!(
                f,
                "expected {EXPECTED_GLYPHS} glyphs (CP437); actual count is {glyphs}"
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
