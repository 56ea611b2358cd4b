//! Validated font table: complete fixed-height glyphs in scan order.

use crate::error::{ConvertError, Warning};
use crate::token::Token;

/// Raster rows per glyph. The table describes an 8-pixel-wide,
/// 16-pixel-tall font: one byte per row, sixteen rows per cell.
pub const GLYPH_HEIGHT: usize = 16;

/// Advisory glyph count: one glyph per byte value of an 8-bit character
/// set, CP437 in the common case. Tables of other sizes are accepted
/// with a warning.
pub const EXPECTED_GLYPHS: usize = 256;

/// The full ordered sequence of glyph rows extracted from one input.
///
/// Construction validates completeness, so holding a `FontTable` means
/// the row count is a multiple of [`GLYPH_HEIGHT`]. The table lives only
/// for the duration of one scan-validate-emit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontTable {
    rows: Vec<Token>,
}

impl FontTable {
    /// Validate a scanned token sequence into a table.
    ///
    /// Fails with [`ConvertError::IncompleteRowData`] if the row count
    /// is not a multiple of [`GLYPH_HEIGHT`]; a partial glyph means the
    /// input is corrupted or the wrong file entirely, and no output may
    /// be produced from it. An empty sequence is a valid (zero-glyph)
    /// table.
    pub fn from_tokens(rows: Vec<Token>) -> Result<Self, ConvertError> {
        if rows.len() % GLYPH_HEIGHT != 0 {
            return Err(ConvertError::IncompleteRowData { rows: rows.len() });
        }
        Ok(Self { rows })
    }

    /// Rows in scan order.
    #[must_use]
    pub fn rows(&self) -> &[Token] {
        &self.rows
    }

    /// Number of complete glyphs.
    #[must_use]
    pub fn glyph_count(&self) -> usize {
        self.rows.len() / GLYPH_HEIGHT
    }

    /// Advisory check against the expected CP437 size.
    ///
    /// Returns a warning when the glyph count differs from
    /// [`EXPECTED_GLYPHS`]. Many legitimate fonts are smaller, so this
    /// never fails the run.
    #[must_use]
    pub fn size_warning(&self) -> Option<Warning> {
        let glyphs = self.glyph_count();
        if glyphs == EXPECTED_GLYPHS {
            None
        } else {
            Some(Warning::UnexpectedGlyphCount { glyphs })
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
