//! Serialization of a validated table to the line-oriented hex format.
//!
//! One line per row: exactly two lowercase hex digits and a newline.
//! No header, footer, blank lines, or per-glyph separators — simulators
//! load the file with `$readmemh`, which expects this shape exactly.
//! The line count always equals the row count.

use crate::table::FontTable;

/// Render the table as the output text blob.
///
/// Pure: writing the result to storage is the caller's job.
#[must_use]
pub fn emit(table: &FontTable) -> String {
    let mut out = String::with_capacity(table.rows().len() * 3);
    for row in table.rows() {
        out.push_str(&format!("{:02x}\n", row.value));
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
