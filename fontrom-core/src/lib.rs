//! Core pipeline for converting an embedded bitmap-font data table to a
//! line-oriented hex file.
//!
//! Three pure stages over one input text blob:
//!
//! 1. [`scanner`] — extract hexadecimal byte literals from arbitrary
//!    source text, in document order.
//! 2. [`table`] — validate that the rows form complete 16-row glyphs.
//! 3. [`emit`] — serialize the rows, one two-digit hex line each.
//!
//! Reading the input and writing the output are the caller's job; this
//! crate never touches the filesystem.

pub mod emit;
pub mod error;
pub mod scanner;
pub mod table;
pub mod token;

pub use emit::emit;
pub use error::{ConvertError, Warning};
pub use scanner::Scanner;
pub use table::{FontTable, EXPECTED_GLYPHS, GLYPH_HEIGHT};
pub use token::{Span, Token};
