//! Language variants.
//!
//! Each variant decides, from the char under the cursor, which shared scan to run and how to
//! color the result. Line splitting and terminator push-back live in [`crate::scan`] only.

mod c_like;
mod json;
mod markdown;
mod plain;
mod python;

pub use c_like::CLike;
pub use json::Json;
pub use markdown::Markdown;
pub use plain::Plain;
pub use python::Python;

use crate::cursor::ScanCursor;
use crate::scan::Scanned;

/// A lexical highlighter for one language.
pub trait Language: Send + Sync {
    fn name(&self) -> &'static str;

    /// Scan the next token group at the cursor. Returns the tokens and whether input is exhausted.
    fn scan_next_token(&self, cursor: &mut ScanCursor) -> Scanned;
}
