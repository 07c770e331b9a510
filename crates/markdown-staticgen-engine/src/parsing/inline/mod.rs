//! # Inline Parsing
//!
//! Turns one run of inline text into an ordered sequence of typed spans.
//!
//! ## Architecture
//!
//! Inline parsing is a fixed pipeline of extraction passes. Every pass takes
//! the previous pass's spans and re-expands only the plain ones; spans that
//! are already typed are passed through untouched:
//!
//! ```text
//! "Hi **a** [b](u)" → bold → italic → code → images → links
//!                   → [Plain "Hi ", Bold "a", Plain " ", Link "b" (u)]
//! ```
//!
//! ## Modules
//!
//! - **`types`**: `TypedSpan` and `SpanKind`
//! - **`kinds`**: Inline-specific types with owned delimiters and patterns
//! - **`cursor`**: `Cursor` for byte-wise delimiter scanning
//! - **`delimiter`**: paired-delimiter pass (`**`, `_`, `` ` ``)
//! - **`links`**: image and link passes
//! - **`parser`**: `text_to_spans()` main entry point

pub mod cursor;
pub mod delimiter;
pub mod kinds;
pub mod links;
pub mod parser;
pub mod types;

pub use delimiter::{Delimiter, split_delimiter};
pub use kinds::{Image, Link};
pub use links::{split_images, split_links};
pub use parser::{text_to_spans, text_to_spans_with};
pub use types::{SpanKind, TypedSpan};

/// All `(alt, url)` image pairs in `text`, left to right.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    Image::extract(text)
}

/// All `(text, url)` link pairs in `text`, left to right, excluding images.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    Link::extract(text)
}
