//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Strong`** / **`Emphasis`**: `**` and `_` paired delimiters
//! - **`CodeSpan`**: `` ` `` paired delimiter
//! - **`Image`** / **`Link`**: `![alt](url)` and `[text](url)` patterns
//!
//! ## Design Principle
//!
//! All delimiter constants and patterns live here, not scattered in parser
//! code. The parser calls these; it never hardcodes `**` or `](`.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::{Image, Link, MarkupMatch};
