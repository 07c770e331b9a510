//! # markdown-staticgen-engine
//!
//! Converts a markdown document into a tree of markup nodes and renders that
//! tree to HTML.
//!
//! ```text
//! document → blocks → BlockKind → inline spans → MarkupNode tree → HTML
//! ```
//!
//! The engine is pure: no I/O, no global state. Page generation (reading
//! files, templates, output paths) belongs to the caller, which typically
//! needs three calls:
//!
//! ```
//! use markdown_staticgen_engine::{extract_title, markdown_to_tree, render};
//!
//! let md = "# Title\n\nHello **world**";
//! let tree = markdown_to_tree(md)?;
//! assert_eq!(render(&tree)?, "<div><h1>Title</h1><p>Hello <b>world</b></p></div>");
//! assert_eq!(extract_title(md)?, "Title");
//! # Ok::<(), markdown_staticgen_engine::MarkupError>(())
//! ```

pub mod convert;
pub mod error;
pub mod markup;
pub mod options;
pub mod parsing;
pub mod title;

// Re-export key types for easier usage
pub use convert::{Converter, markdown_to_html};
pub use error::{MarkupError, Result};
pub use markup::{Attributes, MarkupNode, render, render_with, span_to_node};
pub use options::{ParseOptions, RenderOptions};
pub use parsing::{
    blocks::{BlockKind, block_to_block_type, markdown_to_blocks},
    inline::{SpanKind, TypedSpan, extract_images, extract_links, text_to_spans},
    markdown_to_tree, markdown_to_tree_with,
};
pub use title::extract_title;
