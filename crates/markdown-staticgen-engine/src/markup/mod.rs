//! # Markup Tree
//!
//! The generic two-kind node tree produced by the document builder, and its
//! HTML rendering.
//!
//! ## Modules
//!
//! - **`node`**: `MarkupNode` (Leaf / Parent) and constructors
//! - **`convert`**: `span_to_node` maps one inline `TypedSpan` to a leaf
//! - **`html`**: `render` / `render_with` serialize a subtree to HTML
//!
//! ## Key Invariants
//!
//! - A leaf never has children; a parent never carries a literal value
//! - Each parent exclusively owns its children (no sharing, no cycles)
//! - Rendering is pure: the same tree always renders to the same string

pub mod convert;
pub mod html;
pub mod node;

pub use convert::{span_to_node, spans_to_nodes};
pub use html::{render, render_with};
pub use node::{Attributes, MarkupNode};
