//! # Block Parsing
//!
//! Whole-block classification and markup construction.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): the document is cut into trimmed blocks at
//!    blank lines
//! 2. **Classification** (`classify`): each block maps to exactly one
//!    `BlockKind`, first matching rule wins
//! 3. **Construction** (`builder`): `BlockBuilder` strips block syntax and
//!    wraps inline-parsed text in the block's element
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading, ...)
//! - **`split`**: `markdown_to_blocks`
//! - **`classify`**: `block_to_block_type`
//! - **`builder`**: `BlockBuilder`
//!
//! ## Key Invariants
//!
//! - No nesting: a block is exactly one construct
//! - Line-prefix rules are all-or-nothing across the block
//! - Fenced code blocks are raw zones: no inline parsing inside

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::block_to_block_type;
pub use split::markdown_to_blocks;
pub use types::BlockKind;
