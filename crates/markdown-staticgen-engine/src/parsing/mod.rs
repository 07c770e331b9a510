pub mod blocks;
pub mod inline;

use crate::error::Result;
use crate::markup::MarkupNode;
use crate::options::ParseOptions;

use blocks::{BlockBuilder, markdown_to_blocks};

/// Tag of the node that holds every block of a document.
pub const ROOT_TAG: &str = "div";

/// Builds the markup tree for a whole document with default options.
pub fn markdown_to_tree(markdown: &str) -> Result<MarkupNode> {
    markdown_to_tree_with(markdown, &ParseOptions::default())
}

/// Builds the markup tree for a whole document.
///
/// Every block becomes one child of a root `div`, in document order. The
/// first inline parsing failure aborts the whole document.
pub fn markdown_to_tree_with(markdown: &str, opts: &ParseOptions) -> Result<MarkupNode> {
    let blocks = markdown_to_blocks(markdown);
    log::debug!("building markup tree from {} blocks", blocks.len());

    let builder = BlockBuilder::new(opts);
    let children = blocks
        .iter()
        .map(|block| builder.build(block))
        .collect::<Result<Vec<_>>>()?;

    Ok(MarkupNode::parent(ROOT_TAG, children))
}
