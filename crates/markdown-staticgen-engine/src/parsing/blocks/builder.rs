use crate::error::Result;
use crate::markup::{MarkupNode, spans_to_nodes};
use crate::options::ParseOptions;
use crate::parsing::inline::text_to_spans_with;

use super::{
    classify::block_to_block_type,
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList, list},
    types::BlockKind,
};

const PRE_TAG: &str = "pre";
const CODE_TAG: &str = "code";

/// Builds markup for single blocks, stripping block-level syntax before
/// handing the remaining text to the inline parser.
pub struct BlockBuilder<'o> {
    opts: &'o ParseOptions,
}

impl<'o> BlockBuilder<'o> {
    pub fn new(opts: &'o ParseOptions) -> Self {
        Self { opts }
    }

    /// Classifies `block` and builds its node.
    pub fn build(&self, block: &str) -> Result<MarkupNode> {
        let kind = block_to_block_type(block);
        log::trace!("block classified as {kind:?}");
        match kind {
            BlockKind::Heading => self.heading(block),
            BlockKind::Paragraph => self.wrap_inline(Paragraph::TAG, block),
            BlockKind::Quote => self.wrap_inline(BlockQuote::TAG, &BlockQuote::strip(block)),
            BlockKind::UnorderedList => {
                self.list(UnorderedList::TAG, block.lines().map(UnorderedList::item))
            }
            BlockKind::OrderedList => {
                self.list(OrderedList::TAG, block.lines().map(OrderedList::item))
            }
            BlockKind::Code => Ok(code(block)),
        }
    }

    fn heading(&self, block: &str) -> Result<MarkupNode> {
        match Heading::strip(block) {
            Some((level, text)) => self.wrap_inline(&Heading::tag(level), text),
            // Classification already required a level.
            None => self.wrap_inline(Paragraph::TAG, block),
        }
    }

    fn list<'b>(&self, tag: &str, items: impl Iterator<Item = &'b str>) -> Result<MarkupNode> {
        let children = items
            .map(|item| self.wrap_inline(list::ITEM_TAG, item))
            .collect::<Result<Vec<_>>>()?;
        Ok(MarkupNode::parent(tag, children))
    }

    fn wrap_inline(&self, tag: &str, text: &str) -> Result<MarkupNode> {
        let spans = text_to_spans_with(text, self.opts)?;
        Ok(MarkupNode::parent(tag, spans_to_nodes(spans)))
    }
}

/// Code content is a single raw leaf: no inline parsing inside fences.
fn code(block: &str) -> MarkupNode {
    let content = CodeFence::strip(block);
    MarkupNode::parent(
        PRE_TAG,
        vec![MarkupNode::parent(CODE_TAG, vec![MarkupNode::text(content)])],
    )
}
