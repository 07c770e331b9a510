use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies one trimmed, non-empty block.
///
/// Rules apply whole-block and in precedence order; the first that matches
/// wins, and a single non-conforming line disqualifies the line-prefix rules.
pub fn block_to_block_type(block: &str) -> BlockKind {
    if CodeFence::encloses(block) {
        BlockKind::Code
    } else if Heading::level(block).is_some() {
        BlockKind::Heading
    } else if BlockQuote::matches(block) {
        BlockKind::Quote
    } else if UnorderedList::matches(block) {
        BlockKind::UnorderedList
    } else if OrderedList::matches(block) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}
