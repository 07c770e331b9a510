/// The kind of a block, derived purely from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Default when no other block rule matches.
    Paragraph,
    /// `#` to `######` followed by a space.
    Heading,
    /// Fenced with ```` ``` ```` lines; content is raw.
    Code,
    /// Every line starts with `> `.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... in order.
    OrderedList,
}
