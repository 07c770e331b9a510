/// Unordered list block type, `- item` per line.
pub struct UnorderedList;

impl UnorderedList {
    pub const PREFIX: &'static str = "- ";
    pub const TAG: &'static str = "ul";

    pub fn matches(block: &str) -> bool {
        block.lines().all(|line| line.starts_with(Self::PREFIX))
    }

    /// Drops the marker and following space.
    pub fn item(line: &str) -> &str {
        line.get(Self::PREFIX.len()..).unwrap_or_default().trim()
    }
}

/// Ordered list block type, `1. item`, `2. item`, ... per line.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: char = '.';
    pub const TAG: &'static str = "ol";

    /// True if line `n` (1-based) starts with `"{n}. "` for every line.
    pub fn matches(block: &str) -> bool {
        block
            .lines()
            .enumerate()
            .all(|(i, line)| line.starts_with(&format!("{}{} ", i + 1, Self::SEPARATOR)))
    }

    /// Everything after the first `.`, trimmed.
    pub fn item(line: &str) -> &str {
        line.split_once(Self::SEPARATOR)
            .map_or(line, |(_, rest)| rest)
            .trim()
    }
}

/// Wraps each item of a list.
pub const ITEM_TAG: &str = "li";
