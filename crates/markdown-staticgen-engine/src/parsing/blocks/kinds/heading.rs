/// ATX heading block type.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Heading level if `block` starts with 1 to 6 `#` and a space.
    pub fn level(block: &str) -> Option<usize> {
        let level = block.chars().take_while(|c| *c == Self::MARKER).count();
        let followed_by_space = block[level..].starts_with(' ');
        ((1..=Self::MAX_LEVEL).contains(&level) && followed_by_space).then_some(level)
    }

    /// Splits a heading block into its level and inline text.
    pub fn strip(block: &str) -> Option<(usize, &str)> {
        let level = Self::level(block)?;
        Some((level, &block[level + 1..]))
    }

    pub fn tag(level: usize) -> String {
        format!("h{level}")
    }
}
