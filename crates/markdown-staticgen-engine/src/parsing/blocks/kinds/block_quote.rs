/// Blockquote block type with owned delimiter constants.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';
    /// What every line of a quote block must start with.
    pub const LINE_PREFIX: &'static str = "> ";
    pub const TAG: &'static str = "blockquote";

    pub fn matches(block: &str) -> bool {
        block.lines().all(|line| line.starts_with(Self::LINE_PREFIX))
    }

    /// Strips one leading `>` and any whitespace after it.
    pub fn strip_line(line: &str) -> &str {
        line.strip_prefix(Self::PREFIX).unwrap_or(line).trim_start()
    }

    /// The quote's inline text: stripped lines rejoined and trimmed.
    pub fn strip(block: &str) -> String {
        block
            .lines()
            .map(Self::strip_line)
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}
