/// Fenced code block type with owned fence constant.
///
/// Code blocks are raw zones: their content never goes through inline parsing.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// True if the block opens and closes with a bare fence line.
    ///
    /// A lone fence line is not a code block.
    pub fn encloses(block: &str) -> bool {
        let lines: Vec<&str> = block.lines().collect();
        lines.len() >= 2
            && lines.first().is_some_and(|l| *l == Self::FENCE)
            && lines.last().is_some_and(|l| *l == Self::FENCE)
    }

    /// The block's content with the opening and closing fence lines removed.
    pub fn strip(block: &str) -> String {
        let mut lines: Vec<&str> = block.lines().collect();
        if lines.first().is_some_and(|l| *l == Self::FENCE) {
            lines.remove(0);
        }
        if lines.last().is_some_and(|l| *l == Self::FENCE) {
            lines.pop();
        }
        lines.join("\n")
    }
}
