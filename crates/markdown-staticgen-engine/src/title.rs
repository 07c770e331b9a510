use crate::error::{MarkupError, Result};

/// Marks a level-1 heading line. Deeper levels never match.
const TITLE_PREFIX: &str = "# ";

/// Returns the text of the first level-1 heading line in the document.
///
/// Lines are trimmed before matching, so indented headings count. This scan
/// is independent of block parsing: a `# ` line anywhere qualifies, even
/// inside a fenced code block.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(TITLE_PREFIX))
        .map(|title| title.trim().to_string())
        .ok_or(MarkupError::NoHeadingFound)
}
