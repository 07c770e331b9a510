/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// rule matches. The whole block is inline-parsed.
pub struct Paragraph;

impl Paragraph {
    pub const TAG: &'static str = "p";
}
