use serde::{Deserialize, Serialize};

/// Knobs for the inline tokenizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Reject any delimiter left unpaired, not only delimiters that never pair.
    ///
    /// With the default presence check, `**a** b**` keeps the trailing `**`
    /// as plain text. With strict checking it fails.
    pub strict_delimiters: bool,
}

/// Knobs for HTML rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Escape leaf values and attribute values.
    pub escape_html: bool,
    /// Emit attributes attached to parent nodes. Leaf attributes are always emitted.
    pub parent_attributes: bool,
}
