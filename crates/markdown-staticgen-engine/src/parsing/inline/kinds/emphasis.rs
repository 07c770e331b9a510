/// Bold text, `**like this**`.
pub struct Strong;

impl Strong {
    pub const MARKER: &'static str = "**";
}

/// Italic text, `_like this_`.
pub struct Emphasis;

impl Emphasis {
    pub const MARKER: &'static str = "_";
}
