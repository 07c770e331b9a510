use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Alt text holds no brackets; the url runs to the first `)`.
static IMAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\[\]]*)\]\(([^)]*)\)").expect("image pattern compiles")
});

/// Optionally captures a leading `!` so image syntax can be told apart; the
/// regex crate has no lookbehind.
static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!?\[([^\[\]]*)\]\(([^)]*)\)").expect("link pattern compiles")
});

/// One `[label](url)` occurrence and the byte range it covers in the
/// scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupMatch {
    pub range: Range<usize>,
    pub label: String,
    pub url: String,
}

impl MarkupMatch {
    fn from_captures(caps: &Captures<'_>) -> Self {
        Self {
            // Group 0 always participates in a match.
            range: caps.get(0).map_or(0..0, |m| m.range()),
            label: caps[1].to_string(),
            url: caps[2].to_string(),
        }
    }

    fn into_pair(self) -> (String, String) {
        (self.label, self.url)
    }
}

/// Inline image, `![alt](url)`.
pub struct Image;

impl Image {
    pub const MARKER: char = '!';

    /// Every image in `text`, left to right.
    pub fn find(text: &str) -> Vec<MarkupMatch> {
        IMAGE_PATTERN
            .captures_iter(text)
            .map(|caps| MarkupMatch::from_captures(&caps))
            .collect()
    }

    /// All `(alt, url)` pairs in `text`, left to right.
    pub fn extract(text: &str) -> Vec<(String, String)> {
        Self::find(text)
            .into_iter()
            .map(MarkupMatch::into_pair)
            .collect()
    }

    /// The literal markdown for an image.
    pub fn markdown(alt: &str, url: &str) -> String {
        format!("{}[{alt}]({url})", Self::MARKER)
    }
}

/// Inline link, `[text](url)`, never preceded by an image marker.
pub struct Link;

impl Link {
    /// Every link in `text`, left to right. Image syntax is consumed by the
    /// pattern and dropped, so its brackets never surface as a link.
    pub fn find(text: &str) -> Vec<MarkupMatch> {
        LINK_PATTERN
            .captures_iter(text)
            .filter(|caps| !caps[0].starts_with(Image::MARKER))
            .map(|caps| MarkupMatch::from_captures(&caps))
            .collect()
    }

    /// All `(text, url)` pairs in `text`, left to right, skipping images.
    pub fn extract(text: &str) -> Vec<(String, String)> {
        Self::find(text)
            .into_iter()
            .map(MarkupMatch::into_pair)
            .collect()
    }

    /// The literal markdown for a link.
    pub fn markdown(text: &str, url: &str) -> String {
        format!("[{text}]({url})")
    }
}
