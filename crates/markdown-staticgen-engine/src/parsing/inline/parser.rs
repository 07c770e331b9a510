use crate::error::Result;
use crate::options::ParseOptions;

use super::{
    delimiter::{Delimiter, split_delimiter},
    links::{split_images, split_links},
    types::TypedSpan,
};

/// Tokenizes inline text with default options.
pub fn text_to_spans(text: &str) -> Result<Vec<TypedSpan>> {
    text_to_spans_with(text, &ParseOptions::default())
}

/// Tokenizes inline text into an ordered sequence of [`TypedSpan`]s.
///
/// # Stage Order
/// Bold, italic, code, images, links. Each stage only re-expands the plain
/// spans left by the previous one, so `**a_b**` is bold text containing a
/// literal underscore, and a code span never holds a link.
pub fn text_to_spans_with(text: &str, opts: &ParseOptions) -> Result<Vec<TypedSpan>> {
    let mut spans = vec![TypedSpan::plain(text)];
    for delimiter in [Delimiter::Bold, Delimiter::Italic, Delimiter::Code] {
        spans = split_delimiter(spans, delimiter, opts)?;
    }
    spans = split_images(spans)?;
    split_links(spans)
}
