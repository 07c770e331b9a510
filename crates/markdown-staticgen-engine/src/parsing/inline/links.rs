use crate::error::{MarkupError, Result};

use super::{
    kinds::{Image, Link, MarkupMatch},
    types::TypedSpan,
};

/// Pulls every `![alt](url)` out of the plain spans as image spans.
pub fn split_images(spans: Vec<TypedSpan>) -> Result<Vec<TypedSpan>> {
    split_markup(spans, Image::find, |alt, url| {
        (Image::markdown(alt, url), TypedSpan::image(alt, url))
    })
}

/// Pulls every `[text](url)` out of the plain spans as link spans.
///
/// Runs after [`split_images`], but does not rely on it: image syntax is
/// never matched as a link.
pub fn split_links(spans: Vec<TypedSpan>) -> Result<Vec<TypedSpan>> {
    split_markup(spans, Link::find, |text, url| {
        (Link::markdown(text, url), TypedSpan::link(text, url))
    })
}

/// Shared walk for image and link extraction.
///
/// Text is cut at the byte ranges the recognizer reported, so a skipped
/// construct that happens to contain the same literal is never split.
fn split_markup(
    spans: Vec<TypedSpan>,
    find: fn(&str) -> Vec<MarkupMatch>,
    build: impl Fn(&str, &str) -> (String, TypedSpan),
) -> Result<Vec<TypedSpan>> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let found = find(&span.text);
        if found.is_empty() {
            out.push(span);
            continue;
        }

        let text = span.text.as_str();
        let mut pos = 0;
        for m in &found {
            let (markup, typed) = build(m.label.as_str(), m.url.as_str());
            if text.get(m.range.clone()) != Some(markup.as_str()) {
                return Err(MarkupError::MalformedMarkup { markup });
            }
            let before = &text[pos..m.range.start];
            if !before.is_empty() {
                out.push(TypedSpan::plain(before));
            }
            out.push(typed);
            pos = m.range.end;
        }
        let rest = &text[pos..];
        if !rest.is_empty() {
            out.push(TypedSpan::plain(rest));
        }
    }
    Ok(out)
}
