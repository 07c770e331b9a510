use crate::error::{MarkupError, Result};
use crate::options::ParseOptions;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Strong},
    types::{SpanKind, TypedSpan},
};

/// A paired inline delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Bold,
    Italic,
    Code,
}

impl Delimiter {
    pub fn marker(self) -> &'static str {
        match self {
            Delimiter::Bold => Strong::MARKER,
            Delimiter::Italic => Emphasis::MARKER,
            Delimiter::Code => CodeSpan::TICK,
        }
    }

    fn kind(self) -> SpanKind {
        match self {
            Delimiter::Bold => SpanKind::Bold,
            Delimiter::Italic => SpanKind::Italic,
            Delimiter::Code => SpanKind::Code,
        }
    }
}

/// Re-expands every plain span around `delimiter` pairs.
///
/// Pairs are matched left to right, each closing at the first following
/// marker. Non-plain spans pass through untouched. A plain span containing
/// the marker with no complete pair fails with
/// [`MarkupError::UnterminatedDelimiter`]; under
/// [`ParseOptions::strict_delimiters`] so does any marker left over after
/// pairing.
pub fn split_delimiter(
    spans: Vec<TypedSpan>,
    delimiter: Delimiter,
    opts: &ParseOptions,
) -> Result<Vec<TypedSpan>> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }
        split_plain(&span.text, delimiter, opts, &mut out)?;
    }
    Ok(out)
}

fn split_plain(
    text: &str,
    delimiter: Delimiter,
    opts: &ParseOptions,
    out: &mut Vec<TypedSpan>,
) -> Result<()> {
    let marker = delimiter.marker();
    if !text.contains(marker) {
        out.push(TypedSpan::plain(text));
        return Ok(());
    }

    let unterminated = || MarkupError::UnterminatedDelimiter {
        delimiter: marker.to_string(),
        text: text.to_string(),
    };

    let mut cur = Cursor::new(text);
    let mut text_start = 0;
    let mut pairs = 0;
    let mut leftover = false;

    let mut flush_plain = |out: &mut Vec<TypedSpan>, fragment: &str| {
        leftover |= fragment.contains(marker);
        if !fragment.is_empty() {
            out.push(TypedSpan::plain(fragment));
        }
    };

    while cur.seek(marker) {
        let start = cur.pos();
        let Some((inner_start, inner_end)) = try_parse_pair(&mut cur, marker) else {
            break;
        };
        flush_plain(out, &text[text_start..start]);
        out.push(TypedSpan::new(&text[inner_start..inner_end], delimiter.kind()));
        text_start = cur.pos();
        pairs += 1;
    }
    flush_plain(out, &text[text_start..]);

    if pairs == 0 || (opts.strict_delimiters && leftover) {
        return Err(unterminated());
    }
    Ok(())
}

/// Parses `marker, run without marker, marker` at the cursor.
///
/// Returns the inner byte range. On failure the cursor is restored.
fn try_parse_pair(cur: &mut Cursor<'_>, marker: &str) -> Option<(usize, usize)> {
    if !cur.starts_with(marker) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(marker.len());
    let inner_start = cur.pos();

    if !cur.seek(marker) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump_n(marker.len());

    Some((inner_start, inner_end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn split(text: &str, delimiter: Delimiter) -> Result<Vec<TypedSpan>> {
        split_delimiter(
            vec![TypedSpan::plain(text)],
            delimiter,
            &ParseOptions::default(),
        )
    }

    #[test]
    fn no_marker_passes_through() {
        assert_eq!(
            split("plain words", Delimiter::Bold).unwrap(),
            vec![TypedSpan::plain("plain words")]
        );
    }

    #[test]
    fn bold_in_the_middle() {
        assert_eq!(
            split("This is **bold** text", Delimiter::Bold).unwrap(),
            vec![
                TypedSpan::plain("This is "),
                TypedSpan::bold("bold"),
                TypedSpan::plain(" text"),
            ]
        );
    }

    #[test]
    fn whole_span_is_delimited() {
        assert_eq!(
            split("`code`", Delimiter::Code).unwrap(),
            vec![TypedSpan::code("code")]
        );
    }

    #[test]
    fn multiple_pairs_are_non_greedy() {
        assert_eq!(
            split("_a_ and _b_", Delimiter::Italic).unwrap(),
            vec![
                TypedSpan::italic("a"),
                TypedSpan::plain(" and "),
                TypedSpan::italic("b"),
            ]
        );
    }

    #[test]
    fn adjacent_pairs_have_no_plain_between() {
        assert_eq!(
            split("**a****b**", Delimiter::Bold).unwrap(),
            vec![TypedSpan::bold("a"), TypedSpan::bold("b")]
        );
    }

    #[test]
    fn bold_inner_may_hold_single_star() {
        assert_eq!(
            split("**a*b**", Delimiter::Bold).unwrap(),
            vec![TypedSpan::bold("a*b")]
        );
    }

    #[test]
    fn empty_pair_yields_empty_typed_span() {
        assert_eq!(
            split("x ``", Delimiter::Code).unwrap(),
            vec![TypedSpan::plain("x "), TypedSpan::code("")]
        );
    }

    #[test]
    fn empty_plain_span_is_kept() {
        assert_eq!(
            split("", Delimiter::Bold).unwrap(),
            vec![TypedSpan::plain("")]
        );
    }

    #[test]
    fn non_plain_spans_pass_through() {
        let spans = vec![TypedSpan::bold("keep _this_"), TypedSpan::plain("_x_")];
        assert_eq!(
            split_delimiter(spans, Delimiter::Italic, &ParseOptions::default()).unwrap(),
            vec![TypedSpan::bold("keep _this_"), TypedSpan::italic("x")]
        );
    }

    #[test]
    fn lone_marker_is_unterminated() {
        assert_eq!(
            split("snake_case", Delimiter::Italic),
            Err(MarkupError::UnterminatedDelimiter {
                delimiter: "_".to_string(),
                text: "snake_case".to_string(),
            })
        );
    }

    #[test]
    fn stray_marker_after_pair_is_kept_by_default() {
        assert_eq!(
            split("**a** b**", Delimiter::Bold).unwrap(),
            vec![TypedSpan::bold("a"), TypedSpan::plain(" b**")]
        );
    }

    #[test]
    fn stray_marker_after_pair_fails_when_strict() {
        let opts = ParseOptions {
            strict_delimiters: true,
        };
        let result = split_delimiter(vec![TypedSpan::plain("**a** b**")], Delimiter::Bold, &opts);
        assert!(matches!(
            result,
            Err(MarkupError::UnterminatedDelimiter { .. })
        ));
    }

    #[test]
    fn multiline_pairs_match() {
        assert_eq!(
            split("**a\nb**", Delimiter::Bold).unwrap(),
            vec![TypedSpan::bold("a\nb")]
        );
    }
}
