use crate::parsing::inline::{SpanKind, TypedSpan};

use super::node::MarkupNode;

/// Maps one inline span to its leaf node.
pub fn span_to_node(span: TypedSpan) -> MarkupNode {
    let TypedSpan { text, kind } = span;
    match kind {
        SpanKind::Plain => MarkupNode::text(text),
        SpanKind::Bold => MarkupNode::leaf("b", text),
        SpanKind::Italic => MarkupNode::leaf("i", text),
        SpanKind::Code => MarkupNode::leaf("code", text),
        SpanKind::Link { url } => MarkupNode::leaf("a", text).with_attr("href", url),
        SpanKind::Image { url } => MarkupNode::leaf("img", "")
            .with_attr("src", url)
            .with_attr("alt", text),
    }
}

/// Converts a whole span sequence, preserving order.
pub fn spans_to_nodes(spans: Vec<TypedSpan>) -> Vec<MarkupNode> {
    spans.into_iter().map(span_to_node).collect()
}
