//! HTML serialization for [`MarkupNode`] trees.

use crate::error::{MarkupError, Result};
use crate::options::RenderOptions;

use super::node::{Attributes, MarkupNode};

/// Tag rendered in self-closing form; its value never reaches the output.
const VOID_TAG: &str = "img";

/// Renders a node and its whole subtree with default options.
pub fn render(node: &MarkupNode) -> Result<String> {
    render_with(node, &RenderOptions::default())
}

/// Renders a node and its whole subtree.
///
/// Fails on the first node that violates the leaf/parent invariants; no
/// partial output is returned.
pub fn render_with(node: &MarkupNode, opts: &RenderOptions) -> Result<String> {
    let mut out = String::new();
    write_node(node, opts, &mut out)?;
    Ok(out)
}

fn write_node(node: &MarkupNode, opts: &RenderOptions, out: &mut String) -> Result<()> {
    match node {
        MarkupNode::Leaf { tag, value, attrs } => {
            let value = value.as_deref().ok_or(MarkupError::MissingValue)?;
            let Some(tag) = tag.as_deref() else {
                write_text(value, opts, out);
                return Ok(());
            };

            write_open(tag, attrs, opts, out);
            if tag == VOID_TAG {
                return Ok(());
            }
            write_text(value, opts, out);
            write_close(tag, out);
        }
        MarkupNode::Parent {
            tag,
            children,
            attrs,
        } => {
            let tag = tag.as_deref().ok_or(MarkupError::MissingTag)?;
            let children = children
                .as_ref()
                .ok_or_else(|| MarkupError::MissingChildren {
                    tag: tag.to_string(),
                })?;

            if opts.parent_attributes {
                write_open(tag, attrs, opts, out);
            } else {
                write_open(tag, &Attributes::new(), opts, out);
            }
            for child in children {
                write_node(child, opts, out)?;
            }
            write_close(tag, out);
        }
    }
    Ok(())
}

fn write_open(tag: &str, attrs: &Attributes, opts: &RenderOptions, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        if opts.escape_html {
            html_escape::encode_double_quoted_attribute_to_string(value, out);
        } else {
            out.push_str(value);
        }
        out.push('"');
    }
    out.push('>');
}

fn write_close(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_text(value: &str, opts: &RenderOptions, out: &mut String) {
    if opts.escape_html {
        html_escape::encode_text_to_string(value, out);
    } else {
        out.push_str(value);
    }
}
