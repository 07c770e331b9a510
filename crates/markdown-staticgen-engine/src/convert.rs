use crate::error::Result;
use crate::markup::{MarkupNode, render_with};
use crate::options::{ParseOptions, RenderOptions};
use crate::parsing::markdown_to_tree_with;

/// Parse and render options bundled for repeated conversions.
///
/// Holds no state between calls; one `Converter` can be shared across
/// threads and documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    pub parse: ParseOptions,
    pub render: RenderOptions,
}

impl Converter {
    pub fn new(parse: ParseOptions, render: RenderOptions) -> Self {
        Self { parse, render }
    }

    pub fn to_tree(&self, markdown: &str) -> Result<MarkupNode> {
        markdown_to_tree_with(markdown, &self.parse)
    }

    pub fn render(&self, node: &MarkupNode) -> Result<String> {
        render_with(node, &self.render)
    }

    /// Builds the tree for `markdown` and renders it to HTML.
    pub fn to_html(&self, markdown: &str) -> Result<String> {
        let tree = self.to_tree(markdown)?;
        self.render(&tree)
    }
}

/// Converts a document straight to HTML with default options.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    Converter::default().to_html(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converter_applies_render_options() {
        let converter = Converter::new(
            ParseOptions::default(),
            RenderOptions {
                escape_html: true,
                ..RenderOptions::default()
            },
        );
        assert_eq!(
            converter.to_html("a < b").unwrap(),
            "<div><p>a &lt; b</p></div>"
        );
    }

    #[test]
    fn converter_applies_parse_options() {
        let strict = Converter::new(
            ParseOptions {
                strict_delimiters: true,
            },
            RenderOptions::default(),
        );
        assert!(strict.to_html("**a** b**").is_err());
        assert!(Converter::default().to_html("**a** b**").is_ok());
    }

    #[test]
    fn default_conversion() {
        assert_eq!(
            markdown_to_html("# Hi").unwrap(),
            "<div><h1>Hi</h1></div>"
        );
    }
}
