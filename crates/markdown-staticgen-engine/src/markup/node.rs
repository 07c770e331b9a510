use serde::{Deserialize, Serialize};

/// Ordered key/value attributes. Insertion order is serialization order.
pub type Attributes = Vec<(String, String)>;

/// A node in the markup tree.
///
/// `value`, the parent `tag` and `children` are optional in the model so that
/// trees built outside the document builder (deserialized, hand-assembled)
/// can still be represented; [`render`](super::render) rejects the ones that
/// violate the leaf/parent invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum MarkupNode {
    /// A literal value, optionally wrapped in an element.
    Leaf {
        /// `None` emits the raw value with no wrapping element.
        #[serde(default)]
        tag: Option<String>,
        #[serde(default)]
        value: Option<String>,
        #[serde(default)]
        attrs: Attributes,
    },
    /// An element whose content is the concatenation of its rendered children.
    Parent {
        #[serde(default)]
        tag: Option<String>,
        /// Empty is valid; `None` is rejected at render time.
        #[serde(default)]
        children: Option<Vec<MarkupNode>>,
        #[serde(default)]
        attrs: Attributes,
    },
}

impl MarkupNode {
    /// Untagged leaf: renders as its raw value.
    pub fn text(value: impl Into<String>) -> Self {
        MarkupNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        MarkupNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<MarkupNode>) -> Self {
        MarkupNode::Parent {
            tag: Some(tag.into()),
            children: Some(children),
            attrs: Attributes::new(),
        }
    }

    /// Appends an attribute, keeping earlier ones first.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            MarkupNode::Leaf { attrs, .. } | MarkupNode::Parent { attrs, .. } => {
                attrs.push((key.into(), value.into()));
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            MarkupNode::Leaf { tag, .. } | MarkupNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    /// The literal value of a leaf; always `None` for a parent.
    pub fn value(&self) -> Option<&str> {
        match self {
            MarkupNode::Leaf { value, .. } => value.as_deref(),
            MarkupNode::Parent { .. } => None,
        }
    }

    /// Children of a parent; empty for a leaf or a parent missing its children.
    pub fn children(&self) -> &[MarkupNode] {
        match self {
            MarkupNode::Leaf { .. } => &[],
            MarkupNode::Parent { children, .. } => children.as_deref().unwrap_or_default(),
        }
    }

    pub fn attrs(&self) -> &Attributes {
        match self {
            MarkupNode::Leaf { attrs, .. } | MarkupNode::Parent { attrs, .. } => attrs,
        }
    }
}
