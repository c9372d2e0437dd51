/// Represents a single attribute of an XML element.
///
/// # Examples
///
/// ```
/// use wowtool::tree::node::Attribute;
///
/// let attr = Attribute::new("level", "85");
/// assert_eq!(attr.key, "level");
/// assert_eq!(attr.value, "85");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute name
    pub key: String,
    /// The unescaped attribute value
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Kind of node stored in a [`Tree`](crate::tree::Tree).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Synthetic document root holding the top-level elements
    Document,
    /// An XML element
    Element,
    /// Character data (text or CDATA) inside an element
    Text,
}

/// Represents a node in the document tree.
///
/// Elements carry their tag name in `label` and their attributes in
/// `attributes`. Text nodes carry their content in `label` and never have
/// children.
///
/// # Examples
///
/// ```
/// use wowtool::tree::{NodeKind, TreeNode};
///
/// let mut node = TreeNode::element("character");
/// node.add_attribute("name", "Thrall");
///
/// assert_eq!(node.kind, NodeKind::Element);
/// assert_eq!(node.attribute("name"), Some("Thrall"));
/// assert_eq!(node.attribute("guildName"), None);
/// ```
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Tag name for elements, content for text nodes
    pub label: String,

    pub kind: NodeKind,

    /// Attributes in document order
    pub attributes: Vec<Attribute>,

    /// Child node IDs (indices into the tree's node vector)
    pub children: Vec<usize>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            label: label.into(),
            kind,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element node with the given tag name.
    pub fn element(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Element)
    }

    /// Creates a text node holding `content`.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(content, NodeKind::Text)
    }

    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.push(Attribute::new(key, value));
    }

    /// Looks up an attribute value by name.
    ///
    /// The first occurrence wins if the document repeats an attribute.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.key == key)
            .map(|attr| attr.value.as_str())
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns `true` if this is an element named `name`.
    pub fn is_element(&self, name: &str) -> bool {
        self.kind == NodeKind::Element && self.label == name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_attribute_wins() {
        let mut node = TreeNode::element("category");
        node.add_attribute("domain", "type");
        node.add_attribute("domain", "status");
        assert_eq!(node.attribute("domain"), Some("type"));
    }

    #[test]
    fn test_text_node_is_not_element() {
        let node = TreeNode::text("title");
        assert!(!node.is_element("title"));
        assert!(TreeNode::element("title").is_element("title"));
    }
}
