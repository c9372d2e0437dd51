pub mod node;

pub use node::{Attribute, NodeKind, TreeNode};

/// Tree structure that stores nodes in a Vec for efficient access
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<TreeNode>,
    root_id: usize,
}

impl Tree {
    /// Create a new tree with a root node
    pub fn new(root: TreeNode) -> Self {
        Self {
            nodes: vec![root],
            root_id: 0,
        }
    }

    /// Add a node to the tree and return its ID
    pub fn add_node(&mut self, node: TreeNode) -> usize {
        let id = self.nodes.len();
        self.nodes.push(node);
        id
    }

    /// Add a node as a child of a parent node and return its ID
    pub fn add_child_node(&mut self, parent_id: usize, node: TreeNode) -> usize {
        let node_id = self.add_node(node);
        if let Some(parent) = self.get_node_mut(parent_id) {
            parent.children.push(node_id);
        }
        node_id
    }

    /// Get a reference to a node by ID
    pub fn get_node(&self, id: usize) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    /// Get a mutable reference to a node by ID
    pub fn get_node_mut(&mut self, id: usize) -> Option<&mut TreeNode> {
        self.nodes.get_mut(id)
    }

    /// Get the root node ID
    pub fn root_id(&self) -> usize {
        self.root_id
    }

    /// Child elements of `id` named `name`, in document order
    pub fn child_elements<'a>(
        &'a self,
        id: usize,
        name: &'a str,
    ) -> impl Iterator<Item = usize> + 'a {
        self.get_node(id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
            .iter()
            .copied()
            .filter(move |&child| {
                self.get_node(child)
                    .map(|node| node.is_element(name))
                    .unwrap_or(false)
            })
    }

    /// All elements reached by following `path` from the root, in document order.
    ///
    /// `["rss", "channel", "item"]` yields every `item` of every `channel`
    /// under the `rss` document element.
    pub fn select(&self, path: &[&str]) -> Vec<usize> {
        let mut current = vec![self.root_id];
        for step in path {
            current = current
                .into_iter()
                .flat_map(|id| self.child_elements(id, step).collect::<Vec<_>>())
                .collect();
            if current.is_empty() {
                break;
            }
        }
        current
    }

    /// Concatenated text content directly inside element `id`, trimmed at both ends.
    pub fn text(&self, id: usize) -> String {
        let Some(node) = self.get_node(id) else {
            return String::new();
        };
        let joined: String = node
            .children
            .iter()
            .filter_map(|&child| self.get_node(child))
            .filter(|child| child.kind == NodeKind::Text)
            .map(|child| child.label.as_str())
            .collect();
        joined.trim().to_string()
    }
}
