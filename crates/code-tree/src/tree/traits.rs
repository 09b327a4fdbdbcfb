//! Read-only navigation over code trees

use crate::tree::{Level, Node, NodeId};

/// A rooted tree of code nodes
///
/// Implementations provide the basic navigation primitives; names, levels,
/// depth and path lookups are derived from them.
///
/// # Example
///
/// ```
/// use code_tree::tree::prelude::*;
///
/// let mut tree = CodeTree::new();
/// tree.insert_names(&["250", "250.0"]);
///
/// let code = tree.find_by_path(&["250", "250.0"]).unwrap();
/// assert_eq!(tree.depth(code), 2);
/// assert_eq!(tree.name(code), Some("250.0"));
/// ```
pub trait Tree {
    /// Get the root node ID (always exists)
    fn root(&self) -> NodeId;

    /// Get a node by its ID
    ///
    /// Returns `None` if the ID is invalid.
    fn get(&self, id: NodeId) -> Option<&Node>;

    /// Get the parent of a node
    ///
    /// Returns `None` for the root node.
    fn parent(&self, id: NodeId) -> Option<NodeId>;

    /// Iterate over children of a node in creation order
    ///
    /// Returns an empty iterator for leaves or invalid IDs.
    fn children(&self, id: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_>;

    /// Count total nodes in the tree, root included
    fn node_count(&self) -> usize;

    /// Get the name of a node
    fn name(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.name.as_str())
    }

    /// Get the level of a node
    fn level(&self, id: NodeId) -> Option<Level> {
        self.get(id).map(|n| n.level)
    }

    /// Count children of a node
    fn child_count(&self, id: NodeId) -> usize {
        self.children(id).count()
    }

    /// Get the number of edges between the root and this node (root = 0)
    fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);
        while let Some(parent_id) = current {
            depth += 1;
            current = self.parent(parent_id);
        }
        depth
    }

    /// First child of `parent` with the given name, scanning in creation order
    fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent).find(|&id| self.name(id) == Some(name))
    }

    /// Find a node by the names below the root, e.g. `["250", "250.0"]`
    ///
    /// An empty path resolves to the root.
    fn find_by_path<S: AsRef<str>>(&self, path: &[S]) -> Option<NodeId>
    where
        Self: Sized,
    {
        path.iter()
            .try_fold(self.root(), |current, name| {
                self.find_child(current, name.as_ref())
            })
    }
}
