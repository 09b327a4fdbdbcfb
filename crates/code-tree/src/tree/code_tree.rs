//! Prefix-sharing tree built from hierarchical code lists

use crate::parser::Segment;
use crate::tree::{Level, Node, NodeId, Tree};
use log::trace;

/// Name given to the artificial root when none is configured
pub const DEFAULT_ROOT_NAME: &str = "epsilon";

/// Internal node storage
#[derive(Debug, Clone)]
struct Slot {
    /// The node data
    node: Node,
    /// Parent node ID, `None` only for the root
    parent: Option<NodeId>,
    /// Children in creation order
    children: Vec<NodeId>,
}

/// Result of inserting one code path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insertion {
    /// Node at the end of the inserted path
    pub last: NodeId,
    /// Number of nodes created; zero when the path already existed
    pub created: usize,
}

impl Insertion {
    /// Whether the whole path was already present
    pub fn is_duplicate(&self) -> bool {
        self.created == 0
    }
}

/// A tree of code segments that merges shared prefixes
///
/// Code lists are disjoint at the top level, so every tree hangs off an
/// artificial root at level 0. Nodes are appended to an arena and never
/// removed, which makes the arena index a stable creation-order id.
///
/// # Example
///
/// ```
/// use code_tree::tree::prelude::*;
/// use code_tree::parser::parse_line;
///
/// let mut tree = CodeTree::new();
/// tree.insert(&parse_line("A,B").unwrap());
/// tree.insert(&parse_line("A,C").unwrap());
///
/// let a = tree.find_by_path(&["A"]).unwrap();
/// assert_eq!(tree.child_count(a), 2);
/// assert_eq!(tree.node_count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct CodeTree {
    /// Arena storage for nodes, indexed by id
    slots: Vec<Slot>,
}

impl CodeTree {
    /// Most nodes a tree can hold, root included; ids are `u32`
    pub const MAX_NODES: usize = u32::MAX as usize + 1;

    /// Create a tree holding only the default `epsilon` root
    pub fn new() -> Self {
        Self::with_root(DEFAULT_ROOT_NAME)
    }

    /// Create a tree whose root carries the given name
    pub fn with_root(name: impl Into<String>) -> Self {
        let root = Slot {
            node: Node::new(NodeId::ROOT, name, 0.0),
            parent: None,
            children: Vec::new(),
        };

        Self { slots: vec![root] }
    }

    /// Insert a code path, reusing the longest existing prefix
    ///
    /// Matching compares names only, first match among the children in
    /// creation order. Every unmatched segment becomes a new node appended as
    /// the last child of the previous one. Its level is the explicit level
    /// if the segment has one, otherwise the segment's 1-based position.
    pub fn insert(&mut self, segments: &[Segment]) -> Insertion {
        let mut current = NodeId::ROOT;
        let mut matched = 0;

        for segment in segments {
            match self.find_child(current, &segment.name) {
                Some(child) => {
                    current = child;
                    matched += 1;
                }
                None => break,
            }
        }

        for (position, segment) in segments.iter().enumerate().skip(matched) {
            let level = segment.level.unwrap_or((position + 1) as Level);
            current = self.push_child(current, &segment.name, level);
        }

        Insertion {
            last: current,
            created: segments.len() - matched,
        }
    }

    /// Insert a path of plain names with positional levels
    pub fn insert_names<S: AsRef<str>>(&mut self, names: &[S]) -> Insertion {
        let segments: Vec<Segment> = names.iter().map(|n| Segment::new(n.as_ref())).collect();
        self.insert(&segments)
    }

    /// Append a new node under `parent`, taking the next id
    fn push_child(&mut self, parent: NodeId, name: &str, level: Level) -> NodeId {
        let id = NodeId::new(self.next_id());
        trace!("creating {} {:?} at level {} under {}", id, name, level, parent);

        self.slots.push(Slot {
            node: Node::new(id, name, level),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.slots[parent.index()].children.push(id);
        id
    }

    /// Id the next created node will receive
    ///
    /// # Panics
    ///
    /// Panics once the tree holds [`CodeTree::MAX_NODES`] nodes, since no
    /// further id can be handed out.
    pub fn next_id(&self) -> u32 {
        id_for_slot(self.slots.len())
    }

    /// Children of a node as a slice, in creation order
    pub fn child_ids(&self, id: NodeId) -> &[NodeId] {
        self.slots
            .get(id.index())
            .map(|slot| slot.children.as_slice())
            .unwrap_or(&[])
    }

    /// All nodes in id order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.slots.iter().map(|slot| &slot.node)
    }

    /// All parent → child edges, grouped by parent in id order
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.slots
            .iter()
            .flat_map(|slot| slot.children.iter().map(move |&child| (slot.node.id, child)))
    }
}

/// Id of the node stored at arena position `index`
fn id_for_slot(index: usize) -> u32 {
    u32::try_from(index).expect("code tree exceeds CodeTree::MAX_NODES nodes")
}

impl Default for CodeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree for CodeTree {
    fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.index()).map(|slot| &slot.node)
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.index())?.parent
    }

    fn children(&self, id: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(self.child_ids(id).iter().copied())
    }

    fn node_count(&self) -> usize {
        self.slots.len()
    }
}
