//! Core node types for the code tree

use std::fmt;

/// Hierarchy depth indicator of a node: positional depth or an explicit override.
pub type Level = f64;

/// Unique identifier for a node within a tree
///
/// Ids are handed out in creation order and double as the index into the
/// arena-based storage, so the root always has id 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// The root node always has ID 0
    pub const ROOT: NodeId = NodeId(0);

    /// Create a new NodeId from its raw value
    pub const fn new(id: u32) -> Self {
        NodeId(id)
    }

    /// Get the raw id value
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Get the arena index of this node
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        NodeId(id)
    }
}

impl From<NodeId> for u32 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// A single node in the code tree
///
/// Identity (`id`, `name`) is fixed at creation. Structure (parent and
/// children) lives in the owning tree's arena.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Creation-order identifier
    pub id: NodeId,
    /// The code segment this node stands for
    pub name: String,
    /// Depth indicator, positional or taken from the input
    pub level: Level,
}

impl Node {
    /// Create a new node
    pub fn new(id: NodeId, name: impl Into<String>, level: Level) -> Self {
        Self {
            id,
            name: name.into(),
            level,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (level {}) #{}", self.name, self.level, self.id.0)
    }
}
