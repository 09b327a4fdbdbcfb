//! Arena-backed code tree and its navigation traits
//!
//! Nodes live in a flat arena and refer to each other by [`NodeId`]; parent
//! links are plain ids, so there are no ownership cycles.

mod code_tree;
mod node;
mod traits;

pub use code_tree::{CodeTree, Insertion, DEFAULT_ROOT_NAME};
pub use node::{Level, Node, NodeId};
pub use traits::Tree;

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{CodeTree, Insertion, Level, Node, NodeId, Tree};
}
