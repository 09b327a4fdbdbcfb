//! Euler tour linearization of a code tree
//!
//! The tour records every node when it is first discovered and records the
//! parent again each time one of its child subtrees finishes, so every edge is
//! walked down once and up once. Laid out left to right, the level sequence
//! draws the shape of the hierarchy, which is what linear-layout
//! visualizations consume.

use crate::tree::{Level, NodeId, Tree};
use log::trace;

/// Whether the tour ends with the final return to the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TourMode {
    /// Stop at the last backtrack into a child of the root
    #[default]
    Open,
    /// Include the final backtrack into the root
    Closed,
}

/// A step of the depth-first walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourEvent {
    /// Control descends into a node for the first time
    Discover(NodeId),
    /// All children of a node are finished
    Finish(NodeId),
    /// A finished child hands control back to its parent
    Backtrack { parent: NodeId, child: NodeId },
}

/// Walk the tree depth-first from the root, reporting every event
///
/// Children are visited in creation order. The walk keeps an explicit stack
/// of pending child iterators, so hierarchy depth is not bounded by the call
/// stack. For each node, `Finish` precedes the `Backtrack` into its parent;
/// the root finishes last and has no backtrack.
pub fn walk_events<T, F>(tree: &T, mut handler: F)
where
    T: Tree + ?Sized,
    F: FnMut(TourEvent),
{
    let root = tree.root();
    handler(TourEvent::Discover(root));

    let mut stack = vec![(root, tree.children(root))];
    loop {
        let Some((node, children)) = stack.last_mut() else {
            break;
        };
        let node = *node;

        match children.next() {
            Some(child) => {
                handler(TourEvent::Discover(child));
                stack.push((child, tree.children(child)));
            }
            None => {
                stack.pop();
                handler(TourEvent::Finish(node));
                if let Some(parent) = tree.parent(node) {
                    handler(TourEvent::Backtrack {
                        parent,
                        child: node,
                    });
                }
            }
        }
    }
}

/// One visit in the tour
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TourRecord<'a> {
    pub name: &'a str,
    pub level: Level,
}

/// The visited names and levels of a finished traversal
///
/// Both sequences always have the same length; position `i` of one belongs to
/// position `i` of the other.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EulerTour {
    names: Vec<String>,
    levels: Vec<Level>,
}

impl EulerTour {
    /// Traverse the tree and collect the tour
    ///
    /// A tree of `n` nodes yields `2n - 1` records when closed and `2n - 2`
    /// when open (a root-only tree yields the root once either way).
    pub fn traverse<T: Tree + ?Sized>(tree: &T, mode: TourMode) -> Self {
        let mut tour = Self::default();

        walk_events(tree, |event| {
            trace!("{:?}", event);
            match event {
                TourEvent::Discover(id) => tour.record(tree, id),
                TourEvent::Backtrack { parent, .. } => tour.record(tree, parent),
                TourEvent::Finish(_) => {}
            }
        });

        if mode == TourMode::Open && tree.children(tree.root()).next().is_some() {
            tour.names.pop();
            tour.levels.pop();
        }

        tour
    }

    fn record<T: Tree + ?Sized>(&mut self, tree: &T, id: NodeId) {
        if let Some(node) = tree.get(id) {
            self.names.push(node.name.clone());
            self.levels.push(node.level);
        }
    }

    /// Visited names in tour order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Visited levels, aligned with [`names`](Self::names)
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the tour has no records
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over (name, level) records
    pub fn records(&self) -> impl Iterator<Item = TourRecord<'_>> + '_ {
        self.names
            .iter()
            .zip(&self.levels)
            .map(|(name, &level)| TourRecord { name, level })
    }

    /// Split into the two parallel sequences
    pub fn into_parts(self) -> (Vec<String>, Vec<Level>) {
        (self.names, self.levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::CodeTree;
    use pretty_assertions::assert_eq;

    fn two_children() -> CodeTree {
        let mut tree = CodeTree::new();
        tree.insert_names(&["A", "B"]);
        tree.insert_names(&["A", "C"]);
        tree
    }

    #[test]
    fn test_open_tour() {
        let tour = EulerTour::traverse(&two_children(), TourMode::Open);
        assert_eq!(tour.names(), &["epsilon", "A", "B", "A", "C", "A"]);
        assert_eq!(tour.levels(), &[0.0, 1.0, 2.0, 1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_closed_tour_returns_to_root() {
        let tour = EulerTour::traverse(&two_children(), TourMode::Closed);
        assert_eq!(
            tour.names(),
            &["epsilon", "A", "B", "A", "C", "A", "epsilon"]
        );
        assert_eq!(tour.len(), 2 * 4 - 1);
    }

    #[test]
    fn test_root_only_tree() {
        let tree = CodeTree::new();
        for mode in [TourMode::Open, TourMode::Closed] {
            let tour = EulerTour::traverse(&tree, mode);
            assert_eq!(tour.names(), &["epsilon"]);
            assert_eq!(tour.levels(), &[0.0]);
        }
    }

    #[test]
    fn test_sibling_subtrees_pass_through_root() {
        let mut tree = CodeTree::new();
        tree.insert_names(&["A"]);
        tree.insert_names(&["B"]);

        let tour = EulerTour::traverse(&tree, TourMode::Open);
        assert_eq!(tour.names(), &["epsilon", "A", "epsilon", "B"]);
    }

    #[test]
    fn test_event_order() {
        let mut tree = CodeTree::new();
        tree.insert_names(&["A"]);

        let mut events = Vec::new();
        walk_events(&tree, |event| events.push(event));

        let a = NodeId(1);
        assert_eq!(
            events,
            vec![
                TourEvent::Discover(NodeId::ROOT),
                TourEvent::Discover(a),
                TourEvent::Finish(a),
                TourEvent::Backtrack {
                    parent: NodeId::ROOT,
                    child: a
                },
                TourEvent::Finish(NodeId::ROOT),
            ]
        );
    }

    #[test]
    fn test_records_align() {
        let tour = EulerTour::traverse(&two_children(), TourMode::Open);
        let records: Vec<_> = tour.records().map(|r| (r.name, r.level)).collect();
        assert_eq!(records[2], ("B", 2.0));
        assert_eq!(records.len(), tour.len());

        let (names, levels) = tour.into_parts();
        assert_eq!(names.len(), levels.len());
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        let names: Vec<String> = (0..10_000).map(|i| i.to_string()).collect();
        let mut tree = CodeTree::new();
        tree.insert_names(&names);

        let tour = EulerTour::traverse(&tree, TourMode::Closed);
        assert_eq!(tour.len(), 2 * tree.node_count() - 1);
    }
}
