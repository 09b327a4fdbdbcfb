use code_tree::prelude::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn build(paths: &[Vec<String>]) -> CodeTree {
    let mut tree = CodeTree::new();
    for path in paths {
        tree.insert_names(path);
    }
    tree
}

#[test]
fn test_end_to_end_scenario() {
    let mut tree = CodeTree::new();
    let report = ingest_str(&mut tree, "A,B\nA,C");
    assert_eq!(report.paths_added, 2);

    let nodes: Vec<_> = tree
        .nodes()
        .map(|n| (n.name.as_str(), n.level))
        .collect();
    assert_eq!(
        nodes,
        vec![("epsilon", 0.0), ("A", 1.0), ("B", 2.0), ("C", 2.0)]
    );

    let tour = EulerTour::traverse(&tree, TourMode::Open);
    assert_eq!(tour.names(), &["epsilon", "A", "B", "A", "C", "A"]);
    assert_eq!(tour.levels(), &[0.0, 1.0, 2.0, 1.0, 2.0, 1.0]);
}

#[test]
fn test_explicit_levels_from_input() {
    let mut tree = CodeTree::new();
    ingest_str(&mut tree, "A:5\nA,B:0.5,C");

    let level = |path: &[&str]| tree.level(tree.find_by_path(path).unwrap());
    assert_eq!(level(&["A"]), Some(5.0));
    assert_eq!(level(&["A", "B"]), Some(0.5));
    assert_eq!(level(&["A", "B", "C"]), Some(3.0));
}

fn code_paths() -> impl Strategy<Value = Vec<Vec<String>>> {
    // A small alphabet keeps prefixes colliding often.
    let segment = prop::sample::select(vec!["a", "b", "c", "d"]).prop_map(String::from);
    prop::collection::vec(prop::collection::vec(segment, 1..5), 0..20)
}

proptest! {
    #[test]
    fn prop_reinsert_is_idempotent(paths in code_paths()) {
        let mut tree = build(&paths);
        let count = tree.node_count();
        for path in &paths {
            let insertion = tree.insert_names(path);
            prop_assert!(insertion.is_duplicate());
        }
        prop_assert_eq!(tree.node_count(), count);
    }

    #[test]
    fn prop_siblings_have_unique_names(paths in code_paths()) {
        let tree = build(&paths);
        for id in tree.nodes().map(|n| n.id) {
            let mut names: Vec<_> = tree.children(id).filter_map(|c| tree.name(c)).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            prop_assert_eq!(names.len(), total);
        }
    }

    #[test]
    fn prop_children_have_larger_ids(paths in code_paths()) {
        let tree = build(&paths);
        for (parent, child) in tree.edges() {
            prop_assert!(parent < child);
        }
        let ids: Vec<u32> = tree.nodes().map(|n| n.id.value()).collect();
        let expected: Vec<u32> = (0..tree.node_count() as u32).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn prop_positional_levels_match_depth(paths in code_paths()) {
        let tree = build(&paths);
        for id in tree.nodes().map(|n| n.id) {
            prop_assert_eq!(tree.level(id), Some(tree.depth(id) as f64));
        }
    }

    #[test]
    fn prop_tour_length_and_determinism(paths in code_paths()) {
        let tree = build(&paths);
        let n = tree.node_count();

        let open = EulerTour::traverse(&tree, TourMode::Open);
        let closed = EulerTour::traverse(&tree, TourMode::Closed);
        prop_assert_eq!(closed.len(), 2 * n - 1);
        prop_assert_eq!(open.len(), if n == 1 { 1 } else { 2 * n - 2 });
        prop_assert_eq!(open.names().len(), open.levels().len());
        prop_assert_eq!(&closed.names()[..open.len()], open.names());

        prop_assert_eq!(EulerTour::traverse(&tree, TourMode::Open), open);
    }

    #[test]
    fn prop_consecutive_records_are_adjacent(paths in code_paths()) {
        let tree = build(&paths);
        let tour = EulerTour::traverse(&tree, TourMode::Closed);
        for pair in tour.levels().windows(2) {
            prop_assert_eq!((pair[0] - pair[1]).abs(), 1.0);
        }
    }
}
