use file_explorer::prelude::*;
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

/// Random tree/navigation operations; `pick` indexes into the live ids
#[derive(Debug, Clone)]
enum TreeOp {
    Insert { pick: usize, folder: bool, name: u8 },
    Rename { pick: usize, name: u8 },
    Remove { pick: usize },
    Select { pick: usize },
    Toggle { pick: usize },
}

fn arb_tree_op() -> impl Strategy<Value = TreeOp> {
    prop_oneof![
        3 => (any::<usize>(), any::<bool>(), any::<u8>())
            .prop_map(|(pick, folder, name)| TreeOp::Insert { pick, folder, name }),
        1 => (any::<usize>(), any::<u8>()).prop_map(|(pick, name)| TreeOp::Rename { pick, name }),
        1 => any::<usize>().prop_map(|pick| TreeOp::Remove { pick }),
        2 => any::<usize>().prop_map(|pick| TreeOp::Select { pick }),
        2 => any::<usize>().prop_map(|pick| TreeOp::Toggle { pick }),
    ]
}

/// Names are drawn from a tiny pool so collisions are common
fn name_for(n: u8) -> String {
    format!("n{}", n % 4)
}

fn live_ids(tree: &TreeStore) -> Vec<NodeId> {
    tree.walk(TraversalOrder::PreOrder).map(Node::id).collect()
}

fn pick(tree: &TreeStore, index: usize) -> NodeId {
    let ids = live_ids(tree);
    ids[index % ids.len()]
}

/// id -> (parent id, ids of children in order)
fn shape(tree: &TreeStore) -> HashMap<NodeId, (Option<NodeId>, Vec<NodeId>)> {
    tree.walk(TraversalOrder::PreOrder)
        .map(|node| {
            let parent = tree.parent(node.id()).map(Node::id);
            let children = node
                .children()
                .unwrap_or_default()
                .iter()
                .map(Node::id)
                .collect();
            (node.id(), (parent, children))
        })
        .collect()
}

fn apply(
    tree: &mut TreeStore,
    nav: &mut NavigationState,
    issued: &mut HashSet<NodeId>,
    op: &TreeOp,
) {
    match *op {
        TreeOp::Insert { pick: p, folder, name } => {
            let parent = pick(tree, p);
            let kind = if folder { NodeKind::Folder } else { NodeKind::File };
            if let Ok(id) = tree.insert(parent, name_for(name), kind) {
                assert!(issued.insert(id), "id {} issued twice", id);
            }
            nav.reconcile(&tree.ids());
        }
        TreeOp::Rename { pick: p, name } => {
            let id = pick(tree, p);
            tree.rename(id, name_for(name)).unwrap();
            nav.reconcile(&tree.ids());
        }
        TreeOp::Remove { pick: p } => {
            let id = pick(tree, p);
            let _ = tree.remove(id);
            nav.reconcile(&tree.ids());
        }
        TreeOp::Select { pick: p } => {
            let id = pick(tree, p);
            nav.select(tree, id).unwrap();
        }
        TreeOp::Toggle { pick: p } => {
            let id = pick(tree, p);
            let _ = nav.toggle(tree, id);
        }
    }
}

fn assert_invariants(tree: &TreeStore, nav: &NavigationState) {
    // Distinct ids and a single path from the root to each node
    assert_eq!(tree.ids().len(), tree.node_count());
    assert!(tree.root().is_folder());
    for id in live_ids(tree) {
        if id != tree.root_id() {
            assert!(tree.parent(id).unwrap().is_folder());
        }
    }

    if let Some(selected) = nav.selected() {
        assert!(tree.contains(selected));
    }
    if let Some(previewed) = nav.previewed() {
        assert!(tree.node(previewed).unwrap().is_file());
    }
    for folder in nav.expanded() {
        assert!(tree.node(*folder).unwrap().is_folder());
    }
}

proptest! {
    /// Invariants hold after any sequence of operations
    #[test]
    fn prop_invariants_hold(ops in prop::collection::vec(arb_tree_op(), 1..60)) {
        let mut tree = TreeStore::default();
        let mut nav = NavigationState::new();
        let mut issued: HashSet<NodeId> = tree.ids();

        for op in &ops {
            apply(&mut tree, &mut nav, &mut issued, op);
            assert_invariants(&tree, &nav);
        }
    }

    /// Rename changes nothing but the name
    #[test]
    fn prop_rename_preserves_shape(
        ops in prop::collection::vec(arb_tree_op(), 0..30),
        target in any::<usize>(),
        name in "[a-z]{1,8}",
    ) {
        let mut tree = TreeStore::default();
        let mut nav = NavigationState::new();
        let mut issued = tree.ids();
        for op in &ops {
            apply(&mut tree, &mut nav, &mut issued, op);
        }

        let id = pick(&tree, target);
        let before = shape(&tree);
        tree.rename(id, name.clone()).unwrap();

        prop_assert_eq!(shape(&tree), before);
        prop_assert_eq!(tree.get(id).unwrap().name(), name.as_str());
    }

    /// Nothing from a removed subtree can be found afterwards, and
    /// navigation no longer refers to it
    #[test]
    fn prop_remove_is_complete(
        ops in prop::collection::vec(arb_tree_op(), 0..40),
        target in any::<usize>(),
    ) {
        let mut tree = TreeStore::default();
        let mut nav = NavigationState::new();
        let mut issued = tree.ids();
        for op in &ops {
            apply(&mut tree, &mut nav, &mut issued, op);
        }

        let id = pick(&tree, target);
        prop_assume!(id != tree.root_id());
        let doomed = tree.get(id).unwrap().subtree_ids();
        let _ = nav.select(&tree, id);

        tree.remove(id).unwrap();
        nav.reconcile(&tree.ids());

        prop_assert!(tree.find_parent(id).is_err());
        for gone in &doomed {
            prop_assert_eq!(tree.get(*gone).unwrap_err().kind(), ErrorKind::NotFound);
            prop_assert!(!nav.expanded().contains(gone));
        }
        prop_assert_eq!(nav.selected(), None);
        prop_assert_eq!(nav.previewed(), None);
    }

    /// Selecting the same file twice leaves nothing previewed
    #[test]
    fn prop_select_file_twice_unpreviews(
        ops in prop::collection::vec(arb_tree_op(), 0..30),
        target in any::<usize>(),
    ) {
        let mut tree = TreeStore::default();
        let mut nav = NavigationState::new();
        let mut issued = tree.ids();
        for op in &ops {
            apply(&mut tree, &mut nav, &mut issued, op);
        }

        let files = tree.files();
        prop_assume!(!files.is_empty());
        let file = files[target % files.len()];

        // Start from a state where nothing is previewed
        nav.select(&tree, tree.root_id()).unwrap();
        nav.select(&tree, file).unwrap();
        prop_assert_eq!(nav.previewed(), Some(file));
        nav.select(&tree, file).unwrap();
        prop_assert_eq!(nav.previewed(), None);
        prop_assert_eq!(nav.selected(), Some(file));
    }
}
