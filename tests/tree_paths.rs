use proptest::prelude::*;
use seqdp::tree::{longest_monotone_path, Node, TreeOrdering};

/// Flattened node: (value, parent, is_left_child).
type Flat = Vec<(i32, Option<usize>, bool)>;

fn flatten(node: &Node<i32>, parent: Option<usize>, is_left: bool, out: &mut Flat) {
    let idx = out.len();
    out.push((node.value, parent, is_left));
    if let Some(l) = &node.left {
        flatten(l, Some(idx), true, out);
    }
    if let Some(r) = &node.right {
        flatten(r, Some(idx), false, out);
    }
}

fn ancestors(flat: &Flat, mut v: usize) -> Vec<usize> {
    let mut out = vec![v];
    while let Some(p) = flat[v].1 {
        out.push(p);
        v = p;
    }
    out
}

/// Node indices on the tree path from `u` to `v`.
fn tree_path(flat: &Flat, u: usize, v: usize) -> Vec<usize> {
    let up_u = ancestors(flat, u);
    let up_v = ancestors(flat, v);
    let lca = *up_u.iter().find(|x| up_v.contains(*x)).unwrap();
    let mut path: Vec<usize> = up_u.iter().copied().take_while(|&x| x != lca).collect();
    path.push(lca);
    let tail: Vec<usize> = up_v.iter().copied().take_while(|&x| x != lca).collect();
    path.extend(tail.into_iter().rev());
    path
}

fn edge_allowed(flat: &Flat, a: usize, b: usize, ordering: TreeOrdering) -> bool {
    let (parent, child) = if flat[b].1 == Some(a) { (a, b) } else { (b, a) };
    let (pv, cv) = (flat[parent].0, flat[child].0);
    match ordering {
        TreeOrdering::Any => pv != cv,
        TreeOrdering::SearchTree => {
            if flat[child].2 {
                cv < pv
            } else {
                cv > pv
            }
        }
    }
}

fn brute_force(root: &Node<i32>, ordering: TreeOrdering) -> usize {
    let mut flat = Vec::new();
    flatten(root, None, false, &mut flat);
    let mut best = 0;
    for u in 0..flat.len() {
        for v in 0..flat.len() {
            let path = tree_path(&flat, u, v);
            let values: Vec<i32> = path.iter().map(|&i| flat[i].0).collect();
            let increasing = values.windows(2).all(|w| w[0] < w[1]);
            let decreasing = values.windows(2).all(|w| w[0] > w[1]);
            let edges_ok = path
                .windows(2)
                .all(|w| edge_allowed(&flat, w[0], w[1], ordering));
            if (increasing || decreasing) && edges_ok {
                best = best.max(path.len() - 1);
            }
        }
    }
    best
}

/// Attach `value` at the first free slot reached by following `bits`.
fn attach(node: &mut Node<i32>, value: i32, bits: u32) {
    let slot = if bits & 1 == 0 {
        &mut node.left
    } else {
        &mut node.right
    };
    match slot {
        Some(child) => attach(child, value, bits >> 1),
        None => *slot = Some(Box::new(Node::leaf(value))),
    }
}

fn arbitrary_tree() -> impl Strategy<Value = Node<i32>> {
    (0i32..8, proptest::collection::vec((0i32..8, any::<u32>()), 0..14)).prop_map(
        |(root, rest)| {
            let mut tree = Node::leaf(root);
            for (value, bits) in rest {
                attach(&mut tree, value, bits);
            }
            tree
        },
    )
}

fn orderings() -> impl Strategy<Value = TreeOrdering> {
    prop_oneof![Just(TreeOrdering::Any), Just(TreeOrdering::SearchTree)]
}

#[test]
fn two_node_tree_both_branches() {
    let ok = Node::leaf(10).with_right(Node::leaf(12));
    let bad = Node::leaf(10).with_right(Node::leaf(8));
    assert_eq!(longest_monotone_path(Some(&ok), TreeOrdering::SearchTree), 1);
    assert_eq!(longest_monotone_path(Some(&bad), TreeOrdering::SearchTree), 0);
    assert_eq!(longest_monotone_path(Some(&bad), TreeOrdering::Any), 1);
}

#[test]
fn search_tree_from_sorted_keys_is_one_chain() {
    let tree = Node::from_keys(1..=6).unwrap();
    assert_eq!(tree.longest_monotone_path(TreeOrdering::SearchTree), 5);
}

proptest! {
    #[test]
    fn matches_brute_force(tree in arbitrary_tree(), ordering in orderings()) {
        prop_assert_eq!(tree.longest_monotone_path(ordering), brute_force(&tree, ordering));
    }

    #[test]
    fn search_tree_never_exceeds_any(tree in arbitrary_tree()) {
        prop_assert!(
            tree.longest_monotone_path(TreeOrdering::SearchTree)
                <= tree.longest_monotone_path(TreeOrdering::Any)
        );
    }

    #[test]
    fn bst_in_order_is_sorted(keys in proptest::collection::vec(-50i32..50, 1..30)) {
        let tree = Node::from_keys(keys.clone()).unwrap();
        let mut expected = keys;
        expected.sort_unstable();
        expected.dedup();
        let in_order: Vec<i32> = tree.in_order().into_iter().copied().collect();
        prop_assert_eq!(in_order, expected);
    }
}
