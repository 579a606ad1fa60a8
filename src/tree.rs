//! Longest strictly monotone path in a binary tree.
//!
//! A path is read from one end to the other and its values must be strictly
//! increasing (equivalently, strictly decreasing from the other end). In tree
//! shape a path either runs straight down from a node, or turns at a node:
//! it climbs out of one subtree, passes through the node and descends into
//! the other. Length is counted in edges, so a single node has length 0.
//!
//! The computation is one children-before-parent pass. Each node reports the
//! longest strictly descending and strictly ascending chain that starts at it
//! and goes down, plus the best path anywhere in its subtree. Every node is
//! visited whether or not it extends a chain of its parent.

use std::cmp::Ordering;

/// Which parent→child steps may be part of a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TreeOrdering {
    /// Any strict step up or down.
    #[default]
    Any,
    /// Only steps consistent with a binary search tree: a left child must be
    /// smaller than its parent, a right child larger.
    SearchTree,
}

impl std::str::FromStr for TreeOrdering {
    type Err = crate::error::AlignError;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "search-tree" | "bst" => Ok(Self::SearchTree),
            other => Err(crate::error::AlignError::parse(
                other,
                "expected `any` or `search-tree`",
            )),
        }
    }
}

/// Binary tree node with owned children.
///
/// Insertion, traversal, the path computation and dropping all use explicit
/// stacks, so degenerate trees (e.g. keys inserted in sorted order) are fine
/// at any depth. The derived `Clone`, `PartialEq` and `Debug` still recurse
/// once per level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub value: T,
    pub left: Option<Box<Node<T>>>,
    pub right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, child: Node<T>) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    pub fn with_right(mut self, child: Node<T>) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    fn children(&self) -> impl Iterator<Item = &Node<T>> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        let mut stack = vec![self];
        let mut count = 0;
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }

    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        let mut stack = Vec::new();
        let mut cur = Some(self);
        while cur.is_some() || !stack.is_empty() {
            while let Some(node) = cur {
                stack.push(node);
                cur = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                out.push(&node.value);
                cur = node.right.as_deref();
            }
        }
        out
    }

    pub fn pre_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(&node.value);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        out
    }

    pub fn post_order(&self) -> Vec<&T> {
        // Node, right, left reversed.
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(&node.value);
            stack.extend(node.children());
        }
        out.reverse();
        out
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Ord> Node<T> {
    /// Insert `key` with binary-search-tree placement. Equal keys are ignored.
    pub fn insert(&mut self, key: T) {
        let mut slot = match key.cmp(&self.value) {
            Ordering::Less => &mut self.left,
            Ordering::Greater => &mut self.right,
            Ordering::Equal => return,
        };
        while let Some(node) = slot {
            slot = match key.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return,
            };
        }
        *slot = Some(Box::new(Node::leaf(key)));
    }

    /// Build a binary search tree by inserting `keys` in order. `None` when
    /// `keys` is empty.
    pub fn from_keys<I: IntoIterator<Item = T>>(keys: I) -> Option<Self> {
        let mut keys = keys.into_iter();
        let mut root = Node::leaf(keys.next()?);
        for key in keys {
            root.insert(key);
        }
        Some(root)
    }

    pub fn longest_monotone_path(&self, ordering: TreeOrdering) -> usize {
        runs(self, ordering).best
    }
}

/// Longest strictly monotone path (in edges) in the tree rooted at `root`.
pub fn longest_monotone_path<T: Ord>(root: Option<&Node<T>>, ordering: TreeOrdering) -> usize {
    root.map_or(0, |node| node.longest_monotone_path(ordering))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    Descending,
    Ascending,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Branch {
    Left,
    Right,
}

/// Per-node results of the post-order pass.
#[derive(Debug, Clone, Copy, Default)]
struct Runs {
    /// Longest downward chain with strictly decreasing values.
    descending: usize,
    /// Longest downward chain with strictly increasing values.
    ascending: usize,
    /// Best path anywhere in the subtree.
    best: usize,
}

fn step<T: Ord>(parent: &T, child: &T, branch: Branch, ordering: TreeOrdering) -> Option<Direction> {
    let dir = match child.cmp(parent) {
        Ordering::Less => Direction::Descending,
        Ordering::Greater => Direction::Ascending,
        Ordering::Equal => return None,
    };
    match (ordering, branch, dir) {
        (TreeOrdering::Any, _, _) => Some(dir),
        (TreeOrdering::SearchTree, Branch::Left, Direction::Descending)
        | (TreeOrdering::SearchTree, Branch::Right, Direction::Ascending) => Some(dir),
        (TreeOrdering::SearchTree, _, _) => None,
    }
}

fn runs<T: Ord>(root: &Node<T>, ordering: TreeOrdering) -> Runs {
    // Breadth-first numbering puts every child after its parent, so walking
    // the list backwards resolves children first.
    let mut order = vec![root];
    let mut kids: Vec<[Option<usize>; 2]> = Vec::new();
    let mut next = 0;
    while let Some(&node) = order.get(next) {
        let mut slots = [None, None];
        for (slot, child) in [node.left.as_deref(), node.right.as_deref()].into_iter().enumerate() {
            if let Some(child) = child {
                slots[slot] = Some(order.len());
                order.push(child);
            }
        }
        kids.push(slots);
        next += 1;
    }

    let mut done = vec![Runs::default(); order.len()];
    for idx in (0..order.len()).rev() {
        let node = order[idx];
        let mut out = Runs::default();
        // Chain through each child as (direction, length including the edge).
        let mut arms: [Option<(Direction, usize)>; 2] = [None, None];

        for (slot, branch) in [Branch::Left, Branch::Right].into_iter().enumerate() {
            let Some(child_idx) = kids[idx][slot] else { continue };
            let below = done[child_idx];
            out.best = out.best.max(below.best);
            if let Some(dir) = step(&node.value, &order[child_idx].value, branch, ordering) {
                let len = 1 + match dir {
                    Direction::Descending => below.descending,
                    Direction::Ascending => below.ascending,
                };
                match dir {
                    Direction::Descending => out.descending = out.descending.max(len),
                    Direction::Ascending => out.ascending = out.ascending.max(len),
                }
                arms[slot] = Some((dir, len));
            }
        }

        // Turn at this node: one arm falls, the other rises.
        if let [Some((l_dir, l_len)), Some((r_dir, r_len))] = arms {
            if l_dir != r_dir {
                out.best = out.best.max(l_len + r_len);
            }
        }
        out.best = out.best.max(out.descending).max(out.ascending);
        done[idx] = out;
    }
    done[0]
}
