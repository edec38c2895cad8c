//! Properties of the three traversal orders over trees built through the public API.

use std::collections::BTreeSet;

use bstree::{Error, Node, Traversal, Tree};
use quickcheck::quickcheck;

/// Preorder of the subtree rooted at `node`, computed from the structure `get_root` exposes.
fn expected_preorder(root: Option<&Node<i16>>) -> Vec<i16> {
    let mut out = Vec::new();
    let mut pending: Vec<&Node<i16>> = root.into_iter().collect();
    while let Some(node) = pending.pop() {
        out.push(*node.element());
        pending.extend(node.right());
        pending.extend(node.left());
    }
    out
}

/// Number of nodes in the subtree rooted at `node`.
fn subtree_len(node: &Node<i16>) -> usize {
    expected_preorder(Some(node)).len()
}

#[test]
fn seven_node_scenario() {
    let mut tree = Tree::new();
    for x in [5, 3, 8, 1, 4, 7, 9] {
        assert!(tree.add(x));
    }

    let inorder: Vec<_> = tree.inorder_iter().copied().collect();
    let preorder: Vec<_> = tree.preorder_iter().copied().collect();
    let postorder: Vec<_> = tree.postorder_iter().copied().collect();
    assert_eq!(inorder, [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(preorder, [5, 3, 1, 4, 8, 7, 9]);
    assert_eq!(postorder, [1, 4, 3, 7, 9, 8, 5]);
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.len(), 7);

    assert_eq!(tree.remove_min().map(Node::into_element), Some(1));
    assert_eq!(tree.len(), 6);
    assert_eq!(tree.search(&8).map(Node::element), Some(&8));
    assert!(tree.search(&2).is_none());
}

#[test]
fn empty_scenario() {
    let tree: Tree<i16> = Tree::new();

    assert_eq!(tree.get_root().err(), Some(Error::EmptyTree));
    assert_eq!(tree.height(), 0);
    assert!(!tree.inorder_iter().has_next());
}

#[test]
fn for_loop_walks_inorder() {
    let tree: Tree<_> = ["m", "c", "x", "a"].into_iter().collect();
    let mut seen = Vec::new();
    for word in &tree {
        seen.push(*word);
    }

    assert_eq!(seen, ["a", "c", "m", "x"]);
}

quickcheck! {
    fn inorder_is_sorted_and_complete(xs: Vec<i16>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let expected: BTreeSet<_> = xs.into_iter().collect();

        tree.inorder_iter().count() == tree.len() && tree.inorder_iter().eq(expected.iter())
    }
}

quickcheck! {
    fn duplicate_add_changes_nothing(xs: Vec<i16>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let len = tree.len();

        xs.iter().all(|x| !tree.add(*x)) && tree.len() == len
    }
}

quickcheck! {
    fn remove_min_takes_the_smallest(xs: Vec<i16>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let len = tree.len();

        match (xs.iter().min(), tree.remove_min()) {
            (Some(min), Some(node)) => {
                node.element() == min && tree.len() == len - 1 && !tree.contains(min)
            }
            (None, None) => tree.is_empty(),
            _ => false,
        }
    }
}

quickcheck! {
    fn remove_max_takes_the_largest(xs: Vec<i16>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let len = tree.len();

        match (xs.iter().max(), tree.remove_max()) {
            (Some(max), Some(node)) => {
                node.element() == max && tree.len() == len - 1 && !tree.contains(max)
            }
            (None, None) => tree.is_empty(),
            _ => false,
        }
    }
}

quickcheck! {
    fn preorder_puts_each_root_before_its_subtree(xs: Vec<i16>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let preorder: Vec<_> = tree.preorder_iter().copied().collect();
        if preorder != expected_preorder(tree.get_root().ok()) {
            return false;
        }

        // Every node starts a contiguous run holding exactly its subtree.
        let mut pending: Vec<&Node<i16>> = tree.get_root().ok().into_iter().collect();
        while let Some(node) = pending.pop() {
            let start = match preorder.iter().position(|x| x == node.element()) {
                Some(start) => start,
                None => return false,
            };
            let run = &preorder[start..start + subtree_len(node)];
            if run != expected_preorder(Some(node)).as_slice() {
                return false;
            }
            pending.extend(node.left());
            pending.extend(node.right());
        }
        true
    }
}

quickcheck! {
    fn postorder_ends_with_the_root(xs: Vec<i16>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let last = tree.postorder_iter().last();

        last == tree.get_root().ok().map(Node::element)
            && tree.postorder_iter().len() == tree.len()
    }
}

quickcheck! {
    fn postorder_is_mirrored_preorder_reversed(xs: Vec<i16>) -> bool {
        // Postorder (left, right, root) reversed is root, right, left.
        let tree: Tree<_> = xs.into_iter().collect();
        let mut reversed: Vec<_> = tree.postorder_iter().copied().collect();
        reversed.reverse();

        let mut mirrored = Vec::new();
        let mut pending: Vec<&Node<i16>> = tree.get_root().ok().into_iter().collect();
        while let Some(node) = pending.pop() {
            mirrored.push(*node.element());
            pending.extend(node.left());
            pending.extend(node.right());
        }

        reversed == mirrored
    }
}

#[test]
fn sorted_input_heights() {
    for n in [1usize, 2, 10, 500] {
        let ascending: Tree<_> = (0..n).collect();
        let descending: Tree<_> = (0..n).rev().collect();

        assert_eq!(ascending.height(), n);
        assert_eq!(descending.height(), n);
        assert!(ascending.inorder_iter().eq(descending.inorder_iter()));
    }
}
