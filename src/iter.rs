//! Traversal sequences over a [`Tree`][crate::Tree].
//!
//! Each sequence owns a private stack of pending nodes instead of recursing, so walking a
//! degenerate tree (one built from sorted input) needs no more call stack than walking a
//! balanced one. Sequences borrow the tree they walk, which means the tree cannot be mutated
//! until every outstanding sequence has been dropped.
//!
//! # Examples
//!
//! ```
//! use bstree::{Error, Traversal, Tree};
//!
//! let tree: Tree<_> = [5, 3, 8].into_iter().collect();
//! let mut preorder = tree.preorder_iter();
//!
//! assert_eq!(preorder.try_next(), Ok(&5));
//! assert_eq!(preorder.try_next(), Ok(&3));
//! assert_eq!(preorder.try_next(), Ok(&8));
//! assert!(!preorder.has_next());
//! assert_eq!(preorder.try_next(), Err(Error::EndOfSequence));
//! ```

use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::node::Node;

/// A forward-only, single-pass walk over the elements of a tree.
///
/// Every traversal is also a plain [`Iterator`]; this trait adds the explicit
/// "is there more?" query and an advance that reports exhaustion as an error rather than `None`.
pub trait Traversal<'a, E>: Iterator<Item = &'a E>
where
    E: 'a,
{
    /// Whether another element remains.
    fn has_next(&self) -> bool;

    /// Advances the traversal, failing with [`Error::EndOfSequence`] once every element has been
    /// yielded.
    fn try_next(&mut self) -> Result<&'a E> {
        self.next().ok_or(Error::EndOfSequence)
    }
}

/// Yields elements in ascending order (left subtree, node, right subtree).
///
/// Keeps at most `height` nodes pending.
pub struct Inorder<'a, E> {
    stack: Vec<&'a Node<E>>,
}

impl<'a, E> Inorder<'a, E> {
    pub(crate) fn new(root: Option<&'a Node<E>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and every node reachable from it by following left links.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<E>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<E> Clone for Inorder<'_, E> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, E> Iterator for Inorder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.element())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<E> FusedIterator for Inorder<'_, E> {}

impl<'a, E> Traversal<'a, E> for Inorder<'a, E> {
    fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }
}

/// Yields each node's element before the elements of its left and then right subtree.
pub struct Preorder<'a, E> {
    stack: Vec<&'a Node<E>>,
}

impl<'a, E> Preorder<'a, E> {
    pub(crate) fn new(root: Option<&'a Node<E>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<E> Clone for Preorder<'_, E> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, E> Iterator for Preorder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes in first so the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.element())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<E> FusedIterator for Preorder<'_, E> {}

impl<'a, E> Traversal<'a, E> for Preorder<'a, E> {
    fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }
}

/// Yields the elements of a node's left subtree, then its right subtree, then the node itself.
///
/// Unlike [`Inorder`] and [`Preorder`] this is built eagerly: constructing it walks the whole
/// tree once and keeps every node pending, so it costs `O(size)` space up front.
pub struct Postorder<'a, E> {
    stack: Vec<&'a Node<E>>,
}

impl<'a, E> Postorder<'a, E> {
    pub(crate) fn new(root: Option<&'a Node<E>>) -> Self {
        // A root, right, left walk pushed onto `stack` pops back out as left, right, root.
        let mut pending: Vec<&'a Node<E>> = root.into_iter().collect();
        let mut stack = Vec::new();
        while let Some(node) = pending.pop() {
            stack.push(node);
            pending.extend(node.left());
            pending.extend(node.right());
        }

        Self { stack }
    }

    /// Pops the next node rather than just its element. Children always come out before their
    /// parent, which is what bottom-up rebuilding (see `Tree::clone`) relies on.
    pub(crate) fn next_node(&mut self) -> Option<&'a Node<E>> {
        self.stack.pop()
    }
}

impl<E> Clone for Postorder<'_, E> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, E> Iterator for Postorder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(Node::element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.stack.len()))
    }
}

impl<E> ExactSizeIterator for Postorder<'_, E> {}

impl<E> FusedIterator for Postorder<'_, E> {}

impl<'a, E> Traversal<'a, E> for Postorder<'a, E> {
    fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Traversal, Tree};

    /// The seven node tree
    ///
    /// ```text
    ///       5
    ///     /   \
    ///    3     8
    ///   / \   / \
    ///  1   4 7   9
    /// ```
    fn full_tree() -> Tree<i32> {
        [5, 3, 8, 1, 4, 7, 9].into_iter().collect()
    }

    #[test]
    fn inorder_is_sorted() {
        let tree = full_tree();
        let inorder: Vec<_> = tree.inorder_iter().copied().collect();

        assert_eq!(inorder, [1, 3, 4, 5, 7, 8, 9]);
    }

    #[test]
    fn preorder_visits_roots_first() {
        let tree = full_tree();
        let preorder: Vec<_> = tree.preorder_iter().copied().collect();

        assert_eq!(preorder, [5, 3, 1, 4, 8, 7, 9]);
    }

    #[test]
    fn postorder_visits_roots_last() {
        let tree = full_tree();
        let postorder: Vec<_> = tree.postorder_iter().copied().collect();

        assert_eq!(postorder, [1, 4, 3, 7, 9, 8, 5]);
    }

    #[test]
    fn empty_tree_has_nothing_to_traverse() {
        let tree: Tree<i32> = Tree::new();

        assert!(!tree.inorder_iter().has_next());
        assert!(!tree.preorder_iter().has_next());
        assert!(!tree.postorder_iter().has_next());
        assert_eq!(tree.inorder_iter().try_next(), Err(Error::EndOfSequence));
    }

    #[test]
    fn exhausted_traversal_keeps_failing() {
        let tree: Tree<_> = [2, 1].into_iter().collect();
        let mut inorder = tree.inorder_iter();

        assert_eq!(inorder.try_next(), Ok(&1));
        assert!(inorder.has_next());
        assert_eq!(inorder.try_next(), Ok(&2));
        assert!(!inorder.has_next());
        assert_eq!(inorder.try_next(), Err(Error::EndOfSequence));
        assert_eq!(inorder.next(), None);
        assert_eq!(inorder.try_next(), Err(Error::EndOfSequence));
    }

    #[test]
    fn traversals_are_independent() {
        let tree = full_tree();
        let mut first = tree.inorder_iter();
        let mut second = tree.inorder_iter();

        assert_eq!(first.next(), Some(&1));
        assert_eq!(first.next(), Some(&3));
        assert_eq!(second.next(), Some(&1));

        let resumed = first.clone();
        assert_eq!(first.collect::<Vec<_>>(), resumed.collect::<Vec<_>>());
    }

    #[test]
    fn postorder_knows_its_length() {
        let tree = full_tree();
        let mut postorder = tree.postorder_iter();

        assert_eq!(postorder.len(), 7);
        postorder.next();
        assert_eq!(postorder.len(), 6);
    }

    #[test]
    fn degenerate_tree_does_not_recurse() {
        let tree = Tree::ascending_chain(0..100_000);

        assert!(tree.inorder_iter().copied().eq(0..100_000));
        assert!(tree.preorder_iter().copied().eq(0..100_000));
        assert!(tree.postorder_iter().copied().eq((0..100_000).rev()));
    }
}
