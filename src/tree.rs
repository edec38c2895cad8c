//! An owned, unbalanced Binary Search Tree.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.add(1));
//! assert!(tree.contains(&1));
//!
//! // Adding an equal element is a no-op.
//! assert!(!tree.add(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Only the smallest and largest elements can be removed.
//! tree.add(2);
//! let removed = tree.remove_min().map(|node| node.into_element());
//!
//! assert_eq!(removed, Some(1));
//! assert_eq!(tree.inorder_iter().collect::<Vec<_>>(), [&2]);
//! ```

use std::borrow::Borrow;
use std::fmt;

use crate::error::{Error, Result};
use crate::iter::{Inorder, Postorder, Preorder};
use crate::node::{Link, Node, Side};

/// A Binary Search Tree holding unique elements in ascending order. No rebalancing is done, so
/// adding elements in sorted order produces a tree as tall as it is large. Every walk over the
/// tree (traversal, height, clear, clone and drop) uses an explicit stack so that such trees are
/// still safe to work with.
pub struct Tree<E> {
    root: Link<E>,
    len: usize,
}

impl<E> Default for Tree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for Tree<E> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<E> Clone for Tree<E>
where
    E: Clone,
{
    /// Rebuilds the tree bottom-up from a postorder walk, so the copy has the same shape.
    fn clone(&self) -> Self {
        let mut postorder = Postorder::new(self.root.as_deref());
        let mut built: Vec<Box<Node<E>>> = Vec::new();
        while let Some(node) = postorder.next_node() {
            let mut copy = Node::new_boxed(node.element.clone());
            // The right subtree finished last so its copy is on top.
            if node.right.is_some() {
                copy.right = built.pop();
            }
            if node.left.is_some() {
                copy.left = built.pop();
            }
            built.push(copy);
        }

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<E> fmt::Debug for Tree<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder_iter()).finish()
    }
}

impl<E> Tree<E> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root node, for callers that want to walk the structure themselves.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree has no nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.get_root().err(), Some(Error::EmptyTree));
    ///
    /// tree.add(5);
    /// tree.add(3);
    /// let root = tree.get_root()?;
    ///
    /// assert_eq!(root.element(), &5);
    /// assert_eq!(root.left().map(|n| n.element()), Some(&3));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn get_root(&self) -> Result<&Node<E>> {
        self.root.as_deref().ok_or(Error::EmptyTree)
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has height
    /// 0 and a single node has height 1. This walks every node on each call.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let balanced: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let chain: Tree<_> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(balanced.height(), 2);
    /// assert_eq!(chain.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(&Node<E>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left().map(|left| (left, depth + 1)));
            pending.extend(node.right().map(|right| (right, depth + 1)));
        }

        height
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        // Detach children before each node drops so dropping never recurses.
        let mut pending: Vec<Box<Node<E>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Adds `entry` if no equal element is present. Returns whether it was added; an equal
    /// element already in the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.add("b"));
    /// assert!(tree.add("a"));
    /// assert!(!tree.add("b"));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn add(&mut self, entry: E) -> bool
    where
        E: Ord,
    {
        let slot = Self::slot_for(&mut self.root, &entry);
        if slot.is_some() {
            return false;
        }

        *slot = Some(Node::new_boxed(entry));
        self.len += 1;
        true
    }

    /// [`add`][Self::add] for callers holding an optional entry.
    ///
    /// # Errors
    ///
    /// [`Error::NullArgument`] if `entry` is `None`.
    pub fn try_add(&mut self, entry: Option<E>) -> Result<bool>
    where
        E: Ord,
    {
        entry.map(|entry| self.add(entry)).ok_or(Error::NullArgument)
    }

    /// Finds the node holding an element equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<String> = ["pear", "apple"].into_iter().map(String::from).collect();
    ///
    /// assert_eq!(tree.search("pear").map(|n| n.element().as_str()), Some("pear"));
    /// assert!(tree.search("plum").is_none());
    /// ```
    pub fn search<Q>(&self, key: &Q) -> Option<&Node<E>>
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match node.side_toward(key) {
                Some(side) => current = node.child(side),
                None => return Some(node),
            }
        }

        None
    }

    /// [`search`][Self::search] for callers holding an optional key.
    ///
    /// # Errors
    ///
    /// [`Error::NullArgument`] if `key` is `None`.
    pub fn try_search<Q>(&self, key: Option<&Q>) -> Result<Option<&Node<E>>>
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        key.map(|key| self.search(key)).ok_or(Error::NullArgument)
    }

    /// Whether an element equal to `key` is in the tree.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }

    /// [`contains`][Self::contains] for callers holding an optional key.
    ///
    /// # Errors
    ///
    /// [`Error::NullArgument`] if `key` is `None`.
    pub fn try_contains<Q>(&self, key: Option<&Q>) -> Result<bool>
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        key.map(|key| self.contains(key)).ok_or(Error::NullArgument)
    }

    /// A mutable reference to the element equal to `key`.
    ///
    /// The element must keep comparing the same way against every other element; only change
    /// the parts of it that its [`Ord`] implementation ignores.
    pub fn search_mut<Q>(&mut self, key: &Q) -> Option<&mut E>
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::slot_for(&mut self.root, key)
            .as_deref_mut()
            .map(|node| &mut node.element)
    }

    /// Returns the element equal to `key`, first adding the one built by `make` if there is
    /// none. `make` must build an element equal to `key`.
    ///
    /// The same caveat as [`search_mut`][Self::search_mut] applies to the returned reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::borrow::Borrow;
    /// use std::cmp::Ordering;
    ///
    /// use bstree::Tree;
    ///
    /// // Counts are ignored when ordering.
    /// struct Counted(&'static str, usize);
    /// # impl PartialEq for Counted { fn eq(&self, o: &Self) -> bool { self.0 == o.0 } }
    /// # impl Eq for Counted {}
    /// # impl PartialOrd for Counted { fn partial_cmp(&self, o: &Self) -> Option<Ordering> { Some(self.cmp(o)) } }
    /// # impl Ord for Counted { fn cmp(&self, o: &Self) -> Ordering { self.0.cmp(o.0) } }
    /// # impl Borrow<str> for Counted { fn borrow(&self) -> &str { self.0 } }
    ///
    /// let mut tree = Tree::new();
    /// for word in ["to", "be", "or", "not", "to", "be"] {
    ///     tree.get_or_insert_with(word, || Counted(word, 0)).1 += 1;
    /// }
    ///
    /// let counts: Vec<_> = tree.inorder_iter().map(|c| (c.0, c.1)).collect();
    /// assert_eq!(counts, [("be", 2), ("not", 1), ("or", 1), ("to", 2)]);
    /// ```
    pub fn get_or_insert_with<Q, F>(&mut self, key: &Q, make: F) -> &mut E
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
        F: FnOnce() -> E,
    {
        let mut inserted = false;
        let node = Self::slot_for(&mut self.root, key).get_or_insert_with(|| {
            let entry = make();
            debug_assert!(
                key.cmp(entry.borrow()).is_eq(),
                "built element does not match its key"
            );
            inserted = true;
            Node::new_boxed(entry)
        });
        if inserted {
            self.len += 1;
        }

        &mut node.element
    }

    /// Removes the node holding the smallest element and returns it, detached from the tree.
    /// Returns `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove_min().map(|n| n.into_element()), Some(3));
    /// assert_eq!(tree.len(), 2);
    /// assert!(!tree.contains(&3));
    /// ```
    pub fn remove_min(&mut self) -> Option<Node<E>> {
        self.remove_extremal(Side::Left)
    }

    /// Removes the node holding the largest element and returns it, detached from the tree.
    /// Returns `None` if the tree is empty.
    pub fn remove_max(&mut self) -> Option<Node<E>> {
        self.remove_extremal(Side::Right)
    }

    /// A sequence over the elements in ascending order.
    pub fn inorder_iter(&self) -> Inorder<'_, E> {
        Inorder::new(self.root.as_deref())
    }

    /// A sequence visiting each node before its left and then right subtree.
    pub fn preorder_iter(&self) -> Preorder<'_, E> {
        Preorder::new(self.root.as_deref())
    }

    /// A sequence visiting each node after its left and then right subtree.
    pub fn postorder_iter(&self) -> Postorder<'_, E> {
        Postorder::new(self.root.as_deref())
    }

    /// Follows `side` links from the root to the last node on that path and splices that
    /// node's other child into its place.
    fn remove_extremal(&mut self, side: Side) -> Option<Node<E>> {
        let mut slot = &mut self.root;
        while slot.as_deref().is_some_and(|node| node.child(side).is_some()) {
            if let Some(node) = slot {
                slot = node.child_link_mut(side);
            }
        }

        let mut removed = slot.take()?;
        *slot = removed.child_link_mut(side.opposite()).take();
        self.len -= 1;
        Some(*removed)
    }

    /// The link that holds, or would hold, the element equal to `key`.
    fn slot_for<'a, Q>(mut slot: &'a mut Link<E>, key: &Q) -> &'a mut Link<E>
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        while let Some(side) = slot.as_deref().and_then(|node| node.side_toward(key)) {
            if let Some(node) = slot {
                slot = node.child_link_mut(side);
            }
        }

        slot
    }
}

impl<E> Extend<E> for Tree<E>
where
    E: Ord,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for entry in iter {
            self.add(entry);
        }
    }
}

impl<E> FromIterator<E> for Tree<E>
where
    E: Ord,
{
    /// Adds the elements in iteration order, skipping duplicates. The shape of the tree follows
    /// that order: sorted input makes a chain.
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, E> IntoIterator for &'a Tree<E> {
    type Item = &'a E;
    type IntoIter = Inorder<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder_iter()
    }
}

#[cfg(test)]
impl<E> Tree<E> {
    /// Builds the chain `0 -> 1 -> 2 ...` directly (every node a right child) without paying
    /// the quadratic cost of adding sorted elements one at a time.
    pub(crate) fn ascending_chain<I>(elements: I) -> Self
    where
        I: DoubleEndedIterator<Item = E>,
    {
        let mut root: Link<E> = None;
        let mut len = 0;
        for element in elements.rev() {
            let mut node = Node::new_boxed(element);
            node.right = root.take();
            root = Some(node);
            len += 1;
        }

        Self { root, len }
    }
}
