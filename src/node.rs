use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

/// An exclusively owned, possibly empty subtree.
pub(crate) type Link<E> = Option<Box<Node<E>>>;

/// Which child of a `Node` an operation walks toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A single node of a [`Tree`][crate::Tree]. It holds one element and owns its two (possibly
/// empty) subtrees. Linkage can only be changed by the `Tree` that owns the node, so a `Node`
/// handed out by [`Tree::get_root`][crate::Tree::get_root] or
/// [`Tree::search`][crate::Tree::search] can be walked but not restructured.
pub struct Node<E> {
    pub(crate) element: E,
    pub(crate) left: Link<E>,
    pub(crate) right: Link<E>,
}

impl<E> Node<E> {
    pub(crate) fn new_boxed(element: E) -> Box<Self> {
        Box::new(Self {
            element,
            left: None,
            right: None,
        })
    }

    /// The element stored in this node.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// The root of this node's left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Consumes the node and returns its element. Nodes returned by
    /// [`Tree::remove_min`][crate::Tree::remove_min] and
    /// [`Tree::remove_max`][crate::Tree::remove_max] are already detached, so this drops nothing
    /// else.
    pub fn into_element(self) -> E {
        self.element
    }

    /// Which child a search for `key` continues into, or `None` if this node holds `key`.
    pub(crate) fn side_toward<Q>(&self, key: &Q) -> Option<Side>
    where
        E: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match key.cmp(self.element.borrow()) {
            Ordering::Less => Some(Side::Left),
            Ordering::Equal => None,
            Ordering::Greater => Some(Side::Right),
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    pub(crate) fn child_link_mut(&mut self, side: Side) -> &mut Link<E> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

// Children are summarised rather than recursed into; a skewed tree can be arbitrarily deep.
impl<E> fmt::Debug for Node<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("element", &self.element)
            .field("left", &self.left().map(Node::element))
            .field("right", &self.right().map(Node::element))
            .finish()
    }
}
