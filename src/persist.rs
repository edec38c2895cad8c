//! Serde support for [`Tree`].
//!
//! A tree serializes as the sequence of its elements in preorder. Adding those elements back in
//! the same order rebuilds exactly the same shape, because every element is placed below all
//! of its ancestors. Nothing about the structure needs to be written out beyond the order.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Error as _, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Tree;

impl<E> Serialize for Tree<E>
where
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self.preorder_iter() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

struct TreeVisitor<E> {
    marker: PhantomData<E>,
}

impl<'de, E> Visitor<'de> for TreeVisitor<E>
where
    E: Deserialize<'de> + Ord,
{
    type Value = Tree<E>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of distinct tree elements in preorder")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut tree = Tree::new();
        while let Some(element) = access.next_element()? {
            if !tree.add(element) {
                return Err(A::Error::custom(format_args!(
                    "duplicate element at position {}",
                    tree.len()
                )));
            }
        }
        Ok(tree)
    }
}

impl<'de, E> Deserialize<'de> for Tree<E>
where
    E: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(TreeVisitor {
            marker: PhantomData,
        })
    }
}
