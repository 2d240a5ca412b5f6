//! Serde support. A tree is written as the flat sequence of its values in pre-order. Inserting
//! that sequence back in order places every value exactly where it was, so a round trip keeps
//! the tree's shape and not just its contents.

use std::fmt;
use std::marker::PhantomData;

use crate::BinarySearchTree;

impl<T> serde::Serialize for BinarySearchTree<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.dfs_pre_order())
    }
}

struct BinarySearchTreeVisitor<T> {
    marker: PhantomData<T>,
}

impl<'de, T> serde::de::Visitor<'de> for BinarySearchTreeVisitor<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    type Value = BinarySearchTree<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of values in pre-order")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut tree = BinarySearchTree::new();
        while let Some(val) = access.next_element()? {
            tree.insert(val);
        }
        Ok(tree)
    }
}

impl<'de, T> serde::Deserialize<'de> for BinarySearchTree<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(BinarySearchTreeVisitor {
            marker: PhantomData,
        })
    }
}
