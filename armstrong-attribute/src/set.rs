//! Sets of attributes in canonical order.

use std::collections::{btree_set, BTreeSet};
use std::fmt;

use crate::power_set::power_set;
use crate::Attribute;

/// A set of attributes.
///
/// Iteration follows the canonical, lexicographic order of attribute names, so
/// rendering and comparison are deterministic.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, Default, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct AttributeSet {
    attrs: BTreeSet<Attribute>,
}

impl AttributeSet {
    /// Constructs an empty `AttributeSet`.
    pub fn new() -> Self {
        AttributeSet {
            attrs: BTreeSet::new(),
        }
    }

    /// Adds an attribute. Returns whether it was newly inserted.
    pub fn insert(&mut self, attr: impl Into<Attribute>) -> bool {
        self.attrs.insert(attr.into())
    }

    /// Checks whether a given attribute is in this set.
    pub fn contains(&self, attr: &Attribute) -> bool {
        self.attrs.contains(attr)
    }

    /// Checks whether an attribute with the given name is in this set.
    pub fn contains_name(&self, name: &str) -> bool {
        self.attrs.contains(name)
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Iterates over attributes in canonical order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.attrs.iter(),
        }
    }

    /// Returns the union of two sets.
    pub fn union(&self, other: &AttributeSet) -> AttributeSet {
        let mut result = self.clone();
        result.union_with(other);
        result
    }

    /// Adds all attributes of `other` to this set.
    pub fn union_with(&mut self, other: &AttributeSet) {
        self.attrs.extend(other.attrs.iter().cloned());
    }

    pub fn is_subset(&self, other: &AttributeSet) -> bool {
        self.attrs.is_subset(&other.attrs)
    }

    pub fn is_superset(&self, other: &AttributeSet) -> bool {
        self.attrs.is_superset(&other.attrs)
    }

    /// Returns all subsets of this set, including the empty set and the set itself.
    pub fn subsets(&self) -> BTreeSet<AttributeSet> {
        power_set(&self.attrs)
            .into_iter()
            .map(|attrs| AttributeSet { attrs })
            .collect()
    }

    /// Returns all subsets of this set, except the empty set.
    pub fn non_empty_subsets(&self) -> BTreeSet<AttributeSet> {
        let mut subsets = self.subsets();
        subsets.remove(&AttributeSet::new());
        subsets
    }
}

/// An iterator over an attribute set.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    iter: btree_set::Iter<'a, Attribute>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Attribute;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a Attribute;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for AttributeSet {
    type Item = Attribute;
    type IntoIter = btree_set::IntoIter<Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attrs.into_iter()
    }
}

impl<A: Into<Attribute>> FromIterator<A> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        AttributeSet {
            attrs: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<A: Into<Attribute>> Extend<A> for AttributeSet {
    fn extend<I: IntoIterator<Item = A>>(&mut self, iter: I) {
        self.attrs.extend(iter.into_iter().map(Into::into));
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("∅");
        }
        for (i, attr) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", attr)?;
        }
        Ok(())
    }
}
