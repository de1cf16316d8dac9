//! Definitions of the FD set type.

use std::collections::{btree_set, BTreeSet};
use std::fmt::{self, Write};

use crate::attribute_closure::AttributeClosure;
use crate::builder::FdBuilder;
use crate::local_prelude::*;

/// A set of functional dependencies.
///
/// Dependencies are kept in canonical order: by left-hand side first, then by
/// right-hand side. Equality is equality of contents.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct FdSet {
    fds: BTreeSet<FunctionalDependency>,
}

/// An iterator over an FD set.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    iter: btree_set::Iter<'a, FunctionalDependency>,
}

impl FdSet {
    /// Creates an empty FD set.
    pub fn new() -> Self {
        FdSet {
            fds: BTreeSet::new(),
        }
    }

    /// Starts building dependencies with the given left-hand side.
    pub fn dependency<I>(&mut self, lhs: I) -> FdBuilder<'_>
    where
        I: IntoIterator,
        I::Item: Into<Attribute>,
    {
        FdBuilder::new(self).dependency(lhs)
    }

    /// Adds a dependency. Returns whether it was newly inserted.
    pub fn insert(&mut self, fd: FunctionalDependency) -> bool {
        self.fds.insert(fd)
    }

    pub fn contains(&self, fd: &FunctionalDependency) -> bool {
        self.fds.contains(fd)
    }

    pub fn len(&self) -> usize {
        self.fds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fds.is_empty()
    }

    /// Iterates over dependencies in canonical order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.fds.iter(),
        }
    }

    /// Returns the union of two sets.
    pub fn union(&self, other: &FdSet) -> FdSet {
        let mut result = self.clone();
        result.union_with(other);
        result
    }

    /// Adds all dependencies of `other` to this set.
    pub fn union_with(&mut self, other: &FdSet) {
        self.fds.extend(other.fds.iter().cloned());
    }

    /// Iterates over all dependencies with exactly the given left-hand side.
    pub fn with_lhs<'a>(
        &'a self,
        lhs: &'a AttributeSet,
    ) -> impl Iterator<Item = &'a FunctionalDependency> + 'a {
        self.fds
            .range(FunctionalDependency::lower_bound(lhs.clone())..)
            .take_while(move |fd| fd.lhs() == lhs)
    }

    /// Returns every attribute that appears on either side of any dependency.
    pub fn attributes(&self) -> AttributeSet {
        let mut result = AttributeSet::new();
        for fd in self.iter() {
            result.union_with(fd.lhs());
            result.union_with(fd.rhs());
        }
        result
    }

    /// Computes the set of attributes determined by `attrs`, that is `attrs⁺`.
    pub fn attribute_closure(&self, attrs: &AttributeSet) -> AttributeSet {
        AttributeClosure::new(self).closure_of(attrs)
    }

    /// Checks whether `fd` follows from the dependencies in this set.
    pub fn implies(&self, fd: &FunctionalDependency) -> bool {
        AttributeClosure::new(self).implies(fd)
    }

    /// Checks whether every dependency in `other` follows from this set.
    pub fn implies_all(&self, other: &FdSet) -> bool {
        let mut closure = AttributeClosure::new(self);
        other.iter().all(|fd| closure.implies(fd))
    }

    /// Renders one dependency per line in canonical order.
    pub fn stringify(&self) -> String {
        let mut result = String::new();
        for fd in self.iter() {
            writeln!(&mut result, "{};", fd).expect("writing to String failed");
        }
        result
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a FunctionalDependency;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a> IntoIterator for &'a FdSet {
    type Item = &'a FunctionalDependency;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for FdSet {
    type Item = FunctionalDependency;
    type IntoIter = btree_set::IntoIter<FunctionalDependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.fds.into_iter()
    }
}

impl FromIterator<FunctionalDependency> for FdSet {
    fn from_iter<I: IntoIterator<Item = FunctionalDependency>>(iter: I) -> Self {
        FdSet {
            fds: iter.into_iter().collect(),
        }
    }
}

impl Extend<FunctionalDependency> for FdSet {
    fn extend<I: IntoIterator<Item = FunctionalDependency>>(&mut self, iter: I) {
        self.fds.extend(iter);
    }
}

impl<'a> Extend<&'a FunctionalDependency> for FdSet {
    fn extend<I: IntoIterator<Item = &'a FunctionalDependency>>(&mut self, iter: I) {
        self.fds.extend(iter.into_iter().cloned());
    }
}

impl fmt::Display for FdSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for fd in self.iter() {
            writeln!(f, "{};", fd)?;
        }
        Ok(())
    }
}
