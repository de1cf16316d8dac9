//! Attributes of a fixed universe, numbered in canonical order, and sets of
//! them in the form of bit vectors.

use std::{iter, ops};

use bit_vec::BitVec;

use crate::local_prelude::*;

/// A fixed universe of attributes. Each attribute is identified by its
/// position in canonical order.
#[derive(Clone, Debug, Default)]
pub struct AttributeUniverse {
    attrs: Vec<Attribute>,
}

/// A set of attributes drawn from an `AttributeUniverse`, in the form of a bit vector.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AttributeBitSet {
    bit_vec: BitVec,
}

/// An iterator over the indices in an attribute bit set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
}

impl AttributeUniverse {
    /// Collects the universe of all attributes that appear in `fds`.
    pub fn new(fds: &FdSet) -> Self {
        AttributeUniverse {
            attrs: fds.attributes().into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Returns the position of an attribute, if it belongs to this universe.
    pub fn index_of(&self, attr: &Attribute) -> Option<usize> {
        self.attrs.binary_search(attr).ok()
    }

    /// Returns the attribute at the given position.
    pub fn attribute(&self, index: usize) -> &Attribute {
        &self.attrs[index]
    }

    /// Creates an empty bit set sized for this universe.
    pub fn empty_set(&self) -> AttributeBitSet {
        AttributeBitSet::from_elem(self.len(), false)
    }

    /// Converts an attribute set into a bit set. Attributes outside this
    /// universe are skipped.
    pub fn bit_set(&self, attrs: &AttributeSet) -> AttributeBitSet {
        let mut result = self.empty_set();
        for index in attrs.iter().filter_map(|attr| self.index_of(attr)) {
            result.set(index, true);
        }
        result
    }

    /// Converts a bit set back into an attribute set.
    pub fn attribute_set(&self, bits: &AttributeBitSet) -> AttributeSet {
        bits.iter().map(|index| self.attribute(index)).collect()
    }
}

impl AttributeBitSet {
    /// Constructs an `AttributeBitSet` of the given length.
    pub fn from_elem(len: usize, elem: bool) -> Self {
        AttributeBitSet {
            bit_vec: BitVec::from_elem(len, elem),
        }
    }

    pub fn set(&mut self, index: usize, elem: bool) {
        self.bit_vec.set(index, elem);
    }

    /// Checks whether the attribute at a given position is in this set.
    pub fn contains(&self, index: usize) -> bool {
        self.bit_vec[index]
    }

    pub fn union(&mut self, other: &AttributeBitSet) {
        self.bit_vec.or(&other.bit_vec);
    }

    /// Returns the number of attributes in this set.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.bit_vec.none()
    }

    /// Iterates over positions of attributes in the set.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, is_present) in &mut self.iter {
            if is_present {
                return Some(index);
            }
        }
        None
    }
}

static TRUE: bool = true;
static FALSE: bool = false;

impl ops::Index<usize> for AttributeBitSet {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        if self.bit_vec[index] {
            &TRUE
        } else {
            &FALSE
        }
    }
}
