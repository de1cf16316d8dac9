//! The attribute closure `X⁺`: every attribute that a set of attributes `X`
//! determines under a set of functional dependencies.

use std::cmp::Ordering::{Greater, Less};

use bit_vec::BitVec;
use log::trace;

use crate::attribute_bit_set::{AttributeBitSet, AttributeUniverse};
use crate::local_prelude::*;

/// Attribute closure. Works as a reverse search: each attribute that enters the
/// closure wakes up the dependencies that mention it on their left-hand side.
pub struct AttributeClosure {
    universe: AttributeUniverse,
    dependencies: Vec<IndexedDependency>,
    inverse_lhs: Vec<LhsOccurrence>,
    work_stack: Vec<usize>,
}

struct IndexedDependency {
    lhs: Vec<usize>,
    rhs: Vec<usize>,
}

/// An attribute at `attr` appears in the left-hand side of the dependency at `dependency`.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
struct LhsOccurrence {
    attr: usize,
    dependency: usize,
}

impl AttributeClosure {
    /// Records information which is needed to calculate attribute closures.
    pub fn new(fds: &FdSet) -> Self {
        let universe = AttributeUniverse::new(fds);
        let index_all = |attrs: &AttributeSet| -> Vec<usize> {
            attrs
                .iter()
                .filter_map(|attr| universe.index_of(attr))
                .collect()
        };
        let dependencies: Vec<_> = fds
            .iter()
            .map(|fd| IndexedDependency {
                lhs: index_all(fd.lhs()),
                rhs: index_all(fd.rhs()),
            })
            .collect();

        let mut inverse_lhs = Vec::with_capacity(2 * dependencies.len());
        for (dependency, indexed) in dependencies.iter().enumerate() {
            inverse_lhs.extend(
                indexed
                    .lhs
                    .iter()
                    .map(|&attr| LhsOccurrence { attr, dependency }),
            );
        }
        inverse_lhs.sort();

        AttributeClosure {
            universe,
            dependencies,
            inverse_lhs,
            work_stack: vec![],
        }
    }

    /// Calculates the closure of `attrs`. Attributes of `attrs` that no
    /// dependency mentions are kept in the result.
    pub fn closure_of(&mut self, attrs: &AttributeSet) -> AttributeSet {
        let mut property = self.universe.bit_set(attrs);
        self.bit_closure(&mut property);
        let mut result = self.universe.attribute_set(&property);
        result.union_with(attrs);
        result
    }

    /// Checks whether `fd` follows from the recorded dependencies.
    pub fn implies(&mut self, fd: &FunctionalDependency) -> bool {
        fd.rhs().is_subset(&self.closure_of(fd.lhs()))
    }

    /// Calculates the closure in place on a bit set over this closure's universe.
    pub fn bit_closure(&mut self, property: &mut AttributeBitSet) {
        self.work_stack.extend(property.iter());
        let mut fired = BitVec::from_elem(self.dependencies.len(), false);

        let inverse_lhs = &self.inverse_lhs[..];
        while let Some(work_attr) = self.work_stack.pop() {
            for occurrence in find(inverse_lhs, work_attr) {
                let dependency = &self.dependencies[occurrence.dependency];
                if !fired[occurrence.dependency]
                    && dependency.lhs.iter().all(|&attr| property[attr])
                {
                    fired.set(occurrence.dependency, true);
                    trace!("closure: dependency {} fires", occurrence.dependency);
                    for &attr in &dependency.rhs {
                        if !property[attr] {
                            property.set(attr, true);
                            self.work_stack.push(attr);
                        }
                    }
                }
            }
        }
    }
}

fn find(inverse_lhs: &[LhsOccurrence], key_attr: usize) -> &[LhsOccurrence] {
    match inverse_lhs
        .binary_search_by(|&LhsOccurrence { attr, .. }| (attr, Greater).cmp(&(key_attr, Less)))
    {
        Err(idx) => {
            let len = inverse_lhs[idx..]
                .iter()
                .take_while(|occurrence| occurrence.attr == key_attr)
                .count();
            &inverse_lhs[idx..idx + len]
        }
        Ok(_) => unreachable!(),
    }
}
