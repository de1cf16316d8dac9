//! Augmentation: if `X -> Y` then `X ∪ Z -> Y ∪ Z`.

use armstrong_attribute::AttributeSet;
use armstrong_fd::FdSet;

/// Adds `attrs` to both sides of every dependency.
///
/// Augmenting with the empty set returns a copy of `fds`.
pub fn augment(fds: &FdSet, attrs: &AttributeSet) -> FdSet {
    fds.iter().map(|fd| fd.augmented(attrs)).collect()
}

/// Augments `fds` with every subset of its attributes, including the empty
/// subset, and returns the union of the results.
pub fn augment_all(fds: &FdSet) -> FdSet {
    let mut result = FdSet::new();
    for attrs in fds.attributes().subsets() {
        result.union_with(&augment(fds, &attrs));
    }
    result
}
