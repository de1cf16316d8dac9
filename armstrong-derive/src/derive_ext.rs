//! Derivations as methods on `FdSet`.

use armstrong_attribute::AttributeSet;
use armstrong_fd::FdSet;

/// Extension trait for deriving dependencies from an FD set.
pub trait FdSetDeriveExt {
    /// Derives the trivial dependencies. See [`trivial`](crate::trivial()).
    fn trivial(&self) -> FdSet;
    /// Augments every dependency with `attrs`. See [`augment`](crate::augment()).
    fn augment(&self, attrs: &AttributeSet) -> FdSet;
    /// Exhaustively chains dependencies. See [`transitive`](crate::transitive()).
    fn transitive(&self) -> FdSet;
    /// Computes the closure. See [`closure`](crate::closure()).
    fn closure(&self) -> FdSet;
}

impl FdSetDeriveExt for FdSet {
    fn trivial(&self) -> FdSet {
        crate::trivial(self)
    }

    fn augment(&self, attrs: &AttributeSet) -> FdSet {
        crate::augment(self, attrs)
    }

    fn transitive(&self) -> FdSet {
        crate::transitive(self)
    }

    fn closure(&self) -> FdSet {
        crate::closure(self)
    }
}
