//! Transitivity: if `X -> Y` and `Y -> Z` then `X -> Z`.

use log::{debug, trace};

use armstrong_fd::FdSet;

/// Exhaustively chains dependencies.
///
/// A round pairs every two distinct dependencies `f1`, `f2` where `f1`'s
/// right-hand side equals `f2`'s left-hand side, deriving `f1.lhs -> f2.rhs`.
/// Derived dependencies join the working set and rounds repeat until the
/// working set stops growing.
///
/// Returns what the last round derived. The result is not unioned with `fds`.
pub fn transitive(fds: &FdSet) -> FdSet {
    let mut current = fds.clone();
    let mut round = 0;
    loop {
        round += 1;
        let derived = chain(&current);
        let prev_cardinality = current.len();
        current.union_with(&derived);
        debug!(
            "transitive: round {} derived {}, working set {} -> {}",
            round,
            derived.len(),
            prev_cardinality,
            current.len()
        );
        if current.len() == prev_cardinality {
            return derived;
        }
    }
}

/// A single round of chaining.
fn chain(fds: &FdSet) -> FdSet {
    let mut derived = FdSet::new();
    for first in fds {
        for second in fds.with_lhs(first.rhs()) {
            if first != second {
                let fd = first.compose(second);
                trace!("transitive: {} and {} give {}", first, second, fd);
                derived.insert(fd);
            }
        }
    }
    derived
}
