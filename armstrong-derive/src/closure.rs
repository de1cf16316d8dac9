//! The closure of an FD set under Armstrong's axioms.

use log::debug;

use armstrong_fd::FdSet;

use crate::augment::augment_all;
use crate::transitive::transitive;
use crate::trivial::trivial;

/// Computes the closure of `fds`.
///
/// Each round derives the trivial dependencies, the transitive dependencies,
/// and the augmentations by every subset of the attributes of the working set.
/// Rounds repeat until a round adds nothing to the working set.
///
/// The result contains `fds` and is its own closure.
pub fn closure(fds: &FdSet) -> FdSet {
    let mut current = fds.clone();
    let mut round = 0;
    loop {
        round += 1;
        let mut derived = trivial(&current);
        derived.union_with(&augment_all(&current));
        derived.union_with(&transitive(&current));

        let added = derived.union(&current);
        debug!(
            "closure: round {}, working set {} -> {}",
            round,
            current.len(),
            added.len()
        );
        if added.len() == current.len() {
            return derived;
        }
        current = added;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    #[test]
    fn test_closure_of_chain() {
        let input = fds(&[("A", "B"), ("B", "C")]);
        let closure = closure(&input);
        for (lhs, rhs) in [("A", "B"), ("B", "C"), ("A", "C"), ("AB", "B"), ("AC", "C"), ("A", "BC")] {
            assert!(closure.contains(&fd(lhs, rhs)), "missing {} -> {}", lhs, rhs);
        }
        assert!(!closure.contains(&fd("C", "A")));
        assert!(!closure.contains(&fd("B", "A")));
    }

    #[test]
    fn test_closure_of_composite_lhs() {
        let input = fds(&[("AB", "C")]);
        let closure = closure(&input);
        assert!(closure.union(&input) == closure);
        for extra in attrs("ABC").subsets() {
            let augmented = fd("AB", "C").augmented(&extra);
            assert!(closure.contains(&augmented), "missing {}", augmented);
        }
        for rhs in ["A", "B", "AB"] {
            assert!(closure.contains(&fd("AB", rhs)));
        }
    }

    #[test]
    fn test_closure_is_idempotent() {
        let once = closure(&fds(&[("A", "B"), ("B", "C")]));
        assert_eq!(closure(&once), once);
    }

    #[test]
    fn test_closure_of_empty_set() {
        assert!(closure(&FdSet::new()).is_empty());
    }

    #[test]
    fn test_closure_is_sound() {
        let input = fds(&[("A", "B"), ("BC", "D")]);
        assert!(input.implies_all(&closure(&input)));
    }
}
