//! Reflexivity: `X -> Y` holds whenever `Y ⊆ X`.

use log::trace;

use armstrong_fd::{FdSet, FunctionalDependency};

/// Derives the trivial dependencies `X -> S` for the left-hand side `X` of
/// every dependency and every non-empty `S ⊆ X`.
///
/// The result holds only derived dependencies. It is not unioned with `fds`.
pub fn trivial(fds: &FdSet) -> FdSet {
    let mut derived = FdSet::new();
    for fd in fds {
        let lhs = fd.lhs();
        // The empty subset is rejected by the constructor.
        derived.extend(
            lhs.subsets()
                .into_iter()
                .filter_map(|subset| FunctionalDependency::new(lhs.clone(), subset).ok()),
        );
    }
    trace!("trivial: {} dependencies from {}", derived.len(), fds.len());
    derived
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    #[test]
    fn test_trivial_of_composite_lhs() {
        let derived = trivial(&fds(&[("AB", "C")]));
        assert_eq!(derived, fds(&[("AB", "A"), ("AB", "B"), ("AB", "AB")]));
        assert!(!derived.contains(&fd("AB", "C")));
    }

    #[test]
    fn test_trivial_per_dependency() {
        let derived = trivial(&fds(&[("A", "B"), ("BC", "D")]));
        assert_eq!(
            derived,
            fds(&[("A", "A"), ("BC", "B"), ("BC", "C"), ("BC", "BC")])
        );
        assert!(derived.iter().all(FunctionalDependency::is_trivial));
    }

    #[test]
    fn test_trivial_of_empty_set() {
        assert!(trivial(&FdSet::new()).is_empty());
    }
}
