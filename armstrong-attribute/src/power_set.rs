//! The power set of a finite set.

use std::collections::BTreeSet;

/// Returns the set of all subsets of `set`, including the empty set and `set` itself.
///
/// The result has `2^|set|` members. The input is left untouched.
pub fn power_set<E>(set: &BTreeSet<E>) -> BTreeSet<BTreeSet<E>>
where
    E: Ord + Clone,
{
    let elems: Vec<&E> = set.iter().collect();
    subsets_of(&elems[..])
}

/// Splits on the first element: every subset of `elems` either omits it, and
/// is then a subset of the rest, or is such a subset with the element added.
fn subsets_of<E>(elems: &[&E]) -> BTreeSet<BTreeSet<E>>
where
    E: Ord + Clone,
{
    match elems.split_first() {
        None => BTreeSet::from([BTreeSet::new()]),
        Some((&first, rest)) => {
            let without_first = subsets_of(rest);
            let with_first: Vec<BTreeSet<E>> = without_first
                .iter()
                .map(|subset| {
                    let mut subset = subset.clone();
                    subset.insert(first.clone());
                    subset
                })
                .collect();
            let mut result = without_first;
            result.extend(with_first);
            result
        }
    }
}
