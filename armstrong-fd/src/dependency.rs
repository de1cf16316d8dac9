//! Definition of the functional dependency type.

use std::fmt;

use crate::local_prelude::*;

/// A functional dependency `lhs -> rhs`: any two rows that agree on all `lhs`
/// attributes agree on all `rhs` attributes.
///
/// Both sides are non-empty. The only mutations available can grow a side,
/// so the invariant holds for the dependency's whole lifetime.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDependency"))]
#[derive(Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct FunctionalDependency {
    lhs: AttributeSet,
    rhs: AttributeSet,
}

impl FunctionalDependency {
    /// Creates the dependency `lhs -> rhs`.
    ///
    /// Fails if either side is empty.
    pub fn new(lhs: AttributeSet, rhs: AttributeSet) -> FdResult<Self> {
        if lhs.is_empty() {
            Err(FdError::EmptyLhs { rhs })
        } else if rhs.is_empty() {
            Err(FdError::EmptyRhs { lhs })
        } else {
            Ok(FunctionalDependency { lhs, rhs })
        }
    }

    /// The smallest possible dependency with the given left-hand side. Only used
    /// as a bound for range queries.
    pub(crate) fn lower_bound(lhs: AttributeSet) -> Self {
        FunctionalDependency {
            lhs,
            rhs: AttributeSet::new(),
        }
    }

    /// The determining attributes.
    pub fn lhs(&self) -> &AttributeSet {
        &self.lhs
    }

    /// The determined attributes.
    pub fn rhs(&self) -> &AttributeSet {
        &self.rhs
    }

    /// All attributes that appear on either side.
    pub fn attributes(&self) -> AttributeSet {
        self.lhs.union(&self.rhs)
    }

    /// Checks whether the dependency holds by reflexivity alone.
    pub fn is_trivial(&self) -> bool {
        self.rhs.is_subset(&self.lhs)
    }

    pub fn add_to_lhs(&mut self, attrs: &AttributeSet) {
        self.lhs.union_with(attrs);
    }

    pub fn add_to_rhs(&mut self, attrs: &AttributeSet) {
        self.rhs.union_with(attrs);
    }

    /// Adds `attrs` to both sides.
    pub fn augment(&mut self, attrs: &AttributeSet) {
        self.add_to_lhs(attrs);
        self.add_to_rhs(attrs);
    }

    /// Returns a copy of this dependency with `attrs` added to both sides.
    pub fn augmented(&self, attrs: &AttributeSet) -> Self {
        let mut result = self.clone();
        result.augment(attrs);
        result
    }

    /// Chains `self: X -> Y` with `next: Y' -> Z`, giving `X -> Z`.
    ///
    /// The caller decides whether the chain is sound, which is the case when
    /// `Y' ⊆ Y`.
    pub fn compose(&self, next: &FunctionalDependency) -> Self {
        FunctionalDependency {
            lhs: self.lhs.clone(),
            rhs: next.rhs.clone(),
        }
    }
}

impl fmt::Display for FunctionalDependency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.lhs, self.rhs)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDependency {
    lhs: AttributeSet,
    rhs: AttributeSet,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDependency> for FunctionalDependency {
    type Error = FdError;

    fn try_from(raw: RawDependency) -> FdResult<Self> {
        FunctionalDependency::new(raw.lhs, raw.rhs)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    fn attrs(names: &[&str]) -> AttributeSet {
        names.iter().copied().collect()
    }

    #[test]
    fn test_dependency_round_trip() {
        let fd = FunctionalDependency::new(attrs(&["B", "A"]), attrs(&["C"])).unwrap();
        let json = serde_json::to_string(&fd).unwrap();
        assert_eq!(json, r#"{"lhs":["A","B"],"rhs":["C"]}"#);
        let back: FunctionalDependency = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fd);
    }

    #[test]
    fn test_fd_set_round_trip() {
        let mut fds = FdSet::new();
        fds.dependency(["A"])
            .rhs(["B"])
            .unwrap()
            .dependency(["B", "C"])
            .rhs(["D"])
            .unwrap();
        let json = serde_json::to_string(&fds).unwrap();
        let back: FdSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fds);
    }

    #[test]
    fn test_deserialize_rejects_empty_sides() {
        let err = serde_json::from_str::<FunctionalDependency>(r#"{"lhs":[],"rhs":["A"]}"#)
            .unwrap_err();
        let expected = FdError::EmptyLhs { rhs: attrs(&["A"]) };
        assert!(err.to_string().starts_with(&expected.to_string()), "{}", err);

        let err = serde_json::from_str::<FunctionalDependency>(r#"{"lhs":["A"],"rhs":[]}"#)
            .unwrap_err();
        let expected = FdError::EmptyRhs { lhs: attrs(&["A"]) };
        assert!(err.to_string().starts_with(&expected.to_string()), "{}", err);

        assert!(serde_json::from_str::<FdSet>(r#"[{"lhs":["A"],"rhs":[]}]"#).is_err());
    }
}
