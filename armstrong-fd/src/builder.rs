//! Functional dependencies can be built with the builder pattern.

use crate::local_prelude::*;

/// The dependency builder.
///
/// ```
/// use armstrong_fd::FdSet;
///
/// let mut fds = FdSet::new();
/// fds.dependency(["A"])
///     .rhs(["B"])?
///     .dependency(["B"])
///     .rhs(["C"])?;
/// assert_eq!(fds.len(), 2);
/// # Ok::<(), armstrong_fd::FdError>(())
/// ```
pub struct FdBuilder<'a> {
    lhs: AttributeSet,
    fds: &'a mut FdSet,
}

impl<'a> FdBuilder<'a> {
    /// Creates a dependency builder.
    pub fn new(fds: &'a mut FdSet) -> Self {
        FdBuilder {
            lhs: AttributeSet::new(),
            fds,
        }
    }

    /// Starts building dependencies with the given left-hand side.
    pub fn dependency<I>(mut self, lhs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Attribute>,
    {
        self.lhs = lhs.into_iter().collect();
        self
    }

    /// Adds the dependency `lhs -> rhs` to the set.
    pub fn rhs<I>(self, rhs: I) -> FdResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Attribute>,
    {
        let fd = FunctionalDependency::new(self.lhs.clone(), rhs.into_iter().collect())?;
        self.fds.insert(fd);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lhs_is_rejected() {
        let mut fds = FdSet::new();
        let result = fds.dependency(Vec::<Attribute>::new()).rhs(["A"]);
        assert!(matches!(result, Err(FdError::EmptyLhs { .. })));
        assert!(fds.is_empty());
    }

    #[test]
    fn test_empty_rhs_is_rejected() {
        let mut fds = FdSet::new();
        let result = fds.dependency(["A"]).rhs(Vec::<&str>::new());
        assert!(matches!(result, Err(FdError::EmptyRhs { .. })));
    }
}
