use thiserror::Error;

use armstrong_attribute::AttributeSet;

/// Errors raised while constructing functional dependencies.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum FdError {
    /// A functional dependency was given no determining attributes.
    #[error(
        "The left-hand side of a functional dependency must not be empty. The dependency determines `{rhs}` from nothing."
    )]
    EmptyLhs { rhs: AttributeSet },

    /// A functional dependency was given no determined attributes.
    #[error(
        "The right-hand side of a functional dependency must not be empty. The dependency determines nothing from `{lhs}`."
    )]
    EmptyRhs { lhs: AttributeSet },
}

pub type FdResult<T> = Result<T, FdError>;
