//! Library for deriving functional dependencies with Armstrong's axioms.
//!
//! ```
//! use armstrong::{FdSet, FdSetDeriveExt};
//!
//! let mut fds = FdSet::new();
//! fds.dependency(["A"]).rhs(["B"])?.dependency(["B"]).rhs(["C"])?;
//!
//! let closure = fds.closure();
//! assert!(closure.union(&fds) == closure);
//! assert!(fds.implies_all(&closure));
//! # Ok::<(), armstrong::FdError>(())
//! ```

pub use armstrong_attribute::*;
#[cfg(feature = "derive")]
pub use armstrong_derive as derive;
#[cfg(feature = "derive")]
pub use armstrong_derive::{attributes, augment, closure, transitive, trivial, FdSetDeriveExt};
#[cfg(feature = "fd")]
pub use armstrong_fd::*;
