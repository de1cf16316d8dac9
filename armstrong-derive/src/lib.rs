//! Derivation of functional dependencies with Armstrong's axioms: reflexivity,
//! augmentation and transitivity, and the closure of an FD set under all three.
//!
//! Every operation borrows its input and returns a new set.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, deny(warnings))]

pub mod augment;
pub mod closure;
pub mod derive_ext;
pub mod transitive;
pub mod trivial;

pub use self::augment::augment;
pub use self::closure::closure;
pub use self::derive_ext::FdSetDeriveExt;
pub use self::transitive::transitive;
pub use self::trivial::trivial;

use armstrong_attribute::AttributeSet;
use armstrong_fd::FdSet;

/// Returns every attribute that appears on either side of any dependency, in
/// canonical order.
pub fn attributes(fds: &FdSet) -> AttributeSet {
    fds.attributes()
}
