//! Functional dependencies and sets of functional dependencies.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, deny(warnings))]

pub mod attribute_bit_set;
pub mod attribute_closure;
pub mod builder;
pub mod dependency;
pub mod error;
pub mod fd_set;

pub use crate::attribute_bit_set::{AttributeBitSet, AttributeUniverse};
pub use crate::attribute_closure::AttributeClosure;
pub use crate::builder::FdBuilder;
pub use crate::dependency::FunctionalDependency;
pub use crate::error::{FdError, FdResult};
pub use crate::fd_set::FdSet;
pub use armstrong_attribute::{Attribute, AttributeSet};

pub(crate) mod local_prelude {
    pub use crate::dependency::FunctionalDependency;
    pub use crate::error::{FdError, FdResult};
    pub use crate::fd_set::FdSet;
    pub use armstrong_attribute::{Attribute, AttributeSet};
}
