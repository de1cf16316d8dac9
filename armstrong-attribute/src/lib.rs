//! Attributes of a relational schema. Attributes are distinguished by their names.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, deny(warnings))]

mod attribute;
pub mod power_set;
pub mod set;

pub use self::attribute::Attribute;
pub use self::power_set::power_set;
pub use self::set::AttributeSet;
