#![allow(dead_code)]

use armstrong::{AttributeSet, FdSet, FunctionalDependency};

/// Installs a logger once for the whole test binary. Set `RUST_LOG` to see output.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses `"AB"` as the attribute set `{A, B}`.
pub fn attrs(names: &str) -> AttributeSet {
    names.chars().collect()
}

/// Builds `lhs -> rhs` from single-letter attribute names.
pub fn fd(lhs: &str, rhs: &str) -> FunctionalDependency {
    FunctionalDependency::new(attrs(lhs), attrs(rhs)).unwrap()
}

pub fn fds(pairs: &[(&str, &str)]) -> FdSet {
    pairs.iter().map(|&(lhs, rhs)| fd(lhs, rhs)).collect()
}

pub fn assert_contains_all(haystack: &FdSet, needles: &[(&str, &str)]) {
    let missing: Vec<String> = needles
        .iter()
        .map(|&(lhs, rhs)| fd(lhs, rhs))
        .filter(|needle| !haystack.contains(needle))
        .map(|needle| needle.to_string())
        .collect();
    if !missing.is_empty() {
        eprintln!("Set:");
        eprintln!("{}", haystack);
        panic!("Dependencies expected to be present: {:?}", missing);
    }
}
