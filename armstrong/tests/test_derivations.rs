#![cfg(feature = "derive")]

mod support;

use armstrong::{attributes, augment, closure, transitive, trivial, AttributeSet, FdSetDeriveExt};
use support::{assert_contains_all, attrs, fd, fds, init_logger};

#[test]
fn test_chain_scenario() {
    init_logger();
    let input = fds(&[("A", "B"), ("B", "C")]);

    assert_eq!(attributes(&input), attrs("ABC"));
    assert_eq!(attributes(&input).to_string(), "A B C");

    let trivial = trivial(&input);
    assert_contains_all(&trivial, &[("A", "A"), ("B", "B")]);

    let transitive = transitive(&input);
    assert_contains_all(&transitive, &[("A", "C")]);

    let closure = closure(&input);
    assert_contains_all(
        &closure,
        &[("A", "B"), ("B", "C"), ("A", "C"), ("AB", "B"), ("AC", "C"), ("AC", "BC")],
    );
    assert_eq!(closure.closure(), closure);
}

#[test]
fn test_composite_lhs_scenario() {
    init_logger();
    let input = fds(&[("AB", "C")]);

    assert_eq!(trivial(&input), fds(&[("AB", "A"), ("AB", "B"), ("AB", "AB")]));
    assert!(transitive(&input).is_empty());

    let closure = closure(&input);
    assert_contains_all(&closure, &[("AB", "C"), ("AB", "A"), ("AB", "B"), ("AB", "AB")]);
    for extra in attributes(&input).non_empty_subsets() {
        assert!(closure.contains(&fd("AB", "C").augmented(&extra)));
    }
}

#[test]
fn test_augment_scenario() {
    let input = fds(&[("A", "B")]);
    assert_eq!(augment(&input, &attrs("C")), fds(&[("AC", "BC")]));
    assert_eq!(input.augment(&AttributeSet::new()), input);
}

#[test]
fn test_inputs_are_not_mutated() {
    let input = fds(&[("A", "B"), ("B", "C"), ("AC", "D")]);
    let snapshot = input.clone();
    input.trivial();
    input.augment(&attrs("E"));
    input.transitive();
    input.closure();
    assert_eq!(input, snapshot);
}

#[test]
fn test_rendering_of_closure_is_canonical() {
    let forward = fds(&[("A", "B"), ("B", "C")]);
    let backward = fds(&[("B", "C"), ("A", "B")]);
    assert_eq!(closure(&forward).stringify(), closure(&backward).stringify());
    assert_eq!(
        trivial(&fds(&[("BA", "C")])).stringify(),
        "A B -> A;\nA B -> A B;\nA B -> B;\n"
    );
}
