use check_rail::prelude::*;
use check_rail::{and, or};

fn min_len(min: usize) -> impl Validate<Domain = str> {
    Rule::new(move |s: &str| s.len() >= min, "value is too short")
}

fn max_len(max: usize) -> impl Validate<Domain = str> {
    Rule::new(move |s: &str| s.len() <= max, "value is too long")
}

fn exploding() -> impl Validate<Domain = str> {
    Rule::new(
        |_: &str| -> bool { panic!("short-circuited rule must not run") },
        "boom",
    )
}

#[test]
fn test_and_both_pass() {
    let rule = min_len(3).and(max_len(10));
    assert!(rule.test("hello").is_valid());
}

#[test]
fn test_and_fails_when_either_child_fails() {
    let rule = min_len(3).and(max_len(5));
    assert!(rule.test("hi").is_invalid());
    assert!(rule.test("too long for this").is_invalid());
}

#[test]
fn and_short_circuits_on_the_left_failure() {
    let rule = min_len(5).and(exploding());
    let outcome = rule.test("hi");
    assert_eq!(outcome.reason(), Some("value is too short"));
}

#[test]
fn and_reports_the_leftmost_failure_when_both_fail() {
    let left = Rule::new(|_: &str| false, "left failed");
    let right = Rule::new(|_: &str| false, "right failed");
    let outcome = left.and(right).test("anything");
    assert_eq!(outcome.reason(), Some("left failed"));
}

#[test]
fn test_or_passes_when_either_child_passes() {
    let rule = Rule::new(|s: &str| s.len() == 5, "must be 5 characters")
        .or(Rule::new(|s: &str| s.len() == 10, "must be 10 characters"));
    assert!(rule.test("hello").is_valid());
    assert!(rule.test("helloworld").is_valid());
    assert!(rule.test("hi").is_invalid());
}

#[test]
fn or_short_circuits_on_the_left_success() {
    let rule = min_len(2).or(exploding());
    assert!(rule.test("hello").is_valid());
}

#[test]
fn or_reports_the_rightmost_failure_when_both_fail() {
    let left = Rule::new(|_: &str| false, "left failed");
    let right = Rule::new(|_: &str| false, "right failed");
    let outcome = left.or(right).test("anything");
    assert_eq!(outcome.reason(), Some("right failed"));
}

#[test]
fn composites_nest_arbitrarily() {
    let rule = min_len(3).and(max_len(5)).or(Rule::new(
        |s: &str| s.starts_with("ok:"),
        "must carry the ok prefix",
    ));

    assert!(rule.test("abcd").is_valid());
    assert!(rule.test("ok: quite long input").is_valid());
    assert_eq!(
        rule.test("toolonginput").reason(),
        Some("must carry the ok prefix")
    );
}

#[test]
fn and_groupings_agree_on_validity() {
    let inputs = ["", "ab", "abcd", "abcdef", "abcdefghij"];
    for input in inputs {
        let left_grouped = min_len(2).and(max_len(8)).and(min_len(4));
        let right_grouped = min_len(2).and(max_len(8).and(min_len(4)));
        assert_eq!(
            left_grouped.test(input).is_valid(),
            right_grouped.test(input).is_valid(),
            "grouping changed validity for {input:?}"
        );
    }
}

#[test]
fn or_groupings_agree_on_validity() {
    let inputs = ["", "ab", "abcd", "abcdef", "abcdefghij"];
    for input in inputs {
        let left_grouped = min_len(8).or(max_len(1)).or(min_len(4));
        let right_grouped = min_len(8).or(max_len(1).or(min_len(4)));
        assert_eq!(
            left_grouped.test(input).is_valid(),
            right_grouped.test(input).is_valid(),
            "grouping changed validity for {input:?}"
        );
    }
}

#[test]
fn free_functions_mirror_the_methods() {
    let conjunction = and(min_len(3), max_len(5));
    assert!(conjunction.test("abcd").is_valid());
    assert!(conjunction.test("ab").is_invalid());

    let disjunction = or(min_len(8), max_len(2));
    assert!(disjunction.test("ab").is_valid());
    assert!(disjunction.test("abcd").is_invalid());
}

#[test]
fn accessors_expose_the_children() {
    let composite = And::new(min_len(3), max_len(5));
    assert!(composite.left().test("abc").is_valid());
    assert!(composite.right().test("abcdef").is_invalid());

    let (left, right) = composite.into_parts();
    assert!(left.test("abc").is_valid());
    assert!(right.test("abc").is_valid());
}

#[test]
fn borrowed_rules_compose_without_consuming() {
    let short = min_len(3);
    let long = max_len(5);

    let first = (&short).and(&long);
    let second = (&short).and(&long);

    assert!(first.test("abcd").is_valid());
    assert!(second.test("abcd").is_valid());
    assert!(short.test("abcd").is_valid());
}

#[test]
fn boxed_rules_are_testable_through_the_trait_object() {
    let rules: Vec<DynRule<str>> = vec![
        Box::new(min_len(3)),
        Box::new(max_len(5)),
        Box::new(min_len(1).and(max_len(10))),
    ];

    assert!(rules.iter().all(|rule| rule.test("abcd").is_valid()));
    assert!(rules.iter().any(|rule| rule.test("").is_invalid()));
}
