use check_rail::{rule, Validate};

struct Address {
    zip: String,
}

#[test]
fn rule_macro_without_extractors() {
    let required = rule!(|a: &Address| !a.zip.is_empty(), "Zip code is required");

    let outcome = required.test(&Address { zip: String::new() });
    assert_eq!(outcome.reason(), Some("Zip code is required"));
}

#[test]
fn rule_macro_with_extractors_fills_placeholders_in_order() {
    let numeric = rule!(
        |a: &Address| a.zip.chars().all(|c| c.is_ascii_digit()),
        "{0} should be numeric. [suppliedValue={1}]",
        |_| "Zip code",
        |a: &Address| a.zip.clone(),
    );

    let outcome = numeric.test(&Address { zip: "AB12".into() });
    assert_eq!(
        outcome.reason(),
        Some("Zip code should be numeric. [suppliedValue=AB12]")
    );
    assert!(numeric.test(&Address { zip: "4212".into() }).is_valid());
}

#[test]
fn rule_macro_accepts_trailing_commas() {
    let positive = rule!(|n: &i64| *n > 0, "value must be positive",);
    assert!(positive.test(&17).is_valid());
}

#[test]
fn rule_macro_matches_the_builder_form() {
    let from_macro = rule!(|n: &u32| *n < 100, "{0} exceeds the limit", |n: &u32| *n);
    let from_builder =
        check_rail::Rule::new(|n: &u32| *n < 100, "{0} exceeds the limit").arg(|n: &u32| *n);

    assert_eq!(from_macro.test(&250), from_builder.test(&250));
    assert_eq!(from_macro.test(&42), from_builder.test(&42));
}
