use check_rail::{bool_to_outcome, outcome_to_result, result_to_outcome, Outcome};

#[test]
fn test_outcome_to_result() {
    assert_eq!(outcome_to_result(Outcome::valid()), Ok(()));
    assert_eq!(
        outcome_to_result(Outcome::invalid("too long")),
        Err("too long".to_string())
    );
}

#[test]
fn test_result_to_outcome() {
    assert_eq!(result_to_outcome(Ok(())), Outcome::valid());
    assert_eq!(
        result_to_outcome(Err("too long".to_string())),
        Outcome::invalid("too long")
    );
}

#[test]
#[should_panic(expected = "failure reason must not be empty")]
fn empty_error_string_is_a_construction_error() {
    let _ = result_to_outcome(Err(String::new()));
}

#[test]
fn test_bool_to_outcome() {
    assert_eq!(
        bool_to_outcome(true, "Zip code must be 5 characters"),
        Outcome::valid()
    );
    assert_eq!(
        bool_to_outcome(false, "Zip code must be 5 characters").reason(),
        Some("Zip code must be 5 characters")
    );
}

#[test]
fn from_impls_round_trip() {
    let result: Result<(), String> = Outcome::invalid("too long").into();
    assert_eq!(result, Err("too long".to_string()));

    let outcome: Outcome = result.into();
    assert_eq!(outcome, Outcome::invalid("too long"));

    let ok: Result<(), String> = Outcome::valid().into();
    assert_eq!(ok, Ok(()));
    assert_eq!(Outcome::from(ok), Outcome::valid());
}
