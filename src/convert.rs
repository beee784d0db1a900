use crate::types::alloc_type::String;
use crate::types::Outcome;

/// Converts an [`Outcome`] into a `Result`, keeping the failure reason.
///
/// # Examples
///
/// ```
/// use check_rail::{outcome_to_result, Outcome};
///
/// assert_eq!(outcome_to_result(Outcome::valid()), Ok(()));
/// assert_eq!(
///     outcome_to_result(Outcome::invalid("too long")),
///     Err("too long".to_string())
/// );
/// ```
#[inline]
pub fn outcome_to_result(outcome: Outcome) -> Result<(), String> {
    match outcome {
        Outcome::Valid => Ok(()),
        Outcome::Invalid(reason) => Err(reason),
    }
}

/// Converts a `Result` into an [`Outcome`].
///
/// The error side is expected to carry an already-formatted reason.
///
/// # Panics
///
/// Panics if the error side carries an empty string, since an invalid
/// outcome always has a non-empty reason.
///
/// # Examples
///
/// ```
/// use check_rail::{result_to_outcome, Outcome};
///
/// assert_eq!(result_to_outcome(Ok(())), Outcome::valid());
/// assert!(result_to_outcome(Err("too long".to_string())).is_invalid());
/// ```
#[inline]
pub fn result_to_outcome(result: Result<(), String>) -> Outcome {
    match result {
        Ok(()) => Outcome::Valid,
        Err(reason) => Outcome::invalid(reason),
    }
}

/// Converts an already-computed verdict into an [`Outcome`].
///
/// Useful for callers that evaluated a condition inline and only need the
/// structured result. Note that `reason` is built eagerly here; use a
/// [`Rule`](crate::Rule) with extractors when the reason is expensive to
/// derive.
///
/// # Examples
///
/// ```
/// use check_rail::bool_to_outcome;
///
/// let zip = "AB12";
/// let outcome = bool_to_outcome(zip.len() == 5, "Zip code must be 5 characters");
/// assert!(outcome.is_invalid());
/// ```
#[inline]
pub fn bool_to_outcome(is_valid: bool, reason: impl Into<String>) -> Outcome {
    if is_valid {
        Outcome::Valid
    } else {
        Outcome::invalid(reason)
    }
}

impl From<Outcome> for Result<(), String> {
    #[inline]
    fn from(outcome: Outcome) -> Self {
        outcome_to_result(outcome)
    }
}

impl From<Result<(), String>> for Outcome {
    #[inline]
    fn from(result: Result<(), String>) -> Self {
        result_to_outcome(result)
    }
}
