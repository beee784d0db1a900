//! Shorthand macro for building [`Rule`](crate::Rule)s.
//!
//! # Examples
//!
//! ```
//! use check_rail::{rule, Validate};
//!
//! struct Address {
//!     zip: String,
//! }
//!
//! let numeric = rule!(
//!     |a: &Address| a.zip.chars().all(|c| c.is_ascii_digit()),
//!     "{0} should be numeric. [suppliedValue={1}]",
//!     |_| "Zip code",
//!     |a: &Address| a.zip.clone(),
//! );
//!
//! let outcome = numeric.test(&Address { zip: "AB12".into() });
//! assert!(outcome.is_invalid());
//! ```

/// Builds a [`Rule`](crate::Rule) from a predicate, a reason template, and
/// zero or more placeholder extractors.
///
/// Expands to `Rule::new(predicate, template)` followed by one
/// [`arg`](crate::Rule::arg) call per extractor, in order, so extractors keep
/// their deferred, failing-path-only evaluation.
///
/// # Syntax
///
/// - `rule!(predicate, template)` - A rule with a fixed reason
/// - `rule!(predicate, template, extractor, ...)` - Placeholder arguments
///   filled from the extractors, in positional order
///
/// # Examples
///
/// ```
/// use check_rail::{rule, Validate};
///
/// let positive = rule!(|n: &i64| *n > 0, "value must be positive");
/// assert!(positive.test(&17).is_valid());
///
/// let under = rule!(|n: &u32| *n < 100, "{0} exceeds the limit", |n: &u32| *n);
/// assert_eq!(under.test(&250).reason(), Some("250 exceeds the limit"));
/// ```
#[macro_export]
macro_rules! rule {
    ($predicate:expr, $template:expr $(,)?) => {
        $crate::Rule::new($predicate, $template)
    };
    ($predicate:expr, $template:expr, $($extract:expr),+ $(,)?) => {
        $crate::Rule::new($predicate, $template)$(.arg($extract))+
    };
}
