//! Short-circuiting AND/OR composition of validators.
//!
//! Both combinators produce a new validator over the same domain type,
//! closing over the two children. Composites nest arbitrarily
//! (`a.and(b).or(c)`), building a binary expression tree that is evaluated
//! lazily, left to right, depth first, when [`Validate::test`] runs - the
//! tree is never precomputed or normalized.

use crate::rule::traits::Validate;
use crate::types::Outcome;

/// Combines two validators with logical AND.
///
/// The composite fails iff either child fails. If the left child fails, its
/// outcome is returned immediately and the right child is never evaluated,
/// so a double failure always reports the left child's reason.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
///
/// # Examples
///
/// ```
/// use check_rail::{And, Rule, Validate};
///
/// let non_empty = Rule::new(|s: &&str| !s.is_empty(), "value is required");
/// let short = Rule::new(|s: &&str| s.len() <= 3, "value is too long");
///
/// let rule = And::new(non_empty, short);
/// assert!(rule.test(&"abc").is_valid());
/// assert_eq!(rule.test(&"").reason(), Some("value is required"));
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    ///
    /// # Arguments
    ///
    /// * `left` - The first validator to apply
    /// * `right` - The second validator, applied only if `left` passes
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Domain = L::Domain>,
{
    type Domain = L::Domain;

    fn test(&self, domain: &Self::Domain) -> Outcome {
        match self.left.test(domain) {
            Outcome::Valid => self.right.test(domain),
            invalid => invalid,
        }
    }
}

/// Combines two validators with logical OR.
///
/// The composite succeeds iff either child succeeds. If the left child
/// passes, the right child is never evaluated. When both fail, the right
/// child's outcome is returned unchanged - the reported reason is the
/// rightmost failure, the mirror image of [`And`].
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The second validator, tried only if `left` fails
///
/// # Examples
///
/// ```
/// use check_rail::{Or, Rule, Validate};
///
/// let five = Rule::new(|s: &&str| s.len() == 5, "must be 5 characters");
/// let ten = Rule::new(|s: &&str| s.len() == 10, "must be 10 characters");
///
/// let rule = Or::new(five, ten);
/// assert!(rule.test(&"hello").is_valid());
/// assert_eq!(rule.test(&"hi").reason(), Some("must be 10 characters"));
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    ///
    /// # Arguments
    ///
    /// * `left` - The first validator to try
    /// * `right` - The second validator to try if the first fails
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Domain = L::Domain>,
{
    type Domain = L::Domain;

    fn test(&self, domain: &Self::Domain) -> Outcome {
        match self.left.test(domain) {
            Outcome::Valid => Outcome::Valid,
            Outcome::Invalid(_) => self.right.test(domain),
        }
    }
}

/// Creates an [`And`] combinator from two validators.
///
/// Free-function form of [`ValidateExt::and`](crate::rule::ValidateExt::and).
///
/// # Examples
///
/// ```
/// use check_rail::{and, Rule, Validate};
///
/// let rule = and(
///     Rule::new(|n: &i64| *n >= 0, "must not be negative"),
///     Rule::new(|n: &i64| *n < 100, "must be under 100"),
/// );
/// assert!(rule.test(&42).is_valid());
/// ```
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Domain = L::Domain>,
{
    And::new(left, right)
}

/// Creates an [`Or`] combinator from two validators.
///
/// Free-function form of [`ValidateExt::or`](crate::rule::ValidateExt::or).
///
/// # Examples
///
/// ```
/// use check_rail::{or, Rule, Validate};
///
/// let rule = or(
///     Rule::new(|n: &i64| *n == 0, "must be zero"),
///     Rule::new(|n: &i64| *n > 9, "must have two digits"),
/// );
/// assert!(rule.test(&0).is_valid());
/// assert!(rule.test(&42).is_valid());
/// ```
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Domain = L::Domain>,
{
    Or::new(left, right)
}
