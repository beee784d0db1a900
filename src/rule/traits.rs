use crate::rule::combinators::{And, Or};
use crate::types::alloc_type::Box;
use crate::types::Outcome;

/// The abstraction every validator implements.
///
/// A validator is a named test over a borrowed domain value, producing an
/// [`Outcome`]. Leaf validators are usually built with
/// [`Rule`](crate::rule::Rule); composites come from
/// [`ValidateExt::and`] and [`ValidateExt::or`].
///
/// Validators are immutable once constructed, so a single instance may be
/// tested concurrently against different values without coordination.
///
/// # Type Parameters
///
/// * `Domain` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```
/// use check_rail::{Outcome, Validate};
///
/// struct NonEmpty;
///
/// impl Validate for NonEmpty {
///     type Domain = str;
///
///     fn test(&self, domain: &str) -> Outcome {
///         if domain.is_empty() {
///             Outcome::invalid("value is required")
///         } else {
///             Outcome::valid()
///         }
///     }
/// }
///
/// assert!(NonEmpty.test("hello").is_valid());
/// ```
pub trait Validate {
    /// The type of value being validated.
    type Domain: ?Sized;

    /// Tests `domain` against this validator.
    ///
    /// Any panic raised by a caller-supplied predicate or extractor
    /// propagates to the caller of `test` untouched.
    fn test(&self, domain: &Self::Domain) -> Outcome;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Domain = V::Domain;

    #[inline]
    fn test(&self, domain: &Self::Domain) -> Outcome {
        (**self).test(domain)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Domain = V::Domain;

    #[inline]
    fn test(&self, domain: &Self::Domain) -> Outcome {
        (**self).test(domain)
    }
}

/// Boxed, type-erased validator over `T`.
///
/// Useful for storing heterogeneous rules for the same domain type in one
/// collection.
///
/// # Examples
///
/// ```
/// use check_rail::{DynRule, Rule, Validate};
///
/// let rules: Vec<DynRule<str>> = vec![
///     Box::new(Rule::new(|s: &str| !s.is_empty(), "value is required")),
///     Box::new(Rule::new(|s: &str| s.len() <= 8, "value is too long")),
/// ];
///
/// assert!(rules.iter().all(|rule| rule.test("hello").is_valid()));
/// ```
pub type DynRule<'a, T: ?Sized> = Box<dyn Validate<Domain = T> + 'a>;

/// Extension trait granting combinator methods to every validator.
///
/// Automatically implemented for all [`Validate`] types, providing the
/// fluent composition API.
///
/// # Examples
///
/// ```
/// use check_rail::prelude::*;
///
/// let five = Rule::new(|s: &&str| s.len() == 5, "must be 5 characters");
/// let ten = Rule::new(|s: &&str| s.len() == 10, "must be 10 characters");
///
/// let rule = five.or(ten);
/// assert!(rule.test(&"hello").is_valid());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// The composite fails iff either child fails. Evaluation short-circuits:
    /// if `self` fails, its outcome is returned and `other` is never
    /// evaluated, so the reported reason on a double failure is always the
    /// left child's.
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::prelude::*;
    ///
    /// let non_empty = Rule::new(|s: &&str| !s.is_empty(), "value is required");
    /// let short = Rule::new(|s: &&str| s.len() <= 3, "value is too long");
    ///
    /// let rule = non_empty.and(short);
    /// assert_eq!(rule.test(&"").reason(), Some("value is required"));
    /// ```
    fn and<R>(self, other: R) -> And<Self, R>
    where
        R: Validate<Domain = Self::Domain>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// The composite succeeds iff either child succeeds. Evaluation
    /// short-circuits: if `self` succeeds, `other` is never evaluated. When
    /// both fail, the reported reason is the right child's, since it is the
    /// last one evaluated - the mirror image of [`and`](Self::and).
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::prelude::*;
    ///
    /// let five = Rule::new(|s: &&str| s.len() == 5, "must be 5 characters");
    /// let ten = Rule::new(|s: &&str| s.len() == 10, "must be 10 characters");
    ///
    /// let rule = five.or(ten);
    /// assert_eq!(rule.test(&"hi").reason(), Some("must be 10 characters"));
    /// ```
    fn or<R>(self, other: R) -> Or<Self, R>
    where
        R: Validate<Domain = Self::Domain>,
    {
        Or::new(self, other)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<V: Validate> ValidateExt for V {}
