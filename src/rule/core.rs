use crate::rule::traits::Validate;
use crate::types::alloc_type::{Box, Cow, String};
use crate::types::reason::format_reason;
use crate::types::{ArgVec, Outcome};
use core::fmt;
use core::fmt::Display;
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

/// A named test over a domain value.
///
/// `Rule` wraps a predicate, a reason template with positional `{0}`, `{1}`,
/// ... placeholders, and an ordered list of argument extractors. Testing a
/// value runs the predicate; on failure the extractors run in declared order
/// and their rendered results fill the template's placeholders.
///
/// Extractors are deferred: they never run at construction time or when the
/// predicate succeeds, so expensive or partial extraction logic (say, reading
/// a field that is only present when another check failed) stays off the
/// passing path.
///
/// # Type Parameters
///
/// * `T` - The domain type being validated (can be `?Sized`)
/// * `P` - The predicate closure type
///
/// # Examples
///
/// ```
/// use check_rail::{Rule, Validate};
///
/// struct Address {
///     zip: String,
/// }
///
/// let five_digits = Rule::new(
///     |a: &Address| a.zip.len() == 5,
///     "{0} must be 5 characters. [suppliedValue={1}]",
/// )
/// .arg(|_| "Zip code")
/// .arg(|a: &Address| a.zip.clone());
///
/// let outcome = five_digits.test(&Address { zip: "123".into() });
/// assert_eq!(
///     outcome.reason(),
///     Some("Zip code must be 5 characters. [suppliedValue=123]")
/// );
/// ```
#[must_use]
pub struct Rule<T: ?Sized, P> {
    predicate: P,
    template: Cow<'static, str>,
    // Deferred: each closure renders one placeholder argument, on failure only.
    extractors: SmallVec<[Box<dyn Fn(&T) -> String>; 2]>,
}

impl<T: ?Sized, P> Rule<T, P>
where
    P: Fn(&T) -> bool,
{
    /// Creates a rule from a predicate and a reason template.
    ///
    /// The template is required even for rules that cannot fail in practice;
    /// a rule without a failure reason has nothing to report when composed
    /// with others.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Returns `true` when the value satisfies the rule
    /// * `template` - Failure reason, optionally with `{i}` placeholders
    ///
    /// # Panics
    ///
    /// Panics if `template` is empty, mirroring
    /// [`Outcome::invalid`](crate::types::Outcome::invalid).
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::{Rule, Validate};
    ///
    /// let positive = Rule::new(|n: &i64| *n > 0, "value must be positive");
    /// assert!(positive.test(&17).is_valid());
    /// ```
    pub fn new(predicate: P, template: impl Into<Cow<'static, str>>) -> Self {
        let template = template.into();
        assert!(!template.is_empty(), "reason template must not be empty");
        Self {
            predicate,
            template,
            extractors: SmallVec::new(),
        }
    }

    /// Appends one lazy placeholder argument.
    ///
    /// Extractors fill `{0}`, `{1}`, ... in the order they are appended and
    /// run only on the failing path. Keeping the extractor count in sync with
    /// the template's placeholders is the caller's contract; an unmatched
    /// placeholder stays literal (see
    /// [`format_reason`](crate::format_reason)).
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::{Rule, Validate};
    ///
    /// let under = Rule::new(|n: &u32| *n < 100, "{0} exceeds the limit")
    ///     .arg(|n: &u32| *n);
    ///
    /// assert_eq!(under.test(&250).reason(), Some("250 exceeds the limit"));
    /// ```
    pub fn arg<F, D>(mut self, extract: F) -> Self
    where
        F: Fn(&T) -> D + 'static,
        D: Display,
    {
        self.extractors
            .push(Box::new(move |domain| extract(domain).to_string()));
        self
    }

    /// Returns the reason template this rule reports on failure.
    #[must_use]
    #[inline]
    pub fn template(&self) -> &str {
        &self.template
    }
}

impl<T: ?Sized, P> Validate for Rule<T, P>
where
    P: Fn(&T) -> bool,
{
    type Domain = T;

    fn test(&self, domain: &T) -> Outcome {
        if (self.predicate)(domain) {
            return Outcome::valid();
        }
        let args: ArgVec = self
            .extractors
            .iter()
            .map(|extract| extract(domain))
            .collect();
        let reason = format_reason(&self.template, &args);
        debug_assert!(!reason.is_empty(), "formatted reason must not be empty");
        Outcome::Invalid(reason)
    }
}

impl<T: ?Sized, P> fmt::Debug for Rule<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("template", &self.template)
            .field("extractors", &self.extractors.len())
            .finish_non_exhaustive()
    }
}
