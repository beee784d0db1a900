use crate::types::alloc_type::String;
use crate::types::reason::format_reason;
use crate::types::ArgVec;
use core::fmt::Display;

#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of testing one rule against one value.
///
/// `Outcome` is either `Valid`, carrying nothing, or `Invalid`, carrying a
/// formatted, display-ready failure reason. Instances are immutable values:
/// two valid outcomes are always equal, and two invalid outcomes are equal
/// exactly when their reasons are.
///
/// # Serde Support
///
/// `Outcome` implements `Serialize` and `Deserialize` when the `serde`
/// feature is enabled. This makes it easy to embed in API responses.
///
/// # Variants
///
/// * `Valid` - The tested value satisfied the rule
/// * `Invalid(String)` - The rule failed, with the formatted reason
///
/// # Examples
///
/// ```
/// use check_rail::Outcome;
///
/// let valid = Outcome::valid();
/// assert!(valid.is_valid());
/// assert_eq!(valid.reason(), None);
///
/// let invalid = Outcome::invalid("Zip code is required");
/// assert_eq!(invalid.reason(), Some("Zip code is required"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome {
    Valid,
    Invalid(String),
}

impl Outcome {
    /// Returns the canonical valid outcome.
    ///
    /// `Valid` carries no state, so every call yields the same value; callers
    /// may compare outcomes obtained from different rules directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::Outcome;
    ///
    /// assert_eq!(Outcome::valid(), Outcome::valid());
    /// ```
    #[must_use]
    #[inline]
    pub fn valid() -> Self {
        Self::Valid
    }

    /// Creates an invalid outcome carrying `reason` verbatim.
    ///
    /// Use [`invalid_with`](Self::invalid_with) when the reason has `{i}`
    /// placeholders to fill.
    ///
    /// # Panics
    ///
    /// Panics if `reason` is empty. An invalid outcome always carries a
    /// non-empty reason, so the mistake surfaces at construction rather than
    /// at display time.
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::Outcome;
    ///
    /// let outcome = Outcome::invalid("Zip code is required");
    /// assert!(outcome.is_invalid());
    /// ```
    #[inline]
    pub fn invalid(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        assert!(!reason.is_empty(), "failure reason must not be empty");
        Self::Invalid(reason)
    }

    /// Creates an invalid outcome by formatting `template` with `args`.
    ///
    /// Each argument is rendered through its `Display` implementation and
    /// substituted at the matching `{i}` placeholder; see
    /// [`format_reason`](crate::format_reason) for the substitution policy.
    ///
    /// # Arguments
    ///
    /// * `template` - Reason template with positional placeholders
    /// * `args` - Placeholder arguments, in positional order
    ///
    /// # Panics
    ///
    /// Panics if `template` is empty, for the same reason as
    /// [`invalid`](Self::invalid).
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::Outcome;
    ///
    /// let outcome = Outcome::invalid_with("{0} must be at most {1}", ["size", "64"]);
    /// assert_eq!(outcome.reason(), Some("size must be at most 64"));
    /// ```
    #[inline]
    pub fn invalid_with<A>(template: &str, args: A) -> Self
    where
        A: IntoIterator,
        A::Item: Display,
    {
        assert!(!template.is_empty(), "reason template must not be empty");
        let args: ArgVec = args.into_iter().map(|arg| arg.to_string()).collect();
        let reason = format_reason(template, &args);
        debug_assert!(!reason.is_empty(), "formatted reason must not be empty");
        Self::Invalid(reason)
    }

    /// Returns `true` for the valid variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::Outcome;
    ///
    /// assert!(Outcome::valid().is_valid());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns `true` for the invalid variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::Outcome;
    ///
    /// assert!(Outcome::invalid("bad").is_invalid());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Returns the failure reason, if any.
    ///
    /// Valid outcomes have no reason; invalid outcomes always carry one.
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::Outcome;
    ///
    /// assert_eq!(Outcome::valid().reason(), None);
    /// assert_eq!(Outcome::invalid("too long").reason(), Some("too long"));
    /// ```
    #[must_use]
    #[inline]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(reason) => Some(reason),
        }
    }

    /// Extracts the failure reason, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::Outcome;
    ///
    /// let outcome = Outcome::invalid("too long");
    /// assert_eq!(outcome.into_reason().as_deref(), Some("too long"));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_reason(self) -> Option<String> {
        match self {
            Self::Valid => None,
            Self::Invalid(reason) => Some(reason),
        }
    }
}
