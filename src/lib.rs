//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `check_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## A Single Rule
//!
//! ```
//! use check_rail::{Rule, Validate};
//!
//! struct Address {
//!     zip: String,
//! }
//!
//! let required = Rule::new(|a: &Address| !a.zip.is_empty(), "Zip code is required");
//!
//! let outcome = required.test(&Address { zip: String::new() });
//! assert!(!outcome.is_valid());
//! assert_eq!(outcome.reason(), Some("Zip code is required"));
//! ```
//!
//! ## Parameterized Failure Reasons
//!
//! Placeholders `{0}`, `{1}`, ... are filled from extractor closures that run
//! only when the rule fails:
//!
//! ```
//! use check_rail::{Rule, Validate};
//!
//! struct Address {
//!     zip: String,
//! }
//!
//! let numeric = Rule::new(
//!     |a: &Address| a.zip.chars().all(|c| c.is_ascii_digit()),
//!     "{0} should be numeric. [suppliedValue={1}]",
//! )
//! .arg(|_| "Zip code")
//! .arg(|a: &Address| a.zip.clone());
//!
//! let outcome = numeric.test(&Address { zip: "AB12".into() });
//! assert_eq!(
//!     outcome.reason(),
//!     Some("Zip code should be numeric. [suppliedValue=AB12]")
//! );
//! ```
//!
//! ## Composing with AND / OR
//!
//! ```
//! use check_rail::prelude::*;
//!
//! struct Address {
//!     zip: String,
//! }
//!
//! let required = Rule::new(|a: &Address| !a.zip.is_empty(), "Zip code is required");
//! let five_digits = Rule::new(|a: &Address| a.zip.len() == 5, "Zip code must be 5 characters");
//!
//! let zip = required.and(five_digits);
//!
//! // The left failure is reported and the right rule never runs.
//! let outcome = zip.test(&Address { zip: String::new() });
//! assert_eq!(outcome.reason(), Some("Zip code is required"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Outcome and Result
pub mod convert;
/// Shorthand macros for building rules
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Rule, the Validate trait and the AND/OR combinators
pub mod rule;
/// Outcome and reason-formatting structures
pub mod types;

// Re-export common types that might be needed at root,
// but encourage using the prelude for application code.
pub use convert::*;
pub use rule::{and, or, And, DynRule, Or, Rule, Validate, ValidateExt};
pub use types::{format_reason, ArgVec, Outcome};
