//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use check_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`rule!`](crate::rule!)
//! - **Types**: [`Outcome`], [`Rule`], [`And`], [`Or`], [`DynRule`]
//! - **Traits**: [`Validate`], [`ValidateExt`]
//!
//! # Examples
//!
//! ## 30-Second Quick Start
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
//! let outcome = required.and(five_digits).test(&Address { zip: "02134".into() });
//! assert!(outcome.is_valid());
//! ```
//!
//! ## With Lazy Placeholder Arguments
//!
//! ```
//! use check_rail::prelude::*;
//!
//! let under = rule!(|n: &u32| *n < 100, "{0} exceeds the limit", |n: &u32| *n);
//! assert_eq!(under.test(&250).reason(), Some("250 exceeds the limit"));
//! ```

// Macros
pub use crate::rule;

// Core types
pub use crate::rule::{And, DynRule, Or, Rule};
pub use crate::types::Outcome;

// Traits
pub use crate::rule::{Validate, ValidateExt};
