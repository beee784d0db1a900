//! Rules, the [`Validate`] trait and the AND/OR combinators.
//!
//! A rule is a named test over a domain value: a predicate, a reason
//! template, and zero or more lazy argument extractors. Running a rule
//! produces an [`Outcome`](crate::types::Outcome). Rules compose through
//! [`ValidateExt::and`] and [`ValidateExt::or`] into binary expression
//! trees that are themselves rules, evaluated lazily, left to right, at
//! [`Validate::test`] time.
//!
//! # Key Components
//!
//! - [`Rule`] - The leaf validator built from a predicate and a template
//! - [`Validate`] - The abstraction every validator implements
//! - [`And`] / [`Or`] - Short-circuiting binary composites
//!
//! # Examples
//!
//! ```
//! use check_rail::prelude::*;
//!
//! let non_empty = Rule::new(|s: &&str| !s.is_empty(), "value is required");
//! let short = Rule::new(|s: &&str| s.len() <= 8, "value is too long");
//!
//! let rule = non_empty.and(short);
//! assert!(rule.test(&"hello").is_valid());
//! assert_eq!(rule.test(&"").reason(), Some("value is required"));
//! ```
pub mod combinators;
pub mod core;
pub mod traits;

pub use self::combinators::*;
pub use self::core::*;
pub use self::traits::*;
