//! Outcome and reason-formatting types.
//!
//! This module provides the value types produced by running rules: the
//! [`Outcome`] of a single test and the positional-placeholder formatting
//! that turns a reason template plus extracted arguments into a
//! display-ready failure reason.
//!
//! # Examples
//!
//! ```
//! use check_rail::Outcome;
//!
//! let outcome = Outcome::invalid_with("{0} is required", ["Zip code"]);
//! assert_eq!(outcome.reason(), Some("Zip code is required"));
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod outcome;
pub mod reason;

pub use outcome::*;
pub use reason::*;

/// SmallVec-backed collection for rendered placeholder arguments.
///
/// Uses inline storage for up to 2 elements to avoid heap allocations
/// in the common case where a reason takes at most a couple of arguments.
pub type ArgVec = SmallVec<[alloc_type::String; 2]>;
