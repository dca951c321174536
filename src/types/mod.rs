//! Outcome and error types.
//!
//! - [`Error`]: message plus [`Metadata`]
//! - [`Errors`]: the shared, non-empty error sequence of a failure
//! - [`Outcome`]: untyped success/failure
//! - [`TypedOutcome`]: success carrying a value, or failure
//!
//! # Examples
//!
//! ```
//! use simple_result::{Error, Outcome, TypedOutcome};
//!
//! let saved = TypedOutcome::ok("draft")
//!     .then(|doc| if doc.is_empty() { Outcome::fail("empty document") } else { Outcome::ok() })
//!     .then_map(|| "saved");
//!
//! assert_eq!(saved.into_value(), Some("saved"));
//! ```
use smallvec::SmallVec;

pub(crate) mod accumulator;
pub mod alloc_type;
mod collect;
pub mod error;
pub mod errors;
pub mod outcome;
pub mod typed_outcome;

pub use error::*;
pub use errors::*;
pub use outcome::*;
pub use typed_outcome::*;

/// SmallVec-backed collection used for storing errors.
///
/// Uses inline storage for a single element, the overwhelmingly common case of
/// a failure carrying one error.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
