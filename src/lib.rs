//! Success/failure outcomes with chainable combinators.
//!
//! An [`Outcome`] is either a success or a failure carrying one or more
//! structured [`Error`]s; a [`TypedOutcome<T>`] additionally carries a value on
//! success. The combinators compose fallible steps without branching at every
//! call site:
//!
//! - `then` / `then_map` run only on success and short-circuit a failure
//!   untouched, without calling the continuation.
//! - `then_on_fail` and friends run only on failure and produce a substitute
//!   outcome.
//!
//! Failures are data, not panics. Panics raised inside a continuation are
//! never caught and reach the caller unchanged.
//!
//! # Examples
//!
//! ## Chaining
//!
//! ```
//! use simple_result::{Error, Outcome, TypedOutcome};
//!
//! fn parse(raw: &str) -> TypedOutcome<u16> {
//!     raw.parse::<u16>()
//!         .map_err(|e| Error::new("invalid port").with_metadata("cause", e.to_string()))
//!         .into()
//! }
//!
//! let port = Outcome::ok()
//!     .then(|| TypedOutcome::ok("8080"))
//!     .then(parse)
//!     .then_map(|port| port + 1);
//! assert_eq!(port.into_value(), Some(8081));
//!
//! let failed = TypedOutcome::ok("http").then(parse).then_map(|port| port + 1);
//! assert_eq!(failed.errors()[0].message(), "invalid port");
//! ```
//!
//! ## Recovery
//!
//! ```
//! use simple_result::TypedOutcome;
//!
//! let recovered = TypedOutcome::<&str>::fail("e").then_on_fail(|| TypedOutcome::ok("recovered"));
//! assert_eq!(recovered.into_value(), Some("recovered"));
//!
//! let kept = TypedOutcome::ok("kept").then_on_fail(|| TypedOutcome::ok("replaced"));
//! assert_eq!(kept.into_value(), Some("kept"));
//! ```
//!
//! ## Accumulation
//!
//! ```
//! use simple_result::Outcome;
//!
//! let checks = [Outcome::ok(), Outcome::fail("name is empty"), Outcome::fail("age < 0")];
//! let merged: Outcome = checks.into_iter().collect();
//! assert_eq!(merged.errors().len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod macros;

/// Conversions between outcomes and std `Result`
pub mod convert;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits shared by both outcome types
pub mod traits;
/// Outcome and error types
pub mod types;

/// Async combinators (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Span annotation for failures (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::*;
pub use traits::*;
pub use types::{
    Error, ErrorVec, Errors, InvalidArgument, Metadata, MetadataValue, Outcome, TypedOutcome,
};
