//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use simple_result::prelude::*;
//!
//! fn check(name: &str) -> Outcome {
//!     if name.is_empty() { Outcome::fail("name is empty") } else { Outcome::ok() }
//! }
//!
//! let greeting: TypedOutcome<String> = check("ada").then_map(|| "hello ada".to_string());
//! assert!(greeting.is_success());
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Outcome`], [`TypedOutcome`], [`Error`], [`Errors`]
//! - **Traits**: [`Rail`], [`ErrorDetails`], [`IntoError`]

pub use crate::traits::{ErrorDetails, IntoError, Rail};
pub use crate::types::{Error, Errors, Outcome, TypedOutcome};
