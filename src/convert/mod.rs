//! Conversions between outcomes and std `Result`.
//!
//! These adapters make it straightforward to adopt outcomes incrementally:
//! wrap the `Result` of an existing API into a [`TypedOutcome`], or flatten an
//! outcome back into a `Result` when handing it to code that expects one.
//!
//! Dropping the type of a [`TypedOutcome`] builds a new [`Outcome`] but keeps
//! sharing the original error allocation.
//!
//! # Examples
//!
//! ```
//! use simple_result::convert::*;
//! use simple_result::{Errors, Outcome, TypedOutcome};
//!
//! let parsed: TypedOutcome<i32> = outcome_from_result("42".parse::<i32>().map_err(|e| e.to_string()));
//! assert_eq!(parsed.value(), Some(&42));
//!
//! let failed = TypedOutcome::<i32>::fail("boom");
//! let errors = failed.failure().cloned().unwrap();
//! let untyped: Outcome = untyped(failed);
//! assert!(Errors::ptr_eq(untyped.failure().unwrap(), &errors));
//! ```

use crate::traits::IntoError;
use crate::types::{Error, Errors, Outcome, TypedOutcome};

/// Wraps a `Result` into a [`TypedOutcome`], converting the error.
#[inline]
pub fn outcome_from_result<T, E>(result: Result<T, E>) -> TypedOutcome<T>
where
    E: IntoError,
{
    match result {
        Ok(value) => TypedOutcome::Success(value),
        Err(error) => TypedOutcome::fail(error),
    }
}

/// Drops the value of a success; a failure keeps its [`Errors`].
#[inline]
pub fn untyped<T>(outcome: TypedOutcome<T>) -> Outcome {
    match outcome {
        TypedOutcome::Success(_) => Outcome::Success,
        TypedOutcome::Failure(errors) => Outcome::Failure(errors),
    }
}

/// Converts into a `Result` that keeps only the first error.
///
/// # Examples
///
/// ```
/// use simple_result::convert::first_error;
/// use simple_result::TypedOutcome;
///
/// let failed = TypedOutcome::<()>::fail_many(["first", "second"]);
/// assert_eq!(first_error(failed).unwrap_err().message(), "first");
/// ```
#[inline]
pub fn first_error<T>(outcome: TypedOutcome<T>) -> Result<T, Error> {
    outcome.into_result().map_err(|errors| errors.first().clone())
}

impl<T> From<TypedOutcome<T>> for Outcome {
    #[inline]
    fn from(outcome: TypedOutcome<T>) -> Self {
        untyped(outcome)
    }
}

impl<T, E: IntoError> From<Result<T, E>> for TypedOutcome<T> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        outcome_from_result(result)
    }
}

impl<E: IntoError> From<Result<(), E>> for Outcome {
    #[inline]
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Outcome::Success,
            Err(error) => Outcome::fail(error),
        }
    }
}

impl<T> From<TypedOutcome<T>> for Result<T, Errors> {
    #[inline]
    fn from(outcome: TypedOutcome<T>) -> Self {
        outcome.into_result()
    }
}

impl From<Outcome> for Result<(), Errors> {
    #[inline]
    fn from(outcome: Outcome) -> Self {
        outcome.into_result()
    }
}
