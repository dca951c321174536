//! Shared discriminant surface of [`Outcome`](crate::Outcome) and
//! [`TypedOutcome`](crate::TypedOutcome).
//!
//! Anything that only cares about success/failure and the carried errors can be
//! written once against [`Rail`] and used with either outcome type. The
//! combinators rely on [`Rail::from_failure`] to forward a failure into
//! whatever outcome type the continuation would have produced.
//!
//! # Examples
//!
//! ```
//! use simple_result::{Outcome, TypedOutcome, traits::Rail};
//!
//! fn error_count<R: Rail>(outcome: &R) -> usize {
//!     outcome.errors().len()
//! }
//!
//! assert_eq!(error_count(&Outcome::fail("boom")), 1);
//! assert_eq!(error_count(&TypedOutcome::ok(5)), 0);
//! ```

use crate::types::{Error, Errors};

/// Success/failure discriminant plus the errors of a failure.
pub trait Rail: Sized {
    /// Builds a failure of this type that carries `errors` unchanged.
    fn from_failure(errors: Errors) -> Self;

    /// The error sequence when failed, `None` on success.
    fn failure(&self) -> Option<&Errors>;

    #[inline]
    fn is_success(&self) -> bool {
        self.failure().is_none()
    }

    #[inline]
    fn is_failed(&self) -> bool {
        self.failure().is_some()
    }

    /// The carried errors; empty on success.
    #[inline]
    fn errors(&self) -> &[Error] {
        match self.failure() {
            Some(errors) => errors.as_slice(),
            None => &[],
        }
    }

    /// Returns `true` when both are failures carrying the same error allocation.
    fn shares_failure_with<R: Rail>(&self, other: &R) -> bool {
        match (self.failure(), other.failure()) {
            (Some(a), Some(b)) => Errors::ptr_eq(a, b),
            _ => false,
        }
    }
}
