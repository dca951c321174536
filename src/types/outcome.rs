//! Untyped success/failure container and its combinators.

use crate::macros::trace_rail;
use crate::traits::{IntoError, Rail};
use crate::types::{Errors, InvalidArgument, TypedOutcome};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Success or failure of an operation that produces no value.
///
/// A success carries nothing; a failure carries one or more [`Error`](crate::Error)s
/// in an [`Errors`] sequence. Outcomes are never mutated: the combinators move
/// `self` through when nothing changes, and a short-circuited failure keeps its
/// original error allocation.
///
/// # Examples
///
/// ```
/// use simple_result::{Error, Outcome};
///
/// let greeting = Outcome::ok().then_map(|| "hi");
/// assert_eq!(greeting.into_value(), Some("hi"));
///
/// let mut calls = 0;
/// let failed = Outcome::fail(Error::new("x")).then_map(|| {
///     calls += 1;
///     "hi"
/// });
/// assert!(failed.is_failed());
/// assert_eq!(calls, 0);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success,
    Failure(Errors),
}

impl Outcome {
    /// Creates a success.
    #[inline]
    pub fn ok() -> Self {
        Self::Success
    }

    /// Creates a failure carrying a single error.
    #[inline]
    pub fn fail<E: IntoError>(error: E) -> Self {
        Self::Failure(Errors::one(error))
    }

    /// Creates a failure carrying every error of `errors`, in order.
    ///
    /// # Panics
    ///
    /// Panics with [`InvalidArgument::EmptyErrors`] when `errors` is empty. Use
    /// [`Outcome::try_fail_many`] to get the misuse back as a value instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::Outcome;
    ///
    /// let failed = Outcome::fail_many(["first", "second"]);
    /// assert_eq!(failed.errors().len(), 2);
    /// ```
    #[track_caller]
    pub fn fail_many<I, E>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: IntoError,
    {
        match Self::try_fail_many(errors) {
            Ok(outcome) => outcome,
            Err(misuse) => panic!("{}", misuse),
        }
    }

    /// Non-panicking form of [`Outcome::fail_many`].
    #[inline]
    pub fn try_fail_many<I, E>(errors: I) -> Result<Self, InvalidArgument>
    where
        I: IntoIterator<Item = E>,
        E: IntoError,
    {
        Errors::try_from_iter(errors).map(Self::Failure)
    }

    /// Creates a failure that reuses an existing error sequence.
    #[inline]
    pub fn from_errors(errors: Errors) -> Self {
        Self::Failure(errors)
    }

    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    #[must_use]
    #[inline]
    pub fn is_failed(&self) -> bool {
        !self.is_success()
    }

    /// The carried errors; empty on success.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[crate::Error] {
        Rail::errors(self)
    }

    /// The error sequence when failed.
    #[must_use]
    #[inline]
    pub fn failure(&self) -> Option<&Errors> {
        match self {
            Self::Success => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    /// Runs `f` on success and wraps its value in a new typed success.
    ///
    /// On failure `f` is not called and the errors are forwarded unchanged.
    #[inline]
    pub fn then_map<U, F>(self, f: F) -> TypedOutcome<U>
    where
        F: FnOnce() -> U,
    {
        match self {
            Self::Success => TypedOutcome::Success(f()),
            Self::Failure(errors) => {
                trace_rail!(errors = errors.len(), "then_map short-circuited");
                TypedOutcome::Failure(errors)
            },
        }
    }

    /// Runs `f` on success and returns whatever outcome it produces, verbatim.
    ///
    /// `f` may return an [`Outcome`] or a [`TypedOutcome`]. On failure `f` is
    /// not called; when `R` is `Outcome` the failure is returned as is,
    /// otherwise a failure of type `R` carrying the same [`Errors`] is built.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::{Errors, Outcome, TypedOutcome};
    ///
    /// let next = Outcome::ok().then(|| TypedOutcome::ok(7));
    /// assert_eq!(next, TypedOutcome::ok(7));
    ///
    /// let failed = Outcome::fail("deadlock");
    /// let errors = failed.failure().cloned().unwrap();
    /// let forwarded: TypedOutcome<i32> = failed.then(|| TypedOutcome::ok(7));
    /// assert!(Errors::ptr_eq(forwarded.failure().unwrap(), &errors));
    /// ```
    #[inline]
    pub fn then<R, F>(self, f: F) -> R
    where
        R: Rail,
        F: FnOnce() -> R,
    {
        match self {
            Self::Success => f(),
            Self::Failure(errors) => {
                trace_rail!(errors = errors.len(), "then short-circuited");
                R::from_failure(errors)
            },
        }
    }

    /// Runs the recovery `f` on failure and returns its outcome verbatim.
    ///
    /// A success is returned unchanged and `f` is not called.
    #[inline]
    pub fn then_on_fail<F>(self, f: F) -> Outcome
    where
        F: FnOnce() -> Outcome,
    {
        self.then_on_fail_with(|_| f())
    }

    /// Like [`Outcome::then_on_fail`], but the recovery sees the errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::Outcome;
    ///
    /// let recovered = Outcome::fail("cache miss").then_on_fail_with(|errors| {
    ///     assert_eq!(errors[0].message(), "cache miss");
    ///     Outcome::ok()
    /// });
    /// assert!(recovered.is_success());
    /// ```
    #[inline]
    pub fn then_on_fail_with<F>(self, f: F) -> Outcome
    where
        F: FnOnce(&Errors) -> Outcome,
    {
        match self {
            Self::Success => Self::Success,
            Self::Failure(errors) => {
                trace_rail!(errors = errors.len(), "then_on_fail running recovery");
                f(&errors)
            },
        }
    }

    /// Converts into a std `Result`, so `?` can be used on the failure.
    #[inline]
    pub fn into_result(self) -> Result<(), Errors> {
        match self {
            Self::Success => Ok(()),
            Self::Failure(errors) => Err(errors),
        }
    }
}

impl Default for Outcome {
    #[inline]
    fn default() -> Self {
        Self::Success
    }
}

impl Rail for Outcome {
    #[inline]
    fn from_failure(errors: Errors) -> Self {
        Self::Failure(errors)
    }

    #[inline]
    fn failure(&self) -> Option<&Errors> {
        Outcome::failure(self)
    }
}
