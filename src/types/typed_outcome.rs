//! Success/failure container whose success carries a value.

use crate::macros::trace_rail;
use crate::traits::{IntoError, Rail};
use crate::types::{Error, Errors, InvalidArgument};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Success with a value of type `T`, or failure with one or more errors.
///
/// The value is moved through the chain, never cloned: a continuation passed
/// to [`TypedOutcome::then`] or [`TypedOutcome::then_map`] receives the exact
/// value stored at construction time.
///
/// # Examples
///
/// ```
/// use simple_result::TypedOutcome;
///
/// let shouted = TypedOutcome::ok(String::from("a"))
///     .then(|s| TypedOutcome::ok(s + "!"));
/// assert_eq!(shouted, TypedOutcome::ok(String::from("a!")));
///
/// let kept = TypedOutcome::ok("kept").then_on_fail(|| TypedOutcome::ok("replaced"));
/// assert_eq!(kept.into_value(), Some("kept"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum TypedOutcome<T> {
    Success(T),
    Failure(Errors),
}

impl<T> TypedOutcome<T> {
    /// Creates a success holding `value`.
    #[inline]
    pub fn ok(value: T) -> Self {
        Self::Success(value)
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
    /// Panics with [`InvalidArgument::EmptyErrors`] when `errors` is empty.
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

    /// Non-panicking form of [`TypedOutcome::fail_many`].
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
        matches!(self, Self::Success(_))
    }

    #[must_use]
    #[inline]
    pub fn is_failed(&self) -> bool {
        !self.is_success()
    }

    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[Error] {
        Rail::errors(self)
    }

    #[must_use]
    #[inline]
    pub fn failure(&self) -> Option<&Errors> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    /// Borrows the value of a success.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the value, sharing the error allocation of a failure.
    #[inline]
    pub fn as_ref(&self) -> TypedOutcome<&T> {
        match self {
            Self::Success(value) => TypedOutcome::Success(value),
            Self::Failure(errors) => TypedOutcome::Failure(errors.clone()),
        }
    }

    /// Passes the value to `f` on success and wraps the result in a new success.
    ///
    /// On failure `f` is not called and the errors are forwarded unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::TypedOutcome;
    ///
    /// let len = TypedOutcome::ok("four").then_map(str::len);
    /// assert_eq!(len.into_value(), Some(4));
    /// ```
    #[inline]
    pub fn then_map<U, F>(self, f: F) -> TypedOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => TypedOutcome::Success(f(value)),
            Self::Failure(errors) => {
                trace_rail!(errors = errors.len(), "then_map short-circuited");
                TypedOutcome::Failure(errors)
            },
        }
    }

    /// Passes the value to `f` on success and returns its outcome verbatim.
    ///
    /// `f` may return an [`Outcome`](crate::Outcome) or any `TypedOutcome`. On
    /// failure `f` is not called and a failure of type `R` carrying the same
    /// [`Errors`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::{Outcome, TypedOutcome};
    ///
    /// let stored = TypedOutcome::ok(42).then(|answer| {
    ///     if answer == 42 { Outcome::ok() } else { Outcome::fail("wrong answer") }
    /// });
    /// assert!(stored.is_success());
    /// ```
    #[inline]
    pub fn then<R, F>(self, f: F) -> R
    where
        R: Rail,
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(errors) => {
                trace_rail!(errors = errors.len(), "then short-circuited");
                R::from_failure(errors)
            },
        }
    }

    /// Replaces a failure with a new success built from `f`.
    ///
    /// A success is returned unchanged and `f` is not called.
    #[inline]
    pub fn then_on_fail_map<F>(self, f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        self.then_on_fail_map_with(|_| f())
    }

    /// Like [`TypedOutcome::then_on_fail_map`], but the recovery sees the errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::TypedOutcome;
    ///
    /// let port = TypedOutcome::<u16>::fail("PORT is not set")
    ///     .then_on_fail_map_with(|errors| {
    ///         assert_eq!(errors.len(), 1);
    ///         8080
    ///     });
    /// assert_eq!(port.into_value(), Some(8080));
    /// ```
    #[inline]
    pub fn then_on_fail_map_with<F>(self, f: F) -> Self
    where
        F: FnOnce(&Errors) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(errors) => {
                trace_rail!(errors = errors.len(), "then_on_fail_map running recovery");
                Self::Success(f(&errors))
            },
        }
    }

    /// Runs the recovery `f` on failure and returns its outcome verbatim.
    ///
    /// A success is returned unchanged and `f` is not called. To recover into
    /// an untyped [`Outcome`](crate::Outcome), use
    /// [`TypedOutcome::then_on_fail_into`].
    #[inline]
    pub fn then_on_fail<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.then_on_fail_with(|_| f())
    }

    /// Like [`TypedOutcome::then_on_fail`], but the recovery sees the errors.
    #[inline]
    pub fn then_on_fail_with<F>(self, f: F) -> Self
    where
        F: FnOnce(&Errors) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(errors) => {
                trace_rail!(errors = errors.len(), "then_on_fail running recovery");
                f(&errors)
            },
        }
    }

    /// Runs the recovery `f` on failure, where `f` yields a different outcome
    /// type such as an untyped [`Outcome`](crate::Outcome).
    ///
    /// A success is converted into `R` and `f` is not called. For `Outcome`
    /// this drops the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::{Outcome, TypedOutcome};
    ///
    /// let recovered: Outcome = TypedOutcome::<u32>::fail("stale").then_on_fail_into(Outcome::ok);
    /// assert!(recovered.is_success());
    ///
    /// let kept: Outcome = TypedOutcome::ok(3).then_on_fail_into(|| Outcome::fail("unused"));
    /// assert!(kept.is_success());
    /// ```
    #[inline]
    pub fn then_on_fail_into<R, F>(self, f: F) -> R
    where
        R: From<Self>,
        F: FnOnce() -> R,
    {
        self.then_on_fail_into_with(|_| f())
    }

    /// Like [`TypedOutcome::then_on_fail_into`], but the recovery sees the errors.
    #[inline]
    pub fn then_on_fail_into_with<R, F>(self, f: F) -> R
    where
        R: From<Self>,
        F: FnOnce(&Errors) -> R,
    {
        match self {
            Self::Success(value) => R::from(Self::Success(value)),
            Self::Failure(errors) => {
                trace_rail!(errors = errors.len(), "then_on_fail_into running recovery");
                f(&errors)
            },
        }
    }

    /// Converts into a std `Result`, so `?` can be used on the failure.
    #[inline]
    pub fn into_result(self) -> Result<T, Errors> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(errors),
        }
    }
}

impl<T> Rail for TypedOutcome<T> {
    #[inline]
    fn from_failure(errors: Errors) -> Self {
        Self::Failure(errors)
    }

    #[inline]
    fn failure(&self) -> Option<&Errors> {
        TypedOutcome::failure(self)
    }
}
