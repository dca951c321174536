//! Async combinators.
//!
//! `then_async` and `then_on_fail_async` follow the exact propagation rules of
//! their sync counterparts; the only difference is that the continuation
//! returns a future, which is awaited before its outcome is handed back.
//! Nothing is spawned: the continuation runs when the returned
//! [`ChainFuture`] is polled.
//!
//! # Feature Flag
//!
//! Requires the `async` feature:
//!
//! ```toml
//! [dependencies]
//! simple-result = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use simple_result::{Outcome, TypedOutcome};
//!
//! async fn load(id: u32) -> TypedOutcome<String> {
//!     TypedOutcome::ok(format!("user-{id}"))
//! }
//!
//! async fn example() {
//!     let name = TypedOutcome::ok(7)
//!         .then_async(load)
//!         .await;
//!     assert_eq!(name.value().map(String::as_str), Some("user-7"));
//!
//!     let recovered = Outcome::fail("offline")
//!         .then_on_fail_async(|_errors| async { Outcome::ok() })
//!         .await;
//!     assert!(recovered.is_success());
//! }
//! ```

mod chain_future;

pub use chain_future::ChainFuture;

use core::future::Future;

use crate::macros::trace_rail;
use crate::traits::Rail;
use crate::types::{Errors, Outcome, TypedOutcome};

impl Outcome {
    /// Async form of [`Outcome::then`].
    ///
    /// On failure `f` is not called and the returned future resolves to a
    /// failure of type `R` carrying the same [`Errors`].
    #[inline]
    pub fn then_async<R, F, Fut>(self, f: F) -> ChainFuture<Fut, R>
    where
        R: Rail,
        F: FnOnce() -> Fut,
        Fut: Future<Output = R>,
    {
        match self {
            Self::Success => ChainFuture::pending(f()),
            Self::Failure(errors) => {
                trace_rail!(errors = errors.len(), "then_async short-circuited");
                ChainFuture::ready(R::from_failure(errors))
            },
        }
    }

    /// Async form of [`Outcome::then_on_fail_with`].
    ///
    /// The recovery receives its own handle to the errors, which shares the
    /// failure's allocation.
    #[inline]
    pub fn then_on_fail_async<F, Fut>(self, f: F) -> ChainFuture<Fut, Outcome>
    where
        F: FnOnce(Errors) -> Fut,
        Fut: Future<Output = Outcome>,
    {
        match self {
            Self::Success => ChainFuture::ready(Self::Success),
            Self::Failure(errors) => {
                trace_rail!(errors = errors.len(), "then_on_fail_async running recovery");
                ChainFuture::pending(f(errors))
            },
        }
    }
}

impl<T> TypedOutcome<T> {
    /// Async form of [`TypedOutcome::then`].
    #[inline]
    pub fn then_async<R, F, Fut>(self, f: F) -> ChainFuture<Fut, R>
    where
        R: Rail,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
    {
        match self {
            Self::Success(value) => ChainFuture::pending(f(value)),
            Self::Failure(errors) => {
                trace_rail!(errors = errors.len(), "then_async short-circuited");
                ChainFuture::ready(R::from_failure(errors))
            },
        }
    }

    /// Async form of [`TypedOutcome::then_on_fail_with`].
    #[inline]
    pub fn then_on_fail_async<F, Fut>(self, f: F) -> ChainFuture<Fut, TypedOutcome<T>>
    where
        F: FnOnce(Errors) -> Fut,
        Fut: Future<Output = TypedOutcome<T>>,
    {
        match self {
            Self::Success(value) => ChainFuture::ready(Self::Success(value)),
            Self::Failure(errors) => {
                trace_rail!(errors = errors.len(), "then_on_fail_async running recovery");
                ChainFuture::pending(f(errors))
            },
        }
    }
}
