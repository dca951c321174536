//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus
//! [`ChainFuture`](crate::async_ext::ChainFuture), the future returned by
//! `then_async` and `then_on_fail_async`.

pub use crate::prelude::*;

pub use crate::async_ext::ChainFuture;
