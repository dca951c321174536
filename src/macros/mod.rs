//! Crate-internal diagnostics macros.
//!
//! [`trace_rail!`] emits a `tracing::trace!` event under the `simple_result`
//! target when the `tracing` feature is enabled and compiles to nothing
//! otherwise, so the combinators stay allocation free on the plain build.

#[cfg(feature = "tracing")]
macro_rules! trace_rail {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "simple_result", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_rail {
    ($($arg:tt)*) => {};
}

pub(crate) use trace_rail;
