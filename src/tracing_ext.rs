//! Tracing integration.
//!
//! Attaches the name of a `tracing` span to the errors of a failure, under the
//! metadata key [`SPAN_KEY`]. Successes pass through untouched. Annotating a
//! failure builds a new error sequence, so the result no longer shares its
//! allocation with the input.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! simple-result = { version = "0.3", features = ["tracing"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use simple_result::tracing_ext::{OutcomeSpanExt, SPAN_KEY};
//! use simple_result::Outcome;
//!
//! let span = tracing::info_span!("load_config");
//! let failed = Outcome::fail("missing file").with_span(&span);
//!
//! assert!(failed.errors()[0].metadata_value(SPAN_KEY).is_some());
//! ```

use tracing::Span;

use crate::traits::ErrorDetails;
use crate::types::{Error, Errors, Outcome, TypedOutcome};

/// Metadata key holding the span name.
pub const SPAN_KEY: &str = "span";

/// Adds span information to the errors of a failed outcome.
pub trait OutcomeSpanExt: Sized {
    /// Annotates a failure with the current span.
    fn with_current_span(self) -> Self {
        self.with_span(&Span::current())
    }

    /// Annotates a failure with `span`.
    fn with_span(self, span: &Span) -> Self;
}

impl OutcomeSpanExt for Outcome {
    fn with_span(self, span: &Span) -> Self {
        match self {
            Self::Success => Self::Success,
            Self::Failure(errors) => Self::Failure(annotate(&errors, span)),
        }
    }
}

impl<T> OutcomeSpanExt for TypedOutcome<T> {
    fn with_span(self, span: &Span) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(errors) => Self::Failure(annotate(&errors, span)),
        }
    }
}

/// Builds an [`Error`] from `details`, tagged with the current span.
///
/// # Examples
///
/// ```
/// use simple_result::tracing_ext::{instrument_error, SPAN_KEY};
/// use simple_result::Error;
///
/// let err = instrument_error(&Error::new("boom"));
/// assert_eq!(err.message(), "boom");
/// assert!(err.metadata_value(SPAN_KEY).is_some());
/// ```
pub fn instrument_error<D>(details: &D) -> Error
where
    D: ErrorDetails + ?Sized,
{
    Error::from_details(details).with_metadata(SPAN_KEY, span_name(&Span::current()))
}

fn annotate(errors: &Errors, span: &Span) -> Errors {
    let name = span_name(span);
    errors.map_each(|error| error.clone().with_metadata(SPAN_KEY, name))
}

/// Disabled spans have no metadata and report as `unknown`.
fn span_name(span: &Span) -> &'static str {
    span.metadata().map(|m| m.name()).unwrap_or("unknown")
}
