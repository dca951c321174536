//! Capability traits for error payloads.
//!
//! [`ErrorDetails`] describes anything that carries a message and, optionally,
//! metadata. [`IntoError`] is the conversion accepted by every factory that
//! takes an error, mirroring how `From` is used but without blanket impls.
//!
//! # Examples
//!
//! ```
//! use simple_result::{Error, Outcome, traits::{ErrorDetails, IntoError}};
//! use std::borrow::Cow;
//!
//! enum StoreError {
//!     NotFound { key: String },
//! }
//!
//! impl ErrorDetails for StoreError {
//!     fn message(&self) -> Cow<'_, str> {
//!         match self {
//!             Self::NotFound { .. } => Cow::Borrowed("key not found"),
//!         }
//!     }
//!
//!     fn metadata(&self) -> Cow<'_, simple_result::Metadata> {
//!         let mut metadata = simple_result::Metadata::new();
//!         match self {
//!             Self::NotFound { key } => {
//!                 metadata.insert("key".into(), key.as_str().into());
//!             }
//!         }
//!         Cow::Owned(metadata)
//!     }
//! }
//!
//! impl IntoError for StoreError {
//!     fn into_error(self) -> Error {
//!         Error::from_details(&self)
//!     }
//! }
//!
//! let outcome = Outcome::fail(StoreError::NotFound { key: "user:7".into() });
//! assert_eq!(outcome.errors()[0].message(), "key not found");
//! ```

use crate::types::alloc_type::{Cow, String};
use crate::types::{Error, Metadata};

/// Read-only view of an error payload.
pub trait ErrorDetails {
    /// Human readable description of the failure.
    fn message(&self) -> Cow<'_, str>;

    /// Contextual metadata. Empty unless overridden.
    fn metadata(&self) -> Cow<'_, Metadata> {
        Cow::Owned(Metadata::new())
    }
}

/// Converts a value into an [`Error`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an outcome error",
    label = "this type does not implement `IntoError`",
    note = "implement `IntoError` manually, usually via `Error::from_details`"
)]
pub trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for &str {
    #[inline]
    fn into_error(self) -> Error {
        Error::new(self)
    }
}

impl IntoError for String {
    #[inline]
    fn into_error(self) -> Error {
        Error::new(self)
    }
}

impl IntoError for Cow<'_, str> {
    #[inline]
    fn into_error(self) -> Error {
        Error::new(self.into_owned())
    }
}
