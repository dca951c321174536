//! Core traits shared by the outcome types.
//!
//! - [`Rail`]: the success/failure discriminant and the carried errors
//! - [`ErrorDetails`]: the message/metadata capabilities of an error payload
//! - [`IntoError`]: conversion accepted by every factory taking an error
//!
//! # Examples
//!
//! ```
//! use simple_result::traits::{IntoError, Rail};
//! use simple_result::Outcome;
//!
//! let err = "disk full".into_error();
//! assert_eq!(err.message(), "disk full");
//!
//! let failed = Outcome::fail(err);
//! assert!(Rail::is_failed(&failed));
//! ```

pub mod error_details;
pub mod rail;

pub use error_details::{ErrorDetails, IntoError};
pub use rail::Rail;
