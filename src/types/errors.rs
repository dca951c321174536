//! The non-empty, shared error sequence carried by every failure.

use core::fmt::{self, Display};
use core::ops::Deref;

use crate::traits::IntoError;
use crate::types::alloc_type::Arc;
use crate::types::{Error, ErrorVec};

/// Misuse of the outcome factories.
///
/// These are programmer errors, not domain failures: a failed outcome must
/// carry at least one [`Error`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A failure was requested with an empty error sequence.
    EmptyErrors,
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyErrors => f.write_str("a failed outcome requires at least one error"),
        }
    }
}

impl core::error::Error for InvalidArgument {}

/// Ordered, non-empty, immutable sequence of [`Error`]s.
///
/// Cloning is cheap and shares the underlying allocation, which is what lets a
/// failure travel through a chain without being copied. Use [`Errors::ptr_eq`]
/// to check that two failures carry the very same sequence.
///
/// # Examples
///
/// ```
/// use simple_result::{Error, Errors, InvalidArgument};
///
/// let errors = Errors::try_from_iter([Error::new("a"), Error::new("b")]).unwrap();
/// assert_eq!(errors.len(), 2);
///
/// let shared = errors.clone();
/// assert!(Errors::ptr_eq(&errors, &shared));
///
/// let empty = Errors::try_from_iter(Vec::<Error>::new());
/// assert_eq!(empty.unwrap_err(), InvalidArgument::EmptyErrors);
/// ```
#[derive(Debug, Clone)]
pub struct Errors {
    inner: Arc<ErrorVec<Error>>,
}

impl Errors {
    /// Builds a sequence holding exactly one error.
    #[inline]
    pub fn one<E: IntoError>(error: E) -> Self {
        let mut items = ErrorVec::new();
        items.push(error.into_error());
        Self { inner: Arc::new(items) }
    }

    /// Builds a sequence from an iterator, rejecting an empty one.
    pub fn try_from_iter<I, E>(errors: I) -> Result<Self, InvalidArgument>
    where
        I: IntoIterator<Item = E>,
        E: IntoError,
    {
        let items: ErrorVec<Error> = errors.into_iter().map(IntoError::into_error).collect();
        Self::try_from_vec(items)
    }

    pub(crate) fn try_from_vec(items: ErrorVec<Error>) -> Result<Self, InvalidArgument> {
        if items.is_empty() {
            return Err(InvalidArgument::EmptyErrors);
        }
        Ok(Self { inner: Arc::new(items) })
    }

    /// Returns `true` when both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }

    /// Returns the errors as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Error] {
        &self.inner
    }

    /// The first error of the sequence. Always present.
    #[inline]
    pub fn first(&self) -> &Error {
        &self.inner[0]
    }

    /// Builds a new sequence of the same length by applying `f` to each error.
    #[cfg(feature = "tracing")]
    pub(crate) fn map_each<F>(&self, f: F) -> Self
    where
        F: FnMut(&Error) -> Error,
    {
        Self { inner: Arc::new(self.iter().map(f).collect()) }
    }

    /// Consumes the handle, returning an owned copy of the errors.
    ///
    /// Clones only if the allocation is still shared.
    pub fn into_vec(self) -> ErrorVec<Error> {
        Arc::try_unwrap(self.inner).unwrap_or_else(|shared| (*shared).clone())
    }
}

impl Deref for Errors {
    type Target = [Error];

    #[inline]
    fn deref(&self) -> &[Error] {
        self.as_slice()
    }
}

impl AsRef<[Error]> for Errors {
    #[inline]
    fn as_ref(&self) -> &[Error] {
        self.as_slice()
    }
}

impl PartialEq for Errors {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other) || self.as_slice() == other.as_slice()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = core::slice::Iter<'a, Error>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl From<Error> for Errors {
    #[inline]
    fn from(error: Error) -> Self {
        Self::one(error)
    }
}

impl TryFrom<ErrorVec<Error>> for Errors {
    type Error = InvalidArgument;

    #[inline]
    fn try_from(items: ErrorVec<Error>) -> Result<Self, Self::Error> {
        Self::try_from_vec(items)
    }
}

/// Messages joined with `"; "`.
impl Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            Display::fmt(error, f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Errors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Errors {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = ErrorVec::<Error>::deserialize(deserializer)?;
        Self::try_from_vec(items).map_err(serde::de::Error::custom)
    }
}
