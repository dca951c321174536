//! Structured error payload carried by failed outcomes.
//!
//! An [`Error`] is a message plus a metadata map. It is immutable once built:
//! the builder methods consume the error and hand back a new one.
//!
//! # Examples
//!
//! ```
//! use simple_result::{Error, MetadataValue};
//!
//! let err = Error::new("connection refused")
//!     .with_metadata("host", "db-primary")
//!     .with_metadata("attempt", 3);
//!
//! assert_eq!(err.message(), "connection refused");
//! assert_eq!(err.metadata_value("attempt"), Some(&MetadataValue::Int(3)));
//! assert_eq!(err.to_string(), "connection refused");
//! ```

use core::fmt::{self, Display};

use crate::traits::ErrorDetails;
use crate::types::alloc_type::{BTreeMap, Cow, String};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Metadata attached to an [`Error`]. Keys are unique and ordering is irrelevant.
pub type Metadata = BTreeMap<String, MetadataValue>;

/// A single metadata value.
///
/// `Int` and `UInt` holding the same number compare equal. Deserialized
/// integers come back as `Int` whenever they fit in an `i64`.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone)]
pub enum MetadataValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl PartialEq for MetadataValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            (Self::Int(a), Self::UInt(b)) | (Self::UInt(b), Self::Int(a)) => {
                u64::try_from(*a).is_ok_and(|a| a == *b)
            },
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for MetadataValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValueVisitor;

        impl serde::de::Visitor<'_> for ValueVisitor {
            type Value = MetadataValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a bool, number or string")
            }

            fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(MetadataValue::Bool(v))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(MetadataValue::Int(v))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(i64::try_from(v).map_or(MetadataValue::UInt(v), MetadataValue::Int))
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(MetadataValue::Float(v))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(MetadataValue::Text(v.into()))
            }

            fn visit_string<E: serde::de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(MetadataValue::Text(v))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::UInt(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<bool> for MetadataValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for MetadataValue {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for MetadataValue {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for MetadataValue {
    #[inline]
    fn from(value: u32) -> Self {
        Self::UInt(u64::from(value))
    }
}

impl From<u64> for MetadataValue {
    #[inline]
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for MetadataValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for MetadataValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for MetadataValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Failure payload: a human readable message and arbitrary metadata.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    message: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "BTreeMap::is_empty"))]
    metadata: Metadata,
}

impl Error {
    /// Creates an error with the given message and no metadata.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into(), metadata: Metadata::new() }
    }

    /// Creates an error from any type exposing [`ErrorDetails`].
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::{Error, traits::ErrorDetails};
    ///
    /// struct Timeout { after_ms: u64 }
    ///
    /// impl ErrorDetails for Timeout {
    ///     fn message(&self) -> std::borrow::Cow<'_, str> {
    ///         format!("timed out after {}ms", self.after_ms).into()
    ///     }
    /// }
    ///
    /// let err = Error::from_details(&Timeout { after_ms: 250 });
    /// assert_eq!(err.message(), "timed out after 250ms");
    /// assert!(err.metadata().is_empty());
    /// ```
    pub fn from_details<D>(details: &D) -> Self
    where
        D: ErrorDetails + ?Sized,
    {
        Self {
            message: details.message().into_owned(),
            metadata: details.metadata().into_owned(),
        }
    }

    /// Returns a copy of this error with `key` set to `value`.
    ///
    /// An existing entry under the same key is replaced.
    #[inline]
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Returns a copy of this error extended with every entry of `entries`.
    #[inline]
    pub fn with_metadata_entries<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.metadata
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the full metadata map.
    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Looks up a single metadata entry.
    #[inline]
    pub fn metadata_value(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata.get(key)
    }
}

impl ErrorDetails for Error {
    #[inline]
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.message)
    }

    #[inline]
    fn metadata(&self) -> Cow<'_, Metadata> {
        Cow::Borrowed(&self.metadata)
    }
}

/// `{}` prints the message; `{:#}` appends the metadata as `{key=value, ...}`.
impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if !f.alternate() || self.metadata.is_empty() {
            return Ok(());
        }

        f.write_str(" {")?;
        for (i, (key, value)) in self.metadata.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        f.write_str("}")
    }
}

impl core::error::Error for Error {}

impl From<&str> for Error {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
