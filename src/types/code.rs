//! Open classification tags for traced errors.
//!
//! A [`Code`] is a string newtype rather than an enum: the crate ships a fixed
//! vocabulary of common failure shapes, and callers are free to mint their own.
//!
//! # Examples
//!
//! ```
//! use error_trace::Code;
//!
//! let custom = Code::new("quota");
//! assert_eq!(custom.as_str(), "quota");
//! assert!(!custom.is_builtin());
//! assert!(Code::NOT_FOUND.is_builtin());
//! assert_eq!(Code::TIMEOUT, "timeout");
//! ```

use crate::types::alloc_type::{Cow, String};
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of a failure.
///
/// Equality is exact string equality, so `Code::new("internal") == Code::INTERNAL`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Code(Cow<'static, str>);

impl Code {
    /// Failure caused by an internal fault.
    pub const INTERNAL: Code = Code::from_static("internal");
    /// Failure caused by a conflict, such as a concurrent update.
    pub const CONFLICT: Code = Code::from_static("conflict");
    /// Failure caused by an expired resource.
    pub const EXPIRED: Code = Code::from_static("expired");
    /// Failure caused by a forbidden action.
    pub const FORBIDDEN: Code = Code::from_static("forbidden");
    /// Failure caused by an invalid action.
    pub const INVALID: Code = Code::from_static("invalid");
    /// Failure caused by a missing resource.
    pub const NOT_FOUND: Code = Code::from_static("not-found");
    /// Failure caused by functionality that does not exist yet.
    pub const NOT_IMPLEMENTED: Code = Code::from_static("not-implemented");
    /// Failure caused by a temporary condition.
    pub const TEMPORARY: Code = Code::from_static("temporary");
    /// Failure caused by something timing out.
    pub const TIMEOUT: Code = Code::from_static("timeout");
    /// Failure caused by an unauthorized actor.
    pub const UNAUTHORIZED: Code = Code::from_static("unauthorized");
    /// Failure caused by input that cannot be processed.
    pub const UNPROCESSABLE: Code = Code::from_static("unprocessable");

    /// Every built-in code.
    pub const ALL: [Code; 11] = [
        Self::INTERNAL,
        Self::CONFLICT,
        Self::EXPIRED,
        Self::FORBIDDEN,
        Self::INVALID,
        Self::NOT_FOUND,
        Self::NOT_IMPLEMENTED,
        Self::TEMPORARY,
        Self::TIMEOUT,
        Self::UNAUTHORIZED,
        Self::UNPROCESSABLE,
    ];

    /// Creates a code from any string.
    #[inline]
    pub fn new(code: impl Into<Cow<'static, str>>) -> Self {
        Self(code.into())
    }

    /// Creates a code from a static string in const context.
    #[inline]
    pub const fn from_static(code: &'static str) -> Self {
        Self(Cow::Borrowed(code))
    }

    /// Returns the string form of the code.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the empty code reported by [`kind`](crate::kind) on untraced input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the code belongs to the built-in vocabulary.
    pub fn is_builtin(&self) -> bool {
        Self::ALL.iter().any(|code| code == self)
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Code {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Code {
    #[inline]
    fn from(code: &'static str) -> Self {
        Self::from_static(code)
    }
}

impl From<String> for Code {
    #[inline]
    fn from(code: String) -> Self {
        Self(Cow::Owned(code))
    }
}

impl PartialEq<str> for Code {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Code {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
