//! Extension trait for propagating `Result` errors as traced errors.
//!
//! This module provides [`ResultExt`], which re-traces or re-classifies the
//! error side of a `Result` without a manual `.map_err()`.
//!
//! # Examples
//!
//! ```
//! use error_trace::{Code, ResultExt, TracedError};
//!
//! fn parse_port(raw: &str) -> Result<u16, TracedError> {
//!     raw.parse::<u16>().or_code(Code::INVALID)
//! }
//!
//! let err = parse_port("http").unwrap_err();
//! assert_eq!(err.code(), &Code::INVALID);
//! assert_eq!(err.message(), "invalid digit found in string");
//! ```

use crate::types::{Cause, Code, TracedError};
use core::panic::Location;

/// Extension methods for `Result` types whose error converts into a [`Cause`].
///
/// Both methods attribute the new layer to their caller; the closure-free
/// signatures keep `#[track_caller]` intact.
pub trait ResultExt<T> {
    /// Re-traces the error at this call site.
    ///
    /// A traced error gains one more layer; any other error is wrapped as
    /// `internal` with its `Display` as message.
    ///
    /// ```
    /// use error_trace::{Code, ResultExt, TracedError};
    ///
    /// fn lookup() -> Result<(), TracedError> {
    ///     Err(TracedError::new(Code::NOT_FOUND))
    /// }
    ///
    /// let err = lookup().trace_err().unwrap_err();
    /// assert_eq!(err.code(), &Code::NOT_FOUND);
    /// assert_eq!(err.chain().count(), 2);
    /// ```
    #[track_caller]
    fn trace_err(self) -> Result<T, TracedError>;

    /// Wraps the error under a new error of `code`.
    ///
    /// The original error is kept as the cause; its details and message
    /// propagate through the usual merge rules.
    #[track_caller]
    fn or_code(self, code: impl Into<Code>) -> Result<T, TracedError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Cause>,
{
    #[inline]
    #[track_caller]
    fn trace_err(self) -> Result<T, TracedError> {
        let location = Location::caller();
        self.map_err(|err| err.into().trace_at(location))
    }

    #[inline]
    #[track_caller]
    fn or_code(self, code: impl Into<Code>) -> Result<T, TracedError> {
        let location = Location::caller();
        self.map_err(|err| TracedError::wrap_at(code.into(), err.into(), location))
    }
}
