//! Free functions over arbitrary error chains.
//!
//! These work on any `dyn Error`, walking `source()` links until a
//! [`TracedError`] is found. A traced error that was boxed as a foreign error
//! is still recognized.
//!
//! # Examples
//!
//! ```
//! use error_trace::{as_traced, is, kind, trace, Code, TracedError};
//!
//! let err = trace(TracedError::new(Code::CONFLICT)).unwrap();
//! let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(err);
//!
//! assert!(is(Some(&*boxed)));
//! assert_eq!(kind(Some(&*boxed)), Code::CONFLICT);
//! assert_eq!(as_traced(Some(&*boxed)).map(|e| e.reason()), Some("conflict"));
//!
//! assert!(trace(None::<TracedError>).is_none());
//! assert_eq!(kind(None), Code::default());
//! ```

use crate::traits::IntoTrace;
use crate::types::{Chain, Code, Link, TracedError};
use core::error::Error;
use core::panic::Location;

/// Re-traces `err` at the caller's location.
///
/// - `None` or the zero-valued error yields `None`.
/// - A traced error gains a new outer layer attributed to the caller.
/// - Anything else becomes an `internal` error whose message is its `Display`.
#[track_caller]
#[inline]
pub fn trace<E: IntoTrace>(err: E) -> Option<TracedError> {
    err.into_trace_at(Location::caller())
}

/// Returns `true` when `err` or anything in its chain is a [`TracedError`].
pub fn is(err: Option<&(dyn Error + 'static)>) -> bool {
    as_traced(err).is_some()
}

/// Finds the first [`TracedError`] in the chain of `err`.
pub fn as_traced<'a>(err: Option<&'a (dyn Error + 'static)>) -> Option<&'a TracedError> {
    Chain::new(err.map_or(Link::End, Link::of)).find_map(Link::as_traced)
}

/// Code of the first [`TracedError`] in the chain, or the empty code.
pub fn kind(err: Option<&(dyn Error + 'static)>) -> Code {
    as_traced(err).map(|traced| traced.code().clone()).unwrap_or_default()
}
