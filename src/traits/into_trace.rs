//! Conversion of error-shaped values into traced errors.
//!
//! [`IntoTrace`] is what [`trace`](crate::trace) accepts. It is implemented for
//! the error shapes that show up at propagation boundaries; anything else that
//! implements `core::error::Error` goes through [`Cause::from`] first.

use crate::types::alloc_type::{Arc, BoxError, String};
use crate::types::{Cause, TracedError};
use core::error::Error;
use core::panic::Location;

/// Values that can be re-traced at a call site.
///
/// Returning `None` means there is nothing to propagate: an absent error, or
/// the zero-valued [`TracedError`].
pub trait IntoTrace {
    /// Re-traces `self` as if [`trace`](crate::trace) was called at `location`.
    fn into_trace_at(self, location: &'static Location<'static>) -> Option<TracedError>;
}

impl IntoTrace for TracedError {
    fn into_trace_at(self, location: &'static Location<'static>) -> Option<TracedError> {
        self.site.is_some().then(|| self.retrace_at(location))
    }
}

impl IntoTrace for &TracedError {
    #[inline]
    fn into_trace_at(self, location: &'static Location<'static>) -> Option<TracedError> {
        self.clone().into_trace_at(location)
    }
}

impl IntoTrace for Cause {
    fn into_trace_at(self, location: &'static Location<'static>) -> Option<TracedError> {
        match self {
            Cause::Traced(traced) => (*traced).into_trace_at(location),
            foreign @ Cause::Foreign(_) => Some(foreign.trace_at(location)),
        }
    }
}

impl IntoTrace for BoxError {
    #[inline]
    fn into_trace_at(self, location: &'static Location<'static>) -> Option<TracedError> {
        Cause::from_boxed(self).into_trace_at(location)
    }
}

impl IntoTrace for Arc<dyn Error + Send + Sync + 'static> {
    #[inline]
    fn into_trace_at(self, location: &'static Location<'static>) -> Option<TracedError> {
        Cause::Foreign(self).into_trace_at(location)
    }
}

impl IntoTrace for String {
    #[inline]
    fn into_trace_at(self, location: &'static Location<'static>) -> Option<TracedError> {
        BoxError::from(self).into_trace_at(location)
    }
}

impl IntoTrace for &'static str {
    #[inline]
    fn into_trace_at(self, location: &'static Location<'static>) -> Option<TracedError> {
        BoxError::from(self).into_trace_at(location)
    }
}

impl<T: IntoTrace> IntoTrace for Option<T> {
    #[inline]
    fn into_trace_at(self, location: &'static Location<'static>) -> Option<TracedError> {
        self.and_then(|inner| inner.into_trace_at(location))
    }
}
