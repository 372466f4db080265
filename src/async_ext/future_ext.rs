//! Extension trait for `Future<Output = Result<T, E>>`.
//!
//! Provides `.traced()` and `.or_code()` for futures, mirroring the sync
//! [`ResultExt`](crate::ResultExt) trait.

use core::future::Future;
use core::panic::Location;

use crate::types::{Cause, Code};

use super::trace_future::{TraceFuture, TracePlan};

/// Extension methods for futures resolving to `Result`.
///
/// # Examples
///
/// ```
/// use error_trace::async_ext::FutureTraceExt;
/// use error_trace::Code;
///
/// async fn fetch() -> Result<u32, std::fmt::Error> {
///     Err(std::fmt::Error)
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let err = fetch().or_code(Code::TEMPORARY).with_detail("attempt", "1").await.unwrap_err();
/// assert_eq!(err.code(), &Code::TEMPORARY);
/// assert_eq!(err.detail("attempt"), Some("1"));
/// # }
/// ```
pub trait FutureTraceExt<T, E>: Future<Output = Result<T, E>> + Sized
where
    E: Into<Cause>,
{
    /// Re-traces the error at the line this is called on.
    #[track_caller]
    fn traced(self) -> TraceFuture<Self> {
        TraceFuture::new(self, TracePlan::new(Location::caller(), None))
    }

    /// Wraps the error under a new error of `code`.
    #[track_caller]
    fn or_code(self, code: impl Into<Code>) -> TraceFuture<Self> {
        TraceFuture::new(self, TracePlan::new(Location::caller(), Some(code.into())))
    }
}

impl<Fut, T, E> FutureTraceExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<Cause>,
{
}
