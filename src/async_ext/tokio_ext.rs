//! Tokio-specific async extensions.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! error-trace = { version = "0.3", features = ["async-tokio"] }
//! ```

use core::future::Future;
use core::panic::Location;
use core::time::Duration;

use crate::types::{Cause, Code, TracedError};

/// Detail key holding the elapsed deadline of a timed-out operation.
pub const TIMEOUT_DETAIL: &str = "timeout";

/// Runs `future` with a deadline, tracing its error or the timeout.
///
/// A timeout becomes a `timeout` error whose cause is tokio's `Elapsed` and
/// whose `timeout` detail is the deadline. Both outcomes are attributed to the
/// caller of this function.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use error_trace::async_ext::timeout_traced;
/// use error_trace::Code;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let slow = async {
///     tokio::time::sleep(Duration::from_secs(5)).await;
///     Ok::<_, std::fmt::Error>(())
/// };
///
/// let err = timeout_traced(Duration::from_millis(10), slow).await.unwrap_err();
/// assert_eq!(err.code(), &Code::TIMEOUT);
/// assert_eq!(err.detail("timeout"), Some("10ms"));
/// # }
/// ```
#[track_caller]
pub fn timeout_traced<Fut, T, E>(
    duration: Duration,
    future: Fut,
) -> impl Future<Output = Result<T, TracedError>>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<Cause>,
{
    let location = Location::caller();

    async move {
        match tokio::time::timeout(duration, future).await {
            Ok(result) => result.map_err(|err| err.into().trace_at(location)),
            Err(elapsed) => {
                let mut err = TracedError::wrap_at(Code::TIMEOUT, Cause::foreign(elapsed), location);
                err.apply_details([(TIMEOUT_DETAIL, alloc::format!("{duration:?}"))], location);
                Err(err)
            }
        }
    }
}
