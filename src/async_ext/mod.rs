//! Async extensions for traced errors.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! error-trace = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use error_trace::async_ext::FutureTraceExt;
//!
//! async fn fetch_user(id: u64) -> Result<User, TracedError> {
//!     fetch_from_db(id)
//!         .or_code(Code::TEMPORARY)
//!         .with_detail("user_id", id.to_string())
//!         .await
//! }
//! ```

mod future_ext;
pub(crate) mod trace_future;

#[cfg(feature = "async-tokio")]
mod tokio_ext;

pub use future_ext::FutureTraceExt;
pub use trace_future::TraceFuture;

#[cfg(feature = "async-tokio")]
pub use tokio_ext::{timeout_traced, TIMEOUT_DETAIL};
