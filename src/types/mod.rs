//! Error types and utilities.
//!
//! This module holds the value types of the crate: the [`Code`] classification,
//! the captured [`CallSite`], the [`TracedError`] builder with its cause chain,
//! and the trace renderer.
//!
//! # Examples
//!
//! ```
//! use error_trace::{trace, Code, TracedError};
//!
//! let err = TracedError::new(Code::UNAUTHORIZED)
//!     .with_message("session expired")
//!     .with_detail("session", "s-19");
//!
//! let err = trace(err).unwrap();
//! println!("{err}");
//! // [unauthorized] session expired
//! //     src/main.rs:3
//! //     src/main.rs:7
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod call_site;
pub mod code;
#[cfg(feature = "serde")]
pub mod envelope;
pub mod trace_formatter;
pub mod traced_error;

pub use call_site::CallSite;
pub use code::Code;
#[cfg(feature = "serde")]
pub use envelope::Envelope;
pub use trace_formatter::{TraceFormatBuilder, TraceFormatConfig, Tracer};
pub use traced_error::{Cause, Chain, Link, TracedError};

/// SmallVec-backed collection used for per-message location lists.
///
/// Uses inline storage for up to 2 elements, which covers the common case of
/// an error raised in one place and re-traced in another.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Result alias that fails with a [`TracedError`].
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type TracedResult<T> = Result<T, TracedError>;
