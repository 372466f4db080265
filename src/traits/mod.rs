//! Core traits for capturing and propagating traced errors.
//!
//! - [`Introspect`]: resolves the module and function of a call site
//! - [`IntoTrace`]: error shapes accepted by [`trace`](crate::trace)
//! - [`ResultExt`]: re-tracing and re-classifying `Result` errors
//!
//! # Examples
//!
//! ```
//! use error_trace::traits::ResultExt;
//! use error_trace::Code;
//!
//! let result: Result<(), std::fmt::Error> = Err(std::fmt::Error);
//! let err = result.or_code(Code::TEMPORARY).unwrap_err();
//! assert_eq!(err.reason(), "temporary");
//! ```

pub mod into_trace;
pub mod introspect;
pub mod result_ext;

pub use into_trace::IntoTrace;
pub use introspect::{HostIntrospect, Introspect, Unresolved, HOST};
pub use result_ext::ResultExt;
