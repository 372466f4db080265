//! Classified errors with call-site tracking and deduplicated traces.
//!
//! Every error carries a classification [`Code`], a message, a machine-readable
//! reason, string details and the [`CallSite`] where it was last created or
//! touched. Errors are re-traced as they travel up the stack; each layer keeps
//! the previous one as its cause, and details, reasons and default messages
//! bubble up from causes without overwriting what outer layers set.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_trace::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Raising and propagating
//!
//! ```
//! use error_trace::{trace, Code, TracedError};
//!
//! fn find_invoice(id: &str) -> Result<(), TracedError> {
//!     Err(TracedError::new(Code::NOT_FOUND)
//!         .with_message_args("invoice %s missing", &[&id])
//!         .with_detail("invoice", id))
//! }
//!
//! fn charge(id: &str) -> Result<(), TracedError> {
//!     find_invoice(id).map_err(|err| trace(err).unwrap_or_default())
//! }
//!
//! let err = charge("inv-7").unwrap_err();
//! assert_eq!(err.code(), &Code::NOT_FOUND);
//! assert_eq!(err.detail("invoice"), Some("inv-7"));
//! assert!(err.to_string().starts_with("[not-found] invoice inv-7 missing"));
//! ```
//!
//! ## Wrapping foreign errors
//!
//! ```
//! use error_trace::{Code, ResultExt};
//!
//! let err = "x1".parse::<u32>().or_code(Code::INVALID).unwrap_err();
//! assert_eq!(err.code(), &Code::INVALID);
//! assert_eq!(err.reason(), "invalid");
//! assert_eq!(err.message(), "invalid digit found in string");
//! ```
//!
//! ## Inspecting arbitrary chains
//!
//! ```
//! use error_trace::{is, kind, Code, TracedError};
//!
//! let err = TracedError::new(Code::new("quota"));
//! assert!(is(Some(&err)));
//! assert_eq!(kind(Some(&err)).as_str(), "quota");
//! assert!(!is(Some(&std::fmt::Error)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Tolerant `%`-style message interpolation
pub mod format;
/// Chain inspection helpers: `trace`, `is`, `as_traced`, `kind`
pub mod inspect;
/// Error construction macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Classification to HTTP status mapping
pub mod status;
/// Core traits for capture and propagation
pub mod traits;
/// TracedError, codes, call sites and the trace renderer
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod telemetry;

/// Async extensions for error handling (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

pub use inspect::{as_traced, is, kind, trace};
pub use traits::{HostIntrospect, IntoTrace, Introspect, ResultExt, Unresolved};
#[cfg(feature = "serde")]
pub use types::Envelope;
pub use types::{
    CallSite, Cause, Chain, Code, ErrorVec, Link, TraceFormatBuilder, TraceFormatConfig,
    TracedError, TracedResult, Tracer,
};
