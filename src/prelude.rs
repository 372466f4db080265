//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use error_trace::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`traced!`], [`interpolate!`], [`callsite!`]
//! - **Functions**: [`trace`], [`is`], [`as_traced`], [`kind`]
//! - **Types**: [`TracedError`], [`Code`], [`CallSite`], [`TracedResult`]
//! - **Traits**: [`ResultExt`], plus `FutureTraceExt` with the `async` feature
//!
//! # Examples
//!
//! ```
//! use error_trace::prelude::*;
//!
//! fn load_config(path: &str) -> TracedResult<String> {
//!     std::fs::read_to_string(path).or_code(Code::NOT_FOUND)
//! }
//!
//! let err = load_config("/definitely/missing.toml").unwrap_err();
//! assert_eq!(err.code(), &Code::NOT_FOUND);
//! assert_eq!(err.reason(), "not-found");
//! ```

// Macros
pub use crate::{callsite, interpolate, traced};

// Functions
pub use crate::inspect::{as_traced, is, kind, trace};

// Core types
pub use crate::types::{CallSite, Code, TracedError, TracedResult};

// Traits
pub use crate::traits::ResultExt;

#[cfg(feature = "async")]
pub use crate::async_ext::FutureTraceExt;
