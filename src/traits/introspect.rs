//! Host call-stack introspection behind a narrow capability.
//!
//! Builder entry points are `#[track_caller]`, so the file and line of a call are
//! always known. Resolving the enclosing module and function needs the host's
//! symbol tables; that part sits behind [`Introspect`] so it can be swapped out,
//! for example with a fixed answer in tests.
//!
//! # Examples
//!
//! ```
//! use core::panic::Location;
//! use error_trace::{CallSite, Code, Introspect, TracedError};
//!
//! struct Fixed;
//!
//! impl Introspect for Fixed {
//!     fn capture(&self, location: &'static Location<'static>, _skip: usize) -> CallSite {
//!         CallSite::new("billing", "charge", location.file(), location.line().into())
//!     }
//! }
//!
//! static FIXED: Fixed = Fixed;
//!
//! let err = TracedError::new(Code::INTERNAL).with_introspect(&FIXED);
//! assert_eq!(err.call_site().map(|site| site.module()), Some("billing"));
//! ```

use crate::types::CallSite;
use core::panic::Location;

/// Frames skipped before the host introspector starts matching.
pub(crate) const CAPTURE_SKIP: usize = 0;

/// Resolves the call site of a builder operation.
///
/// Implementations must be total: when nothing can be resolved they return
/// [`CallSite::unknown`] or a partially unknown site, never panic.
pub trait Introspect: Sync {
    /// Returns the call site for `location`, skipping `skip` innermost frames
    /// when walking the live stack.
    fn capture(&self, location: &'static Location<'static>, skip: usize) -> CallSite;
}

impl<F> Introspect for F
where
    F: Fn(&'static Location<'static>, usize) -> CallSite + Sync,
{
    #[inline]
    fn capture(&self, location: &'static Location<'static>, skip: usize) -> CallSite {
        self(location, skip)
    }
}

/// Default introspector.
///
/// Reports the tracked file and line. With the `symbolize` feature it also walks
/// the stack and reads the module and function of the frame executing that line;
/// otherwise, or when no frame matches, both are `"unknown"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostIntrospect;

/// Shared instance installed on every new error.
pub static HOST: HostIntrospect = HostIntrospect;

impl Introspect for HostIntrospect {
    fn capture(&self, location: &'static Location<'static>, skip: usize) -> CallSite {
        #[cfg(feature = "symbolize")]
        {
            if let Some(symbol) = symbolize::resolve(location, skip) {
                return CallSite::from_symbol(&symbol, location.file(), location.line());
            }

            #[cfg(feature = "tracing")]
            tracing::trace!(
                file = location.file(),
                line = location.line(),
                "no stack frame matched call site"
            );
        }

        #[cfg(not(feature = "symbolize"))]
        let _ = skip;

        CallSite::from_location(location)
    }
}

/// Introspector that never resolves anything and always yields the sentinel.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unresolved;

impl Introspect for Unresolved {
    #[inline]
    fn capture(&self, _location: &'static Location<'static>, _skip: usize) -> CallSite {
        CallSite::unknown()
    }
}

#[cfg(feature = "symbolize")]
mod symbolize {
    use core::panic::Location;
    use std::path::Path;
    use std::string::{String, ToString};

    /// Finds the symbol of the first frame executing `location`.
    pub(super) fn resolve(location: &Location<'_>, skip: usize) -> Option<String> {
        let wanted = Path::new(location.file());
        let mut remaining = skip;
        let mut found = None;

        backtrace::trace(|frame| {
            if remaining > 0 {
                remaining -= 1;
                return true;
            }

            backtrace::resolve_frame(frame, |symbol| {
                if found.is_some() {
                    return;
                }
                let (Some(file), Some(line)) = (symbol.filename(), symbol.lineno()) else {
                    return;
                };
                if line == location.line() && file.ends_with(wanted) {
                    found = symbol.name().map(|name| name.to_string());
                }
            });

            found.is_none()
        });

        found
    }
}
