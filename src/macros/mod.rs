//! Macros for building traced errors at the invocation site.
//!
//! - [`macro@crate::traced`] - Creates a [`TracedError`](crate::TracedError) with a
//!   `%`-style message in one expression.
//! - [`macro@crate::interpolate`] - Formats a `%`-style template with the same
//!   mismatch tolerance as [`with_message_args`](crate::TracedError::with_message_args).
//! - [`macro@crate::callsite`] - Resolves the enclosing module and function at
//!   compile time, without walking the stack.
//!
//! # Examples
//!
//! ```
//! use error_trace::{callsite, traced, Code};
//!
//! fn load_profile(id: u32) -> error_trace::TracedError {
//!     traced!(Code::NOT_FOUND, "profile %d missing", id)
//! }
//!
//! let err = load_profile(7);
//! assert_eq!(err.message(), "profile 7 missing");
//!
//! let site = callsite!();
//! assert_eq!(site.file(), file!());
//! ```

/// Creates a [`TracedError`](crate::TracedError) of the given code.
///
/// With a template, the message is interpolated from the remaining arguments;
/// without one the code's default message is kept.
///
/// # Examples
///
/// ```
/// use error_trace::{traced, Code};
///
/// let bare = traced!(Code::EXPIRED);
/// assert_eq!(bare.message(), "expired error");
///
/// let err = traced!("quota", "limit %d reached for %s", 10, "tenant-a");
/// assert_eq!(err.code().as_str(), "quota");
/// assert_eq!(err.message(), "limit 10 reached for tenant-a");
/// ```
#[macro_export]
macro_rules! traced {
    ($code:expr $(,)?) => {
        $crate::TracedError::new($code)
    };
    ($code:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::TracedError::new($code).with_message_args($template, &[$(&$arg),*])
    };
}

/// Formats a `%`-style template.
///
/// Thin wrapper over [`format::interpolate`](crate::format::interpolate).
///
/// # Examples
///
/// ```
/// use error_trace::interpolate;
///
/// assert_eq!(interpolate!("testing %d%%", 100), "testing 100%");
/// assert_eq!(interpolate!("testing %d", 123, "hello"), "testing 123");
/// ```
#[macro_export]
macro_rules! interpolate {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::format::interpolate($template, &[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

/// Captures the [`CallSite`](crate::CallSite) of the invocation.
///
/// The module and function come from the type name of an item declared in
/// place, so no symbol tables are needed. Inside closures the function is the
/// enclosing named function.
///
/// # Examples
///
/// ```
/// use error_trace::callsite;
///
/// fn handler() -> error_trace::CallSite {
///     callsite!()
/// }
///
/// let site = handler();
/// assert_eq!(site.function(), "handler");
/// assert_eq!(site.line(), i64::from(line!()) - 5);
/// ```
#[macro_export]
macro_rules! callsite {
    () => {{
        fn __callsite() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::CallSite::from_symbol(__type_name_of(__callsite), file!(), line!())
    }};
}
