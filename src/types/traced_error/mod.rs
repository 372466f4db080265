//! Classified error value with call-site tracking and chain-aware mutators.
//!
//! [`TracedError`] is the single type through which errors are created,
//! annotated and re-classified. Every mutator:
//!
//! 1. recaptures the call site of its caller,
//! 2. merges inherited data from the current cause,
//! 3. applies the change and returns the value for chaining.
//!
//! The merge step lets data "bubble up" from wrapped causes without ever
//! overwriting what the outer layer set itself:
//!
//! - cause detail keys missing locally are copied in;
//! - the cause reason is inherited when both codes match and the local reason
//!   is empty;
//! - a message still at its `"<code> error"` default is replaced by the cause's
//!   message (or a foreign cause's `Display`).
//!
//! # Examples
//!
//! ```
//! use error_trace::{trace, Code, TracedError};
//!
//! let lookup = TracedError::new(Code::NOT_FOUND)
//!     .with_message_args("user %s missing", &[&"u-42"])
//!     .with_detail("user_id", "u-42");
//!
//! let err = trace(lookup).expect("traced");
//! assert_eq!(err.code(), &Code::NOT_FOUND);
//! assert_eq!(err.message(), "user u-42 missing");
//! assert_eq!(err.detail("user_id"), Some("u-42"));
//! assert!(err.render().starts_with("[not-found] user u-42 missing"));
//! ```

use crate::format::{fallback_message, interpolate};
use crate::traits::introspect::{Introspect, CAPTURE_SKIP, HOST};
use crate::types::alloc_type::{Arc, Box, Details, String, ToOwned, ToString};
use crate::types::trace_formatter::TraceFormatBuilder;
use crate::types::{CallSite, Code};
use core::error::Error;
use core::fmt::Display;
use core::panic::Location;

mod cause;
mod traits;

pub use cause::{Cause, Chain, Link};

/// Error value carrying a code, message, reason, details, cause and call site.
///
/// Values are owned builders: mutators take `self` and hand it back. Causes are
/// owned too, so a chain never aliases an error the caller still holds.
///
/// `TracedError::default()` is the zero value: empty code, no call site.
/// Re-tracing it yields nothing.
#[must_use]
#[derive(Clone)]
pub struct TracedError {
    pub(crate) code: Code,
    pub(crate) message: String,
    pub(crate) reason: String,
    pub(crate) details: Details,
    pub(crate) cause: Option<Cause>,
    pub(crate) site: Option<CallSite>,
    pub(crate) introspect: &'static dyn Introspect,
}

impl Default for TracedError {
    fn default() -> Self {
        Self {
            code: Code::default(),
            message: String::new(),
            reason: String::new(),
            details: Details::new(),
            cause: None,
            site: None,
            introspect: &HOST,
        }
    }
}

impl TracedError {
    /// Creates an error with default message and reason, attributed to the caller.
    ///
    /// ```
    /// use error_trace::{Code, TracedError};
    ///
    /// let err = TracedError::new(Code::CONFLICT);
    /// assert_eq!(err.message(), "conflict error");
    /// assert_eq!(err.reason(), "conflict");
    /// assert!(err.details().is_empty());
    /// assert!(err.call_site().is_some());
    /// ```
    #[track_caller]
    pub fn new(code: impl Into<Code>) -> Self {
        let code = code.into();
        let message = fallback_message(&code);
        Self::create(code, message, None, Location::caller())
    }

    pub(crate) fn create(
        code: Code,
        message: String,
        cause: Option<Cause>,
        location: &'static Location<'static>,
    ) -> Self {
        let reason = code.as_str().to_owned();
        Self {
            site: Some(HOST.capture(location, CAPTURE_SKIP)),
            code,
            message,
            reason,
            details: Details::new(),
            cause,
            introspect: &HOST,
        }
    }

    /// Wraps a foreign error as an `internal` error carrying its text.
    pub(crate) fn foreign_at(
        foreign: Arc<dyn Error + Send + Sync + 'static>,
        location: &'static Location<'static>,
    ) -> Self {
        let message = foreign.to_string();
        Self::create(Code::INTERNAL, message, Some(Cause::Foreign(foreign)), location)
    }

    /// Wraps `cause` as is under a fresh error of `code`, then merges from it.
    pub(crate) fn wrap_at(code: Code, cause: Cause, location: &'static Location<'static>) -> Self {
        let message = fallback_message(&code);
        let mut err = Self::create(code, message, Some(cause), location);
        err.absorb_cause();
        err
    }

    /// Installs a different introspector and recaptures the call site with it.
    ///
    /// Later mutators and re-traces keep using it.
    #[track_caller]
    pub fn with_introspect(mut self, introspect: &'static dyn Introspect) -> Self {
        self.introspect = introspect;
        self.site = Some(self.capture(Location::caller()));
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Classification of the error.
    #[inline]
    pub fn code(&self) -> &Code {
        &self.code
    }

    /// Most recent message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Most recent reason.
    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Detail map, including keys inherited from causes.
    #[inline]
    pub fn details(&self) -> &Details {
        &self.details
    }

    /// Looks up a single detail.
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.get(key).map(String::as_str)
    }

    /// Where the error was last created, traced or mutated.
    #[inline]
    pub fn call_site(&self) -> Option<&CallSite> {
        self.site.as_ref()
    }

    /// The wrapped cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Consumes the error and returns its cause.
    pub fn into_cause(self) -> Option<Cause> {
        self.cause
    }

    /// Steps one hop into the chain.
    pub fn unwrap_link(&self) -> Link<'_> {
        self.cause.as_ref().map_or(Link::End, Cause::as_link)
    }

    /// Walks the chain starting with this error.
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(Link::Traced(self))
    }

    /// First foreign error in the chain.
    pub fn origin(&self) -> Option<&(dyn Error + 'static)> {
        self.chain().find_map(|link| match link {
            Link::Foreign(foreign) => Some(foreign),
            _ => None,
        })
    }

    /// Returns `true` while the message is still the code's default.
    pub fn has_default_message(&self) -> bool {
        self.message == fallback_message(&self.code)
    }

    /// Renders the deduplicated trace of the whole chain.
    ///
    /// Identical to the `Display` output.
    #[must_use]
    pub fn render(&self) -> String {
        self.trace_fmt().to_string()
    }

    /// Returns a builder for customizing the trace layout.
    #[must_use]
    #[inline]
    pub fn trace_fmt(&self) -> TraceFormatBuilder<'_> {
        TraceFormatBuilder::new(self)
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    /// Changes the classification.
    ///
    /// A message or reason still at the old code's default follows the new code;
    /// explicitly set values are kept.
    #[track_caller]
    pub fn with_code(mut self, code: impl Into<Code>) -> Self {
        let code = code.into();
        self.touch(Location::caller());

        if self.has_default_message() {
            self.message = fallback_message(&code);
        }
        if self.reason == self.code.as_str() {
            self.reason = code.as_str().to_owned();
        }
        self.code = code;
        self
    }

    /// Wraps a cause.
    ///
    /// A traced cause is unwrapped one layer first, so passing the result of
    /// [`trace`](crate::trace) stores the error it traced rather than a second
    /// copy of the same layer. When that traced cause wraps nothing, the current
    /// cause is kept.
    ///
    /// ```
    /// use error_trace::{trace, Code, TracedError};
    ///
    /// let inner = TracedError::new(Code::TIMEOUT).with_detail("upstream", "ledger");
    /// let err = TracedError::new(Code::TIMEOUT).with_cause(trace(inner).unwrap());
    ///
    /// assert_eq!(err.detail("upstream"), Some("ledger"));
    /// assert_eq!(err.chain().count(), 2);
    /// ```
    #[track_caller]
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.apply_cause(cause.into(), Location::caller());
        self
    }

    pub(crate) fn apply_cause(&mut self, cause: Cause, location: &'static Location<'static>) {
        self.touch(location);

        let next = match cause {
            Cause::Traced(traced) => {
                let traced = *traced;
                traced.cause
            }
            foreign @ Cause::Foreign(_) => Some(foreign),
        };

        if let Some(next) = next {
            self.cause = Some(next);
            self.absorb_cause();
        }
    }

    /// Sets the message verbatim.
    #[track_caller]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.touch(Location::caller());
        self.message = message.into();
        self
    }

    /// Sets the message from a `%`-style template, tolerating argument mismatches.
    ///
    /// See [`interpolate`](crate::format::interpolate) for the rules.
    ///
    /// ```
    /// use error_trace::{Code, TracedError};
    ///
    /// let err = TracedError::new(Code::INVALID).with_message_args("field %s out of range %d..%d", &[&"age", &0]);
    /// assert_eq!(err.message(), "field age out of range 0...");
    /// ```
    #[track_caller]
    pub fn with_message_args(mut self, template: &str, args: &[&dyn Display]) -> Self {
        self.touch(Location::caller());
        self.message = interpolate(template, args);
        self
    }

    /// Sets the reason.
    #[track_caller]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.touch(Location::caller());
        self.reason = reason.into();
        self
    }

    /// Sets a single detail, overwriting an existing value for `key`.
    #[track_caller]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.touch(Location::caller());
        self.details.insert(key.into(), value.into());
        self
    }

    /// Merges several details; incoming values win per key.
    #[track_caller]
    pub fn with_details<I, K, V>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.apply_details(details, Location::caller());
        self
    }

    pub(crate) fn apply_details<I, K, V>(
        &mut self,
        details: I,
        location: &'static Location<'static>,
    ) where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.touch(location);
        self.details.extend(details.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    /// Replaces the detail map with an empty one.
    ///
    /// Later mutators inherit the cause's details again.
    #[track_caller]
    pub fn reset_details(mut self) -> Self {
        self.touch(Location::caller());
        self.details = Details::new();
        self
    }

    /// Restores the reason to the code's string form.
    #[track_caller]
    pub fn reset_reason(mut self) -> Self {
        self.touch(Location::caller());
        self.reason = self.code.as_str().to_owned();
        self
    }

    // ------------------------------------------------------------------
    // Propagation
    // ------------------------------------------------------------------

    /// Re-traces a live error: the current value becomes the cause of a copy
    /// attributed to `location`.
    pub(crate) fn retrace_at(mut self, location: &'static Location<'static>) -> Self {
        self.absorb_cause();

        let site = self.capture(location);
        let code = self.code.clone();
        let message = self.message.clone();
        let reason = self.reason.clone();
        let details = self.details.clone();
        let introspect = self.introspect;

        Self {
            code,
            message,
            reason,
            details,
            cause: Some(Cause::Traced(Box::new(self))),
            site: Some(site),
            introspect,
        }
    }

    fn capture(&self, location: &'static Location<'static>) -> CallSite {
        self.introspect.capture(location, CAPTURE_SKIP)
    }

    fn touch(&mut self, location: &'static Location<'static>) {
        self.site = Some(self.capture(location));
        self.absorb_cause();
    }

    /// Pulls inherited data up from the current cause.
    fn absorb_cause(&mut self) {
        let Some(cause) = &self.cause else {
            return;
        };
        let default_message = self.message == fallback_message(&self.code);

        match cause {
            Cause::Traced(inner) => {
                for (key, value) in &inner.details {
                    self.details.entry(key.clone()).or_insert_with(|| value.clone());
                }

                if !inner.reason.is_empty() && inner.code == self.code && self.reason.is_empty() {
                    self.reason = inner.reason.clone();
                }

                if default_message {
                    self.message = inner.message.clone();
                }
            }
            Cause::Foreign(foreign) => {
                if default_message {
                    self.message = foreign.to_string();
                }
            }
        }
    }
}
