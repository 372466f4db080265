//! Tracing integration for traced errors.
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-trace = { version = "0.3", features = ["tracing"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use error_trace::{Code, TracedError};
//!
//! let span = tracing::info_span!("checkout");
//! let _guard = span.enter();
//!
//! let err = TracedError::new(Code::TEMPORARY).with_span_details();
//! err.emit();
//! ```

use crate::types::TracedError;
use core::panic::Location;
use tracing::Span;

/// Detail key holding the name of the span an error was annotated in.
pub const SPAN_DETAIL: &str = "span";

impl TracedError {
    /// Records the error as one `ERROR` event.
    ///
    /// The error message is the event message; `code`, `reason`, `location`
    /// and the rendered `trace` are fields.
    pub fn emit(&self) {
        let location = self.call_site().map(tracing::field::display);
        tracing::error!(
            code = %self.code(),
            reason = self.reason(),
            location,
            trace = %self.render(),
            "{}",
            self.message()
        );
    }

    /// Adds the current span's name as the `span` detail.
    ///
    /// Outside of any span, or inside a disabled one (no subscriber is
    /// interested in it), no detail is added and the error is only
    /// re-attributed to the caller.
    #[track_caller]
    pub fn with_span_details(self) -> Self {
        self.annotate_span(&Span::current(), Location::caller())
    }

    /// Adds the name of `span` as the `span` detail.
    ///
    /// A disabled span has no metadata and adds nothing.
    #[track_caller]
    pub fn with_span(self, span: &Span) -> Self {
        self.annotate_span(span, Location::caller())
    }

    fn annotate_span(mut self, span: &Span, location: &'static Location<'static>) -> Self {
        let name = span.metadata().map(|metadata| metadata.name());
        self.apply_details(name.map(|name| (SPAN_DETAIL, name)), location);
        self
    }
}
