//! Deduplicated rendering of cause chains.
//!
//! The chain is walked from the most recent layer inwards. Each traced node
//! contributes a message key (`[<code>] <message>`) and a location
//! (`<file>:<line>`). Keys are kept in first-seen order and every key keeps its
//! own distinct locations, so an error that passes through the same call site
//! twice is listed once. The first foreign error met is the origin.
//!
//! Output reads earliest-raised first:
//!
//! ```text
//! connection refused
//! [temporary] ledger unavailable
//!     src/ledger.rs:88
//!
//! [internal] charge failed
//!     src/billing.rs:41
//!     src/api.rs:17
//! ```

use crate::types::alloc_type::{String, ToOwned, ToString, Vec};
use crate::types::traced_error::{Chain, Link, TracedError};
use crate::types::ErrorVec;
use core::error::Error;
use core::fmt::{self, Display};

/// Layout options for rendered traces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceFormatConfig {
    /// Prefix of every location line.
    pub indent: String,
    /// Text emitted after each message block.
    pub block_separator: String,
    /// Whether locations are listed under their messages.
    pub show_locations: bool,
    /// Whether the foreign origin is prefixed when missing from the output.
    pub show_origin: bool,
}

impl Default for TraceFormatConfig {
    fn default() -> Self {
        Self {
            indent: "\t".into(),
            block_separator: "\n\n".into(),
            show_locations: true,
            show_origin: true,
        }
    }
}

impl TraceFormatConfig {
    /// Messages only, one per line.
    #[inline]
    pub fn compact() -> Self {
        Self { block_separator: "\n".into(), show_locations: false, ..Default::default() }
    }

    /// Locations indented with spaces instead of a tab.
    #[inline]
    pub fn spaced(width: usize) -> Self {
        Self { indent: " ".repeat(width), ..Default::default() }
    }
}

/// Keys and locations collected from one walk of a chain.
#[derive(Debug, Default)]
pub struct Tracer<'a> {
    origin: Option<&'a (dyn Error + 'static)>,
    entries: Vec<(String, ErrorVec<String>)>,
}

impl<'a> Tracer<'a> {
    /// Walks the chain of `error` and collects its keys, locations and origin.
    pub fn collect(error: &'a TracedError) -> Self {
        let mut tracer = Self::default();
        for link in Chain::new(Link::Traced(error)) {
            match link {
                Link::Traced(node) => tracer.add(node),
                Link::Foreign(foreign) => tracer.set_origin(foreign),
                Link::End => break,
            }
        }
        tracer
    }

    fn add(&mut self, node: &TracedError) {
        let key = alloc::format!("[{}] {}", node.code, node.message);
        let location = node.site.as_ref().map(ToString::to_string);

        let index = match self.entries.iter().position(|(k, _)| *k == key) {
            Some(index) => index,
            None => {
                self.entries.push((key, ErrorVec::new()));
                self.entries.len() - 1
            }
        };

        if let Some(location) = location {
            let locations = &mut self.entries[index].1;
            if !locations.contains(&location) {
                locations.push(location);
            }
        }
    }

    fn set_origin(&mut self, foreign: &'a (dyn Error + 'static)) {
        if self.origin.is_none() {
            self.origin = Some(foreign);
        }
    }

    /// The first foreign error found, if any.
    #[inline]
    pub fn origin(&self) -> Option<&'a (dyn Error + 'static)> {
        self.origin
    }

    /// Distinct message keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Distinct locations recorded under `key`, in first-seen order.
    pub fn locations(&self, key: &str) -> Option<&[String]> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, locations)| locations.as_slice())
    }

    /// Renders the collected trace.
    pub fn render(&self, config: &TraceFormatConfig) -> String {
        let mut out = String::with_capacity(self.entries.len() * 64);

        for (key, locations) in self.entries.iter().rev() {
            out.push_str(key);
            if config.show_locations {
                for location in locations.iter().rev() {
                    out.push('\n');
                    out.push_str(&config.indent);
                    out.push_str(location);
                }
            }
            out.push_str(&config.block_separator);
        }

        let body = out.trim();

        match self.origin.filter(|_| config.show_origin).map(ToString::to_string) {
            Some(origin) if !body.contains(origin.as_str()) => {
                alloc::format!("{origin}\n{body}").trim().to_owned()
            }
            _ => body.to_owned(),
        }
    }
}

/// Builder for customizing trace output, returned by [`TracedError::trace_fmt`].
pub struct TraceFormatBuilder<'a> {
    pub(crate) error: &'a TracedError,
    pub(crate) config: TraceFormatConfig,
}

impl<'a> TraceFormatBuilder<'a> {
    pub fn new(error: &'a TracedError) -> Self {
        Self { error, config: TraceFormatConfig::default() }
    }

    pub fn with_config(mut self, config: TraceFormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.config.indent = indent.into();
        self
    }

    pub fn show_locations(mut self, show: bool) -> Self {
        self.config.show_locations = show;
        self
    }

    pub fn show_origin(mut self, show: bool) -> Self {
        self.config.show_origin = show;
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = TraceFormatConfig::compact();
        self
    }
}

impl Display for TraceFormatBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = Tracer::collect(self.error).render(&self.config);
        f.write_str(&rendered)
    }
}
