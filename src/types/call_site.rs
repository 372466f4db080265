//! Code locations recorded by traced errors.
//!
//! A [`CallSite`] is captured every time an error is constructed, re-traced or
//! mutated. File and line always come from the tracked caller; module and
//! function come from a qualified symbol name when the host can provide one.

use crate::types::alloc_type::{String, ToOwned, Vec};
use core::fmt::{self, Display};
use core::panic::Location;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name of the marker function planted by [`callsite!`](crate::callsite).
#[doc(hidden)]
pub const CALLSITE_MARKER: &str = "__callsite";

/// Immutable record of where an error was raised or touched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CallSite {
    module: String,
    function: String,
    file: String,
    line: i64,
}

impl CallSite {
    /// Placeholder used for every field the host could not resolve.
    pub const UNKNOWN: &'static str = "unknown";

    /// Creates a call site from its parts.
    pub fn new(
        module: impl Into<String>,
        function: impl Into<String>,
        file: impl Into<String>,
        line: i64,
    ) -> Self {
        Self { module: module.into(), function: function.into(), file: file.into(), line }
    }

    /// The sentinel returned when nothing about the caller can be resolved.
    pub fn unknown() -> Self {
        Self::new(Self::UNKNOWN, Self::UNKNOWN, Self::UNKNOWN, -1)
    }

    /// Builds a call site from a tracked location, with module and function unresolved.
    pub fn from_location(location: &Location<'_>) -> Self {
        Self::new(Self::UNKNOWN, Self::UNKNOWN, location.file(), i64::from(location.line()))
    }

    /// Builds a call site from a raw qualified symbol name plus file and line.
    ///
    /// Falls back to `"unknown"` module and function when the symbol is empty.
    ///
    /// ```
    /// use error_trace::CallSite;
    ///
    /// let site = CallSite::from_symbol("billing::invoices::issue::{{closure}}", "src/invoices.rs", 42);
    /// assert_eq!(site.module(), "billing::invoices");
    /// assert_eq!(site.function(), "issue");
    /// assert_eq!(site.to_string(), "src/invoices.rs:42");
    /// ```
    pub fn from_symbol(symbol: &str, file: &str, line: u32) -> Self {
        let (module, function) = parse_symbol(symbol)
            .unwrap_or_else(|| (Self::UNKNOWN.to_owned(), Self::UNKNOWN.to_owned()));
        Self { module, function, file: file.to_owned(), line: i64::from(line) }
    }

    /// Module path hosting the caller.
    #[inline]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Calling function; empty for methods and unnamed items.
    #[inline]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Source file path as reported by the compiler.
    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// 1-based line number, `-1` for the sentinel.
    #[inline]
    pub fn line(&self) -> i64 {
        self.line
    }

    /// Returns `true` for the all-unknown sentinel.
    pub fn is_unknown(&self) -> bool {
        self.line < 0 && self.file == Self::UNKNOWN
    }
}

impl Default for CallSite {
    fn default() -> Self {
        Self::unknown()
    }
}

impl Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.file.is_empty() {
            return Ok(());
        }
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Splits a raw qualified symbol into `(module, function)`.
///
/// Handles demangled Rust symbols (`crate::module::function::h0123456789abcdef`),
/// qualified paths (`<crate::Type as Trait>::method`), closures
/// (`crate::module::function::{{closure}}`) and [`callsite!`](crate::callsite)
/// markers. Returns `None` when nothing usable remains.
///
/// Segments are split into a module path (leading lower-case segments) and an
/// item path. No item yields a module alone, exactly one item is the function,
/// and longer item paths such as `Type::method` leave the function empty.
///
/// ```
/// use error_trace::types::call_site::parse_symbol;
///
/// let (module, function) = parse_symbol("app::handlers::load_user::h3f2a9c0d1e4b5a67").unwrap();
/// assert_eq!((module.as_str(), function.as_str()), ("app::handlers", "load_user"));
///
/// let (module, function) = parse_symbol("<app::Repo as core::fmt::Debug>::fmt").unwrap();
/// assert_eq!((module.as_str(), function.as_str()), ("app", ""));
/// ```
pub fn parse_symbol(raw: &str) -> Option<(String, String)> {
    let raw = raw.rsplit('/').next().unwrap_or(raw).trim();
    let cleaned = strip_generics(&strip_qualified_self(raw));

    let mut segments: Vec<&str> = cleaned.split("::").filter(|s| !s.is_empty()).collect();

    if segments.last().is_some_and(|s| is_hash(s)) {
        segments.pop();
    }
    if let Some(anonymous) = segments.iter().position(|s| s.starts_with('{')) {
        segments.truncate(anonymous);
    }
    if segments.last() == Some(&CALLSITE_MARKER) {
        segments.pop();
    }

    match segments.as_slice() {
        [] => None,
        [module] => Some(((*module).to_owned(), String::new())),
        _ => {
            let item_start = segments
                .iter()
                .position(|s| s.starts_with(|c: char| c.is_ascii_uppercase()))
                .unwrap_or(segments.len() - 1);

            if item_start == 0 {
                return Some((segments[0].to_owned(), String::new()));
            }

            let module = segments[..item_start].join("::");
            let function = match &segments[item_start..] {
                [function] => (*function).to_owned(),
                _ => String::new(),
            };
            Some((module, function))
        }
    }
}

/// Rewrites `<a::B as c::D>::m` and `<a::B>::m` into `a::B::m`.
fn strip_qualified_self(raw: &str) -> String {
    if !raw.starts_with('<') {
        return raw.to_owned();
    }

    let mut depth = 0usize;
    let mut close = None;
    for (i, c) in raw.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    close = Some(i);
                    break;
                }
            }
            _ => {}
        }
    }

    let Some(close) = close else {
        return raw.trim_start_matches('<').to_owned();
    };

    let inner = &raw[1..close];
    let self_ty = inner.split(" as ").next().unwrap_or(inner);
    let self_ty = self_ty.trim_start_matches(['&', '*']).trim_start_matches("mut ").trim();

    let mut out = String::with_capacity(raw.len());
    out.push_str(self_ty);
    out.push_str(&raw[close + 1..]);
    out
}

/// Drops every balanced `<...>` group, e.g. `Vec<T>::push` becomes `Vec::push`.
fn strip_generics(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut depth = 0usize;
    for c in raw.chars() {
        match c {
            '<' => depth += 1,
            '>' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

fn is_hash(segment: &str) -> bool {
    segment.len() == 17
        && segment.starts_with('h')
        && segment[1..].chars().all(|c| c.is_ascii_hexdigit())
}
