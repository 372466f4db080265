//! Message formatting that never fails.
//!
//! Error messages are often built from `%`-style templates whose arguments do not
//! match, e.g. a template updated without updating its call sites. [`interpolate`]
//! produces the best string it can instead of faulting:
//!
//! - no arguments: the template is returned untouched;
//! - surplus arguments are dropped;
//! - missing arguments truncate the template after the last placeholder that can
//!   be filled and append `...`.
//!
//! Placeholders are `%v`, `%d`, `%f`, `%s` and `%t`; `%%` is a literal percent
//! sign, and so is any other `%`. Every argument renders through [`Display`],
//! whatever verb it lands on.
//!
//! # Examples
//!
//! ```
//! use error_trace::format::interpolate;
//!
//! assert_eq!(interpolate("testing %d %s %s %s %s %s", &[&123, &"hello", &"world"]), "testing 123 hello world...");
//! assert_eq!(interpolate("testing %d", &[&123, &"hello", &"world"]), "testing 123");
//! assert_eq!(interpolate("testing %d%%", &[&100]), "testing 100%");
//! ```

use crate::types::alloc_type::{String, ToOwned, Vec};
use crate::types::Code;
use core::fmt::{Display, Write};

/// Default message of an error whose message was never set: `"<code> error"`.
#[inline]
pub fn fallback_message(code: &Code) -> String {
    alloc::format!("{code} error")
}

/// Fills `%` placeholders in `template` with `args`, tolerating count mismatches.
pub fn interpolate(template: &str, args: &[&dyn Display]) -> String {
    if args.is_empty() {
        return template.to_owned();
    }

    let spans = placeholder_spans(template);

    if spans.len() <= args.len() {
        return substitute(template, &args[..spans.len()]);
    }

    // More placeholders than arguments: keep what can be filled.
    let end = spans[args.len() - 1].1;
    let mut truncated = String::with_capacity(end + 3);
    truncated.push_str(template[..end].trim_end());
    truncated.push_str("...");

    substitute(&truncated, args)
}

/// Verbs that turn a `%` into a placeholder.
const VERBS: [u8; 5] = [b'v', b'd', b'f', b's', b't'];

#[inline]
fn is_verb(c: char) -> bool {
    c.is_ascii() && VERBS.contains(&(c as u8))
}

/// Byte ranges of every placeholder in `template`, skipping `%%` escapes and
/// percent signs not followed by a verb.
fn placeholder_spans(template: &str) -> Vec<(usize, usize)> {
    let bytes = template.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1) {
                Some(b'%') => {
                    i += 2;
                    continue;
                }
                Some(verb) if VERBS.contains(verb) => {
                    spans.push((i, i + 2));
                    i += 2;
                    continue;
                }
                _ => {}
            }
        }
        i += 1;
    }

    spans
}

fn substitute(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(verb) if is_verb(verb) => {
                chars.next();
                match args.next() {
                    Some(arg) => {
                        let _ = write!(out, "{arg}");
                    }
                    None => {
                        out.push('%');
                        out.push(verb);
                    }
                }
            }
            _ => out.push('%'),
        }
    }

    out
}
