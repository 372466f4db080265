use super::{Cause, TracedError};
use core::error::Error;
use core::fmt::{self, Debug, Display};

impl Display for TracedError {
    /// `{}` renders the full trace; `{:#}` renders only the messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return Display::fmt(&self.trace_fmt(), f);
        }
        Display::fmt(&self.trace_fmt().compact(), f)
    }
}

impl Debug for TracedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("TracedError");
        d.field("code", &self.code);
        d.field("message", &self.message);
        d.field("reason", &self.reason);
        if !self.details.is_empty() {
            d.field("details", &self.details);
        }
        if let Some(site) = &self.site {
            d.field("site", &format_args!("{site}"));
        }
        if let Some(cause) = &self.cause {
            d.field("cause", cause);
        }
        d.finish()
    }
}

impl Error for TracedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self.cause.as_ref()? {
            Cause::Traced(inner) => Some(&**inner as &(dyn Error + 'static)),
            Cause::Foreign(foreign) => Some(&**foreign as &(dyn Error + 'static)),
        }
    }
}
