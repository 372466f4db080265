use super::TracedError;
use crate::types::alloc_type::{Arc, Box, BoxError};
use core::error::Error;
use core::panic::Location;

/// One hop of a cause chain, owned by the error that wraps it.
///
/// A traced cause is a private copy; a foreign cause is immutable and shared.
#[derive(Debug, Clone)]
pub enum Cause {
    /// A classified error produced by this crate.
    Traced(Box<TracedError>),
    /// Any other error; the terminal of the classified part of the chain.
    Foreign(Arc<dyn Error + Send + Sync + 'static>),
}

impl Cause {
    /// Wraps a foreign error without inspecting it.
    ///
    /// Prefer `Cause::from`, which recognizes traced errors.
    pub fn foreign<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Foreign(Arc::new(error))
    }

    /// Converts a boxed error, recognizing traced errors behind the box.
    pub fn from_boxed(error: BoxError) -> Self {
        match error.downcast::<TracedError>() {
            Ok(traced) => Self::Traced(traced),
            Err(foreign) => Self::Foreign(Arc::from(foreign)),
        }
    }

    /// Borrows this hop as a [`Link`].
    pub fn as_link(&self) -> Link<'_> {
        match self {
            Self::Traced(traced) => Link::Traced(traced),
            Self::Foreign(foreign) => Link::Foreign(&**foreign),
        }
    }

    /// Turns this hop into a traced error attributed to `location`.
    ///
    /// A traced error without a call site is returned as is, since there is
    /// nothing to re-trace.
    pub(crate) fn trace_at(self, location: &'static Location<'static>) -> TracedError {
        match self {
            Self::Traced(traced) if traced.site.is_none() => *traced,
            Self::Traced(traced) => (*traced).retrace_at(location),
            Self::Foreign(foreign) => TracedError::foreign_at(foreign, location),
        }
    }
}

impl<E> From<E> for Cause
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::from_boxed(Box::new(error))
    }
}

/// Borrowed view of one position in a cause chain.
#[derive(Debug, Clone, Copy)]
pub enum Link<'a> {
    /// A classified node.
    Traced(&'a TracedError),
    /// A foreign node; its own `source()` chain may continue.
    Foreign(&'a (dyn Error + 'static)),
    /// Nothing further.
    End,
}

impl<'a> Link<'a> {
    /// Classifies an arbitrary error as a link.
    pub fn of(error: &'a (dyn Error + 'static)) -> Self {
        match error.downcast_ref::<TracedError>() {
            Some(traced) => Link::Traced(traced),
            None => Link::Foreign(error),
        }
    }

    /// Steps one hop inward.
    pub fn next(self) -> Link<'a> {
        match self {
            Link::Traced(traced) => traced.unwrap_link(),
            Link::Foreign(foreign) => foreign.source().map_or(Link::End, Link::of),
            Link::End => Link::End,
        }
    }

    /// Returns the traced node, if this link is one.
    pub fn as_traced(self) -> Option<&'a TracedError> {
        match self {
            Link::Traced(traced) => Some(traced),
            _ => None,
        }
    }

    /// Returns `true` when the chain is exhausted.
    pub fn is_end(self) -> bool {
        matches!(self, Link::End)
    }
}

/// Iterator over a cause chain, outermost first.
///
/// Yields every link up to, but not including, [`Link::End`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Link<'a>,
}

impl<'a> Chain<'a> {
    /// Starts a walk at `link`.
    #[inline]
    pub fn new(link: Link<'a>) -> Self {
        Self { next: link }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = Link<'a>;

    fn next(&mut self) -> Option<Link<'a>> {
        let current = self.next;
        if current.is_end() {
            return None;
        }
        self.next = current.next();
        Some(current)
    }
}

impl core::iter::FusedIterator for Chain<'_> {}
