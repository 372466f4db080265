//! Future wrapper that traces the error of a `Result` future.
//!
//! The call site is captured when the wrapper is built, so the trace points at
//! the line that set up the await rather than at the executor.

use core::future::Future;
use core::pin::Pin;
use core::panic::Location;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::types::alloc_type::{Details, String};
use crate::types::{Cause, Code, TracedError};

/// What to do with an error once the wrapped future fails.
#[derive(Debug, Clone)]
pub(crate) struct TracePlan {
    location: &'static Location<'static>,
    code: Option<Code>,
    details: Details,
}

impl TracePlan {
    pub(crate) fn new(location: &'static Location<'static>, code: Option<Code>) -> Self {
        Self { location, code, details: Details::new() }
    }

    pub(crate) fn set_code(&mut self, code: Code) {
        self.code = Some(code);
    }

    pub(crate) fn insert_detail(&mut self, key: String, value: String) {
        self.details.insert(key, value);
    }

    /// Re-traces `cause`, or wraps it under the planned code.
    pub(crate) fn apply(&self, cause: Cause) -> TracedError {
        let mut err = match &self.code {
            Some(code) => TracedError::wrap_at(code.clone(), cause, self.location),
            None => cause.trace_at(self.location),
        };
        if !self.details.is_empty() {
            err.apply_details(self.details.clone(), self.location);
        }
        err
    }
}

pin_project! {
    /// Future returned by [`FutureTraceExt`](super::FutureTraceExt) methods.
    ///
    /// Resolves to `Result<T, TracedError>`; success values pass through.
    /// Once resolved, further polls return `Poll::Pending` without touching
    /// the inner future.
    #[must_use = "futures do nothing unless polled"]
    pub struct TraceFuture<Fut> {
        #[pin]
        future: Fut,
        plan: TracePlan,
        terminated: bool,
    }
}

impl<Fut> TraceFuture<Fut> {
    #[inline]
    pub(crate) fn new(future: Fut, plan: TracePlan) -> Self {
        Self { future, plan, terminated: false }
    }

    /// Adds a detail to the error produced on failure.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.plan.insert_detail(key.into(), value.into());
        self
    }
}

impl<Fut, T, E> Future for TraceFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<Cause>,
{
    type Output = Result<T, TracedError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        if *this.terminated {
            return Poll::Pending;
        }
        let result = ready!(this.future.poll(cx));
        *this.terminated = true;
        Poll::Ready(result.map_err(|err| this.plan.apply(err.into())))
    }
}

impl<Fut, T, E> FusedFuture for TraceFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<Cause>,
{
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}
