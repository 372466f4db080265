//! Tower integration for traced errors.
//!
//! This module provides a Tower `Layer` and `Service` that turn the errors of
//! a wrapped service into [`TracedError`]s attributed to where the layer was
//! built.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! error-trace = { version = "0.3", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use error_trace::tower::TraceLayer;
//! use error_trace::Code;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(TraceLayer::new("ledger").with_code(Code::TEMPORARY))
//!     .service(ledger_client);
//! ```

use core::panic::Location;
use core::task::{Context, Poll};

use tower::{Layer, Service};

use crate::async_ext::trace_future::TracePlan;
use crate::async_ext::TraceFuture;
use crate::types::alloc_type::String;
use crate::types::{Cause, Code, TracedError};

/// Detail key holding the name given to [`TraceLayer::new`].
pub const SERVICE_DETAIL: &str = "service";

/// A Tower layer that traces service errors.
///
/// Errors are re-traced, or wrapped under a fixed code with
/// [`with_code`](Self::with_code), and carry a `service` detail.
#[derive(Clone, Debug)]
pub struct TraceLayer {
    plan: TracePlan,
}

impl TraceLayer {
    /// Creates a layer for the service called `service`.
    ///
    /// The caller's location becomes the call site of every traced error.
    #[track_caller]
    pub fn new(service: impl Into<String>) -> Self {
        let mut plan = TracePlan::new(Location::caller(), None);
        plan.insert_detail(SERVICE_DETAIL.into(), service.into());
        Self { plan }
    }

    /// Wraps every error under `code` instead of re-tracing it.
    pub fn with_code(mut self, code: impl Into<Code>) -> Self {
        self.plan.set_code(code.into());
        self
    }

    /// Adds a detail to every traced error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.plan.insert_detail(key.into(), value.into());
        self
    }
}

impl<S> Layer<S> for TraceLayer {
    type Service = TraceService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        TraceService { inner, plan: self.plan.clone() }
    }
}

/// A Tower service produced by [`TraceLayer`].
#[derive(Clone, Debug)]
pub struct TraceService<S> {
    inner: S,
    plan: TracePlan,
}

impl<S> TraceService<S> {
    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, Request> Service<Request> for TraceService<S>
where
    S: Service<Request>,
    S::Error: Into<Cause>,
{
    type Response = S::Response;
    type Error = TracedError;
    type Future = TraceFuture<S::Future>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(|err| self.plan.apply(err.into()))
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        TraceFuture::new(self.inner.call(request), self.plan.clone())
    }
}

/// Extension trait for wrapping a service without `ServiceBuilder`.
pub trait TraceServiceExt<Request>: Service<Request> + Sized {
    /// Wraps `self` in a [`TraceService`] named `service`.
    #[track_caller]
    fn traced(self, service: impl Into<String>) -> TraceService<Self> {
        TraceLayer::new(service).layer(self)
    }
}

impl<S, Request> TraceServiceExt<Request> for S where S: Service<Request> {}
