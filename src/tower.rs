//! Tower integration for problem-rail.
//!
//! [`ProblemLayer`] turns service errors into problem responses: any error
//! that converts into a [`Problem`] is rendered with the problem's status and
//! the layer's [`Format`], and returned as a successful response.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! problem-rail = { version = "0.1", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use problem_rail::tower::ProblemLayer;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(ProblemLayer::json())
//!     .service(my_service);
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;
use http::{Response, StatusCode};
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::codec::Format;
use crate::types::Problem;

/// A Tower [`Layer`] that renders service errors as problem responses.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProblemLayer {
    format: Format,
}

impl ProblemLayer {
    /// Creates a layer rendering problems in `format`.
    #[inline]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Renders `application/problem+json` bodies.
    #[inline]
    pub const fn json() -> Self {
        Self::new(Format::Json)
    }

    /// Renders `application/problem+xml` bodies.
    #[inline]
    pub const fn xml() -> Self {
        Self::new(Format::Xml)
    }

    /// Returns the body format.
    #[inline]
    pub const fn format(&self) -> Format {
        self.format
    }
}

impl<S> Layer<S> for ProblemLayer {
    type Service = ProblemService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        ProblemService { inner, format: self.format }
    }
}

/// A Tower [`Service`] created by [`ProblemLayer`].
///
/// Errors from `poll_ready` are passed through untouched: there is no request
/// to answer yet.
#[derive(Clone, Debug)]
pub struct ProblemService<S> {
    inner: S,
    format: Format,
}

impl<S> ProblemService<S> {
    /// Creates a new `ProblemService` wrapping the given service.
    #[inline]
    pub const fn new(inner: S, format: Format) -> Self {
        Self { inner, format }
    }

    /// Returns a reference to the inner service.
    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns a mutable reference to the inner service.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consumes the wrapper and returns the inner service.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, B, Request> Service<Request> for ProblemService<S>
where
    S: Service<Request, Response = Response<B>>,
    S::Error: Into<Problem>,
    B: From<Vec<u8>>,
{
    type Response = Response<B>;
    type Error = S::Error;
    type Future = ProblemFuture<S::Future>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        ProblemFuture { inner: self.inner.call(request), format: self.format, done: false }
    }
}

pin_project! {
    /// Future returned by [`ProblemService`].
    #[must_use = "futures do nothing unless polled"]
    pub struct ProblemFuture<F> {
        #[pin]
        inner: F,
        format: Format,
        done: bool,
    }
}

impl<F, B, E> Future for ProblemFuture<F>
where
    F: Future<Output = Result<Response<B>, E>>,
    E: Into<Problem>,
    B: From<Vec<u8>>,
{
    type Output = Result<Response<B>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let result = ready!(this.inner.poll(cx));
        *this.done = true;

        match result {
            Ok(response) => Poll::Ready(Ok(response)),
            Err(error) => {
                let problem: Problem = error.into();
                #[cfg(feature = "tracing")]
                tracing::debug!(problem = %problem, "service error rendered as problem response");
                Poll::Ready(Ok(render(&problem, *this.format)))
            },
        }
    }
}

impl<F, B, E> FusedFuture for ProblemFuture<F>
where
    F: FusedFuture<Output = Result<Response<B>, E>>,
    E: Into<Problem>,
    B: From<Vec<u8>>,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.done || self.inner.is_terminated()
    }
}

/// Renders `problem`, falling back to JSON when XML cannot encode it.
fn render<B>(problem: &Problem, format: Format) -> Response<B>
where
    B: From<Vec<u8>>,
{
    problem.to_response(format).or_else(|_| problem.json_response()).unwrap_or_else(|_| {
        let mut response = Response::new(B::from(Vec::new()));
        *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        response
    })
}

/// Extension trait for wrapping services with [`ProblemService`].
pub trait ServiceProblemExt<Request>: Service<Request> + Sized {
    /// Renders this service's errors as problem responses in `format`.
    ///
    /// ```rust,ignore
    /// use problem_rail::tower::ServiceProblemExt;
    /// use problem_rail::Format;
    ///
    /// let wrapped = my_service.with_problem_responses(Format::Xml);
    /// ```
    fn with_problem_responses(self, format: Format) -> ProblemService<Self> {
        ProblemService::new(self, format)
    }
}

impl<S, Request> ServiceProblemExt<Request> for S where S: Service<Request> {}
