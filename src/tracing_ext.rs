//! Tracing integration for outcome-rail.
//!
//! Failures can be annotated with the name of the active `tracing` span, so an
//! error logged far from its origin still says where it happened. The span is
//! recorded as an outer error whose inner error is the original failure.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome_rail::tracing_ext::SpanExt;
//! use outcome_rail::{Error, Fallible};
//!
//! let span = tracing::info_span!("load_config");
//! let failed: Fallible<()> = Fallible::fail(Error::new("missing file")).in_span(&span);
//!
//! let error = failed.err().unwrap();
//! assert_eq!(error.inner().unwrap().message(), "missing file");
//! ```

use tracing::Span;

use crate::traits::WithError;
use crate::types::Error;

/// Wraps the error of a failed container with span information.
///
/// Implemented for every container; `Success`, `Some` and `None` pass
/// through untouched.
pub trait SpanExt: WithError {
    /// Wraps the error with the current span.
    fn in_current_span(self) -> Self {
        self.in_span(&Span::current())
    }

    /// Wraps the error with `span`.
    fn in_span(self, span: &Span) -> Self {
        self.with_error(|error| wrap_in_span(span, error))
    }
}

impl<C> SpanExt for C where C: WithError {}

/// Wraps `error` with the current span.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::tracing_ext::instrument_error;
/// use outcome_rail::Error;
///
/// let wrapped = instrument_error(Error::new("timeout"));
/// assert_eq!(wrapped.root_cause().message(), "timeout");
/// ```
pub fn instrument_error(error: Error) -> Error {
    wrap_in_span(&Span::current(), error)
}

fn wrap_in_span(span: &Span, error: Error) -> Error {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    Error::new(format!("in span '{name}'")).with_inner(error)
}

#[cfg(feature = "async")]
pub use self::future::{FutureSpanExt, SpanContextFuture};

#[cfg(feature = "async")]
mod future {
    use core::future::Future;
    use core::pin::Pin;
    use core::task::{Context, Poll};

    use pin_project_lite::pin_project;
    use tracing::Span;

    use super::wrap_in_span;
    use crate::traits::WithError;

    /// Extension trait for futures that adds span information to failures.
    ///
    /// The span is captured when the adapter is created, not when the future
    /// resolves.
    pub trait FutureSpanExt: Future + Sized {
        /// Captures the current span.
        fn with_span_context(self) -> SpanContextFuture<Self> {
            SpanContextFuture { inner: self, span: Span::current() }
        }

        /// Uses `span` instead of the current one.
        fn with_span(self, span: Span) -> SpanContextFuture<Self> {
            SpanContextFuture { inner: self, span }
        }
    }

    impl<Fut> FutureSpanExt for Fut where Fut: Future {}

    pin_project! {
        /// Future wrapper that records span information on failure.
        ///
        /// Created by [`FutureSpanExt::with_span_context`] or [`FutureSpanExt::with_span`].
        #[must_use = "futures do nothing unless polled"]
        pub struct SpanContextFuture<Fut> {
            #[pin]
            inner: Fut,
            span: Span,
        }
    }

    impl<Fut> Future for SpanContextFuture<Fut>
    where
        Fut: Future,
        Fut::Output: WithError,
    {
        type Output = Fut::Output;

        fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
            let this = self.project();
            let span = this.span;

            this.inner
                .poll(cx)
                .map(|container| container.with_error(|error| wrap_in_span(span, error)))
        }
    }
}
