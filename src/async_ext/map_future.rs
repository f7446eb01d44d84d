//! Future adapters that transform a container once the inner future resolves.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::traits::{MapValue, WithError};
use crate::types::Error;

pin_project! {
    /// Maps the payload of the container a future resolves to.
    ///
    /// `f` runs only when the container holds a value; `None` and `Fail`
    /// pass through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::async_ext::FutureRailExt;
    /// use outcome_rail::Fallible;
    ///
    /// # async fn demo() {
    /// let doubled = async { Fallible::success(21) }.map_value(|v| v * 2).await;
    /// assert_eq!(doubled, Fallible::success(42));
    /// # }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct MapFuture<Fut, F> {
        #[pin]
        future: Fut,
        f: Option<F>,
    }
}

impl<Fut, F> MapFuture<Fut, F> {
    #[inline]
    pub fn new(future: Fut, f: F) -> Self {
        Self { future, f: Some(f) }
    }
}

impl<Fut, F, U> Future for MapFuture<Fut, F>
where
    Fut: Future,
    Fut::Output: MapValue,
    F: FnOnce(<Fut::Output as MapValue>::Value) -> U,
{
    type Output = <Fut::Output as MapValue>::Output<U>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|container| {
            let f = this.f.take().expect("MapFuture polled after completion; this is a bug");
            container.map_value(f)
        })
    }
}

impl<Fut, F, U> FusedFuture for MapFuture<Fut, F>
where
    Fut: FusedFuture,
    Fut::Output: MapValue,
    F: FnOnce(<Fut::Output as MapValue>::Value) -> U,
{
    fn is_terminated(&self) -> bool {
        self.f.is_none() || self.future.is_terminated()
    }
}

pin_project! {
    /// Remaps the error of the container a future resolves to.
    ///
    /// `f` is evaluated only when the container failed.
    #[must_use = "futures do nothing unless polled"]
    pub struct WithErrorFuture<Fut, F> {
        #[pin]
        future: Fut,
        f: Option<F>,
    }
}

impl<Fut, F> WithErrorFuture<Fut, F> {
    #[inline]
    pub fn new(future: Fut, f: F) -> Self {
        Self { future, f: Some(f) }
    }
}

impl<Fut, F> Future for WithErrorFuture<Fut, F>
where
    Fut: Future,
    Fut::Output: WithError,
    F: FnOnce(Error) -> Error,
{
    type Output = Fut::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|container| {
            let f = this.f.take().expect("WithErrorFuture polled after completion; this is a bug");
            container.with_error(f)
        })
    }
}

impl<Fut, F> FusedFuture for WithErrorFuture<Fut, F>
where
    Fut: FusedFuture,
    Fut::Output: WithError,
    F: FnOnce(Error) -> Error,
{
    fn is_terminated(&self) -> bool {
        self.f.is_none() || self.future.is_terminated()
    }
}
