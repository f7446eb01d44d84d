//! Extension trait for futures that resolve to a container.
//!
//! Provides `.map_value()` and `.with_error()` for futures, mirroring the
//! synchronous combinators so a pipeline can be assembled before awaiting.

use core::future::Future;

use crate::traits::{MapValue, WithError};
use crate::types::Error;

use super::map_future::{MapFuture, WithErrorFuture};

/// Chains container combinators onto a future.
///
/// Both adapters are lazy: the callback is stored and only evaluated once the
/// inner future resolves to the matching branch.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::async_ext::FutureRailExt;
/// use outcome_rail::{Error, Maybe};
///
/// async fn lookup(id: u32) -> Maybe<String> {
///     if id == 0 {
///         Maybe::fail(Error::new("invalid id"))
///     } else {
///         Maybe::some(format!("user-{id}"))
///     }
/// }
///
/// # async fn demo() {
/// let name = lookup(0)
///     .with_error(|error| error.with_code(400))
///     .map_value(|name| name.to_uppercase())
///     .await;
/// assert_eq!(name.err().unwrap().error_code(), Some(400));
/// # }
/// ```
pub trait FutureRailExt: Future + Sized {
    /// Maps the payload once the future resolves.
    #[inline]
    fn map_value<U, F>(self, f: F) -> MapFuture<Self, F>
    where
        Self::Output: MapValue,
        F: FnOnce(<Self::Output as MapValue>::Value) -> U,
    {
        MapFuture::new(self, f)
    }

    /// Remaps the error once the future resolves to a failure.
    #[inline]
    fn with_error<F>(self, f: F) -> WithErrorFuture<Self, F>
    where
        Self::Output: WithError,
        F: FnOnce(Error) -> Error,
    {
        WithErrorFuture::new(self, f)
    }
}

impl<Fut> FutureRailExt for Fut where Fut: Future {}
