//! Async extensions for outcome-rail.
//!
//! This module adds `*_async` counterparts of the combinators as inherent
//! methods on [`Outcome`](crate::Outcome), [`Fallible`](crate::Fallible) and
//! [`Maybe`](crate::Maybe), plus [`FutureRailExt`] for chaining combinators onto
//! a future before it is awaited.
//!
//! No runtime is required: the adapters only forward to the awaited callback.
//! Cancellation is drop-based; report it with
//! [`Error::canceled`](crate::Error::canceled) when needed.
//!
//! # Feature Flag
//!
//! Requires the `async` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome_rail::prelude_async::*;
//!
//! async fn load(id: u32) -> Fallible<String> {
//!     Fallible::success(id)
//!         .then_async(|id| async move { Fallible::success(format!("record-{id}")) })
//!         .await
//! }
//!
//! # async fn demo() {
//! let record = load(7).map_value(|s| s.len()).await;
//! assert_eq!(record, Fallible::success(8));
//! # }
//! ```

mod combinators;
mod future_ext;
mod map_future;

pub use future_ext::FutureRailExt;
pub use map_future::{MapFuture, WithErrorFuture};
