//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! future adapters. The `*_async` combinators are inherent methods, so they
//! need no import.
//!
//! # Usage
//!
//! ```rust
//! use outcome_rail::prelude_async::*;
//!
//! async fn fetch(id: u64) -> Fallible<u64> {
//!     Fallible::success(id)
//! }
//!
//! # async fn demo() {
//! let tagged = fetch(1)
//!     .with_error(|error| error.with_identifier("fetch"))
//!     .map_value(|id| id + 1)
//!     .await;
//! assert_eq!(tagged, Fallible::success(2));
//! # }
//! ```

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{FutureRailExt, MapFuture, WithErrorFuture};
