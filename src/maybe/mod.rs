//! The optional-value container.
//!
//! [`Maybe<T>`] distinguishes a present value, a deliberate absence and a
//! failure. Absence is not an error: it flows through combinators on its own
//! path and only becomes one when narrowed with
//! [`Maybe::into_fallible`] or [`Maybe::into_fallible_with`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, Maybe};
//!
//! fn lookup(id: u32) -> Maybe<&'static str> {
//!     match id {
//!         1 => Maybe::some("alice"),
//!         2 => Maybe::none(),
//!         _ => Maybe::fail(Error::new("backend unavailable")),
//!     }
//! }
//!
//! assert_eq!(lookup(1).map(str::len), Maybe::some(5));
//! assert!(lookup(2).map(str::len).is_none());
//! assert!(lookup(3).into_fallible().is_fail());
//! ```
pub mod core;
pub mod iter;
pub mod traits;

pub use self::core::*;
