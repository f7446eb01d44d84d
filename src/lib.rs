//! Railway-oriented result containers with structured errors.
//!
//! `outcome-rail` models the outcome of an operation as data instead of
//! control flow. Three containers cover the common shapes:
//!
//! - [`Outcome`]: an operation that succeeds without a value, or fails
//! - [`Fallible<T>`]: an operation that produces a `T`, or fails
//! - [`Maybe<T>`]: an operation that produces a `T`, nothing at all, or fails
//!
//! Every failure carries an [`Error`], a descriptor with a message, title,
//! optional code and identifier, an inner cause, composite children and
//! keyed extensions. Combinators (`then`, `map`, `otherwise`, `or`,
//! `with_error`, `match_with`, ...) run only on the branch they target, so a
//! failure short-circuits the rest of a chain.
//!
//! Process-wide defaults live in [`settings`]; branch-asserting accessors
//! live in [`unchecked`].
//!
//! # Examples
//!
//! ## Chaining Steps
//!
//! ```
//! use outcome_rail::{Error, Fallible};
//!
//! fn parse(input: &str) -> Fallible<i32> {
//!     Fallible::from_std_result(input.parse::<i32>())
//! }
//!
//! fn non_negative(value: i32) -> Fallible<i32> {
//!     if value < 0 {
//!         Fallible::fail(Error::new("value must be non-negative").with_code(422))
//!     } else {
//!         Fallible::success(value)
//!     }
//! }
//!
//! assert_eq!(parse("12").then(non_negative).map(|v| v * 2), Fallible::success(24));
//! assert_eq!(parse("-3").then(non_negative).err().unwrap().error_code(), Some(422));
//! assert_eq!(parse("x").then(non_negative).value_or(0), 0);
//! ```
//!
//! ## Absence Is Not Failure
//!
//! ```
//! use outcome_rail::Maybe;
//!
//! let missing: Maybe<u32> = Maybe::some(3).filter(|v| *v > 5);
//! assert!(missing.is_none());
//!
//! let narrowed = missing.into_fallible();
//! assert!(narrowed.err().unwrap().is_absence());
//! ```
//!
//! ## Aggregating Failures
//!
//! ```
//! use outcome_rail::{Error, Fallible};
//!
//! let inputs = vec![
//!     Fallible::success(1),
//!     Fallible::fail(Error::new("second is broken")),
//!     Fallible::fail(Error::new("third is broken")),
//! ];
//!
//! let all: Fallible<Vec<i32>> = Fallible::collect_all(inputs);
//! let error = all.err().unwrap();
//! assert!(error.is_composite());
//! assert_eq!(error.errors().len(), 2);
//! ```

/// Conversions between the containers and the standard library types
pub mod convert;
/// The `Fallible<T>` container
pub mod fallible;
/// Macros for early returns and `Result` conversion
pub mod macros;
/// The `Maybe<T>` container
pub mod maybe;
/// The value-less `Outcome` container
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Process-wide defaults and the fail observer
pub mod settings;
/// Core traits shared by the containers
pub mod traits;
/// Error descriptor and shared vocabulary types
pub mod types;
/// Branch-asserting accessors
pub mod unchecked;

/// Async combinators and future adapters (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Span integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use fallible::Fallible;
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use traits::*;
pub use types::{
    error_formatter::ErrorFormatConfig, ContractViolation, Error, ErrorVec, ExtensionValue,
    FromExtension, MaybeState, ResultState, Unit, CANCELED_ERROR_CODE, NONE_ERROR_CODE,
    RESERVED_KEYS,
};
