//! The value-less result container.
//!
//! [`Outcome`] answers "did the operation succeed?". It converts losslessly
//! to and from `Fallible<Unit>`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, Outcome};
//!
//! let mut audit = Vec::new();
//! let outcome = Outcome::fail(Error::new("locked"))
//!     .on_fail(|error| audit.push(error.message().to_string()))
//!     .otherwise(Outcome::success());
//!
//! assert!(outcome.is_success());
//! assert_eq!(audit, ["locked"]);
//! ```
pub mod core;
pub mod iter;
pub mod traits;

pub use self::core::*;
