//! The required-value result container.
//!
//! [`Fallible<T>`] holds exactly one of a value or an [`Error`](crate::Error).
//! It widens losslessly into [`Maybe<T>`](crate::Maybe) and is what a
//! `Maybe` narrows into once an absence policy is chosen.
//!
//! # Key Components
//!
//! - [`Fallible`] - The container and its combinators
//! - [`Fallible::collect_all`] - Error-accumulating aggregation
//! - `FromIterator` - Fail-fast aggregation
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, Fallible};
//!
//! let total: Fallible<Vec<u32>> = ["1", "2", "3"]
//!     .iter()
//!     .map(|raw| Fallible::from_std_result(raw.parse::<u32>()))
//!     .collect();
//! assert_eq!(total, Fallible::success(vec![1, 2, 3]));
//!
//! let label = Fallible::<u32>::fail(Error::new("timeout"))
//!     .match_with(|value| value.to_string(), |error| format!("failed: {}", error.message()));
//! assert_eq!(label, "failed: timeout");
//! ```
pub mod core;
pub mod iter;
pub mod traits;

pub use self::core::*;
