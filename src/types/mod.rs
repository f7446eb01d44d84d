//! Error types and the small vocabulary types shared by every container.
//!
//! This module provides the [`Error`] failure descriptor, the discriminant
//! enums reported by `state()`, the [`Unit`] marker and the
//! [`ContractViolation`] raised on programmer errors.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Error;
//!
//! let err = Error::new("database connection failed")
//!     .with_identifier("db.connect")
//!     .with_code(503)
//!     .with_inner(Error::new("socket closed"));
//!
//! assert_eq!(err.error_code(), Some(503));
//! assert_eq!(format!("{:#}", err), "database connection failed (code: 503) -> socket closed");
//! ```
use smallvec::SmallVec;

pub mod contract;
pub mod error;
pub mod error_formatter;
pub mod state;
pub mod unit;

pub use contract::ContractViolation;
pub use error::*;
pub use state::{MaybeState, ResultState};
pub use unit::Unit;

/// SmallVec-backed collection used while accumulating errors.
///
/// Uses inline storage for up to 2 elements, which covers the common
/// "one or two things went wrong" case without touching the heap.
pub type ErrorVec<E> = SmallVec<[E; 2]>;
