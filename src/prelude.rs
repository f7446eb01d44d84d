//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`rail!`], [`fail!`], [`ensure!`]
//! - **Types**: [`Outcome`], [`Fallible`], [`Maybe`], [`Error`], [`Unit`]
//! - **Traits**: [`ResultExt`], [`OptionExt`], [`WithError`], [`ErrorCategory`]
//!
//! The branch-asserting [`Unchecked`](crate::unchecked::Unchecked) accessors
//! are not included; import them explicitly where a panic is acceptable.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn load_config(path: &str) -> Fallible<String> {
//!     std::fs::read_to_string(path).ctx("loading configuration")
//! }
//!
//! let config = load_config("definitely-missing.toml");
//! assert!(config.err().unwrap().message().starts_with("loading configuration: "));
//! ```

// Macros
pub use crate::{ensure, fail, rail};

// Core types
pub use crate::fallible::Fallible;
pub use crate::maybe::Maybe;
pub use crate::outcome::Outcome;
pub use crate::types::{Error, Unit};

// Traits
pub use crate::traits::{ErrorCategory, OptionExt, ResultExt, WithError};
