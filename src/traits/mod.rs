//! Core traits shared by the containers.
//!
//! - [`WithError`]: remap or observe the error branch generically
//! - [`ErrorCategory`]: build a container straight from an [`Error`](crate::Error)
//! - [`MapValue`]: transform the payload generically
//! - [`ResultExt`] / [`OptionExt`]: bridges from the standard library types
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{ErrorCategory, OptionExt, WithError};
//! use outcome_rail::{Error, Fallible};
//!
//! let failed = Fallible::<i32>::handle_error(Error::new("boom"))
//!     .with_error(|error| error.with_code(500));
//! assert_eq!(failed.err().unwrap().error_code(), Some(500));
//!
//! assert!(Some(3).into_maybe().is_some());
//! ```

pub mod error_category;
pub mod map_value;
pub mod result_ext;
pub mod with_error;

pub use error_category::ErrorCategory;
pub use map_value::MapValue;
pub use result_ext::{OptionExt, ResultExt};
pub use with_error::WithError;
