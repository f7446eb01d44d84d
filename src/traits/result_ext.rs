//! Extension traits bridging the standard `Result` and `Option` types.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::ResultExt;
//!
//! let parsed = "42x".parse::<u32>().ctx("parsing port");
//! let error = parsed.err().unwrap();
//!
//! assert_eq!(error.title(), "ParseIntError");
//! assert!(error.message().starts_with("parsing port: "));
//! ```

use crate::fallible::Fallible;
use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::types::Error;

/// Extension trait turning a standard `Result` into this crate's containers.
///
/// The error side is translated with [`Error::from_std_error`], which keeps
/// the source chain as inner errors.
pub trait ResultExt<T> {
    /// Converts into a [`Fallible`].
    fn into_fallible(self) -> Fallible<T>;

    /// Converts into an [`Outcome`], discarding the value.
    fn into_outcome(self) -> Outcome;

    /// Converts into a [`Fallible`], prefixing the error message with `msg`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::ResultExt;
    ///
    /// let result = std::fs::read_to_string("definitely-missing.toml")
    ///     .ctx("loading configuration");
    /// assert!(result.is_fail());
    /// ```
    fn ctx(self, msg: &str) -> Fallible<T>;

    /// Like [`ctx`](ResultExt::ctx) with a lazily computed message.
    ///
    /// The closure only runs when the result is an error.
    fn ctx_with<F>(self, f: F) -> Fallible<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    #[inline]
    fn into_fallible(self) -> Fallible<T> {
        Fallible::from_std_result(self)
    }

    #[inline]
    fn into_outcome(self) -> Outcome {
        Outcome::from_std_result(self)
    }

    #[inline]
    fn ctx(self, msg: &str) -> Fallible<T> {
        match self {
            Ok(value) => Fallible::Success(value),
            Err(error) => Fallible::fail(Error::from_std_error_with_prefix(&error, msg)),
        }
    }

    #[inline]
    fn ctx_with<F>(self, f: F) -> Fallible<T>
    where
        F: FnOnce() -> String,
    {
        match self {
            Ok(value) => Fallible::Success(value),
            Err(error) => Fallible::fail(Error::from_std_error_with_prefix(&error, &f())),
        }
    }
}

/// Extension trait turning an `Option` into this crate's containers.
pub trait OptionExt<T> {
    /// `Some` becomes `Maybe::Some`, `None` becomes `Maybe::None`.
    fn into_maybe(self) -> Maybe<T>;

    /// `None` becomes a failure carrying the error produced by `f`.
    fn ok_or_fail<F>(self, f: F) -> Fallible<T>
    where
        F: FnOnce() -> Error;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        Maybe::from_value(self)
    }

    #[inline]
    fn ok_or_fail<F>(self, f: F) -> Fallible<T>
    where
        F: FnOnce() -> Error,
    {
        Fallible::from_value_or_else(self, f)
    }
}
