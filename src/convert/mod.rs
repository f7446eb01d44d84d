//! Conversions between the containers and the standard library types.
//!
//! These adapters make it straightforward to adopt `outcome-rail` at a
//! boundary: wrap a legacy `Result` or `Option`, and hand a plain `Result`
//! back to APIs that expect one.
//!
//! | from            | to                      | rule                                   |
//! |-----------------|-------------------------|----------------------------------------|
//! | `Outcome`       | `Fallible<Unit>`        | lossless                               |
//! | `Fallible<T>`   | `Maybe<T>`              | lossless, never `None`                 |
//! | `Maybe<T>`      | `Fallible<T>`           | `None` becomes the absence error       |
//! | `Option<T>`     | `Maybe<T>`              | `None` stays `None`                    |
//! | `Result<T, Error>` | `Fallible<T>`        | lossless                               |
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::{Error, Fallible, Maybe, Outcome, Unit};
//!
//! let widened: Maybe<i32> = Fallible::success(1).into();
//! assert_eq!(widened, Maybe::some(1));
//!
//! let unit: Fallible<Unit> = Outcome::success().into();
//! assert_eq!(unit, Fallible::success(Unit));
//!
//! let back: Result<i32, Error> = Fallible::success(3).into();
//! assert_eq!(back, Ok(3));
//!
//! assert!(maybe_to_fallible(Maybe::<i32>::none()).is_fail());
//! ```

use crate::fallible::Fallible;
use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::types::{Error, Unit};

/// Widens a `Fallible` into a `Maybe`; see [`Fallible::into_maybe`].
#[inline]
pub fn fallible_to_maybe<T>(fallible: Fallible<T>) -> Maybe<T> {
    fallible.into_maybe()
}

/// Narrows a `Maybe` into a `Fallible`; see [`Maybe::into_fallible`].
#[inline]
pub fn maybe_to_fallible<T>(maybe: Maybe<T>) -> Fallible<T> {
    maybe.into_fallible()
}

/// Converts an `Outcome` into `Fallible<Unit>`.
#[inline]
pub fn outcome_to_fallible(outcome: Outcome) -> Fallible<Unit> {
    outcome.into_fallible()
}

/// Converts any `Fallible` into an `Outcome`, discarding the value.
#[inline]
pub fn fallible_to_outcome<T>(fallible: Fallible<T>) -> Outcome {
    fallible.into_outcome()
}

impl From<Outcome> for Fallible<Unit> {
    #[inline]
    fn from(outcome: Outcome) -> Self {
        outcome.into_fallible()
    }
}

impl From<Fallible<Unit>> for Outcome {
    #[inline]
    fn from(fallible: Fallible<Unit>) -> Self {
        fallible.into_outcome()
    }
}

impl<T> From<Fallible<T>> for Maybe<T> {
    #[inline]
    fn from(fallible: Fallible<T>) -> Self {
        fallible.into_maybe()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Maybe::from_value(value)
    }
}

impl<T> From<Result<T, Error>> for Fallible<T> {
    #[inline]
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Fallible::Success(value),
            Err(error) => Fallible::Fail(error),
        }
    }
}

impl From<Result<(), Error>> for Outcome {
    #[inline]
    fn from(result: Result<(), Error>) -> Self {
        match result {
            Ok(()) => Outcome::Success,
            Err(error) => Outcome::Fail(error),
        }
    }
}

impl From<Error> for Outcome {
    #[inline]
    fn from(error: Error) -> Self {
        Outcome::fail(error)
    }
}

impl<T> From<Fallible<T>> for Result<T, Error> {
    #[inline]
    fn from(fallible: Fallible<T>) -> Self {
        fallible.into_std_result()
    }
}

impl From<Outcome> for Result<(), Error> {
    #[inline]
    fn from(outcome: Outcome) -> Self {
        outcome.into_std_result()
    }
}

impl<T> From<Maybe<T>> for Result<Option<T>, Error> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_std_result()
    }
}
