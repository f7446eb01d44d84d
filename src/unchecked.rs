//! Branch-asserting accessors.
//!
//! Reading the value of a failed container (or the error of a successful one)
//! is a bug in the calling code. The `try_*` accessors report it as a
//! [`ContractViolation`]; the plain accessors raise the violation as a panic
//! payload, which a test harness or supervisor can recover with
//! [`std::panic::catch_unwind`] and `downcast_ref::<ContractViolation>()`.
//!
//! The trait is deliberately kept out of the prelude.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::unchecked::Unchecked;
//! use outcome_rail::{ContractViolation, Error, Fallible};
//!
//! let ok = Fallible::success(7);
//! assert_eq!(*ok.value(), 7);
//!
//! let failed: Fallible<i32> = Fallible::fail(Error::new("boom"));
//! let caught = std::panic::catch_unwind(|| *failed.value()).unwrap_err();
//! assert!(caught.downcast_ref::<ContractViolation>().is_some());
//! ```

use crate::fallible::Fallible;
use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::types::{ContractViolation, Error, MaybeState, ResultState, Unit};

static UNIT: Unit = Unit;

/// Accessors that assume the container is in a particular branch.
pub trait Unchecked: Sized {
    type Value;

    fn try_value(&self) -> Result<&Self::Value, ContractViolation>;

    fn try_error(&self) -> Result<&Error, ContractViolation>;

    fn try_into_value(self) -> Result<Self::Value, ContractViolation>;

    fn try_into_error(self) -> Result<Error, ContractViolation>;

    /// Borrows the value.
    ///
    /// # Panics
    ///
    /// Panics with a [`ContractViolation`] payload when no value is present.
    #[track_caller]
    fn value(&self) -> &Self::Value {
        match self.try_value() {
            Ok(value) => value,
            Err(violation) => violation.raise(),
        }
    }

    /// Borrows the error.
    ///
    /// # Panics
    ///
    /// Panics with a [`ContractViolation`] payload unless the container failed.
    #[track_caller]
    fn error(&self) -> &Error {
        match self.try_error() {
            Ok(error) => error,
            Err(violation) => violation.raise(),
        }
    }

    #[track_caller]
    fn into_value(self) -> Self::Value {
        match self.try_into_value() {
            Ok(value) => value,
            Err(violation) => violation.raise(),
        }
    }

    #[track_caller]
    fn into_error(self) -> Error {
        match self.try_into_error() {
            Ok(error) => error,
            Err(violation) => violation.raise(),
        }
    }
}

#[inline]
fn not_success(actual: ResultState) -> ContractViolation {
    ContractViolation::invalid_state(ResultState::Success.as_str(), actual.as_str())
}

#[inline]
fn not_fail(actual: ResultState) -> ContractViolation {
    ContractViolation::invalid_state(ResultState::Fail.as_str(), actual.as_str())
}

#[inline]
fn not_some(actual: MaybeState) -> ContractViolation {
    ContractViolation::invalid_state(MaybeState::Some.as_str(), actual.as_str())
}

#[inline]
fn not_maybe_fail(actual: MaybeState) -> ContractViolation {
    ContractViolation::invalid_state(MaybeState::Fail.as_str(), actual.as_str())
}

impl Unchecked for Outcome {
    type Value = Unit;

    fn try_value(&self) -> Result<&Unit, ContractViolation> {
        match self {
            Outcome::Success => Ok(&UNIT),
            Outcome::Fail(_) => Err(not_success(ResultState::Fail)),
        }
    }

    fn try_error(&self) -> Result<&Error, ContractViolation> {
        match self {
            Outcome::Fail(error) => Ok(error),
            Outcome::Success => Err(not_fail(ResultState::Success)),
        }
    }

    fn try_into_value(self) -> Result<Unit, ContractViolation> {
        self.try_value().map(|_| Unit)
    }

    fn try_into_error(self) -> Result<Error, ContractViolation> {
        match self {
            Outcome::Fail(error) => Ok(error),
            Outcome::Success => Err(not_fail(ResultState::Success)),
        }
    }
}

impl<T> Unchecked for Fallible<T> {
    type Value = T;

    fn try_value(&self) -> Result<&T, ContractViolation> {
        match self {
            Fallible::Success(value) => Ok(value),
            Fallible::Fail(_) => Err(not_success(ResultState::Fail)),
        }
    }

    fn try_error(&self) -> Result<&Error, ContractViolation> {
        match self {
            Fallible::Fail(error) => Ok(error),
            Fallible::Success(_) => Err(not_fail(ResultState::Success)),
        }
    }

    fn try_into_value(self) -> Result<T, ContractViolation> {
        match self {
            Fallible::Success(value) => Ok(value),
            Fallible::Fail(_) => Err(not_success(ResultState::Fail)),
        }
    }

    fn try_into_error(self) -> Result<Error, ContractViolation> {
        match self {
            Fallible::Fail(error) => Ok(error),
            Fallible::Success(_) => Err(not_fail(ResultState::Success)),
        }
    }
}

impl<T> Unchecked for Maybe<T> {
    type Value = T;

    fn try_value(&self) -> Result<&T, ContractViolation> {
        match self {
            Maybe::Some(value) => Ok(value),
            other => Err(not_some(other.state())),
        }
    }

    fn try_error(&self) -> Result<&Error, ContractViolation> {
        match self {
            Maybe::Fail(error) => Ok(error),
            other => Err(not_maybe_fail(other.state())),
        }
    }

    fn try_into_value(self) -> Result<T, ContractViolation> {
        let actual = self.state();
        match self {
            Maybe::Some(value) => Ok(value),
            _ => Err(not_some(actual)),
        }
    }

    fn try_into_error(self) -> Result<Error, ContractViolation> {
        let actual = self.state();
        match self {
            Maybe::Fail(error) => Ok(error),
            _ => Err(not_maybe_fail(actual)),
        }
    }
}
