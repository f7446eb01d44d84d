//! Programmer contract violations.
//!
//! These are bugs in the calling code, not business failures, so they never
//! travel through a `Fail` branch. Unchecked accessors raise them as a panic
//! whose payload is a [`ContractViolation`]; fallible constructors such as
//! [`Error::composite`](crate::Error::composite) return them as `Err`.

use core::fmt::{self, Display};

/// A breach of the library's usage contract.
///
/// # Examples
///
/// ```
/// use outcome_rail::unchecked::Unchecked;
/// use outcome_rail::{ContractViolation, Error, Fallible};
///
/// let failed: Fallible<i32> = Fallible::fail(Error::new("boom"));
/// let violation = failed.try_value().unwrap_err();
/// assert!(matches!(violation, ContractViolation::InvalidState { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// A branch-specific accessor was used on a container in another branch.
    InvalidState { expected: &'static str, actual: &'static str },
    /// An argument lies outside the range the operation accepts.
    ArgumentOutOfRange { argument: &'static str, reason: String },
}

impl ContractViolation {
    #[inline]
    pub(crate) fn invalid_state(expected: &'static str, actual: &'static str) -> Self {
        Self::InvalidState { expected, actual }
    }

    #[inline]
    pub(crate) fn out_of_range(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::ArgumentOutOfRange { argument, reason: reason.into() }
    }

    /// Panics with `self` as the payload so callers can downcast it.
    #[cold]
    #[track_caller]
    pub fn raise(self) -> ! {
        std::panic::panic_any(self)
    }
}

impl Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState { expected, actual } => {
                write!(f, "invalid state: expected {expected}, but the container is {actual}")
            },
            Self::ArgumentOutOfRange { argument, reason } => {
                write!(f, "argument `{argument}` out of range: {reason}")
            },
        }
    }
}

impl std::error::Error for ContractViolation {}
