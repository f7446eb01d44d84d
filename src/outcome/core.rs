use crate::fallible::Fallible;
use crate::maybe::Maybe;
use crate::settings;
use crate::types::{Error, ResultState, Unit};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of an operation that produces no value.
///
/// `Outcome` is either `Success` or `Fail(Error)`. It is a value type: every
/// combinator consumes the container and returns a new one.
///
/// # Variants
///
/// * `Success` - The operation completed
/// * `Fail(Error)` - The operation failed with the given error
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, Outcome};
///
/// fn save(ok: bool) -> Outcome {
///     if ok { Outcome::success() } else { Outcome::fail(Error::new("disk full")) }
/// }
///
/// let message = save(false)
///     .then(|| save(true))
///     .match_with(|| "saved".to_string(), |error| error.message().to_string());
/// assert_eq!(message, "disk full");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    Fail(Error),
}

impl Outcome {
    /// Creates a successful outcome.
    #[inline]
    pub fn success() -> Self {
        Self::Success
    }

    /// Creates a failed outcome and notifies the fail observer.
    #[inline]
    pub fn fail(error: Error) -> Self {
        settings::notify_fail_created(&error);
        Self::Fail(error)
    }

    /// Fails with the process-wide default error.
    #[inline]
    pub fn fail_default() -> Self {
        Self::fail(settings::default_error())
    }

    /// Fails with `error`, substituting the default error for `None`.
    #[inline]
    pub fn fail_or_default(error: Option<Error>) -> Self {
        Self::fail(error.unwrap_or_else(settings::default_error))
    }

    /// Adapts a standard `Result`, translating the error with
    /// [`Error::from_std_error`].
    pub fn from_std_result<T, E>(result: Result<T, E>) -> Self
    where
        E: std::error::Error + 'static,
    {
        match result {
            Ok(_) => Self::Success,
            Err(error) => Self::fail(Error::from_std_error(&error)),
        }
    }

    #[inline]
    pub fn state(&self) -> ResultState {
        match self {
            Self::Success => ResultState::Success,
            Self::Fail(_) => ResultState::Fail,
        }
    }

    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    #[must_use]
    #[inline]
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    /// Extracts the error, if any.
    #[must_use]
    #[inline]
    pub fn err(self) -> Option<Error> {
        match self {
            Self::Success => None,
            Self::Fail(error) => Some(error),
        }
    }

    #[must_use]
    #[inline]
    pub fn error_ref(&self) -> Option<&Error> {
        match self {
            Self::Success => None,
            Self::Fail(error) => Some(error),
        }
    }

    /// Runs `f` on success; a failure propagates unchanged.
    #[inline]
    pub fn then<F>(self, f: F) -> Outcome
    where
        F: FnOnce() -> Outcome,
    {
        match self {
            Self::Success => f(),
            Self::Fail(error) => Self::Fail(error),
        }
    }

    /// Runs a value-producing step on success.
    #[inline]
    pub fn then_fallible<T, F>(self, f: F) -> Fallible<T>
    where
        F: FnOnce() -> Fallible<T>,
    {
        match self {
            Self::Success => f(),
            Self::Fail(error) => Fallible::Fail(error),
        }
    }

    /// Lifts a value into the success branch.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Fallible, Outcome};
    ///
    /// assert_eq!(Outcome::success().map_to(|| 7), Fallible::success(7));
    /// ```
    #[inline]
    pub fn map_to<T, F>(self, f: F) -> Fallible<T>
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success => Fallible::Success(f()),
            Self::Fail(error) => Fallible::Fail(error),
        }
    }

    /// Replaces a failure with `fallback`; success is returned unchanged.
    #[inline]
    pub fn otherwise(self, fallback: Outcome) -> Outcome {
        match self {
            Self::Success => Self::Success,
            Self::Fail(_) => fallback,
        }
    }

    /// Recovers from a failure by calling `f` with the error.
    #[inline]
    pub fn otherwise_with<F>(self, f: F) -> Outcome
    where
        F: FnOnce(Error) -> Outcome,
    {
        match self {
            Self::Success => Self::Success,
            Self::Fail(error) => f(error),
        }
    }

    /// Remaps the error of a failure.
    #[inline]
    pub fn with_error<F>(self, f: F) -> Outcome
    where
        F: FnOnce(Error) -> Error,
    {
        match self {
            Self::Success => Self::Success,
            Self::Fail(error) => Self::Fail(f(error)),
        }
    }

    #[inline]
    pub fn on_success<F>(self, f: F) -> Outcome
    where
        F: FnOnce(),
    {
        if let Self::Success = self {
            f();
        }
        self
    }

    #[inline]
    pub fn on_fail<F>(self, f: F) -> Outcome
    where
        F: FnOnce(&Error),
    {
        if let Self::Fail(error) = &self {
            f(error);
        }
        self
    }

    /// Folds both branches into a single value.
    #[inline]
    pub fn match_with<R, S, F>(self, on_success: S, on_fail: F) -> R
    where
        S: FnOnce() -> R,
        F: FnOnce(Error) -> R,
    {
        match self {
            Self::Success => on_success(),
            Self::Fail(error) => on_fail(error),
        }
    }

    /// Widens into `Fallible<Unit>`.
    #[inline]
    pub fn into_fallible(self) -> Fallible<Unit> {
        self.map_to(|| Unit)
    }

    /// Widens into `Maybe<Unit>`; never produces `None`.
    #[inline]
    pub fn into_maybe(self) -> Maybe<Unit> {
        self.into_fallible().into_maybe()
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_std_result(self) -> Result<(), Error> {
        self.match_with(|| Ok(()), Err)
    }
}

impl Default for Outcome {
    #[inline]
    fn default() -> Self {
        Self::Success
    }
}
