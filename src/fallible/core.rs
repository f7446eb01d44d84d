use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::settings;
use crate::types::{Error, ResultState};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of an operation that produces exactly one of a value or an error.
///
/// Unlike `std::result::Result`, the error type is fixed to [`Error`] and the
/// combinator vocabulary is shared with [`Outcome`] and [`Maybe`].
///
/// # Type Parameters
///
/// * `T` - The success value type
///
/// # Variants
///
/// * `Success(T)` - Contains the value
/// * `Fail(Error)` - Contains the error
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, Fallible};
///
/// let doubled = Fallible::success(5).map(|x| x * 2);
/// assert_eq!(doubled, Fallible::success(10));
///
/// let recovered = Fallible::<i32>::fail(Error::new("boom")).otherwise(Fallible::success(7));
/// assert_eq!(recovered, Fallible::success(7));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fallible<T> {
    Success(T),
    Fail(Error),
}

impl<T> Fallible<T> {
    /// Creates a successful container.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed container and notifies the fail observer.
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

    /// `Some` becomes a success; `None` fails with the absence error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Fallible;
    ///
    /// assert!(Fallible::from_value(Some(1)).is_success());
    /// assert!(Fallible::<i32>::from_value(None).err().unwrap().is_absence());
    /// ```
    #[inline]
    pub fn from_value(value: Option<T>) -> Self {
        Self::from_value_or_else(value, settings::absent_error)
    }

    /// `Some` becomes a success; `None` fails with the error produced by `f`.
    #[inline]
    pub fn from_value_or_else<F>(value: Option<T>, f: F) -> Self
    where
        F: FnOnce() -> Error,
    {
        match value {
            Some(value) => Self::Success(value),
            None => Self::fail(f()),
        }
    }

    /// Adapts a standard `Result`, translating the error with
    /// [`Error::from_std_error`].
    pub fn from_std_result<E>(result: Result<T, E>) -> Self
    where
        E: std::error::Error + 'static,
    {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::fail(Error::from_std_error(&error)),
        }
    }

    #[inline]
    pub fn state(&self) -> ResultState {
        match self {
            Self::Success(_) => ResultState::Success,
            Self::Fail(_) => ResultState::Fail,
        }
    }

    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    #[inline]
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    /// Extracts the value, if successful.
    #[must_use]
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Fail(_) => None,
        }
    }

    /// Extracts the error, if failed.
    #[must_use]
    #[inline]
    pub fn err(self) -> Option<Error> {
        match self {
            Self::Success(_) => None,
            Self::Fail(error) => Some(error),
        }
    }

    #[must_use]
    #[inline]
    pub fn error_ref(&self) -> Option<&Error> {
        match self {
            Self::Success(_) => None,
            Self::Fail(error) => Some(error),
        }
    }

    /// Borrows the payload, cloning the error of a failure.
    #[inline]
    pub fn as_ref(&self) -> Fallible<&T> {
        match self {
            Self::Success(value) => Fallible::Success(value),
            Self::Fail(error) => Fallible::Fail(error.clone()),
        }
    }

    /// Maps the value of a success; a failure propagates unchanged.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Fallible<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Fallible::Success(f(value)),
            Self::Fail(error) => Fallible::Fail(error),
        }
    }

    /// Chains a step that may fail. `f` is never called on a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Fallible};
    ///
    /// fn parse_even(input: i32) -> Fallible<i32> {
    ///     if input % 2 == 0 {
    ///         Fallible::success(input)
    ///     } else {
    ///         Fallible::fail(Error::new("not even"))
    ///     }
    /// }
    ///
    /// assert_eq!(Fallible::success(4).then(parse_even), Fallible::success(4));
    /// assert!(Fallible::success(3).then(parse_even).is_fail());
    /// ```
    #[inline]
    pub fn then<U, F>(self, f: F) -> Fallible<U>
    where
        F: FnOnce(T) -> Fallible<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Fail(error) => Fallible::Fail(error),
        }
    }

    /// Alias of [`then`](Self::then).
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Fallible<U>
    where
        F: FnOnce(T) -> Fallible<U>,
    {
        self.then(f)
    }

    /// Chains a value-less step.
    #[inline]
    pub fn then_outcome<F>(self, f: F) -> Outcome
    where
        F: FnOnce(T) -> Outcome,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Fail(error) => Outcome::Fail(error),
        }
    }

    /// Replaces a failure with `fallback`; success is returned unchanged.
    #[inline]
    pub fn otherwise(self, fallback: Fallible<T>) -> Fallible<T> {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Fail(_) => fallback,
        }
    }

    /// Recovers from a failure by calling `f` with the error.
    #[inline]
    pub fn otherwise_with<F>(self, f: F) -> Fallible<T>
    where
        F: FnOnce(Error) -> Fallible<T>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Fail(error) => f(error),
        }
    }

    /// Turns a failure into a success holding `fallback`.
    #[inline]
    pub fn or(self, fallback: T) -> Fallible<T> {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Fail(_) => Self::Success(fallback),
        }
    }

    /// Turns a failure into a success holding the value computed from the error.
    #[inline]
    pub fn or_with<F>(self, f: F) -> Fallible<T>
    where
        F: FnOnce(Error) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Fail(error) => Self::Success(f(error)),
        }
    }

    /// Returns the value or `fallback`.
    #[must_use]
    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Fail(_) => fallback,
        }
    }

    /// Returns the value or computes one from the error.
    #[must_use]
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Error) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Fail(error) => f(error),
        }
    }

    /// Remaps the error of a failure.
    #[inline]
    pub fn with_error<F>(self, f: F) -> Fallible<T>
    where
        F: FnOnce(Error) -> Error,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Fail(error) => Self::Fail(f(error)),
        }
    }

    #[inline]
    pub fn on_success<F>(self, f: F) -> Fallible<T>
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    #[inline]
    pub fn on_fail<F>(self, f: F) -> Fallible<T>
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
        S: FnOnce(T) -> R,
        F: FnOnce(Error) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Fail(error) => on_fail(error),
        }
    }

    /// Widens into a [`Maybe`]: `Success` becomes `Some`, `Fail` stays `Fail`.
    /// Never produces `None`.
    #[inline]
    pub fn into_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Fail(error) => Maybe::Fail(error),
        }
    }

    /// Discards the value.
    #[inline]
    pub fn into_outcome(self) -> Outcome {
        match self {
            Self::Success(_) => Outcome::Success,
            Self::Fail(error) => Outcome::Fail(error),
        }
    }

    #[inline]
    pub fn into_std_result(self) -> Result<T, Error> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Fail(error) => Err(error),
        }
    }

    /// Iterates over the value of a success.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        match self {
            Self::Success(value) => Some(value).into_iter(),
            Self::Fail(_) => None.into_iter(),
        }
    }
}

impl<T> Fallible<Fallible<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Fallible<T> {
        self.then(|inner| inner)
    }
}
