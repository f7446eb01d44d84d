use crate::fallible::Fallible;
use crate::settings;
use crate::types::{Error, MaybeState};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of an operation that produces a value, nothing, or an error.
///
/// `None` is a deliberate absence, not a failure: combinators propagate it
/// separately from `Fail`, and [`filter`](Maybe::filter) only ever produces
/// `None`.
///
/// # Type Parameters
///
/// * `T` - The value type
///
/// # Variants
///
/// * `Some(T)` - A value is present
/// * `None` - No value, and nothing went wrong
/// * `Fail(Error)` - The operation failed
///
/// # Examples
///
/// ```
/// use outcome_rail::Maybe;
///
/// let short = Maybe::some("ok").filter(|s| s.len() > 5);
/// assert!(short.is_none());
///
/// let greeting = Maybe::<&str>::none().or("hello");
/// assert_eq!(greeting, Maybe::some("hello"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    Some(T),
    None,
    Fail(Error),
}

impl<T> Maybe<T> {
    /// Creates a container holding `value`.
    #[inline]
    pub fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an empty container.
    #[inline]
    pub fn none() -> Self {
        Self::None
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

    /// `Some` becomes `Some`, `None` becomes `None`.
    #[inline]
    pub fn from_value(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    /// Widens a [`Fallible`]; see [`Fallible::into_maybe`].
    #[inline]
    pub fn from_fallible(fallible: Fallible<T>) -> Self {
        fallible.into_maybe()
    }

    #[inline]
    pub fn state(&self) -> MaybeState {
        match self {
            Self::Some(_) => MaybeState::Some,
            Self::None => MaybeState::None,
            Self::Fail(_) => MaybeState::Fail,
        }
    }

    #[must_use]
    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    #[must_use]
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[must_use]
    #[inline]
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    /// Extracts the value; `None` and `Fail` both yield `Option::None`.
    #[must_use]
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None | Self::Fail(_) => None,
        }
    }

    /// Extracts the error, if failed.
    #[must_use]
    #[inline]
    pub fn err(self) -> Option<Error> {
        match self {
            Self::Fail(error) => Some(error),
            Self::Some(_) | Self::None => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn error_ref(&self) -> Option<&Error> {
        match self {
            Self::Fail(error) => Some(error),
            Self::Some(_) | Self::None => None,
        }
    }

    /// Borrows the payload, cloning the error of a failure.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
            Self::Fail(error) => Maybe::Fail(error.clone()),
        }
    }

    /// Maps a present value; `None` and `Fail` propagate unchanged.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(f(value)),
            Self::None => Maybe::None,
            Self::Fail(error) => Maybe::Fail(error),
        }
    }

    /// Chains a step on a present value. `f` is never called on `None` or
    /// `Fail`.
    #[inline]
    pub fn then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => f(value),
            Self::None => Maybe::None,
            Self::Fail(error) => Maybe::Fail(error),
        }
    }

    /// Alias of [`then`](Self::then).
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.then(f)
    }

    /// Keeps a present value only when `predicate` holds, otherwise `None`.
    /// Never produces a failure.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            },
            other => other,
        }
    }

    /// Replaces `None` or a failure with `fallback`.
    #[inline]
    pub fn otherwise(self, fallback: Maybe<T>) -> Maybe<T> {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None | Self::Fail(_) => fallback,
        }
    }

    /// Replaces `None` or a failure with the container produced by `f`.
    ///
    /// `f` receives the error of a failure, or `None` when the container was
    /// empty.
    #[inline]
    pub fn otherwise_with<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce(Option<Error>) -> Maybe<T>,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => f(None),
            Self::Fail(error) => f(Some(error)),
        }
    }

    /// Turns `None` or a failure into `Some(fallback)`.
    #[inline]
    pub fn or(self, fallback: T) -> Maybe<T> {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None | Self::Fail(_) => Self::Some(fallback),
        }
    }

    #[inline]
    pub fn or_with<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None | Self::Fail(_) => Self::Some(f()),
        }
    }

    /// Returns the value or `fallback`.
    #[must_use]
    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None | Self::Fail(_) => fallback,
        }
    }

    #[must_use]
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None | Self::Fail(_) => f(),
        }
    }

    /// Remaps the error of a failure; `Some` and `None` are untouched.
    #[inline]
    pub fn with_error<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce(Error) -> Error,
    {
        match self {
            Self::Fail(error) => Self::Fail(f(error)),
            other => other,
        }
    }

    #[inline]
    pub fn on_some<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            f(value);
        }
        self
    }

    #[inline]
    pub fn on_none<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce(),
    {
        if let Self::None = self {
            f();
        }
        self
    }

    #[inline]
    pub fn on_fail<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce(&Error),
    {
        if let Self::Fail(error) = &self {
            f(error);
        }
        self
    }

    /// Folds the three branches into a single value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// let describe = |m: Maybe<u8>| {
    ///     m.match_with(|v| format!("got {v}"), || "empty".into(), |e| e.message().into())
    /// };
    /// assert_eq!(describe(Maybe::some(1)), "got 1");
    /// assert_eq!(describe(Maybe::none()), "empty");
    /// ```
    #[inline]
    pub fn match_with<R, S, N, F>(self, on_some: S, on_none: N, on_fail: F) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
        F: FnOnce(Error) -> R,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
            Self::Fail(error) => on_fail(error),
        }
    }

    /// Narrows into a [`Fallible`], turning `None` into a failure carrying the
    /// configured absence error (code [`NONE_ERROR_CODE`](crate::NONE_ERROR_CODE)
    /// unless reconfigured).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// let narrowed = Maybe::<i32>::none().into_fallible();
    /// assert!(narrowed.err().unwrap().is_absence());
    /// ```
    #[inline]
    pub fn into_fallible(self) -> Fallible<T> {
        self.into_fallible_with(settings::absent_error)
    }

    /// Narrows into a [`Fallible`], turning `None` into a failure carrying the
    /// error produced by `on_none`.
    #[inline]
    pub fn into_fallible_with<F>(self, on_none: F) -> Fallible<T>
    where
        F: FnOnce() -> Error,
    {
        match self {
            Self::Some(value) => Fallible::Success(value),
            Self::None => Fallible::fail(on_none()),
            Self::Fail(error) => Fallible::Fail(error),
        }
    }

    /// Converts into a standard `Result`, with `None` as `Ok(None)`.
    #[inline]
    pub fn into_std_result(self) -> Result<Option<T>, Error> {
        match self {
            Self::Some(value) => Ok(Some(value)),
            Self::None => Ok(None),
            Self::Fail(error) => Err(error),
        }
    }

    /// Iterates over a present value.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        match self {
            Self::Some(value) => Some(value).into_iter(),
            Self::None | Self::Fail(_) => None.into_iter(),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.then(|inner| inner)
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}
