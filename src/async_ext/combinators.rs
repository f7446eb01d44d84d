//! Asynchronous counterparts of the container combinators.
//!
//! Each method selects its branch exactly like the synchronous version and
//! awaits only the callback of the matching branch. Callbacks that observe a
//! borrowed payload (`on_*_async`, `filter_async`) receive the reference
//! synchronously and return a future that must not borrow it.

use core::future::Future;

use crate::fallible::Fallible;
use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::types::Error;

impl Outcome {
    /// Runs the step returned by `f` on success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::Outcome;
    ///
    /// # async fn demo() {
    /// let chained = Outcome::success().then_async(|| async { Outcome::success() }).await;
    /// assert!(chained.is_success());
    /// # }
    /// ```
    pub async fn then_async<F, Fut>(self, f: F) -> Outcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome>,
    {
        match self {
            Self::Success => f().await,
            Self::Fail(error) => Self::Fail(error),
        }
    }

    pub async fn then_fallible_async<T, F, Fut>(self, f: F) -> Fallible<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Fallible<T>>,
    {
        match self {
            Self::Success => f().await,
            Self::Fail(error) => Fallible::Fail(error),
        }
    }

    pub async fn map_to_async<T, F, Fut>(self, f: F) -> Fallible<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Self::Success => Fallible::Success(f().await),
            Self::Fail(error) => Fallible::Fail(error),
        }
    }

    pub async fn otherwise_with_async<F, Fut>(self, f: F) -> Outcome
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Outcome>,
    {
        match self {
            Self::Success => Self::Success,
            Self::Fail(error) => f(error).await,
        }
    }

    pub async fn with_error_async<F, Fut>(self, f: F) -> Outcome
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Error>,
    {
        match self {
            Self::Success => Self::Success,
            Self::Fail(error) => Self::Fail(f(error).await),
        }
    }

    pub async fn on_success_async<F, Fut>(self, f: F) -> Outcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Success = self {
            f().await;
        }
        self
    }

    pub async fn on_fail_async<F, Fut>(self, f: F) -> Outcome
    where
        F: FnOnce(&Error) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Fail(error) = &self {
            f(error).await;
        }
        self
    }

    pub async fn match_with_async<R, S, SFut, F, FFut>(self, on_success: S, on_fail: F) -> R
    where
        S: FnOnce() -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Error) -> FFut,
        FFut: Future<Output = R>,
    {
        match self {
            Self::Success => on_success().await,
            Self::Fail(error) => on_fail(error).await,
        }
    }
}

impl<T> Fallible<T> {
    /// Maps the value of a success with an asynchronous function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::Fallible;
    ///
    /// # async fn demo() {
    /// let len = Fallible::success("four").map_async(|s| async move { s.len() }).await;
    /// assert_eq!(len, Fallible::success(4));
    /// # }
    /// ```
    pub async fn map_async<U, F, Fut>(self, f: F) -> Fallible<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => Fallible::Success(f(value).await),
            Self::Fail(error) => Fallible::Fail(error),
        }
    }

    pub async fn then_async<U, F, Fut>(self, f: F) -> Fallible<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Fallible<U>>,
    {
        match self {
            Self::Success(value) => f(value).await,
            Self::Fail(error) => Fallible::Fail(error),
        }
    }

    /// Runs a value-less step on success, yielding an [`Outcome`].
    pub async fn then_outcome_async<F, Fut>(self, f: F) -> Outcome
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome>,
    {
        match self {
            Self::Success(value) => f(value).await,
            Self::Fail(error) => Outcome::Fail(error),
        }
    }

    pub async fn otherwise_with_async<F, Fut>(self, f: F) -> Fallible<T>
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Fallible<T>>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Fail(error) => f(error).await,
        }
    }

    pub async fn or_with_async<F, Fut>(self, f: F) -> Fallible<T>
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Fail(error) => Self::Success(f(error).await),
        }
    }

    pub async fn value_or_else_async<F, Fut>(self, f: F) -> T
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Self::Success(value) => value,
            Self::Fail(error) => f(error).await,
        }
    }

    pub async fn with_error_async<F, Fut>(self, f: F) -> Fallible<T>
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Error>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Fail(error) => Self::Fail(f(error).await),
        }
    }

    pub async fn on_success_async<F, Fut>(self, f: F) -> Fallible<T>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Success(value) = &self {
            f(value).await;
        }
        self
    }

    pub async fn on_fail_async<F, Fut>(self, f: F) -> Fallible<T>
    where
        F: FnOnce(&Error) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Fail(error) = &self {
            f(error).await;
        }
        self
    }

    pub async fn match_with_async<R, S, SFut, F, FFut>(self, on_success: S, on_fail: F) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Error) -> FFut,
        FFut: Future<Output = R>,
    {
        match self {
            Self::Success(value) => on_success(value).await,
            Self::Fail(error) => on_fail(error).await,
        }
    }
}

impl<T> Maybe<T> {
    pub async fn map_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Some(value) => Maybe::Some(f(value).await),
            Self::None => Maybe::None,
            Self::Fail(error) => Maybe::Fail(error),
        }
    }

    pub async fn then_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        match self {
            Self::Some(value) => f(value).await,
            Self::None => Maybe::None,
            Self::Fail(error) => Maybe::Fail(error),
        }
    }

    /// Keeps a present value only when the asynchronous predicate holds.
    ///
    /// Like [`filter`](Maybe::filter), this never produces a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::Maybe;
    ///
    /// # async fn demo() {
    /// let kept = Maybe::some(10).filter_async(|v| { let v = *v; async move { v > 5 } }).await;
    /// assert_eq!(kept, Maybe::some(10));
    /// # }
    /// ```
    pub async fn filter_async<P, Fut>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value).await {
                    Self::Some(value)
                } else {
                    Self::None
                }
            },
            other => other,
        }
    }

    /// `f` receives the error of a failure, or `None` for an empty container.
    pub async fn otherwise_with_async<F, Fut>(self, f: F) -> Maybe<T>
    where
        F: FnOnce(Option<Error>) -> Fut,
        Fut: Future<Output = Maybe<T>>,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => f(None).await,
            Self::Fail(error) => f(Some(error)).await,
        }
    }

    pub async fn or_with_async<F, Fut>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None | Self::Fail(_) => Self::Some(f().await),
        }
    }

    pub async fn value_or_else_async<F, Fut>(self, f: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Self::Some(value) => value,
            Self::None | Self::Fail(_) => f().await,
        }
    }

    pub async fn with_error_async<F, Fut>(self, f: F) -> Maybe<T>
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Error>,
    {
        match self {
            Self::Fail(error) => Self::Fail(f(error).await),
            other => other,
        }
    }

    pub async fn on_some_async<F, Fut>(self, f: F) -> Maybe<T>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Some(value) = &self {
            f(value).await;
        }
        self
    }

    pub async fn on_none_async<F, Fut>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::None = self {
            f().await;
        }
        self
    }

    pub async fn on_fail_async<F, Fut>(self, f: F) -> Maybe<T>
    where
        F: FnOnce(&Error) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Fail(error) = &self {
            f(error).await;
        }
        self
    }

    pub async fn match_with_async<R, S, SFut, N, NFut, F, FFut>(
        self,
        on_some: S,
        on_none: N,
        on_fail: F,
    ) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        N: FnOnce() -> NFut,
        NFut: Future<Output = R>,
        F: FnOnce(Error) -> FFut,
        FFut: Future<Output = R>,
    {
        match self {
            Self::Some(value) => on_some(value).await,
            Self::None => on_none().await,
            Self::Fail(error) => on_fail(error).await,
        }
    }

    /// Narrows into a [`Fallible`], awaiting `on_none` only for `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::{Error, Maybe};
    ///
    /// # async fn demo() {
    /// let narrowed = Maybe::<u32>::none()
    ///     .into_fallible_with_async(|| async { Error::new("user not found").with_code(404) })
    ///     .await;
    /// assert_eq!(narrowed.err().unwrap().error_code(), Some(404));
    /// # }
    /// ```
    pub async fn into_fallible_with_async<F, Fut>(self, on_none: F) -> Fallible<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Error>,
    {
        match self {
            Self::Some(value) => Fallible::Success(value),
            Self::None => Fallible::fail(on_none().await),
            Self::Fail(error) => Fallible::Fail(error),
        }
    }
}
