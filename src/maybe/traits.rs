use crate::maybe::core::Maybe;
use crate::traits::{ErrorCategory, MapValue, WithError};
use crate::types::Error;

impl<T> WithError for Maybe<T> {
    #[inline]
    fn with_error<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Error,
    {
        Maybe::with_error(self, f)
    }

    #[inline]
    fn on_fail<F>(self, f: F) -> Self
    where
        F: FnOnce(&Error),
    {
        Maybe::on_fail(self, f)
    }

    #[inline]
    fn error_ref(&self) -> Option<&Error> {
        Maybe::error_ref(self)
    }
}

impl<T> ErrorCategory for Maybe<T> {
    #[inline]
    fn handle_error(error: Error) -> Self {
        Maybe::fail(error)
    }

    #[inline]
    fn is_failure(&self) -> bool {
        self.is_fail()
    }
}

impl<T> MapValue for Maybe<T> {
    type Value = T;
    type Output<U> = Maybe<U>;

    #[inline]
    fn map_value<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }
}
