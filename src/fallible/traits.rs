use crate::fallible::core::Fallible;
use crate::traits::{ErrorCategory, MapValue, WithError};
use crate::types::Error;

impl<T> WithError for Fallible<T> {
    #[inline]
    fn with_error<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Error,
    {
        Fallible::with_error(self, f)
    }

    #[inline]
    fn on_fail<F>(self, f: F) -> Self
    where
        F: FnOnce(&Error),
    {
        Fallible::on_fail(self, f)
    }

    #[inline]
    fn error_ref(&self) -> Option<&Error> {
        Fallible::error_ref(self)
    }
}

impl<T> ErrorCategory for Fallible<T> {
    #[inline]
    fn handle_error(error: Error) -> Self {
        Fallible::fail(error)
    }

    #[inline]
    fn is_failure(&self) -> bool {
        self.is_fail()
    }
}

/// Implementation of `MapValue` for `Fallible`.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::MapValue;
/// use outcome_rail::Fallible;
///
/// assert_eq!(Fallible::success(2).map_value(|x| x + 1), Fallible::success(3));
/// ```
impl<T> MapValue for Fallible<T> {
    type Value = T;
    type Output<U> = Fallible<U>;

    #[inline]
    fn map_value<U, F>(self, f: F) -> Fallible<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }
}
