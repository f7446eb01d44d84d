use crate::outcome::core::Outcome;
use crate::traits::{ErrorCategory, WithError};
use crate::types::Error;

impl WithError for Outcome {
    #[inline]
    fn with_error<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Error,
    {
        Outcome::with_error(self, f)
    }

    #[inline]
    fn on_fail<F>(self, f: F) -> Self
    where
        F: FnOnce(&Error),
    {
        Outcome::on_fail(self, f)
    }

    #[inline]
    fn error_ref(&self) -> Option<&Error> {
        Outcome::error_ref(self)
    }
}

impl ErrorCategory for Outcome {
    #[inline]
    fn handle_error(error: Error) -> Self {
        Outcome::fail(error)
    }

    #[inline]
    fn is_failure(&self) -> bool {
        self.is_fail()
    }
}
