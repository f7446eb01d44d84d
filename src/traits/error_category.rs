use crate::types::Error;

/// Containers that can be built directly from an [`Error`].
///
/// `handle_error` goes through each container's `fail` factory, so the
/// fail observer is notified. The [`fail!`](crate::fail) and
/// [`ensure!`](crate::ensure) macros rely on it to produce the enclosing
/// function's return type.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::ErrorCategory;
/// use outcome_rail::{Error, Maybe, Outcome};
///
/// let outcome = Outcome::handle_error(Error::new("denied"));
/// assert!(outcome.is_fail());
///
/// let maybe: Maybe<i32> = ErrorCategory::handle_error(Error::new("denied"));
/// assert!(maybe.is_fail());
/// ```
pub trait ErrorCategory: Sized {
    fn handle_error(error: Error) -> Self;

    fn is_failure(&self) -> bool;
}
