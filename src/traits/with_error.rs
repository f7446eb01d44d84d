use crate::types::Error;

/// Abstraction over containers that carry a `Fail(Error)` branch which can be
/// remapped or observed.
///
/// Every container in this crate implements it by delegating to its inherent
/// methods; the trait exists for code that is generic over the container
/// kind, such as the future adapters in `async_ext` and the span helpers in
/// `tracing_ext`.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::WithError;
/// use outcome_rail::{Error, Fallible, Maybe};
///
/// fn tag<C: WithError>(container: C) -> C {
///     container.with_error(|error| error.with_identifier("billing"))
/// }
///
/// let failed: Fallible<u8> = tag(Fallible::fail(Error::new("declined")));
/// assert_eq!(failed.err().unwrap().identifier(), Some("billing"));
///
/// let none: Maybe<u8> = tag(Maybe::none());
/// assert!(none.is_none());
/// ```
pub trait WithError: Sized {
    /// Maps the error of a failure, leaving every other branch untouched.
    fn with_error<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Error;

    /// Invokes `f` with the error of a failure and returns `self` unchanged.
    fn on_fail<F>(self, f: F) -> Self
    where
        F: FnOnce(&Error);

    /// Borrows the error of a failure.
    fn error_ref(&self) -> Option<&Error>;
}
