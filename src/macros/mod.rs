//! Ergonomic macros for building and returning failures.
//!
//! - [`macro@crate::rail`] - Converts a standard `Result` whose error implements
//!   `std::error::Error` into a [`Fallible`](crate::Fallible).
//! - [`macro@crate::fail`] - Returns early with a failure of whatever
//!   container the enclosing function returns.
//! - [`macro@crate::ensure`] - Returns early with a failure when a condition
//!   does not hold.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{ensure, fail, rail, Fallible, Outcome};
//!
//! fn parse_port(raw: &str) -> Fallible<u16> {
//!     let port = rail!(raw.parse::<u16>());
//!     port.then(|port| {
//!         ensure!(port >= 1024, "port {} is privileged", port);
//!         Fallible::success(port)
//!     })
//! }
//!
//! fn shutdown(force: bool) -> Outcome {
//!     if !force {
//!         fail!("refusing to shut down without force");
//!     }
//!     Outcome::success()
//! }
//!
//! assert_eq!(parse_port("8080"), Fallible::success(8080));
//! assert!(parse_port("80").is_fail());
//! assert!(shutdown(false).is_fail());
//! ```

/// Converts a `Result`-producing expression into a [`Fallible`](crate::Fallible).
///
/// The error side is translated with
/// [`Error::from_std_error`](crate::Error::from_std_error).
///
/// # Syntax
///
/// - `rail!(expr)` - Wraps a single `Result`-producing expression
/// - `rail!({ ... })` - Wraps a block that produces a `Result`
///
/// # Examples
///
/// ```rust
/// use outcome_rail::rail;
///
/// let parsed = rail!("12".parse::<i32>());
/// assert!(parsed.is_success());
///
/// let missing = rail!({
///     let path = "definitely-missing.toml";
///     std::fs::read_to_string(path)
/// });
/// assert!(missing.is_fail());
/// ```
#[macro_export]
macro_rules! rail {
    ($expr:expr $(,)?) => {
        $crate::Fallible::from_std_result($expr)
    };
}

/// Returns early with a failure built from a format string.
///
/// The failure is produced through [`ErrorCategory`](crate::traits::ErrorCategory),
/// so the macro works in any function returning an [`Outcome`](crate::Outcome),
/// [`Fallible`](crate::Fallible) or [`Maybe`](crate::Maybe). An
/// [`Error`](crate::Error) value can be passed directly with `fail!(error = expr)`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail, Error, Maybe};
///
/// fn find(id: u32) -> Maybe<&'static str> {
///     if id == 0 {
///         fail!(error = Error::new("id must be positive").with_code(400));
///     }
///     Maybe::none()
/// }
///
/// assert_eq!(find(0).err().unwrap().error_code(), Some(400));
/// ```
#[macro_export]
macro_rules! fail {
    (error = $error:expr $(,)?) => {
        return $crate::traits::ErrorCategory::handle_error($error)
    };
    ($($arg:tt)+) => {
        return $crate::traits::ErrorCategory::handle_error($crate::Error::new(format!($($arg)+)))
    };
}

/// Returns early with a failure unless `cond` holds.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ensure, Outcome};
///
/// fn check(balance: i64) -> Outcome {
///     ensure!(balance >= 0, "balance {} is negative", balance);
///     Outcome::success()
/// }
///
/// assert!(check(10).is_success());
/// assert_eq!(check(-1).err().unwrap().message(), "balance -1 is negative");
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, error = $error:expr $(,)?) => {
        if !$cond {
            $crate::fail!(error = $error);
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::fail!($($arg)+);
        }
    };
}
