//! Process-wide settings consulted when containers build default errors.
//!
//! One [`Settings`] value holds the default error message, the absence error
//! used when a `Maybe::None` is narrowed into a `Fallible`, and an optional
//! observer invoked whenever a factory creates a `Fail`.
//!
//! The active value lives behind an [`ArcSwap`]: reads are lock-free and
//! never block, writes replace the whole snapshot (last writer wins). A write
//! racing with a construction on another thread is observed by that
//! construction either entirely or not at all.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{settings, Fallible};
//!
//! settings::set_default_message("request failed").unwrap();
//! let failed: Fallible<u8> = Fallible::fail_default();
//! assert_eq!(failed.err().unwrap().message(), "request failed");
//!
//! settings::reset();
//! ```

use crate::types::{ContractViolation, Error};
use arc_swap::ArcSwap;
use core::cell::Cell;
use core::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, LazyLock};

/// Default message used until one is configured.
pub const DEFAULT_MESSAGE: &str = "An unexpected error occurred.";

/// Callback notified about every `Fail` created through a factory.
pub type FailObserver = Arc<dyn Fn(&Error) + Send + Sync>;

thread_local! {
    static IN_OBSERVER: Cell<bool> = const { Cell::new(false) };
}

static SETTINGS: LazyLock<ArcSwap<Settings>> =
    LazyLock::new(|| ArcSwap::from_pointee(Settings::default()));

/// Snapshot of the process-wide configuration.
#[derive(Clone)]
pub struct Settings {
    default_message: String,
    absent_error: Error,
    fail_observer: Option<FailObserver>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_message: DEFAULT_MESSAGE.into(),
            absent_error: Error::absent(),
            fail_observer: None,
        }
    }
}

impl Settings {
    /// Replaces the default message.
    ///
    /// # Errors
    ///
    /// Rejects an empty (or whitespace-only) message.
    pub fn with_default_message(
        mut self,
        message: impl Into<String>,
    ) -> Result<Self, ContractViolation> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ContractViolation::out_of_range(
                "message",
                "the default message must not be empty",
            ));
        }
        self.default_message = message;
        Ok(self)
    }

    pub fn with_absent_error(mut self, error: Error) -> Self {
        self.absent_error = error;
        self
    }

    pub fn with_fail_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&Error) + Send + Sync + 'static,
    {
        self.fail_observer = Some(Arc::new(observer));
        self
    }

    pub fn without_fail_observer(mut self) -> Self {
        self.fail_observer = None;
        self
    }

    #[inline]
    pub fn default_message(&self) -> &str {
        &self.default_message
    }

    #[inline]
    pub fn absent_error(&self) -> &Error {
        &self.absent_error
    }

    #[inline]
    pub fn has_fail_observer(&self) -> bool {
        self.fail_observer.is_some()
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("default_message", &self.default_message)
            .field("absent_error", &self.absent_error)
            .field("fail_observer", &self.fail_observer.as_ref().map(|_| "<observer>"))
            .finish()
    }
}

/// Returns the active settings snapshot.
#[inline]
pub fn current() -> Arc<Settings> {
    SETTINGS.load_full()
}

/// Replaces the active settings.
pub fn install(settings: Settings) {
    SETTINGS.store(Arc::new(settings));
}

/// Restores the built-in defaults.
pub fn reset() {
    install(Settings::default());
}

fn update(apply: impl Fn(&Settings) -> Settings) {
    SETTINGS.rcu(|current| apply(current.as_ref()));
}

/// Sets the default message used by [`Error::default`] and `fail_default`.
///
/// # Errors
///
/// Rejects an empty (or whitespace-only) message and leaves the active
/// settings untouched.
pub fn set_default_message(message: impl Into<String>) -> Result<(), ContractViolation> {
    let validated = Settings::default().with_default_message(message)?.default_message;
    update(|current| Settings { default_message: validated.clone(), ..current.clone() });
    Ok(())
}

/// Sets the error produced when a `None` is narrowed without a handler.
pub fn set_absent_error(error: Error) {
    update(|current| current.clone().with_absent_error(error.clone()));
}

/// Installs the observer called for every factory-created `Fail`.
///
/// Failures the observer creates while it runs on the same thread are not
/// reported to it again.
pub fn set_fail_observer<F>(observer: F)
where
    F: Fn(&Error) + Send + Sync + 'static,
{
    let observer: FailObserver = Arc::new(observer);
    update(|current| Settings { fail_observer: Some(Arc::clone(&observer)), ..current.clone() });
}

pub fn clear_fail_observer() {
    update(|current| current.clone().without_fail_observer());
}

/// The current default message.
pub fn default_message() -> String {
    SETTINGS.load().default_message.clone()
}

/// A fresh error carrying the current default message.
#[inline]
pub fn default_error() -> Error {
    Error::default()
}

/// The current absence error.
pub fn absent_error() -> Error {
    SETTINGS.load().absent_error.clone()
}

/// Notifies the observer (and the `tracing` subscriber when enabled) that a
/// `Fail` was created. Panics raised by the observer are swallowed.
///
/// Failures created by the observer itself are not reported back to it.
pub(crate) fn notify_fail_created(error: &Error) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        title = error.title(),
        message = error.message(),
        code = error.error_code(),
        "fail created"
    );

    if IN_OBSERVER.with(Cell::get) {
        return;
    }

    let observer = SETTINGS.load().fail_observer.clone();
    if let Some(observer) = observer {
        IN_OBSERVER.with(|flag| flag.set(true));
        let _ = panic::catch_unwind(AssertUnwindSafe(|| observer(error)));
        IN_OBSERVER.with(|flag| flag.set(false));
    }
}
