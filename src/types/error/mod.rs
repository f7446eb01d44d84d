//! Immutable failure descriptor carried by every `Fail` branch.
//!
//! An [`Error`] holds a message, a human title, an optional numeric code and
//! identifier, an optional stack trace and an optional inner error, forming a
//! finite singly-linked chain. Two derived shapes share the same struct:
//!
//! - **composite** errors aggregate two or more child errors
//!   ([`Error::composite`]);
//! - **extended** errors carry an open map of extension properties
//!   ([`Error::extended`], [`Error::with_extension`]).
//!
//! Every builder method consumes `self` and returns a new value; nothing is
//! mutated after construction.

use crate::settings;
use crate::types::{ContractViolation, ErrorVec};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error as StdError;

mod details;
mod traits;

pub use details::{ExtensionValue, FromExtension};

/// Error code reserved for the absence error used when a `Maybe::None` is
/// narrowed into a `Fallible`.
pub const NONE_ERROR_CODE: i32 = -1;

/// Error code reserved for cancellation.
pub const CANCELED_ERROR_CODE: i32 = -2;

pub(crate) const DEFAULT_TITLE: &str = "Error";
const COMPOSITE_TITLE: &str = "CompositeError";
const EXTENDED_TITLE: &str = "ExtendedError";
const ABSENT_TITLE: &str = "NoneError";
const CANCELED_TITLE: &str = "CanceledError";

const ABSENT_MESSAGE: &str = "No value was present.";
const CANCELED_MESSAGE: &str = "The operation was canceled.";

/// Failure descriptor: message, title, code, identifier and inner error.
///
/// # Examples
///
/// ```
/// use outcome_rail::Error;
///
/// let err = Error::new("user not found").with_code(404).with_identifier("users.lookup");
///
/// assert_eq!(err.message(), "user not found");
/// assert_eq!(err.title(), "Error");
/// assert_eq!(err.try_get::<i64>("errorCode"), Some(404));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    #[cfg_attr(feature = "serde", serde(default = "settings::default_message"))]
    pub(crate) message: String,
    #[cfg_attr(feature = "serde", serde(default = "default_title"))]
    pub(crate) title: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub(crate) stack_trace: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub(crate) error_code: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub(crate) identifier: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "innerError", default, skip_serializing_if = "Option::is_none")
    )]
    pub(crate) inner: Option<Box<Error>>,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            skip_serializing_if = "Vec::is_empty",
            deserialize_with = "deserialize_children"
        )
    )]
    pub(crate) errors: Vec<Error>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub(crate) extensions: BTreeMap<String, ExtensionValue>,
}

impl Error {
    /// Creates a plain error with the given message and the default title.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_parts(message.into(), DEFAULT_TITLE.into())
    }

    /// Creates an error from an optional message.
    ///
    /// `None` substitutes the process-wide default message current at the time
    /// of the call (see [`settings::default_message`]).
    pub fn from_message_or_default(message: Option<String>) -> Self {
        match message {
            Some(message) => Self::new(message),
            None => Self::default(),
        }
    }

    /// Translates a [`std::error::Error`] into an [`Error`].
    ///
    /// The message is the error's `Display` output and the title its short type
    /// name. A raw OS error code is picked up from [`std::io::Error`] values,
    /// and the `source()` chain becomes the inner error chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
    /// let err = Error::from_std_error(&io);
    ///
    /// assert_eq!(err.title(), "Error");
    /// assert_eq!(err.message(), "config.toml missing");
    /// ```
    pub fn from_std_error<E>(error: &E) -> Self
    where
        E: StdError + 'static,
    {
        Self::translate(error, short_type_name::<E>(), None)
    }

    /// Same as [`from_std_error`](Self::from_std_error) with the message
    /// rendered as `"{prefix}: {message}"`.
    pub fn from_std_error_with_prefix<E>(error: &E, prefix: &str) -> Self
    where
        E: StdError + 'static,
    {
        Self::translate(error, short_type_name::<E>(), Some(prefix))
    }

    /// Translates a type-erased error. The concrete type name is unknown, so
    /// the default title is used.
    pub fn from_dyn_error(error: &(dyn StdError + 'static)) -> Self {
        Self::translate(error, DEFAULT_TITLE.into(), None)
    }

    fn translate(error: &(dyn StdError + 'static), title: String, prefix: Option<&str>) -> Self {
        if let Some(own) = error.downcast_ref::<Error>() {
            let mut own = own.clone();
            if let Some(prefix) = prefix {
                own.message = format!("{prefix}: {}", own.message);
            }
            return own;
        }

        let message = match prefix {
            Some(prefix) => format!("{prefix}: {error}"),
            None => error.to_string(),
        };

        let mut translated = Self::with_parts(message, title);
        translated.error_code =
            error.downcast_ref::<std::io::Error>().and_then(std::io::Error::raw_os_error);
        translated.inner = error.source().map(|source| Box::new(Self::from_dyn_error(source)));
        translated
    }

    /// Aggregates two or more errors into a composite error.
    ///
    /// The generated message counts the children ("Two errors occurred",
    /// "Three errors occurred", ...).
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::ArgumentOutOfRange`] when fewer than two
    /// errors are supplied.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let err = Error::composite([Error::new("a"), Error::new("b")]).unwrap();
    /// assert_eq!(err.errors().len(), 2);
    /// assert!(err.message().contains("Two errors occurred"));
    ///
    /// assert!(Error::composite([Error::new("alone")]).is_err());
    /// ```
    pub fn composite<I>(errors: I) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = Error>,
    {
        let errors: Vec<Error> = errors.into_iter().collect();
        if errors.len() < 2 {
            return Err(ContractViolation::out_of_range(
                "errors",
                format!("a composite error needs at least two errors, got {}", errors.len()),
            ));
        }
        Ok(Self::composite_from_vec(errors))
    }

    /// Returns the lone error unchanged when given exactly one, otherwise
    /// behaves like [`composite`](Self::composite).
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::ArgumentOutOfRange`] for an empty input.
    pub fn composite_or_single<I>(errors: I) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = Error>,
    {
        Self::aggregate(errors.into_iter().collect()).ok_or_else(|| {
            ContractViolation::out_of_range("errors", "at least one error is required")
        })
    }

    /// Folds accumulated errors into one: `None` when empty, the error itself
    /// when alone, a composite otherwise.
    pub(crate) fn aggregate(mut errors: ErrorVec<Error>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::composite_from_vec(errors.into_vec())),
        }
    }

    fn composite_from_vec(errors: Vec<Error>) -> Self {
        let message = composite_message(errors.len());
        let mut composite = Self::with_parts(message, COMPOSITE_TITLE.into());
        composite.errors = errors;
        composite
    }

    /// Creates an error shaped to carry extension properties.
    #[inline]
    pub fn extended(message: impl Into<String>) -> Self {
        Self::with_parts(message.into(), EXTENDED_TITLE.into())
    }

    /// The error used when a `Maybe::None` is narrowed without a handler.
    #[inline]
    pub fn absent() -> Self {
        Self::with_parts(ABSENT_MESSAGE.into(), ABSENT_TITLE.into()).with_code(NONE_ERROR_CODE)
    }

    /// The dedicated error for an operation that was canceled.
    #[inline]
    pub fn canceled() -> Self {
        Self::with_parts(CANCELED_MESSAGE.into(), CANCELED_TITLE.into())
            .with_code(CANCELED_ERROR_CODE)
    }

    #[inline]
    fn with_parts(message: String, title: String) -> Self {
        Self {
            message,
            title,
            stack_trace: None,
            error_code: None,
            identifier: None,
            inner: None,
            errors: Vec::new(),
            extensions: BTreeMap::new(),
        }
    }

    /// Sets (or overrides) the title.
    #[inline]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets (or overrides) the error code.
    #[inline]
    pub fn with_code(mut self, code: i32) -> Self {
        self.error_code = Some(code);
        self
    }

    #[inline]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    #[inline]
    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }

    /// Chains `inner` below this error, replacing any previous inner error.
    #[inline]
    pub fn with_inner(mut self, inner: Error) -> Self {
        self.inner = Some(Box::new(inner));
        self
    }

    /// Adds (or overrides) an extension property.
    ///
    /// Keys naming a core field (see [`RESERVED_KEYS`]) are ignored: they
    /// would collide with that field when serialized and are shadowed by it
    /// in [`try_get`](Self::try_get). Use
    /// [`try_with_extension`](Self::try_with_extension) to have them reported.
    #[inline]
    pub fn with_extension(
        self,
        key: impl Into<String>,
        value: impl Into<ExtensionValue>,
    ) -> Self {
        let key = key.into();
        if is_reserved_key(&key) {
            return self;
        }
        self.insert_extension(key, value.into())
    }

    /// Like [`with_extension`](Self::with_extension), rejecting reserved keys.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::ArgumentOutOfRange`] when `key` names a
    /// core field.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let err = Error::extended("quota").try_with_extension("limit", 10).unwrap();
    /// assert_eq!(err.try_get::<i64>("limit"), Some(10));
    ///
    /// assert!(Error::extended("quota").try_with_extension("message", "x").is_err());
    /// ```
    pub fn try_with_extension(
        self,
        key: impl Into<String>,
        value: impl Into<ExtensionValue>,
    ) -> Result<Self, ContractViolation> {
        let key = key.into();
        if is_reserved_key(&key) {
            return Err(ContractViolation::out_of_range(
                "key",
                format!("`{key}` names a core error field"),
            ));
        }
        Ok(self.insert_extension(key, value.into()))
    }

    #[inline]
    fn insert_extension(mut self, key: String, value: ExtensionValue) -> Self {
        self.extensions.insert(key, value);
        self
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn error_code(&self) -> Option<i32> {
        self.error_code
    }

    #[inline]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    #[inline]
    pub fn stack_trace(&self) -> Option<&str> {
        self.stack_trace.as_deref()
    }

    #[inline]
    pub fn inner(&self) -> Option<&Error> {
        self.inner.as_deref()
    }

    /// Child errors of a composite error; empty for other shapes.
    #[inline]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    #[inline]
    pub fn extensions(&self) -> &BTreeMap<String, ExtensionValue> {
        &self.extensions
    }

    #[inline]
    pub fn is_composite(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether this is the absence error produced by narrowing a `None`.
    #[inline]
    pub fn is_absence(&self) -> bool {
        self.error_code == Some(NONE_ERROR_CODE)
    }

    #[inline]
    pub fn is_canceled(&self) -> bool {
        self.error_code == Some(CANCELED_ERROR_CODE)
    }

    /// Iterates over this error followed by its inner errors, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &Error> {
        core::iter::successors(Some(self), |error| error.inner())
    }

    /// The innermost error of the chain.
    pub fn root_cause(&self) -> &Error {
        let mut current = self;
        while let Some(inner) = current.inner() {
            current = inner;
        }
        current
    }

    /// Keyed lookup over the core fields and then the extension map.
    ///
    /// Core keys are `"message"`, `"title"`, `"errorCode"`, `"identifier"` and
    /// `"stackTrace"`. Returns `None` when the key is missing or the value
    /// does not convert to `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let err = Error::extended("quota exceeded")
    ///     .with_extension("limit", 100)
    ///     .with_extension("tenant", "acme");
    ///
    /// assert_eq!(err.try_get::<i64>("limit"), Some(100));
    /// assert_eq!(err.try_get::<String>("tenant").as_deref(), Some("acme"));
    /// assert_eq!(err.try_get::<bool>("tenant"), None);
    /// assert_eq!(err.try_get::<String>("title").as_deref(), Some("ExtendedError"));
    /// ```
    pub fn try_get<T>(&self, key: &str) -> Option<T>
    where
        T: FromExtension,
    {
        let core = match key {
            "message" => Some(ExtensionValue::from(self.message.as_str())),
            "title" => Some(ExtensionValue::from(self.title.as_str())),
            "errorCode" => self.error_code.map(ExtensionValue::from),
            "identifier" => self.identifier.as_deref().map(ExtensionValue::from),
            "stackTrace" => self.stack_trace.as_deref().map(ExtensionValue::from),
            _ => return self.extensions.get(key).and_then(T::from_extension),
        };
        core.as_ref().and_then(T::from_extension)
    }

    /// Returns a builder for customizing the rendering.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> crate::types::error_formatter::ErrorFormatBuilder<'_> {
        crate::types::error_formatter::ErrorFormatBuilder::new(self)
    }

    /// Formats the error using a closure to configure the builder.
    #[must_use]
    pub fn format_with<F>(&self, f: F) -> String
    where
        F: FnOnce(
            crate::types::error_formatter::ErrorFormatBuilder<'_>,
        ) -> crate::types::error_formatter::ErrorFormatBuilder<'_>,
    {
        f(self.fmt()).to_string()
    }

    /// Returns the compact `outer -> inner -> root` rendering.
    #[must_use]
    pub fn error_chain(&self) -> String {
        use crate::types::error_formatter::{ErrorFormatConfig, ErrorFormatter};

        ErrorFormatConfig::default().format_chain(self.chain())
    }
}

impl Default for Error {
    /// An error carrying the current process-wide default message.
    fn default() -> Self {
        Self::new(settings::default_message())
    }
}

/// Serialized names of the core fields; extension keys may not use them.
pub const RESERVED_KEYS: [&str; 7] =
    ["message", "title", "stackTrace", "errorCode", "identifier", "innerError", "errors"];

#[inline]
fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

#[cfg(feature = "serde")]
fn default_title() -> String {
    DEFAULT_TITLE.into()
}

#[cfg(feature = "serde")]
fn deserialize_children<'de, D>(deserializer: D) -> Result<Vec<Error>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let errors = Vec::<Error>::deserialize(deserializer)?;
    if errors.len() == 1 {
        return Err(serde::de::Error::invalid_length(1, &"no child errors or at least two"));
    }
    Ok(errors)
}

fn composite_message(count: usize) -> String {
    const SPELLED: [&str; 9] =
        ["Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten"];

    match count.checked_sub(2).and_then(|index| SPELLED.get(index)) {
        Some(spelled) => format!("{spelled} errors occurred"),
        None => format!("{count} errors occurred"),
    }
}

fn short_type_name<E: ?Sized>() -> String {
    let full = core::any::type_name::<E>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path).to_string()
}
