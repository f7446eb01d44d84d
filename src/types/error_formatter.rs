//! Error rendering utilities.
//!
//! [`ErrorFormatBuilder`] produces the multi-line diagnostic block used by
//! `Display`; [`ErrorFormatter`] renders an error chain on a single line.

use crate::types::Error;
use core::fmt::{self, Display};

/// Trait for customizing single-line error chain formatting.
pub trait ErrorFormatter {
    fn format_item(&self, item: &Error) -> String {
        match item.error_code() {
            Some(code) => format!("{} (code: {})", item.message(), code),
            None => item.message().to_string(),
        }
    }

    fn separator(&self) -> &str {
        " -> "
    }

    fn format_chain<'a>(&self, chain: impl Iterator<Item = &'a Error>) -> String {
        chain.map(|item| self.format_item(item)).collect::<Vec<_>>().join(self.separator())
    }
}

/// Configuration-based error formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub separator: String,
    pub indent: String,
    pub show_code: bool,
    pub show_stack_trace: bool,
    pub show_inner: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            separator: " -> ".into(),
            indent: "  ".into(),
            show_code: true,
            show_stack_trace: false,
            show_inner: true,
        }
    }
}

impl ErrorFormatConfig {
    /// Everything, stack traces included.
    #[inline]
    pub fn verbose() -> Self {
        Self { show_stack_trace: true, ..Default::default() }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }

    #[inline]
    pub fn no_code() -> Self {
        Self { show_code: false, ..Default::default() }
    }
}

impl ErrorFormatter for ErrorFormatConfig {
    fn format_item(&self, item: &Error) -> String {
        match item.error_code() {
            Some(code) if self.show_code => format!("{} (code: {})", item.message(), code),
            _ => item.message().to_string(),
        }
    }

    fn separator(&self) -> &str {
        &self.separator
    }
}

/// Builder for the multi-line diagnostic block.
///
/// # Examples
///
/// ```
/// use outcome_rail::Error;
///
/// let err = Error::new("disk full")
///     .with_stack_trace("at storage::write")
///     .with_inner(Error::new("quota exceeded"));
///
/// let default = err.to_string();
/// assert!(!default.contains("Stack Trace"));
///
/// let verbose = err.fmt().stack_trace(true).to_string();
/// assert!(verbose.contains("Stack Trace: at storage::write"));
/// assert!(verbose.contains("Inner Error:\n  Title: Error\n  Message: quota exceeded"));
/// ```
pub struct ErrorFormatBuilder<'a> {
    pub(crate) error: &'a Error,
    pub(crate) config: ErrorFormatConfig,
}

impl<'a> ErrorFormatBuilder<'a> {
    pub fn new(error: &'a Error) -> Self {
        Self { error, config: ErrorFormatConfig::default() }
    }

    pub fn with_config(mut self, config: ErrorFormatConfig) -> Self {
        self.config = config;
        self
    }

    /// Whether to include stack traces (default: false).
    pub fn stack_trace(mut self, show: bool) -> Self {
        self.config.show_stack_trace = show;
        self
    }

    /// Whether to include the error code line (default: true).
    pub fn show_code(mut self, show: bool) -> Self {
        self.config.show_code = show;
        self
    }

    /// Whether to render the inner error chain (default: true).
    pub fn inner(mut self, show: bool) -> Self {
        self.config.show_inner = show;
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.config.indent = indent.into();
        self
    }

    /// Renders the single-line chain instead of the block.
    pub fn chain(&self) -> String {
        self.config.format_chain(self.error.chain())
    }

    fn push_block(&self, error: &Error, depth: usize, lines: &mut Vec<String>) {
        let pad = self.config.indent.repeat(depth);

        lines.push(format!("{pad}Title: {}", error.title()));
        lines.push(format!("{pad}Message: {}", error.message()));
        if let Some(identifier) = error.identifier() {
            lines.push(format!("{pad}Identifier: {identifier}"));
        }
        if self.config.show_code {
            if let Some(code) = error.error_code() {
                lines.push(format!("{pad}Error Code: {code}"));
            }
        }

        if error.is_composite() {
            lines.push(format!("{pad}Errors:"));
            for child in error.errors() {
                self.push_block(child, depth + 1, lines);
            }
        }
        if !error.extensions().is_empty() {
            lines.push(format!("{pad}Extensions:"));
            for (key, value) in error.extensions() {
                lines.push(format!("{pad}{}{key}: {value}", self.config.indent));
            }
        }

        if self.config.show_stack_trace {
            if let Some(trace) = error.stack_trace() {
                lines.push(format!("{pad}Stack Trace: {trace}"));
            }
        }

        if self.config.show_inner {
            if let Some(inner) = error.inner() {
                lines.push(format!("{pad}Inner Error:"));
                self.push_block(inner, depth + 1, lines);
            }
        }
    }
}

impl Display for ErrorFormatBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        self.push_block(self.error, 0, &mut lines);
        f.write_str(&lines.join("\n"))
    }
}
