//! Error extension utilities
//!
//! Context helper turning foreign errors (I/O, figment, toml, log appender)
//! into the domain [`Error`] used throughout the injector.

use std::fmt;

use autowire_domain::error::{Error, Result};

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use autowire_infrastructure::error_ext::ErrorContext;
///
/// let content = std::fs::read_to_string(&path).context("Failed to read config file")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to a Result, converting the error to a settings error
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::settings_with_source(format!("{context}: {err}"), err))
    }
}
