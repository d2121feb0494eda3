//! Context attachment trait and implementations.

use crate::error::{Error, Result};
use std::fmt;

/// Extension trait for ergonomic error context attachment.
///
/// # When to Use
///
/// - Use `context()` when you have a static context message
/// - Use `with_context()` when the context message is expensive to compute
///   (it's only evaluated on error)
///
/// # Example
///
/// ```rust
/// use restkit::error::{Error, Result, ContextExt};
///
/// fn load_item(id: u64) -> Result<String> {
///     fetch_raw(id).with_context(|| format!("Failed to load item {id}"))
/// }
/// # fn fetch_raw(_: u64) -> Result<String> { Ok("{}".to_string()) }
/// ```
pub trait ContextExt<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds lazy context to an error (only evaluated on error).
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ContextExt<T, E> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| e.into().context(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| e.into().context(f().to_string()))
    }
}
