//! Error handling types and utilities.

/// A specialized Result type for vinedocs operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when the page index cannot be constructed from the
/// navigation configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// Two records share the same `href`; hrefs are the identity key.
    #[error("duplicate href '{0}' in page record set")]
    DuplicateHref(String),
    /// A record carries an empty `href` and cannot be navigated to.
    #[error("page record '{0}' has an empty href")]
    EmptyHref(String),
}
