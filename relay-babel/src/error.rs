//! Error types for format operations

use thiserror::Error;

/// Errors that can occur during format operations
///
/// Conversions themselves never fail; these only surface at the registry
/// and option-handling seams.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// A format option carried a value the format cannot interpret
    #[error("Invalid value '{value}' for option '{key}'")]
    InvalidOption { key: String, value: String },
}
