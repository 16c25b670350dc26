//! # Import Errors
//!
//! Error types for BYU import.
//!
//! ## Error Policy
//!
//! - The first violation aborts the import
//! - No partial mesh is returned
//! - Structural errors carry the 1-based line they were found on

use byu_mesh::MeshError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while importing a BYU file.
///
/// ## Example
///
/// ```rust
/// use byu_import::{import_str, ByuError};
///
/// match import_str("2 4 2 0\n1 2\n") {
///     Err(ByuError::InvalidFormat { line, .. }) => assert_eq!(line, 1),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ByuError {
    /// The input violates the BYU layout.
    #[error("Invalid BYU file (line {line}): {message}")]
    InvalidFormat {
        /// 1-based line number.
        line: usize,
        /// What was wrong.
        message: String,
    },

    /// Reading the input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The mesh builder rejected the submitted geometry.
    #[error("Mesh construction failed: {0}")]
    Mesh(#[from] MeshError),
}

impl ByuError {
    /// Creates an invalid format error.
    pub fn invalid_format(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            line,
            message: message.into(),
        }
    }

    /// Returns true for structural format violations.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for BYU import operations.
pub type ByuResult<T> = Result<T, ByuError>;

// =============================================================================
// TESTS
// =============================================================================
