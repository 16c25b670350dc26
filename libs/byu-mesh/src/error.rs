//! # Mesh Errors
//!
//! Error types for mesh construction.

use thiserror::Error;

/// Errors that can occur while building a mesh.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// A triangle vertex names a position that was never created.
    #[error("Invalid position index: {index} (pool size: {pool_size})")]
    InvalidPositionIndex { index: u32, pool_size: usize },

    /// The mesh was finished with a partially submitted triangle.
    #[error("Incomplete triangle: {pending} vertices pending at finish")]
    IncompleteTriangle { pending: usize },
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

impl MeshError {
    /// Creates an invalid position index error.
    pub fn invalid_position(index: u32, pool_size: usize) -> Self {
        Self::InvalidPositionIndex { index, pool_size }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_position(7, 3);
        assert!(err.to_string().contains("7"));
        assert!(err.to_string().contains("pool size: 3"));

        let err = MeshError::IncompleteTriangle { pending: 2 };
        assert!(err.to_string().contains("2 vertices pending"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
