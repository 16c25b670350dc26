//! # Configuration Constants
//!
//! Centralized values shared by the BYU mesh and import crates.
//!
//! ## Categories
//!
//! - **Format**: Facts about the BYU text layout
//! - **Limits**: Maximum header counts accepted before geometry is read
//! - **Settings**: The [`ImportConfig`] value passed to the importer

use thiserror::Error;

// =============================================================================
// FORMAT CONSTANTS
// =============================================================================

/// The only part count the importer accepts.
///
/// The BYU format allows several parts per file, each with its own face
/// range. Only single-part files are supported.
///
/// # Example
///
/// ```rust
/// use config::constants::SUPPORTED_PART_COUNT;
///
/// let part_count = 2;
/// assert_ne!(part_count, SUPPORTED_PART_COUNT);
/// ```
pub const SUPPORTED_PART_COUNT: i64 = 1;

/// Number of header integers on the first line of a BYU file.
///
/// Part count, vertex count, face count, edge count.
pub const BYU_HEADER_FIELDS: usize = 4;

/// Number of coordinates per vertex.
pub const COORDS_PER_VERTEX: usize = 3;

/// Number of vertex references per face line.
pub const INDICES_PER_FACE: usize = 3;

/// Vertices written per line by the BYU writer.
///
/// Conventional BYU files pack two vertices (six floats) per line.
///
/// # Example
///
/// ```rust
/// use config::constants::{BYU_VERTICES_PER_LINE, COORDS_PER_VERTEX};
///
/// assert_eq!(BYU_VERTICES_PER_LINE * COORDS_PER_VERTEX, 6);
/// ```
pub const BYU_VERTICES_PER_LINE: usize = 2;

/// File extension conventionally used for BYU geometry files.
///
/// # Example
///
/// ```rust
/// use config::constants::BYU_FILE_EXTENSION;
/// use std::path::Path;
///
/// let path = Path::new("teapot.g");
/// assert_eq!(path.extension().and_then(|e| e.to_str()), Some(BYU_FILE_EXTENSION));
/// ```
pub const BYU_FILE_EXTENSION: &str = "g";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Largest count representable by the mesh's `u32` indices.
///
/// Configured limits may not exceed this.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_MAX_VERTICES, MAX_INDEXED_COUNT};
///
/// assert!(DEFAULT_MAX_VERTICES <= MAX_INDEXED_COUNT);
/// ```
pub const MAX_INDEXED_COUNT: usize = u32::MAX as usize;

/// Default maximum vertex count accepted from a BYU header.
///
/// Headers are checked against this before any geometry is read.
pub const DEFAULT_MAX_VERTICES: usize = 10_000_000;

/// Default maximum face count accepted from a BYU header.
pub const DEFAULT_MAX_FACES: usize = 10_000_000;

// =============================================================================
// SETTINGS
// =============================================================================

/// Whether imported triangles are reversed by default.
///
/// BYU face winding is opposite to the target mesh convention.
pub const DEFAULT_SWAP_WINDING_ORDER: bool = true;

/// Settings for a single BYU import.
///
/// # Examples
/// ```
/// use config::constants::ImportConfig;
/// let config = ImportConfig::default();
/// assert!(config.max_vertices > 0);
/// assert!(config.swap_winding_order);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportConfig {
    /// Largest vertex count a header may declare.
    pub max_vertices: usize,
    /// Largest face count a header may declare.
    pub max_faces: usize,
    /// Reverse triangle winding relative to the file.
    pub swap_winding_order: bool,
}

impl ImportConfig {
    /// Builds a configuration with explicit limits.
    ///
    /// Both limits must be positive and at most [`MAX_INDEXED_COUNT`].
    ///
    /// # Examples
    /// ```
    /// use config::constants::ImportConfig;
    /// let cfg = ImportConfig::new(1_000, 2_000).expect("valid config");
    /// assert_eq!(cfg.max_faces, 2_000);
    /// assert!(ImportConfig::new(0, 10).is_err());
    /// ```
    pub fn new(max_vertices: usize, max_faces: usize) -> Result<Self, ConfigError> {
        if max_vertices == 0 || max_vertices > MAX_INDEXED_COUNT {
            return Err(ConfigError::InvalidVertexLimit(max_vertices));
        }
        if max_faces == 0 || max_faces > MAX_INDEXED_COUNT {
            return Err(ConfigError::InvalidFaceLimit(max_faces));
        }
        Ok(Self {
            max_vertices,
            max_faces,
            swap_winding_order: DEFAULT_SWAP_WINDING_ORDER,
        })
    }

    /// Vertex limit, capped at [`MAX_INDEXED_COUNT`].
    ///
    /// The fields are public, so this holds even for configs built by hand.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ImportConfig, MAX_INDEXED_COUNT};
    /// let cfg = ImportConfig { max_vertices: usize::MAX, ..ImportConfig::default() };
    /// assert_eq!(cfg.vertex_limit(), MAX_INDEXED_COUNT);
    /// ```
    pub fn vertex_limit(&self) -> usize {
        self.max_vertices.min(MAX_INDEXED_COUNT)
    }

    /// Face limit, capped at [`MAX_INDEXED_COUNT`].
    pub fn face_limit(&self) -> usize {
        self.max_faces.min(MAX_INDEXED_COUNT)
    }

    /// Returns a copy with the winding flag replaced.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ImportConfig;
    /// let cfg = ImportConfig::default().with_swap_winding_order(false);
    /// assert!(!cfg.swap_winding_order);
    /// ```
    pub fn with_swap_winding_order(mut self, swap: bool) -> Self {
        self.swap_winding_order = swap;
        self
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            max_faces: DEFAULT_MAX_FACES,
            swap_winding_order: DEFAULT_SWAP_WINDING_ORDER,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the vertex limit is zero or exceeds `u32` indices.
    #[error("max_vertices must be in 1..=u32::MAX: {0}")]
    InvalidVertexLimit(usize),
    /// Raised when the face limit is zero or exceeds `u32` indices.
    #[error("max_faces must be in 1..=u32::MAX: {0}")]
    InvalidFaceLimit(usize),
}
