//! # Config Crate
//!
//! Centralized configuration for the BYU import pipeline.
//! Format constants, safety limits and the import settings value type are
//! defined here so the mesh and import crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ImportConfig, SUPPORTED_PART_COUNT};
//!
//! let cfg = ImportConfig::default();
//! assert!(cfg.swap_winding_order);
//! assert_eq!(SUPPORTED_PART_COUNT, 1);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Settings**: `ImportConfig::new` rejects unusable limits
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
