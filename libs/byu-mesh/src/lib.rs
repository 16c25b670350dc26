//! # BYU Mesh
//!
//! Mesh representation consumed by the BYU importer.
//!
//! ## Architecture
//!
//! ```text
//! importer → MeshBuilder (positions + triangle vertices) → Mesh → RootNode
//! ```
//!
//! ## Components
//!
//! - **Mesh**: position pool and indexed triangles
//! - **MeshBuilder**: trait the importer drives, with `IndexedMeshBuilder`
//!   as the default implementation
//! - **RootNode**: scene container returned to the caller
//!
//! ## Usage
//!
//! ```rust
//! use byu_mesh::{IndexedMeshBuilder, MeshBuilder, RootNode};
//! use glam::Vec3;
//!
//! let mut builder = IndexedMeshBuilder::start_mesh("");
//! builder.set_swap_winding_order(true);
//! let ids: Vec<u32> = [Vec3::ZERO, Vec3::X, Vec3::Y]
//!     .into_iter()
//!     .map(|p| builder.create_position(p))
//!     .collect();
//! for id in ids {
//!     builder.add_triangle_vertex(id)?;
//! }
//! let mut root = RootNode::new("");
//! root.add_child(builder.finish_mesh()?);
//! assert_eq!(root.meshes().next().unwrap().triangles(), &[[0, 2, 1]]);
//! # Ok::<(), byu_mesh::MeshError>(())
//! ```

pub mod builder;
pub mod error;
pub mod mesh;
pub mod node;

pub use builder::{IndexedMeshBuilder, MeshBuilder};
pub use error::{MeshError, MeshResult};
pub use mesh::Mesh;
pub use node::{NodeContent, RootNode};
