//! # Mesh Builder
//!
//! Incremental mesh construction: positions go into a pool, triangles are
//! submitted one vertex at a time and closed on every third vertex.
//!
//! ## Example
//!
//! ```rust
//! use byu_mesh::{IndexedMeshBuilder, MeshBuilder};
//! use glam::Vec3;
//!
//! let mut builder = IndexedMeshBuilder::start_mesh("tri");
//! let a = builder.create_position(Vec3::ZERO);
//! let b = builder.create_position(Vec3::X);
//! let c = builder.create_position(Vec3::Y);
//! for index in [a, b, c] {
//!     builder.add_triangle_vertex(index).unwrap();
//! }
//! let mesh = builder.finish_mesh().unwrap();
//! assert_eq!(mesh.triangles(), &[[0, 1, 2]]);
//! ```

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use glam::Vec3;

// =============================================================================
// BUILDER TRAIT
// =============================================================================

/// Collaborator that turns positions and triangle vertices into a mesh.
///
/// Importers drive this trait so parsing stays independent of the mesh
/// representation produced at the end.
pub trait MeshBuilder {
    /// The finished mesh type.
    type Output;

    /// Inserts a position into the pool and returns its index.
    fn create_position(&mut self, position: Vec3) -> u32;

    /// Submits one vertex of the current triangle by position index.
    fn add_triangle_vertex(&mut self, position_index: u32) -> MeshResult<()>;

    /// Returns whether triangles are stored with reversed winding.
    fn swap_winding_order(&self) -> bool;

    /// Sets whether triangles are stored with reversed winding.
    fn set_swap_winding_order(&mut self, swap: bool);

    /// Consumes the builder and returns the finished mesh.
    fn finish_mesh(self) -> MeshResult<Self::Output>
    where
        Self: Sized;
}

// =============================================================================
// INDEXED MESH BUILDER
// =============================================================================

/// Default builder producing a [`Mesh`].
#[derive(Debug, Default)]
pub struct IndexedMeshBuilder {
    /// Accumulated mesh.
    mesh: Mesh,
    /// Vertices of the triangle being submitted.
    pending: [u32; 3],
    /// Number of valid entries in `pending`.
    pending_len: usize,
    /// Reverse winding when closing a triangle.
    swap_winding_order: bool,
}

impl IndexedMeshBuilder {
    /// Starts a new named mesh.
    pub fn start_mesh(name: impl Into<String>) -> Self {
        let mut mesh = Mesh::new();
        mesh.set_name(name);
        Self {
            mesh,
            ..Self::default()
        }
    }

    /// Closes the pending triangle.
    fn emit_triangle(&mut self) {
        let [a, b, c] = self.pending;
        if self.swap_winding_order {
            self.mesh.add_triangle(a, c, b);
        } else {
            self.mesh.add_triangle(a, b, c);
        }
        self.pending_len = 0;
    }
}

impl MeshBuilder for IndexedMeshBuilder {
    type Output = Mesh;

    fn create_position(&mut self, position: Vec3) -> u32 {
        self.mesh.add_position(position)
    }

    fn add_triangle_vertex(&mut self, position_index: u32) -> MeshResult<()> {
        let pool_size = self.mesh.vertex_count();
        if position_index as usize >= pool_size {
            return Err(MeshError::invalid_position(position_index, pool_size));
        }

        self.pending[self.pending_len] = position_index;
        self.pending_len += 1;
        if self.pending_len == 3 {
            self.emit_triangle();
        }
        Ok(())
    }

    fn swap_winding_order(&self) -> bool {
        self.swap_winding_order
    }

    fn set_swap_winding_order(&mut self, swap: bool) {
        self.swap_winding_order = swap;
    }

    fn finish_mesh(self) -> MeshResult<Mesh> {
        if self.pending_len != 0 {
            return Err(MeshError::IncompleteTriangle {
                pending: self.pending_len,
            });
        }
        Ok(self.mesh)
    }
}
