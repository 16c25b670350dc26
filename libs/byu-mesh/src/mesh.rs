//! # Mesh Data Structure
//!
//! Indexed triangle mesh: a position pool plus triangles referencing it.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A triangle mesh with positions and indices.
///
/// Positions are stored once per insertion; coincident coordinates are not
/// merged. Triangle indices refer into the position pool.
///
/// # Example
///
/// ```rust
/// use byu_mesh::Mesh;
/// use glam::Vec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_position(Vec3::new(0.0, 0.0, 0.0));
/// mesh.add_position(Vec3::new(1.0, 0.0, 0.0));
/// mesh.add_position(Vec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Mesh name, empty when unnamed.
    name: String,
    /// Position pool in insertion order.
    positions: Vec<Vec3>,
    /// Triangle indices (3 indices per triangle).
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mesh name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the mesh name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the number of positions.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Appends a position and returns its index.
    ///
    /// Indices are `u32`; importers cap the pool below `u32::MAX` entries.
    pub fn add_position(&mut self, position: Vec3) -> u32 {
        debug_assert!(self.positions.len() < u32::MAX as usize);
        let index = self.positions.len() as u32;
        self.positions.push(position);
        index
    }

    /// Adds a triangle by position indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the positions.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the position at the given index, if any.
    #[inline]
    pub fn position(&self, index: u32) -> Option<Vec3> {
        self.positions.get(index as usize).copied()
    }

    /// Returns the triangle at the given index, if any.
    #[inline]
    pub fn triangle(&self, index: usize) -> Option<[u32; 3]> {
        self.triangles.get(index).copied()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let (first, rest) = self.positions.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)));
        Some((min, max))
    }

    /// Checks that every triangle index refers to an existing position.
    pub fn validate(&self) -> bool {
        let count = self.positions.len() as u32;
        self.triangles
            .iter()
            .all(|tri| tri.iter().all(|&i| i < count))
    }

    /// Exports positions as a flat f32 array.
    ///
    /// Returns [x, y, z, x, y, z, ...].
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|v| v.to_array()).collect()
    }

    /// Exports triangle indices as a flat u32 array.
    ///
    /// Returns [i0, i1, i2, i0, i1, i2, ...].
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}
