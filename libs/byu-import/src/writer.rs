//! # BYU Writer
//!
//! Writes a mesh back out as a single-part BYU file.
//!
//! ## Example
//!
//! ```rust
//! use byu_import::{import_str, write_byu};
//!
//! let source = "1 3 1 3\n1 1\n0 0 0 1 0 0\n0 1 0\n1 2 -3\n";
//! let mesh = import_str(source).unwrap().into_single_mesh().unwrap();
//!
//! let mut out = Vec::new();
//! write_byu(&mesh, &mut out, true).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), source);
//! ```

use crate::error::ByuResult;
use byu_mesh::Mesh;
use config::constants::{BYU_VERTICES_PER_LINE, INDICES_PER_FACE, SUPPORTED_PART_COUNT};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `mesh` as BYU text.
///
/// Set `swap_winding_order` to the value the mesh was imported with so that
/// its triangles are written back in file order.
pub fn write_byu<W: Write>(mesh: &Mesh, mut out: W, swap_winding_order: bool) -> ByuResult<()> {
    let vertex_count = mesh.vertex_count();
    let face_count = mesh.triangle_count();

    writeln!(
        out,
        "{SUPPORTED_PART_COUNT} {vertex_count} {face_count} {}",
        face_count * INDICES_PER_FACE
    )?;
    writeln!(out, "1 {face_count}")?;

    for chunk in mesh.positions().chunks(BYU_VERTICES_PER_LINE) {
        let line = chunk
            .iter()
            .map(|p| format!("{} {} {}", p.x, p.y, p.z))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{line}")?;
    }

    for &[a, b, c] in mesh.triangles() {
        let [a, b, c] = if swap_winding_order { [a, c, b] } else { [a, b, c] };
        writeln!(out, "{} {} -{}", a + 1, b + 1, c + 1)?;
    }

    out.flush()?;
    Ok(())
}

/// Creates `path` and writes `mesh` into it as BYU text.
pub fn write_byu_file(
    mesh: &Mesh,
    path: impl AsRef<Path>,
    swap_winding_order: bool,
) -> ByuResult<()> {
    let file = File::create(path)?;
    write_byu(mesh, BufWriter::new(file), swap_winding_order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_position(Vec3::new(0.5, 0.0, 0.0));
        mesh.add_position(Vec3::new(1.0, -2.25, 0.0));
        mesh.add_position(Vec3::new(0.0, 1.0, 3.0));
        mesh.add_triangle(0, 2, 1);
        mesh
    }

    fn written(mesh: &Mesh, swap: bool) -> String {
        let mut out = Vec::new();
        write_byu(mesh, &mut out, swap).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_header_and_part_line() {
        let text = written(&triangle(), true);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("1 3 1 3"));
        assert_eq!(lines.next(), Some("1 1"));
    }

    #[test]
    fn test_vertices_two_per_line() {
        let text = written(&triangle(), true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "0.5 0 0 1 -2.25 0");
        assert_eq!(lines[3], "0 1 3");
    }

    #[test]
    fn test_face_winding() {
        assert!(written(&triangle(), true).ends_with("1 2 -3\n"));
        assert!(written(&triangle(), false).ends_with("1 3 -2\n"));
    }

    #[test]
    fn test_empty_mesh() {
        assert_eq!(written(&Mesh::new(), true), "1 0 0 0\n1 0\n");
    }
}
