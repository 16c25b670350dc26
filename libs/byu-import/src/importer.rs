//! # BYU Importer
//!
//! Single forward pass over a BYU file:
//!
//! 1. Header line, then the per-part line (skipped)
//! 2. Vertex phase: a flat float stream consumed three at a time
//! 3. Face phase: one `a b -c` line per triangle
//!
//! Every violation aborts the import with [`ByuError::InvalidFormat`].

use crate::error::{ByuError, ByuResult};
use crate::header::{parse_int, ByuHeader};
use crate::reader::LineReader;
use byu_mesh::{IndexedMeshBuilder, MeshBuilder, RootNode};
use config::constants::{ImportConfig, COORDS_PER_VERTEX, INDICES_PER_FACE};
use glam::Vec3;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, trace};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Imports a BYU stream with default settings.
///
/// # Example
///
/// ```rust
/// use byu_import::import;
///
/// let source = "1 3 1 3\n1 1\n0 0 0 1 0 0\n0 1 0\n1 2 -3\n";
/// let root = import(source.as_bytes()).unwrap();
/// let mesh = root.meshes().next().unwrap();
/// assert_eq!(mesh.triangles(), &[[0, 2, 1]]);
/// ```
pub fn import<R: BufRead>(source: R) -> ByuResult<RootNode> {
    import_with_config(source, &ImportConfig::default())
}

/// Imports a BYU stream with explicit settings.
pub fn import_with_config<R: BufRead>(source: R, config: &ImportConfig) -> ByuResult<RootNode> {
    import_named(source, "", config)
}

/// Imports BYU text held in memory.
pub fn import_str(source: &str) -> ByuResult<RootNode> {
    import(source.as_bytes())
}

/// Opens and imports a BYU file with default settings.
///
/// The mesh and root node are named after the file stem.
pub fn import_file(path: impl AsRef<Path>) -> ByuResult<RootNode> {
    import_file_with_config(path, &ImportConfig::default())
}

/// Opens and imports a BYU file with explicit settings.
pub fn import_file_with_config(
    path: impl AsRef<Path>,
    config: &ImportConfig,
) -> ByuResult<RootNode> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    debug!("Opening BYU file {:?}", path);
    let file = File::open(path)?;
    import_named(BufReader::new(file), name, config)
}

/// Parses a BYU stream into any [`MeshBuilder`].
///
/// The builder's winding flag is set from `config` before geometry is
/// submitted. Returns whatever the builder finishes with.
pub fn build_mesh<R, B>(source: R, mut builder: B, config: &ImportConfig) -> ByuResult<B::Output>
where
    R: BufRead,
    B: MeshBuilder,
{
    let mut reader = LineReader::new(source);

    let header = read_header(&mut reader, config)?;
    builder.set_swap_winding_order(config.swap_winding_order);

    let vertex_table = read_vertices(&mut reader, &mut builder, header.vertex_count)?;
    read_faces(&mut reader, &mut builder, &vertex_table, header.face_count)?;

    Ok(builder.finish_mesh()?)
}

// =============================================================================
// PHASES
// =============================================================================

fn import_named<R: BufRead>(source: R, name: &str, config: &ImportConfig) -> ByuResult<RootNode> {
    let mesh = build_mesh(source, IndexedMeshBuilder::start_mesh(name), config)?;
    info!(
        "Imported BYU mesh: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    let mut root = RootNode::new(name);
    root.add_child(mesh);
    Ok(root)
}

/// Reads the header and part lines, then validates the header.
fn read_header<R: BufRead>(
    reader: &mut LineReader<R>,
    config: &ImportConfig,
) -> ByuResult<ByuHeader> {
    let line = reader.expect_line("header")?;
    let header_line = line.number;
    let header = ByuHeader::parse(line.text, header_line)?;
    debug!(
        parts = header.part_count,
        vertices = header.vertex_count,
        faces = header.face_count,
        edges = header.edge_count,
        "BYU header"
    );

    // Part range line, unused with a single part.
    reader.expect_line("part line")?;

    header.check(config, header_line)?;
    Ok(header)
}

/// Creates one position per coordinate triple and returns the slot table.
///
/// Triples may span line boundaries. Coordinates after the last vertex on
/// the same line are rejected.
fn read_vertices<R: BufRead, B: MeshBuilder>(
    reader: &mut LineReader<R>,
    builder: &mut B,
    vertex_count: usize,
) -> ByuResult<Vec<u32>> {
    // Grows with the data actually read; the header count is untrusted.
    let mut table = Vec::new();
    let mut coords = [0.0f32; COORDS_PER_VERTEX];
    let mut filled = 0;

    while table.len() < vertex_count {
        let line = reader.expect_line("vertex coordinates")?;
        trace!(line = line.number, "vertex line");

        let mut tokens = line.tokens();
        for token in tokens.by_ref() {
            coords[filled] = parse_float(token, line.number)?;
            filled += 1;
            if filled == COORDS_PER_VERTEX {
                table.push(builder.create_position(Vec3::from_array(coords)));
                filled = 0;
                if table.len() == vertex_count {
                    break;
                }
            }
        }

        if let Some(extra) = tokens.next() {
            return Err(ByuError::invalid_format(
                line.number,
                format!("unexpected coordinate '{extra}' after vertex {vertex_count}"),
            ));
        }
    }

    Ok(table)
}

/// Reads `face_count` triangle lines and submits them to the builder.
fn read_faces<R: BufRead, B: MeshBuilder>(
    reader: &mut LineReader<R>,
    builder: &mut B,
    vertex_table: &[u32],
    face_count: usize,
) -> ByuResult<()> {
    for _ in 0..face_count {
        let line = reader.expect_line("face indices")?;
        let tokens: Vec<&str> = line.tokens().collect();
        if tokens.len() != INDICES_PER_FACE {
            return Err(ByuError::invalid_format(
                line.number,
                format!(
                    "expected {INDICES_PER_FACE} face indices, found {}",
                    tokens.len()
                ),
            ));
        }

        let face = decode_face(&tokens, line.number)?;
        for slot in face {
            let position = vertex_table.get(slot).copied().ok_or_else(|| {
                ByuError::invalid_format(
                    line.number,
                    format!(
                        "face references vertex {}, file has {}",
                        slot + 1,
                        vertex_table.len()
                    ),
                )
            })?;
            builder.add_triangle_vertex(position)?;
        }
    }
    Ok(())
}

// =============================================================================
// TOKENS
// =============================================================================

/// Decodes `a b -c` into 0-based vertex slots.
///
/// The last index is stored negated to mark the end of the face.
fn decode_face(tokens: &[&str], line: usize) -> ByuResult<[usize; 3]> {
    let first = parse_int(tokens[0], line)?;
    let second = parse_int(tokens[1], line)?;
    let last = parse_int(tokens[2], line)?;

    let v1 = first.checked_sub(1);
    let v2 = second.checked_sub(1);
    let v3 = last.checked_neg().and_then(|v| v.checked_sub(1));

    if !matches!(v3, Some(v) if v >= 0) {
        return Err(ByuError::invalid_format(
            line,
            format!("last face index must be negative, found '{}'", tokens[2]),
        ));
    }

    let mut slots = [0usize; 3];
    for (slot, (value, token)) in slots.iter_mut().zip([v1, v2, v3].into_iter().zip(tokens)) {
        *slot = value
            .and_then(|v| usize::try_from(v).ok())
            .ok_or_else(|| {
                ByuError::invalid_format(line, format!("face index '{token}' out of range"))
            })?;
    }
    Ok(slots)
}

fn parse_float(token: &str, line: usize) -> ByuResult<f32> {
    token
        .parse()
        .map_err(|_| ByuError::invalid_format(line, format!("expected number, found '{token}'")))
}
