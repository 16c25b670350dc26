//! # BYU Import
//!
//! Reads BYU geometry files into an indexed triangle mesh.
//!
//! ## Architecture
//!
//! ```text
//! BYU text → LineReader → header → vertices → faces → MeshBuilder → RootNode
//! ```
//!
//! ## Format
//!
//! ```text
//! <parts> <vertices> <faces> <edges>
//! <part range line, ignored>
//! x y z x y z ...        3 × vertices floats, any line packing
//! a b -c                 one line per triangle, 1-based, last negated
//! ```
//!
//! Only single-part files are accepted. BYU winding is reversed on import
//! by default (see [`ImportConfig`]).
//!
//! ## Usage
//!
//! ```rust
//! use byu_import::import_str;
//!
//! let source = "1 4 2 0\n1 2\n\
//!               0 0 0 1 0 0\n1 1 0 0 1 0\n\
//!               1 2 -3\n1 3 -4\n";
//! let root = import_str(source)?;
//! let mesh = root.meshes().next().unwrap();
//! assert_eq!(mesh.vertex_count(), 4);
//! assert_eq!(mesh.triangles(), &[[0, 2, 1], [0, 3, 2]]);
//! # Ok::<(), byu_import::ByuError>(())
//! ```

pub mod error;
pub mod header;
pub mod importer;
pub mod reader;
pub mod writer;

pub use config::constants::ImportConfig;
pub use error::{ByuError, ByuResult};
pub use header::ByuHeader;
pub use importer::{
    build_mesh, import, import_file, import_file_with_config, import_str, import_with_config,
};
pub use writer::{write_byu, write_byu_file};
