//! Render Module
//!
//! CPU-side geometry for placed blocks. Drawing it is up to the presenter.

pub mod color;
pub mod cube;
pub mod mesh;

pub use color::{CubePalette, EDGE_COLOR, FACE_COLOR, format_hex_color, parse_hex_color};
pub use cube::{CUBE_EDGES, CubeFace, CubeGeometry, CubeTriangle, build_cube, build_cube_with_palette};
pub use mesh::{Mesh, Vertex};
