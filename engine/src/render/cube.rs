//! Cube Geometry Builder
//!
//! Turns a placed cell into the solid drawn for it: 8 corners, 12 wireframe
//! edges and 12 opaque triangles.
//!
//! # Layout
//!
//! A cell `(x, y, z)` is drawn as the unit box spanning `(x-1, y-1, z-1)` to
//! `(x, y, z)`. Corners 0..4 are the bottom ring at `z-1` and 4..8 the top ring
//! at `z`, both counter-clockwise seen from above, starting at `(x-1, y-1)`:
//!
//! ```text
//!   3 ---- 2      7 ---- 6
//!   |      |      |      |      bottom (z-1)   top (z)
//!   0 ---- 1      4 ---- 5
//! ```
//!
//! Every quad is split into `(q0, q1, q2)` and `(q0, q2, q3)`.

use glam::Vec3;
use serde::Serialize;

use super::color::{CubePalette, to_rgba};
use super::mesh::{Mesh, Vertex};
use crate::world::Cell;

/// Corner index pairs: bottom loop, top loop, then the 4 verticals.
#[rustfmt::skip]
pub const CUBE_EDGES: [[u32; 2]; 12] = [
    [0, 1], [1, 2], [2, 3], [3, 0],
    [4, 5], [5, 6], [6, 7], [7, 4],
    [0, 4], [1, 5], [2, 6], [3, 7],
];

/// One of the six sides of a cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CubeFace {
    Bottom,
    Top,
    /// The `y-1` side
    Front,
    /// The `x` side
    Right,
    /// The `y` side
    Back,
    /// The `x-1` side
    Left,
}

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Bottom,
        CubeFace::Top,
        CubeFace::Front,
        CubeFace::Right,
        CubeFace::Back,
        CubeFace::Left,
    ];

    /// Corner indices of this face's quad.
    pub const fn quad(self) -> [u32; 4] {
        match self {
            CubeFace::Bottom => [0, 1, 2, 3],
            CubeFace::Top => [4, 5, 6, 7],
            CubeFace::Front => [0, 1, 5, 4],
            CubeFace::Right => [1, 2, 6, 5],
            CubeFace::Back => [2, 3, 7, 6],
            CubeFace::Left => [3, 0, 4, 7],
        }
    }

    /// Outward unit normal (z is up).
    pub fn normal(self) -> Vec3 {
        match self {
            CubeFace::Bottom => Vec3::NEG_Z,
            CubeFace::Top => Vec3::Z,
            CubeFace::Front => Vec3::NEG_Y,
            CubeFace::Right => Vec3::X,
            CubeFace::Back => Vec3::Y,
            CubeFace::Left => Vec3::NEG_X,
        }
    }

    /// The two triangles covering this face.
    pub const fn triangles(self) -> [[u32; 3]; 2] {
        let [a, b, c, d] = self.quad();
        [[a, b, c], [a, c, d]]
    }
}

/// A filled triangle of a cube, indices into [`CubeGeometry::corners`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CubeTriangle {
    pub indices: [u32; 3],
    pub face: CubeFace,
    /// Packed `0xRRGGBB` fill color
    pub color: u32,
}

/// Everything needed to draw one placed block.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CubeGeometry {
    pub cell: Cell,
    pub corners: [Vec3; 8],
    pub edges: [[u32; 2]; 12],
    pub triangles: [CubeTriangle; 12],
    /// Packed `0xRRGGBB` color shared by all edges
    pub edge_color: u32,
}

/// Build the geometry for `cell` with the default palette.
pub fn build_cube(cell: Cell) -> CubeGeometry {
    build_cube_with_palette(cell, CubePalette::default())
}

/// Build the geometry for `cell`, coloring it with `palette`.
pub fn build_cube_with_palette(cell: Cell, palette: CubePalette) -> CubeGeometry {
    let (x, y, z) = (cell.x as f32, cell.y as f32, cell.z as f32);
    let ring = |h: f32| {
        [
            Vec3::new(x - 1.0, y - 1.0, h),
            Vec3::new(x, y - 1.0, h),
            Vec3::new(x, y, h),
            Vec3::new(x - 1.0, y, h),
        ]
    };
    let (bottom, top) = (ring(z - 1.0), ring(z));
    let corners: [Vec3; 8] = std::array::from_fn(|i| {
        if i < 4 { bottom[i] } else { top[i - 4] }
    });

    let triangles = std::array::from_fn(|i| {
        let face = CubeFace::ALL[i / 2];
        CubeTriangle {
            indices: face.triangles()[i % 2],
            face,
            color: palette.face,
        }
    });

    CubeGeometry {
        cell,
        corners,
        edges: CUBE_EDGES,
        triangles,
        edge_color: palette.edge,
    }
}

impl CubeGeometry {
    pub fn bottom(&self) -> &[Vec3] {
        &self.corners[..4]
    }

    pub fn top(&self) -> &[Vec3] {
        &self.corners[4..]
    }

    /// Edges as world-space segments.
    pub fn edge_segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.edges
            .iter()
            .map(|&[a, b]| (self.corners[a as usize], self.corners[b as usize]))
    }

    /// Flat index list (i, j, k per triangle) over [`Self::corners`].
    pub fn triangle_indices(&self) -> Vec<u32> {
        self.triangles.iter().flat_map(|t| t.indices).collect()
    }

    /// Lit triangle mesh: 4 vertices per face so each face keeps a flat normal.
    pub fn to_mesh(&self) -> Mesh {
        let mut mesh = Mesh::with_capacity(24, 36);
        for pair in self.triangles.chunks_exact(2) {
            let face = pair[0].face;
            let color = to_rgba(pair[0].color);
            let base = mesh.vertices.len() as u32;
            for i in face.quad() {
                mesh.vertices
                    .push(Vertex::new(self.corners[i as usize], face.normal(), color));
            }
            mesh.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
        mesh
    }

    /// Edge line list: two vertices per edge, unlit (zero normal).
    pub fn edge_line_list(&self) -> Vec<Vertex> {
        let color = to_rgba(self.edge_color);
        self.edge_segments()
            .flat_map(|(a, b)| {
                [
                    Vertex::new(a, Vec3::ZERO, color),
                    Vertex::new(b, Vec3::ZERO, color),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_span_unit_box() {
        let cube = build_cube(Cell::new(2, 1, 1));
        assert_eq!(cube.corners[0], Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(cube.corners[6], Vec3::new(2.0, 1.0, 1.0));
        assert!(cube.bottom().iter().all(|c| c.z == 0.0));
        assert!(cube.top().iter().all(|c| c.z == 1.0));
    }

    #[test]
    fn test_triangle_indices_match_face_table() {
        let cube = build_cube(Cell::new(0, 0, 1));
        assert_eq!(
            cube.triangle_indices(),
            vec![
                0, 1, 2, 0, 2, 3, // bottom
                4, 5, 6, 4, 6, 7, // top
                0, 1, 5, 0, 5, 4, // front
                1, 2, 6, 1, 6, 5, // right
                2, 3, 7, 2, 7, 6, // back
                3, 0, 4, 3, 4, 7, // left
            ]
        );
    }

    #[test]
    fn test_every_edge_has_unit_length() {
        let cube = build_cube(Cell::new(-3, 3, 2));
        assert_eq!(cube.edge_segments().count(), 12);
        for (a, b) in cube.edge_segments() {
            assert_eq!(a.distance(b), 1.0);
        }
    }

    #[test]
    fn test_face_normals_point_outward() {
        let cube = build_cube(Cell::new(1, 1, 1));
        let center = Vec3::new(0.5, 0.5, 0.5);
        for face in CubeFace::ALL {
            let quad = face.quad();
            let face_center = quad
                .iter()
                .map(|&i| cube.corners[i as usize])
                .sum::<Vec3>()
                / 4.0;
            assert_eq!((face_center - center).normalize(), face.normal());
        }
    }

    #[test]
    fn test_to_mesh_sizes() {
        let cube = build_cube(Cell::new(0, 0, 1));
        let mesh = cube.to_mesh();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        assert_eq!(cube.edge_line_list().len(), 24);
    }

    #[test]
    fn test_palette_is_applied() {
        let palette = CubePalette { edge: 0x112233, face: 0x445566 };
        let cube = build_cube_with_palette(Cell::new(0, 0, 1), palette);
        assert_eq!(cube.edge_color, 0x112233);
        assert!(cube.triangles.iter().all(|t| t.color == 0x445566));
    }
}
