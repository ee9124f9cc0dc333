//! Static adjacency tables shared by all polytopes of a given shape family.

use static_assertions::const_assert_eq;

/// Adjacency record of one polytope vertex.
#[derive(Debug, PartialEq, Eq)]
pub struct VertexData {
    /// Indices of all faces incident to this vertex.
    pub faces: &'static [usize],
    /// Indices of all vertex neighbors of this vertex.
    pub neighbors: &'static [usize],
}

/// Adjacency record of one polytope face.
#[derive(Debug, PartialEq, Eq)]
pub struct FaceData {
    /// Indices of the vertices of this face, as a boundary loop. The winding
    /// is counterclockwise seen from outside the polytope.
    pub vertices: &'static [usize],
    /// Four vertex indices used to compute the face normal as the cross
    /// product of the two spanned diagonals. Using four designated vertices
    /// instead of the first three keeps the normal stable on faces that are
    /// slightly non-planar from numerical noise.
    pub normal_vertices: [usize; 4],
    /// Indices of the faces sharing an edge with this face.
    pub neighbors: &'static [usize],
}

/// The adjacency description of one polytope shape family.
///
/// Tables are immutable and `'static`: every instance of a family shares the
/// same topology, only the point positions differ.
#[derive(Debug, PartialEq, Eq)]
pub struct Topology {
    /// One record per vertex.
    pub vertices: &'static [VertexData],
    /// One record per face.
    pub faces: &'static [FaceData],
}

/// Topology of a box: 8 vertices, 6 quad faces.
///
/// Vertex indices follow the canonical cube point order: bits select
/// (x, y, z) as `index = x + 4*y + 2*z` over the corners `±0.5`, i.e. the
/// bottom ring is `0, 1, 3, 2` and the top ring `4, 5, 7, 6`.
pub static CUBE_TOPOLOGY: Topology = Topology {
    vertices: &[
        VertexData { faces: &[0, 2, 4], neighbors: &[1, 2, 4] }, // 0
        VertexData { faces: &[1, 2, 4], neighbors: &[0, 3, 5] }, // 1
        VertexData { faces: &[0, 2, 5], neighbors: &[0, 3, 6] }, // 2
        VertexData { faces: &[1, 2, 5], neighbors: &[1, 2, 7] }, // 3
        VertexData { faces: &[0, 3, 4], neighbors: &[0, 5, 6] }, // 4
        VertexData { faces: &[1, 3, 4], neighbors: &[1, 4, 7] }, // 5
        VertexData { faces: &[0, 3, 5], neighbors: &[2, 4, 7] }, // 6
        VertexData { faces: &[1, 3, 5], neighbors: &[3, 5, 6] }, // 7
    ],
    faces: &[
        // -x
        FaceData {
            vertices: &[0, 2, 6, 4],
            normal_vertices: [6, 0, 4, 2],
            neighbors: &[2, 3, 4, 5],
        },
        // +x
        FaceData {
            vertices: &[1, 5, 7, 3],
            normal_vertices: [7, 1, 3, 5],
            neighbors: &[2, 3, 4, 5],
        },
        // -y
        FaceData {
            vertices: &[0, 1, 3, 2],
            normal_vertices: [3, 0, 2, 1],
            neighbors: &[0, 1, 4, 5],
        },
        // +y
        FaceData {
            vertices: &[4, 6, 7, 5],
            normal_vertices: [7, 4, 5, 6],
            neighbors: &[0, 1, 4, 5],
        },
        // -z
        FaceData {
            vertices: &[0, 4, 5, 1],
            normal_vertices: [5, 0, 1, 4],
            neighbors: &[0, 1, 2, 3],
        },
        // +z
        FaceData {
            vertices: &[2, 3, 7, 6],
            normal_vertices: [7, 2, 6, 3],
            neighbors: &[0, 1, 2, 3],
        },
    ],
};

/// Topology of a tetrahedron: 4 vertices, 4 triangular faces.
///
/// The windings assume the fourth point lies below the plane of the first
/// three, i.e. `dot(p3 - p0, (p1 - p0) × (p2 - p0)) < 0`.
pub static TETRAHEDRON_TOPOLOGY: Topology = Topology {
    vertices: &[
        VertexData { faces: &[0, 1, 3], neighbors: &[1, 2, 3] }, // 0
        VertexData { faces: &[0, 1, 2], neighbors: &[0, 2, 3] }, // 1
        VertexData { faces: &[0, 2, 3], neighbors: &[0, 1, 3] }, // 2
        VertexData { faces: &[1, 2, 3], neighbors: &[0, 1, 2] }, // 3
    ],
    faces: &[
        FaceData {
            vertices: &[0, 1, 2],
            normal_vertices: [1, 0, 2, 0],
            neighbors: &[1, 2, 3],
        },
        FaceData {
            vertices: &[0, 3, 1],
            normal_vertices: [3, 0, 1, 0],
            neighbors: &[0, 2, 3],
        },
        FaceData {
            vertices: &[1, 3, 2],
            normal_vertices: [3, 1, 2, 1],
            neighbors: &[0, 1, 3],
        },
        FaceData {
            vertices: &[2, 3, 0],
            normal_vertices: [3, 2, 0, 2],
            neighbors: &[0, 1, 2],
        },
    ],
};

const_assert_eq!(CUBE_TOPOLOGY.vertices.len(), 8);
const_assert_eq!(CUBE_TOPOLOGY.faces.len(), 6);
const_assert_eq!(TETRAHEDRON_TOPOLOGY.vertices.len(), 4);
const_assert_eq!(TETRAHEDRON_TOPOLOGY.faces.len(), 4);
