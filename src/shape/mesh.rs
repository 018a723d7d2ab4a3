//! The indexed triangle mesh and its topology predicates.

use crate::math::{Point, Real};
use crate::shape::Face3;
use crate::utils::hashmap::HashMap;
use crate::utils::SortedPair;

/// An error produced while building a mesh or loading it from a file.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshError {
    /// The file could not be opened for reading.
    #[error("the mesh file could not be opened")]
    FileNotFound,
    /// No usable vertex or no usable face was found.
    #[error("the mesh contains no vertices or no faces")]
    Empty,
    /// A face references an out-of-range or repeated vertex, or spans no area.
    #[error("the mesh contains an out-of-range, repeated, or zero-area face")]
    DegenerateFace,
}

/// An indexed triangle mesh.
///
/// The vertex buffer holds unique positions (duplicates are merged on load)
/// and each face is a triple of indices into it. A successfully loaded mesh
/// upholds three invariants: every index is in range, the three indices of a
/// face are pairwise distinct, and every face spans a non-zero area.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub(crate) vertices: Vec<Point<Real>>,
    pub(crate) indices: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Mesh::default()
    }

    /// Creates a mesh from raw vertex and index buffers.
    ///
    /// The buffers are adopted as-is, except that every face is validated
    /// against the mesh invariants; vertices are not merged.
    pub fn from_buffers(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Mesh, MeshError> {
        if vertices.is_empty() || indices.is_empty() {
            return Err(MeshError::Empty);
        }

        let mesh = Mesh { vertices, indices };
        if !mesh.indices.iter().all(|idx| mesh.is_face_valid(idx)) {
            return Err(MeshError::DegenerateFace);
        }

        Ok(mesh)
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh, one triple of vertex indices per face.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The face with index `fid`, materialized as a stand-alone triangle.
    pub fn face(&self, fid: u32) -> Face3 {
        let idx = self.indices[fid as usize];
        Face3::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// Tests that `idx` references three distinct, in-range vertices spanning
    /// a non-zero area.
    pub(crate) fn is_face_valid(&self, idx: &[u32; 3]) -> bool {
        let num_vertices = self.vertices.len() as u32;
        if idx[0] >= num_vertices || idx[1] >= num_vertices || idx[2] >= num_vertices {
            return false;
        }

        if idx[0] == idx[1] || idx[0] == idx[2] || idx[1] == idx[2] {
            return false;
        }

        !Face3::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
        .is_degenerate()
    }

    /// Tests if this mesh is a closed manifold surface.
    ///
    /// Every undirected edge must be used by exactly two faces: an edge used
    /// once is a boundary, and an edge used three or more times is a
    /// non-manifold fan.
    pub fn is_closed(&self) -> bool {
        let mut edges: HashMap<SortedPair<u32>, u32> = HashMap::new();

        for idx in &self.indices {
            for k in 0..3 {
                let edge = SortedPair::new(idx[k], idx[(k + 1) % 3]);
                *edges.entry(edge).or_insert(0) += 1;
            }
        }

        edges.values().all(|&uses| uses == 2)
    }

    /// Tests if this mesh is convex.
    ///
    /// For every face, every vertex not belonging to the face must lie in a
    /// single closed half-space of the face's supporting plane. Vertices with
    /// a signed distance of exactly zero count for neither side. The test is
    /// exhaustive over faces × vertices, with no acceleration structure.
    pub fn is_convex(&self) -> bool {
        for idx in &self.indices {
            let origin = self.vertices[idx[0] as usize];
            let edge1 = self.vertices[idx[1] as usize] - origin;
            let edge2 = self.vertices[idx[2] as usize] - origin;
            let normal = edge1.cross(&edge2);

            let mut found_positive = false;
            let mut found_negative = false;

            for (i, vertex) in self.vertices.iter().enumerate() {
                if idx.contains(&(i as u32)) {
                    continue;
                }

                let side = normal.dot(&(vertex - origin));
                if side > 0.0 {
                    found_positive = true;
                } else if side < 0.0 {
                    found_negative = true;
                }
            }

            if found_positive && found_negative {
                return false;
            }
        }

        true
    }

    /// The number of connected components of this mesh.
    ///
    /// Two vertices are connected when they appear in the same face. The
    /// traversal is an explicit worklist flood fill that rescans the face list
    /// for every visited vertex: fine for validation-sized meshes, quadratic
    /// on large ones.
    pub fn num_connected_components(&self) -> usize {
        let mut components = 0;
        let mut assigned = vec![false; self.vertices.len()];
        let mut worklist: Vec<u32> = Vec::new();

        for seed in 0..self.vertices.len() {
            if assigned[seed] {
                continue;
            }

            components += 1;
            worklist.push(seed as u32);

            while let Some(vertex) = worklist.pop() {
                if assigned[vertex as usize] {
                    continue;
                }
                assigned[vertex as usize] = true;

                for idx in &self.indices {
                    if idx.contains(&vertex) {
                        for &other in idx {
                            if !assigned[other as usize] {
                                worklist.push(other);
                            }
                        }
                    }
                }
            }
        }

        components
    }

    /// Tests if this mesh holds more than one connected component.
    pub fn is_multiple(&self) -> bool {
        self.num_connected_components() > 1
    }
}
