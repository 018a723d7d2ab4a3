//! Wavefront OBJ import and export.

use crate::math::{Point, Real};
use crate::shape::{Mesh, MeshError};
use crate::utils::hashmap::{Entry, HashMap};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

impl Mesh {
    /// Loads this mesh from a Wavefront (`.obj`) file.
    ///
    /// Accepted lines are `v x y z` vertices and triangular `f` faces in the
    /// three classic forms (`i`, `i/t`, `i/t/n`, with 1-based indices);
    /// texture and normal indices are parsed but discarded, and every other
    /// line shape is ignored without error. Vertices with bitwise-identical
    /// coordinates are merged into a single entry, and every face is then
    /// validated against the merged vertex buffer.
    ///
    /// When the file cannot be opened the mesh is left untouched; any later
    /// failure leaves it empty.
    pub fn load_obj(&mut self, path: impl AsRef<Path>) -> Result<(), MeshError> {
        let file = File::open(path.as_ref()).map_err(|_| MeshError::FileNotFound)?;

        self.vertices.clear();
        self.indices.clear();

        let mut obj_vertices: Vec<Point<Real>> = Vec::new();
        let mut obj_faces: Vec<[i64; 3]> = Vec::new();

        for line in BufReader::new(file).lines() {
            let line = line.map_err(|_| MeshError::FileNotFound)?;
            parse_line(&line, &mut obj_vertices, &mut obj_faces);
        }

        if obj_vertices.is_empty() || obj_faces.is_empty() {
            return Err(MeshError::Empty);
        }

        // Merge bitwise-identical vertices, keeping first-occurrence order,
        // and record the raw-to-merged index translation.
        let mut vtx_to_id: HashMap<[u32; 3], u32> = HashMap::new();
        let mut vertices: Vec<Point<Real>> = Vec::with_capacity(obj_vertices.len());
        let mut translation: Vec<u32> = Vec::with_capacity(obj_vertices.len());

        for vertex in &obj_vertices {
            let key = [vertex.x.to_bits(), vertex.y.to_bits(), vertex.z.to_bits()];
            let id = match vtx_to_id.entry(key) {
                Entry::Occupied(entry) => *entry.get(),
                Entry::Vacant(entry) => {
                    let id = vertices.len() as u32;
                    vertices.push(*vertex);
                    *entry.insert(id)
                }
            };
            translation.push(id);
        }

        // Remap the faces through the translation table. A raw index outside
        // the raw vertex list maps to an out-of-range merged index, leaving
        // the bounds check below to reject the face.
        let indices: Vec<[u32; 3]> = obj_faces
            .iter()
            .map(|face| {
                face.map(|i| {
                    usize::try_from(i)
                        .ok()
                        .and_then(|i| translation.get(i).copied())
                        .unwrap_or(u32::MAX)
                })
            })
            .collect();

        let loaded = Mesh { vertices, indices };
        if !loaded.indices.iter().all(|idx| loaded.is_face_valid(idx)) {
            return Err(MeshError::DegenerateFace);
        }

        log::debug!(
            "OBJ loaded: {} vertices ({} duplicates merged), {} faces",
            loaded.vertices.len(),
            obj_vertices.len() - loaded.vertices.len(),
            loaded.indices.len()
        );

        *self = loaded;
        Ok(())
    }

    /// Saves this mesh as a Wavefront (`.obj`) file.
    ///
    /// Writes a single comment header, one `v x y z` line per vertex in
    /// storage order, then one `f i j k` line per face with 1-based indices.
    /// Returns `false` when the destination could not be created or written.
    pub fn save_obj(&self, path: impl AsRef<Path>) -> bool {
        self.write_obj(path.as_ref()).is_ok()
    }

    fn write_obj(&self, path: &Path) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);

        writeln!(out, "# carve3d mesh")?;

        for vertex in &self.vertices {
            writeln!(out, "v {} {} {}", vertex.x, vertex.y, vertex.z)?;
        }

        for idx in &self.indices {
            writeln!(out, "f {} {} {}", idx[0] + 1, idx[1] + 1, idx[2] + 1)?;
        }

        out.flush()
    }
}

/// Parses one OBJ line into the raw vertex and face lists. Unrecognized or
/// malformed lines are ignored without error.
fn parse_line(line: &str, vertices: &mut Vec<Point<Real>>, faces: &mut Vec<[i64; 3]>) {
    let mut tokens = line.split_whitespace();

    match tokens.next() {
        Some("v") => {
            let mut coords = [0.0; 3];
            for coord in &mut coords {
                let Some(token) = tokens.next() else { return };
                let Ok(value) = token.parse::<Real>() else { return };
                *coord = value;
            }

            if tokens.next().is_some() {
                return;
            }

            vertices.push(Point::new(coords[0], coords[1], coords[2]));
        }
        Some("f") => {
            let mut positions = [0i64; 3];
            let mut shape = None;
            for position in &mut positions {
                let Some(token) = tokens.next() else { return };
                let Some((index, token_shape)) = parse_face_group(token) else {
                    return;
                };

                // The three groups of a face line must share one shape.
                if *shape.get_or_insert(token_shape) != token_shape {
                    return;
                }

                *position = i64::from(index) - 1;
            }

            if tokens.next().is_some() {
                return;
            }

            faces.push(positions);
        }
        _ => {}
    }
}

/// Parses one face vertex group (`i`, `i/t` or `i/t/n`, all-digit parts),
/// returning the 1-based position index and the number of parts.
fn parse_face_group(token: &str) -> Option<(u32, usize)> {
    let mut parts = token.split('/');
    let position = parse_index(parts.next()?)?;

    let mut count = 1;
    for part in parts {
        let _ = parse_index(part)?;
        count += 1;
    }

    (count <= 3).then_some((position, count))
}

/// Parses an unsigned all-digit index. Signs, blanks and non-digit characters
/// are rejected.
fn parse_index(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    part.parse::<u32>().ok()
}
