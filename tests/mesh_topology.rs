use carve3d::math::{Point, Real};
use carve3d::shape::{Mesh, MeshError};

fn p(x: Real, y: Real, z: Real) -> Point<Real> {
    Point::new(x, y, z)
}

fn tetrahedron() -> Mesh {
    Mesh::from_buffers(
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, 0.0, 1.0),
        ],
        vec![[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]],
    )
    .unwrap()
}

fn cube() -> Mesh {
    Mesh::from_buffers(
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, 0.0, 1.0),
            p(1.0, 0.0, 1.0),
            p(1.0, 1.0, 1.0),
            p(0.0, 1.0, 1.0),
        ],
        vec![
            [0, 2, 1],
            [0, 3, 2],
            [4, 5, 6],
            [4, 6, 7],
            [0, 1, 5],
            [0, 5, 4],
            [1, 2, 6],
            [1, 6, 5],
            [2, 3, 7],
            [2, 7, 6],
            [3, 0, 4],
            [3, 4, 7],
        ],
    )
    .unwrap()
}

#[test]
fn tetrahedron_is_closed_convex_and_single() {
    let mesh = tetrahedron();
    assert!(mesh.is_closed());
    assert!(mesh.is_convex());
    assert!(!mesh.is_multiple());
    assert_eq!(mesh.num_connected_components(), 1);
}

#[test]
fn cube_is_closed_and_convex() {
    let mesh = cube();
    assert!(mesh.is_closed());
    assert!(mesh.is_convex());
    assert!(!mesh.is_multiple());
}

#[test]
fn open_box_is_not_closed() {
    let cube = cube();
    // Drop the two top triangles, leaving the rim edges with a single use.
    let open_faces = cube
        .indices()
        .iter()
        .copied()
        .filter(|idx| *idx != [4, 5, 6] && *idx != [4, 6, 7])
        .collect();
    let mesh = Mesh::from_buffers(cube.vertices().to_vec(), open_faces).unwrap();

    assert!(!mesh.is_closed());
    assert!(!mesh.is_multiple());
}

#[test]
fn edge_shared_by_three_faces_is_not_closed() {
    let mesh = Mesh::from_buffers(
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, 0.0, 1.0),
            p(0.0, -1.0, 0.0),
        ],
        vec![[0, 1, 2], [0, 1, 3], [0, 1, 4]],
    )
    .unwrap();

    assert!(!mesh.is_closed());
}

#[test]
fn two_disjoint_tetrahedra_are_multiple() {
    let single = tetrahedron();
    let mut vertices = single.vertices().to_vec();
    vertices.extend(single.vertices().iter().map(|v| p(v.x + 10.0, v.y, v.z)));

    let mut faces = single.indices().to_vec();
    faces.extend(single.indices().iter().map(|idx| idx.map(|i| i + 4)));

    let mesh = Mesh::from_buffers(vertices, faces).unwrap();
    assert_eq!(mesh.vertices().len(), 8);
    assert_eq!(mesh.indices().len(), 8);

    assert!(mesh.is_multiple());
    assert_eq!(mesh.num_connected_components(), 2);
    // Both components are closed tetrahedra, so the union still is.
    assert!(mesh.is_closed());
}

#[test]
fn vertex_on_both_sides_of_a_face_is_not_convex() {
    // A flat triangle with one satellite vertex above it and one below.
    let mesh = Mesh::from_buffers(
        vec![
            p(0.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(1.0, 2.0, 0.0),
            p(1.0, 1.0, 1.0),
            p(1.0, 1.0, -1.0),
        ],
        vec![[0, 1, 2], [0, 1, 3], [0, 1, 4]],
    )
    .unwrap();

    assert!(!mesh.is_convex());
}

#[test]
fn unreferenced_vertex_is_its_own_component() {
    let single = tetrahedron();
    let mut vertices = single.vertices().to_vec();
    vertices.push(p(50.0, 50.0, 50.0));

    let mesh = Mesh::from_buffers(vertices, single.indices().to_vec()).unwrap();
    assert_eq!(mesh.num_connected_components(), 2);
    assert!(mesh.is_multiple());
}

#[test]
fn face_accessor_materializes_positions() {
    let mesh = tetrahedron();
    let face = mesh.face(3);
    assert_eq!(face.a, p(1.0, 0.0, 0.0));
    assert_eq!(face.b, p(0.0, 1.0, 0.0));
    assert_eq!(face.c, p(0.0, 0.0, 1.0));
    assert!(!face.is_degenerate());
}

#[test]
fn from_buffers_rejects_invalid_input() {
    assert_eq!(
        Mesh::from_buffers(vec![], vec![]).unwrap_err(),
        MeshError::Empty
    );
    assert_eq!(
        Mesh::from_buffers(vec![p(0.0, 0.0, 0.0)], vec![]).unwrap_err(),
        MeshError::Empty
    );

    // Out-of-range index.
    assert_eq!(
        Mesh::from_buffers(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)],
            vec![[0, 1, 3]],
        )
        .unwrap_err(),
        MeshError::DegenerateFace
    );

    // Repeated index.
    assert_eq!(
        Mesh::from_buffers(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)],
            vec![[0, 1, 1]],
        )
        .unwrap_err(),
        MeshError::DegenerateFace
    );

    // Zero-area face.
    assert_eq!(
        Mesh::from_buffers(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)],
            vec![[0, 1, 2]],
        )
        .unwrap_err(),
        MeshError::DegenerateFace
    );
}
