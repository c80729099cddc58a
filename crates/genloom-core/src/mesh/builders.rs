//! Fixed-constant builders, one per archetype.

use std::f64::consts::PI;

use super::{Mesh, UvLayout};

/// Two triangles per side of an eight-corner box: bottom quad `0..4`, top quad `4..8`.
const BOX_FACES: [[u32; 3]; 12] = [
    [0, 1, 2],
    [0, 2, 3],
    [4, 7, 6],
    [4, 6, 5],
    [0, 4, 5],
    [0, 5, 1],
    [2, 6, 7],
    [2, 7, 3],
    [0, 3, 7],
    [0, 7, 4],
    [1, 5, 6],
    [1, 6, 2],
];

const RING_SEGMENTS: u32 = 8;
const BUILDING_FLOORS: u32 = 3;
const TRUNK_SEGMENTS: u32 = 6;

fn ring_angle(index: u32, segments: u32) -> f64 {
    index as f64 * 2.0 * PI / segments as f64
}

/// Connect the ring starting at `lower` to the ring directly above it.
fn stitch_rings(faces: &mut Vec<[u32; 3]>, lower: u32, ring_len: u32) {
    let upper = lower + ring_len;
    for i in 0..ring_len {
        let next = (i + 1) % ring_len;
        faces.push([lower + i, lower + next, upper + next]);
        faces.push([lower + i, upper + next, upper + i]);
    }
}

pub(super) fn quad_prism() -> Mesh {
    let vertices = vec![
        [-1.0, -1.0, 0.0],
        [1.0, -1.0, 0.0],
        [1.0, 1.0, 0.0],
        [-1.0, 1.0, 0.0],
        [-0.5, -0.5, 1.0],
        [0.5, -0.5, 1.0],
        [0.5, 0.5, 1.0],
        [-0.5, 0.5, 1.0],
    ];

    Mesh::new(vertices, BOX_FACES.to_vec(), UvLayout::LinearRamp)
}

/// Three vertices per angular step (rim, upper, lower), one triangle each.
pub(super) fn sphere_ring() -> Mesh {
    let mut vertices = Vec::with_capacity(RING_SEGMENTS as usize * 3);
    for i in 0..RING_SEGMENTS {
        let (sin, cos) = ring_angle(i, RING_SEGMENTS).sin_cos();
        vertices.push([cos, sin, 0.0]);
        vertices.push([cos * 0.5, sin * 0.5, 0.5]);
        vertices.push([cos * 0.5, sin * 0.5, -0.5]);
    }

    let faces = (0..vertices.len() as u32)
        .step_by(3)
        .map(|i| [i, i + 1, i + 2])
        .collect();

    Mesh::new(vertices, faces, UvLayout::LinearRamp)
}

pub(super) fn cube() -> Mesh {
    let vertices = vec![
        [-1.0, -1.0, -1.0],
        [1.0, -1.0, -1.0],
        [1.0, 1.0, -1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, 1.0],
        [-1.0, 1.0, 1.0],
    ];

    Mesh::new(vertices, BOX_FACES.to_vec(), UvLayout::CornerCycle)
}

/// Side wall only; there are no cap faces.
pub(super) fn cylinder() -> Mesh {
    let mut vertices = Vec::with_capacity(RING_SEGMENTS as usize * 2);
    for z in [-1.0, 1.0] {
        for i in 0..RING_SEGMENTS {
            let (sin, cos) = ring_angle(i, RING_SEGMENTS).sin_cos();
            vertices.push([cos, sin, z]);
        }
    }

    let mut faces = Vec::with_capacity(RING_SEGMENTS as usize * 2);
    stitch_rings(&mut faces, 0, RING_SEGMENTS);

    Mesh::new(vertices, faces, UvLayout::LinearRamp)
}

pub(super) fn building() -> Mesh {
    let mut vertices = vec![
        [-2.0, -2.0, 0.0],
        [2.0, -2.0, 0.0],
        [2.0, 2.0, 0.0],
        [-2.0, 2.0, 0.0],
    ];
    for floor in 1..=BUILDING_FLOORS {
        let height = (floor * 2) as f64;
        vertices.extend_from_slice(&[
            [-1.5, -1.5, height],
            [1.5, -1.5, height],
            [1.5, 1.5, height],
            [-1.5, 1.5, height],
        ]);
    }

    let mut faces = Vec::with_capacity((BUILDING_FLOORS * 8) as usize);
    for floor in 0..BUILDING_FLOORS {
        stitch_rings(&mut faces, floor * 4, 4);
    }

    Mesh::new(vertices, faces, UvLayout::LinearRamp)
}

pub(super) fn organic() -> Mesh {
    let mut vertices = Vec::with_capacity((TRUNK_SEGMENTS * RING_SEGMENTS) as usize);
    for segment in 0..TRUNK_SEGMENTS {
        let height = segment as f64 * 0.5;
        let radius = 0.3 + 0.1 * height.sin();
        for j in 0..RING_SEGMENTS {
            let (sin, cos) = ring_angle(j, RING_SEGMENTS).sin_cos();
            vertices.push([radius * cos, radius * sin, height]);
        }
    }

    let mut faces = Vec::with_capacity(((TRUNK_SEGMENTS - 1) * RING_SEGMENTS * 2) as usize);
    for segment in 0..TRUNK_SEGMENTS - 1 {
        stitch_rings(&mut faces, segment * RING_SEGMENTS, RING_SEGMENTS);
    }

    Mesh::new(vertices, faces, UvLayout::LinearRamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: [f64; 3], b: [f64; 3]) {
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-12, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn counts_per_archetype() {
        let cases = [
            (quad_prism(), 8, 12),
            (sphere_ring(), 24, 8),
            (cube(), 8, 12),
            (cylinder(), 16, 16),
            (building(), 16, 24),
            (organic(), 48, 80),
        ];
        for (mesh, vertices, faces) in cases {
            assert_eq!(mesh.vertex_count(), vertices);
            assert_eq!(mesh.face_count(), faces);
        }
    }

    #[test]
    fn quad_prism_top_is_narrower() {
        let mesh = quad_prism();
        assert_eq!(mesh.vertices[0], [-1.0, -1.0, 0.0]);
        assert_eq!(mesh.vertices[6], [0.5, 0.5, 1.0]);
    }

    #[test]
    fn sphere_ring_layout() {
        let mesh = sphere_ring();
        assert_close(mesh.vertices[0], [1.0, 0.0, 0.0]);
        assert_close(mesh.vertices[1], [0.5, 0.0, 0.5]);
        assert_close(mesh.vertices[2], [0.5, 0.0, -0.5]);
        // quarter turn at step two
        assert_close(mesh.vertices[6], [0.0, 1.0, 0.0]);
        assert_eq!(mesh.faces[0], [0, 1, 2]);
        assert_eq!(mesh.faces[7], [21, 22, 23]);
    }

    #[test]
    fn cylinder_rings_and_wrap_around() {
        let mesh = cylinder();
        assert!(mesh.vertices[..8].iter().all(|v| v[2] == -1.0));
        assert!(mesh.vertices[8..].iter().all(|v| v[2] == 1.0));
        assert_eq!(mesh.faces[0], [0, 1, 9]);
        assert_eq!(mesh.faces[1], [0, 9, 8]);
        assert_eq!(mesh.faces[14], [7, 0, 8]);
        assert_eq!(mesh.faces[15], [7, 8, 15]);
    }

    #[test]
    fn building_floors() {
        let mesh = building();
        let heights: Vec<f64> = mesh.vertices.iter().step_by(4).map(|v| v[2]).collect();
        assert_eq!(heights, vec![0.0, 2.0, 4.0, 6.0]);
        assert_eq!(mesh.vertices[4], [-1.5, -1.5, 2.0]);
        assert_eq!(mesh.faces[8], [4, 5, 9]);
        assert!(mesh.faces.iter().flatten().all(|&i| i < 16));
    }

    #[test]
    fn organic_radius_follows_height() {
        let mesh = organic();
        for segment in 0..6 {
            let height = segment as f64 * 0.5;
            let first = mesh.vertices[segment * 8];
            assert!((first[2] - height).abs() < 1e-12);
            assert!((first[0] - (0.3 + 0.1 * height.sin())).abs() < 1e-12);
        }
        assert_eq!(mesh.faces[78], [39, 32, 40]);
        assert_eq!(mesh.faces[79], [39, 40, 47]);
    }
}
