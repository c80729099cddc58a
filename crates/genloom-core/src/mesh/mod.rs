//! Procedural mesh synthesis.
//!
//! Every shape endpoint without a real generative backend is served from
//! here: a prompt is mapped to one of six fixed [`Archetype`]s and the
//! matching builder emits a small triangulated mesh. The geometry is
//! placeholder data. Normals are the constant `(0, 0, 1)` and the sphere,
//! cylinder and trunk shapes are open surfaces.
//!
//! All functions are pure; meshes can be built from any number of tasks at
//! once without coordination.

mod archetype;
mod builders;

use serde::{Deserialize, Serialize};

pub use archetype::Archetype;

/// Constant normal written for every vertex.
pub const PLACEHOLDER_NORMAL: [f64; 3] = [0.0, 0.0, 1.0];

/// Unit-square corners cycled as cube texture coordinates.
const CUBE_UV_CORNERS: [[f64; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Triangulated surface in the transport layout used by `mesh_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<[f64; 3]>,
    pub faces: Vec<[u32; 3]>,
    pub normals: Vec<[f64; 3]>,
    pub uvs: Vec<[f64; 2]>,
}

/// Texture coordinate layout filled in by [`Mesh::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UvLayout {
    /// `(i / vertex_count, 0)`
    LinearRamp,
    /// Unit-square corners repeated every four vertices
    CornerCycle,
}

impl Mesh {
    pub(crate) fn new(vertices: Vec<[f64; 3]>, faces: Vec<[u32; 3]>, layout: UvLayout) -> Self {
        let count = vertices.len();
        let normals = vec![PLACEHOLDER_NORMAL; count];
        let uvs = match layout {
            UvLayout::LinearRamp => (0..count)
                .map(|i| [i as f64 / count as f64, 0.0])
                .collect(),
            UvLayout::CornerCycle => (0..count).map(|i| CUBE_UV_CORNERS[i % 4]).collect(),
        };

        Self {
            vertices,
            faces,
            normals,
            uvs,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check the per-vertex attribute lengths and face index bounds.
    pub fn is_consistent(&self) -> bool {
        let count = self.vertices.len();
        self.normals.len() == count
            && self.uvs.len() == count
            && self
                .faces
                .iter()
                .flatten()
                .all(|&index| (index as usize) < count)
    }
}

/// Build the mesh for a shape prompt.
///
/// `style` and `guidance_scale` exist for parity with real text-to-3D
/// backends. They do not influence the procedural output.
pub fn generate(
    prompt: &str,
    _style: Option<&str>,
    _guidance_scale: Option<f64>,
) -> (Archetype, Mesh) {
    let archetype = Archetype::select(prompt);
    (archetype, archetype.build())
}

/// Build the point-cloud placeholder. Always the tapered quad prism.
pub fn generate_point_cloud(_prompt: &str, _style: Option<&str>) -> Mesh {
    Archetype::QuadPrism.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_archetype_is_consistent() {
        for archetype in Archetype::all() {
            let mesh = archetype.build();
            assert!(mesh.is_consistent(), "{archetype} produced a broken mesh");
            assert!(mesh.normals.iter().all(|n| *n == PLACEHOLDER_NORMAL));
        }
    }

    #[test]
    fn builders_are_deterministic() {
        for archetype in Archetype::all() {
            assert_eq!(archetype.build(), archetype.build());
        }
    }

    #[test]
    fn glowing_sphere_end_to_end() {
        let (archetype, mesh) = generate("a glowing sphere", None, None);
        assert_eq!(archetype, Archetype::SphereRing);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.face_count(), 8);
    }

    #[test]
    fn tower_end_to_end() {
        let (archetype, mesh) = generate("tall stone tower", None, None);
        assert_eq!(archetype, Archetype::Building);
        assert_eq!(mesh.vertex_count(), 16);
    }

    #[test]
    fn unmatched_prompt_defaults_to_cube() {
        let (archetype, mesh) = generate("wooden box", Some("realistic"), Some(15.0));
        assert_eq!(archetype, Archetype::Cube);
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 12);
    }

    #[test]
    fn options_do_not_change_output() {
        let (_, plain) = generate("cylinder", None, None);
        let (_, styled) = generate("cylinder", Some("cartoon"), Some(3.0));
        assert_eq!(plain, styled);
    }

    #[test]
    fn point_cloud_is_quad_prism() {
        let mesh = generate_point_cloud("a sphere", Some("realistic"));
        assert_eq!(mesh, Archetype::QuadPrism.build());
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 12);
    }

    #[test]
    fn linear_ramp_uvs() {
        let mesh = Archetype::Cylinder.build();
        assert_eq!(mesh.uvs[0], [0.0, 0.0]);
        assert_eq!(mesh.uvs[4], [0.25, 0.0]);
        assert_eq!(mesh.uvs[15], [15.0 / 16.0, 0.0]);
    }

    #[test]
    fn cube_cycles_corner_uvs() {
        let mesh = Archetype::Cube.build();
        assert_eq!(&mesh.uvs[..4], &CUBE_UV_CORNERS);
        assert_eq!(&mesh.uvs[4..], &CUBE_UV_CORNERS);
    }

    #[test]
    fn serializes_as_nested_arrays() {
        let json = serde_json::to_value(Archetype::Cube.build()).unwrap();
        assert_eq!(json["vertices"][0], serde_json::json!([-1.0, -1.0, -1.0]));
        assert_eq!(json["faces"][2], serde_json::json!([4, 7, 6]));
        assert_eq!(json["normals"].as_array().unwrap().len(), 8);
    }
}
