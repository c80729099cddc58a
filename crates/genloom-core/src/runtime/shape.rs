//! Text-to-3D methods backed by the procedural generator.

use tracing::info;

use crate::catalog::ModelKind;
use crate::error::Result;
use crate::mesh;
use crate::runtime::service::GenerationService;
use crate::runtime::types::{PointCloudGeneration, ShapeGeneration};

impl GenerationService {
    pub async fn generate_point_cloud(
        &self,
        prompt: &str,
        style: Option<&str>,
    ) -> Result<PointCloudGeneration> {
        self.registry.load(ModelKind::PointE).await?;
        info!("Generating 3D asset: {}", prompt);

        let mesh = mesh::generate_point_cloud(prompt, style);
        Ok(PointCloudGeneration {
            point_count: mesh.vertex_count(),
            mesh,
        })
    }

    pub async fn generate_shape(
        &self,
        prompt: &str,
        style: Option<&str>,
        guidance_scale: Option<f64>,
    ) -> Result<ShapeGeneration> {
        self.registry.load(ModelKind::ShapE).await?;
        info!("Generating shape: {}", prompt);

        let (archetype, mesh) = mesh::generate(prompt, style, guidance_scale);
        Ok(ShapeGeneration { archetype, mesh })
    }
}

#[cfg(test)]
mod tests {
    use crate::mesh::Archetype;
    use crate::test_support::offline_service;

    #[tokio::test]
    async fn shape_loads_its_slot() {
        let service = offline_service();
        let shape = service
            .generate_shape("a glowing sphere", None, Some(15.0))
            .await
            .unwrap();
        assert_eq!(shape.archetype, Archetype::SphereRing);
        assert_eq!(shape.mesh.face_count(), 8);
        assert_eq!(service.models_loaded().await, 1);
    }

    #[tokio::test]
    async fn point_cloud_counts_vertices() {
        let service = offline_service();
        let cloud = service
            .generate_point_cloud("spaceship", Some("realistic"))
            .await
            .unwrap();
        assert_eq!(cloud.point_count, 8);
        assert!(cloud.mesh.is_consistent());
    }
}
