//! Mesh sampling.

use spheroid_common::MeshError;

use super::types::ShapeDeformer;
use crate::mesh::{base_point, grid_angles, Mesh, Point3};

impl ShapeDeformer {
    /// Total radial offset from all modes at `(theta, phi)`.
    pub fn displacement(&self, theta: f64, phi: f64, base: Point3) -> f64 {
        self.modes
            .iter()
            .map(|m| m.evaluate(theta, phi, Some(base)))
            .sum()
    }

    /// Deformed surface point at `(theta, phi)`.
    pub fn surface_point(&self, theta: f64, phi: f64) -> Point3 {
        let base = base_point(theta, phi);
        let r = self.base_radius + self.displacement(theta, phi, base);
        [r * base[0], r * base[1], r * base[2]]
    }

    /// Sample a fresh mesh at the given resolution.
    pub fn generate_mesh(&self, theta_segments: u32, phi_segments: u32) -> Result<Mesh, MeshError> {
        let mut mesh = Mesh::default();
        self.generate_mesh_into(&mut mesh, theta_segments, phi_segments)?;
        Ok(mesh)
    }

    /// Refill `mesh` in place, reusing its allocation.
    pub fn generate_mesh_into(
        &self,
        mesh: &mut Mesh,
        theta_segments: u32,
        phi_segments: u32,
    ) -> Result<(), MeshError> {
        mesh.reshape(theta_segments, phi_segments)?;
        for j in 0..mesh.rows() {
            for i in 0..mesh.cols() {
                let (theta, phi) = grid_angles(j, i, theta_segments, phi_segments);
                mesh.set(j, i, self.surface_point(theta, phi));
            }
        }
        Ok(())
    }
}
