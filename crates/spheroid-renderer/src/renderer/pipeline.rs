//! Rotate, project, light, cull, sort, paint.

use spheroid_common::{Color, MeshError, Size};
use spheroid_config::SpheroidConfig;
use spheroid_deform::{Mesh, Point3, ShapeDeformer};
use tracing::{debug, warn};

use super::types::{FrameParams, FrameStats};
use crate::shading::Light;
use crate::surface::DrawSurface;
use crate::transform::{Projection, Rotation};
use crate::triangle::{average_z, face_normal, is_front_facing, sort_back_to_front, Triangle};

const DEFAULT_BACKGROUND: Color = Color::BLACK;
const DEFAULT_OUTLINE: Color = Color {
    r: 255,
    g: 255,
    b: 255,
    a: 25,
};

/// Software renderer for deformed sphere meshes.
///
/// Holds only configuration plus scratch buffers; every frame is computed
/// from the deformer's current state and the frame parameters.
pub struct Renderer {
    light: Light,
    background: Color,
    outline: Color,
    mesh: Mesh,
    triangles: Vec<Triangle>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            light: Light::default(),
            background: DEFAULT_BACKGROUND,
            outline: DEFAULT_OUTLINE,
            mesh: Mesh::default(),
            triangles: Vec::new(),
        }
    }

    /// Create from application config.
    pub fn from_config(config: &SpheroidConfig) -> Self {
        let renderer = &config.renderer;
        Self {
            light: Light::from_direction(renderer.light_direction),
            background: parse_color("renderer.background", &renderer.background, DEFAULT_BACKGROUND),
            outline: parse_color("renderer.outline", &renderer.outline, DEFAULT_OUTLINE),
            ..Self::new()
        }
    }

    /// Replace the light direction. Takes effect on the next frame.
    pub fn set_light_direction(&mut self, x: f64, y: f64, z: f64) {
        self.light = Light::new(x, y, z);
        debug!(direction = ?self.light.direction(), "light direction set");
    }

    pub fn light(&self) -> &Light {
        &self.light
    }

    /// Triangles from the last frame, in paint order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Build the sorted, lit, culled triangle list for a surface of `size`.
    pub fn build_frame(
        &mut self,
        deformer: &ShapeDeformer,
        params: &FrameParams,
        size: Size,
    ) -> Result<FrameStats, MeshError> {
        deformer.generate_mesh_into(&mut self.mesh, params.theta_segments, params.phi_segments)?;

        let rotation = Rotation::from_angles(params.rotation_x, params.camera_angle);
        let projection = Projection::new(params.depth, size);
        let light = self.light;

        self.triangles.clear();
        let mut stats = FrameStats::default();

        for quad in self.mesh.quads() {
            let [p1, p2, p3, p4] = quad.map(|p| rotation.apply(p));
            let flat = quad_projection(&projection, [p1, p2, p3, p4]);

            for (corners, idx) in [([p1, p2, p3], [0, 1, 2]), ([p2, p4, p3], [1, 3, 2])] {
                stats.total += 1;
                let [a, b, c] = corners;
                let normal = face_normal(a, b, c);
                if !is_front_facing(normal) {
                    stats.culled += 1;
                    continue;
                }
                self.triangles.push(Triangle {
                    points: idx.map(|k| flat[k]),
                    color: light.shade(normal),
                    avg_z: average_z(a, b, c),
                });
            }
        }

        sort_back_to_front(&mut self.triangles);
        stats.drawn = self.triangles.len();
        Ok(stats)
    }

    /// Clear `surface` and paint one frame onto it.
    pub fn draw<S: DrawSurface + ?Sized>(
        &mut self,
        deformer: &ShapeDeformer,
        params: &FrameParams,
        surface: &mut S,
    ) -> Result<FrameStats, MeshError> {
        // Size is read per frame so a resized surface re-centers immediately.
        let size = surface.size();
        let stats = self.build_frame(deformer, params, size)?;

        surface.clear(self.background);
        for tri in &self.triangles {
            surface.fill_polygon(&tri.points, tri.color, self.outline);
        }
        Ok(stats)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn quad_projection(projection: &Projection, corners: [Point3; 4]) -> [[f64; 2]; 4] {
    corners.map(|p| projection.project(p))
}

fn parse_color(field: &str, value: &str, fallback: Color) -> Color {
    Color::parse(value).unwrap_or_else(|| {
        warn!("{field} = {value:?} is not a color, using {}", fallback.to_rgba_string());
        fallback
    })
}
