//! Frame pipeline: mesh in, painted triangles out.

mod pipeline;
mod types;

pub use pipeline::Renderer;
pub use types::{FrameParams, FrameStats};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawSurface, PixelCanvas};
    use spheroid_common::{Color, MeshError, Size};
    use spheroid_config::SpheroidConfig;
    use spheroid_deform::ShapeDeformer;

    /// Records draw calls instead of rasterizing.
    struct Recorder {
        size: Size,
        clears: Vec<Color>,
        polygons: Vec<(Vec<[f64; 2]>, Color, Color)>,
    }

    impl Recorder {
        fn new(width: u32, height: u32) -> Self {
            Self {
                size: Size::new(width, height),
                clears: Vec::new(),
                polygons: Vec::new(),
            }
        }

        fn mean_point(&self) -> (f64, f64) {
            let pts: Vec<[f64; 2]> = self.polygons.iter().flat_map(|(p, _, _)| p.clone()).collect();
            let n = pts.len() as f64;
            let x = pts.iter().map(|p| p[0]).sum::<f64>() / n;
            let y = pts.iter().map(|p| p[1]).sum::<f64>() / n;
            (x, y)
        }
    }

    impl DrawSurface for Recorder {
        fn size(&self) -> Size {
            self.size
        }

        fn clear(&mut self, color: Color) {
            self.clears.push(color);
            self.polygons.clear();
        }

        fn fill_polygon(&mut self, points: &[[f64; 2]], fill: Color, stroke: Color) {
            self.polygons.push((points.to_vec(), fill, stroke));
        }
    }

    fn sphere() -> ShapeDeformer {
        ShapeDeformer::empty(200.0)
    }

    fn params(depth: f64, theta: u32, phi: u32) -> FrameParams {
        FrameParams {
            rotation_x: 0.0,
            camera_angle: 0.0,
            depth,
            theta_segments: theta,
            phi_segments: phi,
        }
    }

    #[test]
    fn orthographic_sphere_stays_within_radius() {
        let mut renderer = Renderer::new();
        let stats = renderer
            .build_frame(&sphere(), &params(0.0, 24, 12), Size::new(400, 400))
            .unwrap();
        assert!(stats.drawn > 0);
        for tri in renderer.triangles() {
            for [x, y] in tri.points {
                let (dx, dy) = (x - 200.0, y - 200.0);
                assert!((dx * dx + dy * dy).sqrt() <= 200.0 + 1e-6);
            }
        }
    }

    #[test]
    fn culls_far_hemisphere() {
        let mut renderer = Renderer::new();
        let stats = renderer
            .build_frame(&sphere(), &params(1.5, 32, 16), Size::new(400, 400))
            .unwrap();
        assert_eq!(stats.total, 2 * 32 * 16);
        assert_eq!(stats.culled + stats.drawn, stats.total);
        // Near hemisphere minus the collapsed north-pole triangles, give or
        // take the near-degenerate ones at the south pole.
        assert!((480..=512).contains(&stats.drawn), "drawn = {}", stats.drawn);
    }

    #[test]
    fn triangles_sorted_back_to_front() {
        let mut deformer = ShapeDeformer::default();
        deformer.set_amplitude(6, 15.0);
        let mut renderer = Renderer::new();
        let p = FrameParams {
            rotation_x: 20.0,
            camera_angle: 37.0,
            ..FrameParams::default()
        };
        renderer.build_frame(&deformer, &p, Size::new(320, 240)).unwrap();
        let tris = renderer.triangles();
        assert!(!tris.is_empty());
        assert!(tris.windows(2).all(|w| w[0].avg_z <= w[1].avg_z));
    }

    #[test]
    fn all_drawn_triangles_use_palette() {
        let mut renderer = Renderer::new();
        renderer
            .build_frame(&ShapeDeformer::default(), &FrameParams::default(), Size::new(200, 200))
            .unwrap();
        for tri in renderer.triangles() {
            assert!(tri.color.b >= 120 && tri.color.a == 255);
            assert!(tri.color.r <= 40 && tri.color.g <= 120);
        }
    }

    #[test]
    fn zero_resolution_is_an_error() {
        let mut renderer = Renderer::new();
        let err = renderer
            .build_frame(&sphere(), &params(1.5, 0, 20), Size::new(100, 100))
            .unwrap_err();
        assert_eq!(err, MeshError::InvalidResolution { theta: 0, phi: 20 });
    }

    #[test]
    fn draw_clears_then_paints_in_order() {
        let mut renderer = Renderer::new();
        let mut surface = Recorder::new(300, 300);
        let stats = renderer
            .draw(&ShapeDeformer::default(), &FrameParams::default(), &mut surface)
            .unwrap();
        assert_eq!(surface.clears, vec![Color::BLACK]);
        assert_eq!(surface.polygons.len(), stats.drawn);
        for ((points, fill, stroke), tri) in surface.polygons.iter().zip(renderer.triangles()) {
            assert_eq!(points.as_slice(), &tri.points[..]);
            assert_eq!(*fill, tri.color);
            assert_eq!(*stroke, Color::from_rgba(255, 255, 255, 25));
        }
    }

    #[test]
    fn draw_recenters_after_resize() {
        let mut renderer = Renderer::new();
        let mut surface = Recorder::new(400, 400);
        let p = params(1.5, 32, 16);
        renderer.draw(&sphere(), &p, &mut surface).unwrap();
        let (x, y) = surface.mean_point();
        assert!((x - 200.0).abs() < 1.0 && (y - 200.0).abs() < 1.0);

        surface.size = Size::new(800, 200);
        renderer.draw(&sphere(), &p, &mut surface).unwrap();
        let (x, y) = surface.mean_point();
        assert!((x - 400.0).abs() < 1.0 && (y - 100.0).abs() < 1.0);
    }

    #[test]
    fn draws_onto_pixel_canvas() {
        let mut renderer = Renderer::new();
        let mut canvas = PixelCanvas::new(120, 120);
        renderer
            .draw(&ShapeDeformer::empty(40.0), &FrameParams::default(), &mut canvas)
            .unwrap();
        assert_eq!(canvas.pixel(2, 2), Some(Color::BLACK));
        let center = canvas.pixel(60, 60).unwrap();
        assert_ne!(center, Color::BLACK);
        assert!(center.b > center.r);
    }

    #[test]
    fn from_config_reads_colors_and_light() {
        let mut config = SpheroidConfig::default();
        config.renderer.light_direction = [0.0, 0.0, -2.0];
        config.renderer.background = "#102030".into();
        config.renderer.outline = "not a color".into();
        let renderer = Renderer::from_config(&config);
        assert_eq!(renderer.light().direction(), [0.0, 0.0, -1.0]);

        let mut surface = Recorder::new(50, 50);
        let mut renderer = renderer;
        renderer
            .draw(&ShapeDeformer::empty(10.0), &FrameParams::default(), &mut surface)
            .unwrap();
        assert_eq!(surface.clears, vec![Color::rgb(0x10, 0x20, 0x30)]);
        assert_eq!(surface.polygons[0].2, Color::from_rgba(255, 255, 255, 25));
    }

    #[test]
    fn light_change_affects_next_frame() {
        let mut renderer = Renderer::new();
        let deformer = sphere();
        let p = params(0.0, 16, 8);
        renderer.build_frame(&deformer, &p, Size::new(100, 100)).unwrap();
        let before: Vec<Color> = renderer.triangles().iter().map(|t| t.color).collect();

        // Pointing away from every visible face leaves only the ambient floor.
        renderer.set_light_direction(0.0, 0.0, 1.0);
        renderer.build_frame(&deformer, &p, Size::new(100, 100)).unwrap();
        let after: Vec<Color> = renderer.triangles().iter().map(|t| t.color).collect();
        assert_ne!(before, after);
        assert!(after.iter().all(|c| *c == Color::rgb(4, 12, 133)));
    }
}
