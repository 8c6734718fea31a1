//! In-memory RGBA pixel surface.

use image::{Rgba, RgbaImage};
use spheroid_common::{Color, Size};

use super::DrawSurface;

/// A [`DrawSurface`] backed by an [`RgbaImage`].
///
/// Polygons are filled with an even-odd scanline rule sampled at pixel
/// centers; the outline is a 1px line blended over the fill.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    image: RgbaImage,
    scratch: Vec<f64>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            scratch: Vec::new(),
        }
    }

    /// Reallocate for a new size. Contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.image.width() != width || self.image.height() != height {
            self.image = RgbaImage::new(width, height);
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.image.width() || y >= self.image.height() {
            return None;
        }
        let Rgba([r, g, b, a]) = *self.image.get_pixel(x, y);
        Some(Color::from_rgba(r, g, b, a))
    }

    fn blend(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        let px = self.image.get_pixel_mut(x as u32, y as u32);
        let Rgba([r, g, b, a]) = *px;
        let out = color.blend_over(Color::from_rgba(r, g, b, a));
        *px = Rgba([out.r, out.g, out.b, out.a]);
    }

    fn fill_span(&mut self, y: i64, x0: f64, x1: f64, color: Color) {
        // Pixels whose centers fall in [x0, x1).
        let start = (x0 - 0.5).ceil().max(0.0) as i64;
        let end = ((x1 - 0.5).ceil() as i64).min(self.image.width() as i64);
        for x in start..end {
            self.blend(x, y, color);
        }
    }

    fn fill(&mut self, points: &[[f64; 2]], color: Color) {
        let (min_y, max_y) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p[1]), hi.max(p[1]))
            });
        let first_row = (min_y - 0.5).ceil().max(0.0) as i64;
        let last_row = ((max_y - 0.5).floor() as i64).min(self.image.height() as i64 - 1);

        let mut xs = std::mem::take(&mut self.scratch);
        for y in first_row..=last_row {
            let sample_y = y as f64 + 0.5;
            xs.clear();
            for (k, a) in points.iter().enumerate() {
                let b = points[(k + 1) % points.len()];
                // Half-open in y so shared vertices count once.
                if (a[1] <= sample_y) != (b[1] <= sample_y) {
                    let t = (sample_y - a[1]) / (b[1] - a[1]);
                    xs.push(a[0] + t * (b[0] - a[0]));
                }
            }
            xs.sort_by(f64::total_cmp);
            for pair in xs.chunks_exact(2) {
                self.fill_span(y, pair[0], pair[1], color);
            }
        }
        self.scratch = xs;
    }

    fn line(&mut self, a: [f64; 2], b: [f64; 2], color: Color) {
        let (dx, dy) = (b[0] - a[0], b[1] - a[1]);
        let steps = dx.abs().max(dy.abs()).ceil().clamp(1.0, 16_384.0) as i64;
        // Skip the end point; the next edge starts there.
        for s in 0..steps {
            let t = s as f64 / steps as f64;
            let x = (a[0] + t * dx).floor() as i64;
            let y = (a[1] + t * dy).floor() as i64;
            self.blend(x, y, color);
        }
    }
}

impl DrawSurface for PixelCanvas {
    fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }

    fn clear(&mut self, color: Color) {
        let fill = Rgba([color.r, color.g, color.b, color.a]);
        for px in self.image.pixels_mut() {
            *px = fill;
        }
    }

    fn fill_polygon(&mut self, points: &[[f64; 2]], fill: Color, stroke: Color) {
        if points.len() < 3 || points.iter().flatten().any(|v| !v.is_finite()) {
            return;
        }
        self.fill(points, fill);
        if stroke.a > 0 {
            for (k, &a) in points.iter().enumerate() {
                self.line(a, points[(k + 1) % points.len()], stroke);
            }
        }
    }
}
