//! Per-frame projected triangles and painter's-algorithm ordering.

use spheroid_common::Color;
use spheroid_deform::Point3;

use crate::transform::math::{cross, normalize, sub};

/// A lit, projected triangle ready to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Projected pixel coordinates.
    pub points: [[f64; 2]; 3],
    pub color: Color,
    /// Mean rotated (pre-projection) z of the three corners. Sort key only.
    pub avg_z: f64,
}

/// Unit normal of triangle `(a, b, c)`: `(b - a) × (c - a)`, normalized.
///
/// Degenerate triangles (collapsed pole quads) yield the zero vector.
pub fn face_normal(a: Point3, b: Point3, c: Point3) -> Point3 {
    normalize(cross(sub(b, a), sub(c, a)))
}

/// A triangle faces the viewer when its normal points toward -z.
pub fn is_front_facing(normal: Point3) -> bool {
    normal[2] < 0.0
}

pub fn average_z(a: Point3, b: Point3, c: Point3) -> f64 {
    (a[2] + b[2] + c[2]) / 3.0
}

/// Order triangles by ascending `avg_z` so they paint back to front.
///
/// The sort is stable: equal depths keep generation order.
pub fn sort_back_to_front(triangles: &mut [Triangle]) {
    triangles.sort_by(|a, b| a.avg_z.total_cmp(&b.avg_z));
}
