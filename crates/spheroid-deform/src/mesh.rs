//! Deformed sphere mesh grid.
//!
//! The grid is `(phi_segments + 1) × (theta_segments + 1)` points, row `j`
//! at `phi = j·π/phi_segments` (pole to pole) and column `i` at
//! `theta = i·2π/theta_segments` (around the equator). The seam column at
//! `theta = 2π` and the pole rows are kept as separate, unwelded points.

use std::f64::consts::{PI, TAU};

use spheroid_common::MeshError;

/// A point or direction in 3D space.
pub type Point3 = [f64; 3];

/// Unit direction of an undeformed sphere sample.
pub fn base_point(theta: f64, phi: f64) -> Point3 {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    [sin_phi * cos_theta, sin_phi * sin_theta, cos_phi]
}

/// Angular coordinates `(theta, phi)` of grid index `(j, i)`.
pub fn grid_angles(j: usize, i: usize, theta_segments: u32, phi_segments: u32) -> (f64, f64) {
    let theta = i as f64 * TAU / theta_segments as f64;
    let phi = j as f64 * PI / phi_segments as f64;
    (theta, phi)
}

/// Rectangular grid of deformed sphere points, stored row-major by `phi`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    theta_segments: u32,
    phi_segments: u32,
    points: Vec<Point3>,
}

impl Mesh {
    /// Resize the grid for a resolution, keeping the allocation when possible.
    ///
    /// Every point is reset to the origin.
    pub(crate) fn reshape(&mut self, theta_segments: u32, phi_segments: u32) -> Result<(), MeshError> {
        if theta_segments == 0 || phi_segments == 0 {
            return Err(MeshError::InvalidResolution {
                theta: theta_segments,
                phi: phi_segments,
            });
        }
        self.theta_segments = theta_segments;
        self.phi_segments = phi_segments;
        let len = self.rows() * self.cols();
        self.points.clear();
        self.points.resize(len, [0.0; 3]);
        Ok(())
    }

    pub fn theta_segments(&self) -> u32 {
        self.theta_segments
    }

    pub fn phi_segments(&self) -> u32 {
        self.phi_segments
    }

    /// Number of rows (`phi_segments + 1`), or 0 for an empty mesh.
    pub fn rows(&self) -> usize {
        if self.phi_segments == 0 {
            0
        } else {
            self.phi_segments as usize + 1
        }
    }

    /// Number of columns (`theta_segments + 1`), or 0 for an empty mesh.
    pub fn cols(&self) -> usize {
        if self.theta_segments == 0 {
            0
        } else {
            self.theta_segments as usize + 1
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Point at row `j` (phi) and column `i` (theta).
    pub fn point(&self, j: usize, i: usize) -> Option<Point3> {
        if j >= self.rows() || i >= self.cols() {
            return None;
        }
        self.points.get(j * self.cols() + i).copied()
    }

    pub(crate) fn set(&mut self, j: usize, i: usize, p: Point3) {
        let cols = self.cols();
        self.points[j * cols + i] = p;
    }

    /// Number of quads (`phi_segments × theta_segments`).
    pub fn quad_count(&self) -> usize {
        self.phi_segments as usize * self.theta_segments as usize
    }

    /// Corners of quad `(j, i)` in order `(j,i)`, `(j,i+1)`, `(j+1,i)`, `(j+1,i+1)`.
    pub fn quad(&self, j: usize, i: usize) -> Option<[Point3; 4]> {
        Some([
            self.point(j, i)?,
            self.point(j, i + 1)?,
            self.point(j + 1, i)?,
            self.point(j + 1, i + 1)?,
        ])
    }

    /// Iterate all quads row by row.
    pub fn quads(&self) -> impl Iterator<Item = [Point3; 4]> + '_ {
        let rows = self.phi_segments as usize;
        let cols = self.theta_segments as usize;
        (0..rows)
            .flat_map(move |j| (0..cols).map(move |i| (j, i)))
            .filter_map(move |(j, i)| self.quad(j, i))
    }
}

// =============================================================================
// Tests
// =============================================================================
