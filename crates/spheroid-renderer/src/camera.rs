//! Orbiting camera that drives the Y rotation.

use std::f64::consts::PI;

use spheroid_config::schema::CameraConfig;
use spheroid_deform::Point3;

/// Y rotation, in renderer angle units, for a camera at `position`.
///
/// `atan2(x, z) · 100 / π`: a camera on +z gives 0, on +x gives 50.
pub fn camera_angle(position: Point3) -> f64 {
    position[0].atan2(position[2]) * 100.0 / PI
}

/// Camera circling the origin in the XZ plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    radius: f64,
    /// Radians per second.
    speed: f64,
    phase: f64,
}

impl OrbitCamera {
    pub fn new(radius: f64, speed: f64) -> Self {
        Self {
            radius,
            speed,
            phase: 0.0,
        }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(config.orbit_radius, config.orbit_speed)
    }

    /// Move along the orbit by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.phase = (self.phase + self.speed * dt).rem_euclid(2.0 * PI);
    }

    pub fn position(&self) -> Point3 {
        let (sin, cos) = self.phase.sin_cos();
        [self.radius * sin, 0.0, self.radius * cos]
    }

    pub fn angle(&self) -> f64 {
        camera_angle(self.position())
    }
}
