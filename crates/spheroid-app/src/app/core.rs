//! App construction, per-frame stepping, and status reporting.

use std::path::PathBuf;

use spheroid_common::{Result, SpheroidError};
use spheroid_config::SpheroidConfig;
use spheroid_deform::{PresetLibrary, ShapeDeformer};
use spheroid_renderer::{DrawSurface, FrameParams, FrameStats, OrbitCamera, Renderer};
use tracing::{info, warn};

/// Whether the frame loop should keep running after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    pub(super) config: SpheroidConfig,
    /// Where `s` writes presets. `None` means the platform default.
    pub(super) config_path: Option<PathBuf>,
    pub(super) deformer: ShapeDeformer,
    pub(super) renderer: Renderer,
    pub(super) presets: PresetLibrary,
    pub(super) camera: OrbitCamera,
    pub(super) rotation_x: f64,
    pub(super) depth: f64,
    pub(super) selected: usize,
    pub(super) status: String,
}

impl App {
    /// Build from config, applying `preset` (or the configured initial preset).
    ///
    /// An unknown `preset` is an error; an unknown configured preset only warns.
    pub fn new(config: SpheroidConfig, preset: Option<&str>) -> Result<Self> {
        let mut deformer = ShapeDeformer::new(config.deformer.base_radius);
        for extra in &config.deformer.extra_modes {
            let index = deformer.add_mode(extra.to_mode());
            info!(index, name = %extra.name, "extra mode added");
        }

        let mut presets = PresetLibrary::new(config.presets.iter().cloned());
        match (preset, config.deformer.initial_preset.as_deref()) {
            (Some(name), _) => {
                let chosen = presets
                    .select(name)
                    .ok_or_else(|| SpheroidError::Other(format!("unknown preset {name:?}")))?;
                deformer.apply_preset(chosen);
            }
            (None, Some(name)) => match presets.select(name) {
                Some(chosen) => deformer.apply_preset(chosen),
                None => warn!("deformer.initial_preset {name:?} not found, using mode defaults"),
            },
            (None, None) => {}
        }

        let app = Self {
            renderer: Renderer::from_config(&config),
            camera: OrbitCamera::from_config(&config.camera),
            rotation_x: config.camera.rotation_x,
            depth: config.renderer.depth,
            config,
            config_path: None,
            deformer,
            presets,
            selected: 0,
            status: String::new(),
        };
        info!(
            modes = app.deformer.mode_count(),
            presets = app.presets.len(),
            "app ready"
        );
        Ok(app)
    }

    /// Save presets to `path` instead of the platform default config.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    pub fn config(&self) -> &SpheroidConfig {
        &self.config
    }

    pub fn deformer(&self) -> &ShapeDeformer {
        &self.deformer
    }

    pub fn presets(&self) -> &PresetLibrary {
        &self.presets
    }

    /// Index of the mode the amplitude keys act on.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Message from the last action, if it produced one.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Advance the camera orbit and X rotation by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.camera.advance(dt);
        self.rotation_x += self.config.camera.rotation_speed * dt;
    }

    pub fn frame_params(&self) -> FrameParams {
        FrameParams {
            rotation_x: self.rotation_x,
            camera_angle: self.camera.angle(),
            depth: self.depth,
            theta_segments: self.config.renderer.resolution_theta,
            phi_segments: self.config.renderer.resolution_phi,
        }
    }

    /// Paint the current state onto `surface`.
    pub fn render<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
    ) -> Result<FrameStats> {
        let params = self.frame_params();
        Ok(self.renderer.draw(&self.deformer, &params, surface)?)
    }

    /// One-line summary for the bottom of the terminal.
    pub fn status_line(&self, fps: f64) -> String {
        let mode = self
            .deformer
            .mode(self.selected)
            .map(|m| format!("[{}/{}] {} {:.1}", self.selected + 1, self.deformer.mode_count(), m.name, m.amplitude))
            .unwrap_or_else(|| "no modes".into());
        let preset = self.presets.current().map(|p| p.name.as_str()).unwrap_or("-");
        let mut line = format!("{mode} | preset {preset} | depth {:.2} | {fps:.0} fps", self.depth);
        if !self.status.is_empty() {
            line.push_str(" | ");
            line.push_str(&self.status);
        }
        line
    }
}
