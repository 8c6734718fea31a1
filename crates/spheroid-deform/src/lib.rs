//! Procedural sphere deformation.
//!
//! A [`ShapeDeformer`] owns an ordered list of [`DeformationMode`]s. Each mode
//! is a scalar field over the sphere's angular coordinates; the deformer sums
//! them into a radial offset and samples the result into a [`Mesh`] grid.

pub mod control;
pub mod deformer;
pub mod mesh;
pub mod mode;
pub mod preset;

pub use control::ControlEvent;
pub use deformer::ShapeDeformer;
pub use mesh::{base_point, Mesh, Point3};
pub use mode::{DeformationMode, ModeInfo, ModeKind};
pub use preset::{builtin_presets, Preset, PresetLibrary};
