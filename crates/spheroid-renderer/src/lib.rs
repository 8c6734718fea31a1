//! Software renderer for deformed sphere meshes.
//!
//! [`Renderer::draw`] turns the current [`spheroid_deform::ShapeDeformer`]
//! state into a lit, back-to-front sorted triangle list and paints it onto
//! any [`DrawSurface`]. There is no depth buffer: backface culling plus
//! painter's ordering handle occlusion.

pub mod camera;
pub mod perf;
pub mod renderer;
pub mod shading;
pub mod surface;
pub mod transform;
pub mod triangle;

pub use camera::{camera_angle, OrbitCamera};
pub use perf::FrameTimer;
pub use renderer::{FrameParams, FrameStats, Renderer};
pub use shading::{palette, Light};
pub use surface::{DrawSurface, PixelCanvas};
pub use transform::{Projection, Rotation};
pub use triangle::Triangle;
