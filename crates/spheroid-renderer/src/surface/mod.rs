//! Output surfaces the renderer paints into.

mod canvas;

pub use canvas::*;

use spheroid_common::{Color, Size};

/// A mutable 2D pixel surface.
///
/// The renderer reads [`DrawSurface::size`] at the start of every frame,
/// so implementations may change size between frames.
pub trait DrawSurface {
    fn size(&self) -> Size;

    /// Paint every pixel with `color`.
    fn clear(&mut self, color: Color);

    /// Fill a closed polygon with `fill`, then outline it with `stroke`.
    fn fill_polygon(&mut self, points: &[[f64; 2]], fill: Color, stroke: Color);
}
