mod frame;
mod null_renderer;
mod path;
mod primitives;
mod svg;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use path::{basis_area, basis_curve};
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PathCommand, PathPrimitive, RectPrimitive, Stroke,
    TextHAlign, TextPrimitive,
};
pub use svg::{SvgRenderer, frame_to_svg};

use crate::error::PlotResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from scale, binning and visibility logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
