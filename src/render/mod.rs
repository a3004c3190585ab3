mod frame;
mod null_renderer;

pub use frame::{AreaChartFrame, BandPaint, BandPrimitive, FocusMarker};
pub use null_renderer::NullRenderer;

use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized pixel-space frame, so drawing code
/// stays isolated from stacking, scales and selection.
pub trait Renderer {
    fn render(&mut self, frame: &AreaChartFrame) -> ChartResult<()>;
}
