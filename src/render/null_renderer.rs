use crate::error::ChartResult;
use crate::render::{AreaChartFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates every frame so invalid geometry is caught without a
/// drawing backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_band_count: usize,
    pub last_vertex_count: usize,
    pub last_had_marker: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &AreaChartFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_band_count = frame.bands.len();
        self.last_vertex_count = frame
            .bands
            .iter()
            .map(|band| band.geometry.fill_polygon.len())
            .sum();
        self.last_had_marker = frame.marker.is_some();
        Ok(())
    }
}
