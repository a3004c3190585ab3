use std::sync::Arc;

use tracing::trace;

use crate::core::{Fill, TimeScale, ValueScale, project_stacked_area};
use crate::error::ChartResult;
use crate::interaction::SelectionState;
use crate::render::{AreaChartFrame, BandPaint, BandPrimitive, Renderer};

use super::tooltip_resolver::{resolve_focus_marker, resolve_hover_line_x};
use super::{AreaChart, StackedData, TooltipAnchor};

/// Everything a host needs to draw the chart and its overlay.
#[derive(Debug, Clone)]
pub struct ChartView {
    pub data: Arc<StackedData>,
    pub time_scale: TimeScale,
    pub value_scale: ValueScale,
    pub selection: SelectionState,
    pub tooltip: Option<TooltipAnchor>,
}

impl<R: Renderer> AreaChart<R> {
    /// Derived chart state, or `None` when there is nothing to render:
    /// no layers, no inferable time domain or a zero-size viewport.
    pub fn view(&mut self) -> Option<ChartView> {
        let data = self.stacked_data();
        if data.is_empty() || !self.config.viewport.is_drawable() {
            return None;
        }
        let scales = self.scales();
        let time_scale = scales.time?;
        let selection = self.interaction.selection();
        let tooltip = self.resolve_tooltip_anchor(&data, scales, selection);
        Some(ChartView {
            data,
            time_scale,
            value_scale: scales.value,
            selection,
            tooltip,
        })
    }

    /// Pixel-space frame for the current state, `None` when there is nothing to render.
    pub fn frame(&mut self) -> Option<AreaChartFrame> {
        let view = self.view()?;
        let scales = self.scales();
        let mut frame = AreaChartFrame::new(self.config.viewport);
        frame.bands = view
            .data
            .layers
            .iter()
            .map(|layer| BandPrimitive {
                key: layer.key.clone(),
                stroke: layer.stroke,
                paint: match &layer.fill {
                    Fill::Solid(color) => BandPaint::Solid(*color),
                    gradient => BandPaint::PerPoint(
                        layer
                            .datapoints
                            .iter()
                            .map(|point| gradient.color_at(point))
                            .collect(),
                    ),
                },
                geometry: project_stacked_area(
                    layer,
                    &view.data.datetimes,
                    view.time_scale,
                    view.value_scale,
                ),
            })
            .collect();
        frame.hover_line_x = resolve_hover_line_x(&view.data, scales, view.selection);
        frame.marker = resolve_focus_marker(&view.data, scales, view.selection);
        Some(frame)
    }

    /// Draws the current frame. Returns `Ok(false)` when there was nothing to render.
    pub fn render(&mut self) -> ChartResult<bool> {
        let Some(frame) = self.frame() else {
            trace!("nothing to render");
            return Ok(false);
        };
        self.renderer.render(&frame)?;
        Ok(true)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
