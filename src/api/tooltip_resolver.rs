use std::sync::Arc;

use crate::core::{PixelPoint, Sample};
use crate::interaction::SelectionState;
use crate::render::{FocusMarker, Renderer};

use super::{AreaChart, ChartScales, StackedData};

/// Where the detail overlay goes and which record it describes.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipAnchor {
    /// Overlay position in page coordinates.
    pub position: PixelPoint,
    pub time_index: usize,
    pub layer_index: usize,
    pub sample: Arc<Sample>,
}

impl<R: Renderer> AreaChart<R> {
    /// Tooltip anchor for the current selection, `None` unless a band is focused.
    pub fn tooltip_anchor(&mut self) -> Option<TooltipAnchor> {
        let data = self.stacked_data();
        let scales = self.scales();
        self.resolve_tooltip_anchor(&data, scales, self.interaction.selection())
    }

    pub fn focus_marker(&mut self) -> Option<FocusMarker> {
        let data = self.stacked_data();
        let scales = self.scales();
        resolve_focus_marker(&data, scales, self.interaction.selection())
    }

    /// Horizontal position of the hover line for the selected time index.
    pub fn hover_line_x(&mut self) -> Option<f64> {
        let data = self.stacked_data();
        let scales = self.scales();
        resolve_hover_line_x(&data, scales, self.interaction.selection())
    }

    pub(super) fn resolve_tooltip_anchor(
        &self,
        data: &StackedData,
        scales: ChartScales,
        selection: SelectionState,
    ) -> Option<TooltipAnchor> {
        let (time_index, layer_index) = selection.focused()?;
        let marker = resolve_focus_marker(data, scales, selection)?;
        let sample = &data.layers.get(layer_index)?.point(time_index)?.sample;
        let origin = self.config.surface_origin;
        let page_marker = PixelPoint::new(origin.x + marker.position.x, origin.y + marker.position.y);
        Some(TooltipAnchor {
            position: self.config.tooltip_placement().place(page_marker),
            time_index,
            layer_index,
            sample: Arc::clone(sample),
        })
    }
}

pub(super) fn resolve_hover_line_x(
    data: &StackedData,
    scales: ChartScales,
    selection: SelectionState,
) -> Option<f64> {
    let time = *data.datetimes.get(selection.time_index?)?;
    Some(scales.time?.time_to_pixel(time))
}

pub(super) fn resolve_focus_marker(
    data: &StackedData,
    scales: ChartScales,
    selection: SelectionState,
) -> Option<FocusMarker> {
    let (time_index, layer_index) = selection.focused()?;
    let layer = data.layers.get(layer_index)?;
    let point = layer.point(time_index)?;
    let x = resolve_hover_line_x(data, scales, selection)?;
    Some(FocusMarker {
        position: PixelPoint::new(x, scales.value.value_to_pixel(point.top)),
        fill: layer.marker_fill.color_at(point),
    })
}
