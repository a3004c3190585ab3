use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, ValueScaleTuning, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipPlacement;

/// Public chart configuration.
///
/// Serializable so hosts can keep chart setup next to the rest of their
/// settings. Every field except the viewport has a default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaChartConfig {
    pub viewport: Viewport,
    /// Explicit left edge of the time axis (unix seconds).
    #[serde(default)]
    pub start_time: Option<f64>,
    /// Explicit right edge of the time axis (unix seconds).
    #[serde(default)]
    pub end_time: Option<f64>,
    #[serde(default)]
    pub is_mobile: bool,
    /// Layer focused by background pointer events.
    #[serde(default)]
    pub reference_layer_index: usize,
    /// Page offset of the drawing surface, added to marker positions.
    #[serde(default)]
    pub surface_origin: PixelPoint,
    #[serde(default = "default_tooltip_offset_px")]
    pub tooltip_offset_px: f64,
    /// Tooltip position used in mobile mode.
    #[serde(default)]
    pub mobile_tooltip_position: PixelPoint,
    #[serde(default)]
    pub value_scale_tuning: ValueScaleTuning,
}

impl AreaChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            start_time: None,
            end_time: None,
            is_mobile: false,
            reference_layer_index: 0,
            surface_origin: PixelPoint::default(),
            tooltip_offset_px: default_tooltip_offset_px(),
            mobile_tooltip_position: PixelPoint::default(),
            value_scale_tuning: ValueScaleTuning::default(),
        }
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_time_bounds(mut self, start_time: Option<f64>, end_time: Option<f64>) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    #[must_use]
    pub fn with_mobile(mut self, is_mobile: bool) -> Self {
        self.is_mobile = is_mobile;
        self
    }

    #[must_use]
    pub fn with_reference_layer_index(mut self, index: usize) -> Self {
        self.reference_layer_index = index;
        self
    }

    #[must_use]
    pub fn with_surface_origin(mut self, origin: PixelPoint) -> Self {
        self.surface_origin = origin;
        self
    }

    #[must_use]
    pub fn with_tooltip_offset_px(mut self, offset_px: f64) -> Self {
        self.tooltip_offset_px = offset_px;
        self
    }

    #[must_use]
    pub fn with_value_scale_tuning(mut self, tuning: ValueScaleTuning) -> Self {
        self.value_scale_tuning = tuning;
        self
    }

    /// Rejects values that can't produce finite geometry.
    ///
    /// A zero-size viewport is accepted: it means "nothing to render yet".
    pub fn validate(self) -> ChartResult<Self> {
        let Viewport { width, height } = self.viewport;
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ChartError::InvalidViewport { width, height });
        }
        for (name, bound) in [("start", self.start_time), ("end", self.end_time)] {
            if bound.is_some_and(|value| !value.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "{name} time bound must be finite"
                )));
            }
        }
        for (name, point) in [
            ("surface origin", self.surface_origin),
            ("mobile tooltip position", self.mobile_tooltip_position),
        ] {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(ChartError::InvalidData(format!("{name} must be finite")));
            }
        }
        if !self.tooltip_offset_px.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip offset must be finite".to_owned(),
            ));
        }
        self.value_scale_tuning.validate()?;
        Ok(self)
    }

    #[must_use]
    pub fn tooltip_placement(self) -> TooltipPlacement {
        TooltipPlacement {
            is_mobile: self.is_mobile,
            offset_px: self.tooltip_offset_px,
            pinned_position: self.mobile_tooltip_position,
        }
    }
}

fn default_tooltip_offset_px() -> f64 {
    7.0
}
