use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, StackedLayer};
use crate::error::{ChartError, ChartResult};

/// Headroom and padding applied when fitting the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScaleTuning {
    /// Fraction added above the largest stacked value.
    pub headroom_ratio: f64,
    /// Pixels kept free above the domain end so peaks aren't clipped.
    pub top_padding_px: f64,
}

impl Default for ValueScaleTuning {
    fn default() -> Self {
        Self {
            headroom_ratio: 0.1,
            top_padding_px: 4.0,
        }
    }
}

impl ValueScaleTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.headroom_ratio.is_finite() || self.headroom_ratio < 0.0 {
            return Err(ChartError::InvalidData(
                "value headroom ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !self.top_padding_px.is_finite() || self.top_padding_px < 0.0 {
            return Err(ChartError::InvalidData(
                "value axis top padding must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Vertical axis: stacked values to pixels, origin at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    linear: LinearScale,
}

impl ValueScale {
    #[must_use]
    pub fn build(pixel_height: f64, max_stacked_value: f64) -> Self {
        Self::build_tuned(pixel_height, max_stacked_value, ValueScaleTuning::default())
    }

    /// Domain `[0, max * (1 + headroom)]`, range `[height, top_padding]`.
    #[must_use]
    pub fn build_tuned(pixel_height: f64, max_stacked_value: f64, tuning: ValueScaleTuning) -> Self {
        let domain_end = max_stacked_value * (1.0 + tuning.headroom_ratio);
        Self {
            linear: LinearScale::new((0.0, domain_end), (pixel_height, tuning.top_padding_px)),
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        self.linear.map(value)
    }

    #[must_use]
    pub fn pixel_to_value(self, pixel: f64) -> f64 {
        self.linear.invert(pixel)
    }
}

/// Largest finite `top` across every layer, `0.0` when none is finite.
#[must_use]
pub fn max_stacked_value(layers: &[StackedLayer]) -> f64 {
    layers
        .iter()
        .flat_map(|layer| layer.datapoints.iter())
        .map(|point| point.top)
        .filter(|top| top.is_finite())
        .map(OrderedFloat)
        .max()
        .map_or(0.0, |max| max.0)
}
