use std::sync::Arc;

#[cfg(feature = "parallel-stacking")]
use rayon::prelude::*;
use smallvec::SmallVec;
use tracing::warn;

use crate::core::primitives::finite_or_zero;
use crate::core::{Color, Fill, LayerKey, LayerStyle, Sample};

type StackRow = SmallVec<[(f64, f64); 8]>;

/// One stacked value: the `[baseline, top]` edges of a band at one sample.
///
/// Edges are in data units. For negative contributions `baseline` is the
/// lower edge and `top` the edge closer to the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedPoint {
    pub baseline: f64,
    pub top: f64,
    pub index: usize,
    pub sample: Arc<Sample>,
}

impl StackedPoint {
    #[must_use]
    pub fn edges(&self) -> [f64; 2] {
        [self.baseline, self.top]
    }

    /// Raw sample value for `key`, `None` when missing or non-finite.
    #[must_use]
    pub fn raw_value(&self, key: &str) -> Option<f64> {
        self.sample.value(key).flatten().filter(|v| v.is_finite())
    }
}

/// One band of the chart with its resolved paint and one point per sample.
#[derive(Debug, Clone)]
pub struct StackedLayer {
    pub key: LayerKey,
    pub stroke: Option<Color>,
    pub fill: Fill,
    pub marker_fill: Fill,
    pub datapoints: Vec<StackedPoint>,
}

impl StackedLayer {
    #[must_use]
    pub fn point(&self, time_index: usize) -> Option<&StackedPoint> {
        self.datapoints.get(time_index)
    }
}

/// Stacks `samples` into one band per key using a diverging offset.
///
/// Positive values pile up from zero, negative values pile down from zero,
/// each side with its own running sum. Missing, non-finite and zero values
/// produce a zero-height band on top of the positive running sum.
/// Empty samples or keys produce no layers.
#[must_use]
pub fn stack_layers(
    samples: &[Arc<Sample>],
    layer_keys: &[LayerKey],
    style: &LayerStyle,
) -> Vec<StackedLayer> {
    if samples.is_empty() || layer_keys.is_empty() {
        return Vec::new();
    }

    let rows = stacked_rows(samples, layer_keys);

    layer_keys
        .iter()
        .enumerate()
        .map(|(layer_index, key)| {
            let paint = style.resolve_layer_paint(key);
            let datapoints = rows
                .iter()
                .zip(samples)
                .enumerate()
                .map(|(index, (row, sample))| {
                    let (baseline, top) = row[layer_index];
                    StackedPoint {
                        baseline,
                        top,
                        index,
                        sample: Arc::clone(sample),
                    }
                })
                .collect();
            StackedLayer {
                key: key.clone(),
                stroke: paint.stroke,
                fill: paint.fill,
                marker_fill: paint.marker_fill,
                datapoints,
            }
        })
        .collect()
}

fn stacked_rows(samples: &[Arc<Sample>], layer_keys: &[LayerKey]) -> Vec<StackRow> {
    #[cfg(feature = "parallel-stacking")]
    {
        samples
            .par_iter()
            .map(|sample| stack_sample(sample, layer_keys))
            .collect()
    }

    #[cfg(not(feature = "parallel-stacking"))]
    {
        samples
            .iter()
            .map(|sample| stack_sample(sample, layer_keys))
            .collect()
    }
}

fn stack_sample(sample: &Sample, layer_keys: &[LayerKey]) -> StackRow {
    let mut positive = 0.0;
    let mut negative = 0.0;
    layer_keys
        .iter()
        .map(|key| {
            let value = contribution(sample, key);
            if value > 0.0 {
                let baseline = positive;
                positive += value;
                (baseline, positive)
            } else if value < 0.0 {
                let top = negative;
                negative += value;
                (negative, top)
            } else {
                (positive, positive)
            }
        })
        .collect()
}

fn contribution(sample: &Sample, key: &str) -> f64 {
    debug_assert!(
        sample.values.contains_key(key),
        "layer key `{key}` missing from sample values"
    );
    match sample.value(key) {
        Some(value) => finite_or_zero(value),
        None => {
            warn!(key, datetime = %sample.datetime, "layer key missing from sample, stacking as zero");
            0.0
        }
    }
}
