use std::sync::Arc;

use tracing::{debug, trace};

use crate::core::{
    StackedLayer, TimeScale, ValueScale, ValueScaleTuning, Viewport, max_stacked_value,
    stack_layers,
};
use crate::render::Renderer;

use super::AreaChart;

/// Stacking output for one data epoch.
#[derive(Debug, Clone)]
pub struct StackedData {
    /// Projected timestamp of every sample, in sample order.
    pub datetimes: Vec<f64>,
    pub layers: Vec<StackedLayer>,
    pub max_stacked_value: f64,
}

impl StackedData {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Scales fitted to the current data and viewport.
///
/// `time` is `None` when no time domain can be inferred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScales {
    pub time: Option<TimeScale>,
    pub value: ValueScale,
}

/// Hit/miss counters of the derived-value caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DerivedCacheStats {
    pub stack_hits: u64,
    pub stack_misses: u64,
    pub scale_hits: u64,
    pub scale_misses: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScaleCacheKey {
    data_epoch: u64,
    viewport: Viewport,
    start_time: Option<f64>,
    end_time: Option<f64>,
    tuning: ValueScaleTuning,
}

/// Cache-or-recompute storage keyed on the data epoch and scale inputs.
#[derive(Debug, Default)]
pub(super) struct DerivedCache {
    data_epoch: u64,
    stacked: Option<(u64, Arc<StackedData>)>,
    scales: Option<(ScaleCacheKey, ChartScales)>,
    stats: DerivedCacheStats,
}

impl DerivedCache {
    /// Marks samples, layer keys or style as replaced.
    pub(super) fn bump_data_epoch(&mut self) {
        self.data_epoch = self.data_epoch.wrapping_add(1);
    }

    pub(super) fn data_epoch(&self) -> u64 {
        self.data_epoch
    }

    pub(super) fn stats(&self) -> DerivedCacheStats {
        self.stats
    }
}

impl<R: Renderer> AreaChart<R> {
    /// Stacked layers for the current data, restacked only after a data change.
    pub fn stacked_data(&mut self) -> Arc<StackedData> {
        let epoch = self.cache.data_epoch;
        if let Some((cached_epoch, data)) = &self.cache.stacked {
            if *cached_epoch == epoch {
                self.cache.stats.stack_hits += 1;
                trace!(epoch, "stacked data cache hit");
                return Arc::clone(data);
            }
        }

        let layers = stack_layers(&self.samples, &self.layer_keys, &self.style);
        let data = Arc::new(StackedData {
            datetimes: self.samples.iter().map(|sample| sample.time()).collect(),
            max_stacked_value: max_stacked_value(&layers),
            layers,
        });
        debug!(
            epoch,
            samples = self.samples.len(),
            layers = data.layers.len(),
            max_stacked_value = data.max_stacked_value,
            "restacked layers"
        );
        self.cache.stats.stack_misses += 1;
        self.cache.stacked = Some((epoch, Arc::clone(&data)));
        data
    }

    /// Time and value scales for the current data and viewport.
    pub fn scales(&mut self) -> ChartScales {
        let data = self.stacked_data();
        let key = ScaleCacheKey {
            data_epoch: self.cache.data_epoch,
            viewport: self.config.viewport,
            start_time: self.config.start_time,
            end_time: self.config.end_time,
            tuning: self.config.value_scale_tuning,
        };
        if let Some((cached_key, scales)) = &self.cache.scales {
            if *cached_key == key {
                self.cache.stats.scale_hits += 1;
                return *scales;
            }
        }

        let scales = ChartScales {
            time: TimeScale::build(
                &data.datetimes,
                key.start_time,
                key.end_time,
                key.viewport.width,
            ),
            value: ValueScale::build_tuned(key.viewport.height, data.max_stacked_value, key.tuning),
        };
        debug!(
            width = key.viewport.width,
            height = key.viewport.height,
            time_domain = ?scales.time.map(TimeScale::domain),
            value_domain = ?scales.value.domain(),
            "rebuilt scales"
        );
        self.cache.stats.scale_misses += 1;
        self.cache.scales = Some((key, scales));
        scales
    }
}
