use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::{LayerKey, LayerStyle, Sample, Viewport};
use crate::error::ChartResult;
use crate::interaction::{
    InputMode, InteractionState, SelectionChange, SelectionNotifier, SelectionState,
};
use crate::render::Renderer;

use super::derived_cache::{DerivedCache, DerivedCacheStats};
use super::AreaChartConfig;

/// Composition root of the stacked-area chart.
///
/// `AreaChart` owns the input data, the configuration and the selection, and
/// derives stacked layers, scales and tooltip anchors from them on demand.
/// Pointer handlers live in `interaction_controller.rs`, anchor resolution in
/// `tooltip_resolver.rs` and frame assembly in `frame_builder.rs`.
pub struct AreaChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: AreaChartConfig,
    pub(super) samples: Vec<Arc<Sample>>,
    pub(super) layer_keys: Vec<LayerKey>,
    pub(super) style: LayerStyle,
    pub(super) interaction: InteractionState,
    pub(super) notifier: Option<Box<dyn SelectionNotifier>>,
    pub(super) cache: DerivedCache,
}

impl<R: Renderer> AreaChart<R> {
    pub fn new(renderer: R, config: AreaChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            renderer,
            interaction: InteractionState::new(
                InputMode::from_mobile(config.is_mobile),
                config.reference_layer_index,
            ),
            config,
            samples: Vec::new(),
            layer_keys: Vec::new(),
            style: LayerStyle::default(),
            notifier: None,
            cache: DerivedCache::default(),
        })
    }

    /// Installs the host callback that records the focused time index.
    pub fn set_selection_notifier(&mut self, notifier: impl SelectionNotifier + 'static) {
        self.notifier = Some(Box::new(notifier));
    }

    #[must_use]
    pub fn config(&self) -> AreaChartConfig {
        self.config
    }

    pub fn set_config(&mut self, config: AreaChartConfig) -> ChartResult<()> {
        let config = config.validate()?;
        self.interaction
            .set_input_mode(InputMode::from_mobile(config.is_mobile));
        self.interaction
            .set_reference_layer_index(config.reference_layer_index);
        self.config = config;
        Ok(())
    }

    /// Resize hook for the host's viewport observer.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.config = self.config.with_viewport(viewport).validate()?;
        debug!(width = viewport.width, height = viewport.height, "set viewport");
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    pub fn set_time_bounds(&mut self, start_time: Option<f64>, end_time: Option<f64>) -> ChartResult<()> {
        self.config = self
            .config
            .with_time_bounds(start_time, end_time)
            .validate()?;
        Ok(())
    }

    pub fn set_mobile(&mut self, is_mobile: bool) {
        self.config.is_mobile = is_mobile;
        self.interaction
            .set_input_mode(InputMode::from_mobile(is_mobile));
    }

    /// Replaces the samples. Input must be sorted by timestamp.
    pub fn set_samples(&mut self, samples: Vec<Sample>) {
        let sorted = samples
            .windows(2)
            .all(|pair| pair[0].datetime <= pair[1].datetime);
        debug_assert!(sorted, "samples must be sorted by datetime");
        if !sorted {
            warn!(count = samples.len(), "samples are not sorted by datetime");
        }
        debug!(count = samples.len(), "set samples");
        self.samples = samples.into_iter().map(Arc::new).collect();
        self.on_data_replaced();
    }

    /// Replaces the layer keys, bottom-to-top.
    pub fn set_layer_keys(&mut self, layer_keys: Vec<LayerKey>) {
        debug!(count = layer_keys.len(), "set layer keys");
        self.layer_keys = layer_keys;
        self.on_data_replaced();
    }

    pub fn set_layer_style(&mut self, style: LayerStyle) {
        debug!(?style, "set layer style");
        self.style = style;
        self.on_data_replaced();
    }

    #[must_use]
    pub fn samples(&self) -> &[Arc<Sample>] {
        &self.samples
    }

    #[must_use]
    pub fn layer_keys(&self) -> &[LayerKey] {
        &self.layer_keys
    }

    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.interaction.selection()
    }

    #[must_use]
    pub fn cache_stats(&self) -> DerivedCacheStats {
        self.cache.stats()
    }

    #[must_use]
    pub fn data_epoch(&self) -> u64 {
        self.cache.data_epoch()
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Number of layers the current data stacks into, without stacking.
    pub(super) fn layer_count(&self) -> usize {
        if self.samples.is_empty() {
            0
        } else {
            self.layer_keys.len()
        }
    }

    pub(super) fn notify(&mut self, change: SelectionChange) {
        if let Some(notifier) = self.notifier.as_mut() {
            notifier.on_selection_change(change);
        }
    }

    fn on_data_replaced(&mut self) {
        self.cache.bump_data_epoch();
        let (sample_count, layer_count) = (self.samples.len(), self.layer_count());
        if self
            .interaction
            .drop_stale_selection(sample_count, layer_count)
        {
            warn!(sample_count, layer_count, "reset stale selection after data change");
            self.notify(SelectionChange {
                time_index: None,
                layer_index: None,
                anchor: None,
            });
        }
    }
}

impl<R: Renderer> fmt::Debug for AreaChart<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AreaChart")
            .field("config", &self.config)
            .field("samples", &self.samples.len())
            .field("layer_keys", &self.layer_keys)
            .field("selection", &self.interaction.selection())
            .finish_non_exhaustive()
    }
}
