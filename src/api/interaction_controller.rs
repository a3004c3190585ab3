use tracing::{debug, trace};

use crate::core::locate_nearest_sample;
use crate::interaction::{InputMode, PointerRegion, PointerTrigger, SelectionChange, SelectionState};
use crate::render::Renderer;

use super::AreaChart;

impl<R: Renderer> AreaChart<R> {
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.interaction.input_mode()
    }

    /// Hover over the chart background: focuses the nearest sample on the
    /// reference layer. Returns `true` when the event was handled.
    pub fn background_pointer_move(&mut self, pointer_x: f64) -> bool {
        self.handle_pointer(PointerRegion::Background, PointerTrigger::Move, pointer_x)
    }

    /// Hover over a rendered band: focuses the nearest sample on that band.
    pub fn layer_pointer_move(&mut self, layer_index: usize, pointer_x: f64) -> bool {
        self.handle_pointer(
            PointerRegion::Layer(layer_index),
            PointerTrigger::Move,
            pointer_x,
        )
    }

    /// Touch-mode counterpart of [`Self::background_pointer_move`].
    pub fn background_tap(&mut self, pointer_x: f64) -> bool {
        self.handle_pointer(PointerRegion::Background, PointerTrigger::Tap, pointer_x)
    }

    /// Touch-mode counterpart of [`Self::layer_pointer_move`].
    pub fn layer_tap(&mut self, layer_index: usize, pointer_x: f64) -> bool {
        self.handle_pointer(
            PointerRegion::Layer(layer_index),
            PointerTrigger::Tap,
            pointer_x,
        )
    }

    /// Pointer left the chart bounds. No-op while there is nothing rendered.
    pub fn pointer_out(&mut self) -> bool {
        trace!("pointer out");
        if self.layer_count() == 0 {
            return false;
        }
        self.clear_selection();
        true
    }

    /// Returns to idle and tells the host the time index is gone.
    ///
    /// An already idle chart stays silent. Returns `true` when something was cleared.
    pub fn clear_selection(&mut self) -> bool {
        if !self.interaction.clear() {
            return false;
        }
        debug!("selection cleared");
        self.notify(SelectionChange {
            time_index: None,
            layer_index: None,
            anchor: None,
        });
        true
    }

    /// Applies a time index chosen by a coordinated view.
    ///
    /// The host is not notified back. An index past the last sample clears
    /// the selection.
    pub fn sync_selected_time_index(&mut self, time_index: Option<usize>) -> SelectionState {
        let time_index = time_index.filter(|index| *index < self.samples.len());
        self.interaction.sync_time_index(time_index);
        trace!(?time_index, "synced selected time index");
        self.interaction.selection()
    }

    fn handle_pointer(&mut self, region: PointerRegion, trigger: PointerTrigger, pointer_x: f64) -> bool {
        trace!(?region, ?trigger, pointer_x, "pointer event");
        if !self.interaction.accepts(trigger) {
            return false;
        }

        let data = self.stacked_data();
        if data.is_empty() || !self.config.viewport.is_drawable() {
            return false;
        }
        let scales = self.scales();
        let Some(time_scale) = scales.time else {
            return false;
        };
        let Some(time_index) = locate_nearest_sample(pointer_x, &data.datetimes, time_scale) else {
            return false;
        };
        let Some(layer_index) = self.interaction.resolve_layer(region, data.layers.len()) else {
            return false;
        };

        if self.interaction.focus(time_index, layer_index) {
            debug!(time_index, layer_index, "selection focused");
        }
        let anchor = self
            .resolve_tooltip_anchor(&data, scales, self.interaction.selection())
            .map(|anchor| anchor.position);
        self.notify(SelectionChange {
            time_index: Some(time_index),
            layer_index: Some(layer_index),
            anchor,
        });
        true
    }
}
