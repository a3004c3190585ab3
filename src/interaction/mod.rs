use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;

/// Which pointer trigger drives focus changes.
///
/// Desktop hosts focus on continuous hover; touch hosts focus on taps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    Hover,
    Touch,
}

impl InputMode {
    #[must_use]
    pub fn from_mobile(is_mobile: bool) -> Self {
        if is_mobile { Self::Touch } else { Self::Hover }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerTrigger {
    Move,
    Tap,
}

/// Chart region that received a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerRegion {
    Background,
    Layer(usize),
}

/// Focused `(time index, layer index)` pair.
///
/// A time index alone is a valid state: it comes from a coordinated sibling
/// chart and highlights an instant without focusing a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub time_index: Option<usize>,
    pub layer_index: Option<usize>,
}

impl SelectionState {
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_idle(self) -> bool {
        self.time_index.is_none() && self.layer_index.is_none()
    }

    /// Both indices when a band is focused.
    #[must_use]
    pub fn focused(self) -> Option<(usize, usize)> {
        Some((self.time_index?, self.layer_index?))
    }

    fn fits(self, sample_count: usize, layer_count: usize) -> bool {
        self.time_index.is_none_or(|index| index < sample_count)
            && self.layer_index.is_none_or(|index| index < layer_count)
    }
}

/// Tooltip position derived from the focused marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPlacement {
    pub is_mobile: bool,
    /// Distance kept up-left of the marker so the overlay doesn't sit under the pointer.
    pub offset_px: f64,
    /// Where the overlay is pinned on touch devices.
    pub pinned_position: PixelPoint,
}

impl TooltipPlacement {
    #[must_use]
    pub fn place(self, marker: PixelPoint) -> PixelPoint {
        if self.is_mobile {
            self.pinned_position
        } else {
            PixelPoint::new(marker.x - self.offset_px, marker.y - self.offset_px)
        }
    }
}

/// Selection change delivered to the host after the transition and anchor update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionChange {
    pub time_index: Option<usize>,
    pub layer_index: Option<usize>,
    pub anchor: Option<PixelPoint>,
}

/// Receives the focused time index so coordinated views can highlight the same instant.
pub trait SelectionNotifier {
    fn on_selection_change(&mut self, change: SelectionChange);
}

impl<F> SelectionNotifier for F
where
    F: FnMut(SelectionChange),
{
    fn on_selection_change(&mut self, change: SelectionChange) {
        self(change);
    }
}

/// Single writer of [`SelectionState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    input_mode: InputMode,
    reference_layer_index: usize,
    selection: SelectionState,
}

impl InteractionState {
    #[must_use]
    pub fn new(input_mode: InputMode, reference_layer_index: usize) -> Self {
        Self {
            input_mode,
            reference_layer_index,
            selection: SelectionState::idle(),
        }
    }

    #[must_use]
    pub fn input_mode(self) -> InputMode {
        self.input_mode
    }

    pub fn set_input_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
    }

    #[must_use]
    pub fn reference_layer_index(self) -> usize {
        self.reference_layer_index
    }

    pub fn set_reference_layer_index(&mut self, index: usize) {
        self.reference_layer_index = index;
    }

    #[must_use]
    pub fn selection(self) -> SelectionState {
        self.selection
    }

    #[must_use]
    pub fn accepts(self, trigger: PointerTrigger) -> bool {
        matches!(
            (self.input_mode, trigger),
            (InputMode::Hover, PointerTrigger::Move) | (InputMode::Touch, PointerTrigger::Tap)
        )
    }

    /// Layer a pointer event in `region` focuses, `None` when it doesn't exist.
    ///
    /// Background events use the reference layer, falling back to the
    /// bottom band when the reference index is past the last layer.
    #[must_use]
    pub fn resolve_layer(self, region: PointerRegion, layer_count: usize) -> Option<usize> {
        if layer_count == 0 {
            return None;
        }
        match region {
            PointerRegion::Background => Some(if self.reference_layer_index < layer_count {
                self.reference_layer_index
            } else {
                0
            }),
            PointerRegion::Layer(index) => (index < layer_count).then_some(index),
        }
    }

    /// Returns `true` when the selection changed.
    pub fn focus(&mut self, time_index: usize, layer_index: usize) -> bool {
        let next = SelectionState {
            time_index: Some(time_index),
            layer_index: Some(layer_index),
        };
        let changed = self.selection != next;
        self.selection = next;
        changed
    }

    /// Sets the time index pushed by a coordinated view, keeping the layer.
    pub fn sync_time_index(&mut self, time_index: Option<usize>) {
        self.selection.time_index = time_index;
        if time_index.is_none() {
            self.selection.layer_index = None;
        }
    }

    /// Returns `true` when there was something to clear.
    pub fn clear(&mut self) -> bool {
        let had_selection = !self.selection.is_idle();
        self.selection = SelectionState::idle();
        had_selection
    }

    /// Drops a selection that no longer indexes into the current data.
    ///
    /// Returns `true` when the selection was reset.
    pub fn drop_stale_selection(&mut self, sample_count: usize, layer_count: usize) -> bool {
        if self.selection.fits(sample_count, layer_count) {
            return false;
        }
        self.selection = SelectionState::idle();
        true
    }
}
