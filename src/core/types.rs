use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::ChartResult;

/// Identifier of one stacked band. Order in a key list is bottom-to-top.
pub type LayerKey = String;

/// Live drawing-surface size in pixels, supplied by the host's resize observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `true` when there is at least one pixel to draw on in both directions.
    #[must_use]
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Pixel position, used for anchors and surface offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One input record: a timestamp, one value per layer key and an opaque
/// back-reference to the host record it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub datetime: DateTime<Utc>,
    pub values: IndexMap<LayerKey, Option<f64>>,
    #[serde(default)]
    pub meta: serde_json::Value,
}

impl Sample {
    #[must_use]
    pub fn new(datetime: DateTime<Utc>) -> Self {
        Self {
            datetime,
            values: IndexMap::new(),
            meta: serde_json::Value::Null,
        }
    }

    #[must_use]
    pub fn with_value(mut self, key: impl Into<LayerKey>, value: impl Into<Option<f64>>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Adds a decimal-valued layer (prices usually arrive as decimals).
    pub fn with_decimal_value(self, key: impl Into<LayerKey>, value: Decimal) -> ChartResult<Self> {
        let key = key.into();
        let value = decimal_to_f64(value, &key)?;
        Ok(self.with_value(key, value))
    }

    #[must_use]
    pub fn with_meta(mut self, meta: serde_json::Value) -> Self {
        self.meta = meta;
        self
    }

    /// Timestamp projected onto the time axis.
    #[must_use]
    pub fn time(&self) -> f64 {
        datetime_to_unix_seconds(self.datetime)
    }

    /// Raw value for `key`.
    ///
    /// The outer `None` means the key is absent from the mapping, the inner
    /// `None` means the record carries the key without a value.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<Option<f64>> {
        self.values.get(key).copied()
    }
}
