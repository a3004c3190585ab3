use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::core::primitives::{datetime_to_unix_seconds, unix_seconds_to_datetime};

/// Horizontal axis: unix seconds to pixels over `[0, width]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    /// Builds the time axis for a sorted timestamp sequence.
    ///
    /// Explicit bounds win over the first/last timestamp. Returns `None` when
    /// an endpoint can be neither taken from a bound nor inferred from data,
    /// which callers treat as "no chart to draw".
    #[must_use]
    pub fn build(
        datetimes: &[f64],
        start_time: Option<f64>,
        end_time: Option<f64>,
        pixel_width: f64,
    ) -> Option<Self> {
        let start = start_time.or_else(|| datetimes.first().copied())?;
        let end = end_time.or_else(|| datetimes.last().copied())?;
        Some(Self::new(start, end, pixel_width))
    }

    #[must_use]
    pub fn new(start: f64, end: f64, pixel_width: f64) -> Self {
        Self {
            linear: LinearScale::new((start, end), (0.0, pixel_width)),
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn pixel_width(self) -> f64 {
        self.linear.range().1
    }

    #[must_use]
    pub fn time_to_pixel(self, time: f64) -> f64 {
        self.linear.map(time)
    }

    #[must_use]
    pub fn pixel_to_time(self, pixel: f64) -> f64 {
        self.linear.invert(pixel)
    }

    #[must_use]
    pub fn datetime_to_pixel(self, time: DateTime<Utc>) -> f64 {
        self.time_to_pixel(datetime_to_unix_seconds(time))
    }

    #[must_use]
    pub fn pixel_to_datetime(self, pixel: f64) -> Option<DateTime<Utc>> {
        unix_seconds_to_datetime(self.pixel_to_time(pixel))
    }
}
