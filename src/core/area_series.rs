use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, StackedLayer, TimeScale, ValueScale};

/// Pixel geometry of one stacked band.
///
/// `top_line` follows the band's upper edge left to right.
/// `fill_polygon` walks the upper edge forward, the baseline edge backward and
/// repeats the first vertex so it is explicitly closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub top_line: Vec<PixelPoint>,
    pub fill_polygon: Vec<PixelPoint>,
}

impl AreaGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            top_line: Vec::new(),
            fill_polygon: Vec::new(),
        }
    }
}

/// Projects a stacked layer into pixel space.
///
/// `datetimes[i]` must be the projected timestamp of `layer.datapoints[i]`.
#[must_use]
pub fn project_stacked_area(
    layer: &StackedLayer,
    datetimes: &[f64],
    time_scale: TimeScale,
    value_scale: ValueScale,
) -> AreaGeometry {
    if layer.datapoints.is_empty() {
        return AreaGeometry::empty();
    }

    let xs: Vec<f64> = datetimes
        .iter()
        .map(|time| time_scale.time_to_pixel(*time))
        .collect();

    let top_line: Vec<PixelPoint> = layer
        .datapoints
        .iter()
        .zip(&xs)
        .map(|(point, x)| PixelPoint::new(*x, value_scale.value_to_pixel(point.top)))
        .collect();

    let mut fill_polygon = Vec::with_capacity(top_line.len() * 2 + 1);
    fill_polygon.extend(top_line.iter().copied());
    fill_polygon.extend(
        layer
            .datapoints
            .iter()
            .zip(&xs)
            .rev()
            .map(|(point, x)| PixelPoint::new(*x, value_scale.value_to_pixel(point.baseline))),
    );
    fill_polygon.push(top_line[0]);

    AreaGeometry {
        top_line,
        fill_polygon,
    }
}
