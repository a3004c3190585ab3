pub mod area_series;
pub mod color;
pub mod fill;
pub mod locator;
pub mod primitives;
pub mod scale;
pub mod stacking;
pub mod time_scale;
pub mod types;
pub mod value_scale;

pub use area_series::{AreaGeometry, project_stacked_area};
pub use color::Color;
pub use fill::{ColorRamp, Fill, GradientFn, LayerPaint, LayerStyle};
pub use locator::{locate_nearest_sample, nearest_index};
pub use scale::LinearScale;
pub use stacking::{StackedLayer, StackedPoint, stack_layers};
pub use time_scale::TimeScale;
pub use types::{LayerKey, PixelPoint, Sample, Viewport};
pub use value_scale::{ValueScale, ValueScaleTuning, max_stacked_value};
