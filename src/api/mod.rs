mod chart;
mod chart_config;
mod derived_cache;
mod frame_builder;
mod interaction_controller;
mod tooltip_resolver;

pub use chart::AreaChart;
pub use chart_config::AreaChartConfig;
pub use derived_cache::{ChartScales, DerivedCacheStats, StackedData};
pub use frame_builder::ChartView;
pub use tooltip_resolver::TooltipAnchor;
