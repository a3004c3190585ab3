//! Day-ahead price chart driven by a simulated pointer sweep.
//!
//! Run with `cargo run --example price_history --features telemetry` and
//! `RUST_LOG=area_graph=debug` to follow cache and selection events.

use area_graph::api::{AreaChart, AreaChartConfig};
use area_graph::core::{Color, ColorRamp, Fill, LayerStyle, PixelPoint, Sample, Viewport};
use area_graph::interaction::SelectionChange;
use area_graph::render::NullRenderer;
use area_graph::telemetry;
use area_graph::ChartResult;
use chrono::DateTime;
use rust_decimal::Decimal;
use serde_json::json;

const PRICE: &str = "price";

fn hourly_prices() -> ChartResult<Vec<Sample>> {
    let cents = [
        8_412i64, 7_950, 7_610, 7_480, 7_733, 8_905, 11_240, 13_870, 12_655, 10_120, 8_830, 7_200,
        6_415, 5_980, 6_310, 7_845, 9_960, 14_210, 16_030, 15_120, 12_400, 10_880, 9_515, 8_760,
    ];
    let mut samples = Vec::with_capacity(cents.len());
    for (hour, price) in cents.iter().enumerate() {
        let Some(datetime) = DateTime::from_timestamp(1_735_689_600 + hour as i64 * 3_600, 0) else {
            continue;
        };
        let sample = Sample::new(datetime)
            .with_decimal_value(PRICE, Decimal::new(*price, 2))?
            .with_meta(json!({ "zone": "DE-LU", "hour": hour }));
        samples.push(sample);
    }
    Ok(samples)
}

fn main() -> ChartResult<()> {
    let _ = telemetry::init_default_tracing();

    let samples = hourly_prices()?;
    let max_price = samples
        .iter()
        .filter_map(|sample| sample.value(PRICE).flatten())
        .fold(0.0f64, f64::max);
    let ramp = ColorRamp::new((0.0, max_price), Color::YELLOW, Color::RED)?;

    let config = AreaChartConfig::new(Viewport::new(720.0, 96.0))
        .with_surface_origin(PixelPoint::new(24.0, 180.0));
    let mut chart = AreaChart::new(NullRenderer::default(), config)?;
    chart.set_selection_notifier(|change: SelectionChange| {
        println!("host selected time index {:?}", change.time_index);
    });
    chart.set_samples(samples);
    chart.set_layer_keys(vec![PRICE.to_owned()]);
    chart.set_layer_style(
        LayerStyle::uniform(Color::DARK_GRAY).with_marker_fill(move |key| {
            let key = key.to_owned();
            Fill::gradient(move |point| ramp.color_at(point.raw_value(&key).unwrap_or(0.0)))
        }),
    );

    for pointer_x in (0..=720).step_by(90) {
        chart.background_pointer_move(f64::from(pointer_x));
        if let (Some(anchor), Some(marker)) = (chart.tooltip_anchor(), chart.focus_marker()) {
            let price = anchor.sample.value(PRICE).flatten().unwrap_or(0.0);
            println!(
                "x={pointer_x:>3} {} {price:>7.2} EUR/MWh tooltip=({:.1}, {:.1}) marker=rgb({:.2}, {:.2}, {:.2})",
                anchor.sample.datetime.format("%H:%M"),
                anchor.position.x,
                anchor.position.y,
                marker.fill.red,
                marker.fill.green,
                marker.fill.blue,
            );
        }
        chart.render()?;
    }
    chart.pointer_out();

    let stats = chart.cache_stats();
    let renderer = chart.into_renderer();
    println!(
        "rendered {} frames, {} stack rebuilds, {} scale rebuilds",
        renderer.frames_rendered, stats.stack_misses, stats.scale_misses
    );
    Ok(())
}
