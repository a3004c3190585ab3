use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use area_graph::api::{AreaChart, AreaChartConfig};
use area_graph::core::{Color, ColorRamp, Fill, LayerStyle, Sample, Viewport, stack_layers};
use area_graph::render::{BandPaint, NullRenderer};
use chrono::DateTime;

const PRICE: &str = "price";

fn price_sample(seconds: i64, price: f64) -> Sample {
    let datetime = DateTime::from_timestamp(seconds, 0).expect("valid timestamp");
    Sample::new(datetime).with_value(PRICE, price)
}

fn price_ramp(max_price: f64) -> ColorRamp {
    ColorRamp::new((0.0, max_price), Color::YELLOW, Color::RED).expect("valid ramp")
}

#[test]
fn marker_fill_defaults_to_layer_fill() {
    let style = LayerStyle::uniform(Color::DARK_GRAY);
    let paint = style.resolve_layer_paint(PRICE);

    assert_eq!(paint.stroke, None);
    assert_eq!(paint.fill.solid_color(), Some(Color::DARK_GRAY));
    assert_eq!(paint.marker_fill.solid_color(), Some(Color::DARK_GRAY));
}

#[test]
fn marker_fill_override_only_affects_marker() {
    let ramp = price_ramp(100.0);
    let style = LayerStyle::uniform(Color::DARK_GRAY).with_marker_fill(move |key| {
        let key = key.to_owned();
        Fill::gradient(move |point| ramp.color_at(point.raw_value(&key).unwrap_or(0.0)))
    });
    let samples: Vec<_> = [0.0, 50.0, 100.0]
        .iter()
        .enumerate()
        .map(|(i, price)| Arc::new(price_sample(i as i64, *price)))
        .collect();

    let layers = stack_layers(&samples, &[PRICE.to_owned()], &style);
    let layer = &layers[0];

    assert_eq!(layer.fill.solid_color(), Some(Color::DARK_GRAY));
    assert_eq!(layer.marker_fill.color_at(&layer.datapoints[0]), Color::YELLOW);
    assert_eq!(layer.marker_fill.color_at(&layer.datapoints[2]), Color::RED);
    let middle = layer.marker_fill.color_at(&layer.datapoints[1]);
    assert_eq!(middle.red, 1.0);
    assert_eq!(middle.green, 0.5);
}

#[test]
fn fill_resolvers_run_once_per_key_per_epoch() {
    let fill_calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fill_calls);
    let style = LayerStyle::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Fill::Solid(Color::DARK_GRAY)
    });

    let mut chart = AreaChart::new(
        NullRenderer::default(),
        AreaChartConfig::new(Viewport::new(300.0, 100.0)),
    )
    .expect("chart init");
    chart.set_samples((0..20).map(|i| price_sample(i, 10.0)).collect());
    chart.set_layer_keys(vec![PRICE.to_owned()]);
    chart.set_layer_style(style);

    for x in 0..30 {
        chart.background_pointer_move(f64::from(x) * 10.0);
    }
    chart.render().expect("render");
    assert_eq!(fill_calls.load(Ordering::SeqCst), 1);

    chart.set_samples((0..5).map(|i| price_sample(i, 3.0)).collect());
    chart.render().expect("render");
    assert_eq!(fill_calls.load(Ordering::SeqCst), 2);
}

#[test]
fn gradient_layer_fill_is_resolved_per_point_in_frame() {
    let ramp = price_ramp(20.0);
    let mut chart = AreaChart::new(
        NullRenderer::default(),
        AreaChartConfig::new(Viewport::new(300.0, 100.0)),
    )
    .expect("chart init");
    chart.set_samples(vec![price_sample(0, 0.0), price_sample(1, 20.0)]);
    chart.set_layer_keys(vec![PRICE.to_owned()]);
    chart.set_layer_style(LayerStyle::new(move |_| {
        Fill::gradient(move |point| ramp.color_at(point.top))
    }));

    let frame = chart.frame().expect("frame");
    assert_eq!(
        frame.bands[0].paint,
        BandPaint::PerPoint(vec![Color::YELLOW, Color::RED])
    );
}

#[test]
fn color_ramp_clamps_and_rejects_invalid_stops() {
    let ramp = price_ramp(10.0);
    assert_eq!(ramp.color_at(-5.0), Color::YELLOW);
    assert_eq!(ramp.color_at(50.0), Color::RED);
    assert_eq!(ramp.color_at(f64::NAN), Color::YELLOW);

    assert!(ColorRamp::new((0.0, f64::NAN), Color::YELLOW, Color::RED).is_err());
    assert!(ColorRamp::new((0.0, 1.0), Color::rgb(2.0, 0.0, 0.0), Color::RED).is_err());
}
