use std::sync::Arc;

use area_graph::core::{Color, Fill, LayerKey, LayerStyle, Sample, stack_layers};
use chrono::DateTime;
use serde_json::json;

fn sample(seconds: i64, values: &[(&str, Option<f64>)]) -> Arc<Sample> {
    let datetime = DateTime::from_timestamp(seconds, 0).expect("valid timestamp");
    let sample = values
        .iter()
        .fold(Sample::new(datetime), |sample, (key, value)| {
            sample.with_value(*key, *value)
        })
        .with_meta(json!({ "index": seconds }));
    Arc::new(sample)
}

fn keys(names: &[&str]) -> Vec<LayerKey> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

fn style() -> LayerStyle {
    LayerStyle::uniform(Color::rgb(0.38, 0.38, 0.38))
}

fn edges(layer: &area_graph::core::StackedLayer) -> Vec<[f64; 2]> {
    layer.datapoints.iter().map(|point| point.edges()).collect()
}

#[test]
fn single_layer_stacks_from_zero() {
    let samples = vec![
        sample(0, &[("price", Some(10.0))]),
        sample(1, &[("price", Some(20.0))]),
        sample(2, &[("price", Some(5.0))]),
    ];

    let layers = stack_layers(&samples, &keys(&["price"]), &style());

    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0].key, "price");
    assert_eq!(edges(&layers[0]), vec![[0.0, 10.0], [0.0, 20.0], [0.0, 5.0]]);
    assert_eq!(layers[0].datapoints[1].sample.meta, json!({ "index": 1 }));
    assert_eq!(layers[0].datapoints[2].index, 2);
}

#[test]
fn later_keys_stack_on_top_of_earlier_keys() {
    let samples = vec![
        sample(0, &[("coal", Some(3.0)), ("wind", Some(2.0)), ("solar", Some(1.0))]),
        sample(1, &[("coal", Some(4.0)), ("wind", Some(0.5)), ("solar", Some(6.0))]),
    ];

    let layers = stack_layers(&samples, &keys(&["coal", "wind", "solar"]), &style());

    assert_eq!(edges(&layers[0]), vec![[0.0, 3.0], [0.0, 4.0]]);
    assert_eq!(edges(&layers[1]), vec![[3.0, 5.0], [4.0, 4.5]]);
    assert_eq!(edges(&layers[2]), vec![[5.0, 6.0], [4.5, 10.5]]);

    let reordered = stack_layers(&samples, &keys(&["solar", "coal", "wind"]), &style());
    assert_eq!(edges(&reordered[0]), vec![[0.0, 1.0], [0.0, 6.0]]);
    assert_eq!(edges(&reordered[2]), vec![[4.0, 6.0], [10.0, 10.5]]);
}

#[test]
fn negative_values_stack_below_the_axis() {
    let samples = vec![sample(
        0,
        &[
            ("production", Some(8.0)),
            ("export", Some(-3.0)),
            ("storage", Some(-2.0)),
            ("import", Some(1.5)),
        ],
    )];

    let layers = stack_layers(
        &samples,
        &keys(&["production", "export", "storage", "import"]),
        &style(),
    );

    assert_eq!(layers[0].datapoints[0].edges(), [0.0, 8.0]);
    assert_eq!(layers[1].datapoints[0].edges(), [-3.0, 0.0]);
    assert_eq!(layers[2].datapoints[0].edges(), [-5.0, -3.0]);
    assert_eq!(layers[3].datapoints[0].edges(), [8.0, 9.5]);
}

#[test]
fn positive_and_negative_bands_do_not_overlap() {
    let samples = vec![sample(0, &[("up", Some(4.0)), ("down", Some(-6.0))])];

    let layers = stack_layers(&samples, &keys(&["up", "down"]), &style());
    let up = &layers[0].datapoints[0];
    let down = &layers[1].datapoints[0];

    assert_eq!(up.baseline, 0.0);
    assert_eq!(down.top, 0.0);
    assert!(down.top <= up.baseline);
}

#[test]
fn missing_and_non_finite_values_are_zero_height_bands() {
    let samples = vec![
        sample(0, &[("a", Some(2.0)), ("b", None), ("c", Some(1.0))]),
        sample(1, &[("a", Some(2.0)), ("b", Some(f64::NAN)), ("c", Some(1.0))]),
        sample(2, &[("a", Some(2.0)), ("b", Some(0.0)), ("c", Some(1.0))]),
    ];

    let layers = stack_layers(&samples, &keys(&["a", "b", "c"]), &style());

    assert_eq!(edges(&layers[1]), vec![[2.0, 2.0]; 3]);
    assert_eq!(edges(&layers[2]), vec![[2.0, 3.0]; 3]);
}

#[test]
fn every_layer_has_one_point_per_sample() {
    let samples: Vec<_> = (0..50)
        .map(|i| {
            let v = f64::from(i as i32);
            sample(i, &[("a", Some(v)), ("b", Some(-v)), ("c", None)])
        })
        .collect();

    let layers = stack_layers(&samples, &keys(&["a", "b", "c"]), &style());

    assert_eq!(layers.len(), 3);
    for layer in &layers {
        assert_eq!(layer.datapoints.len(), samples.len());
        for (index, point) in layer.datapoints.iter().enumerate() {
            assert_eq!(point.index, index);
            assert!(Arc::ptr_eq(&point.sample, &samples[index]));
        }
    }
}

#[test]
fn stacking_twice_gives_identical_output() {
    let samples = vec![
        sample(0, &[("a", Some(1.0)), ("b", Some(-2.0))]),
        sample(1, &[("a", None), ("b", Some(3.0))]),
    ];
    let layer_keys = keys(&["a", "b"]);

    let first = stack_layers(&samples, &layer_keys, &style());
    let second = stack_layers(&samples, &layer_keys, &style());

    assert_eq!(first.len(), second.len());
    for (lhs, rhs) in first.iter().zip(&second) {
        assert_eq!(lhs.key, rhs.key);
        assert_eq!(lhs.datapoints, rhs.datapoints);
    }
}

#[test]
fn empty_samples_or_keys_produce_no_layers() {
    let samples = vec![sample(0, &[("a", Some(1.0))])];

    assert!(stack_layers(&[], &keys(&["a"]), &style()).is_empty());
    assert!(stack_layers(&samples, &[], &style()).is_empty());
}

#[test]
fn layers_carry_resolved_paint() {
    let samples = vec![sample(0, &[("a", Some(1.0))])];
    let style = LayerStyle::uniform(Color::RED).with_stroke(|_| Color::DARK_GRAY);

    let layers = stack_layers(&samples, &keys(&["a"]), &style);

    assert_eq!(layers[0].stroke, Some(Color::DARK_GRAY));
    assert!(matches!(layers[0].fill, Fill::Solid(color) if color == Color::RED));
    assert_eq!(layers[0].marker_fill.solid_color(), Some(Color::RED));
}
