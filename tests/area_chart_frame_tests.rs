use approx::assert_abs_diff_eq;
use area_graph::api::{AreaChart, AreaChartConfig};
use area_graph::core::{Color, LayerStyle, PixelPoint, Sample, Viewport};
use area_graph::render::{BandPaint, NullRenderer};
use chrono::DateTime;

fn mix_samples() -> Vec<Sample> {
    [(4.0, 2.0, -1.0), (6.0, 0.0, -3.0), (2.0, 2.0, 0.0)]
        .iter()
        .enumerate()
        .map(|(i, (coal, wind, export))| {
            let datetime = DateTime::from_timestamp(i as i64 * 3600, 0).expect("valid timestamp");
            Sample::new(datetime)
                .with_value("coal", *coal)
                .with_value("wind", *wind)
                .with_value("export", *export)
        })
        .collect()
}

fn mix_chart() -> AreaChart<NullRenderer> {
    let mut chart = AreaChart::new(
        NullRenderer::default(),
        AreaChartConfig::new(Viewport::new(400.0, 100.0)),
    )
    .expect("chart init");
    chart.set_samples(mix_samples());
    chart.set_layer_keys(vec!["coal".to_owned(), "wind".to_owned(), "export".to_owned()]);
    chart.set_layer_style(
        LayerStyle::new(|key| match key {
            "coal" => Color::rgb(0.2, 0.2, 0.2).into(),
            "wind" => Color::rgb(0.4, 0.7, 0.9).into(),
            _ => Color::rgb(0.6, 0.6, 0.6).into(),
        })
        .with_stroke(|_| Color::DARK_GRAY),
    );
    chart
}

#[test]
fn frame_projects_every_band_bottom_to_top() {
    let mut chart = mix_chart();
    let frame = chart.frame().expect("frame");

    let keys: Vec<&str> = frame.bands.iter().map(|band| band.key.as_str()).collect();
    assert_eq!(keys, vec!["coal", "wind", "export"]);
    assert!(frame.hover_line_x.is_none());
    assert!(frame.marker.is_none());

    let scales = chart.scales();
    let value_scale = scales.value;
    let wind = &frame.bands[1];
    assert_eq!(wind.stroke, Some(Color::DARK_GRAY));
    assert_eq!(wind.paint, BandPaint::Solid(Color::rgb(0.4, 0.7, 0.9)));
    assert_eq!(wind.geometry.top_line.len(), 3);
    assert_eq!(wind.geometry.fill_polygon.len(), 7);

    assert_abs_diff_eq!(wind.geometry.top_line[0].x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(wind.geometry.top_line[1].x, 200.0, epsilon = 1e-9);
    assert_abs_diff_eq!(wind.geometry.top_line[2].x, 400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(
        wind.geometry.top_line[0].y,
        value_scale.value_to_pixel(6.0),
        epsilon = 1e-9
    );
    // Baseline walks back from the last sample: wind sits on coal.
    assert_abs_diff_eq!(
        wind.geometry.fill_polygon[3].y,
        value_scale.value_to_pixel(2.0),
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        wind.geometry.fill_polygon[5].y,
        value_scale.value_to_pixel(4.0),
        epsilon = 1e-9
    );
    assert_eq!(wind.geometry.fill_polygon[6], wind.geometry.fill_polygon[0]);
}

#[test]
fn negative_band_is_drawn_below_the_axis() {
    let mut chart = mix_chart();
    let frame = chart.frame().expect("frame");
    let value_scale = chart.scales().value;
    let zero_y = value_scale.value_to_pixel(0.0);

    let export = &frame.bands[2];
    assert_abs_diff_eq!(export.geometry.top_line[1].y, zero_y, epsilon = 1e-9);
    assert!(export.geometry.fill_polygon[4].y > zero_y);
}

#[test]
fn frame_carries_hover_line_and_marker_for_focus() {
    let mut chart = mix_chart();
    chart.background_pointer_move(210.0);

    let frame = chart.frame().expect("frame");
    assert_abs_diff_eq!(frame.hover_line_x.expect("hover line"), 200.0, epsilon = 1e-9);
    let marker = frame.marker.expect("marker");
    let value_scale = chart.scales().value;
    assert_eq!(
        marker.position,
        PixelPoint::new(200.0, value_scale.value_to_pixel(6.0))
    );
    assert_eq!(marker.fill, Color::rgb(0.2, 0.2, 0.2));
}

#[test]
fn render_validates_and_counts_through_renderer() {
    let mut chart = mix_chart();
    chart.layer_pointer_move(1, 0.0);

    assert!(chart.render().expect("render"));
    let renderer = chart.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_band_count, 3);
    assert_eq!(renderer.last_vertex_count, 21);
    assert!(renderer.last_had_marker);
}

#[test]
fn nothing_is_rendered_without_layers_or_viewport() {
    let mut empty = AreaChart::new(
        NullRenderer::default(),
        AreaChartConfig::new(Viewport::new(400.0, 100.0)),
    )
    .expect("chart init");
    empty.set_layer_keys(vec!["coal".to_owned()]);
    assert!(empty.frame().is_none());
    assert!(!empty.render().expect("render"));
    assert_eq!(empty.into_renderer().frames_rendered, 0);

    let mut collapsed = mix_chart();
    collapsed
        .set_viewport(Viewport::new(0.0, 0.0))
        .expect("zero viewport is allowed");
    assert!(collapsed.view().is_none());
    assert!(!collapsed.render().expect("render"));
}

#[test]
fn invalid_viewport_is_rejected() {
    let mut chart = mix_chart();
    assert!(chart.set_viewport(Viewport::new(f64::NAN, 10.0)).is_err());
    assert!(chart.set_viewport(Viewport::new(-1.0, 10.0)).is_err());
    assert_eq!(chart.viewport(), Viewport::new(400.0, 100.0));
}
