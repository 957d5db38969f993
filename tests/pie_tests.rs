use std::f64::consts::{FRAC_PI_2, PI, TAU};

use approx::assert_relative_eq;
use chart_layout::api::{ChartConfig, ChartGeometry, PieLabelStyle, PieStyle, SeriesConfig};
use chart_layout::core::{
    DataPoint, Insets, PIE_START_ANGLE, PieLayout, PieSource, Point, Toggle, Viewport, arc_path,
    compute_pie_slices,
};
use chart_layout::compute_layout;

fn layout() -> PieLayout {
    PieLayout {
        center: Point::new(100.0, 100.0),
        outer_radius: 50.0,
        inner_radius: 0.0,
        pad_angle: 0.0,
        label_offset: None,
    }
}

fn single(value: f64) -> Vec<DataPoint> {
    vec![DataPoint::new("total", value)]
}

#[test]
fn slices_split_the_full_turn_by_value() {
    let a = single(350.0);
    let b = single(280.0);
    let c = single(120.0);
    let sources = [
        PieSource { series_index: 0, name: "A", color: "#f00", data: &a },
        PieSource { series_index: 1, name: "B", color: "#0f0", data: &b },
        PieSource { series_index: 2, name: "C", color: "#00f", data: &c },
    ];

    let slices = compute_pie_slices(&sources, layout());

    assert_eq!(slices.len(), 3);
    let percent: f64 = slices.iter().map(|slice| slice.percent).sum();
    let spans: f64 = slices.iter().map(|slice| slice.span()).sum();
    assert_relative_eq!(percent, 100.0, epsilon = 1e-9);
    assert_relative_eq!(spans, TAU, epsilon = 1e-9);
    assert_relative_eq!(slices[0].percent, 350.0 / 750.0 * 100.0, epsilon = 1e-9);
    assert_relative_eq!(slices[2].percent, 16.0, epsilon = 1e-9);

    assert_eq!(slices[0].start_angle, PIE_START_ANGLE);
    assert_eq!(slices[0].start_angle, -FRAC_PI_2);
    for pair in slices.windows(2) {
        assert!((pair[0].end_angle - pair[1].start_angle).abs() <= 1e-12);
    }
    assert!((slices[2].end_angle - (-FRAC_PI_2 + TAU)).abs() <= 1e-9);
}

#[test]
fn slice_value_is_the_sum_of_series_points_with_breakdown() {
    let detailed = vec![
        DataPoint::new("North", 10.0),
        DataPoint::new("South", 15.0),
        DataPoint::new("North", 5.0),
    ];
    let plain = single(30.0);
    let sources = [
        PieSource { series_index: 0, name: "Regions", color: "#111", data: &detailed },
        PieSource { series_index: 1, name: "Other", color: "#222", data: &plain },
    ];

    let slices = compute_pie_slices(&sources, layout());

    assert_eq!(slices[0].value, 30.0);
    assert_relative_eq!(slices[0].percent, 50.0, epsilon = 1e-9);
    let breakdown = slices[0].breakdown.as_ref().expect("breakdown");
    assert_eq!(breakdown.len(), 3);
    assert_eq!(breakdown[2].label, "North");
    assert_eq!(breakdown[2].value, 5.0);
    assert!(slices[1].breakdown.is_none());
}

#[test]
fn zero_total_yields_no_slices() {
    let empty = single(0.0);
    let none: Vec<DataPoint> = Vec::new();
    let sources = [
        PieSource { series_index: 0, name: "A", color: "#f00", data: &empty },
        PieSource { series_index: 1, name: "B", color: "#0f0", data: &none },
    ];

    assert!(compute_pie_slices(&sources, layout()).is_empty());
    assert!(compute_pie_slices(&[], layout()).is_empty());
}

#[test]
fn large_arc_flag_follows_span() {
    let big = single(700.0);
    let small = single(100.0);
    let sources = [
        PieSource { series_index: 0, name: "Big", color: "#f00", data: &big },
        PieSource { series_index: 1, name: "Small", color: "#0f0", data: &small },
    ];

    let slices = compute_pie_slices(&sources, layout());

    assert!(slices[0].span() > PI);
    assert!(slices[0].path.contains(" A 50,50 0 1,1 "));
    assert!(slices[1].path.contains(" A 50,50 0 0,1 "));
    assert!(slices[0].path.ends_with(" L 100,100 Z"));
}

#[test]
fn single_slice_draws_a_full_circle() {
    let only = single(42.0);
    let sources = [PieSource { series_index: 0, name: "Only", color: "#f00", data: &only }];

    let slices = compute_pie_slices(&sources, layout());

    assert_eq!(slices.len(), 1);
    assert_relative_eq!(slices[0].percent, 100.0);
    assert!(slices[0].path.starts_with("M 100,50 A 50,50 0 0,1 "));
    assert_eq!(slices[0].path.matches('A').count(), 2);
    assert!(slices[0].path.ends_with('Z'));
}

#[test]
fn donut_paths_trace_the_inner_ring_backwards() {
    let a = single(1.0);
    let b = single(1.0);
    let c = single(1.0);
    let sources = [
        PieSource { series_index: 0, name: "A", color: "#f00", data: &a },
        PieSource { series_index: 1, name: "B", color: "#0f0", data: &b },
        PieSource { series_index: 2, name: "C", color: "#00f", data: &c },
    ];
    let donut = PieLayout {
        inner_radius: 25.0,
        ..layout()
    };

    let slices = compute_pie_slices(&sources, donut);

    for slice in &slices {
        assert_eq!(slice.path.matches('A').count(), 2);
        assert!(slice.path.contains(" A 25,25 0 0,0 "));
        assert!(!slice.path.contains("L 100,100"));
    }
}

#[test]
fn pad_angle_is_split_between_neighbours() {
    let a = single(1.0);
    let b = single(1.0);
    let sources = [
        PieSource { series_index: 0, name: "A", color: "#f00", data: &a },
        PieSource { series_index: 1, name: "B", color: "#0f0", data: &b },
    ];
    let padded = PieLayout {
        pad_angle: 0.1,
        ..layout()
    };

    let slices = compute_pie_slices(&sources, padded);

    assert_relative_eq!(slices[0].span(), PI - 0.1, epsilon = 1e-12);
    assert_relative_eq!(slices[0].start_angle, -FRAC_PI_2 + 0.05, epsilon = 1e-12);
    assert_relative_eq!(
        slices[1].start_angle - slices[0].end_angle,
        0.1,
        epsilon = 1e-12
    );
    assert_relative_eq!(slices[0].mid_angle, 0.0, epsilon = 1e-12);
}

#[test]
fn tiny_slices_collapse_instead_of_inverting() {
    let big = single(1_000.0);
    let tiny = single(0.001);
    let sources = [
        PieSource { series_index: 0, name: "Big", color: "#f00", data: &big },
        PieSource { series_index: 1, name: "Tiny", color: "#0f0", data: &tiny },
    ];
    let padded = PieLayout {
        pad_angle: 0.2,
        ..layout()
    };

    let slices = compute_pie_slices(&sources, padded);

    assert_eq!(slices[1].span(), 0.0);
    assert_eq!(slices[1].path, "");
}

#[test]
fn label_anchors_sit_outside_the_outer_radius() {
    let a = single(3.0);
    let b = single(1.0);
    let sources = [
        PieSource { series_index: 0, name: "A", color: "#f00", data: &a },
        PieSource { series_index: 1, name: "B", color: "#0f0", data: &b },
    ];
    let labelled = PieLayout {
        label_offset: Some(12.0),
        ..layout()
    };

    for slice in compute_pie_slices(&sources, labelled) {
        let anchor = slice.label_anchor.expect("label anchor");
        let distance = (anchor.x - 100.0).hypot(anchor.y - 100.0);
        assert_relative_eq!(distance, 62.0, epsilon = 1e-9);
    }
}

#[test]
fn arc_path_rejects_empty_spans() {
    let center = Point::new(0.0, 0.0);
    assert_eq!(arc_path(center, 0.0, 10.0, 1.0, 1.0), "");
    assert_eq!(arc_path(center, 0.0, 10.0, 2.0, 1.0), "");
    assert_eq!(arc_path(center, 0.0, 0.0, 0.0, 1.0), "");
}

#[test]
fn pie_mode_sizes_the_pie_from_the_plot_area() {
    let config = ChartConfig::new(vec![
        SeriesConfig::pie("Desktop", "#4e79a7", single(350.0)).with_pie_style(PieStyle {
            inner_radius_ratio: 0.5,
            labels: Toggle::Enabled(PieLabelStyle::default()),
            ..PieStyle::default()
        }),
        SeriesConfig::pie("Mobile", "#f28e2b", single(280.0)),
        SeriesConfig::pie("Tablet", "#e15759", single(120.0)),
    ])
    .with_padding(Insets::uniform(0.0));

    let geometry = compute_layout(&config, Viewport::new(400, 300)).expect("pie layout");

    let ChartGeometry::Pie(pie) = geometry else {
        panic!("expected pie geometry");
    };
    assert_eq!(pie.layout.center, Point::new(200.0, 150.0));
    assert_relative_eq!(pie.layout.outer_radius, 120.0, epsilon = 1e-9);
    assert_relative_eq!(pie.layout.inner_radius, 60.0, epsilon = 1e-9);
    assert_eq!(pie.layout.label_offset, Some(12.0));
    assert_eq!(pie.slices.len(), 3);
    assert_eq!(pie.slices[1].name, "Mobile");
    assert_eq!(pie.slices[2].series_index, 2);
}

#[test]
fn pie_mode_with_zero_total_has_no_slices() {
    let config = ChartConfig::new(vec![SeriesConfig::pie("Empty", "#000", single(0.0))]);

    let geometry = compute_layout(&config, Viewport::new(400, 300)).expect("pie layout");

    let pie = geometry.as_pie().expect("pie geometry");
    assert!(pie.slices.is_empty());
}
