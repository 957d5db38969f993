use chart_layout::core::{
    CurveKind, Point, area_path, linear_curve, monotone_curve, monotone_tangents,
};

fn points(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().copied().map(Point::from).collect()
}

#[test]
fn linear_curve_handles_small_inputs() {
    assert_eq!(linear_curve(&[]), "");
    assert_eq!(linear_curve(&points(&[(1.0, 2.0)])), "M 1,2");
    assert_eq!(
        linear_curve(&points(&[(0.0, 0.0), (10.0, 10.0), (20.0, 5.5)])),
        "M 0,0 L 10,10 L 20,5.5"
    );
}

#[test]
fn negative_zero_is_printed_as_zero() {
    assert_eq!(linear_curve(&points(&[(-0.0, 1.0)])), "M 0,1");
}

#[test]
fn monotone_curve_falls_back_to_linear_below_three_points() {
    let two = points(&[(0.0, 10.0), (50.0, 20.0)]);
    assert_eq!(monotone_curve(&two), linear_curve(&two));
    assert_eq!(monotone_curve(&[]), "");
    assert_eq!(monotone_curve(&two[..1]), "M 0,10");
}

#[test]
fn monotone_curve_emits_one_cubic_per_segment() {
    let input = points(&[(0.0, 0.0), (10.0, 10.0), (20.0, 10.0), (30.0, 40.0)]);
    let path = monotone_curve(&input);

    assert!(path.starts_with("M 0,0 C "));
    assert_eq!(path.matches('C').count(), 3);
    assert!(path.ends_with(" 30,40"));
    assert_eq!(CurveKind::Monotone.path(&input), path);
}

#[test]
fn tangents_use_adjacent_secants_at_the_ends() {
    let input = points(&[(0.0, 0.0), (10.0, 10.0), (20.0, 10.0)]);
    assert_eq!(monotone_tangents(&input), vec![1.0, 0.0, 0.0]);
}

#[test]
fn tangents_are_clamped_to_three_times_the_smaller_secant() {
    let input = points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 10.0)]);
    assert_eq!(monotone_tangents(&input), vec![1.0, 3.0, 9.0]);
}

#[test]
fn tangents_average_similar_secants() {
    let input = points(&[(0.0, 0.0), (1.0, 2.0), (2.0, 6.0)]);
    assert_eq!(monotone_tangents(&input), vec![2.0, 3.0, 4.0]);
}

#[test]
fn tangents_flatten_at_local_extrema() {
    let input = points(&[(0.0, 0.0), (1.0, 5.0), (2.0, 0.0)]);
    assert_eq!(monotone_tangents(&input), vec![5.0, 0.0, -5.0]);
}

#[test]
fn coincident_x_yields_zero_secant() {
    let input = points(&[(0.0, 0.0), (0.0, 5.0), (1.0, 6.0)]);
    assert_eq!(monotone_tangents(&input), vec![0.0, 0.0, 1.0]);
}

#[test]
fn tangents_for_tiny_inputs() {
    assert!(monotone_tangents(&[]).is_empty());
    assert_eq!(monotone_tangents(&points(&[(3.0, 4.0)])), vec![0.0]);
    assert_eq!(
        monotone_tangents(&points(&[(0.0, 0.0), (2.0, 4.0)])),
        vec![2.0, 2.0]
    );
}

#[test]
fn area_path_closes_down_to_the_baseline() {
    let input = points(&[(0.0, 0.0), (10.0, 10.0), (20.0, 5.0)]);
    assert_eq!(
        area_path(&input, 100.0, CurveKind::Linear),
        "M 0,0 L 10,10 L 20,5 L 20,100 L 0,100 Z"
    );
    assert_eq!(area_path(&[], 100.0, CurveKind::Linear), "");

    let smooth = area_path(&input, 100.0, CurveKind::Monotone);
    assert!(smooth.starts_with("M 0,0 C "));
    assert!(smooth.ends_with(" L 20,100 L 0,100 Z"));
}
