use chart_layout::core::BandScale;

fn months() -> BandScale {
    BandScale::new(["Jan", "Feb", "Mar", "Apr", "May", "Jun"], (0.0, 500.0))
}

#[test]
fn categories_span_the_full_range() {
    let scale = months();

    assert_eq!(scale.apply("Jan"), Some(0.0));
    assert_eq!(scale.apply("Jun"), Some(500.0));
    assert_eq!(scale.apply("Feb"), Some(100.0));
    assert_eq!(scale.bandwidth(), 100.0);
}

#[test]
fn unknown_category_has_no_position() {
    let scale = months();

    assert_eq!(scale.apply("Dec"), None);
    assert_eq!(scale.index_of("Dec"), None);
    assert_eq!(scale.position_at(6), None);
}

#[test]
fn single_category_sits_at_the_midpoint() {
    let scale = BandScale::new(["Jan"], (0.0, 500.0));

    assert_eq!(scale.apply("Jan"), Some(250.0));
    assert_eq!(scale.bandwidth(), 500.0);
}

#[test]
fn empty_scale_has_zero_bandwidth() {
    let scale = BandScale::new(Vec::<String>::new(), (0.0, 500.0));

    assert!(scale.is_empty());
    assert_eq!(scale.bandwidth(), 0.0);
    assert_eq!(scale.nearest_category(10.0), None);
}

#[test]
fn outer_padding_shrinks_both_ends() {
    let scale = months().with_outer_padding(50.0);

    assert_eq!(scale.apply("Jan"), Some(50.0));
    assert_eq!(scale.apply("Jun"), Some(450.0));
    assert!((scale.bandwidth() - 80.0).abs() <= 1e-9);
}

#[test]
fn repeated_labels_keep_first_position() {
    let scale = BandScale::new(["A", "B", "A", "C"], (0.0, 200.0));

    assert_eq!(scale.len(), 3);
    assert_eq!(scale.categories().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    assert_eq!(scale.apply("A"), Some(0.0));
    assert_eq!(scale.apply("C"), Some(200.0));
}

#[test]
fn nearest_category_rounds_to_closest_center() {
    let scale = months();

    assert_eq!(scale.nearest_category(130.0), Some("Feb"));
    assert_eq!(scale.nearest_category(160.0), Some("Mar"));
    assert_eq!(scale.nearest_category(-40.0), Some("Jan"));
    assert_eq!(scale.nearest_category(9_000.0), Some("Jun"));
}

#[test]
fn positions_follow_an_inverted_range() {
    let scale = BandScale::new(["a", "b", "c"], (300.0, 100.0));

    assert_eq!(scale.apply("a"), Some(300.0));
    assert_eq!(scale.apply("b"), Some(200.0));
    assert_eq!(scale.apply("c"), Some(100.0));
    assert_eq!(scale.bandwidth(), 100.0);
}
