#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_init_is_a_noop_without_feature() {
    assert!(!chart_layout::telemetry::init_default_tracing());
}

#[cfg(feature = "telemetry")]
#[test]
fn tracing_init_only_succeeds_once() {
    let _ = chart_layout::telemetry::init_default_tracing();
    assert!(!chart_layout::telemetry::init_default_tracing());
}

#[test]
fn default_filter_enables_layout_passes() {
    let filter = chart_layout::telemetry::DEFAULT_FILTER;
    assert!(filter.split(',').any(|directive| directive == "chart_layout=debug"));
}
