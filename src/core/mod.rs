pub mod annotation;
pub mod band_scale;
pub mod bar_series;
pub mod curve;
pub mod line_series;
pub mod path;
pub mod pie;
pub mod scale;
pub mod types;

pub use annotation::{
    AnnotationConfig, AnnotationGeometry, AnnotationShape, CategoryRef, resolve_annotations,
};
pub use band_scale::BandScale;
pub use bar_series::{
    BAR_GROUP_GAP, BarGrouping, BarRect, bar_baseline, default_bar_width, project_bar_series,
};
pub use curve::{CurveKind, area_path, linear_curve, monotone_curve, monotone_tangents};
pub use line_series::{LineGeometry, project_line_series, project_points};
pub use path::PathBuilder;
pub use pie::{
    PIE_START_ANGLE, PieBreakdownEntry, PieLayout, PieSlice, PieSource, arc_path,
    compute_pie_slices, polar,
};
pub use scale::{DEFAULT_TICK_COUNT, LinearScale, nice_step};
pub use types::{ComputedPoint, DataPoint, Insets, PlotArea, Point, Toggle, Viewport};
